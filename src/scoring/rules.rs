//! Fixed scoring rules
//!
//! Point weights, status bands, and message wording are fixed business
//! rules, not configuration. Each category carries its own band thresholds
//! and feedback strings so the engine loop stays category-agnostic and the
//! table can be checked on its own.

use crate::scoring::report::ScoreStatus;

/// Status thresholds for one category. Scores at or above `good` map to
/// [`ScoreStatus::Good`], at or above `warning` to warning, everything else
/// to error.
#[derive(Debug, Clone, Copy)]
pub struct StatusBands {
    pub good: u32,
    pub warning: u32,
}

impl StatusBands {
    pub fn classify(&self, score: u32) -> ScoreStatus {
        if score >= self.good {
            ScoreStatus::Good
        } else if score >= self.warning {
            ScoreStatus::Warning
        } else {
            ScoreStatus::Error
        }
    }
}

/// Rule record for one scoring category: maximum points, band thresholds,
/// and the feedback line per outcome. A category with zero contributing data
/// takes the distinct `missing_*` path instead of the banded one.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub name: &'static str,
    pub max_score: u32,
    pub bands: StatusBands,
    pub good_feedback: &'static str,
    pub warning_feedback: &'static str,
    pub error_feedback: &'static str,
    pub missing_feedback: &'static str,
    pub missing_tip: &'static str,
}

pub const CONTACT: CategoryRule = CategoryRule {
    name: "Contact Information",
    max_score: 15,
    bands: StatusBands { good: 13, warning: 10 },
    good_feedback: "Complete contact information",
    warning_feedback: "Missing some contact details",
    error_feedback: "Incomplete contact information",
    // Contact has no separate zero-data path; an empty contact block reads
    // as incomplete.
    missing_feedback: "Incomplete contact information",
    missing_tip: "Add name, email, phone, and location",
};

pub const SUMMARY: CategoryRule = CategoryRule {
    name: "Professional Summary",
    max_score: 20,
    bands: StatusBands { good: 18, warning: 12 },
    good_feedback: "Strong professional summary",
    warning_feedback: "Good summary, could be improved",
    error_feedback: "Summary needs improvement",
    missing_feedback: "Missing professional summary",
    missing_tip: "Add a 2-3 sentence professional summary",
};

pub const EXPERIENCE: CategoryRule = CategoryRule {
    name: "Work Experience",
    max_score: 30,
    bands: StatusBands { good: 25, warning: 15 },
    good_feedback: "Excellent work experience section",
    warning_feedback: "Good experience, needs more detail",
    error_feedback: "Experience section needs improvement",
    missing_feedback: "No work experience added",
    missing_tip: "Add at least 2-3 relevant positions",
};

pub const EDUCATION: CategoryRule = CategoryRule {
    name: "Education",
    max_score: 15,
    bands: StatusBands { good: 12, warning: 7 },
    good_feedback: "Complete education information",
    warning_feedback: "Education section incomplete",
    error_feedback: "Missing education",
    missing_feedback: "No education added",
    missing_tip: "Add at least your highest degree",
};

pub const SKILLS: CategoryRule = CategoryRule {
    name: "Skills & Keywords",
    max_score: 20,
    bands: StatusBands { good: 16, warning: 10 },
    good_feedback: "Strong skills section with keywords",
    warning_feedback: "Add more relevant skills",
    error_feedback: "Not enough skills listed",
    missing_feedback: "No skills added",
    missing_tip: "Add technical and professional skills",
};

/// All category rules in report order.
pub const ALL: [&CategoryRule; 5] = [&CONTACT, &SUMMARY, &EXPERIENCE, &EDUCATION, &SKILLS];

/// Fixed sum of all category maxima.
pub const TOTAL_MAX_SCORE: u32 = 100;

/// Action verbs looked for in the professional summary.
pub const SUMMARY_ACTION_VERBS: &str =
    r"(?i)(achieved|managed|led|developed|implemented|increased|reduced)";

/// Action verbs looked for in experience achievements (substring match,
/// case-insensitive).
pub const ACHIEVEMENT_ACTION_VERBS: [&str; 9] = [
    "achieved",
    "managed",
    "led",
    "developed",
    "implemented",
    "increased",
    "reduced",
    "created",
    "designed",
];

/// Numbers, percentages, or dollar amounts inside an achievement bullet.
pub const METRIC_PATTERN: &str = r"\d+[%$]?|\$\d+";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_maxima_sum_to_total() {
        let sum: u32 = ALL.iter().map(|rule| rule.max_score).sum();
        assert_eq!(sum, TOTAL_MAX_SCORE);
    }

    #[test]
    fn test_bands_classify_in_order() {
        let bands = StatusBands { good: 25, warning: 15 };
        assert_eq!(bands.classify(30), ScoreStatus::Good);
        assert_eq!(bands.classify(25), ScoreStatus::Good);
        assert_eq!(bands.classify(24), ScoreStatus::Warning);
        assert_eq!(bands.classify(15), ScoreStatus::Warning);
        assert_eq!(bands.classify(14), ScoreStatus::Error);
        assert_eq!(bands.classify(0), ScoreStatus::Error);
    }

    #[test]
    fn test_every_category_has_distinct_missing_message() {
        // All but contact distinguish "nothing entered" from "entered but weak".
        for rule in [&SUMMARY, &EXPERIENCE, &EDUCATION, &SKILLS] {
            assert_ne!(rule.missing_feedback, rule.error_feedback);
        }
    }
}
