//! Scoring engine
//!
//! `score` is a pure function over the document: deterministic, no side
//! effects, and total. Missing or empty fields are valid inputs, never
//! errors. Five fixed categories are evaluated independently and combined by
//! summation; see [`crate::scoring::rules`] for the point weights and bands.

use crate::model::resume::{
    ContactInfo, EducationEntry, ExperienceEntry, ResumeDocument, SkillSet,
};
use crate::scoring::report::{CategoryScore, ScoreReport, ScoreStatus};
use crate::scoring::rules::{self, CategoryRule};
use aho_corasick::AhoCorasick;
use regex::Regex;

pub struct ScoreEngine {
    metric_pattern: Regex,
    summary_verb_pattern: Regex,
    achievement_verbs: AhoCorasick,
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreEngine {
    pub fn new() -> Self {
        let metric_pattern = Regex::new(rules::METRIC_PATTERN).expect("Invalid metric regex");
        let summary_verb_pattern =
            Regex::new(rules::SUMMARY_ACTION_VERBS).expect("Invalid action verb regex");
        let achievement_verbs = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(rules::ACHIEVEMENT_ACTION_VERBS)
            .expect("Invalid action verb patterns");

        Self {
            metric_pattern,
            summary_verb_pattern,
            achievement_verbs,
        }
    }

    /// Score the whole document. Categories appear in fixed order; the
    /// aggregate is round(100 * total / 100).
    pub fn score(&self, doc: &ResumeDocument) -> ScoreReport {
        let categories = vec![
            self.score_contact(&doc.contact),
            self.score_summary(&doc.summary),
            self.score_experience(&doc.experience),
            self.score_education(&doc.education),
            self.score_skills(&doc.skills),
        ];

        let total: u32 = categories.iter().map(|c| c.score).sum();
        let max: u32 = categories.iter().map(|c| c.max_score).sum();
        debug_assert_eq!(max, rules::TOTAL_MAX_SCORE);
        let overall_percentage = ((total as f64 / max as f64) * 100.0).round() as u8;

        ScoreReport {
            categories,
            overall_percentage,
        }
    }

    fn score_contact(&self, contact: &ContactInfo) -> CategoryScore {
        let rule = &rules::CONTACT;
        let mut points = 0;
        if !contact.full_name.is_empty() {
            points += 5;
        }
        if !contact.email.is_empty() {
            points += 5;
        }
        if !contact.phone.is_empty() {
            points += 3;
        }
        if !contact.location.is_empty() {
            points += 2;
        }

        let status = rule.bands.classify(points);
        let mut tips = Vec::new();
        if status == ScoreStatus::Warning {
            tips.push("Consider adding LinkedIn profile".to_string());
        } else if status == ScoreStatus::Error {
            tips.push(rule.missing_tip.to_string());
        }

        banded(rule, points, status, tips)
    }

    fn score_summary(&self, summary: &str) -> CategoryScore {
        let rule = &rules::SUMMARY;
        if summary.is_empty() {
            return missing(rule);
        }

        let word_count = summary.split_whitespace().count();
        let has_numbers = summary.chars().any(|c| c.is_ascii_digit());
        let has_action_words = self.summary_verb_pattern.is_match(summary);

        // Base points for having a summary at all.
        let mut points = 10;
        if (30..=80).contains(&word_count) {
            points += 5;
        }
        if has_numbers {
            points += 3;
        }
        if has_action_words {
            points += 2;
        }

        let status = rule.bands.classify(points);
        let mut tips = Vec::new();
        match status {
            ScoreStatus::Warning => {
                if !has_numbers {
                    tips.push("Add quantifiable achievements".to_string());
                }
                if word_count < 30 {
                    tips.push("Expand to 30-80 words".to_string());
                }
            }
            ScoreStatus::Error => {
                tips.push("Include specific achievements and metrics".to_string());
            }
            ScoreStatus::Good => {}
        }

        banded(rule, points, status, tips)
    }

    fn score_experience(&self, experience: &[ExperienceEntry]) -> CategoryScore {
        let rule = &rules::EXPERIENCE;
        if experience.is_empty() {
            return missing(rule);
        }

        let entry_count = experience.len() as u32;
        let mut points = entry_count * 5;

        let has_metrics = experience
            .iter()
            .flat_map(|e| e.filled_achievements())
            .any(|a| self.metric_pattern.is_match(a));
        if has_metrics {
            points += 10;
        }

        let has_action_verbs = experience
            .iter()
            .flat_map(|e| e.filled_achievements())
            .any(|a| self.achievement_verbs.is_match(a));
        if has_action_verbs {
            points += 5;
        }

        let total_achievements: usize = experience
            .iter()
            .map(|e| e.filled_achievements().count())
            .sum();
        let enough_detail = total_achievements as u32 >= entry_count * 3;
        if enough_detail {
            points += 5;
        }

        let points = points.min(rule.max_score);
        let status = rule.bands.classify(points);
        let mut tips = Vec::new();
        match status {
            ScoreStatus::Warning => {
                if !has_metrics {
                    tips.push("Add metrics and percentages to achievements".to_string());
                }
                if !enough_detail {
                    tips.push("Add 3-5 achievements per position".to_string());
                }
            }
            ScoreStatus::Error => {
                tips.push("Add quantifiable achievements with metrics".to_string());
                tips.push("Start each bullet with action verbs".to_string());
            }
            ScoreStatus::Good => {}
        }

        banded(rule, points, status, tips)
    }

    fn score_education(&self, education: &[EducationEntry]) -> CategoryScore {
        let rule = &rules::EDUCATION;
        if education.is_empty() {
            return missing(rule);
        }

        let mut points = education.len() as u32 * 7;
        if education.iter().all(|e| e.is_complete()) {
            points += 5;
        }

        let points = points.min(rule.max_score);
        let status = rule.bands.classify(points);
        let mut tips = Vec::new();
        match status {
            ScoreStatus::Warning => {
                tips.push("Fill in all degree, institution, and date fields".to_string());
            }
            ScoreStatus::Error => {
                tips.push("Add your educational background".to_string());
            }
            ScoreStatus::Good => {}
        }

        banded(rule, points, status, tips)
    }

    fn score_skills(&self, skills: &SkillSet) -> CategoryScore {
        let rule = &rules::SKILLS;
        if skills.total() == 0 {
            return missing(rule);
        }

        let mut points = 0;
        if skills.technical.len() >= 5 {
            points += 8;
        } else if skills.technical.len() >= 3 {
            points += 5;
        }
        if skills.soft.len() >= 4 {
            points += 6;
        } else if skills.soft.len() >= 2 {
            points += 3;
        }
        if !skills.certifications.is_empty() {
            points += 6;
        }

        let status = rule.bands.classify(points);
        let mut tips = Vec::new();
        match status {
            ScoreStatus::Warning => {
                if skills.technical.len() < 5 {
                    tips.push("Add more technical skills (aim for 5-8)".to_string());
                }
                if skills.certifications.is_empty() {
                    tips.push("Add relevant certifications if you have them".to_string());
                }
            }
            ScoreStatus::Error => {
                tips.push("Add 5-8 technical skills".to_string());
                tips.push("Add 3-5 professional skills".to_string());
            }
            ScoreStatus::Good => {}
        }

        banded(rule, points, status, tips)
    }
}

/// Score a document with a fresh default engine.
pub fn score(doc: &ResumeDocument) -> ScoreReport {
    ScoreEngine::new().score(doc)
}

fn banded(rule: &CategoryRule, points: u32, status: ScoreStatus, tips: Vec<String>) -> CategoryScore {
    let feedback = match status {
        ScoreStatus::Good => rule.good_feedback,
        ScoreStatus::Warning => rule.warning_feedback,
        ScoreStatus::Error => rule.error_feedback,
    };
    CategoryScore {
        category: rule.name.to_string(),
        score: points,
        max_score: rule.max_score,
        status,
        feedback: feedback.to_string(),
        tips,
    }
}

/// Zero-data path: distinct from the banded "present but weak" error.
fn missing(rule: &CategoryRule) -> CategoryScore {
    CategoryScore {
        category: rule.name.to_string(),
        score: 0,
        max_score: rule.max_score,
        status: ScoreStatus::Error,
        feedback: rule.missing_feedback.to_string(),
        tips: vec![rule.missing_tip.to_string()],
    }
}
