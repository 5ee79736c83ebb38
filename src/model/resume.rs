//! Resume document structures
//!
//! The document is a plain value: every field is always present, absence is
//! an empty string or empty list. Formatting code can rely on that and never
//! has to handle missing data. Field names serialize in camelCase so saved
//! documents match the JSON shape produced by the original web editor.

use serde::{Deserialize, Serialize};

/// Visual template applied when rendering a resume. Cosmetic only; scoring
/// and export content are template-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Professional,
    Modern,
    Executive,
    Minimal,
}

impl Default for TemplateKind {
    fn default() -> Self {
        TemplateKind::Professional
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateKind::Professional => write!(f, "professional"),
            TemplateKind::Modern => write!(f, "modern"),
            TemplateKind::Executive => write!(f, "executive"),
            TemplateKind::Minimal => write!(f, "minimal"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub website: String,
}

/// One position in the work history. `id` is opaque and unique within the
/// document; it identifies the entry for targeted update/delete and has no
/// bearing on ordering (list order is display order).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Year-month value ("YYYY-MM") or empty.
    pub start_date: String,
    /// Year-month value ("YYYY-MM") or empty. Ignored for display when
    /// `current` is set.
    pub end_date: String,
    pub current: bool,
    /// Free-text bullet points. Blank entries are permitted here and
    /// filtered out at scoring/export time.
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub location: String,
    /// Year-month value ("YYYY-MM") or empty.
    pub graduation_date: String,
    pub gpa: String,
    pub honors: String,
}

/// Three independent skill lists. Order-preserving; duplicates are not
/// structurally prevented.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillSet {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub certifications: Vec<String>,
}

impl SkillSet {
    pub fn total(&self) -> usize {
        self.technical.len() + self.soft.len() + self.certifications.len()
    }
}

/// Root aggregate: one in-memory resume per editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    pub template: TemplateKind,
    pub font: String,
    pub contact: ContactInfo,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: SkillSet,
}

impl Default for ResumeDocument {
    fn default() -> Self {
        Self {
            template: TemplateKind::default(),
            font: "Arial".to_string(),
            contact: ContactInfo::default(),
            summary: String::new(),
            experience: Vec::new(),
            education: Vec::new(),
            skills: SkillSet::default(),
        }
    }
}

impl ExperienceEntry {
    /// Achievements with blank lines removed, in original order.
    pub fn filled_achievements(&self) -> impl Iterator<Item = &str> {
        self.achievements
            .iter()
            .map(|a| a.as_str())
            .filter(|a| !a.trim().is_empty())
    }
}

impl EducationEntry {
    /// True when degree, institution, and graduation date are all filled in.
    pub fn is_complete(&self) -> bool {
        !self.degree.is_empty() && !self.institution.is_empty() && !self.graduation_date.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_is_renderable() {
        let doc = ResumeDocument::default();
        assert_eq!(doc.template, TemplateKind::Professional);
        assert_eq!(doc.font, "Arial");
        assert!(doc.contact.full_name.is_empty());
        assert!(doc.experience.is_empty());
        assert_eq!(doc.skills.total(), 0);
    }

    #[test]
    fn test_json_round_trip_uses_camel_case() {
        let mut doc = ResumeDocument::default();
        doc.contact.full_name = "Jane Doe".to_string();
        doc.experience.push(ExperienceEntry {
            id: "exp-1".to_string(),
            title: "Engineer".to_string(),
            start_date: "2020-01".to_string(),
            current: true,
            ..Default::default()
        });

        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("\"fullName\":\"Jane Doe\""));
        assert!(json.contains("\"startDate\":\"2020-01\""));

        let back: ResumeDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let doc: ResumeDocument =
            serde_json::from_str(r#"{"contact":{"fullName":"Jo"},"summary":"Hi"}"#).unwrap();
        assert_eq!(doc.contact.full_name, "Jo");
        assert_eq!(doc.summary, "Hi");
        assert_eq!(doc.template, TemplateKind::Professional);
        assert!(doc.education.is_empty());
    }

    #[test]
    fn test_filled_achievements_filters_blanks() {
        let entry = ExperienceEntry {
            achievements: vec![
                "Shipped the thing".to_string(),
                "   ".to_string(),
                String::new(),
                "Kept it running".to_string(),
            ],
            ..Default::default()
        };
        let filled: Vec<&str> = entry.filled_achievements().collect();
        assert_eq!(filled, vec!["Shipped the thing", "Kept it running"]);
    }

    #[test]
    fn test_education_completeness() {
        let mut entry = EducationEntry {
            degree: "BSc".to_string(),
            institution: "State".to_string(),
            graduation_date: "2019-06".to_string(),
            ..Default::default()
        };
        assert!(entry.is_complete());
        entry.graduation_date.clear();
        assert!(!entry.is_complete());
    }
}
