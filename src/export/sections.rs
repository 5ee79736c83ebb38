//! Shared document-to-sections normalization
//!
//! All exporters render the same section order (contact, summary,
//! experience, education, skills) with the same filtering and date rules.
//! This module produces that normalized view once so the renderers only
//! differ in arrangement and styling.

use crate::model::resume::ResumeDocument;
use chrono::NaiveDate;

/// Delimiter between sibling fields on one line ("email | phone | city").
pub const FIELD_DELIMITER: &str = " | ";

/// End-date text for a position held today.
pub const PRESENT: &str = "Present";

#[derive(Debug, Clone)]
pub struct ExperienceView {
    pub title: String,
    pub company: String,
    pub location: String,
    /// "Mar 2021 - Present" or "Jan 2019 - Feb 2021".
    pub date_range: String,
    /// Blank bullets already filtered out.
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct EducationView {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub graduation: String,
    /// "GPA: 3.8 | Magna Cum Laude", or empty when neither is set.
    pub extras: String,
}

#[derive(Debug, Clone)]
pub struct SkillGroup {
    pub label: &'static str,
    pub items: String,
}

/// Normalized view of a resume, ready for any renderer.
#[derive(Debug, Clone)]
pub struct ResumeSections {
    pub full_name: String,
    /// Non-empty of email, phone, location joined with [`FIELD_DELIMITER`].
    pub contact_line: String,
    pub linkedin: String,
    pub website: String,
    /// Non-empty of linkedin, website joined with [`FIELD_DELIMITER`].
    pub links_line: String,
    pub summary: Option<String>,
    pub experience: Vec<ExperienceView>,
    pub education: Vec<EducationView>,
    /// Only non-empty skill groups, in fixed label order.
    pub skills: Vec<SkillGroup>,
}

pub fn normalize(doc: &ResumeDocument) -> ResumeSections {
    let contact = &doc.contact;
    let contact_line = join_non_empty(&[&contact.email, &contact.phone, &contact.location]);
    let links_line = join_non_empty(&[&contact.linkedin, &contact.website]);

    let summary = if doc.summary.is_empty() {
        None
    } else {
        Some(doc.summary.clone())
    };

    let experience = doc
        .experience
        .iter()
        .map(|exp| ExperienceView {
            title: exp.title.clone(),
            company: exp.company.clone(),
            location: exp.location.clone(),
            date_range: format_date_range(&exp.start_date, &exp.end_date, exp.current),
            achievements: exp.filled_achievements().map(str::to_string).collect(),
        })
        .collect();

    let education = doc
        .education
        .iter()
        .map(|edu| {
            let gpa = if edu.gpa.is_empty() {
                String::new()
            } else {
                format!("GPA: {}", edu.gpa)
            };
            EducationView {
                degree: edu.degree.clone(),
                institution: edu.institution.clone(),
                location: edu.location.clone(),
                graduation: format_year_month(&edu.graduation_date),
                extras: join_non_empty(&[&gpa, &edu.honors]),
            }
        })
        .collect();

    let mut skills = Vec::new();
    for (label, items) in [
        ("Technical", &doc.skills.technical),
        ("Professional", &doc.skills.soft),
        ("Certifications", &doc.skills.certifications),
    ] {
        if !items.is_empty() {
            skills.push(SkillGroup {
                label,
                items: items.join(", "),
            });
        }
    }

    ResumeSections {
        full_name: contact.full_name.clone(),
        contact_line,
        linkedin: contact.linkedin.clone(),
        website: contact.website.clone(),
        links_line,
        summary,
        experience,
        education,
        skills,
    }
}

/// Render a stored "YYYY-MM" value as short month plus year ("2021-03" ->
/// "Mar 2021"). Empty stays empty; anything unparseable falls through
/// unchanged rather than failing.
pub fn format_year_month(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    match NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d") {
        Ok(date) => date.format("%b %Y").to_string(),
        Err(_) => value.to_string(),
    }
}

/// "start - end" with `current` overriding the end date with "Present"
/// regardless of any stored value.
pub fn format_date_range(start: &str, end: &str, current: bool) -> String {
    let end_text = if current {
        PRESENT.to_string()
    } else {
        format_year_month(end)
    };
    format!("{} - {}", format_year_month(start), end_text)
}

/// Substitute a placeholder for an empty display value.
pub fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

fn join_non_empty(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(FIELD_DELIMITER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::resume::{ContactInfo, EducationEntry, ExperienceEntry};

    #[test]
    fn test_format_year_month() {
        assert_eq!(format_year_month("2021-03"), "Mar 2021");
        assert_eq!(format_year_month("2018-12"), "Dec 2018");
        assert_eq!(format_year_month(""), "");
        // Unparseable input degrades to itself instead of failing.
        assert_eq!(format_year_month("soon"), "soon");
    }

    #[test]
    fn test_current_overrides_end_date() {
        assert_eq!(
            format_date_range("2021-03", "2023-09", true),
            "Mar 2021 - Present"
        );
        assert_eq!(
            format_date_range("2021-03", "2023-09", false),
            "Mar 2021 - Sep 2023"
        );
    }

    #[test]
    fn test_contact_line_skips_empty_fields() {
        let mut doc = ResumeDocument::default();
        doc.contact = ContactInfo {
            email: "a@b.c".to_string(),
            phone: "555-0100".to_string(),
            ..Default::default()
        };
        let sections = normalize(&doc);
        assert_eq!(sections.contact_line, "a@b.c | 555-0100");

        doc.contact.location = "Austin, TX".to_string();
        let sections = normalize(&doc);
        assert_eq!(sections.contact_line, "a@b.c | 555-0100 | Austin, TX");
    }

    #[test]
    fn test_blank_achievements_are_dropped() {
        let mut doc = ResumeDocument::default();
        doc.experience.push(ExperienceEntry {
            achievements: vec!["Did things".to_string(), "  ".to_string()],
            ..Default::default()
        });
        let sections = normalize(&doc);
        assert_eq!(sections.experience[0].achievements, vec!["Did things"]);
    }

    #[test]
    fn test_education_extras_combine_gpa_and_honors() {
        let mut doc = ResumeDocument::default();
        doc.education.push(EducationEntry {
            gpa: "3.8".to_string(),
            honors: "Magna Cum Laude".to_string(),
            ..Default::default()
        });
        doc.education.push(EducationEntry::default());
        let sections = normalize(&doc);
        assert_eq!(sections.education[0].extras, "GPA: 3.8 | Magna Cum Laude");
        assert_eq!(sections.education[1].extras, "");
    }

    #[test]
    fn test_skill_groups_keep_fixed_order_and_drop_empty() {
        let mut doc = ResumeDocument::default();
        doc.skills.certifications.push("PMP".to_string());
        doc.skills.technical.push("Rust".to_string());
        let sections = normalize(&doc);
        let labels: Vec<&str> = sections.skills.iter().map(|g| g.label).collect();
        assert_eq!(labels, vec!["Technical", "Certifications"]);
    }
}
