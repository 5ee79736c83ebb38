//! Plain-text export

use crate::export::sections::{self, ResumeSections, FIELD_DELIMITER};
use crate::model::resume::ResumeDocument;

/// Width of the horizontal rule under section headings.
const RULE_WIDTH: usize = 80;

/// Render the document as plain text: fixed section order, dash rules under
/// headings, bulleted achievements. Suitable for pasting into email bodies
/// and online application forms.
pub fn to_plain_text(doc: &ResumeDocument) -> String {
    let sections = sections::normalize(doc);
    let mut text = String::new();

    text.push_str(&sections.full_name.to_uppercase());
    text.push('\n');
    if !sections.contact_line.is_empty() {
        text.push_str(&sections.contact_line);
        text.push('\n');
    }
    if let Some(links) = links_line(&sections) {
        text.push_str(&links);
        text.push('\n');
    }
    text.push('\n');

    if let Some(summary) = &sections.summary {
        push_heading(&mut text, "PROFESSIONAL SUMMARY");
        text.push_str(summary);
        text.push_str("\n\n");
    }

    if !sections.experience.is_empty() {
        push_heading(&mut text, "PROFESSIONAL EXPERIENCE");
        for exp in &sections.experience {
            text.push_str(&format!("{}{}{}\n", exp.title, FIELD_DELIMITER, exp.company));
            text.push_str(&format!(
                "{}{}{}\n",
                exp.location, FIELD_DELIMITER, exp.date_range
            ));
            for achievement in &exp.achievements {
                text.push_str(&format!("• {}\n", achievement));
            }
            text.push('\n');
        }
    }

    if !sections.education.is_empty() {
        push_heading(&mut text, "EDUCATION");
        for edu in &sections.education {
            text.push_str(&format!(
                "{}{}{}\n",
                edu.degree, FIELD_DELIMITER, edu.institution
            ));
            text.push_str(&format!(
                "{}{}{}",
                edu.location, FIELD_DELIMITER, edu.graduation
            ));
            if !edu.extras.is_empty() {
                text.push_str(FIELD_DELIMITER);
                text.push_str(&edu.extras);
            }
            text.push_str("\n\n");
        }
    }

    if !sections.skills.is_empty() {
        push_heading(&mut text, "SKILLS & CERTIFICATIONS");
        for group in &sections.skills {
            text.push_str(&format!("{}: {}\n", group.label, group.items));
        }
    }

    text
}

fn push_heading(text: &mut String, title: &str) {
    text.push_str(title);
    text.push('\n');
    text.push_str(&"─".repeat(RULE_WIDTH));
    text.push('\n');
}

/// "LinkedIn: <profile> | <website>"; the label is only attached when a
/// LinkedIn profile is present.
fn links_line(sections: &ResumeSections) -> Option<String> {
    if sections.links_line.is_empty() {
        return None;
    }
    let mut parts = Vec::new();
    if !sections.linkedin.is_empty() {
        parts.push(format!("LinkedIn: {}", sections.linkedin));
    }
    if !sections.website.is_empty() {
        parts.push(sections.website.clone());
    }
    Some(parts.join(FIELD_DELIMITER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::resume::{ContactInfo, ExperienceEntry};

    fn doc_with_contact() -> ResumeDocument {
        let mut doc = ResumeDocument::default();
        doc.contact = ContactInfo {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            ..Default::default()
        };
        doc
    }

    #[test]
    fn test_contact_line_joins_email_and_phone() {
        let text = to_plain_text(&doc_with_contact());
        assert!(text.starts_with("JANE DOE\n"));
        assert!(text.contains("jane@example.com | (555) 123-4567"));
        // No location: no trailing delimiter or empty segment.
        assert!(!text.contains("(555) 123-4567 |"));
    }

    #[test]
    fn test_location_included_when_present() {
        let mut doc = doc_with_contact();
        doc.contact.location = "Austin, TX".to_string();
        let text = to_plain_text(&doc);
        assert!(text.contains("jane@example.com | (555) 123-4567 | Austin, TX"));
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let text = to_plain_text(&doc_with_contact());
        assert!(!text.contains("PROFESSIONAL SUMMARY"));
        assert!(!text.contains("PROFESSIONAL EXPERIENCE"));
        assert!(!text.contains("EDUCATION"));
        assert!(!text.contains("SKILLS"));
    }

    #[test]
    fn test_experience_block_layout() {
        let mut doc = doc_with_contact();
        doc.experience.push(ExperienceEntry {
            id: "exp-1".to_string(),
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            start_date: "2021-03".to_string(),
            end_date: "2024-01".to_string(),
            current: true,
            achievements: vec!["Shipped it".to_string(), "".to_string()],
        });
        let text = to_plain_text(&doc);
        assert!(text.contains("PROFESSIONAL EXPERIENCE\n"));
        assert!(text.contains("Engineer | Acme\n"));
        // current=true wins over the stored end date.
        assert!(text.contains("Remote | Mar 2021 - Present\n"));
        assert!(text.contains("• Shipped it\n"));
        assert!(!text.contains("• \n"));
    }

    #[test]
    fn test_links_line_label() {
        let mut doc = doc_with_contact();
        doc.contact.linkedin = "linkedin.com/in/janedoe".to_string();
        doc.contact.website = "janedoe.dev".to_string();
        let text = to_plain_text(&doc);
        assert!(text.contains("LinkedIn: linkedin.com/in/janedoe | janedoe.dev"));

        doc.contact.linkedin.clear();
        let text = to_plain_text(&doc);
        assert!(text.contains("\njanedoe.dev\n"));
        assert!(!text.contains("LinkedIn:"));
    }

    #[test]
    fn test_skills_lines() {
        let mut doc = doc_with_contact();
        doc.skills.technical = vec!["Rust".to_string(), "SQL".to_string()];
        doc.skills.certifications = vec!["PMP".to_string()];
        let text = to_plain_text(&doc);
        assert!(text.contains("SKILLS & CERTIFICATIONS\n"));
        assert!(text.contains("Technical: Rust, SQL\n"));
        assert!(text.contains("Certifications: PMP\n"));
        assert!(!text.contains("Professional:"));
    }
}
