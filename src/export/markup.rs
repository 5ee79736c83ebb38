//! Word-compatible markup export
//!
//! Produces a self-contained styled HTML document that word processors open
//! directly. The output is HTML behind a `.doc` extension, not OOXML; the
//! save driver pairs it with the `application/msword` MIME type.

use crate::error::{ResumeBuilderError, Result};
use crate::export::sections::{self, or_placeholder, ResumeSections, FIELD_DELIMITER};
use crate::model::resume::ResumeDocument;
use askama::Template;

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
body { font-family: Arial, sans-serif; margin: 1in; line-height: 1.6; }
h1 { text-align: center; font-size: 24pt; margin-bottom: 5px; }
.contact { text-align: center; font-size: 10pt; margin-bottom: 20px; }
h2 { font-size: 14pt; border-bottom: 2px solid #333; margin-top: 20px; margin-bottom: 10px; }
.job-title { font-weight: bold; font-size: 12pt; margin-top: 15px; }
.job-details { font-size: 10pt; color: #555; margin-bottom: 5px; }
ul { margin: 5px 0; padding-left: 20px; }
li { font-size: 10pt; margin-bottom: 5px; }
</style>
</head>
<body>
<h1>{{ name }}</h1>
<div class="contact">{{ contact_line }}{% if has_links %}<br>{{ links_line }}{% endif %}</div>
{% if has_summary %}<h2>PROFESSIONAL SUMMARY</h2>
<p>{{ summary }}</p>
{% endif %}{% if has_experience %}<h2>PROFESSIONAL EXPERIENCE</h2>
{{ experience_html | safe }}{% endif %}{% if has_education %}<h2>EDUCATION</h2>
{{ education_html | safe }}{% endif %}{% if has_skills %}<h2>SKILLS & CERTIFICATIONS</h2>
{{ skills_html | safe }}{% endif %}</body>
</html>"#, ext = "html")]
struct WordMarkupTemplate {
    name: String,
    contact_line: String,
    links_line: String,
    has_links: bool,
    summary: String,
    has_summary: bool,
    experience_html: String,
    has_experience: bool,
    education_html: String,
    has_education: bool,
    skills_html: String,
    has_skills: bool,
}

/// Render the document as a Word-compatible HTML string.
pub fn to_rich_markup(doc: &ResumeDocument) -> Result<String> {
    let sections = sections::normalize(doc);
    let template = WordMarkupTemplate {
        name: or_placeholder(&sections.full_name, "Your Name").to_string(),
        contact_line: sections.contact_line.clone(),
        links_line: sections.links_line.clone(),
        has_links: !sections.links_line.is_empty(),
        summary: sections.summary.clone().unwrap_or_default(),
        has_summary: sections.summary.is_some(),
        experience_html: experience_html(&sections),
        has_experience: !sections.experience.is_empty(),
        education_html: education_html(&sections),
        has_education: !sections.education.is_empty(),
        skills_html: skills_html(&sections),
        has_skills: !sections.skills.is_empty(),
    };
    template
        .render()
        .map_err(|e| ResumeBuilderError::Export(e.to_string()))
}

fn experience_html(sections: &ResumeSections) -> String {
    let mut html = String::new();
    for exp in &sections.experience {
        html.push_str(&format!(
            "<div class=\"job-title\">{}</div>\n",
            escape_html(or_placeholder(&exp.title, "Job Title"))
        ));
        html.push_str(&format!(
            "<div class=\"job-details\">{}{}{}{}{}</div>\n",
            escape_html(or_placeholder(&exp.company, "Company")),
            FIELD_DELIMITER,
            escape_html(&exp.location),
            FIELD_DELIMITER,
            exp.date_range
        ));
        html.push_str("<ul>\n");
        for achievement in &exp.achievements {
            html.push_str(&format!("<li>{}</li>\n", escape_html(achievement)));
        }
        html.push_str("</ul>\n");
    }
    html
}

fn education_html(sections: &ResumeSections) -> String {
    let mut html = String::new();
    for edu in &sections.education {
        html.push_str(&format!(
            "<div class=\"job-title\">{}</div>\n",
            escape_html(or_placeholder(&edu.degree, "Degree"))
        ));
        let mut details = format!(
            "{}{}{}{}{}",
            escape_html(or_placeholder(&edu.institution, "Institution")),
            FIELD_DELIMITER,
            escape_html(&edu.location),
            FIELD_DELIMITER,
            edu.graduation
        );
        if !edu.extras.is_empty() {
            details.push_str(FIELD_DELIMITER);
            details.push_str(&escape_html(&edu.extras));
        }
        html.push_str(&format!("<div class=\"job-details\">{}</div>\n", details));
    }
    html
}

fn skills_html(sections: &ResumeSections) -> String {
    let mut html = String::new();
    for group in &sections.skills {
        html.push_str(&format!(
            "<p><strong>{}:</strong> {}</p>\n",
            group.label,
            escape_html(&group.items)
        ));
    }
    html
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::resume::{ContactInfo, EducationEntry, ExperienceEntry};

    fn sample_doc() -> ResumeDocument {
        let mut doc = ResumeDocument::default();
        doc.contact = ContactInfo {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555-0100".to_string(),
            linkedin: "linkedin.com/in/janedoe".to_string(),
            ..Default::default()
        };
        doc.summary = "Seasoned engineer.".to_string();
        doc.experience.push(ExperienceEntry {
            id: "exp-1".to_string(),
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            start_date: "2021-03".to_string(),
            current: true,
            achievements: vec!["Shipped <fast>".to_string()],
            ..Default::default()
        });
        doc
    }

    #[test]
    fn test_markup_is_self_contained() {
        let html = to_rich_markup(&sample_doc()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("font-family: Arial"));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn test_sections_render_with_headings() {
        let html = to_rich_markup(&sample_doc()).unwrap();
        assert!(html.contains("<h1>Jane Doe</h1>"));
        assert!(html.contains("jane@example.com | 555-0100"));
        assert!(html.contains("<br>linkedin.com/in/janedoe"));
        assert!(html.contains("<h2>PROFESSIONAL SUMMARY</h2>"));
        assert!(html.contains("<h2>PROFESSIONAL EXPERIENCE</h2>"));
        assert!(html.contains("<div class=\"job-title\">Engineer</div>"));
        assert!(html.contains("Acme | Remote | Mar 2021 - Present"));
    }

    #[test]
    fn test_achievement_content_is_escaped() {
        let html = to_rich_markup(&sample_doc()).unwrap();
        assert!(html.contains("<li>Shipped &lt;fast&gt;</li>"));
    }

    #[test]
    fn test_empty_name_gets_placeholder_and_sections_omitted() {
        let doc = ResumeDocument::default();
        let html = to_rich_markup(&doc).unwrap();
        assert!(html.contains("<h1>Your Name</h1>"));
        assert!(!html.contains("PROFESSIONAL SUMMARY"));
        assert!(!html.contains("EDUCATION"));
    }

    #[test]
    fn test_education_details_line() {
        let mut doc = ResumeDocument::default();
        doc.education.push(EducationEntry {
            id: "edu-1".to_string(),
            degree: "BSc Computer Science".to_string(),
            institution: "State University".to_string(),
            location: "Austin, TX".to_string(),
            graduation_date: "2018-06".to_string(),
            gpa: "3.8".to_string(),
            honors: "Magna Cum Laude".to_string(),
        });
        let html = to_rich_markup(&doc).unwrap();
        assert!(html.contains("<h2>EDUCATION</h2>"));
        assert!(html
            .contains("State University | Austin, TX | Jun 2018 | GPA: 3.8 | Magna Cum Laude"));
    }
}
