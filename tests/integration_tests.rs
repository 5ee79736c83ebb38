//! Integration tests for the resume builder

use resume_builder::export::layout::{PageMetrics, PageOp};
use resume_builder::export::save::{export_file_name, save_export, ExportFormat};
use resume_builder::export::{pdf, to_plain_text, to_print_layout, to_rich_markup};
use resume_builder::form::config::{FieldType, FormSession, MoveDirection};
use resume_builder::form::{emit, validate};
use resume_builder::model::resume::{ContactInfo, ExperienceEntry, ResumeDocument};
use resume_builder::model::session::{ResumePatch, ResumeSession};
use resume_builder::presets;
use resume_builder::scoring::{self, ScoreStatus};
use std::collections::HashMap;

fn sample_resume() -> ResumeDocument {
    presets::software_engineer()
}

#[test]
fn test_preset_scores_across_all_categories() {
    let report = scoring::score(&sample_resume());
    assert_eq!(report.categories.len(), 5);
    assert_eq!(report.total_max_score(), 100);
    assert!(report.overall_percentage >= 80);
    assert!(report
        .categories
        .iter()
        .all(|c| c.score <= c.max_score));
}

#[test]
fn test_empty_document_reports_missing_categories() {
    let report = scoring::score(&ResumeDocument::default());
    assert_eq!(report.overall_percentage, 0);

    let experience = &report.categories[2];
    assert_eq!(experience.category, "Work Experience");
    assert_eq!(experience.score, 0);
    assert_eq!(experience.status, ScoreStatus::Error);
    assert_eq!(experience.feedback, "No work experience added");
}

#[test]
fn test_scoring_twice_yields_identical_reports() {
    let doc = sample_resume();
    assert_eq!(scoring::score(&doc), scoring::score(&doc));
}

#[test]
fn test_aggregate_is_rounded_ratio_in_range() {
    for preset in presets::all() {
        let report = scoring::score(&preset.document);
        let expected =
            ((report.total_score() as f64 / report.total_max_score() as f64) * 100.0).round() as u8;
        assert_eq!(report.overall_percentage, expected);
        assert!(report.overall_percentage <= 100);
    }
}

#[test]
fn test_plain_text_export_contains_contact_and_dates() {
    let text = to_plain_text(&sample_resume());
    assert!(text.starts_with("ALEX JOHNSON"));
    assert!(text.contains("alex.johnson@email.com | (555) 123-4567"));
    // Current position renders Present; past position renders both months.
    assert!(text.contains("Mar 2021 - Present"));
    assert!(text.contains("Jan 2019 - Feb 2021"));
    assert!(text.contains("• Architected and deployed"));
}

#[test]
fn test_markup_export_opens_as_word_document() {
    let html = to_rich_markup(&sample_resume()).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<h1>Alex Johnson</h1>"));
    assert!(html.contains("<h2>PROFESSIONAL EXPERIENCE</h2>"));
    assert!(html.contains("Tech Innovations Inc. | San Francisco, CA | Mar 2021 - Present"));
    assert_eq!(ExportFormat::Doc.mime_type(), "application/msword");
    assert_eq!(
        export_file_name(&sample_resume(), ExportFormat::Doc),
        "Alex_Johnson.doc"
    );
}

#[test]
fn test_print_layout_paginates_long_documents() {
    let mut doc = sample_resume();
    // Inflate the work history far past one page.
    for i in 0..12 {
        doc.experience.push(ExperienceEntry {
            id: format!("exp-extra-{}", i),
            title: format!("Engineer {}", i),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            start_date: "2010-01".to_string(),
            end_date: "2012-01".to_string(),
            current: false,
            achievements: vec![
                "Delivered a long-running migration program covering dozens of services and \
                 keeping error budgets intact throughout the transition period"
                    .to_string();
                4
            ],
        });
    }

    let metrics = PageMetrics::default();
    let paginated = to_print_layout(&doc, metrics);
    assert!(paginated.page_count() > 1);

    // Every instruction stays inside the printable area.
    for page in &paginated.pages {
        for op in &page.ops {
            match op {
                PageOp::Text { y, .. } => {
                    assert!(*y >= metrics.margin);
                    assert!(*y <= metrics.height - metrics.margin);
                }
                PageOp::Rule { y, .. } => {
                    assert!(*y >= metrics.margin);
                    assert!(*y <= metrics.height - metrics.margin);
                }
            }
        }
    }

    // Each later page starts at the top margin.
    for page in &paginated.pages[1..] {
        if let Some(PageOp::Text { y, .. }) = page.ops.first() {
            assert_eq!(*y, metrics.margin);
        }
    }
}

#[test]
fn test_pdf_renderer_consumes_layout() {
    let paginated = to_print_layout(&sample_resume(), PageMetrics::default());
    let bytes = pdf::render_pdf(&paginated).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_files_written_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let doc = sample_resume();

    let txt_path = dir.path().join(export_file_name(&doc, ExportFormat::Txt));
    save_export(to_plain_text(&doc).as_bytes(), &txt_path).unwrap();
    assert!(txt_path.ends_with("Alex_Johnson.txt"));
    let written = std::fs::read_to_string(&txt_path).unwrap();
    assert!(written.contains("SKILLS & CERTIFICATIONS"));

    let doc_path = dir.path().join(export_file_name(&doc, ExportFormat::Doc));
    save_export(to_rich_markup(&doc).unwrap().as_bytes(), &doc_path).unwrap();
    assert!(std::fs::metadata(&doc_path).unwrap().len() > 0);
}

#[test]
fn test_resume_document_json_round_trip() {
    let doc = sample_resume();
    let json = serde_json::to_string_pretty(&doc).unwrap();
    let back: ResumeDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(back, doc);
    // Scores agree before and after the round trip.
    assert_eq!(scoring::score(&doc), scoring::score(&back));
}

#[test]
fn test_session_editing_flow() {
    let mut session = ResumeSession::new();
    session.apply(ResumePatch::Contact(ContactInfo {
        full_name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        phone: "555-0100".to_string(),
        location: "Austin, TX".to_string(),
        ..Default::default()
    }));

    let id = session.allocate_experience_id();
    session.add_experience(ExperienceEntry {
        id: id.clone(),
        title: "Engineer".to_string(),
        company: "Acme".to_string(),
        start_date: "2022-05".to_string(),
        current: true,
        achievements: vec!["Led the team that increased throughput by 30%".to_string()],
        ..Default::default()
    });

    let report = scoring::score(session.document());
    assert_eq!(report.categories[0].score, 15);
    assert!(report.categories[2].score > 0);

    session.remove_experience(&id);
    let report = scoring::score(session.document());
    assert_eq!(report.categories[2].feedback, "No work experience added");
}

#[test]
fn test_form_builder_round_trip_and_emission() {
    let mut session = FormSession::new();
    session.set_title("Job Application".to_string());
    session.add_field(FieldType::Text);
    session.add_field(FieldType::Email);
    session.add_field(FieldType::Select);

    // Reorder: moving a field up then down restores the original order.
    let before: Vec<String> = session
        .config()
        .fields
        .iter()
        .map(|f| f.id.clone())
        .collect();
    assert!(session.move_field("field-3", MoveDirection::Up));
    assert!(session.move_field("field-3", MoveDirection::Down));
    let after: Vec<String> = session
        .config()
        .fields
        .iter()
        .map(|f| f.id.clone())
        .collect();
    assert_eq!(before, after);

    let source = emit(session.config());
    assert!(source.contains("<h2>Job Application</h2>"));
    assert!(source.find("type=\"text\"").unwrap() < source.find("type=\"email\"").unwrap());

    // The config survives a JSON round trip.
    let json = serde_json::to_string(session.config()).unwrap();
    let back: resume_builder::form::FormBuilderConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, session.config());
}

#[test]
fn test_form_validation_reports_by_field_name() {
    let mut session = FormSession::new();
    session.add_field(FieldType::Email);
    session.patch_field(
        "field-1",
        resume_builder::form::config::FieldPatch {
            label: Some("Work email".to_string()),
            required: Some(true),
            ..Default::default()
        },
    );

    let errors = validate(session.config(), &HashMap::new());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("field_1").unwrap(), "Work email is required");

    let mut values = HashMap::new();
    values.insert("field_1".to_string(), "jane@example.com".to_string());
    assert!(validate(session.config(), &values).is_empty());
}
