//! Save driver for exported documents
//!
//! Owns filename derivation, extension and MIME selection per format, and
//! the actual file write. Failures surface to the caller; nothing here
//! retries.

use crate::error::Result;
use crate::model::resume::ResumeDocument;
use regex::Regex;
use std::path::Path;

/// Target encoding for an export. The Word variant is HTML behind a `.doc`
/// extension, matching what word processors accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Doc,
    Txt,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Doc => "doc",
            ExportFormat::Txt => "txt",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Doc => "application/msword",
            ExportFormat::Txt => "text/plain",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Parse a user-supplied format name.
pub fn parse_export_format(format: &str) -> std::result::Result<ExportFormat, String> {
    match format.to_lowercase().as_str() {
        "pdf" => Ok(ExportFormat::Pdf),
        "doc" | "docx" | "word" => Ok(ExportFormat::Doc),
        "txt" | "text" => Ok(ExportFormat::Txt),
        _ => Err(format!(
            "Invalid export format: {}. Supported: pdf, doc, txt",
            format
        )),
    }
}

/// Filename stem derived from the contact name: whitespace runs become
/// underscores, an empty name falls back to "Resume".
pub fn filename_stem(doc: &ResumeDocument) -> String {
    let whitespace = Regex::new(r"\s+").expect("Invalid whitespace regex");
    let stem = whitespace
        .replace_all(&doc.contact.full_name, "_")
        .to_string();
    if stem.is_empty() {
        "Resume".to_string()
    } else {
        stem
    }
}

/// Full export filename, e.g. "Jane_Doe.pdf".
pub fn export_file_name(doc: &ResumeDocument, format: ExportFormat) -> String {
    format!("{}.{}", filename_stem(doc), format.extension())
}

/// Write export payload bytes to disk, creating parent directories.
pub fn save_export(content: &[u8], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)?;
    Ok(())
}
