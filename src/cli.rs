//! CLI interface for the resume builder

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-builder")]
#[command(about = "ATS-aware resume authoring, scoring, and export tool")]
#[command(
    long_about = "Score resume documents against ATS heuristics, export them to PDF, Word-compatible, and plain-text formats, and generate form source from form-builder configs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the ATS compatibility scorer on a resume
    Score {
        /// Path to the resume document (JSON)
        resume: PathBuf,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Show per-category improvement tips
        #[arg(short, long)]
        detailed: bool,

        /// Save the report to a file instead of printing it
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Export a resume to pdf, doc, or txt
    Export {
        /// Path to the resume document (JSON)
        resume: PathBuf,

        /// Export format: pdf, doc, txt
        #[arg(short, long)]
        format: String,

        /// Directory to write the export into (defaults to the current directory)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// Emit runnable form source from a form-builder config
    EmitForm {
        /// Path to the form config (JSON)
        form: PathBuf,

        /// File to write the generated source to (defaults to stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Write a bundled sample resume document
    Sample {
        /// Preset name: software-engineer, marketing-manager, project-manager
        #[arg(short, long, default_value = "software-engineer")]
        role: String,

        /// File to write the sample to (defaults to stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the action-verb writing guide
    Verbs,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate the score output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
