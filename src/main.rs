//! Resume builder: ATS-aware resume authoring, scoring, and export tool

mod cli;
mod config;
mod error;
mod export;
mod form;
mod guidance;
mod model;
mod output;
mod presets;
mod scoring;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use colored::Colorize;
use config::{Config, OutputFormat};
use error::{ResumeBuilderError, Result};
use export::save::{self, ExportFormat};
use form::config::FormBuilderConfig;
use log::{error, info};
use model::resume::ResumeDocument;
use output::ConsoleReportFormatter;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Score {
            resume,
            output,
            detailed,
            save,
        } => {
            cli::validate_file_extension(&resume, &["json"])
                .map_err(|e| ResumeBuilderError::InvalidInput(format!("Resume file: {}", e)))?;
            let output_format = cli::parse_output_format(&output)
                .map_err(ResumeBuilderError::InvalidInput)?;

            info!("Scoring resume {}", resume.display());
            let document = read_resume(&resume)?;
            let report = scoring::score(&document);

            let rendered = match output_format {
                OutputFormat::Console => {
                    let use_colors = config.output.color_output && save.is_none();
                    let detailed = detailed || config.output.detailed;
                    ConsoleReportFormatter::new(use_colors, detailed).format(&report)
                }
                OutputFormat::Json => serde_json::to_string_pretty(&report)?,
            };

            match save {
                Some(path) => {
                    save::save_export(rendered.as_bytes(), &path)?;
                    println!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
            Ok(())
        }

        Commands::Export {
            resume,
            format,
            out_dir,
        } => {
            cli::validate_file_extension(&resume, &["json"])
                .map_err(|e| ResumeBuilderError::InvalidInput(format!("Resume file: {}", e)))?;
            let format =
                save::parse_export_format(&format).map_err(ResumeBuilderError::InvalidInput)?;

            let document = read_resume(&resume)?;
            info!(
                "Exporting {} as {} ({})",
                resume.display(),
                format,
                format.mime_type()
            );

            let payload: Vec<u8> = match format {
                ExportFormat::Txt => export::to_plain_text(&document).into_bytes(),
                ExportFormat::Doc => export::to_rich_markup(&document)?.into_bytes(),
                ExportFormat::Pdf => {
                    let paginated =
                        export::to_print_layout(&document, config.page_metrics());
                    info!("Laid out {} page(s)", paginated.page_count());
                    export::pdf::render_pdf(&paginated)?
                }
            };

            let file_name = save::export_file_name(&document, format);
            let path = out_dir.unwrap_or_else(|| PathBuf::from(".")).join(file_name);
            save::save_export(&payload, &path)?;
            println!("Exported to {}", path.display());
            Ok(())
        }

        Commands::EmitForm { form, out } => {
            cli::validate_file_extension(&form, &["json"])
                .map_err(|e| ResumeBuilderError::InvalidInput(format!("Form config: {}", e)))?;
            let content = std::fs::read_to_string(&form)?;
            let form_config: FormBuilderConfig = serde_json::from_str(&content)?;
            let source = form::emit(&form_config);
            write_or_print(out, &source, "Form source")
        }

        Commands::Sample { role, out } => {
            let document = presets::by_name(&role).ok_or_else(|| {
                ResumeBuilderError::InvalidInput(format!(
                    "Unknown preset: {}. Available: {}",
                    role,
                    presets::all()
                        .iter()
                        .map(|p| p.name)
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })?;
            let json = serde_json::to_string_pretty(&document)?;
            write_or_print(out, &json, "Sample resume")
        }

        Commands::Verbs => {
            print_verb_guide();
            Ok(())
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    ResumeBuilderError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("{}", content);
                Ok(())
            }
            ConfigAction::Reset => {
                Config::default().save()?;
                println!("Configuration reset to defaults");
                Ok(())
            }
            ConfigAction::Path => {
                println!("{}", Config::config_path().display());
                Ok(())
            }
        },
    }
}

fn read_resume(path: &Path) -> Result<ResumeDocument> {
    let content = std::fs::read_to_string(path)?;
    let document = serde_json::from_str(&content)?;
    Ok(document)
}

fn write_or_print(out: Option<PathBuf>, content: &str, what: &str) -> Result<()> {
    match out {
        Some(path) => {
            save::save_export(content.as_bytes(), &path)?;
            println!("{} written to {}", what, path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn print_verb_guide() {
    println!("{}", "Power Action Verbs by Category".bold());
    for category in guidance::VERB_CATEGORIES {
        println!("\n{}", category.name.green().bold());
        println!("  {}", category.verbs.join(", "));
    }

    println!("\n{}", "Quantify Your Achievements".bold());
    for example in guidance::QUANTIFICATION_EXAMPLES {
        println!("  {} {}", "weak:".red(), example.weak);
        println!("  {} {}\n", "strong:".green(), example.strong);
    }
}
