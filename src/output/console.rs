//! Console formatter for score reports

use crate::scoring::report::{ScoreReport, ScoreStatus};
use colored::{Color, Colorize};

/// Renders a [`ScoreReport`] for the terminal. Colors can be suppressed for
/// piped output; `detailed` adds the per-category recommendations.
pub struct ConsoleReportFormatter {
    use_colors: bool,
    detailed: bool,
}

impl ConsoleReportFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    pub fn format(&self, report: &ScoreReport) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header("ATS COMPATIBILITY REPORT", 1));
        output.push_str(&format!(
            "Overall Score: {}% {}\n",
            report.overall_percentage,
            self.format_score_badge(report.overall_percentage)
        ));
        output.push_str(&format!(
            "{}\n",
            self.colorize(report.verdict(), Color::Cyan)
        ));

        output.push_str(&self.format_header("Category Breakdown", 2));
        for category in &report.categories {
            output.push_str(&format!(
                "{} {:<22} {:>2}/{:<2}  {}\n",
                self.format_status_icon(category.status),
                category.category,
                category.score,
                category.max_score,
                category.feedback
            ));
            if self.detailed && !category.tips.is_empty() {
                for tip in &category.tips {
                    output.push_str(&format!(
                        "    • {}\n",
                        self.colorize(tip, Color::Yellow)
                    ));
                }
            }
        }

        output.push_str(&format!(
            "\nTotal: {}/{}\n",
            report.total_score(),
            report.total_max_score()
        ));

        output
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };
        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };
        if self.use_colors {
            format!(
                "\n{} {}\n",
                prefix.color(color).bold(),
                title.color(color).bold()
            )
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            90..=100 => ("EXCELLENT", Color::Green),
            80..=89 => ("VERY GOOD", Color::BrightGreen),
            70..=79 => ("GOOD", Color::Yellow),
            60..=69 => ("FAIR", Color::BrightYellow),
            50..=59 => ("BELOW AVG", Color::Red),
            _ => ("POOR", Color::BrightRed),
        };
        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_status_icon(&self, status: ScoreStatus) -> String {
        if self.use_colors {
            match status {
                ScoreStatus::Good => "✓".color(Color::Green).to_string(),
                ScoreStatus::Warning => "!".color(Color::Yellow).to_string(),
                ScoreStatus::Error => "✗".color(Color::Red).to_string(),
            }
        } else {
            match status {
                ScoreStatus::Good => "[+]".to_string(),
                ScoreStatus::Warning => "[*]".to_string(),
                ScoreStatus::Error => "[!]".to_string(),
            }
        }
    }
}
