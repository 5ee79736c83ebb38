//! Score report structures
//!
//! A report is a pure snapshot derived from a document: recomputing it never
//! mutates the document, and recomputing on an unchanged document yields an
//! identical report.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreStatus {
    Good,
    Warning,
    Error,
}

impl std::fmt::Display for ScoreStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreStatus::Good => write!(f, "good"),
            ScoreStatus::Warning => write!(f, "warning"),
            ScoreStatus::Error => write!(f, "error"),
        }
    }
}

/// Result for one scoring category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: String,
    pub score: u32,
    pub max_score: u32,
    pub status: ScoreStatus,
    /// One-line assessment of the category.
    pub feedback: String,
    /// Improvement suggestions, one per failed sub-condition.
    pub tips: Vec<String>,
}

/// Full scoring snapshot: per-category results in fixed order plus the
/// aggregate percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub categories: Vec<CategoryScore>,
    /// round(100 * total score / total max score), always in [0, 100].
    pub overall_percentage: u8,
}

impl ScoreReport {
    pub fn total_score(&self) -> u32 {
        self.categories.iter().map(|c| c.score).sum()
    }

    pub fn total_max_score(&self) -> u32 {
        self.categories.iter().map(|c| c.max_score).sum()
    }

    /// One-line reading of the overall percentage.
    pub fn verdict(&self) -> &'static str {
        match self.overall_percentage {
            80..=100 => "Excellent! Your resume is highly ATS-compatible",
            60..=79 => "Good, but there's room for improvement",
            _ => "Needs significant improvement for ATS systems",
        }
    }
}
