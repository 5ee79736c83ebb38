//! Rule-based ATS compatibility scoring

pub mod engine;
pub mod report;
pub mod rules;

pub use engine::{score, ScoreEngine};
pub use report::{CategoryScore, ScoreReport, ScoreStatus};
