//! Report presentation

pub mod console;

pub use console::ConsoleReportFormatter;
