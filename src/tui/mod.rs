//! TUI module: Terminal User Interface using Ratatui.
//!
//! Provides a clinical-themed interface for:
//! - Dashboard with session counts and the rule table
//! - Patient intake questionnaire
//! - Assessment verdict and dose suggestion
//! - Static patient guidance

mod app;
mod styles;
mod ui;

pub use app::{App, Screen};
pub use styles::ClinicalTheme;
