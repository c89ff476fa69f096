//! Adapters layer: Concrete implementations of ports.
//!
//! - `guideline`: built-in guidance text
//! - `render`: plain-text and JSON report renderers
//! - `sanitize`: identifier filtering for logs

pub mod guideline;
pub mod render;
pub mod sanitize;
