//! CLI Interface: Review form, example gallery, and terminal rendering
//!
//! # Components
//! - `input.rs`: Keystroke capture using crossterm
//! - `display.rs`: Terminal rendering and UI
//! - `gallery.rs`: Example reviews
//! - `report.rs`: Plain-text and JSON comparison reports

pub mod display;
pub mod gallery;
pub mod input;
pub mod report;
