//! Terminal display and UI rendering
//!
//! Features:
//! - Model description header (vocabulary, accuracy, top words)
//! - Example gallery listing
//! - Review form with live input
//! - Color-coded comparison report

use super::gallery::Gallery;
use super::report::Comparison;
use crate::classifier::{KeywordLabel, Label, Model, Prediction};
use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{stdout, Write};

const RULE_WIDTH: usize = 60;

fn label_color(label: Label) -> Color {
    match label {
        Label::Positive => Color::Green,
        Label::Negative => Color::Red,
    }
}

fn keyword_color(label: KeywordLabel) -> Color {
    match label {
        KeywordLabel::Positive => Color::Green,
        KeywordLabel::Negative => Color::Red,
        KeywordLabel::Neutral => Color::Yellow,
    }
}

/// Header lines describing the loaded model
pub fn model_summary(model: &Model) -> Vec<String> {
    if model.is_degraded() {
        return vec!["Vocabulary: unavailable (model not loaded)".to_string()];
    }

    let meta = model.metadata();
    let mut lines = vec![format!("Vocabulary: {} words", model.vocab_size())];
    if let Some(accuracy) = meta.accuracy {
        lines.push(format!("Test Accuracy: {:.1}%", accuracy * 100.0));
    }
    let positive = meta.most_positive(3);
    if !positive.is_empty() {
        lines.push(format!("Most Positive: {}", positive.join(", ")));
    }
    let negative = meta.most_negative(2);
    if !negative.is_empty() {
        lines.push(format!("Most Negative: {}", negative.join(", ")));
    }
    lines
}

/// Terminal display manager. Draws line by line so it works in raw mode.
pub struct Display;

impl Display {
    pub fn new() -> Self {
        Display
    }

    pub fn clear(&self) -> std::io::Result<()> {
        execute!(stdout(), terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))
    }

    fn line<W: Write>(out: &mut W, color: Option<Color>, text: &str) -> std::io::Result<()> {
        match color {
            Some(color) => queue!(out, SetForegroundColor(color), Print(text), ResetColor)?,
            None => queue!(out, Print(text))?,
        }
        queue!(out, cursor::MoveToNextLine(1))
    }

    fn rule<W: Write>(out: &mut W) -> std::io::Result<()> {
        Self::line(out, Some(Color::Blue), &"─".repeat(RULE_WIDTH))
    }

    pub fn show_header(&self, model: &Model) -> std::io::Result<()> {
        let mut out = stdout();
        Self::line(
            &mut out,
            Some(Color::Cyan),
            "🍽️  Amazon Food Reviews: Pegasos vs Simple Keywords",
        )?;
        for line in model_summary(model) {
            Self::line(&mut out, Some(Color::DarkGrey), &line)?;
        }
        Self::rule(&mut out)?;
        out.flush()
    }

    pub fn show_gallery(&self, gallery: &Gallery) -> std::io::Result<()> {
        let mut out = stdout();
        Self::line(&mut out, Some(Color::Magenta), "Examples:")?;
        for (i, example) in gallery.examples().iter().enumerate() {
            let marker = if gallery.current() == Some(i) { '>' } else { ' ' };
            Self::line(&mut out, None, &format!("{} {}. {}", marker, i + 1, example))?;
        }
        Self::rule(&mut out)?;
        out.flush()
    }

    pub fn show_input(&self, review: &str) -> std::io::Result<()> {
        let mut out = stdout();
        queue!(
            out,
            SetForegroundColor(Color::Yellow),
            Print("Review: "),
            ResetColor,
            Print(review),
            SetForegroundColor(Color::DarkGrey),
            Print("▏"),
            ResetColor,
            cursor::MoveToNextLine(1)
        )?;
        Self::rule(&mut out)?;
        out.flush()
    }

    pub fn show_comparison(&self, comparison: &Comparison) -> std::io::Result<()> {
        let mut out = stdout();
        let pegasos_color = match &comparison.pegasos {
            Prediction::Scored(result) => label_color(result.label),
            Prediction::Unavailable => Color::DarkRed,
        };

        for line in comparison.lines() {
            let color = if line.starts_with("Pegasos:") {
                Some(pegasos_color)
            } else if line.starts_with("Keywords:") {
                Some(keyword_color(comparison.keywords.label))
            } else if line.starts_with("Pegasos considers") {
                Some(Color::DarkGrey)
            } else {
                None
            };
            Self::line(&mut out, color, &line)?;
        }
        out.flush()
    }

    pub fn show_help(&self) -> std::io::Result<()> {
        let mut out = stdout();
        queue!(out, cursor::MoveToNextLine(1))?;
        Self::line(
            &mut out,
            Some(Color::DarkGrey),
            "ENTER analyze  |  TAB next example  |  Ctrl+R random  |  Ctrl+U clear  |  Esc exit",
        )?;
        out.flush()
    }

    /// Reset terminal state
    pub fn shutdown(&self) -> std::io::Result<()> {
        execute!(stdout(), ResetColor, cursor::Show)?;
        terminal::disable_raw_mode()
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        // Best effort cleanup
        let _ = self.shutdown();
    }
}
