//! Terminal capability detection and colored verdicts

use owo_colors::{OwoColorize, colors::css};

/// Whether stdout can render colors.
fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Terminal width in columns, if stdout is a terminal.
pub fn terminal_width() -> Option<u16> {
    terminal_size::terminal_size().map(|(w, _)| w.0)
}

/// Check if terminal is narrow (< 40 columns)
pub fn is_narrow() -> bool {
    terminal_width().is_some_and(|w| w < 40)
}

#[derive(Debug, Clone, Copy)]
enum Style {
    Success,
    Warning,
    Info,
    Dim,
}

fn paint(text: &str, style: Style) -> String {
    if !supports_color() {
        return text.to_string();
    }
    match style {
        Style::Success => text.fg::<css::Green>().to_string(),
        Style::Warning => text.fg::<css::Orange>().to_string(),
        Style::Info => text.fg::<css::LightBlue>().to_string(),
        Style::Dim => text.dimmed().to_string(),
    }
}

/// Extension trait for colorizing output
pub trait Colorize {
    /// Color as success (green): a course can be taken
    fn success(&self) -> String;
    /// Color as warning (amber): a course cannot be taken yet
    fn warning(&self) -> String;
    /// Color as info (blue)
    fn info(&self) -> String;
    /// Dim the text
    fn dim(&self) -> String;
}

impl<T: AsRef<str> + ?Sized> Colorize for T {
    fn success(&self) -> String {
        paint(self.as_ref(), Style::Success)
    }

    fn warning(&self) -> String {
        paint(self.as_ref(), Style::Warning)
    }

    fn info(&self) -> String {
        paint(self.as_ref(), Style::Info)
    }

    fn dim(&self) -> String {
        paint(self.as_ref(), Style::Dim)
    }
}
