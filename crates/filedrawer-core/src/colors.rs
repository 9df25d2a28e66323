//! Styling for report text.
//!
//! With the `ansi` feature the `colored` crate applies the style and
//! honors `NO_COLOR`, `CLICOLOR` and TTY detection. Without it every style
//! is the identity.

#[derive(Debug, Clone, Copy)]
enum Style {
    Red,
    Yellow,
    Bold,
    Dim,
    BoldGreen,
    BoldYellow,
    BoldCyan,
}

#[cfg(feature = "ansi")]
fn paint(style: Style, s: &str) -> String {
    use colored::Colorize;

    match style {
        Style::Red => s.red(),
        Style::Yellow => s.yellow(),
        Style::Bold => s.bold(),
        Style::Dim => s.dimmed(),
        Style::BoldGreen => s.green().bold(),
        Style::BoldYellow => s.yellow().bold(),
        Style::BoldCyan => s.cyan().bold(),
    }
    .to_string()
}

#[cfg(not(feature = "ansi"))]
fn paint(_style: Style, s: &str) -> String {
    s.to_owned()
}

/// Warnings and failed trials.
pub fn red(s: &str) -> String {
    paint(Style::Red, s)
}

/// Notable but non-fatal values, such as an inflated effect.
pub fn yellow(s: &str) -> String {
    paint(Style::Yellow, s)
}

pub fn bold(s: &str) -> String {
    paint(Style::Bold, s)
}

pub fn dim(s: &str) -> String {
    paint(Style::Dim, s)
}

pub fn bold_green(s: &str) -> String {
    paint(Style::BoldGreen, s)
}

pub fn bold_yellow(s: &str) -> String {
    paint(Style::BoldYellow, s)
}

pub fn bold_cyan(s: &str) -> String {
    paint(Style::BoldCyan, s)
}
