//! ANSI styling helpers built on anstyle.
//!
//! Styling is skipped entirely when the global color choice is `Never`.

use anstyle::{AnsiColor, Color, Effects, Style};
use colorchoice::ColorChoice;

fn styled(text: &str, style: Style) -> String {
    if matches!(ColorChoice::global(), ColorChoice::Never) {
        return text.to_string();
    }
    format!("{}{}{}", style.render(), text, style.render_reset())
}

fn fg(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

pub fn green(text: &str) -> String {
    styled(text, fg(AnsiColor::Green))
}

pub fn yellow(text: &str) -> String {
    styled(text, fg(AnsiColor::Yellow))
}

pub fn cyan(text: &str) -> String {
    styled(text, fg(AnsiColor::Cyan))
}

pub fn magenta(text: &str) -> String {
    styled(text, fg(AnsiColor::Magenta))
}

pub fn bold(text: &str) -> String {
    styled(text, Style::new().effects(Effects::BOLD))
}

pub fn underline(text: &str) -> String {
    styled(text, Style::new().effects(Effects::UNDERLINE))
}

pub fn dimmed(text: &str) -> String {
    styled(text, Style::new().effects(Effects::DIMMED))
}
