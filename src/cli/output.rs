use std::fmt;

use colored::Colorize;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Style {
    Header,
    Detail,
    Success,
    Warning,
    Error,
}

/// Styled terminal output for the wizard shell.
///
/// `NO_COLOR` switches to plain labels so transcripts stay readable in logs
/// and scripted runs.
pub struct Formatter {
    plain: bool,
}

impl Formatter {
    pub fn new() -> Self {
        Self {
            plain: std::env::var_os("NO_COLOR").is_some(),
        }
    }

    pub fn print_header(&self, title: impl fmt::Display) {
        println!("\n{}", self.apply_style(Style::Header, title));
    }

    pub fn print_detail(&self, message: impl fmt::Display) {
        println!("{}", self.apply_style(Style::Detail, message));
    }

    pub fn print_success(&self, message: impl fmt::Display) {
        println!("{}", self.apply_style(Style::Success, message));
    }

    pub fn print_warning(&self, message: impl fmt::Display) {
        println!("{}", self.apply_style(Style::Warning, message));
    }

    pub fn print_error(&self, message: impl fmt::Display) {
        println!("{}", self.apply_style(Style::Error, message));
    }

    pub fn print_two_column(&self, entries: &[(&str, String)]) {
        if entries.is_empty() {
            return;
        }
        let label_width = entries
            .iter()
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(0);
        for (label, value) in entries {
            println!("  {:<width$}  {}", label, value, width = label_width + 2);
        }
    }

    fn apply_style(&self, style: Style, message: impl fmt::Display) -> String {
        match style {
            Style::Header => {
                let base = format!("=== {} ===", message);
                if self.plain {
                    base
                } else {
                    base.bold().to_string()
                }
            }
            Style::Success => self.decorate("✔", "OK:", message, |text| text.green()),
            Style::Warning => self.decorate("⚠", "WARNING:", message, |text| text.yellow()),
            Style::Error => self.decorate("✖", "ERROR:", message, |text| text.red()),
            Style::Detail => message.to_string(),
        }
    }

    fn decorate(
        &self,
        icon: &str,
        plain_label: &str,
        message: impl fmt::Display,
        colorize: impl Fn(String) -> colored::ColoredString,
    ) -> String {
        if self.plain {
            format!("{plain_label} {}", message)
        } else {
            colorize(format!("{icon} {}", message)).to_string()
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}
