//! Status lines for interactive use. Everything goes to stderr so that
//! reports on stdout can be piped.

use colored::*;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

pub fn success(message: &str) {
    eprintln!("{} {}", "✓".green(), message);
}

pub fn info(message: &str) {
    eprintln!("{} {}", "●".blue(), message);
}

pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Display a section header with underline
pub fn section_header_with_line(title: &str) {
    eprintln!("\n{}", title.bold().cyan());
    eprintln!("{}", "─".repeat(title.chars().count()).dimmed());
}

/// Spinner shown while an input file loads.
pub fn loading_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_draw_target(ProgressDrawTarget::stderr());
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner
}

/// Format a number with thousands separator
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }
}
