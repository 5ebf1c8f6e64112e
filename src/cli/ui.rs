use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Value,
    Warning,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Value => style(text).green().bold(),
        StyleType::Warning => style(text).yellow(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn number_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Spinner shown while rates are loading.
pub fn new_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(spinner_style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Groups the integer part of a plain decimal string with commas.
fn group_thousands(digits: &str) -> String {
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let len = int_part.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{grouped}.{f}"),
        None => grouped,
    }
}

/// Formats a value with a fixed number of fraction digits and thousands
/// separators, prefixed by the currency symbol when known.
pub fn format_currency(value: f64, symbol: Option<&str>, digits: usize) -> String {
    let fixed = format!("{:.*}", digits, value.abs());
    let sign = if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    let number = format!("{sign}{}", group_thousands(&fixed));
    match symbol {
        Some(symbol) if !symbol.is_empty() => format!("{symbol} {number}"),
        _ => number,
    }
}

/// Formats a number with at most `max_digits` fraction digits, dropping
/// trailing zeros.
pub fn format_number(n: f64, max_digits: usize) -> String {
    let fixed = format!("{:.*}", max_digits, n);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234567.891, Some("$"), 2), "$ 1,234,567.89");
        assert_eq!(format_currency(11.0, Some("€"), 2), "€ 11.00");
        assert_eq!(format_currency(1500.4, Some("￥"), 0), "￥ 1,500");
        assert_eq!(format_currency(999.0, None, 4), "999.0000");
        assert_eq!(format_currency(-2500.5, Some(""), 1), "-2,500.5");
        assert_eq!(format_currency(-0.0001, None, 2), "0.00");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1.5, 4), "1.5");
        assert_eq!(format_number(2.0, 4), "2");
        assert_eq!(format_number(0.123456, 4), "0.1235");
        assert_eq!(format_number(-0.00001, 2), "0");
        assert_eq!(format_number(1000.0, 0), "1000");
    }
}
