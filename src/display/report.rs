//! Report formatting utilities for terminal output
//!
//! Small helpers shared by the expense list, summary and trend views.

/// Format a whole-number percentage
pub fn format_percentage(pct: u32) -> String {
    format!("{}%", pct)
}

/// Format a per-day amount with two decimals
pub fn format_rate(value: f64, symbol: &str) -> String {
    format!("{}{:.2}/day", symbol, value)
}

/// Create a simple bar chart representation
pub fn format_bar(value: i64, max_value: i64, width: usize) -> String {
    if max_value <= 0 || value <= 0 {
        return " ".repeat(width);
    }

    let filled = ((value as f64 / max_value as f64) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
