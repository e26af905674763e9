//! Summary and trend formatting

use super::report::{format_bar, format_percentage, format_rate, separator};
use crate::reports::{DerivedView, MonthlyTrend};

const BAR_WIDTH: usize = 24;

/// Format the summary block of a view: totals, top category and breakdown
pub fn format_summary(view: &DerivedView, symbol: &str) -> String {
    let mut output = String::new();
    let summary = &view.summary;

    output.push_str(&format!("Spending Summary ({})\n", view.selection.time_range.label()));
    output.push_str(&separator(56));
    output.push('\n');

    output.push_str(&format!(
        "Total:         {}\n",
        summary.total.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Daily average: {}\n",
        format_rate(summary.daily_average, symbol)
    ));
    output.push_str(&format!("Expenses:      {}\n", view.expenses.len()));

    match summary.top() {
        Some(top) => output.push_str(&format!(
            "Top category:  {} ({}, {})\n",
            top.category,
            top.value.format_with_symbol(symbol),
            format_percentage(top.percentage)
        )),
        None => output.push_str("Top category:  -\n"),
    }

    if summary.breakdown.is_empty() {
        output.push_str("\nNo spending in this period.\n");
        return output;
    }

    output.push('\n');
    let largest = summary
        .breakdown
        .iter()
        .map(|entry| entry.value.cents())
        .max()
        .unwrap_or(0);

    for entry in &summary.breakdown {
        output.push_str(&format!(
            "{:14} {:>12} {:>5} {}\n",
            entry.category.name(),
            entry.value.format_with_symbol(symbol),
            format_percentage(entry.percentage),
            format_bar(entry.value.cents(), largest, BAR_WIDTH)
        ));
    }

    output
}

/// Format the monthly trend, bars scaled by the peak month
pub fn format_trend(trend: &MonthlyTrend, symbol: &str) -> String {
    if trend.series.is_empty() {
        return "No spending recorded yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Monthly Trend\n");
    output.push_str(&separator(48));
    output.push('\n');

    for bucket in &trend.series {
        output.push_str(&format!(
            "{:6} {:>12} {}\n",
            bucket.label,
            bucket.value.format_with_symbol(symbol),
            format_bar(bucket.value.cents(), trend.peak.cents(), BAR_WIDTH)
        ));
    }

    output
}
