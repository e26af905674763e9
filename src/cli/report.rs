//! CLI commands for reports
//!
//! The spending summary (optionally exported as CSV) and the monthly trend.

use chrono::Local;
use clap::Args;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use super::expense::SelectionArgs;
use crate::config::Settings;
use crate::display::{format_summary, format_trend};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::FilterSelection;
use crate::services::ExpenseLedger;

/// Arguments of `summary`
#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Export the category breakdown to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle `summary`
pub fn handle_summary(
    ledger: &ExpenseLedger,
    settings: &Settings,
    args: SummaryArgs,
) -> ExpenseResult<()> {
    let selection = args.selection.to_selection(settings.default_time_range);
    let view = ledger.view(&selection, &Local);

    if let Some(path) = args.output {
        let file = File::create(&path).map_err(|e| {
            ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        view.export_csv(&mut writer)?;
        writer
            .flush()
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
        println!("Summary exported to: {}", path.display());
    } else {
        print!("{}", format_summary(&view, &settings.currency_symbol));
    }

    Ok(())
}

/// Handle `trend`
pub fn handle_trend(ledger: &ExpenseLedger, settings: &Settings) -> ExpenseResult<()> {
    // the trend ignores the selection, any one will do
    let view = ledger.view(&FilterSelection::default(), &Local);
    print!("{}", format_trend(&view.trend, &settings.currency_symbol));
    Ok(())
}
