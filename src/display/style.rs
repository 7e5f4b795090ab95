//! Currency and date presentation
//!
//! Terminal output renders amounts and dates through an [`OutputStyle`]
//! built from the user's settings. CSV exports keep the fixed machine
//! formats and never go through it.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::models::Money;

/// Fallback when the configured strftime pattern cannot be rendered
const ISO_DATE: &str = "%Y-%m-%d";

/// How amounts and dates appear in terminal output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputStyle {
    pub currency_symbol: String,
    pub date_format: String,
}

impl OutputStyle {
    pub fn new(currency_symbol: impl Into<String>, date_format: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            date_format: date_format.into(),
        }
    }

    /// Format an amount with the configured symbol, e.g. `-€12.50`
    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Format a date with the configured pattern
    ///
    /// An invalid pattern falls back to `YYYY-MM-DD` instead of failing.
    pub fn date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.date_format)).is_err() {
            return date.format(ISO_DATE).to_string();
        }
        out
    }
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self::new("$", ISO_DATE)
    }
}

impl From<&Settings> for OutputStyle {
    fn from(settings: &Settings) -> Self {
        Self::new(settings.currency_symbol.clone(), settings.date_format.clone())
    }
}
