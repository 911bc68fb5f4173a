//! Time-window filtering along the arrival-date axis.

use crate::model::Transaction;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A closed interval of arrival dates, both bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TimeWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Keep the transactions whose arrival date falls inside `window`.
///
/// An inverted window (start > end) matches nothing and returns an empty
/// vec — a dashboard degrades gracefully rather than erroring.
pub fn filter_window(transactions: &[Transaction], window: &TimeWindow) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| window.contains(t.arrival_date))
        .cloned()
        .collect()
}
