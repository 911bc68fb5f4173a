//! Time bucketing for the overview charts.

use crate::types::PeriodKey;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Daily,
    Monthly,
}

impl Granularity {
    /// Derive the bucket key for a date.
    ///
    /// Monthly keys are "YYYYMM" with a zero-padded month, daily keys are
    /// the ISO date string. Both sort lexicographically in chronological
    /// order, which is what keeps the charts' category axes honest.
    pub fn period_key(&self, date: NaiveDate) -> PeriodKey {
        match self {
            Granularity::Daily => date.format("%Y-%m-%d").to_string(),
            Granularity::Monthly => format!("{:04}{:02}", date.year(), date.month()),
        }
    }
}
