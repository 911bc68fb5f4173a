//! Session-scoped base-table cache.
//!
//! The two base tables are read once per session and held immutable; every
//! handler works from `&BaseTables`. Refreshing the dataset is an explicit
//! `invalidate()` + `reload()`, not implicit memoization.

use crate::{
    error::{HandbookError, HandbookResult},
    model::{Buyer, Transaction},
    store::TradeStore,
    window::TimeWindow,
};
use chrono::NaiveDate;

/// Everything the handlers need, loaded in one pass.
#[derive(Debug)]
pub struct BaseTables {
    pub transactions: Vec<Transaction>,
    pub buyers: Vec<Buyer>,
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
}

impl BaseTables {
    /// The default time window: the full span of the dataset.
    pub fn full_window(&self) -> TimeWindow {
        TimeWindow {
            start: self.min_date,
            end: self.max_date,
        }
    }
}

/// Read-through cache over a `TradeStore`. Constructed once at startup and
/// passed by reference to whatever serves requests.
pub struct DatasetCache {
    store: TradeStore,
    tables: Option<BaseTables>,
}

impl DatasetCache {
    pub fn new(store: TradeStore) -> Self {
        Self {
            store,
            tables: None,
        }
    }

    /// Borrow the cached tables, loading them on first use.
    ///
    /// An empty transaction or buyer table is fatal to the session
    /// (there is no stale copy to fall back on).
    pub fn tables(&mut self) -> HandbookResult<&BaseTables> {
        if self.tables.is_none() {
            self.tables = Some(self.load()?);
        }
        Ok(self.tables.as_ref().unwrap())
    }

    /// Drop the cached tables; the next `tables()` call re-reads the store.
    pub fn invalidate(&mut self) {
        self.tables = None;
    }

    /// Invalidate and load in one step.
    pub fn reload(&mut self) -> HandbookResult<&BaseTables> {
        self.invalidate();
        self.tables()
    }

    fn load(&self) -> HandbookResult<BaseTables> {
        let transactions = self.store.all_transactions()?;
        let buyers = self.store.all_buyers()?;

        if transactions.is_empty() {
            return Err(HandbookError::MissingBaseData(
                "transaction table is empty".into(),
            ));
        }
        if buyers.is_empty() {
            return Err(HandbookError::MissingBaseData(
                "buyer table is empty".into(),
            ));
        }

        // Non-empty, so min/max exist.
        let min_date = transactions.iter().map(|t| t.arrival_date).min().unwrap();
        let max_date = transactions.iter().map(|t| t.arrival_date).max().unwrap();

        log::info!(
            "loaded {} transactions ({min_date}..{max_date}) and {} buyers",
            transactions.len(),
            buyers.len()
        );

        Ok(BaseTables {
            transactions,
            buyers,
            min_date,
            max_date,
        })
    }
}
