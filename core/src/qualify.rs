//! Buyer qualification — the "Buyer Filter" panel's business rule.
//!
//! One pass over the windowed transactions builds per-buyer activity, one
//! pass over the buyer reference table probes it. An explicit hash-join:
//! no merge machinery, no accidental cross products.

use crate::{
    error::{HandbookError, HandbookResult},
    model::{Buyer, Transaction},
    types::BuyerName,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A buyer that cleared both thresholds, annotated with its activity in
/// the considered window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualifiedBuyer {
    pub name: BuyerName,
    pub country: String,
    pub contact: String,
    pub transaction_count: u64,
    pub volume_mt: f64,
}

/// Minimum-activity thresholds. Both comparisons are strict: a buyer
/// sitting exactly on a threshold does not qualify.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualifyThresholds {
    pub min_transactions: u64,
    pub min_volume_mt: f64,
}

impl Default for QualifyThresholds {
    fn default() -> Self {
        Self {
            min_transactions: 0,
            min_volume_mt: 0.0,
        }
    }
}

impl QualifyThresholds {
    /// The core validates parameters, not the UI.
    pub fn validate(&self) -> HandbookResult<()> {
        if !self.min_volume_mt.is_finite() || self.min_volume_mt < 0.0 {
            return Err(HandbookError::InvalidParameter(format!(
                "min_volume_mt must be finite and >= 0, got {}",
                self.min_volume_mt
            )));
        }
        Ok(())
    }
}

/// Join per-buyer activity onto the buyer table and keep the rows strictly
/// above both thresholds.
///
/// Buyers absent from `transactions` have no activity to compare and never
/// qualify, whatever the thresholds. Output order follows the buyer table.
pub fn qualify(
    transactions: &[Transaction],
    buyers: &[Buyer],
    thresholds: QualifyThresholds,
) -> HandbookResult<Vec<QualifiedBuyer>> {
    thresholds.validate()?;

    let mut activity: HashMap<&str, (u64, f64)> = HashMap::new();
    for t in transactions {
        let entry = activity.entry(t.buyer.as_str()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += t.weight_mt;
    }

    let qualified = buyers
        .iter()
        .filter_map(|b| {
            let &(count, volume) = activity.get(b.name.as_str())?;
            let clears = count > thresholds.min_transactions
                && volume > thresholds.min_volume_mt;
            clears.then(|| QualifiedBuyer {
                name: b.name.clone(),
                country: b.country.clone(),
                contact: b.contact.clone(),
                transaction_count: count,
                volume_mt: volume,
            })
        })
        .collect();

    Ok(qualified)
}
