//! Single-buyer drill-down for the "Buyer Information" panel.

use crate::{model::Transaction, period::Granularity, types::PeriodKey};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// One buyer's trading history, summarized.
///
/// The time series are always monthly, whatever basis the overview panel
/// is set to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyerProfile {
    pub supplier_count: u64,
    pub transaction_count: u64,
    pub total_volume_mt: f64,
    pub monthly_volume: BTreeMap<PeriodKey, f64>,
    pub monthly_supplier_count: BTreeMap<PeriodKey, u64>,
}

/// Summarize one buyer's transactions.
///
/// A name matching nothing yields an all-zero profile with empty series —
/// an unknown buyer is a blank panel, not an error.
pub fn profile(transactions: &[Transaction], buyer: &str) -> BuyerProfile {
    let mut suppliers: HashSet<&str> = HashSet::new();
    let mut transaction_count = 0u64;
    let mut total_volume_mt = 0.0f64;
    let mut monthly_volume: BTreeMap<PeriodKey, f64> = BTreeMap::new();
    let mut monthly_suppliers: BTreeMap<PeriodKey, HashSet<&str>> = BTreeMap::new();

    for t in transactions.iter().filter(|t| t.buyer == buyer) {
        suppliers.insert(t.supplier.as_str());
        transaction_count += 1;
        total_volume_mt += t.weight_mt;

        let key = Granularity::Monthly.period_key(t.arrival_date);
        *monthly_volume.entry(key.clone()).or_insert(0.0) += t.weight_mt;
        monthly_suppliers
            .entry(key)
            .or_default()
            .insert(t.supplier.as_str());
    }

    BuyerProfile {
        supplier_count: suppliers.len() as u64,
        transaction_count,
        total_volume_mt,
        monthly_volume,
        monthly_supplier_count: monthly_suppliers
            .into_iter()
            .map(|(k, set)| (k, set.len() as u64))
            .collect(),
    }
}
