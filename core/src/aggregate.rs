//! Periodic aggregation for the overview panel.
//!
//! Volume, distinct-participant counts per period, and the two top-10
//! buyer rankings driving the horizontal bar charts.

use crate::{
    model::Transaction,
    period::Granularity,
    types::{BuyerName, PeriodKey},
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Headline metrics for the overview tiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewStats {
    pub transaction_count: u64,
    pub total_volume_mt: f64,
    pub buyer_count: u64,
    pub supplier_count: u64,
}

/// One bar of the top-10-by-volume chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyerVolumeRank {
    pub buyer: BuyerName,
    pub volume_mt: f64,
}

/// One bar of the top-10-by-transaction-count chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyerCountRank {
    pub buyer: BuyerName,
    pub transactions: u64,
}

/// Everything the overview charts need for one (window, granularity) pair.
///
/// Period maps are keyed by period key; BTreeMap ordering plus the key
/// format guarantees chronological iteration. Only periods observed in the
/// input appear — empty periods are never synthesized.
///
/// The top-10 lists are ranked over the whole input (not per period), held
/// in ascending order with the last-10 slice kept — the bar charts read
/// bottom-up, so the biggest buyer lands on the top bar. Daily granularity
/// leaves both lists empty: the rankings are a monthly-basis feature of the
/// overview panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodicAggregate {
    pub volume_by_period: BTreeMap<PeriodKey, f64>,
    pub buyer_count_by_period: BTreeMap<PeriodKey, u64>,
    pub supplier_count_by_period: BTreeMap<PeriodKey, u64>,
    pub top_buyers_by_volume: Vec<BuyerVolumeRank>,
    pub top_buyers_by_count: Vec<BuyerCountRank>,
}

const TOP_N: usize = 10;

/// Compute the overview tiles for a (already windowed) transaction set.
pub fn overview_stats(transactions: &[Transaction]) -> OverviewStats {
    let buyers: HashSet<&str> = transactions.iter().map(|t| t.buyer.as_str()).collect();
    let suppliers: HashSet<&str> = transactions.iter().map(|t| t.supplier.as_str()).collect();
    OverviewStats {
        transaction_count: transactions.len() as u64,
        total_volume_mt: transactions.iter().map(|t| t.weight_mt).sum(),
        buyer_count: buyers.len() as u64,
        supplier_count: suppliers.len() as u64,
    }
}

/// Group a (already windowed) transaction set by period.
///
/// Empty input yields an all-empty aggregate, never an error. Pure
/// function: identical inputs always produce identical output.
pub fn aggregate(transactions: &[Transaction], granularity: Granularity) -> PeriodicAggregate {
    let mut volume_by_period: BTreeMap<PeriodKey, f64> = BTreeMap::new();
    let mut buyers_by_period: BTreeMap<PeriodKey, HashSet<&str>> = BTreeMap::new();
    let mut suppliers_by_period: BTreeMap<PeriodKey, HashSet<&str>> = BTreeMap::new();

    for t in transactions {
        let key = granularity.period_key(t.arrival_date);
        *volume_by_period.entry(key.clone()).or_insert(0.0) += t.weight_mt;
        buyers_by_period
            .entry(key.clone())
            .or_default()
            .insert(t.buyer.as_str());
        suppliers_by_period
            .entry(key)
            .or_default()
            .insert(t.supplier.as_str());
    }

    let distinct = |m: BTreeMap<PeriodKey, HashSet<&str>>| {
        m.into_iter()
            .map(|(k, set)| (k, set.len() as u64))
            .collect::<BTreeMap<PeriodKey, u64>>()
    };

    let (top_buyers_by_volume, top_buyers_by_count) = match granularity {
        Granularity::Monthly => top_buyers(transactions),
        // The daily basis never ranked buyers in the overview panel.
        Granularity::Daily => (Vec::new(), Vec::new()),
    };

    PeriodicAggregate {
        volume_by_period,
        buyer_count_by_period: distinct(buyers_by_period),
        supplier_count_by_period: distinct(suppliers_by_period),
        top_buyers_by_volume,
        top_buyers_by_count,
    }
}

/// Whole-input buyer totals, ranked ascending with the last 10 kept.
///
/// First-appearance order is preserved through the stable sort, so ties
/// resolve to input order. Fewer than 10 distinct buyers means everyone
/// makes the chart.
fn top_buyers(transactions: &[Transaction]) -> (Vec<BuyerVolumeRank>, Vec<BuyerCountRank>) {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<(BuyerName, f64, u64)> = Vec::new();

    for t in transactions {
        let slot = *index.entry(t.buyer.as_str()).or_insert_with(|| {
            totals.push((t.buyer.clone(), 0.0, 0));
            totals.len() - 1
        });
        totals[slot].1 += t.weight_mt;
        totals[slot].2 += 1;
    }

    let mut by_volume = totals.clone();
    by_volume.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    let by_volume = last_n(by_volume, TOP_N)
        .into_iter()
        .map(|(buyer, volume_mt, _)| BuyerVolumeRank { buyer, volume_mt })
        .collect();

    let mut by_count = totals;
    by_count.sort_by_key(|entry| entry.2);
    let by_count = last_n(by_count, TOP_N)
        .into_iter()
        .map(|(buyer, _, transactions)| BuyerCountRank {
            buyer,
            transactions,
        })
        .collect();

    (by_volume, by_count)
}

fn last_n<T>(mut v: Vec<T>, n: usize) -> Vec<T> {
    if v.len() > n {
        v.drain(..v.len() - n);
    }
    v
}
