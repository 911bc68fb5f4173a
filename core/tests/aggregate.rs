use chrono::NaiveDate;
use handbook_core::{
    aggregate::{aggregate, overview_stats},
    model::Transaction,
    Granularity,
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn txn(arrival: &str, buyer: &str, supplier: &str, weight_mt: f64) -> Transaction {
    Transaction {
        arrival_date: date(arrival),
        buyer: buyer.into(),
        supplier: supplier.into(),
        weight_mt,
        origin_country: "VN".into(),
        destination_port: "Manila".into(),
    }
}

/// The worked scenario from the panel walkthrough: two January shipments by
/// buyer A from two suppliers, one February shipment by buyer B.
fn scenario() -> Vec<Transaction> {
    vec![
        txn("2024-01-15", "A", "X", 100.0),
        txn("2024-01-20", "A", "Y", 50.0),
        txn("2024-02-01", "B", "X", 200.0),
    ]
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// Monthly aggregation of the scenario: per-month volume sums and distinct
/// buyer counts land in zero-padded "YYYYMM" buckets.
#[test]
fn monthly_scenario_buckets() {
    let agg = aggregate(&scenario(), Granularity::Monthly);

    assert_eq!(agg.volume_by_period.len(), 2);
    assert_eq!(agg.volume_by_period["202401"], 150.0);
    assert_eq!(agg.volume_by_period["202402"], 200.0);

    assert_eq!(agg.buyer_count_by_period["202401"], 1, "A alone in January");
    assert_eq!(agg.buyer_count_by_period["202402"], 1, "B alone in February");
    assert_eq!(
        agg.supplier_count_by_period["202401"], 2,
        "X and Y both shipped in January"
    );
}

/// All input in a single month: exactly one volume row, equal to the total.
#[test]
fn single_period_sums_everything() {
    let data = vec![
        txn("2024-03-02", "A", "X", 10.0),
        txn("2024-03-15", "B", "X", 20.0),
        txn("2024-03-28", "C", "Y", 30.0),
    ];
    let agg = aggregate(&data, Granularity::Monthly);
    assert_eq!(agg.volume_by_period.len(), 1, "one month, one row");
    assert_eq!(agg.volume_by_period["202403"], 60.0);
}

/// Distinct counts must count identifiers, not rows.
#[test]
fn per_period_counts_are_distinct_not_row_counts() {
    let data = vec![
        txn("2024-01-03", "A", "X", 1.0),
        txn("2024-01-09", "A", "X", 1.0),
        txn("2024-01-27", "A", "X", 1.0),
    ];
    let agg = aggregate(&data, Granularity::Monthly);
    assert_eq!(agg.buyer_count_by_period["202401"], 1);
    assert_eq!(agg.supplier_count_by_period["202401"], 1);
}

/// Daily granularity buckets by the literal date and never populates the
/// two top-10 rankings — a monthly-basis feature of the overview panel.
#[test]
fn daily_keys_and_no_rankings() {
    let agg = aggregate(&scenario(), Granularity::Daily);

    assert_eq!(agg.volume_by_period.len(), 3, "three distinct days");
    assert_eq!(agg.volume_by_period["2024-01-15"], 100.0);
    assert!(agg.top_buyers_by_volume.is_empty());
    assert!(agg.top_buyers_by_count.is_empty());
}

/// Top-10 lists hold at most 10 distinct buyers, each once, ascending.
#[test]
fn top10_is_capped_ascending_and_duplicate_free() {
    let mut data = Vec::new();
    for i in 0..15 {
        // Buyer b00 ships 1 MT, b01 ships 2 MT, … b14 ships 15 MT.
        data.push(txn("2024-04-10", &format!("b{i:02}"), "X", (i + 1) as f64));
    }
    let agg = aggregate(&data, Granularity::Monthly);

    let ranks = &agg.top_buyers_by_volume;
    assert_eq!(ranks.len(), 10, "ranking is capped at 10");
    for pair in ranks.windows(2) {
        assert!(
            pair[0].volume_mt <= pair[1].volume_mt,
            "ranking must ascend: {} before {}",
            pair[0].volume_mt,
            pair[1].volume_mt
        );
    }
    // The 5 smallest shippers (b00..b04) fell off; the biggest is last.
    assert_eq!(ranks.first().unwrap().buyer, "b05");
    assert_eq!(ranks.last().unwrap().buyer, "b14");

    let mut names: Vec<&str> = ranks.iter().map(|r| r.buyer.as_str()).collect();
    names.dedup();
    assert_eq!(names.len(), 10, "each buyer appears once");
}

/// Fewer than 10 distinct buyers: everyone makes the chart.
#[test]
fn top10_returns_all_buyers_when_fewer_than_ten() {
    let agg = aggregate(&scenario(), Granularity::Monthly);
    assert_eq!(agg.top_buyers_by_volume.len(), 2);
    assert_eq!(agg.top_buyers_by_count.len(), 2);
    // A shipped 150 MT over two transactions, B 200 MT over one.
    assert_eq!(agg.top_buyers_by_volume.last().unwrap().buyer, "B");
    assert_eq!(agg.top_buyers_by_count.last().unwrap().buyer, "A");
    assert_eq!(agg.top_buyers_by_count.last().unwrap().transactions, 2);
}

/// Tied buyers keep their input order through the ranking (stable sort).
#[test]
fn top10_ties_keep_input_order() {
    let data = vec![
        txn("2024-05-01", "first", "X", 10.0),
        txn("2024-05-02", "second", "X", 10.0),
        txn("2024-05-03", "third", "X", 10.0),
    ];
    let agg = aggregate(&data, Granularity::Monthly);
    let names: Vec<&str> = agg
        .top_buyers_by_volume
        .iter()
        .map(|r| r.buyer.as_str())
        .collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

/// Empty input: every table empty, nothing fails.
#[test]
fn empty_input_yields_empty_aggregate() {
    let agg = aggregate(&[], Granularity::Monthly);
    assert!(agg.volume_by_period.is_empty());
    assert!(agg.buyer_count_by_period.is_empty());
    assert!(agg.supplier_count_by_period.is_empty());
    assert!(agg.top_buyers_by_volume.is_empty());
    assert!(agg.top_buyers_by_count.is_empty());
}

/// Pure function: the same input aggregated twice gives identical output.
#[test]
fn aggregation_is_idempotent() {
    let data = scenario();
    let first = aggregate(&data, Granularity::Monthly);
    let second = aggregate(&data, Granularity::Monthly);
    assert_eq!(first, second, "no hidden state may drift between calls");
}

/// The overview tiles: row count, volume sum, distinct participants.
#[test]
fn overview_tiles_match_the_scenario() {
    let stats = overview_stats(&scenario());
    assert_eq!(stats.transaction_count, 3);
    assert_eq!(stats.total_volume_mt, 350.0);
    assert_eq!(stats.buyer_count, 2);
    assert_eq!(stats.supplier_count, 2);
}
