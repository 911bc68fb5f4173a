//! report-runner: headless runner for the Rice Global Trade Handbook core.
//!
//! Usage:
//!   report-runner --db data.db --start 2024-01-01 --end 2024-06-30
//!   report-runner --db data.db --min-transactions 5 --min-volume 1000 --export-dir logs
//!   report-runner --db data.db --buyer "Golden Grain Ltd"
//!   report-runner --seed-demo            (in-memory demo dataset)

use anyhow::{Context, Result};
use chrono::NaiveDate;
use handbook_core::{
    dashboard::{OverviewRequest, ProfileRequest, QualifyRequest},
    model::{Buyer, Transaction},
    qualify::QualifyThresholds,
    Dashboard, DatasetCache, Granularity, TimeWindow, TradeStore,
};
use std::env;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let db = str_arg(&args, "--db").unwrap_or_else(|| ":memory:".to_string());
    let seed_demo = args.iter().any(|a| a == "--seed-demo");
    let start = date_arg(&args, "--start")?;
    let end = date_arg(&args, "--end")?;
    let basis = str_arg(&args, "--basis").unwrap_or_else(|| "monthly".to_string());
    let min_transactions = parse_arg(&args, "--min-transactions", 0u64);
    let min_volume = parse_arg(&args, "--min-volume", 0.0f64);
    let buyer = str_arg(&args, "--buyer");
    let export_dir = str_arg(&args, "--export-dir");

    let granularity = match basis.as_str() {
        "daily" => Granularity::Daily,
        "monthly" => Granularity::Monthly,
        other => anyhow::bail!("--basis must be 'daily' or 'monthly', got '{other}'"),
    };

    let store = if db == ":memory:" {
        TradeStore::in_memory()?
    } else {
        TradeStore::open(&db)?
    };
    store.migrate()?;
    if seed_demo {
        seed_demo_dataset(&store)?;
        log::info!("seeded in-memory demo dataset");
    }

    let mut cache = DatasetCache::new(store);
    let tables = cache.tables().context("loading base tables")?;
    let dashboard = Dashboard::new(tables);

    let window = match (start, end) {
        (Some(s), Some(e)) => Some(TimeWindow::new(s, e)),
        (None, None) => None,
        _ => anyhow::bail!("--start and --end must be given together"),
    };

    let overview = dashboard.overview(&OverviewRequest {
        window,
        granularity,
    });
    println!("{}", serde_json::to_string_pretty(&overview)?);

    let qualify_req = QualifyRequest {
        window,
        thresholds: QualifyThresholds {
            min_transactions,
            min_volume_mt: min_volume,
        },
    };
    let qualified = dashboard.qualify(&qualify_req)?;
    println!("{}", serde_json::to_string_pretty(&qualified)?);

    if let Some(dir) = export_dir {
        let file = dashboard.export(&qualify_req)?;
        let path = Path::new(&dir).join(&file.filename);
        std::fs::write(&path, &file.bytes)
            .with_context(|| format!("writing report to {}", path.display()))?;
        println!("wrote {} ({} bytes)", path.display(), file.bytes.len());
    }

    if let Some(name) = buyer {
        let profile = dashboard.profile(&ProfileRequest { buyer: name });
        println!("{}", serde_json::to_string_pretty(&profile)?);
    }

    Ok(())
}

/// A handful of shipments across two months, enough to exercise every
/// panel without a real database.
fn seed_demo_dataset(store: &TradeStore) -> Result<()> {
    let rows = [
        ("2024-01-15", "Golden Grain Ltd", "Mekong Mills", 100.0),
        ("2024-01-20", "Golden Grain Ltd", "Delta Paddy Co", 50.0),
        ("2024-02-01", "Harvest Union", "Mekong Mills", 200.0),
        ("2024-02-11", "Harvest Union", "Chao Phraya Rice", 75.0),
        ("2024-02-19", "Pearl Imports", "Delta Paddy Co", 30.0),
    ];
    for (date, buyer, supplier, weight_mt) in rows {
        store.insert_transaction(&Transaction {
            arrival_date: NaiveDate::parse_from_str(date, "%Y-%m-%d")?,
            buyer: buyer.to_string(),
            supplier: supplier.to_string(),
            weight_mt,
            origin_country: "VN".to_string(),
            destination_port: "Manila".to_string(),
        })?;
    }
    for (name, country) in [
        ("Golden Grain Ltd", "PH"),
        ("Harvest Union", "MY"),
        ("Pearl Imports", "SG"),
    ] {
        store.insert_buyer(&Buyer {
            name: name.to_string(),
            country: country.to_string(),
            contact: format!("trade@{}.example", name.to_lowercase().replace(' ', "-")),
        })?;
    }
    Ok(())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn str_arg(args: &[String], flag: &str) -> Option<String> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
}

fn date_arg(args: &[String], flag: &str) -> Result<Option<NaiveDate>> {
    match str_arg(args, flag) {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map(Some)
            .with_context(|| format!("{flag} must be YYYY-MM-DD, got '{raw}'")),
    }
}
