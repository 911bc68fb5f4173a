//! SQLite persistence layer.
//!
//! RULE: Only store.rs talks to the database.
//! Everything above it works on typed records in memory.

use crate::{
    error::{HandbookError, HandbookResult},
    model::{Buyer, Transaction},
};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection};

pub struct TradeStore {
    conn: Connection,
}

impl TradeStore {
    /// Open (or create) the trade database at `path`.
    pub fn open(path: &str) -> HandbookResult<Self> {
        let conn = Connection::open(path)?;
        // WAL mode only for real files (:memory: ignores it).
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests and demo mode).
    pub fn in_memory() -> HandbookResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> HandbookResult<()> {
        self.conn
            .execute_batch(include_str!("../../migrations/001_trade.sql"))?;
        Ok(())
    }

    // ── Reads (the dashboard path) ────────────────────────────────

    /// Load the full transaction table, normalizing the arrival-date
    /// column to `NaiveDate` as it comes off the wire.
    pub fn all_transactions(&self) -> HandbookResult<Vec<Transaction>> {
        let mut stmt = self.conn.prepare(
            "SELECT arrival_date, buyer, supplier, weight_mt, origin_country, destination_port
             FROM trade_transaction
             ORDER BY id ASC",
        )?;
        let raw = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, f64>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, String>(5)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        raw.into_iter()
            .map(
                |(date, buyer, supplier, weight_mt, origin_country, destination_port)| {
                    Ok(Transaction {
                        arrival_date: parse_arrival_date(&date)?,
                        buyer,
                        supplier,
                        weight_mt,
                        origin_country,
                        destination_port,
                    })
                },
            )
            .collect()
    }

    /// Load the full buyer reference table in stored order.
    pub fn all_buyers(&self) -> HandbookResult<Vec<Buyer>> {
        let mut stmt = self.conn.prepare(
            "SELECT name, country, contact
             FROM buyer_info
             ORDER BY rowid ASC",
        )?;
        let buyers = stmt
            .query_map([], |row| {
                Ok(Buyer {
                    name: row.get(0)?,
                    country: row.get(1)?,
                    contact: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(buyers)
    }

    // ── Writes (ingestion tooling and tests only) ─────────────────

    pub fn insert_transaction(&self, t: &Transaction) -> HandbookResult<()> {
        self.conn.execute(
            "INSERT INTO trade_transaction
                 (arrival_date, buyer, supplier, weight_mt, origin_country, destination_port)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                t.arrival_date.format("%Y-%m-%d").to_string(),
                &t.buyer,
                &t.supplier,
                t.weight_mt,
                &t.origin_country,
                &t.destination_port,
            ],
        )?;
        Ok(())
    }

    pub fn insert_buyer(&self, b: &Buyer) -> HandbookResult<()> {
        self.conn.execute(
            "INSERT INTO buyer_info (name, country, contact) VALUES (?1, ?2, ?3)",
            params![&b.name, &b.country, &b.contact],
        )?;
        Ok(())
    }
}

/// The source data carries arrival dates either as plain dates or as
/// datetime strings with a midnight time part. Anything else is a
/// data-quality failure the session cannot proceed past.
fn parse_arrival_date(value: &str) -> HandbookResult<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.date());
    }
    Err(HandbookError::MalformedDate {
        value: value.to_string(),
    })
}
