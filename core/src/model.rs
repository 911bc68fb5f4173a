//! Typed records for the two base tables.
//!
//! Columns are fixed at compile time — no dynamic column lookup by string
//! name anywhere in the core.

use crate::types::{BuyerName, SupplierName};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One rice shipment, keyed in time by its actual arrival date.
/// Immutable, read-only fact loaded at session start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub arrival_date: NaiveDate,
    pub buyer: BuyerName,
    pub supplier: SupplierName,
    pub weight_mt: f64,
    pub origin_country: String,
    pub destination_port: String,
}

/// One row of the buyer reference table. `name` is unique and matches the
/// transaction table's buyer column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Buyer {
    pub name: BuyerName,
    pub country: String,
    pub contact: String,
}
