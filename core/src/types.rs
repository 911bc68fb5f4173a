//! Shared primitive types used across the entire core.

/// A buyer's unique display name — the join key between the transaction
/// table's BUYER column and the buyer reference table.
pub type BuyerName = String;

/// A supplier identifier as it appears in the transaction table.
pub type SupplierName = String;

/// A period bucket key: "YYYYMM" (monthly) or "YYYY-MM-DD" (daily).
/// Both forms sort lexicographically in chronological order.
pub type PeriodKey = String;
