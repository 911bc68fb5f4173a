//! handbook-core — the analytics core of the Rice Global Trade Handbook.
//!
//! The dashboard UI (out of scope here) supplies parameters; this crate
//! answers them with derived tables computed from two immutable base
//! tables loaded once per session: trade transactions and buyer profiles.
//!
//! RULES:
//!   - Only store.rs talks to the database.
//!   - Base tables are loaded once into DatasetCache and never mutated.
//!   - Every handler is a pure function of its request struct; derived
//!     tables are recomputed per call and never persisted.

pub mod aggregate;
pub mod cache;
pub mod dashboard;
pub mod error;
pub mod model;
pub mod period;
pub mod profile;
pub mod qualify;
pub mod report;
pub mod store;
pub mod types;
pub mod window;

pub use cache::{BaseTables, DatasetCache};
pub use dashboard::Dashboard;
pub use error::{HandbookError, HandbookResult};
pub use period::Granularity;
pub use store::TradeStore;
pub use window::TimeWindow;
