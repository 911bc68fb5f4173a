//! Request/response handlers — one per UI event.
//!
//! The surrounding UI owns widgets and rendering; it talks to this layer
//! with explicit parameter structs and gets plain data back. Every handler
//! is a pure function over the immutable base tables, so repeated calls
//! with identical requests return identical responses.

use crate::{
    aggregate::{self, OverviewStats, PeriodicAggregate},
    cache::BaseTables,
    error::HandbookResult,
    period::Granularity,
    profile::{self, BuyerProfile},
    qualify::{self, QualifiedBuyer, QualifyThresholds},
    report::{self, ReportFile},
    window::{self, TimeWindow},
};
use chrono::Local;
use serde::{Deserialize, Serialize};

/// Overview panel: window change or time-basis toggle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewRequest {
    /// `None` means the full dataset range.
    pub window: Option<TimeWindow>,
    pub granularity: Granularity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewResponse {
    pub window: TimeWindow,
    pub stats: OverviewStats,
    pub aggregate: PeriodicAggregate,
}

/// Buyer Filter panel: "Generate" submitted with thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualifyRequest {
    pub window: Option<TimeWindow>,
    #[serde(default)]
    pub thresholds: QualifyThresholds,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualifyResponse {
    pub qualified: Vec<QualifiedBuyer>,
}

/// Buyer Information panel: a buyer picked from the dropdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRequest {
    pub buyer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub buyer: String,
    pub profile: BuyerProfile,
}

/// The handler set, borrowing the session's loaded base tables.
pub struct Dashboard<'a> {
    tables: &'a BaseTables,
}

impl<'a> Dashboard<'a> {
    pub fn new(tables: &'a BaseTables) -> Self {
        Self { tables }
    }

    /// Headline stats and period charts for the requested window.
    pub fn overview(&self, req: &OverviewRequest) -> OverviewResponse {
        let win = req.window.unwrap_or_else(|| self.tables.full_window());
        let in_window = window::filter_window(&self.tables.transactions, &win);
        OverviewResponse {
            window: win,
            stats: aggregate::overview_stats(&in_window),
            aggregate: aggregate::aggregate(&in_window, req.granularity),
        }
    }

    /// Buyers clearing both activity thresholds within the window.
    pub fn qualify(&self, req: &QualifyRequest) -> HandbookResult<QualifyResponse> {
        let win = req.window.unwrap_or_else(|| self.tables.full_window());
        let in_window = window::filter_window(&self.tables.transactions, &win);
        let qualified = qualify::qualify(&in_window, &self.tables.buyers, req.thresholds)?;
        Ok(QualifyResponse { qualified })
    }

    /// Drill-down for one buyer. Runs over the full transaction table —
    /// the detail panel ignores the overview window on purpose.
    pub fn profile(&self, req: &ProfileRequest) -> ProfileResponse {
        ProfileResponse {
            buyer: req.buyer.clone(),
            profile: profile::profile(&self.tables.transactions, &req.buyer),
        }
    }

    /// Recompute the qualification and serialize it for download.
    pub fn export(&self, req: &QualifyRequest) -> HandbookResult<ReportFile> {
        let response = self.qualify(req)?;
        report::build_report(&response.qualified, Local::now())
    }
}
