//! Analytics Orchestration
//!
//! The [`OrderAnalyticsEngine`] ties the pipeline together: it loads order
//! exports and the optional menu catalog, applies the selected time-period
//! filter, reduces the filtered orders into an [`AnalyticsSnapshot`] and
//! hands the result to the display manager.
//!
//! Each run is independent and side-effect-free apart from reading the
//! input files; snapshots are recomputed from scratch on every invocation
//! and never persisted.

use crate::analytics::calculate_order_analytics;
use crate::config::get_config;
use crate::display::ReportDisplayManager;
use crate::models::{AnalyticsSnapshot, MenuItem, OrderRecord, TimePeriod};
use crate::parser::OrderFileParser;
use crate::period::{filter_orders_by_period, period_display_text};
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Options for one report run.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub period: TimePeriod,
    /// Reference date (`YYYY-MM-DD`), consulted only for the daily period.
    pub date: Option<String>,
    pub json_output: bool,
    /// Rows shown per report section; falls back to the configured limit.
    pub limit: Option<usize>,
    /// Order exports path; falls back to the configured default.
    pub orders_path: Option<PathBuf>,
    /// Menu catalog path; falls back to the configured default.
    pub menu_path: Option<PathBuf>,
}

pub struct OrderAnalyticsEngine {
    parser: OrderFileParser,
    display_manager: ReportDisplayManager,
}

impl Default for OrderAnalyticsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderAnalyticsEngine {
    pub fn new() -> Self {
        Self {
            parser: OrderFileParser::new(),
            display_manager: ReportDisplayManager::new(),
        }
    }

    /// Load, filter and aggregate without displaying anything.
    pub fn aggregate_data(&self, options: &ReportOptions) -> Result<AnalyticsSnapshot> {
        let orders = self.load_orders(options)?;
        let menu = self.load_menu(options);

        let filtered = filter_orders_by_period(&orders, options.period, options.date.as_deref());
        debug!(
            total = orders.len(),
            filtered = filtered.len(),
            period = ?options.period,
            "Filtered orders for period"
        );

        Ok(calculate_order_analytics(&filtered, &menu))
    }

    /// Full pipeline: aggregate and render.
    pub fn run_report(&self, options: ReportOptions) -> Result<()> {
        let snapshot = self.aggregate_data(&options)?;

        if snapshot.total_orders == 0 {
            warn!("No orders found for the selected period");
        }

        let label = period_display_text(options.period, options.date.as_deref());
        let limit = options.limit.or(Some(get_config().output.row_limit));
        self.display_manager
            .display_snapshot(&snapshot, &label, limit, options.json_output);

        Ok(())
    }

    fn load_orders(&self, options: &ReportOptions) -> Result<Vec<OrderRecord>> {
        let path = options
            .orders_path
            .clone()
            .unwrap_or_else(|| get_config().paths.orders_path.clone());
        self.parser.load_orders(&path)
    }

    /// Menu catalog is optional enrichment; a missing or unreadable file
    /// degrades to an empty catalog with a warning.
    fn load_menu(&self, options: &ReportOptions) -> Vec<MenuItem> {
        let path = options
            .menu_path
            .clone()
            .unwrap_or_else(|| get_config().paths.menu_file.clone());
        if !path.exists() {
            return Vec::new();
        }
        match self.parser.load_menu(&path) {
            Ok(menu) => menu,
            Err(e) => {
                warn!(error = %e, "Failed to load menu catalog, continuing without it");
                Vec::new()
            }
        }
    }
}
