//! Order Analytics Library
//!
//! A Rust library for turning raw restaurant order exports into
//! dashboard-ready statistics. It provides time-period filtering,
//! aggregation, and report formatting for order records exported from a
//! realtime ordering backend in JSONL or JSON form.
//!
//! ## Core Features
//!
//! - **Time-period filtering**: daily / weekly / monthly / total windows
//!   applied before aggregation
//! - **Pure aggregation core**: status partitions, revenue, success and
//!   rejection rates, peak-hour detection, unique customers, category and
//!   menu breakdowns, top-selling dishes
//! - **Graceful degradation**: malformed upstream data is absorbed into
//!   safe defaults rather than surfaced as errors
//! - **Flexible output formats**: colored terminal reports or JSON
//!
//! ## Architecture Overview
//!
//! - [`models`] - Order records, menu catalog, and the analytics snapshot
//! - [`parser`] - Export discovery and JSONL/JSON parsing
//! - [`period`] - Time-period filtering and window labels
//! - [`analytics`] - The pure aggregation engine
//! - [`analyzer`] - Orchestration of the full pipeline
//! - [`display`] - Report rendering and currency formatting
//! - [`config`] - Configuration management with environment variable support
//! - [`logging`] - Structured logging with JSON and pretty-print formats
//!
//! ## Main Entry Point
//!
//! The primary interface is [`OrderAnalyticsEngine`]:
//!
//! ```rust,no_run
//! use order_analytics::{OrderAnalyticsEngine, ReportOptions, TimePeriod};
//!
//! # fn example() -> anyhow::Result<()> {
//! let engine = OrderAnalyticsEngine::new();
//! let options = ReportOptions {
//!     period: TimePeriod::Daily,
//!     date: Some("2024-01-15".to_string()),
//!     json_output: false,
//!     limit: None,
//!     orders_path: None,
//!     menu_path: None,
//! };
//!
//! let snapshot = engine.aggregate_data(&options)?;
//! # Ok(())
//! # }
//! ```
//!
//! The aggregation core is also usable directly on in-memory collections
//! via [`analytics::calculate_order_analytics`] and
//! [`period::filter_orders_by_period`].

pub mod analytics;
pub mod analyzer;
pub mod config;
pub mod display;
pub mod logging;
pub mod models;
pub mod parser;
pub mod period;

pub use analytics::calculate_order_analytics;
pub use analyzer::{OrderAnalyticsEngine, ReportOptions};
pub use display::format_currency;
pub use models::*;
pub use period::{filter_orders_by_period, period_display_text};
