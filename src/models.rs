//! Core Data Models
//!
//! This module defines the primary data structures used throughout the order
//! analytics system. These models represent the complete pipeline from raw
//! order exports to dashboard-ready statistics.
//!
//! ## Data Flow
//!
//! 1. **Raw Data**: [`OrderRecord`] - Individual orders parsed from JSONL/JSON exports
//! 2. **Filtering**: [`TimePeriod`] - Window selection applied before aggregation
//! 3. **Output**: [`AnalyticsSnapshot`] - Aggregated statistics for display or JSON export
//!
//! ## Core Types
//!
//! ### Order Structure
//! - [`OrderRecord`] - Top-level wrapper for a single order
//! - [`LineItem`] - One ordered menu item with quantity and pricing
//! - [`Pricing`], [`Timestamps`], [`KitchenInfo`], [`CustomerInfo`] - Nested order fields
//!
//! ### Catalog
//! - [`MenuItem`] - Menu catalog entry used to enrich top-seller rankings
//!
//! ### Derived Statistics
//! - [`AnalyticsSnapshot`] - Full aggregate view, recomputed per invocation
//! - [`TopDish`] - One entry in the top-selling ranking
//!
//! ## Status Normalization
//!
//! Order exports carry status either at the top level or nested under
//! `kitchen.status`. That dual-field fallback is collapsed once, at
//! [`OrderRecord::status`], so aggregation code only ever sees the
//! [`OrderStatus`] enum. Unrecognized or missing values resolve to
//! [`OrderStatus::Received`].

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One order line item. Quantities below 1 are treated as absent by
/// every aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "menuName")]
    pub menu_name: String,
    #[serde(rename = "menuCategory")]
    pub menu_category: Option<String>,
    #[serde(default)]
    pub quantity: i64,
    #[serde(rename = "finalPrice")]
    pub final_price: Option<f64>,
    #[serde(rename = "originalPrice")]
    pub original_price: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Pricing {
    #[serde(default)]
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Timestamps {
    #[serde(rename = "orderPlaced")]
    pub order_placed: Option<String>,
    #[serde(rename = "orderDate")]
    pub order_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KitchenInfo {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CustomerInfo {
    #[serde(rename = "tableNumber")]
    pub table_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
    pub pricing: Option<Pricing>,
    pub status: Option<String>,
    pub kitchen: Option<KitchenInfo>,
    pub timestamps: Option<Timestamps>,
    #[serde(rename = "tableNumber")]
    pub table_number: Option<String>,
    #[serde(rename = "customerInfo")]
    pub customer_info: Option<CustomerInfo>,
}

/// Normalized order status.
///
/// `Served` deliberately belongs to none of the completed/pending/rejected
/// partitions, so partition counts may sum to less than `totalOrders`.
/// This mirrors the upstream dashboard semantics and is documented rather
/// than folded away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Received,
    Preparing,
    Ready,
    Served,
    Completed,
    Rejected,
}

impl OrderStatus {
    /// Parse a raw status string, resolving anything unrecognized to
    /// `Received`.
    pub fn parse_lossy(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "preparing" => OrderStatus::Preparing,
            "ready" => OrderStatus::Ready,
            "served" => OrderStatus::Served,
            "completed" => OrderStatus::Completed,
            "rejected" => OrderStatus::Rejected,
            _ => OrderStatus::Received,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            OrderStatus::Received | OrderStatus::Preparing | OrderStatus::Ready
        )
    }
}

impl OrderRecord {
    /// Resolve the normalized status: top-level `status` first, then
    /// `kitchen.status`, defaulting to `Received`.
    pub fn status(&self) -> OrderStatus {
        self.status
            .as_deref()
            .or_else(|| self.kitchen.as_ref().and_then(|k| k.status.as_deref()))
            .map(OrderStatus::parse_lossy)
            .unwrap_or(OrderStatus::Received)
    }

    /// Final order amount, `0.0` when pricing is missing.
    pub fn total(&self) -> f64 {
        self.pricing.as_ref().map(|p| p.total).unwrap_or(0.0)
    }

    /// Wall-clock placement time, parsed leniently from `orderPlaced`.
    ///
    /// Accepts RFC 3339 as well as naive `YYYY-MM-DDTHH:MM:SS[.frac]`
    /// strings. No timezone normalization is applied; bucketing is by
    /// wall-clock time as written.
    pub fn placed_at(&self) -> Option<NaiveDateTime> {
        let raw = self
            .timestamps
            .as_ref()
            .and_then(|t| t.order_placed.as_deref())?;
        parse_wall_clock(raw)
    }

    /// Derived `YYYY-MM-DD` order date: prefers an explicit
    /// `timestamps.orderDate`, otherwise derives from `orderPlaced`.
    /// `None` when neither is present and parseable.
    pub fn order_date(&self) -> Option<String> {
        let ts = self.timestamps.as_ref()?;
        if let Some(date) = ts.order_date.as_deref() {
            if !date.is_empty() {
                return Some(date.to_string());
            }
        }
        self.placed_at().map(|dt| dt.format("%Y-%m-%d").to_string())
    }

    /// Derived order date as a typed value, for range comparisons.
    pub fn order_naive_date(&self) -> Option<NaiveDate> {
        self.order_date()
            .and_then(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d").ok())
    }

    /// Table identifier used to approximate unique customers. Empty
    /// strings count as absent.
    pub fn table(&self) -> Option<&str> {
        self.table_number
            .as_deref()
            .or_else(|| {
                self.customer_info
                    .as_ref()
                    .and_then(|c| c.table_number.as_deref())
            })
            .filter(|t| !t.is_empty())
    }
}

fn parse_wall_clock(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for fmt in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    None
}

/// Menu catalog entry, used only to enrich top-seller rankings with
/// category and unit price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "menuName")]
    pub menu_name: String,
    pub category: Option<String>,
    #[serde(rename = "finalPrice")]
    pub final_price: Option<f64>,
    #[serde(rename = "originalPrice")]
    pub original_price: Option<f64>,
}

/// Time window applied before aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimePeriod {
    Daily,
    Weekly,
    Monthly,
    Total,
}

/// One entry in the top-selling ranking.
#[derive(Debug, Clone, Serialize)]
pub struct TopDish {
    pub dish: String,
    pub count: u64,
    pub category: String,
    pub revenue: f64,
}

/// Aggregated dashboard statistics. Recomputed fresh on every
/// invocation; never persisted or mutated after construction.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsSnapshot {
    #[serde(rename = "totalOrders")]
    pub total_orders: u64,
    #[serde(rename = "totalRevenue")]
    pub total_revenue: f64,
    #[serde(rename = "avgOrderValue")]
    pub avg_order_value: f64,
    #[serde(rename = "completedOrders")]
    pub completed_orders: u64,
    #[serde(rename = "pendingOrders")]
    pub pending_orders: u64,
    #[serde(rename = "rejectedOrders")]
    pub rejected_orders: u64,
    #[serde(rename = "successRate")]
    pub success_rate: f64,
    #[serde(rename = "rejectionRate")]
    pub rejection_rate: f64,
    #[serde(rename = "uniqueCustomers")]
    pub unique_customers: u64,
    #[serde(rename = "peakHour")]
    pub peak_hour: String,
    #[serde(rename = "categoryWiseOrders")]
    pub category_wise_orders: HashMap<String, u64>,
    #[serde(rename = "menuWiseOrders")]
    pub menu_wise_orders: HashMap<String, u64>,
    #[serde(rename = "revenueByCategory")]
    pub revenue_by_category: HashMap<String, f64>,
    #[serde(rename = "topSellingDishes")]
    pub top_selling_dishes: Vec<TopDish>,
}

impl AnalyticsSnapshot {
    /// The defined base case for an empty order collection.
    pub fn empty() -> Self {
        Self {
            total_orders: 0,
            total_revenue: 0.0,
            avg_order_value: 0.0,
            completed_orders: 0,
            pending_orders: 0,
            rejected_orders: 0,
            success_rate: 0.0,
            rejection_rate: 0.0,
            unique_customers: 0,
            peak_hour: "N/A".to_string(),
            category_wise_orders: HashMap::new(),
            menu_wise_orders: HashMap::new(),
            revenue_by_category: HashMap::new(),
            top_selling_dishes: Vec::new(),
        }
    }
}
