//! Order Analytics Engine
//!
//! Pure aggregation of a collection of [`OrderRecord`]s into a single
//! [`AnalyticsSnapshot`]. The computation is synchronous, side-effect-free
//! and total: malformed or missing fields degrade to `0`, `"Other"` or
//! `"N/A"` rather than erroring.
//!
//! ## Aggregates Produced
//!
//! - Status partitions: completed / pending (`received`, `preparing`,
//!   `ready`) / rejected. `served` orders fall into none of the three.
//! - Revenue: sum of `pricing.total` over completed orders only, plus
//!   average order value and success/rejection rates.
//! - Peak hour: the busiest hour-of-day across all orders, ties broken
//!   toward the smallest hour.
//! - Unique customers: distinct non-empty table identifiers.
//! - Per-category and per-menu quantity breakdowns and category revenue,
//!   walked over every line item of every order regardless of status.
//! - Top-selling dishes: quantity ranking enriched from the menu catalog,
//!   truncated to 10.

use crate::models::{AnalyticsSnapshot, MenuItem, OrderRecord, OrderStatus, TopDish};
use chrono::Timelike;
use std::collections::{HashMap, HashSet};

const TOP_DISHES_LIMIT: usize = 10;
const OTHER_CATEGORY: &str = "Other";

/// Reduce `orders` into a fresh [`AnalyticsSnapshot`].
///
/// `menu` is only consulted to enrich the top-seller ranking with
/// category and unit price; absent or mismatched entries degrade to
/// `"Other"` and zero revenue.
pub fn calculate_order_analytics(orders: &[OrderRecord], menu: &[MenuItem]) -> AnalyticsSnapshot {
    if orders.is_empty() {
        return AnalyticsSnapshot::empty();
    }

    let total_orders = orders.len() as u64;

    let mut completed_orders: u64 = 0;
    let mut pending_orders: u64 = 0;
    let mut rejected_orders: u64 = 0;
    let mut total_revenue: f64 = 0.0;

    // Hour buckets as a fixed array: scanning 0..24 makes the peak-hour
    // tie-break deterministic (smallest hour wins).
    let mut hour_counts = [0u64; 24];
    let mut tables: HashSet<&str> = HashSet::new();

    let mut category_wise_orders: HashMap<String, u64> = HashMap::new();
    let mut menu_wise_orders: HashMap<String, u64> = HashMap::new();
    let mut revenue_by_category: HashMap<String, f64> = HashMap::new();

    for order in orders {
        match order.status() {
            OrderStatus::Completed => {
                completed_orders += 1;
                total_revenue += order.total();
            }
            OrderStatus::Rejected => rejected_orders += 1,
            status if status.is_pending() => pending_orders += 1,
            // `served` is counted in no partition.
            _ => {}
        }

        if let Some(placed) = order.placed_at() {
            hour_counts[placed.hour() as usize] += 1;
        }

        if let Some(table) = order.table() {
            tables.insert(table);
        }

        for item in &order.items {
            if item.quantity < 1 {
                continue;
            }
            let quantity = item.quantity as u64;
            let category = item
                .menu_category
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| OTHER_CATEGORY.to_string());
            let unit_price = item.final_price.or(item.original_price).unwrap_or(0.0);

            *category_wise_orders.entry(category.clone()).or_insert(0) += quantity;
            *menu_wise_orders.entry(item.menu_name.clone()).or_insert(0) += quantity;
            *revenue_by_category.entry(category).or_insert(0.0) += quantity as f64 * unit_price;
        }
    }

    let avg_order_value = if completed_orders > 0 {
        total_revenue / completed_orders as f64
    } else {
        0.0
    };
    let success_rate = completed_orders as f64 / total_orders as f64 * 100.0;
    let rejection_rate = rejected_orders as f64 / total_orders as f64 * 100.0;

    AnalyticsSnapshot {
        total_orders,
        total_revenue,
        avg_order_value,
        completed_orders,
        pending_orders,
        rejected_orders,
        success_rate,
        rejection_rate,
        unique_customers: tables.len() as u64,
        peak_hour: peak_hour_label(&hour_counts),
        top_selling_dishes: rank_top_dishes(&menu_wise_orders, menu),
        category_wise_orders,
        menu_wise_orders,
        revenue_by_category,
    }
}

/// Busiest hour across all orders, formatted `"H:00"`. `"N/A"` when no
/// order carried a parseable timestamp.
fn peak_hour_label(hour_counts: &[u64; 24]) -> String {
    let mut peak: Option<(usize, u64)> = None;
    for (hour, &count) in hour_counts.iter().enumerate() {
        if count > 0 && peak.map(|(_, best)| count > best).unwrap_or(true) {
            peak = Some((hour, count));
        }
    }
    match peak {
        Some((hour, _)) => format!("{}:00", hour),
        None => "N/A".to_string(),
    }
}

/// Rank distinct menu names by total quantity, enriched from the
/// catalog. Sorted by count descending, then dish name ascending so
/// output is stable across runs; truncated to the top 10.
fn rank_top_dishes(menu_wise_orders: &HashMap<String, u64>, menu: &[MenuItem]) -> Vec<TopDish> {
    let mut dishes: Vec<TopDish> = menu_wise_orders
        .iter()
        .map(|(dish, &count)| {
            let entry = menu.iter().find(|m| m.menu_name == *dish);
            let category = entry
                .and_then(|m| m.category.clone())
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| OTHER_CATEGORY.to_string());
            let revenue = entry
                .map(|m| count as f64 * m.final_price.or(m.original_price).unwrap_or(0.0))
                .unwrap_or(0.0);
            TopDish {
                dish: dish.clone(),
                count,
                category,
                revenue,
            }
        })
        .collect();

    dishes.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.dish.cmp(&b.dish)));
    dishes.truncate(TOP_DISHES_LIMIT);
    dishes
}
