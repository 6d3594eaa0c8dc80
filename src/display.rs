//! Output Formatting and Display Management
//!
//! This module handles all output formatting for order analytics results.
//! It provides both human-readable terminal output with colors and
//! structured JSON output for programmatic consumption.
//!
//! ## Report Layout
//!
//! The terminal report shows, in order:
//! - Order counts and status breakdown (completed / pending / rejected)
//! - Revenue summary: total, average order value, success/rejection rates
//! - Peak hour and unique customer count
//! - Category and menu breakdowns
//! - Top-selling dishes with category and revenue
//!
//! When `json_output` is enabled the full [`AnalyticsSnapshot`] is printed
//! as pretty JSON under a `{"period": ..., "analytics": ...}` envelope.
//!
//! ## Currency
//!
//! [`format_currency`] renders amounts the way the dashboards do: rounded
//! to the nearest rupee with thousands separators, e.g. `₹1,235`.

use crate::models::AnalyticsSnapshot;
use colored::Colorize;

/// Round to the nearest integer, insert thousands separators and prefix
/// the Rupee sign. Callers treat a missing amount as `0` before calling.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let negative = rounded < 0;
    let digits = rounded.abs().to_string();

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

pub struct ReportDisplayManager;

impl Default for ReportDisplayManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportDisplayManager {
    pub fn new() -> Self {
        Self
    }

    /// Render a snapshot, either as a colored terminal report or as JSON.
    ///
    /// `limit` caps the number of top dishes and breakdown rows shown in
    /// terminal output; JSON output always carries the full snapshot.
    pub fn display_snapshot(
        &self,
        snapshot: &AnalyticsSnapshot,
        period_label: &str,
        limit: Option<usize>,
        json_output: bool,
    ) {
        if json_output {
            let output = serde_json::json!({
                "period": period_label,
                "analytics": snapshot,
            });
            match serde_json::to_string_pretty(&output) {
                Ok(json_str) => println!("{}", json_str),
                Err(e) => eprintln!("Error serializing analytics to JSON: {}", e),
            }
            return;
        }

        println!("\n{}", "=".repeat(80).bright_cyan());
        println!(
            "{}",
            format!("Order Analytics Report - {}", period_label)
                .bright_white()
                .bold()
        );
        println!("{}", "=".repeat(80).bright_cyan());

        println!(
            "\n{} {} orders • {} completed • {} pending • {} rejected\n",
            "📊".bright_yellow(),
            snapshot.total_orders.to_string().bright_white().bold(),
            snapshot.completed_orders.to_string().bright_green(),
            snapshot.pending_orders.to_string().bright_yellow(),
            snapshot.rejected_orders.to_string().bright_red()
        );

        println!(
            "   Revenue: {}   Avg order: {}",
            format_currency(snapshot.total_revenue).bright_green().bold(),
            format_currency(snapshot.avg_order_value).bright_green()
        );
        println!(
            "   Success rate: {}   Rejection rate: {}",
            format!("{:.1}%", snapshot.success_rate).bright_green(),
            format!("{:.1}%", snapshot.rejection_rate).bright_red()
        );
        println!(
            "   Peak hour: {}   Unique customers: {}",
            snapshot.peak_hour.bright_white().bold(),
            snapshot.unique_customers.to_string().bright_white().bold()
        );

        let row_limit = limit.unwrap_or(10);

        if !snapshot.category_wise_orders.is_empty() {
            println!("\n{} Orders by category:", "🍽️".bright_blue());
            let mut categories: Vec<_> = snapshot.category_wise_orders.iter().collect();
            categories.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
            for (category, count) in categories.into_iter().take(row_limit) {
                let revenue = snapshot
                    .revenue_by_category
                    .get(category)
                    .copied()
                    .unwrap_or(0.0);
                println!(
                    "   {}: {} items ({})",
                    category.bright_cyan(),
                    count.to_string().bright_white(),
                    format_currency(revenue).bright_green()
                );
            }
        }

        if !snapshot.top_selling_dishes.is_empty() {
            println!("\n{} Top selling dishes:", "🏆".bright_yellow());
            for (rank, dish) in snapshot
                .top_selling_dishes
                .iter()
                .take(row_limit)
                .enumerate()
            {
                println!(
                    "   {}. {} — {} sold ({}, {})",
                    rank + 1,
                    dish.dish.bright_white().bold(),
                    dish.count.to_string().bright_white(),
                    dish.category.bright_cyan(),
                    format_currency(dish.revenue).bright_green()
                );
            }
        }

        println!();
    }
}
