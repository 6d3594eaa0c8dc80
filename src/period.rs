//! Time-Period Filtering
//!
//! Selects the subset of orders that falls inside a [`TimePeriod`] window
//! before aggregation, and produces the human-readable label for the
//! selected window.
//!
//! Weekly and monthly windows are anchored to the moment of invocation
//! (the calendar week Sunday-Saturday, or calendar month, containing
//! today); the reference date is only consulted for the daily window.
//! Orders with malformed or missing dates are silently excluded from
//! date-bounded windows rather than erroring.

use crate::models::{OrderRecord, TimePeriod};
use chrono::{Datelike, Duration, Local, NaiveDate};

/// Filter `orders` down to the selected period.
///
/// `reference_date` (`YYYY-MM-DD`) is required only for
/// [`TimePeriod::Daily`]; weekly/monthly anchor to today.
pub fn filter_orders_by_period(
    orders: &[OrderRecord],
    period: TimePeriod,
    reference_date: Option<&str>,
) -> Vec<OrderRecord> {
    filter_with_today(orders, period, reference_date, Local::now().date_naive())
}

/// Same as [`filter_orders_by_period`] with an explicit anchor date.
pub fn filter_with_today(
    orders: &[OrderRecord],
    period: TimePeriod,
    reference_date: Option<&str>,
    today: NaiveDate,
) -> Vec<OrderRecord> {
    match period {
        TimePeriod::Total => orders.to_vec(),
        TimePeriod::Daily => {
            // String equality on YYYY-MM-DD; malformed dates never match.
            let wanted = reference_date.unwrap_or_default();
            orders
                .iter()
                .filter(|o| o.order_date().as_deref() == Some(wanted) && !wanted.is_empty())
                .cloned()
                .collect()
        }
        TimePeriod::Weekly => {
            let (start, end) = week_bounds(today);
            filter_date_range(orders, start, end)
        }
        TimePeriod::Monthly => {
            let (start, end) = month_bounds(today);
            filter_date_range(orders, start, end)
        }
    }
}

fn filter_date_range(orders: &[OrderRecord], start: NaiveDate, end: NaiveDate) -> Vec<OrderRecord> {
    orders
        .iter()
        .filter(|o| {
            o.order_naive_date()
                .map(|d| d >= start && d <= end)
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Sunday-Saturday calendar week containing `today`.
pub fn week_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = today - Duration::days(today.weekday().num_days_from_sunday() as i64);
    (start, start + Duration::days(6))
}

/// First and last day of the calendar month containing `today`.
pub fn month_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = today.with_day(1).unwrap_or(today);
    let next_month = if start.month() == 12 {
        NaiveDate::from_ymd_opt(start.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(start.year(), start.month() + 1, 1)
    };
    let end = next_month
        .map(|d| d - Duration::days(1))
        .unwrap_or(start);
    (start, end)
}

/// Human-readable label for the selected window.
pub fn period_display_text(period: TimePeriod, reference_date: Option<&str>) -> String {
    period_display_text_with_today(period, reference_date, Local::now().date_naive())
}

pub fn period_display_text_with_today(
    period: TimePeriod,
    reference_date: Option<&str>,
    today: NaiveDate,
) -> String {
    match period {
        TimePeriod::Total => "All orders".to_string(),
        TimePeriod::Daily => reference_date
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .map(|d| format!("Orders for {}", d.format("%d %b %Y")))
            .unwrap_or_else(|| "Today's orders".to_string()),
        TimePeriod::Weekly => {
            let (start, end) = week_bounds(today);
            format!(
                "This week ({} - {})",
                start.format("%d %b"),
                end.format("%d %b")
            )
        }
        TimePeriod::Monthly => {
            format!("This month ({})", today.format("%B %Y"))
        }
    }
}
