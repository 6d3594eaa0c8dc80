//! Time-period filter and window-label tests

mod common;

use chrono::NaiveDate;
use common::{completed_order, order, placed_at};
use order_analytics::models::{OrderRecord, TimePeriod, Timestamps};
use order_analytics::period::{
    filter_orders_by_period, filter_with_today, month_bounds, period_display_text,
    period_display_text_with_today, week_bounds,
};

fn dated_order(id: &str, date: &str) -> OrderRecord {
    let mut o = order(id, Some("completed"));
    o.timestamps = Some(Timestamps {
        order_placed: None,
        order_date: Some(date.to_string()),
    });
    o
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn total_period_is_identity() {
    let orders = vec![
        dated_order("o1", "2024-01-01"),
        order("o2", None),
        completed_order("o3", 10.0, "garbage"),
    ];

    let filtered = filter_orders_by_period(&orders, TimePeriod::Total, None);
    assert_eq!(filtered.len(), 3);
    assert_eq!(filtered[0].id, "o1");
    assert_eq!(filtered[2].id, "o3");
}

#[test]
fn daily_matches_on_exact_date_string() {
    let orders = vec![
        dated_order("o1", "2024-01-15"),
        dated_order("o2", "2024-01-16"),
        completed_order("o3", 10.0, "2024-01-15T19:30:00"),
    ];

    let filtered = filter_orders_by_period(&orders, TimePeriod::Daily, Some("2024-01-15"));
    let ids: Vec<_> = filtered.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["o1", "o3"]);
}

#[test]
fn daily_excludes_malformed_and_missing_dates() {
    let mut malformed = order("o1", Some("completed"));
    malformed.timestamps = Some(placed_at("15/01/2024"));
    let missing = order("o2", Some("completed"));

    let filtered = filter_orders_by_period(
        &[malformed, missing],
        TimePeriod::Daily,
        Some("2024-01-15"),
    );
    assert!(filtered.is_empty());
}

#[test]
fn daily_without_reference_date_matches_nothing() {
    let orders = vec![dated_order("o1", "2024-01-15")];
    let filtered = filter_orders_by_period(&orders, TimePeriod::Daily, None);
    assert!(filtered.is_empty());
}

#[test]
fn week_bounds_are_sunday_to_saturday() {
    // 2024-01-17 is a Wednesday.
    let (start, end) = week_bounds(day(2024, 1, 17));
    assert_eq!(start, day(2024, 1, 14));
    assert_eq!(end, day(2024, 1, 20));

    // A Sunday anchors its own week.
    let (start, end) = week_bounds(day(2024, 1, 14));
    assert_eq!(start, day(2024, 1, 14));
    assert_eq!(end, day(2024, 1, 20));
}

#[test]
fn weekly_filter_is_inclusive_of_both_ends() {
    let orders = vec![
        dated_order("sun", "2024-01-14"),
        dated_order("wed", "2024-01-17"),
        dated_order("sat", "2024-01-20"),
        dated_order("before", "2024-01-13"),
        dated_order("after", "2024-01-21"),
    ];

    let filtered = filter_with_today(&orders, TimePeriod::Weekly, None, day(2024, 1, 17));
    let ids: Vec<_> = filtered.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["sun", "wed", "sat"]);
}

#[test]
fn month_bounds_cover_first_to_last_day() {
    let (start, end) = month_bounds(day(2024, 2, 10));
    assert_eq!(start, day(2024, 2, 1));
    assert_eq!(end, day(2024, 2, 29));

    let (start, end) = month_bounds(day(2023, 12, 25));
    assert_eq!(start, day(2023, 12, 1));
    assert_eq!(end, day(2023, 12, 31));
}

#[test]
fn monthly_filter_keeps_only_current_month() {
    let orders = vec![
        dated_order("in1", "2024-02-01"),
        dated_order("in2", "2024-02-29"),
        dated_order("out1", "2024-01-31"),
        dated_order("out2", "2024-03-01"),
    ];

    let filtered = filter_with_today(&orders, TimePeriod::Monthly, None, day(2024, 2, 10));
    let ids: Vec<_> = filtered.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["in1", "in2"]);
}

#[test]
fn weekly_ignores_reference_date() {
    let orders = vec![dated_order("o1", "2024-01-17")];
    let filtered = filter_with_today(
        &orders,
        TimePeriod::Weekly,
        Some("1999-01-01"),
        day(2024, 1, 17),
    );
    assert_eq!(filtered.len(), 1);
}

#[test]
fn total_display_text_is_all_orders() {
    assert_eq!(period_display_text(TimePeriod::Total, None), "All orders");
}

#[test]
fn daily_display_text_embeds_date() {
    let text = period_display_text(TimePeriod::Daily, Some("2024-01-15"));
    assert_eq!(text, "Orders for 15 Jan 2024");

    assert_eq!(
        period_display_text(TimePeriod::Daily, None),
        "Today's orders"
    );
    assert_eq!(
        period_display_text(TimePeriod::Daily, Some("not-a-date")),
        "Today's orders"
    );
}

#[test]
fn weekly_and_monthly_display_text_embed_ranges() {
    let text = period_display_text_with_today(TimePeriod::Weekly, None, day(2024, 1, 17));
    assert_eq!(text, "This week (14 Jan - 20 Jan)");

    let text = period_display_text_with_today(TimePeriod::Monthly, None, day(2024, 1, 17));
    assert_eq!(text, "This month (January 2024)");
}
