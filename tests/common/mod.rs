//! Shared fixtures for integration tests
#![allow(dead_code)]

use order_analytics::models::{
    CustomerInfo, LineItem, OrderRecord, Pricing, Timestamps,
};

pub fn order(id: &str, status: Option<&str>) -> OrderRecord {
    OrderRecord {
        id: id.to_string(),
        items: Vec::new(),
        pricing: None,
        status: status.map(String::from),
        kitchen: None,
        timestamps: None,
        table_number: None,
        customer_info: None,
    }
}

pub fn completed_order(id: &str, total: f64, placed: &str) -> OrderRecord {
    let mut o = order(id, Some("completed"));
    o.pricing = Some(Pricing { total });
    o.timestamps = Some(placed_at(placed));
    o
}

pub fn placed_at(ts: &str) -> Timestamps {
    Timestamps {
        order_placed: Some(ts.to_string()),
        order_date: None,
    }
}

pub fn item(
    name: &str,
    category: Option<&str>,
    quantity: i64,
    final_price: Option<f64>,
    original_price: Option<f64>,
) -> LineItem {
    LineItem {
        menu_name: name.to_string(),
        menu_category: category.map(String::from),
        quantity,
        final_price,
        original_price,
    }
}

pub fn with_nested_table(mut o: OrderRecord, table: &str) -> OrderRecord {
    o.customer_info = Some(CustomerInfo {
        table_number: Some(table.to_string()),
    });
    o
}
