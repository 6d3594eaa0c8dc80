//! Export parsing tests with realistic order data patterns

use order_analytics::parser::OrderFileParser;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

/// Write a JSONL export mixing the field shapes seen in real order data.
fn create_realistic_jsonl(path: &Path, num_entries: usize, include_malformed: bool) {
    let mut file = fs::File::create(path).unwrap();

    for i in 0..num_entries {
        let entry = if i % 3 == 0 {
            // Full shape with top-level status and table number
            format!(
                r#"{{"id":"order_{i}","status":"completed","tableNumber":"T{t}","pricing":{{"total":{total}}},"timestamps":{{"orderPlaced":"2024-01-15T10:30:{s:02}"}},"items":[{{"menuName":"Idli","menuCategory":"Breakfast","quantity":2,"finalPrice":50}}]}}"#,
                i = i,
                t = i % 5,
                total = 100 + i,
                s = i % 60,
            )
        } else if i % 3 == 1 {
            // Kitchen-nested status and customerInfo table
            format!(
                r#"{{"id":"order_{i}","kitchen":{{"status":"preparing"}},"customerInfo":{{"tableNumber":"T{t}"}},"timestamps":{{"orderDate":"2024-01-15"}},"items":[{{"menuName":"Dosa","quantity":1,"originalPrice":60}}]}}"#,
                i = i,
                t = i % 5,
            )
        } else {
            // Minimal shape with missing optional fields
            format!(r#"{{"id":"order_{i}"}}"#, i = i)
        };

        writeln!(file, "{}", entry).unwrap();

        if include_malformed && i % 10 == 5 {
            writeln!(file, "{{broken json line that should be skipped}}").unwrap();
        }
    }
}

#[test]
fn parses_jsonl_export() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("orders.jsonl");
    create_realistic_jsonl(&path, 30, false);

    let parser = OrderFileParser::new();
    let orders = parser.load_orders(&path).unwrap();

    assert_eq!(orders.len(), 30);
    assert_eq!(orders[0].id, "order_0");
    assert_eq!(orders[0].table(), Some("T0"));
    assert_eq!(orders[1].order_date().as_deref(), Some("2024-01-15"));
}

#[test]
fn skips_malformed_lines() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("orders.jsonl");
    create_realistic_jsonl(&path, 30, true);

    let parser = OrderFileParser::new();
    let orders = parser.load_orders(&path).unwrap();

    // Malformed lines are dropped, valid entries survive.
    assert_eq!(orders.len(), 30);
}

#[test]
fn parses_json_array_export() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("orders.json");
    fs::write(
        &path,
        r#"[
            {"id":"a","status":"completed","pricing":{"total":120}},
            {"id":"b","status":"rejected"},
            {"not_an_order": true}
        ]"#,
    )
    .unwrap();

    let parser = OrderFileParser::new();
    let orders = parser.load_orders(&path).unwrap();

    // The entry without an id is skipped, not fatal.
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].total(), 120.0);
}

#[test]
fn scans_directories_for_both_layouts() {
    let temp_dir = TempDir::new().unwrap();
    create_realistic_jsonl(&temp_dir.path().join("day1.jsonl"), 5, false);
    fs::write(temp_dir.path().join("day2.json"), r#"[{"id":"x"}]"#).unwrap();
    fs::write(temp_dir.path().join("notes.txt"), "not an export").unwrap();

    let parser = OrderFileParser::new();
    let files = parser.discover_order_files(temp_dir.path()).unwrap();
    assert_eq!(files.len(), 2);

    let orders = parser.load_orders(temp_dir.path()).unwrap();
    assert_eq!(orders.len(), 6);
}

#[test]
fn missing_path_is_an_error() {
    let parser = OrderFileParser::new();
    let result = parser.load_orders(Path::new("/nonexistent/orders"));
    assert!(result.is_err());
}

#[test]
fn loads_menu_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("menu.json");
    fs::write(
        &path,
        r#"[{"menuName":"Idli","category":"Breakfast","finalPrice":50}]"#,
    )
    .unwrap();

    let parser = OrderFileParser::new();
    let menu = parser.load_menu(&path).unwrap();
    assert_eq!(menu.len(), 1);
    assert_eq!(menu[0].menu_name, "Idli");
    assert_eq!(menu[0].final_price, Some(50.0));
}
