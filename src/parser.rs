//! Order Export Parsing and Discovery
//!
//! Loads order records from exported files. Two layouts are accepted:
//!
//! - `.jsonl` - one JSON order record per line (the realtime collaborator's
//!   streaming export format)
//! - `.json` - a single JSON array of order records
//!
//! A path argument may be a single file or a directory; directories are
//! scanned with glob patterns for both layouts. Malformed lines and
//! entries are skipped with a warning rather than failing the run - the
//! analytics core is expected to degrade gracefully on bad upstream data.
//! Unreadable paths are real errors and propagate.
//!
//! The menu catalog is a single optional JSON array of [`MenuItem`]s.

use crate::models::{MenuItem, OrderRecord};
use anyhow::{Context, Result};
use glob::glob;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct OrderFileParser;

impl Default for OrderFileParser {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderFileParser {
    pub fn new() -> Self {
        Self
    }

    /// Load every order record reachable from `path` (file or directory).
    pub fn load_orders(&self, path: &Path) -> Result<Vec<OrderRecord>> {
        let files = self.discover_order_files(path)?;
        let mut orders = Vec::new();
        for file in &files {
            orders.extend(self.parse_order_file(file)?);
        }
        debug!(
            files = files.len(),
            orders = orders.len(),
            "Loaded order exports"
        );
        Ok(orders)
    }

    /// Resolve `path` into the list of export files to parse.
    pub fn discover_order_files(&self, path: &Path) -> Result<Vec<PathBuf>> {
        if path.is_file() {
            return Ok(vec![path.to_path_buf()]);
        }
        if !path.is_dir() {
            anyhow::bail!("Orders path does not exist: {}", path.display());
        }

        let mut files = Vec::new();
        let patterns = vec![path.join("*.jsonl"), path.join("*.json")];
        for pattern in patterns {
            if let Ok(paths) = glob(&pattern.to_string_lossy()) {
                for entry in paths.flatten() {
                    files.push(entry);
                }
            }
        }
        files.sort();
        Ok(files)
    }

    /// Parse one export file, dispatching on extension.
    pub fn parse_order_file(&self, path: &Path) -> Result<Vec<OrderRecord>> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("jsonl") => self.parse_jsonl(path),
            _ => self.parse_json_array(path),
        }
    }

    fn parse_jsonl(&self, path: &Path) -> Result<Vec<OrderRecord>> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open orders file: {}", path.display()))?;
        let reader = BufReader::new(file);

        let mut orders = Vec::new();
        for (line_number, line) in reader.lines().enumerate() {
            let line = line
                .with_context(|| format!("Failed to read line from {}", path.display()))?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<OrderRecord>(&line) {
                Ok(order) => orders.push(order),
                Err(e) => {
                    warn!(
                        file = %path.display(),
                        line = line_number + 1,
                        error = %e,
                        "Skipping malformed order record"
                    );
                }
            }
        }
        Ok(orders)
    }

    fn parse_json_array(&self, path: &Path) -> Result<Vec<OrderRecord>> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read orders file: {}", path.display()))?;

        // Tolerate individually malformed entries inside the array.
        let values: Vec<serde_json::Value> = serde_json::from_str(&content)
            .with_context(|| format!("Orders file is not a JSON array: {}", path.display()))?;

        let mut orders = Vec::new();
        for (index, value) in values.into_iter().enumerate() {
            match serde_json::from_value::<OrderRecord>(value) {
                Ok(order) => orders.push(order),
                Err(e) => {
                    warn!(
                        file = %path.display(),
                        index,
                        error = %e,
                        "Skipping malformed order record"
                    );
                }
            }
        }
        Ok(orders)
    }

    /// Load the optional menu catalog (JSON array of [`MenuItem`]s).
    pub fn load_menu(&self, path: &Path) -> Result<Vec<MenuItem>> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read menu file: {}", path.display()))?;
        let menu: Vec<MenuItem> = serde_json::from_str(&content)
            .with_context(|| format!("Menu file is not a JSON array: {}", path.display()))?;
        Ok(menu)
    }
}
