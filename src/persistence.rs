//! File-based cost table storage in JSON Lines.
//!
//! One cost item per line (`.jsonl`). Simple, diffable, and easy to edit by
//! hand.
//!
//! # Usage
//!
//! ```ignore
//! use landed_cost::persistence;
//! use std::path::Path;
//!
//! let items = landed_cost::default_cost_items();
//! persistence::save_cost_items(&items, Path::new("costs.jsonl")).unwrap();
//! let loaded = persistence::load_cost_items(Path::new("costs.jsonl")).unwrap();
//! assert_eq!(items, loaded);
//! ```

use std::io::{self, BufRead, Write};
use std::path::Path;

use log::debug;

use crate::cost::CostItem;

/// Save cost items to a file in JSON Lines format, in the given order.
pub fn save_cost_items(items: &[CostItem], path: &Path) -> io::Result<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = io::BufWriter::new(file);

    for item in items {
        let json = serde_json::to_string(item).map_err(io::Error::other)?;
        writeln!(writer, "{}", json)?;
    }

    writer.flush()?;
    debug!("saved {} cost items to {}", items.len(), path.display());
    Ok(())
}

/// Load cost items from a JSON Lines file.
///
/// Empty lines are skipped. A line that does not parse (including one with an
/// unknown behavior or category) or that fails validation is reported with
/// its 1-based line number.
pub fn load_cost_items(path: &Path) -> io::Result<Vec<CostItem>> {
    let file = std::fs::File::open(path)?;
    let reader = io::BufReader::new(file);
    let mut items = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let item: CostItem = serde_json::from_str(line).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {}: {}", line_num + 1, e),
            )
        })?;
        item.validate().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {}: {}", line_num + 1, e),
            )
        })?;
        items.push(item);
    }

    debug!("loaded {} cost items from {}", items.len(), path.display());
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::{default_cost_items, Behavior};

    #[test]
    fn save_and_load_seed_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("costs.jsonl");

        let items = default_cost_items();
        save_cost_items(&items, &path).unwrap();
        let loaded = load_cost_items(&path).unwrap();

        assert_eq!(items, loaded);
    }

    #[test]
    fn wire_tags_are_snake_case() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("costs.jsonl");
        save_cost_items(&default_cost_items()[3..4], &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"behavior\":\"per_truck\""));
        assert!(contents.contains("\"category\":\"logistics\""));
    }

    #[test]
    fn skips_empty_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("costs.jsonl");
        let line = r#"{"code":"X","name":"x","behavior":"per_month","unit_amount_usd":10.0,"unit":"month","qty_source":"Storage_Months","dest_scope":"KIN*","category":"logistics"}"#;
        std::fs::write(&path, format!("\n{line}\n\n")).unwrap();

        let loaded = load_cost_items(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].behavior, Behavior::PerMonth);
    }

    #[test]
    fn unknown_behavior_rejected_with_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("costs.jsonl");
        let good = r#"{"code":"A","name":"a","behavior":"per_ton","unit_amount_usd":1.0,"unit":"MT","qty_source":"Volume_MT","dest_scope":"LUB*","category":"logistics"}"#;
        let bad = r#"{"code":"B","name":"b","behavior":"per_pallet","unit_amount_usd":1.0,"unit":"p","qty_source":"-","dest_scope":"LUB*","category":"logistics"}"#;
        std::fs::write(&path, format!("{good}\n{bad}\n")).unwrap();

        let err = load_cost_items(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().starts_with("line 2:"));
    }

    #[test]
    fn invalid_item_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("costs.jsonl");
        let blank_code = r#"{"code":"","name":"a","behavior":"per_ton","unit_amount_usd":1.0,"unit":"MT","qty_source":"Volume_MT","dest_scope":"LUB*","category":"logistics"}"#;
        std::fs::write(&path, blank_code).unwrap();

        assert!(load_cost_items(&path).is_err());
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_cost_items(&dir.path().join("nope.jsonl")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
