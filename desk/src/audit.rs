//! JSONL audit trail for cost-table changes.
//!
//! Every mutation of the cost table appends one JSON object per line to the
//! audit file, next to the JSONL cost table itself.

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use landed_cost::CostItem;
use serde::Serialize;

use crate::error::Result;

/// An audit event written to the JSONL trail.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub event: &'static str,
    pub ts: DateTime<Utc>,
    #[serde(flatten)]
    pub data: serde_json::Value,
}

/// Append-only audit logger.
pub struct AuditLog {
    writer: BufWriter<std::fs::File>,
}

impl AuditLog {
    /// Open (or create) the audit log file for appending.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    /// Log an event with arbitrary JSON data.
    pub fn log(&mut self, event: &'static str, data: serde_json::Value) -> Result<()> {
        let entry = AuditEvent {
            event,
            ts: Utc::now(),
            data,
        };
        let json = serde_json::to_string(&entry)?;
        writeln!(self.writer, "{json}")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Log an upserted cost item, with the item it replaced if any.
pub fn log_cost_change(
    audit: &mut AuditLog,
    item: &CostItem,
    previous: Option<&CostItem>,
) -> Result<()> {
    match previous {
        Some(old) => audit.log(
            "cost_replaced",
            serde_json::json!({
                "code": item.code,
                "before": old,
                "after": item,
            }),
        ),
        None => audit.log(
            "cost_added",
            serde_json::json!({
                "code": item.code,
                "after": item,
            }),
        ),
    }
}

/// Log the cost table being written to disk.
pub fn log_table_saved(audit: &mut AuditLog, table: &Path, items: usize) -> Result<()> {
    audit.log(
        "table_saved",
        serde_json::json!({
            "table": table.display().to_string(),
            "items": items,
        }),
    )
}

/// Log a cost change that could not be written to the table.
pub fn log_table_save_failed(
    audit: &mut AuditLog,
    table: &Path,
    code: &str,
    error: &std::io::Error,
) -> Result<()> {
    audit.log(
        "table_save_failed",
        serde_json::json!({
            "table": table.display().to_string(),
            "code": code,
            "error": error.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use landed_cost::{Behavior, Category};

    fn storage(amount: f64) -> CostItem {
        CostItem {
            code: "WH_LUB_MONTH".into(),
            name: "Warehouse rent".into(),
            behavior: Behavior::PerMonth,
            unit_amount_usd: amount,
            unit: "month".into(),
            qty_source: "storage_months".into(),
            dest_scope: "LUB".into(),
            category: Category::Logistics,
        }
    }

    fn read_events(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn events_are_appended_one_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.jsonl");

        {
            let mut log = AuditLog::open(&path).unwrap();
            log.log(
                "user_confirmed",
                serde_json::json!({"code": "WH_LUB_MONTH", "approved": true}),
            )
            .unwrap();
            log_table_saved(&mut log, Path::new("costs.jsonl"), 57).unwrap();
        }
        {
            let mut log = AuditLog::open(&path).unwrap();
            log_cost_change(&mut log, &storage(9000.0), None).unwrap();
        }

        let events = read_events(&path);
        let names: Vec<&str> = events.iter().map(|e| e["event"].as_str().unwrap()).collect();
        assert_eq!(names, ["user_confirmed", "table_saved", "cost_added"]);
        assert_eq!(events[0]["approved"], true);
        assert_eq!(events[1]["items"], 57);
        assert!(events.iter().all(|e| e["ts"].is_string()));
    }

    #[test]
    fn open_creates_log_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("desk").join("audit.jsonl");

        let mut log = AuditLog::open(&path).unwrap();
        log_table_saved(&mut log, Path::new("costs.jsonl"), 1).unwrap();

        assert_eq!(read_events(&path)[0]["event"], "table_saved");
    }

    #[test]
    fn failed_save_names_code_and_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.jsonl");

        {
            let mut log = AuditLog::open(&path).unwrap();
            let err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
            log_table_save_failed(&mut log, Path::new("gone/costs.jsonl"), "LUB_SURVEY", &err)
                .unwrap();
        }

        let events = read_events(&path);
        assert_eq!(events[0]["event"], "table_save_failed");
        assert_eq!(events[0]["code"], "LUB_SURVEY");
        assert_eq!(events[0]["error"], "no such directory");
    }

    #[test]
    fn cost_change_records_before_and_after() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.jsonl");

        {
            let mut log = AuditLog::open(&path).unwrap();
            log_cost_change(&mut log, &storage(8000.0), None).unwrap();
            log_cost_change(&mut log, &storage(9000.0), Some(&storage(8000.0))).unwrap();
        }

        let events = read_events(&path);
        assert_eq!(events[0]["event"], "cost_added");
        assert!(events[0].get("before").is_none());
        assert_eq!(events[1]["event"], "cost_replaced");
        assert_eq!(events[1]["before"]["unit_amount_usd"], 8000.0);
        assert_eq!(events[1]["after"]["unit_amount_usd"], 9000.0);
        assert_eq!(events[1]["after"]["behavior"], "per_month");
    }
}
