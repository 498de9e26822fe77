// Demonstration run: load, mutate, query, persist, reload, report.

use crate::core::inventory::{parse_quantity, AuditLog, InventoryError, InventoryStore};
use crate::infra::inventory::JsonSnapshotStore;
use anyhow::Result;
use std::io::Write;
use std::path::Path;

/// Add stock from raw text input, as a form or prompt would hand it over.
fn add_from_input(
    store: &mut InventoryStore,
    item: &str,
    raw_qty: &str,
    audit: &mut AuditLog,
) -> Result<(), InventoryError> {
    let qty = parse_quantity(raw_qty)?;
    store.add(item, qty, Some(audit))
}

pub fn run(inventory_path: &Path, low_stock_threshold: i64, out: &mut impl Write) -> Result<()> {
    let snapshot = JsonSnapshotStore::new(inventory_path);
    let mut store = InventoryStore::load(&snapshot)?;
    let mut audit = AuditLog::new();

    store.add("apple", 10, Some(&mut audit))?;
    store.add("banana", 15, Some(&mut audit))?;

    // Deliberately bad input; only this kind of failure is handled here.
    match add_from_input(&mut store, "123", "ten", &mut audit) {
        Ok(()) => {}
        Err(e @ InventoryError::InvalidQuantity(_)) => {
            writeln!(out, "Error: Invalid types provided to add: {e}")?;
        }
        Err(e) => return Err(e.into()),
    }

    store.remove("apple", 3)?;
    store.remove("orange", 1)?;

    writeln!(out, "Apple stock: {}", store.get_quantity("apple"))?;
    writeln!(out, "Orange stock: {}", store.get_quantity("orange"))?;
    writeln!(out, "Low items: {:?}", store.check_low(low_stock_threshold))?;

    for entry in audit.entries() {
        tracing::debug!(%entry, "audit");
    }

    store.save(&snapshot);

    // Reload to make sure what was written can be read back.
    let store = InventoryStore::load(&snapshot)?;
    writeln!(out)?;
    write!(out, "{}", store.report())?;
    writeln!(out)?;
    writeln!(out, "Inventory check complete.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::inventory::DEFAULT_LOW_STOCK_THRESHOLD;
    use std::fs;
    use tempfile::tempdir;

    const EXPECTED_FRESH_RUN: &str = "\
Error: Invalid types provided to add: Invalid quantity: \"ten\"
Apple stock: 7
Orange stock: 0
Low items: []

--- Items Report ---
  apple -> 7
  banana -> 15
----------------------

Inventory check complete.
";

    fn run_to_string(path: &Path, threshold: i64) -> String {
        let mut out = Vec::new();
        run(path, threshold, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_fresh_run() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        let output = run_to_string(&path, DEFAULT_LOW_STOCK_THRESHOLD);

        assert_eq!(output, EXPECTED_FRESH_RUN);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "{\n    \"apple\": 7,\n    \"banana\": 15\n}"
        );
    }

    #[test]
    fn test_second_run_builds_on_saved_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        run_to_string(&path, DEFAULT_LOW_STOCK_THRESHOLD);
        let output = run_to_string(&path, DEFAULT_LOW_STOCK_THRESHOLD);

        assert!(output.contains("Apple stock: 14\n"));
        assert!(output.contains("  banana -> 30\n"));
    }

    #[test]
    fn test_corrupt_file_is_replaced() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "not json at all").unwrap();

        let output = run_to_string(&path, DEFAULT_LOW_STOCK_THRESHOLD);

        assert_eq!(output, EXPECTED_FRESH_RUN);
    }

    #[test]
    fn test_threshold_is_configurable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        let output = run_to_string(&path, 10);

        assert!(output.contains("Low items: [\"apple\"]\n"));
    }
}
