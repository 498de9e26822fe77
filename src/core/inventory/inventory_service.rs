// Stock tracking core
//
// Holds the item -> quantity map and every rule about how it changes.
// Persistence goes through the SnapshotStore port, so nothing in here
// knows about files or JSON.

use super::inventory_models::{AuditLog, StockLevels};
use super::inventory_store::{InventoryError, SnapshotStore};
use std::fmt::Write;

/// Items strictly below this quantity count as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

const REPORT_HEADER: &str = "--- Items Report ---";
const REPORT_FOOTER: &str = "----------------------";

// ============================================================================
// STORE
// ============================================================================

/// In-memory inventory for one process run.
///
/// Created empty or loaded from a snapshot at startup, mutated in place,
/// and written back with [`InventoryStore::save`] when the caller decides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryStore {
    levels: StockLevels,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_levels(levels: StockLevels) -> Self {
        Self { levels }
    }

    #[allow(dead_code)]
    pub fn levels(&self) -> &StockLevels {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.0.is_empty()
    }

    /// Items and quantities in insertion order.
    pub fn items(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.levels.0.iter().map(|(item, qty)| (item.as_str(), *qty))
    }

    /// Add `qty` of `item`, recording the addition in `audit` if given.
    ///
    /// An empty item name is silently ignored. `qty` is not sign-checked:
    /// a negative amount can leave an entry at zero or below, and unlike
    /// [`InventoryStore::remove`] such an entry is kept.
    pub fn add(
        &mut self,
        item: &str,
        qty: i64,
        audit: Option<&mut AuditLog>,
    ) -> Result<(), InventoryError> {
        if item.is_empty() {
            return Ok(());
        }

        let current = self.get_quantity(item);
        let total = current
            .checked_add(qty)
            .ok_or_else(|| InventoryError::QuantityOverflow {
                item: item.to_string(),
                current,
                delta: qty,
            })?;

        // Existing keys keep their position on insert.
        self.levels.0.insert(item.to_string(), total);
        tracing::debug!(item, qty, total, "Added stock");

        if let Some(audit) = audit {
            audit.record(item, qty);
        }
        Ok(())
    }

    /// Remove `qty` of `item`.
    ///
    /// Returns `Ok(false)` with a warning when the item is not stocked.
    /// An entry that drops to zero or below is deleted outright.
    pub fn remove(&mut self, item: &str, qty: i64) -> Result<bool, InventoryError> {
        match self.decrement(item, qty) {
            Ok(_) => Ok(true),
            Err(InventoryError::ItemNotFound(item)) => {
                tracing::warn!(item = %item, "Item not in stock. No items removed.");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    fn decrement(&mut self, item: &str, qty: i64) -> Result<i64, InventoryError> {
        let current = self
            .levels
            .0
            .get_mut(item)
            .ok_or_else(|| InventoryError::ItemNotFound(item.to_string()))?;

        let before = *current;
        let remaining = before
            .checked_sub(qty)
            .ok_or_else(|| InventoryError::QuantityOverflow {
                item: item.to_string(),
                current: before,
                delta: qty.saturating_neg(),
            })?;

        if remaining <= 0 {
            // shift_remove keeps the remaining items in order.
            self.levels.0.shift_remove(item);
            tracing::debug!(item, qty, "Removed stock, item sold out");
        } else {
            *current = remaining;
            tracing::debug!(item, qty, remaining, "Removed stock");
        }
        Ok(remaining)
    }

    /// Current quantity of `item`, or 0 if it is not stocked.
    pub fn get_quantity(&self, item: &str) -> i64 {
        self.levels.0.get(item).copied().unwrap_or(0)
    }

    /// Items whose quantity is strictly below `threshold`, in insertion order.
    pub fn check_low(&self, threshold: i64) -> Vec<&str> {
        self.items()
            .filter(|(_, qty)| *qty < threshold)
            .map(|(item, _)| item)
            .collect()
    }

    // ========================================================================
    // PERSISTENCE
    // ========================================================================

    /// Load the inventory from `snapshot`.
    ///
    /// A missing snapshot or one that cannot be decoded yields an empty
    /// inventory and a notice. Any other read failure is returned.
    pub fn load<S: SnapshotStore>(snapshot: &S) -> Result<Self, InventoryError> {
        match snapshot.read() {
            Ok(levels) => {
                tracing::debug!(
                    path = %snapshot.location().display(),
                    items = levels.0.len(),
                    "Loaded inventory"
                );
                Ok(Self::from_levels(levels))
            }
            Err(InventoryError::FileNotFound(path)) => {
                tracing::info!(
                    path = %path.display(),
                    "No inventory file found. Starting with empty inventory."
                );
                Ok(Self::new())
            }
            Err(e @ InventoryError::Decode { .. }) => {
                tracing::error!("{e}. Starting with empty inventory.");
                Ok(Self::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Write the inventory to `snapshot`.
    ///
    /// Returns false if the write failed. The failure is logged and the
    /// in-memory state is left as it was.
    pub fn save<S: SnapshotStore>(&self, snapshot: &S) -> bool {
        match snapshot.write(&self.levels) {
            Ok(()) => {
                tracing::debug!(
                    path = %snapshot.location().display(),
                    items = self.len(),
                    "Saved inventory"
                );
                true
            }
            Err(e) => {
                tracing::error!("Could not save inventory: {e}");
                false
            }
        }
    }

    /// Human-readable listing of every item.
    pub fn report(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{REPORT_HEADER}");
        if self.is_empty() {
            let _ = writeln!(out, "  Inventory is empty.");
        } else {
            for (item, qty) in self.items() {
                let _ = writeln!(out, "  {item} -> {qty}");
            }
        }
        let _ = writeln!(out, "{REPORT_FOOTER}");
        out
    }
}

// ============================================================================
// TESTS
// ============================================================================
