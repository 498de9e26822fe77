use super::inventory_models::StockLevels;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Item '{0}' not in stock")]
    ItemNotFound(String),

    #[error("No inventory file at '{}'", .0.display())]
    FileNotFound(PathBuf),

    #[error("Could not decode '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Quantity overflow for '{item}': {current} + {delta}")]
    QuantityOverflow {
        item: String,
        current: i64,
        delta: i64,
    },

    #[error("Invalid quantity: {0:?}")]
    InvalidQuantity(String),
}

impl InventoryError {
    /// Caller bugs rather than environmental failures. These are never
    /// recovered inside the store.
    #[allow(dead_code)]
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            InventoryError::QuantityOverflow { .. } | InventoryError::InvalidQuantity(_)
        )
    }
}

/// Parse a quantity typed by a user or read from an untrusted source.
pub fn parse_quantity(raw: &str) -> Result<i64, InventoryError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| InventoryError::InvalidQuantity(raw.to_string()))
}

/// Durable snapshot of the stock levels.
///
/// The core only knows it can read and write a whole snapshot; the file
/// format lives in infra.
pub trait SnapshotStore {
    /// Where the snapshot lives, for notices.
    fn location(&self) -> &Path;

    /// Read the full snapshot.
    ///
    /// Returns `FileNotFound` when nothing has been saved yet and `Decode`
    /// when the stored bytes are not a JSON object of integers.
    fn read(&self) -> Result<StockLevels, InventoryError>;

    /// Replace the stored snapshot.
    fn write(&self, levels: &StockLevels) -> Result<(), InventoryError>;
}
