use crate::core::inventory::{InventoryError, SnapshotStore, StockLevels};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// JSON file snapshot. The whole inventory is one flat object:
/// { "apple": 7, "banana": 15 }
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: io::Error) -> InventoryError {
        InventoryError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn location(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<StockLevels, InventoryError> {
        // Read raw bytes so invalid UTF-8 surfaces as a decode error.
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(InventoryError::FileNotFound(self.path.clone()));
            }
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_slice(&bytes).map_err(|source| InventoryError::Decode {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&self, levels: &StockLevels) -> Result<(), InventoryError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let file = File::create(&self.path).map_err(|e| self.io_error(e))?;
        let mut writer = BufWriter::new(file);
        let mut ser =
            serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
        levels
            .serialize(&mut ser)
            .map_err(|e| self.io_error(e.into()))?;
        writer.flush().map_err(|e| self.io_error(e))
    }
}
