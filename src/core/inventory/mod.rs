// Inventory module - item quantities and their persistence rules

pub mod inventory_models;
pub mod inventory_service;
pub mod inventory_store;

pub use inventory_models::{AuditLog, StockLevels};
pub use inventory_service::{InventoryStore, DEFAULT_LOW_STOCK_THRESHOLD};
pub use inventory_store::{parse_quantity, InventoryError, SnapshotStore};
