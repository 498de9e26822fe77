// Entry point for the stock keeper.
//
// **Architecture Overview:**
// - `core/` = Business logic (item quantities, audit trail, storage port)
// - `infra/` = Implementations of core traits (JSON snapshot file)
// - `console/` = Terminal front end (the demonstration run)
//
// This file's job is to:
// 1. Initialize logging
// 2. Load configuration
// 3. Hand off to the console layer

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with half a dozen mod.rs files that all look the same.
#[path = "console/console_layer.rs"]
mod console;
#[path = "core/core_layer.rs"]
mod core;
#[path = "infra/infra_layer.rs"]
mod infra;

use crate::core::inventory::DEFAULT_LOW_STOCK_THRESHOLD;
use std::path::PathBuf;

const DEFAULT_INVENTORY_PATH: &str = "inventory.json";

/// Process configuration, read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
struct AppConfig {
    inventory_path: PathBuf,
    low_stock_threshold: i64,
}

impl AppConfig {
    fn from_env() -> Self {
        Self::from_vars(
            std::env::var("INVENTORY_PATH").ok(),
            std::env::var("LOW_STOCK_THRESHOLD").ok(),
        )
    }

    fn from_vars(inventory_path: Option<String>, low_stock_threshold: Option<String>) -> Self {
        let inventory_path = inventory_path
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_INVENTORY_PATH.to_string());

        let low_stock_threshold = match low_stock_threshold {
            Some(raw) => raw.trim().parse::<i64>().unwrap_or_else(|_| {
                tracing::warn!(
                    "Ignoring invalid LOW_STOCK_THRESHOLD {:?}, using {}",
                    raw,
                    DEFAULT_LOW_STOCK_THRESHOLD
                );
                DEFAULT_LOW_STOCK_THRESHOLD
            }),
            None => DEFAULT_LOW_STOCK_THRESHOLD,
        };

        Self {
            inventory_path: PathBuf::from(inventory_path),
            low_stock_threshold,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging so we can see what's happening
    tracing_subscriber::fmt::init();

    // Load environment variables from .env file (if it exists)
    dotenv::dotenv().ok();

    let config = AppConfig::from_env();
    tracing::debug!(?config, "Starting inventory check");

    let stdout = std::io::stdout();
    console::demo::run(
        &config.inventory_path,
        config.low_stock_threshold,
        &mut stdout.lock(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AppConfig::from_vars(None, None);
        assert_eq!(config.inventory_path, PathBuf::from("inventory.json"));
        assert_eq!(config.low_stock_threshold, 5);
    }

    #[test]
    fn test_config_overrides() {
        let config = AppConfig::from_vars(Some("data/stock.json".into()), Some(" 12 ".into()));
        assert_eq!(config.inventory_path, PathBuf::from("data/stock.json"));
        assert_eq!(config.low_stock_threshold, 12);
    }

    #[test]
    fn test_config_invalid_threshold_falls_back() {
        let config = AppConfig::from_vars(Some("  ".into()), Some("lots".into()));
        assert_eq!(config.inventory_path, PathBuf::from("inventory.json"));
        assert_eq!(config.low_stock_threshold, DEFAULT_LOW_STOCK_THRESHOLD);
    }
}
