// The infra module contains implementations of core traits.
// Each feature implementation goes in its own submodule.

#[path = "inventory/mod.rs"]
pub mod inventory;
