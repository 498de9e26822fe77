// Console layer - drives the inventory from the terminal.

#[path = "demo.rs"]
pub mod demo;
