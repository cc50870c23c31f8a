//! Citadel library exports for the binary and for testing

pub mod api;
pub mod cli;
pub mod content;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
