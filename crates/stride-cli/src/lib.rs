//! stride-cli library root.
//!
//! Exposes the config and report modules so integration tests can exercise
//! them without going through the binary.

pub mod config;
pub mod report;
