//! stride-core
//!
//! Pure domain types for prosthetic records, the display labels used in
//! user-facing messages, and the static device-type relevance table.
//! No I/O. This is the shared vocabulary of the Stride engine.

pub mod error;
pub mod models;
pub mod relevance;
