//! stride-slots
//!
//! Slot allocation rules for prosthetic devices. Pure and deterministic:
//! given a patient's roster, computes which `(type, position, side)` slots
//! are still free and detects collisions on activation.

pub mod availability;
pub mod conflict;
pub mod context;
pub mod rules;
pub mod slot;

pub use availability::{Availability, AvailabilityMap, recompute_availability};
pub use conflict::{SlotConflict, detect_conflict};
pub use context::AllocationContext;
pub use rules::{Exclusivity, exclusivity};
pub use slot::{SideCoverage, SlotKey, key_of, overlaps, slots_of};
