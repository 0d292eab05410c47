//! stride-editor
//!
//! Conflict-aware editor for a single prosthetic record. Holds the draft
//! and the patient's roster snapshot, recomputes slot availability at every
//! transition, vetoes reactivation into an occupied slot and validates the
//! draft before handing it to a [`store::RecordSink`].

pub mod controller;
pub mod draft;
pub mod error;
pub mod store;
pub mod validation;

pub use controller::EditorController;
pub use draft::{DraftPhase, EditorStatus, ProstheticDraft};
pub use error::{EditorError, SelectionError, StoreError};
pub use store::{MemoryStore, RecordSink, RosterProvider};
pub use validation::{FieldError, ValidationKind, ValidationLimits};
