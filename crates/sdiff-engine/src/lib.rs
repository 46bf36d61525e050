//! Keyed diff engine for sectiondiff.
//!
//! Compares two snapshots of keyed sections and rows and produces the
//! insert/delete/reload operations a list surface needs to update in one
//! batch, without reloading everything.
//!
//! # Key Types
//!
//! - [`DiffEngine`] / [`diff_snapshots`] -- Two-level keyed diff
//! - [`DiffConfig`] / [`LookupStrategy`] -- Engine configuration
//! - [`RenderedList`] -- Reference surface that applies a change set as one batch
//! - [`ApplyError`] -- Inconsistencies detected while applying a change set

pub mod apply;
pub mod config;
pub mod engine;
pub mod error;
mod keys;

pub use apply::{RenderedList, RenderedRow, RenderedSection};
pub use config::{DiffConfig, LookupStrategy};
pub use engine::{diff_snapshots, DiffEngine};
pub use error::{ApplyError, ApplyResult};
