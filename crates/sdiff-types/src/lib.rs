//! Foundation types for sectiondiff.
//!
//! This crate provides the immutable data model consumed and produced by the
//! diff engine. Every other sectiondiff crate depends on `sdiff-types`.
//!
//! # Key Types
//!
//! - [`Row`] -- Keyed, content-bearing leaf item with a fixed position
//! - [`Section`] -- Keyed, ordered group of rows with an optional header
//! - [`Snapshot`] / [`SnapshotBuilder`] -- One complete, immutable list state
//! - [`ChangeSet`] / [`Change`] -- Insert/delete/reload operations between two snapshots
//! - [`IndexPath`] -- (section, row) coordinate into a snapshot
//! - [`SnapshotDoc`] -- Serde wire form of a snapshot

pub mod changeset;
pub mod doc;
pub mod error;
pub mod row;
pub mod section;
pub mod snapshot;

pub use changeset::{Change, ChangeSet, IndexPath};
pub use doc::{RowDoc, SectionDoc, SnapshotDoc};
pub use error::{TypeError, TypeResult};
pub use row::Row;
pub use section::Section;
pub use snapshot::{Snapshot, SnapshotBuilder};

/// Items that carry an identity key within their owning list.
pub trait Keyed {
    /// The identity key of this item.
    fn key(&self) -> &str;
}
