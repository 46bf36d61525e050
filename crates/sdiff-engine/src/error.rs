//! Error types for the engine crate.
//!
//! The diff itself never fails; these errors come from applying a change set
//! to a [`RenderedList`](crate::RenderedList).

use sdiff_types::IndexPath;

/// Errors that can occur while applying a change set.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApplyError {
    /// A section coordinate is outside the list it refers to.
    #[error("section {section} out of range (count {count})")]
    SectionOutOfRange { section: usize, count: usize },

    /// A row coordinate is outside the section it refers to.
    #[error("row {path} out of range (section has {count} rows)")]
    RowOutOfRange { path: IndexPath, count: usize },

    /// A section named by the batch no longer exists.
    #[error("section {0:?} not found")]
    MissingSection(String),

    /// A row named by the batch no longer exists.
    #[error("row {row:?} not found in section {section:?}")]
    MissingRow { section: String, row: String },

    /// The section count after the batch does not match the target snapshot.
    #[error("invalid number of sections: expected {expected}, got {actual}")]
    InconsistentSectionCount { expected: usize, actual: usize },

    /// A section's row count after the batch does not match the target snapshot.
    #[error("invalid number of rows in section {section}: expected {expected}, got {actual}")]
    InconsistentRowCount {
        section: usize,
        expected: usize,
        actual: usize,
    },
}

/// Convenience alias for apply results.
pub type ApplyResult<T> = Result<T, ApplyError>;
