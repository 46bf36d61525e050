use thiserror::Error;

/// Errors produced while turning wire documents into snapshots.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("section at position {position} has an empty key")]
    EmptySectionKey { position: usize },

    #[error("row at position {row} in section {section:?} has an empty key")]
    EmptyRowKey { section: String, row: usize },
}

/// Convenience alias for type conversions.
pub type TypeResult<T> = Result<T, TypeError>;
