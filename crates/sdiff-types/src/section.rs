//! Sections: keyed, ordered groups of rows.

use serde::Serialize;

use crate::{Keyed, Row};

/// A keyed group of rows displayed as one list segment.
#[derive(Clone, Debug, Serialize)]
pub struct Section<C, H> {
    key: String,
    header: Option<H>,
    rows: Vec<Row<C>>,
    position: usize,
}

impl<C, H> Section<C, H> {
    pub(crate) fn new(
        key: impl Into<String>,
        header: Option<H>,
        rows: Vec<Row<C>>,
        position: usize,
    ) -> Self {
        Self {
            key: key.into(),
            header,
            rows,
            position,
        }
    }

    /// The section's identity within its snapshot.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Header payload, `None` when the section has no header.
    pub fn header(&self) -> Option<&H> {
        self.header.as_ref()
    }

    /// Rows in display order.
    pub fn rows(&self) -> &[Row<C>] {
        &self.rows
    }

    /// 0-based index within the owning snapshot at construction time.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the section has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row with the given key, in scan order.
    pub fn row(&self, key: &str) -> Option<&Row<C>> {
        self.rows.iter().find(|r| r.key() == key)
    }
}

impl<C: PartialEq, H> Section<C, H> {
    /// Returns `true` if both sections have the same key and element-wise
    /// equal row sequences. Headers are not compared.
    pub fn same_rows(&self, other: &Self) -> bool {
        self.key == other.key && self.rows == other.rows
    }
}

impl<C, H> Keyed for Section<C, H> {
    fn key(&self) -> &str {
        &self.key
    }
}
