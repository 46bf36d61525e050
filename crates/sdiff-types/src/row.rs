//! Rows: the keyed leaves of a snapshot.

use serde::Serialize;

use crate::Keyed;

/// A keyed, content-bearing entry displayed within a section.
///
/// Rows compare equal when their keys and contents are equal. The recorded
/// position is not part of the comparison: it only says where the row sat in
/// the snapshot it was built from.
#[derive(Clone, Debug, Serialize)]
pub struct Row<C> {
    key: String,
    content: C,
    position: usize,
}

impl<C> Row<C> {
    pub(crate) fn new(key: impl Into<String>, content: C, position: usize) -> Self {
        Self {
            key: key.into(),
            content,
            position,
        }
    }

    /// The row's identity within its section.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The opaque payload compared to detect content changes.
    pub fn content(&self) -> &C {
        &self.content
    }

    /// 0-based index within the owning section at construction time.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<C> Keyed for Row<C> {
    fn key(&self) -> &str {
        &self.key
    }
}

impl<C: PartialEq> PartialEq for Row<C> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.content == other.content
    }
}

impl<C: Eq> Eq for Row<C> {}
