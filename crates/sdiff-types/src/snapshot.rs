//! Snapshots: one complete, immutable list state.

use serde::Serialize;

use crate::{Row, Section};

/// An ordered collection of sections representing the full list state at
/// one point in time.
///
/// Snapshots can only be produced by a [`SnapshotBuilder`] (or from a
/// [`SnapshotDoc`](crate::SnapshotDoc)), which assigns every section and row
/// its position. Nothing can mutate a snapshot once it is built.
#[derive(Clone, Debug, Serialize)]
pub struct Snapshot<C, H = String> {
    sections: Vec<Section<C, H>>,
}

impl<C, H> Snapshot<C, H> {
    /// The empty snapshot.
    pub fn empty() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    /// Start building a snapshot.
    pub fn builder() -> SnapshotBuilder<C, H> {
        SnapshotBuilder::new()
    }

    /// Sections in display order.
    pub fn sections(&self) -> &[Section<C, H>] {
        &self.sections
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if there are no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// First section with the given key, in scan order.
    pub fn section(&self, key: &str) -> Option<&Section<C, H>> {
        self.sections.iter().find(|s| s.key() == key)
    }

    /// Total number of rows across all sections.
    pub fn row_count(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }
}

impl<C, H> Default for Snapshot<C, H> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Builds a [`Snapshot`] section by section, recording positions in
/// insertion order.
#[derive(Debug)]
pub struct SnapshotBuilder<C, H> {
    sections: Vec<Section<C, H>>,
}

impl<C, H> SnapshotBuilder<C, H> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    /// Append a section with the given key, header, and `(key, content)` rows.
    pub fn section<K, I, RK>(mut self, key: K, header: Option<H>, rows: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (RK, C)>,
        RK: Into<String>,
    {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(position, (key, content))| Row::new(key, content, position))
            .collect();
        let position = self.sections.len();
        self.sections.push(Section::new(key, header, rows, position));
        self
    }

    /// Finish building.
    pub fn build(self) -> Snapshot<C, H> {
        Snapshot {
            sections: self.sections,
        }
    }
}

impl<C, H> Default for SnapshotBuilder<C, H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_assigns_positions() {
        let snapshot: Snapshot<&str> = Snapshot::builder()
            .section("profile", None, [("1", "Al")])
            .section("friends", Some("FRIENDS".to_string()), [("9", "Bo"), ("10", "Cy")])
            .build();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.row_count(), 3);

        let friends = snapshot.section("friends").unwrap();
        assert_eq!(friends.position(), 1);
        assert_eq!(friends.header().map(String::as_str), Some("FRIENDS"));
        assert_eq!(friends.rows()[1].key(), "10");
        assert_eq!(friends.rows()[1].position(), 1);
    }

    #[test]
    fn empty_snapshot() {
        let snapshot: Snapshot<u32> = Snapshot::default();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.row_count(), 0);
        assert!(snapshot.section("any").is_none());
    }

    #[test]
    fn section_lookup_first_match_wins() {
        let snapshot: Snapshot<u32, ()> = Snapshot::builder()
            .section("dup", None, [("a", 1)])
            .section("dup", None, [("b", 2)])
            .build();
        assert_eq!(snapshot.section("dup").unwrap().position(), 0);
    }

    #[test]
    fn serializes_with_positions() {
        let snapshot: Snapshot<&str, ()> = Snapshot::builder()
            .section("s", None, [("r", "x")])
            .build();
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["sections"][0]["rows"][0]["position"], 0);
        assert_eq!(json["sections"][0]["key"], "s");
    }
}
