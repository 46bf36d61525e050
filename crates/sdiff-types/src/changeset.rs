//! Change sets: the insert/delete/reload operations between two snapshots.
//!
//! A [`ChangeSet`] is collected from individual [`Change`] values and is
//! read-only afterwards. Coordinates follow the two-phase batch model:
//! deletes and reloads are in the old snapshot's index space, inserts in the
//! new snapshot's, and section header reloads use the new section position.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A (section, row) coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IndexPath {
    pub section: usize,
    pub row: usize,
}

impl IndexPath {
    pub fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.section, self.row)
    }
}

/// A single operation within a change set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "op", content = "at", rename_all = "snake_case")]
pub enum Change {
    /// Insert the section at this new-snapshot position.
    InsertSection(usize),
    /// Delete the section at this old-snapshot position.
    DeleteSection(usize),
    /// Redraw the header of the section at this new-snapshot position.
    ReloadSectionHeader(usize),
    /// Insert a row; new section position and new row position.
    InsertRow(IndexPath),
    /// Delete a row; old section position and old row position.
    DeleteRow(IndexPath),
    /// Redraw a row in place; old section position and old row position.
    ReloadRow(IndexPath),
}

/// The operations needed to move a rendering from one snapshot to the next.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ChangeSet {
    section_inserts: BTreeSet<usize>,
    section_deletes: BTreeSet<usize>,
    section_header_reloads: BTreeSet<usize>,
    row_inserts: BTreeSet<IndexPath>,
    row_deletes: BTreeSet<IndexPath>,
    row_reloads: BTreeSet<IndexPath>,
}

impl ChangeSet {
    /// Create an empty change set.
    pub fn new() -> Self {
        Self::default()
    }

    /// New-snapshot positions of inserted sections.
    pub fn section_inserts(&self) -> &BTreeSet<usize> {
        &self.section_inserts
    }

    /// Old-snapshot positions of deleted sections.
    pub fn section_deletes(&self) -> &BTreeSet<usize> {
        &self.section_deletes
    }

    /// New-snapshot positions of sections whose header changed.
    pub fn section_header_reloads(&self) -> &BTreeSet<usize> {
        &self.section_header_reloads
    }

    /// Inserted rows, in new-snapshot coordinates.
    pub fn row_inserts(&self) -> &BTreeSet<IndexPath> {
        &self.row_inserts
    }

    /// Deleted rows, in old-snapshot coordinates.
    pub fn row_deletes(&self) -> &BTreeSet<IndexPath> {
        &self.row_deletes
    }

    /// Rows to redraw in place, in old-snapshot coordinates.
    pub fn row_reloads(&self) -> &BTreeSet<IndexPath> {
        &self.row_reloads
    }

    /// Returns `true` if there is nothing to apply.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of operations.
    pub fn len(&self) -> usize {
        self.section_inserts.len()
            + self.section_deletes.len()
            + self.section_header_reloads.len()
            + self.row_inserts.len()
            + self.row_deletes.len()
            + self.row_reloads.len()
    }

    /// Returns `true` if any section is inserted, deleted, or has its header reloaded.
    pub fn has_section_changes(&self) -> bool {
        !(self.section_inserts.is_empty()
            && self.section_deletes.is_empty()
            && self.section_header_reloads.is_empty())
    }

    /// Returns `true` if any row is inserted, deleted, or reloaded.
    pub fn has_row_changes(&self) -> bool {
        !(self.row_inserts.is_empty() && self.row_deletes.is_empty() && self.row_reloads.is_empty())
    }

    /// Every operation, in batch application order: deletes, inserts, then reloads.
    pub fn changes(&self) -> impl Iterator<Item = Change> + '_ {
        let deletes = self
            .row_deletes
            .iter()
            .map(|p| Change::DeleteRow(*p))
            .chain(self.section_deletes.iter().map(|s| Change::DeleteSection(*s)));
        let inserts = self
            .section_inserts
            .iter()
            .map(|s| Change::InsertSection(*s))
            .chain(self.row_inserts.iter().map(|p| Change::InsertRow(*p)));
        let reloads = self
            .row_reloads
            .iter()
            .map(|p| Change::ReloadRow(*p))
            .chain(
                self.section_header_reloads
                    .iter()
                    .map(|s| Change::ReloadSectionHeader(*s)),
            );
        deletes.chain(inserts).chain(reloads)
    }
}

impl FromIterator<Change> for ChangeSet {
    fn from_iter<I: IntoIterator<Item = Change>>(iter: I) -> Self {
        let mut set = ChangeSet::default();
        for change in iter {
            match change {
                Change::InsertSection(s) => set.section_inserts.insert(s),
                Change::DeleteSection(s) => set.section_deletes.insert(s),
                Change::ReloadSectionHeader(s) => set.section_header_reloads.insert(s),
                Change::InsertRow(p) => set.row_inserts.insert(p),
                Change::DeleteRow(p) => set.row_deletes.insert(p),
                Change::ReloadRow(p) => set.row_reloads.insert(p),
            };
        }
        set
    }
}
