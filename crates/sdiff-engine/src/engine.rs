//! Two-level keyed diff: compare two snapshots and produce a change set.
//!
//! Sections are matched by key. Unmatched sections are inserted or deleted
//! as a whole; matched sections with differing row lists are diffed row by
//! row, and matched sections with differing headers get a header reload.
//! Positions are never recomputed: deletes and reloads carry the old
//! snapshot's positions, inserts and header reloads the new snapshot's.
//!
//! Moves are not detected. Reordering keys without changing content yields
//! an empty change set.

use sdiff_types::{Change, ChangeSet, IndexPath, Section, Snapshot};
use tracing::{debug, warn};

use crate::config::DiffConfig;
use crate::keys::{duplicate_keys, ordered_union, KeyIndex};

/// Stateless diff engine. Each call is independent of every other.
#[derive(Clone, Debug, Default)]
pub struct DiffEngine {
    config: DiffConfig,
}

impl DiffEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: DiffConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Compare `old` against `new`.
    ///
    /// Total and deterministic: empty inputs are valid and duplicate keys
    /// resolve to their first occurrence.
    pub fn diff<C, H>(&self, old: &Snapshot<C, H>, new: &Snapshot<C, H>) -> ChangeSet
    where
        C: PartialEq,
        H: PartialEq,
    {
        if self.config.warn_on_duplicate_keys {
            report_duplicates("old", old);
            report_duplicates("new", new);
        }

        let old_index = KeyIndex::build(old.sections(), self.config.lookup);
        let new_index = KeyIndex::build(new.sections(), self.config.lookup);

        let changes: ChangeSet = ordered_union(old.sections(), new.sections())
            .into_iter()
            .flat_map(|key| self.section_changes(old_index.get(key), new_index.get(key)))
            .collect();

        debug!(
            old_sections = old.len(),
            new_sections = new.len(),
            changes = changes.len(),
            "computed change set"
        );
        changes
    }

    fn section_changes<C, H>(
        &self,
        old: Option<&Section<C, H>>,
        new: Option<&Section<C, H>>,
    ) -> Vec<Change>
    where
        C: PartialEq,
        H: PartialEq,
    {
        match (old, new) {
            (Some(old), Some(new)) => {
                let mut changes = if old.same_rows(new) {
                    Vec::new()
                } else {
                    self.row_changes(old, new)
                };
                if old.header() != new.header() {
                    changes.push(Change::ReloadSectionHeader(new.position()));
                }
                changes
            }
            (Some(old), None) => vec![Change::DeleteSection(old.position())],
            (None, Some(new)) => vec![Change::InsertSection(new.position())],
            (None, None) => Vec::new(),
        }
    }

    fn row_changes<C, H>(&self, old: &Section<C, H>, new: &Section<C, H>) -> Vec<Change>
    where
        C: PartialEq,
    {
        let old_rows = KeyIndex::build(old.rows(), self.config.lookup);
        let new_rows = KeyIndex::build(new.rows(), self.config.lookup);

        ordered_union(old.rows(), new.rows())
            .into_iter()
            .filter_map(|key| match (old_rows.get(key), new_rows.get(key)) {
                (Some(o), Some(n)) if o.content() != n.content() => Some(Change::ReloadRow(
                    IndexPath::new(old.position(), o.position()),
                )),
                (Some(_), Some(_)) => None,
                (Some(o), None) => Some(Change::DeleteRow(IndexPath::new(
                    old.position(),
                    o.position(),
                ))),
                (None, Some(n)) => Some(Change::InsertRow(IndexPath::new(
                    new.position(),
                    n.position(),
                ))),
                (None, None) => None,
            })
            .collect()
    }
}

/// Compare two snapshots with the default engine configuration.
pub fn diff_snapshots<C, H>(old: &Snapshot<C, H>, new: &Snapshot<C, H>) -> ChangeSet
where
    C: PartialEq,
    H: PartialEq,
{
    DiffEngine::default().diff(old, new)
}

fn report_duplicates<C, H>(label: &str, snapshot: &Snapshot<C, H>) {
    for key in duplicate_keys(snapshot.sections()) {
        warn!(snapshot = label, section = key, "duplicate section key; first occurrence wins");
    }
    for section in snapshot.sections() {
        for key in duplicate_keys(section.rows()) {
            warn!(
                snapshot = label,
                section = section.key(),
                row = key,
                "duplicate row key; first occurrence wins"
            );
        }
    }
}
