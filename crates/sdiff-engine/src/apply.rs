//! Reference list surface that applies a change set as one batch.
//!
//! [`RenderedList`] keeps the state a list view would retain (section keys,
//! headers, and row payloads) and applies a [`ChangeSet`] with the two-phase
//! rule: deletes against the pre-batch index space, inserts against the
//! post-batch index space, reloads at their pre-batch coordinates. Inserted
//! and reloaded payloads are taken from the target snapshot. After the batch
//! the counts are checked against the target, as a table view does.

use sdiff_types::{ChangeSet, IndexPath, Row, Section, Snapshot};
use tracing::debug;

use crate::error::{ApplyError, ApplyResult};

/// A row as currently displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedRow<C> {
    pub key: String,
    pub content: C,
}

impl<C: Clone> From<&Row<C>> for RenderedRow<C> {
    fn from(row: &Row<C>) -> Self {
        Self {
            key: row.key().to_string(),
            content: row.content().clone(),
        }
    }
}

/// A section as currently displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedSection<C, H> {
    pub key: String,
    pub header: Option<H>,
    pub rows: Vec<RenderedRow<C>>,
}

impl<C: Clone, H: Clone> From<&Section<C, H>> for RenderedSection<C, H> {
    fn from(section: &Section<C, H>) -> Self {
        Self {
            key: section.key().to_string(),
            header: section.header().cloned(),
            rows: section.rows().iter().map(RenderedRow::from).collect(),
        }
    }
}

/// The retained state of a list surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedList<C, H> {
    sections: Vec<RenderedSection<C, H>>,
}

impl<C, H> Default for RenderedList<C, H> {
    fn default() -> Self {
        Self {
            sections: Vec::new(),
        }
    }
}

impl<C: Clone, H: Clone> RenderedList<C, H> {
    /// Render a snapshot from scratch (a full reload).
    pub fn from_snapshot(snapshot: &Snapshot<C, H>) -> Self {
        Self {
            sections: snapshot.sections().iter().map(RenderedSection::from).collect(),
        }
    }

    /// Sections in display order.
    pub fn sections(&self) -> &[RenderedSection<C, H>] {
        &self.sections
    }

    /// Apply `changes` as a single batch, moving the display to `target`.
    ///
    /// Either the whole batch lands or, on error, the list is left untouched.
    pub fn apply(&mut self, changes: &ChangeSet, target: &Snapshot<C, H>) -> ApplyResult<()> {
        let mut sections = self.sections.clone();

        validate_pre_batch(&sections, changes)?;

        let reloaded: Vec<(String, String)> = changes
            .row_reloads()
            .iter()
            .map(|p| {
                let section = &sections[p.section];
                (section.key.clone(), section.rows[p.row].key.clone())
            })
            .collect();

        // Phase one: deletes, highest coordinates first.
        for path in changes.row_deletes().iter().rev() {
            sections[path.section].rows.remove(path.row);
        }
        for &section in changes.section_deletes().iter().rev() {
            sections.remove(section);
        }

        // Phase two: inserts, lowest coordinates first.
        for &position in changes.section_inserts() {
            let source = target
                .sections()
                .get(position)
                .ok_or(ApplyError::SectionOutOfRange {
                    section: position,
                    count: target.len(),
                })?;
            if position > sections.len() {
                return Err(ApplyError::SectionOutOfRange {
                    section: position,
                    count: sections.len(),
                });
            }
            sections.insert(position, RenderedSection::from(source));
        }
        for path in changes.row_inserts() {
            let source = target_row(target, *path)?;
            let count = sections.len();
            let section = sections
                .get_mut(path.section)
                .ok_or(ApplyError::SectionOutOfRange {
                    section: path.section,
                    count,
                })?;
            if path.row > section.rows.len() {
                return Err(ApplyError::RowOutOfRange {
                    path: *path,
                    count: section.rows.len(),
                });
            }
            section.rows.insert(path.row, RenderedRow::from(source));
        }

        for (section_key, row_key) in reloaded {
            let source = target
                .section(&section_key)
                .and_then(|s| s.row(&row_key))
                .ok_or_else(|| ApplyError::MissingRow {
                    section: section_key.clone(),
                    row: row_key.clone(),
                })?;
            let row = sections
                .iter_mut()
                .find(|s| s.key == section_key)
                .and_then(|s| s.rows.iter_mut().find(|r| r.key == row_key))
                .ok_or_else(|| ApplyError::MissingRow {
                    section: section_key.clone(),
                    row: row_key.clone(),
                })?;
            row.content = source.content().clone();
        }
        for &position in changes.section_header_reloads() {
            let source = target
                .sections()
                .get(position)
                .ok_or(ApplyError::SectionOutOfRange {
                    section: position,
                    count: target.len(),
                })?;
            let count = sections.len();
            let section = sections
                .get_mut(position)
                .ok_or(ApplyError::SectionOutOfRange {
                    section: position,
                    count,
                })?;
            if section.key != source.key() {
                return Err(ApplyError::MissingSection(source.key().to_string()));
            }
            section.header = source.header().cloned();
        }

        verify_counts(&sections, target)?;

        debug!(
            sections = sections.len(),
            operations = changes.len(),
            "applied change set"
        );
        self.sections = sections;
        Ok(())
    }
}

fn validate_pre_batch<C, H>(
    sections: &[RenderedSection<C, H>],
    changes: &ChangeSet,
) -> ApplyResult<()> {
    let count = sections.len();
    if let Some(&section) = changes.section_deletes().iter().find(|&&s| s >= count) {
        return Err(ApplyError::SectionOutOfRange { section, count });
    }
    for path in changes.row_deletes().iter().chain(changes.row_reloads()) {
        let section = sections
            .get(path.section)
            .ok_or(ApplyError::SectionOutOfRange {
                section: path.section,
                count,
            })?;
        if path.row >= section.rows.len() {
            return Err(ApplyError::RowOutOfRange {
                path: *path,
                count: section.rows.len(),
            });
        }
    }
    Ok(())
}

fn target_row<C, H>(target: &Snapshot<C, H>, path: IndexPath) -> ApplyResult<&Row<C>> {
    let section = target
        .sections()
        .get(path.section)
        .ok_or(ApplyError::SectionOutOfRange {
            section: path.section,
            count: target.len(),
        })?;
    section.rows().get(path.row).ok_or(ApplyError::RowOutOfRange {
        path,
        count: section.len(),
    })
}

fn verify_counts<C, H>(
    sections: &[RenderedSection<C, H>],
    target: &Snapshot<C, H>,
) -> ApplyResult<()> {
    if sections.len() != target.len() {
        return Err(ApplyError::InconsistentSectionCount {
            expected: target.len(),
            actual: sections.len(),
        });
    }
    for (position, (rendered, expected)) in sections.iter().zip(target.sections()).enumerate() {
        if rendered.rows.len() != expected.len() {
            return Err(ApplyError::InconsistentRowCount {
                section: position,
                expected: expected.len(),
                actual: rendered.rows.len(),
            });
        }
    }
    Ok(())
}
