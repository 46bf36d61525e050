//! Serde wire form of a snapshot.
//!
//! Upstream producers describe a snapshot without positions; converting a
//! [`SnapshotDoc`] into a [`Snapshot`] assigns them.

use serde::{Deserialize, Serialize};

use crate::error::{TypeError, TypeResult};
use crate::Snapshot;

/// A snapshot as delivered over the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapshotDoc<C, H> {
    #[serde(default = "Vec::new")]
    pub sections: Vec<SectionDoc<C, H>>,
}

/// A section as delivered over the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionDoc<C, H> {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<H>,
    #[serde(default = "Vec::new")]
    pub rows: Vec<RowDoc<C>>,
}

/// A row as delivered over the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RowDoc<C> {
    pub key: String,
    pub content: C,
}

impl<C, H> TryFrom<SnapshotDoc<C, H>> for Snapshot<C, H> {
    type Error = TypeError;

    fn try_from(doc: SnapshotDoc<C, H>) -> TypeResult<Self> {
        let mut builder = Snapshot::builder();
        for (position, section) in doc.sections.into_iter().enumerate() {
            if section.key.is_empty() {
                return Err(TypeError::EmptySectionKey { position });
            }
            if let Some(row) = section.rows.iter().position(|r| r.key.is_empty()) {
                return Err(TypeError::EmptyRowKey {
                    section: section.key,
                    row,
                });
            }
            builder = builder.section(
                section.key,
                section.header,
                section.rows.into_iter().map(|r| (r.key, r.content)),
            );
        }
        Ok(builder.build())
    }
}
