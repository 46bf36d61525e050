use serde::{Deserialize, Serialize};

/// How the engine finds the counterpart of a key in the other snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupStrategy {
    /// Linear scan of the list; first match wins.
    #[default]
    Scan,
    /// Hash index built once per list; the first occurrence of a key is kept.
    Hashed,
}

/// Configuration for the [`DiffEngine`](crate::DiffEngine).
///
/// Neither setting changes the produced change set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Per-key lookup used at both levels of the diff.
    pub lookup: LookupStrategy,
    /// Log a warning for every key that appears more than once in one list.
    pub warn_on_duplicate_keys: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            lookup: LookupStrategy::Scan,
            warn_on_duplicate_keys: true,
        }
    }
}

impl DiffConfig {
    /// Configuration backed by hash indexes, for large lists.
    pub fn hashed() -> Self {
        Self {
            lookup: LookupStrategy::Hashed,
            ..Default::default()
        }
    }
}
