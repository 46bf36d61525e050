use sdiff_engine::DiffEngine;
use sdiff_types::ChangeSet;
use tracing::debug;

use crate::item::{snapshot, ProfileItem, ProfileSnapshot};
use crate::model::Profile;

/// Result of feeding one profile into the view model.
#[derive(Clone, Debug)]
pub struct ProfileUpdate {
    /// Operations that move the displayed list to `snapshot`.
    pub changes: ChangeSet,
    /// The state now retained by the view model.
    pub snapshot: ProfileSnapshot,
}

/// Holds the currently displayed profile sections and computes the
/// incremental update for every new profile.
///
/// `update` takes `&mut self`, so two updates can never interleave against
/// the same retained state.
#[derive(Debug)]
pub struct ProfileViewModel {
    items: Vec<ProfileItem>,
    title: String,
    engine: DiffEngine,
}

impl Default for ProfileViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileViewModel {
    pub fn new() -> Self {
        Self::with_engine(DiffEngine::default())
    }

    pub fn with_engine(engine: DiffEngine) -> Self {
        Self {
            items: Vec::new(),
            title: "Profile".to_string(),
            engine,
        }
    }

    /// Screen title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Sections currently displayed.
    pub fn items(&self) -> &[ProfileItem] {
        &self.items
    }

    /// Snapshot of the currently displayed sections.
    pub fn snapshot(&self) -> ProfileSnapshot {
        snapshot(&self.items)
    }

    /// Replace the displayed profile and return what changed.
    pub fn update(&mut self, profile: &Profile) -> ProfileUpdate {
        let new_items = ProfileItem::from_profile(profile);
        let old = snapshot(&self.items);
        let new = snapshot(&new_items);

        let changes = self.engine.diff(&old, &new);
        debug!(
            sections = new.len(),
            rows = new.row_count(),
            changes = changes.len(),
            "profile updated"
        );

        self.items = new_items;
        ProfileUpdate {
            changes,
            snapshot: new,
        }
    }
}
