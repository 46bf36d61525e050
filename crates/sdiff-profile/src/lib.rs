//! Profile screen for sectiondiff.
//!
//! Decodes profile payloads pushed by a data feed, maps them to section
//! kinds, and turns every new payload into an incremental [`ChangeSet`]
//! against the previously displayed state.
//!
//! [`ChangeSet`]: sdiff_types::ChangeSet

pub mod error;
pub mod feed;
pub mod item;
pub mod model;
pub mod view_model;

pub use error::{ProfileError, ProfileResult};
pub use feed::{decode_profile, feed_channel, observe, DEFAULT_FEED_CAPACITY};
pub use item::{snapshot, ItemKind, ProfileItem, ProfileSnapshot, RowItem, RowValue};
pub use model::{AboutContent, Attribute, Friend, Profile};
pub use view_model::{ProfileUpdate, ProfileViewModel};
