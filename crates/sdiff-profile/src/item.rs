//! Section kinds of the profile screen and their mapping to snapshots.

use std::fmt;

use serde::Serialize;
use sdiff_types::Snapshot;

use crate::model::{AboutContent, Attribute, Friend, Profile};

/// Snapshot type produced by the profile screen.
pub type ProfileSnapshot = Snapshot<RowValue, String>;

/// The kinds of section the profile screen can show, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    NameEmail,
    About,
    Details,
    Friends,
}

impl ItemKind {
    /// Stable section key used for diffing.
    pub fn section_key(self) -> &'static str {
        match self {
            ItemKind::NameEmail => "nameEmail",
            ItemKind::About => "about",
            ItemKind::Details => "details",
            ItemKind::Friends => "friends",
        }
    }

    /// Section header title, if the kind has one.
    pub fn title(self) -> Option<&'static str> {
        match self {
            ItemKind::NameEmail => None,
            ItemKind::About => Some("ABOUT"),
            ItemKind::Details => Some("DETAILS"),
            ItemKind::Friends => Some("FRIENDS"),
        }
    }
}

/// One section of the profile screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileItem {
    NameEmail {
        id: String,
        name: String,
        email: Option<String>,
    },
    About(AboutContent),
    Details(Vec<Attribute>),
    Friends(Vec<Friend>),
}

impl ProfileItem {
    /// Sections shown for a profile. `NameEmail` needs both an id and a
    /// name; the other kinds appear whenever their data is present.
    pub fn from_profile(profile: &Profile) -> Vec<ProfileItem> {
        let mut items = Vec::with_capacity(4);
        if let (Some(id), Some(name)) = (&profile.id, &profile.name) {
            items.push(ProfileItem::NameEmail {
                id: id.clone(),
                name: name.clone(),
                email: profile.email.clone(),
            });
        }
        if let Some(about) = &profile.about {
            items.push(ProfileItem::About(about.clone()));
        }
        if let Some(details) = &profile.details {
            items.push(ProfileItem::Details(details.clone()));
        }
        if let Some(friends) = &profile.friends {
            items.push(ProfileItem::Friends(friends.clone()));
        }
        items
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            ProfileItem::NameEmail { .. } => ItemKind::NameEmail,
            ProfileItem::About(_) => ItemKind::About,
            ProfileItem::Details(_) => ItemKind::Details,
            ProfileItem::Friends(_) => ItemKind::Friends,
        }
    }

    /// Rows of this section, keyed for diffing.
    pub fn rows(&self) -> Vec<RowItem> {
        match self {
            ProfileItem::NameEmail { id, name, email } => vec![RowItem {
                row_id: id.clone(),
                value: RowValue::Text(format!("{}, {}", name, email.as_deref().unwrap_or(""))),
            }],
            ProfileItem::About(about) => vec![RowItem {
                // The about section has exactly one row, keyed by its title.
                row_id: ItemKind::About.title().unwrap_or("ABOUT").to_string(),
                value: RowValue::About(about.clone()),
            }],
            ProfileItem::Details(details) => details
                .iter()
                .map(|a| RowItem {
                    row_id: a.key.clone(),
                    value: RowValue::Attribute(a.clone()),
                })
                .collect(),
            ProfileItem::Friends(friends) => friends
                .iter()
                .map(|f| RowItem {
                    row_id: f.id.clone(),
                    value: RowValue::Friend(f.clone()),
                })
                .collect(),
        }
    }
}

/// Content of a profile row, compared by value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RowValue {
    Text(String),
    About(AboutContent),
    Attribute(Attribute),
    Friend(Friend),
}

impl fmt::Display for RowValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowValue::Text(text) => f.write_str(text),
            RowValue::About(about) => fmt::Display::fmt(about, f),
            RowValue::Attribute(attribute) => fmt::Display::fmt(attribute, f),
            RowValue::Friend(friend) => fmt::Display::fmt(friend, f),
        }
    }
}

/// A keyed row of a profile section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowItem {
    pub row_id: String,
    pub value: RowValue,
}

/// Build the snapshot the diff engine consumes from a list of items.
pub fn snapshot(items: &[ProfileItem]) -> ProfileSnapshot {
    items
        .iter()
        .fold(Snapshot::builder(), |builder, item| {
            let kind = item.kind();
            builder.section(
                kind.section_key(),
                kind.title().map(str::to_string),
                item.rows().into_iter().map(|r| (r.row_id, r.value)),
            )
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_profile() -> Profile {
        Profile {
            id: Some("u1".into()),
            name: Some("Al".into()),
            email: Some("a@x.com".into()),
            about: Some(AboutContent {
                title: "About".into(),
                content: "Hi".into(),
            }),
            details: Some(vec![
                Attribute { key: "age".into(), value: "30".into() },
                Attribute { key: "city".into(), value: "Oslo".into() },
            ]),
            friends: Some(vec![Friend {
                id: "9".into(),
                name: "Bo".into(),
                email: "bo@x.com".into(),
                image_url: "https://img/9".into(),
            }]),
        }
    }

    #[test]
    fn items_follow_display_order() {
        let kinds: Vec<ItemKind> = ProfileItem::from_profile(&full_profile())
            .iter()
            .map(ProfileItem::kind)
            .collect();
        assert_eq!(
            kinds,
            vec![ItemKind::NameEmail, ItemKind::About, ItemKind::Details, ItemKind::Friends]
        );
    }

    #[test]
    fn name_email_requires_id_and_name() {
        let profile = Profile {
            id: None,
            ..full_profile()
        };
        let items = ProfileItem::from_profile(&profile);
        assert!(items.iter().all(|i| i.kind() != ItemKind::NameEmail));
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn empty_profile_has_no_items() {
        assert!(ProfileItem::from_profile(&Profile::default()).is_empty());
    }

    #[test]
    fn name_email_row_without_email() {
        let item = ProfileItem::NameEmail {
            id: "u1".into(),
            name: "Al".into(),
            email: None,
        };
        let rows = item.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].row_id, "u1");
        assert_eq!(rows[0].value.to_string(), "Al, ");
    }

    #[test]
    fn snapshot_uses_kind_keys_and_titles() {
        let snapshot = snapshot(&ProfileItem::from_profile(&full_profile()));
        let keys: Vec<&str> = snapshot.sections().iter().map(|s| s.key()).collect();
        assert_eq!(keys, vec!["nameEmail", "about", "details", "friends"]);

        assert!(snapshot.sections()[0].header().is_none());
        assert_eq!(snapshot.sections()[2].header().map(String::as_str), Some("DETAILS"));

        let details = snapshot.section("details").unwrap();
        assert_eq!(details.row("city").unwrap().position(), 1);
        assert_eq!(snapshot.section("about").unwrap().rows()[0].key(), "ABOUT");
        assert_eq!(snapshot.section("friends").unwrap().rows()[0].key(), "9");
    }
}
