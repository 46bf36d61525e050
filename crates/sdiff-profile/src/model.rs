//! Profile payload as delivered by the data feed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A user profile. Every field is optional; the screen shows only the
/// sections whose data is present.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub about: Option<AboutContent>,
    pub details: Option<Vec<Attribute>>,
    pub friends: Option<Vec<Friend>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    pub title: String,
    pub content: String,
}

impl fmt::Display for AboutContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.content)
    }
}

/// A key/value detail line, e.g. `age: 30`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.key, self.value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

impl fmt::Display for Friend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.id, self.name, self.email, self.image_url)
    }
}
