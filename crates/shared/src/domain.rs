use std::{collections::BTreeMap, fmt, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};

/// 1-based position of a project within its snapshot.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProjectId(pub usize);

impl ProjectId {
    pub fn from_index(index: usize) -> Self {
        Self(index + 1)
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProjectId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Turns header text into a record key: lowercase, every whitespace run becomes `_`.
///
/// Applying it to an already-normalized key returns the key unchanged.
pub fn normalize_key(raw: &str) -> String {
    let mut key = String::with_capacity(raw.len());
    let mut in_whitespace = false;
    for ch in raw.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                key.push('_');
            }
            in_whitespace = true;
        } else {
            in_whitespace = false;
            key.extend(ch.to_lowercase());
        }
    }
    key
}

/// Splits an `images` cell into its references. Entries are separated by commas
/// or newlines; blanks are dropped.
pub fn split_image_list(raw: &str) -> Vec<String> {
    raw.split([',', '\n'])
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: ProjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
    /// Columns without a dedicated field, keyed by normalized header.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl ProjectRecord {
    pub fn new(id: ProjectId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Stores `value` under an already-normalized `key`. An `id` column is
    /// dropped: the id is the record's position.
    pub fn set_field(&mut self, key: &str, value: &str) {
        let value = value.to_string();
        match key {
            "id" => {}
            "title" => self.title = Some(value),
            "date" => self.date = Some(value),
            "description" => self.description = Some(value),
            "thumbnail" => self.thumbnail = Some(value),
            "images" => self.images = split_image_list(&value),
            "video" => self.video = Some(value),
            "external_link" => self.external_link = Some(value),
            other => {
                self.extra.insert(other.to_string(), value);
            }
        }
    }

    /// Keys of every field that carries a value.
    pub fn field_keys(&self) -> Vec<&str> {
        let named = [
            ("title", self.title.is_some()),
            ("date", self.date.is_some()),
            ("description", self.description.is_some()),
            ("thumbnail", self.thumbnail.is_some()),
            ("images", !self.images.is_empty()),
            ("video", self.video.is_some()),
            ("external_link", self.external_link.is_some()),
        ];
        named
            .into_iter()
            .filter_map(|(key, present)| present.then_some(key))
            .chain(self.extra.keys().map(String::as_str))
            .collect()
    }

    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AboutProfile(BTreeMap<String, String>);

impl AboutProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AboutProfile {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Everything one session displays. Built once by the loader and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    pub projects: Vec<ProjectRecord>,
    pub about: AboutProfile,
}

impl PortfolioSnapshot {
    pub fn new(projects: Vec<ProjectRecord>, about: AboutProfile) -> Self {
        Self { projects, about }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Browsing,
    Viewing(ProjectId),
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
