use serde::{Deserialize, Serialize};

/// Title of a catalog entry.
///
/// Carried verbatim from the caller; the catalog never normalizes or
/// deduplicates titles.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Title(pub String);

/// Author name used for catalog filtering.
///
/// Matching is case-sensitive exact string equality; no trimming or case
/// folding happens on either side of a lookup.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Author(pub String);

impl Title {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Title {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Title {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Author {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Author {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Author {
    fn from(value: String) -> Self {
        Self(value)
    }
}
