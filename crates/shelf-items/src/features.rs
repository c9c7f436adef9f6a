use std::collections::BTreeSet;

use serde::Deserialize;

/// Set of optional content features that are switched on.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug, Deserialize)]
#[serde(transparent)]
pub struct FeatureSet(BTreeSet<String>);

impl FeatureSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    pub fn with(mut self, feature: impl Into<String>) -> Self {
        self.0.insert(feature.into());
        self
    }

    pub fn insert(&mut self, feature: impl Into<String>) -> bool {
        self.0.insert(feature.into())
    }

    #[inline]
    pub fn contains(&self, feature: &str) -> bool {
        self.0.contains(feature)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.as_str())
    }
}

impl<S: Into<String>> FromIterator<S> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
