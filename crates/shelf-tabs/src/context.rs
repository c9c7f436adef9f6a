use std::sync::Arc;

use shelf_items::{ContentRegistry, FeatureSet};

/// Inputs that can change the built catalog. The catalog keeps the last one
/// it built from and skips rebuilds for value-equal contexts.
#[derive(Clone, Debug)]
pub struct BuildContext {
    pub features: FeatureSet,
    pub has_permissions: bool,
    pub registry: Arc<ContentRegistry>,
}

impl BuildContext {
    pub fn new(features: FeatureSet, has_permissions: bool, registry: Arc<ContentRegistry>) -> Self {
        Self {
            features,
            has_permissions,
            registry,
        }
    }

    #[inline]
    pub fn feature_enabled(&self, feature: &str) -> bool {
        self.features.contains(feature)
    }

    pub fn with_permissions(&self, has_permissions: bool) -> Self {
        Self {
            has_permissions,
            ..self.clone()
        }
    }

    pub fn with_features(&self, features: FeatureSet) -> Self {
        Self {
            features,
            ..self.clone()
        }
    }

    pub fn with_registry(&self, registry: Arc<ContentRegistry>) -> Self {
        Self {
            registry,
            ..self.clone()
        }
    }
}

impl PartialEq for BuildContext {
    fn eq(&self, other: &Self) -> bool {
        self.has_permissions == other.has_permissions
            && self.features == other.features
            && (Arc::ptr_eq(&self.registry, &other.registry) || *self.registry == *other.registry)
    }
}

impl Eq for BuildContext {}
