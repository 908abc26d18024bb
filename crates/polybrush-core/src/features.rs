//! Commit boundary to the host's feature store.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::Ring;

/// A committed polygon feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Stable identifier assigned at commit time.
    pub id: Uuid,
    /// The committed polygon ring.
    pub ring: Ring,
}

impl Feature {
    /// Wrap a ring with a fresh id.
    pub fn new(ring: Ring) -> Self {
        Self {
            id: Uuid::new_v4(),
            ring,
        }
    }
}

/// Receives finished sketch polygons.
///
/// The interaction calls `add_feature` exactly once per finished session,
/// after the draw-end notification. Hosts adapt their own vector source or
/// feature list behind this trait.
pub trait FeatureSink {
    /// Accept a finished polygon ring.
    fn add_feature(&mut self, ring: Ring);
}

/// In-memory feature sink.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureCollection {
    features: Vec<Feature>,
}

impl FeatureCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed features, in commit order.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Number of committed features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// True if nothing has been committed.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl FeatureSink for FeatureCollection {
    fn add_feature(&mut self, ring: Ring) {
        log::debug!("feature committed with {} coordinates", ring.len());
        self.features.push(Feature::new(ring));
    }
}
