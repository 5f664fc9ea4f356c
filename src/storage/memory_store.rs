use super::records::{GeoFeatureRecord, OrbitalElementRecord};
use super::store_common::{ElementStore, FeatureStore, StoreError};
use crate::geo_lookup::{GeoFeature, LonLatKey};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-process implementation of both stores.
#[derive(Debug, Default)]
pub struct MemoryStore {
    elements: RwLock<HashMap<u32, OrbitalElementRecord>>,
    features: RwLock<HashMap<String, GeoFeature>>,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }

    /// Builds a store from already loaded records.
    pub fn from_records(
        elements: Vec<OrbitalElementRecord>,
        features: Vec<GeoFeatureRecord>,
    ) -> Self {
        let elements = elements.into_iter().map(|r| (r.sat_cat_number(), r)).collect();
        let features = features.into_iter().map(GeoFeatureRecord::into_parts).collect();
        Self { elements: RwLock::new(elements), features: RwLock::new(features) }
    }

    pub async fn insert_feature(&self, key: &LonLatKey, feature: GeoFeature) {
        self.features.write().await.insert(key.as_str().to_string(), feature);
    }
}

#[async_trait]
impl ElementStore for MemoryStore {
    async fn get_elements(&self, sat_cat_number: u32) -> Result<OrbitalElementRecord, StoreError> {
        self.elements
            .read()
            .await
            .get(&sat_cat_number)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(sat_cat_number.to_string()))
    }

    async fn put_elements(&self, record: OrbitalElementRecord) -> Result<(), StoreError> {
        self.elements.write().await.insert(record.sat_cat_number(), record);
        Ok(())
    }
}

#[async_trait]
impl FeatureStore for MemoryStore {
    async fn get_feature(&self, key: &LonLatKey) -> Result<Option<GeoFeature>, StoreError> {
        Ok(self.features.read().await.get(key.as_str()).cloned())
    }
}
