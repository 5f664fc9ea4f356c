use super::records::{GeoFeatureRecord, OrbitalElementRecord};
use super::store_common::{ElementStore, FeatureStore, StoreError};
use crate::geo_lookup::{GeoFeature, LonLatKey};
use crate::{event, warn};
use async_trait::async_trait;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::{OnceCell, RwLock};

/// File-backed stores. Each table is a JSON array of records in
/// `{data_dir}/{table}.json`, loaded on first access and kept in memory.
///
/// A missing table file is treated as an empty table.
#[derive(Debug)]
pub struct JsonFileStore {
    element_path: PathBuf,
    feature_path: PathBuf,
    elements: OnceCell<RwLock<HashMap<u32, OrbitalElementRecord>>>,
    features: OnceCell<HashMap<String, GeoFeature>>,
}

impl JsonFileStore {
    pub fn new(data_dir: &Path, element_table: &str, feature_table: &str) -> Self {
        Self {
            element_path: data_dir.join(format!("{element_table}.json")),
            feature_path: data_dir.join(format!("{feature_table}.json")),
            elements: OnceCell::new(),
            features: OnceCell::new(),
        }
    }

    async fn elements(&self) -> Result<&RwLock<HashMap<u32, OrbitalElementRecord>>, StoreError> {
        self.elements
            .get_or_try_init(|| async {
                let records: Vec<OrbitalElementRecord> = read_table(&self.element_path).await?;
                Ok::<_, StoreError>(RwLock::new(
                    records.into_iter().map(|r| (r.sat_cat_number(), r)).collect(),
                ))
            })
            .await
    }

    async fn features(&self) -> Result<&HashMap<String, GeoFeature>, StoreError> {
        self.features
            .get_or_try_init(|| async {
                let records: Vec<GeoFeatureRecord> = read_table(&self.feature_path).await?;
                Ok::<_, StoreError>(records.into_iter().map(GeoFeatureRecord::into_parts).collect())
            })
            .await
    }
}

async fn read_table<T>(path: &Path) -> Result<Vec<T>, StoreError>
where
    for<'de> T: serde::Deserialize<'de>,
{
    match tokio::fs::read(path).await {
        Ok(bytes) => {
            let records: Vec<T> = serde_json::from_slice(&bytes)?;
            event!("Loaded {} records from {}", records.len(), path.display());
            Ok(records)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Table file {} does not exist, treating it as empty", path.display());
            Ok(Vec::new())
        }
        Err(e) => Err(StoreError::Io(e)),
    }
}

/// Replaces the table file by writing a sibling temp file and renaming it over.
async fn write_table<T: serde::Serialize>(path: &Path, records: &[T]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let tmp_path = path.with_extension("json.tmp");
    tokio::fs::write(&tmp_path, serde_json::to_vec_pretty(records)?).await?;
    tokio::fs::rename(&tmp_path, path).await?;
    Ok(())
}

#[async_trait]
impl ElementStore for JsonFileStore {
    async fn get_elements(&self, sat_cat_number: u32) -> Result<OrbitalElementRecord, StoreError> {
        self.elements()
            .await?
            .read()
            .await
            .get(&sat_cat_number)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(sat_cat_number.to_string()))
    }

    async fn put_elements(&self, record: OrbitalElementRecord) -> Result<(), StoreError> {
        let mut table = self.elements().await?.write().await;
        let mut records: Vec<_> = table
            .values()
            .filter(|r| r.sat_cat_number() != record.sat_cat_number())
            .cloned()
            .chain(std::iter::once(record.clone()))
            .collect();
        records.sort_by_key(OrbitalElementRecord::sat_cat_number);
        // the cached table only changes once the file is replaced
        write_table(&self.element_path, &records).await?;
        table.insert(record.sat_cat_number(), record);
        Ok(())
    }
}

#[async_trait]
impl FeatureStore for JsonFileStore {
    async fn get_feature(&self, key: &LonLatKey) -> Result<Option<GeoFeature>, StoreError> {
        Ok(self.features().await?.get(key.as_str()).cloned())
    }
}
