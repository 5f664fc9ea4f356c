use super::records::OrbitalElementRecord;
use crate::geo_lookup::{GeoFeature, LonLatKey};
use async_trait::async_trait;
use strum_macros::Display;

#[derive(Debug, Display)]
pub enum StoreError {
    /// No record exists under the requested key.
    NotFound(String),
    /// The backing storage could not be read or written.
    Io(std::io::Error),
    /// The backing storage holds data that does not parse as records.
    Malformed(serde_json::Error),
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self { StoreError::Io(value) }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self { StoreError::Malformed(value) }
}

/// Store of two-line element records, keyed by satellite catalog number.
#[async_trait]
pub trait ElementStore: Send + Sync {
    /// Fetches the element record of `sat_cat_number`.
    ///
    /// # Errors
    /// `StoreError::NotFound` if nothing is stored under the number, any other
    /// variant if the store could not be accessed.
    async fn get_elements(&self, sat_cat_number: u32) -> Result<OrbitalElementRecord, StoreError>;

    /// Inserts or replaces the record under its catalog number.
    ///
    /// # Errors
    /// Any `StoreError` raised by the backing storage.
    async fn put_elements(&self, record: OrbitalElementRecord) -> Result<(), StoreError>;
}

/// Read-only store of geographic features, keyed by quantized longitude and latitude.
#[async_trait]
pub trait FeatureStore: Send + Sync {
    /// Fetches the feature stored under `key`. A missing key is not an error
    /// and yields `Ok(None)`.
    ///
    /// # Errors
    /// Any `StoreError` raised while accessing the backing storage.
    async fn get_feature(&self, key: &LonLatKey) -> Result<Option<GeoFeature>, StoreError>;
}
