//! Access to the two external key-value stores: orbital elements keyed by
//! satellite catalog number and geographic features keyed by [`LonLatKey`].
//!
//! [`LonLatKey`]: crate::geo_lookup::LonLatKey

mod json_file_store;
mod memory_store;
mod records;
mod store_common;

pub use json_file_store::JsonFileStore;
pub use memory_store::MemoryStore;
pub use records::{GeoFeatureRecord, OrbitalElementRecord};
pub use store_common::{ElementStore, FeatureStore, StoreError};
