//! Quantization of the sub-satellite point into the lookup identity of the
//! geographic feature table, and the feature data stored under it.

mod geo_feature;
mod lon_lat_key;

pub use geo_feature::GeoFeature;
pub use lon_lat_key::LonLatKey;
