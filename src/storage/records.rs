use crate::geo_lookup::GeoFeature;
use serde::{Deserialize, Serialize};

/// A stored two-line element record, in the layout written by the refresh job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitalElementRecord {
    sat_cat_number: u32,
    data: TleLines,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct TleLines {
    #[serde(rename = "TLE_LINE1")]
    line1: String,
    #[serde(rename = "TLE_LINE2")]
    line2: String,
}

impl OrbitalElementRecord {
    pub fn new(sat_cat_number: u32, line1: &str, line2: &str) -> Self {
        Self {
            sat_cat_number,
            data: TleLines { line1: line1.to_string(), line2: line2.to_string() },
        }
    }

    pub fn sat_cat_number(&self) -> u32 { self.sat_cat_number }
    pub fn line1(&self) -> &str { &self.data.line1 }
    pub fn line2(&self) -> &str { &self.data.line2 }
}

/// A stored geographic feature under its `lon<D.D>lat<D.D>` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoFeatureRecord {
    lonlat: String,
    data: GeoFeature,
}

impl GeoFeatureRecord {
    pub fn new(lonlat: &str, data: GeoFeature) -> Self {
        Self { lonlat: lonlat.to_string(), data }
    }

    pub fn into_parts(self) -> (String, GeoFeature) { (self.lonlat, self.data) }
}
