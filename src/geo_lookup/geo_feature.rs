use crate::common::clean_water;
use serde::{Deserialize, Serialize};

/// Placeholder the lookup table stores for "no value".
const SENTINEL: &str = " ";

/// Water body, country, state/province and city found under a lookup key.
///
/// Absent values are normalized to `None`, whether the table stored the
/// sentinel, an empty string or nothing at all.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawGeoFeature", into = "RawGeoFeature")]
pub struct GeoFeature {
    water: Option<String>,
    country: Option<String>,
    state: Option<String>,
    city: Option<String>,
}

impl GeoFeature {
    pub fn new(water: &str, country: &str, state: &str, city: &str) -> Self {
        Self {
            water: non_empty(water),
            country: non_empty(country),
            state: non_empty(state),
            city: non_empty(city),
        }
    }

    /// The feature used when nothing is stored under the key.
    pub fn unknown() -> Self { Self::default() }

    /// Water body name with all-caps and double-spaced names retitled.
    pub fn water(&self) -> Option<String> { self.water.as_deref().map(clean_water) }
    pub fn country(&self) -> Option<&str> { self.country.as_deref() }
    pub fn state(&self) -> Option<&str> { self.state.as_deref() }
    pub fn city(&self) -> Option<&str> { self.city.as_deref() }

    /// `true` if no field carries a value.
    pub fn is_empty(&self) -> bool {
        self.water.is_none() && self.country.is_none() && self.state.is_none() && self.city.is_none()
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value.to_string()) }
}

/// On-disk representation, every field a string with `" "` meaning "absent".
#[derive(Serialize, Deserialize)]
struct RawGeoFeature {
    #[serde(default)]
    water: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    city: Option<String>,
}

impl From<RawGeoFeature> for GeoFeature {
    fn from(raw: RawGeoFeature) -> Self {
        Self::new(
            raw.water.as_deref().unwrap_or_default(),
            raw.country.as_deref().unwrap_or_default(),
            raw.state.as_deref().unwrap_or_default(),
            raw.city.as_deref().unwrap_or_default(),
        )
    }
}

impl From<GeoFeature> for RawGeoFeature {
    fn from(feature: GeoFeature) -> Self {
        let or_sentinel = |v: Option<String>| Some(v.unwrap_or_else(|| SENTINEL.to_string()));
        Self {
            water: or_sentinel(feature.water),
            country: or_sentinel(feature.country),
            state: or_sentinel(feature.state),
            city: or_sentinel(feature.city),
        }
    }
}
