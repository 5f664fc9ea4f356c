use crate::common::round_to_decimals;
use std::fmt;

/// Grid resolution of the feature table in decimal places of a degree.
const KEY_DECIMALS: u32 = 1;

/// Lookup identity of a geographic feature, `lon<D.D>lat<D.D>` with each
/// coordinate rounded to the nearest 0.1 degree.
///
/// This must match the keys the lookup table was generated with exactly: a
/// mismatch silently turns into "no feature found". Rounding is half away from
/// zero and a coordinate that rounds to zero is always rendered as `0.0`, never
/// `-0.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LonLatKey(String);

impl LonLatKey {
    pub fn new(longitude_deg: f64, latitude_deg: f64) -> Self {
        Self(format!(
            "lon{}lat{}",
            quantize(longitude_deg),
            quantize(latitude_deg)
        ))
    }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for LonLatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

fn quantize(coordinate: f64) -> String {
    format!("{:.1}", round_to_decimals(coordinate, KEY_DECIMALS))
}
