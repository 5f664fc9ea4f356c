use super::orbital_state::EciVector;
use chrono::{DateTime, Utc};
use std::f64::consts::PI;

/// WGS84 semi-major axis in km.
const WGS84_A: f64 = 6378.137;
/// WGS84 semi-minor axis in km.
const WGS84_B: f64 = 6356.752_314_2;
const MAX_LAT_ITERATIONS: usize = 20;
const LAT_TOLERANCE: f64 = 1e-12;

/// Geodetic coordinates of a point above the WGS84 ellipsoid.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Geodetic {
    /// Longitude in radians, normalized to `[-PI, PI]`.
    longitude: f64,
    /// Geodetic latitude in radians, `[-PI/2, PI/2]`.
    latitude: f64,
    /// Height above the ellipsoid in km.
    height: f64,
}

impl Geodetic {
    pub fn longitude(&self) -> f64 { self.longitude }
    pub fn latitude(&self) -> f64 { self.latitude }
    pub fn height(&self) -> f64 { self.height }
    pub fn longitude_deg(&self) -> f64 { self.longitude.to_degrees() }
    pub fn latitude_deg(&self) -> f64 { self.latitude.to_degrees() }

    /// `true` if every component is a finite number.
    pub fn is_finite(&self) -> bool {
        self.longitude.is_finite() && self.latitude.is_finite() && self.height.is_finite()
    }
}

/// Greenwich mean sidereal time in radians for the given instant.
pub fn sidereal_time(instant: DateTime<Utc>) -> f64 {
    sgp4::iau_epoch_to_sidereal_time(sgp4::julian_years_since_j2000(&instant.naive_utc()))
        .rem_euclid(2.0 * PI)
}

/// Converts an inertial (TEME/ECI) position in km into geodetic coordinates,
/// rotating by the sidereal time `gmst` and iterating the latitude on the
/// WGS84 ellipsoid.
pub fn eci_to_geodetic(position: &EciVector, gmst: f64) -> Geodetic {
    let f = (WGS84_A - WGS84_B) / WGS84_A;
    let e2 = 2.0 * f - f * f;
    let r = position.x().hypot(position.y());

    let longitude = wrap_neg_pos_pi(position.y().atan2(position.x()) - gmst);

    let mut latitude = position.z().atan2(r);
    let mut c = 1.0;
    for _ in 0..MAX_LAT_ITERATIONS {
        let phi = latitude;
        c = 1.0 / (1.0 - e2 * phi.sin() * phi.sin()).sqrt();
        latitude = (position.z() + WGS84_A * c * e2 * phi.sin()).atan2(r);
        if (latitude - phi).abs() < LAT_TOLERANCE {
            break;
        }
    }
    let height = r / latitude.cos() - WGS84_A * c;

    Geodetic { longitude, latitude, height }
}

fn wrap_neg_pos_pi(angle: f64) -> f64 { (angle + PI).rem_euclid(2.0 * PI) - PI }
