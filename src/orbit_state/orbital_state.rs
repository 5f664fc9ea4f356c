use super::geodetic::{Geodetic, eci_to_geodetic, sidereal_time};
use chrono::{DateTime, Utc};
use strum_macros::Display;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Cartesian vector in the Earth-centered inertial frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EciVector {
    x: f64,
    y: f64,
    z: f64,
}

impl EciVector {
    pub fn new(x: f64, y: f64, z: f64) -> Self { Self { x, y, z } }
    pub fn x(&self) -> f64 { self.x }
    pub fn y(&self) -> f64 { self.y }
    pub fn z(&self) -> f64 { self.z }
    pub fn abs(&self) -> f64 { (self.x * self.x + self.y * self.y + self.z * self.z).sqrt() }
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for EciVector {
    fn from(value: [f64; 3]) -> Self { Self::new(value[0], value[1], value[2]) }
}

#[derive(Debug, Display, Clone, PartialEq)]
pub enum OrbitStateError {
    /// The element lines could not be parsed.
    MalformedElements(String),
    /// The propagator rejected the elements or the requested time.
    Propagation(String),
    /// The propagator returned NaN or infinite components.
    NonFinite,
}

impl std::error::Error for OrbitStateError {}

/// The instantaneous state of the tracked object. Derived for every request and
/// never cached.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrbitalState {
    /// Inertial position in km.
    position_eci: EciVector,
    /// Inertial velocity in km/s.
    velocity_eci: EciVector,
    /// Sidereal time (radians) used for the geodetic conversion.
    gmst: f64,
    geodetic: Geodetic,
    /// Magnitude of the inertial velocity in km/h.
    speed: f64,
}

impl OrbitalState {
    /// Propagates the two element lines to `instant` and derives the geodetic
    /// sub-satellite point, height and speed.
    ///
    /// # Arguments
    /// * `line1`, `line2` – The fixed-width two-line element record.
    /// * `instant` – The UTC time to propagate to.
    ///
    /// # Errors
    /// Returns an `OrbitStateError` if the lines are malformed, the propagator
    /// fails, or its output is not finite. No partial state is returned.
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(line1: &str, line2: &str, instant: DateTime<Utc>) -> Result<Self, OrbitStateError> {
        let elements = parse_elements(line1, line2)?;
        let constants = sgp4::Constants::from_elements(&elements)
            .map_err(|e| OrbitStateError::Propagation(e.to_string()))?;

        let since_epoch = instant.naive_utc() - elements.datetime;
        let minutes = since_epoch.num_milliseconds() as f64 / 60_000.0;
        let prediction = constants
            .propagate(sgp4::MinutesSinceEpoch(minutes))
            .map_err(|e| OrbitStateError::Propagation(e.to_string()))?;

        let position_eci = EciVector::from(prediction.position);
        let velocity_eci = EciVector::from(prediction.velocity);
        if !position_eci.is_finite() || !velocity_eci.is_finite() {
            return Err(OrbitStateError::NonFinite);
        }

        Ok(Self::from_eci(position_eci, velocity_eci, instant))
    }

    /// Derives the geodetic point, height and speed of an inertial state at
    /// `instant`. Non-finite input yields a state without a `sub_point`.
    pub fn from_eci(position_eci: EciVector, velocity_eci: EciVector, instant: DateTime<Utc>) -> Self {
        let gmst = sidereal_time(instant);
        let geodetic = eci_to_geodetic(&position_eci, gmst);
        let speed = velocity_eci.abs() * SECONDS_PER_HOUR;
        Self { position_eci, velocity_eci, gmst, geodetic, speed }
    }

    /// Checks that two element lines can be turned into a propagator record.
    ///
    /// # Errors
    /// Returns `OrbitStateError::MalformedElements` or `OrbitStateError::Propagation`.
    pub fn validate_elements(line1: &str, line2: &str) -> Result<(), OrbitStateError> {
        let elements = parse_elements(line1, line2)?;
        sgp4::Constants::from_elements(&elements)
            .map(|_| ())
            .map_err(|e| OrbitStateError::Propagation(e.to_string()))
    }

    pub fn position_eci(&self) -> &EciVector { &self.position_eci }
    pub fn velocity_eci(&self) -> &EciVector { &self.velocity_eci }
    pub fn gmst(&self) -> f64 { self.gmst }
    pub fn longitude_deg(&self) -> f64 { self.geodetic.longitude_deg() }
    pub fn latitude_deg(&self) -> f64 { self.geodetic.latitude_deg() }
    /// Geodetic height in km.
    pub fn height(&self) -> f64 { self.geodetic.height() }
    /// Speed in km/h.
    pub fn speed(&self) -> f64 { self.speed }

    /// The sub-satellite point as `(longitude, latitude)` in degrees, or `None`
    /// if the conversion did not yield usable coordinates.
    pub fn sub_point(&self) -> Option<(f64, f64)> {
        let (lon, lat) = (self.longitude_deg(), self.latitude_deg());
        if lon.is_finite() && lat.is_finite() && self.geodetic.is_finite() {
            Some((lon, lat))
        } else {
            None
        }
    }
}

fn parse_elements(line1: &str, line2: &str) -> Result<sgp4::Elements, OrbitStateError> {
    sgp4::Elements::from_tle(None, line1.trim_end().as_bytes(), line2.trim_end().as_bytes())
        .map_err(|e| OrbitStateError::MalformedElements(e.to_string()))
}
