//! Propagation of stored two-line elements to the instantaneous state of the
//! tracked object, and the inertial to geodetic conversion of that state.

mod geodetic;
mod orbital_state;
#[cfg(test)]
mod tests;

pub use geodetic::{Geodetic, eci_to_geodetic, sidereal_time};
pub use orbital_state::{EciVector, OrbitStateError, OrbitalState};
