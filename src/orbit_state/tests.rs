use super::{EciVector, OrbitStateError, OrbitalState, eci_to_geodetic, sidereal_time};
use crate::test_fixtures::{ISS_TLE_LINE1, ISS_TLE_LINE2, tle_epoch};
use chrono::TimeDelta;
use std::f64::consts::PI;

#[test]
fn test_compute_state_is_deterministic() {
    let instant = tle_epoch() + TimeDelta::minutes(37);
    let first = OrbitalState::compute(ISS_TLE_LINE1, ISS_TLE_LINE2, instant).unwrap();
    let second = OrbitalState::compute(ISS_TLE_LINE1, ISS_TLE_LINE2, instant).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_compute_state_plausible_low_earth_orbit() {
    for offset_min in [0, 15, 45, 90, 240] {
        let instant = tle_epoch() + TimeDelta::minutes(offset_min);
        let state = OrbitalState::compute(ISS_TLE_LINE1, ISS_TLE_LINE2, instant).unwrap();
        let (lon, lat) = state.sub_point().unwrap();
        assert!((-180.0..=180.0).contains(&lon), "lon {lon} out of range");
        // the inclination bounds the sub-satellite latitude
        assert!(lat.abs() <= 52.0, "lat {lat} above inclination");
        assert!((300.0..450.0).contains(&state.height()), "height {}", state.height());
        assert!((26_500.0..28_500.0).contains(&state.speed()), "speed {}", state.speed());
        assert!((0.0..2.0 * PI).contains(&state.gmst()));
    }
}

#[test]
fn test_speed_is_scaled_velocity_norm() {
    let state = OrbitalState::compute(ISS_TLE_LINE1, ISS_TLE_LINE2, tle_epoch()).unwrap();
    let v = state.velocity_eci();
    let norm = (v.x().powi(2) + v.y().powi(2) + v.z().powi(2)).sqrt();
    assert!((state.speed() - norm * 3600.0).abs() < 1e-6);
}

#[test]
fn test_compute_state_rejects_malformed_lines() {
    let res = OrbitalState::compute("1 25544U garbage", ISS_TLE_LINE2, tle_epoch());
    assert!(matches!(res, Err(OrbitStateError::MalformedElements(_))));
    assert!(OrbitalState::validate_elements("", "").is_err());
    assert!(OrbitalState::validate_elements(ISS_TLE_LINE1, ISS_TLE_LINE2).is_ok());
}

#[test]
fn test_eci_to_geodetic_on_axes() {
    // point over the equator on the x axis with zero sidereal rotation
    let geo = eci_to_geodetic(&EciVector::new(6778.137, 0.0, 0.0), 0.0);
    assert!(geo.longitude().abs() < 1e-12);
    assert!(geo.latitude().abs() < 1e-12);
    assert!((geo.height() - 400.0).abs() < 1e-6);

    // a quarter turn of the Earth moves the same point 90 degrees west
    let rotated = eci_to_geodetic(&EciVector::new(6778.137, 0.0, 0.0), PI / 2.0);
    assert!((rotated.longitude_deg() + 90.0).abs() < 1e-9);
}

#[test]
fn test_eci_to_geodetic_wraps_longitude() {
    let geo = eci_to_geodetic(&EciVector::new(-7000.0, -1.0, 0.0), 0.5);
    assert!((-PI..=PI).contains(&geo.longitude()));
}

#[test]
fn test_sidereal_time_advances_one_turn_per_sidereal_day() {
    let t0 = tle_epoch();
    let sidereal_day = TimeDelta::milliseconds(86_164_091);
    let delta = (sidereal_time(t0 + sidereal_day) - sidereal_time(t0)).abs();
    assert!(delta < 1e-4 || (2.0 * PI - delta) < 1e-4);
}

#[test]
fn test_non_finite_position_has_no_sub_point() {
    let geo = eci_to_geodetic(&EciVector::new(f64::NAN, 0.0, 6778.0), 0.3);
    assert!(!geo.is_finite());

    let position = EciVector::new(f64::NAN, f64::NAN, f64::NAN);
    let velocity = EciVector::new(7.0, 0.5, 0.1);
    let state = OrbitalState::from_eci(position, velocity, tle_epoch());
    assert_eq!(state.sub_point(), None);
}

#[test]
fn test_from_eci_matches_compute() {
    let instant = tle_epoch() + TimeDelta::minutes(12);
    let computed = OrbitalState::compute(ISS_TLE_LINE1, ISS_TLE_LINE2, instant).unwrap();
    let rebuilt =
        OrbitalState::from_eci(*computed.position_eci(), *computed.velocity_eci(), instant);
    assert_eq!(computed, rebuilt);
    assert!(rebuilt.sub_point().is_some());
}
