//! Element sets and instants shared by the unit tests.

use chrono::{DateTime, TimeZone, Utc};

/// ISS elements with an epoch of 2008-09-20 12:25:40 UTC.
pub(crate) const ISS_TLE_LINE1: &str =
    "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
pub(crate) const ISS_TLE_LINE2: &str =
    "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

pub(crate) fn tle_epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2008, 9, 20, 12, 25, 40).unwrap()
}
