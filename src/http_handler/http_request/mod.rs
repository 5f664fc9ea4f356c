use super::http_response::tle;

pub mod request_common;
pub mod tle_get;
