use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use super::tle::TleResponse;

/// Request type for the `/satellites/{id}/tles` endpoint.
#[derive(Debug)]
pub(crate) struct TleRequest {
    /// Catalog number of the satellite whose elements are requested.
    pub(crate) sat_cat_number: u32,
}

impl NoBodyHTTPRequestType for TleRequest {}

impl HTTPRequestType for TleRequest {
    /// Type of the expected response.
    type Response = TleResponse;
    /// `String` representing the specific endpoint.
    fn endpoint(&self) -> String { format!("/satellites/{}/tles", self.sat_cat_number) }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
