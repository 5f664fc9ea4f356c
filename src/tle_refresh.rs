//! One-shot refresh of the stored element set from the element provider.
//! Scheduling the refresh is left to the host.

use crate::http_handler::HTTPError;
use crate::http_handler::http_response::response_common::ResponseError;
use crate::http_handler::http_request::request_common::NoBodyHTTPRequestType;
use crate::http_handler::http_request::tle_get::TleRequest;
use crate::keychain::Keychain;
use crate::orbit_state::{OrbitStateError, OrbitalState};
use crate::storage::{ElementStore, OrbitalElementRecord, StoreError};
use crate::{info, log, warn};
use strum_macros::Display;

#[derive(Debug, Display)]
pub enum RefreshError {
    /// The provider could not be reached or answered with an error.
    Fetch(HTTPError),
    /// The provider returned lines the propagator cannot use.
    InvalidElements(OrbitStateError),
    /// The element store rejected the write.
    Store(StoreError),
}

impl std::error::Error for RefreshError {}

impl From<HTTPError> for RefreshError {
    fn from(value: HTTPError) -> Self { RefreshError::Fetch(value) }
}

impl From<OrbitStateError> for RefreshError {
    fn from(value: OrbitStateError) -> Self { RefreshError::InvalidElements(value) }
}

impl From<StoreError> for RefreshError {
    fn from(value: StoreError) -> Self { RefreshError::Store(value) }
}

/// Fetches the current element set of the configured satellite and replaces
/// the stored record. Fails on the first error without retrying.
///
/// # Errors
/// Returns a `RefreshError` naming the stage that failed.
pub async fn refresh_elements(k: &Keychain) -> Result<OrbitalElementRecord, RefreshError> {
    let sat_cat_number = k.config().sat_cat_number();
    let client = k.client();
    info!("Fetching elements of {sat_cat_number} from {}", client.url());
    let tle = TleRequest { sat_cat_number }
        .send_request(&client)
        .await
        .inspect_err(log_fetch_error)?;
    log!(
        "Received elements for {} (timestamp {})",
        tle.name().unwrap_or("unnamed object"),
        tle.tle_timestamp().map_or_else(|| "unknown".to_string(), |t| t.to_string())
    );
    store_elements(k.elements(), sat_cat_number, tle.line1(), tle.line2()).await
}

fn log_fetch_error(e: &HTTPError) {
    if let HTTPError::HTTPResponseError(ResponseError::BadRequest(detail)) = e {
        warn!(
            "Provider rejected the request: {} (status {})",
            detail.error().unwrap_or("no detail"),
            detail.status().map_or_else(|| "unknown".to_string(), |s| s.to_string())
        );
    }
}

/// Validates two element lines and writes them under `sat_cat_number`.
///
/// # Errors
/// `RefreshError::InvalidElements` if the lines do not parse, in which case
/// nothing is written, or `RefreshError::Store` if the write fails.
pub async fn store_elements(
    store: &dyn ElementStore,
    sat_cat_number: u32,
    line1: &str,
    line2: &str,
) -> Result<OrbitalElementRecord, RefreshError> {
    OrbitalState::validate_elements(line1, line2)?;
    let record = OrbitalElementRecord::new(sat_cat_number, line1, line2);
    store.put_elements(record.clone()).await?;
    info!("Elements of {sat_cat_number} saved");
    Ok(record)
}
