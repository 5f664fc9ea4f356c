use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Two-line element set as returned by the element provider.
#[derive(serde::Deserialize, Debug)]
pub struct TleResponse {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    tle_timestamp: Option<i64>,
    line1: String,
    line2: String,
}

impl SerdeJSONBodyHTTPResponseType for TleResponse {}

impl TleResponse {
    pub fn name(&self) -> Option<&str> { self.name.as_deref() }
    pub fn tle_timestamp(&self) -> Option<i64> { self.tle_timestamp }
    pub fn line1(&self) -> &str { self.line1.as_str() }
    pub fn line2(&self) -> &str { self.line2.as_str() }
}
