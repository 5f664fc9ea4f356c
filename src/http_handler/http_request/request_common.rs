use super::super::http_client::HTTPClient;
use super::super::http_handler_common::HTTPError;
use super::super::http_response::response_common::HTTPResponseType;
use strum_macros::Display;

#[derive(Debug, Clone, Copy)]
pub(crate) enum HTTPRequestMethod {
    Get,
}

pub(crate) trait HTTPRequestType {
    /// Type of the expected response.
    type Response: HTTPResponseType;
    /// Path of the endpoint, appended to the client's base URL.
    fn endpoint(&self) -> String;
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod;
}

pub(crate) trait NoBodyHTTPRequestType: HTTPRequestType {
    /// Sends the request without a body and parses the response.
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let url = format!("{}{}", client.url(), self.endpoint());
        let request = match self.request_method() {
            HTTPRequestMethod::Get => client.client().get(url),
        };
        let response =
            request.send().await.map_err(|e| HTTPError::HTTPRequestError(e.into()))?;
        <Self::Response as HTTPResponseType>::read_response(response)
            .await
            .map_err(HTTPError::HTTPResponseError)
    }
}

#[derive(Debug, Display)]
pub enum RequestError {
    Timeout,
    NoConnection,
    Unknown(reqwest::Error),
}

impl std::error::Error for RequestError {}

impl From<reqwest::Error> for RequestError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            RequestError::Timeout
        } else if value.is_connect() {
            RequestError::NoConnection
        } else {
            RequestError::Unknown(value)
        }
    }
}
