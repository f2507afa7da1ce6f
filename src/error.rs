//! Request Errors
//!
//! The one failure kind the store client can produce.

use thiserror::Error;

pub type ApiResult<T> = Result<T, RequestError>;

/// A failed call against the remote task store
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// fetch rejected, or no browser window to fetch from
    #[error("network error: {0}")]
    Network(String),
    #[error("{method} {url} returned status {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("could not encode request body: {0}")]
    Encode(String),
}

impl RequestError {
    pub(crate) fn from_js(value: wasm_bindgen::JsValue) -> Self {
        RequestError::Network(format!("{:?}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = RequestError::Status {
            method: "PATCH",
            url: "http://localhost:3000/tasks/4".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "PATCH http://localhost:3000/tasks/4 returned status 404");
    }
}
