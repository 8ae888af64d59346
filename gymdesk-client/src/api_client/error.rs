use gymdesk_common::api::ErrorMessage;
use reqwest::{Response, StatusCode};

const GENERIC_MESSAGE: &str = "The server could not process the request";

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Could not reach the server: {0}")]
    Network(#[source] reqwest::Error),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("{0}")]
    Unexpected(String),
}

impl ApiError {
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Unexpected(format!("Unexpected response from the server: {err}"))
        } else {
            ApiError::Network(err)
        }
    }
}

/// Turn a non-2xx response into the matching [`ApiError`], keeping the
/// backend's message when it sent one.
pub(crate) async fn handle_response_error(res: Response) -> Result<Response, ApiError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    let message = res
        .json::<ErrorMessage>()
        .await
        .map(|e| e.message)
        .unwrap_or_else(|_| GENERIC_MESSAGE.to_string());

    Err(match status {
        StatusCode::BAD_REQUEST => ApiError::Validation(message),
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized(message),
        StatusCode::FORBIDDEN => ApiError::Forbidden(message),
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        StatusCode::CONFLICT => ApiError::Conflict(message),
        s if s.is_server_error() => ApiError::Server(message),
        _ => ApiError::Unexpected(message),
    })
}
