use gymdesk_common::api::{LoginRequest, LoginResponse};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use std::time::Duration;

mod auth;
mod check_ins;
mod error;
mod members;
mod payments;
mod plans;

pub use error::ApiError;
pub(crate) use error::handle_response_error;

/// Client for the endpoints that require a session token. Everything the
/// console does after login goes through one of these.
pub struct AuthClient {
    address: String,
    client: reqwest::Client,
}

impl AuthClient {
    pub fn new(address: &str, token: &str, timeout: Duration) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        let mut bearer = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| ApiError::Unexpected("Session token is not a valid header".into()))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            address: address.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.address)
    }
}

pub async fn login(
    address: &str,
    timeout: Duration,
    username: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    let url = format!("{}/auth/login", address.trim_end_matches('/'));
    let res = reqwest::Client::builder()
        .timeout(timeout)
        .build()?
        .post(url)
        .json(&LoginRequest {
            username: username.into(),
            password: password.into(),
        })
        .send()
        .await?;
    let res = handle_response_error(res).await?;
    let res = res.json::<LoginResponse>().await?;
    Ok(res)
}
