use super::{handle_response_error, ApiError, AuthClient};
use gymdesk_common::api::LogoutResponse;
use gymdesk_common::domain::User;

impl AuthClient {
    /// Identity behind the current token. Used to re-validate a persisted
    /// session on startup.
    pub async fn me(&self) -> Result<User, ApiError> {
        let res = self.client.get(self.url("/auth/me")).send().await?;
        let res = handle_response_error(res).await?;
        Ok(res.json().await?)
    }

    pub async fn logout(&self) -> Result<LogoutResponse, ApiError> {
        let res = self.client.post(self.url("/auth/logout")).send().await?;
        let res = handle_response_error(res).await?;
        Ok(res.json().await?)
    }
}
