use super::{handle_response_error, ApiError, AuthClient};
use gymdesk_common::api::CreateCheckInRequest;
use gymdesk_common::domain::CheckIn;

impl AuthClient {
    pub async fn check_ins(&self) -> Result<Vec<CheckIn>, ApiError> {
        let res = self.client.get(self.url("/check-ins")).send().await?;
        let res = handle_response_error(res).await?;
        Ok(res.json().await?)
    }

    pub async fn member_check_ins(&self, member_id: &str) -> Result<Vec<CheckIn>, ApiError> {
        let res = self
            .client
            .get(self.url("/check-ins"))
            .query(&[("memberId", member_id)])
            .send()
            .await?;
        let res = handle_response_error(res).await?;
        Ok(res.json().await?)
    }

    pub async fn create_check_in(&self, member_id: &str) -> Result<CheckIn, ApiError> {
        let res = self
            .client
            .post(self.url("/check-ins"))
            .json(&CreateCheckInRequest {
                member_id: member_id.into(),
            })
            .send()
            .await?;
        let res = handle_response_error(res).await?;
        Ok(res.json().await?)
    }
}
