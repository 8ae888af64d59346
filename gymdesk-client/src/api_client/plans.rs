use super::{handle_response_error, ApiError, AuthClient};
use gymdesk_common::api::{CreatePlanRequest, UpdatePlanRequest};
use gymdesk_common::domain::MembershipPlan;

impl AuthClient {
    pub async fn membership_plans(&self) -> Result<Vec<MembershipPlan>, ApiError> {
        let res = self
            .client
            .get(self.url("/membership-plans"))
            .send()
            .await?;
        let res = handle_response_error(res).await?;
        Ok(res.json().await?)
    }

    pub async fn create_plan(&self, plan: &CreatePlanRequest) -> Result<MembershipPlan, ApiError> {
        let res = self
            .client
            .post(self.url("/membership-plans"))
            .json(plan)
            .send()
            .await?;
        let res = handle_response_error(res).await?;
        Ok(res.json().await?)
    }

    pub async fn update_plan(
        &self,
        id: &str,
        plan: &UpdatePlanRequest,
    ) -> Result<MembershipPlan, ApiError> {
        let url = self.url(&format!("/membership-plans/{}", urlencoding::encode(id)));
        let res = self.client.patch(url).json(plan).send().await?;
        let res = handle_response_error(res).await?;
        Ok(res.json().await?)
    }

    pub async fn delete_plan(&self, id: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("/membership-plans/{}", urlencoding::encode(id)));
        let res = self.client.delete(url).send().await?;
        handle_response_error(res).await?;
        Ok(())
    }
}
