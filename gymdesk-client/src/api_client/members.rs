use super::{handle_response_error, ApiError, AuthClient};
use gymdesk_common::api::{
    CreateMemberRequest, RecomputeStatusesResponse, RenewMembershipRequest, UpdateMemberRequest,
};
use gymdesk_common::domain::Member;

impl AuthClient {
    pub async fn members(&self) -> Result<Vec<Member>, ApiError> {
        let res = self.client.get(self.url("/members")).send().await?;
        let res = handle_response_error(res).await?;
        Ok(res.json().await?)
    }

    pub async fn member(&self, id: &str) -> Result<Member, ApiError> {
        let url = self.url(&format!("/members/{}", urlencoding::encode(id)));
        let res = self.client.get(url).send().await?;
        let res = handle_response_error(res).await?;
        Ok(res.json().await?)
    }

    /// Lookup by national ID. A missing member is a regular outcome here,
    /// not an error.
    pub async fn member_by_dni(&self, dni: &str) -> Result<Option<Member>, ApiError> {
        let url = self.url(&format!("/members/dni/{}", urlencoding::encode(dni)));
        let res = self.client.get(url).send().await?;
        match handle_response_error(res).await {
            Ok(res) => Ok(Some(res.json().await?)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub async fn active_members(&self) -> Result<Vec<Member>, ApiError> {
        let res = self.client.get(self.url("/members/active")).send().await?;
        let res = handle_response_error(res).await?;
        Ok(res.json().await?)
    }

    pub async fn expired_members(&self) -> Result<Vec<Member>, ApiError> {
        let res = self.client.get(self.url("/members/expired")).send().await?;
        let res = handle_response_error(res).await?;
        Ok(res.json().await?)
    }

    pub async fn create_member(&self, member: &CreateMemberRequest) -> Result<Member, ApiError> {
        let res = self
            .client
            .post(self.url("/members"))
            .json(member)
            .send()
            .await?;
        let res = handle_response_error(res).await?;
        Ok(res.json().await?)
    }

    pub async fn update_member(
        &self,
        id: &str,
        member: &UpdateMemberRequest,
    ) -> Result<Member, ApiError> {
        let url = self.url(&format!("/members/{}", urlencoding::encode(id)));
        let res = self.client.patch(url).json(member).send().await?;
        let res = handle_response_error(res).await?;
        Ok(res.json().await?)
    }

    /// Renewal is keyed by national ID so the front desk can renew from the
    /// card a member hands over.
    pub async fn renew_membership(
        &self,
        dni: &str,
        renew: &RenewMembershipRequest,
    ) -> Result<Member, ApiError> {
        let url = self.url(&format!("/members/{}/renew", urlencoding::encode(dni)));
        let res = self.client.patch(url).json(renew).send().await?;
        let res = handle_response_error(res).await?;
        Ok(res.json().await?)
    }

    pub async fn delete_member(&self, id: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("/members/{}", urlencoding::encode(id)));
        let res = self.client.delete(url).send().await?;
        handle_response_error(res).await?;
        Ok(())
    }

    /// Ask the backend to recompute every member's status from the renewal
    /// dates. The backend owns the status field; this only triggers it.
    pub async fn recompute_statuses(&self) -> Result<RecomputeStatusesResponse, ApiError> {
        let res = self
            .client
            .post(self.url("/members/update-statuses"))
            .send()
            .await?;
        let res = handle_response_error(res).await?;
        Ok(res.json().await?)
    }
}
