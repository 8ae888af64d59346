use crate::api_client::ApiError;
use crate::cache::QueryKey;
use crate::AppContext;
use gymdesk_common::api::{CreatePlanRequest, UpdatePlanRequest};
use gymdesk_common::domain::MembershipPlan;
use std::sync::Arc;

pub async fn list(ctx: &AppContext) -> Result<Arc<Vec<MembershipPlan>>, ApiError> {
    ctx.cache
        .fetch(QueryKey::MembershipPlans, || ctx.api.membership_plans())
        .await
}

pub async fn create(ctx: &AppContext, plan: &CreatePlanRequest) -> Result<MembershipPlan, ApiError> {
    match ctx.api.create_plan(plan).await {
        Ok(created) => {
            ctx.cache.invalidate(&QueryKey::MembershipPlans);
            ctx.notifier.success("Membership plan created successfully!");
            Ok(created)
        }
        Err(err) => {
            ctx.notifier
                .error(format!("Failed to create membership plan: {err}"));
            Err(err)
        }
    }
}

pub async fn update(
    ctx: &AppContext,
    id: &str,
    plan: &UpdatePlanRequest,
) -> Result<MembershipPlan, ApiError> {
    match ctx.api.update_plan(id, plan).await {
        Ok(updated) => {
            ctx.cache.invalidate(&QueryKey::MembershipPlans);
            ctx.notifier.success("Membership plan updated successfully!");
            Ok(updated)
        }
        Err(err) => {
            ctx.notifier
                .error(format!("Failed to update membership plan: {err}"));
            Err(err)
        }
    }
}

pub async fn delete(ctx: &AppContext, id: &str) -> Result<(), ApiError> {
    match ctx.api.delete_plan(id).await {
        Ok(()) => {
            ctx.cache.invalidate(&QueryKey::MembershipPlans);
            ctx.notifier.success("Membership plan deleted successfully!");
            Ok(())
        }
        Err(err) => {
            ctx.notifier
                .error(format!("Failed to delete membership plan: {err}"));
            Err(err)
        }
    }
}
