use crate::api_client::ApiError;
use crate::cache::QueryKey;
use crate::AppContext;
use gymdesk_common::api::{
    CreateMemberRequest, RecomputeStatusesResponse, RenewMembershipRequest, UpdateMemberRequest,
};
use gymdesk_common::domain::Member;
use std::sync::Arc;

pub async fn list(ctx: &AppContext) -> Result<Arc<Vec<Member>>, ApiError> {
    ctx.cache
        .fetch(QueryKey::Members, || ctx.api.members())
        .await
}

pub async fn active(ctx: &AppContext) -> Result<Arc<Vec<Member>>, ApiError> {
    ctx.cache
        .fetch(QueryKey::ActiveMembers, || ctx.api.active_members())
        .await
}

pub async fn expired(ctx: &AppContext) -> Result<Arc<Vec<Member>>, ApiError> {
    ctx.cache
        .fetch(QueryKey::ExpiredMembers, || ctx.api.expired_members())
        .await
}

pub async fn find_by_dni(ctx: &AppContext, dni: &str) -> Result<Arc<Option<Member>>, ApiError> {
    ctx.cache
        .fetch(QueryKey::MemberByDni(dni.to_string()), || {
            ctx.api.member_by_dni(dni)
        })
        .await
}

pub async fn register(ctx: &AppContext, member: &CreateMemberRequest) -> Result<Member, ApiError> {
    match ctx.api.create_member(member).await {
        Ok(created) => {
            ctx.cache.invalidate_member_queries();
            ctx.notifier.success("Member registered successfully!");
            Ok(created)
        }
        Err(err) => {
            ctx.notifier
                .error(format!("Failed to register member: {err}"));
            Err(err)
        }
    }
}

pub async fn update(
    ctx: &AppContext,
    id: &str,
    member: &UpdateMemberRequest,
) -> Result<Member, ApiError> {
    match ctx.api.update_member(id, member).await {
        Ok(updated) => {
            ctx.cache.invalidate_member_queries();
            ctx.notifier.success("Member updated successfully!");
            Ok(updated)
        }
        Err(err) => {
            ctx.notifier
                .error(format!("Failed to update member: {err}"));
            Err(err)
        }
    }
}

pub async fn delete(ctx: &AppContext, id: &str) -> Result<(), ApiError> {
    match ctx.api.delete_member(id).await {
        Ok(()) => {
            ctx.cache.invalidate_member_queries();
            ctx.notifier.success("Member deleted successfully!");
            Ok(())
        }
        Err(err) => {
            ctx.notifier
                .error(format!("Failed to delete member: {err}"));
            Err(err)
        }
    }
}

pub async fn renew(
    ctx: &AppContext,
    dni: &str,
    renew: &RenewMembershipRequest,
) -> Result<Member, ApiError> {
    match ctx.api.renew_membership(dni, renew).await {
        Ok(renewed) => {
            ctx.cache.invalidate_member_queries();
            ctx.notifier
                .success(format!("Membership renewed for DNI {}", renewed.dni));
            Ok(renewed)
        }
        Err(err) => {
            ctx.notifier
                .error(format!("Failed to renew membership: {err}"));
            Err(err)
        }
    }
}

pub async fn recompute_statuses(ctx: &AppContext) -> Result<RecomputeStatusesResponse, ApiError> {
    match ctx.api.recompute_statuses().await {
        Ok(res) => {
            ctx.cache.invalidate_member_queries();
            ctx.notifier.success(res.message.clone());
            Ok(res)
        }
        Err(err) => {
            ctx.notifier
                .error(format!("Failed to update member statuses: {err}"));
            Err(err)
        }
    }
}
