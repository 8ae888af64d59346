use crate::api_client::ApiError;
use crate::cache::QueryKey;
use crate::domain;
use crate::domain::check_in::CheckInRow;
use crate::AppContext;
use gymdesk_common::domain::CheckIn;
use std::sync::Arc;

pub async fn list(ctx: &AppContext) -> Result<Arc<Vec<CheckIn>>, ApiError> {
    ctx.cache
        .fetch(QueryKey::CheckIns, || ctx.api.check_ins())
        .await
}

pub async fn for_member(ctx: &AppContext, member_id: &str) -> Result<Arc<Vec<CheckIn>>, ApiError> {
    ctx.cache
        .fetch(QueryKey::MemberCheckIns(member_id.to_string()), || {
            ctx.api.member_check_ins(member_id)
        })
        .await
}

/// Attendance log with member names resolved, optionally filtered to one
/// member. This is what the check-in page renders.
pub async fn rows(ctx: &AppContext, member_id: Option<&str>) -> Result<Vec<CheckInRow>, ApiError> {
    let check_ins = match member_id {
        Some(id) => for_member(ctx, id).await?,
        None => list(ctx).await?,
    };
    let members = super::members::list(ctx).await?;
    Ok(domain::check_in::with_member_names(
        (*check_ins).clone(),
        &members,
    ))
}

pub async fn record(ctx: &AppContext, member_id: &str) -> Result<CheckIn, ApiError> {
    // The desk gets a warning for a lapsed member but the check-in still
    // counts; gyms handle the renewal conversation at the counter.
    if let Ok(members) = super::members::list(ctx).await {
        if let Some(member) = members.iter().find(|m| m.id == member_id) {
            if let Some(warning) = domain::member::check_in_warning(member) {
                ctx.notifier.warning(warning);
            }
        }
    }

    match ctx.api.create_check_in(member_id).await {
        Ok(check_in) => {
            ctx.cache.invalidate_check_ins(member_id);
            ctx.notifier.success("Check-in successful!");
            Ok(check_in)
        }
        Err(err) => {
            ctx.notifier.error(format!("Check-in failed: {err}"));
            Err(err)
        }
    }
}
