use crate::api_client::ApiError;
use crate::cache::QueryKey;
use crate::domain;
use crate::domain::payment::PaymentRow;
use crate::AppContext;
use gymdesk_common::api::{CreatePaymentRequest, InitiatePaymentRequest, InitiatePaymentResponse};
use gymdesk_common::domain::Payment;
use std::sync::Arc;

pub async fn history(ctx: &AppContext) -> Result<Arc<Vec<Payment>>, ApiError> {
    ctx.cache
        .fetch(QueryKey::Payments, || ctx.api.payments())
        .await
}

/// History with member names resolved through the cached member list.
pub async fn history_with_members(ctx: &AppContext) -> Result<Vec<PaymentRow>, ApiError> {
    let (payments, members) = tokio::try_join!(history(ctx), super::members::list(ctx))?;
    Ok(domain::payment::with_member_names(
        (*payments).clone(),
        &members,
    ))
}

pub async fn record_manual(
    ctx: &AppContext,
    payment: &CreatePaymentRequest,
) -> Result<Payment, ApiError> {
    match ctx.api.create_payment(payment).await {
        Ok(created) => {
            ctx.cache.invalidate(&QueryKey::Payments);
            ctx.notifier.success("Payment recorded successfully!");
            Ok(created)
        }
        Err(err) => {
            ctx.notifier
                .error(format!("Failed to record payment: {err}"));
            Err(err)
        }
    }
}

/// Two-step processor flow: open an intent, then confirm it. Neither step
/// is retried; a duplicate confirm could charge the card twice.
pub async fn charge(
    ctx: &AppContext,
    request: &InitiatePaymentRequest,
) -> Result<InitiatePaymentResponse, ApiError> {
    let intent = match ctx.api.initiate_payment(request).await {
        Ok(intent) => intent,
        Err(err) => {
            ctx.notifier
                .error(format!("Failed to start the payment: {err}"));
            return Err(err);
        }
    };

    match ctx.api.confirm_payment(&intent.payment_intent_id).await {
        Ok(()) => {
            ctx.cache.invalidate(&QueryKey::Payments);
            ctx.notifier.success("Payment processed successfully!");
            Ok(intent)
        }
        Err(err) => {
            ctx.notifier
                .error(format!("Failed to confirm the payment: {err}"));
            Err(err)
        }
    }
}
