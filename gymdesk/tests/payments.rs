mod helpers;

use gymdesk_client::domain::payment::UNKNOWN_MEMBER;
use gymdesk_client::notification::Level;
use gymdesk_client::queries;
use gymdesk_common::api::{CreatePaymentRequest, InitiatePaymentRequest};
use gymdesk_common::domain::MembershipStatus;
use helpers::{member, payment, spawn_app};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn the_history_resolves_member_names_client_side() {
    let app = spawn_app().await;
    let ctx = app.context();

    let john = member("1", "John", MembershipStatus::Active);
    Mock::given(method("GET"))
        .and(path("/payments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![
            payment("p-1", "1", 4_500),
            payment("p-2", "gone", 2_000),
        ]))
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![john.clone()]))
        .mount(&app.server)
        .await;

    let rows = queries::payments::history_with_members(&ctx).await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].member_name, john.full_name());
    // A member deleted since keeps their payment row under a placeholder.
    assert_eq!(rows[1].member_name, UNKNOWN_MEMBER);
}

#[tokio::test]
async fn a_charge_initiates_and_confirms_the_intent() {
    let app = spawn_app().await;
    let ctx = app.context();

    Mock::given(method("GET"))
        .and(path("/payments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .up_to_n_times(1)
        .mount(&app.server)
        .await;
    assert!(queries::payments::history(&ctx).await.unwrap().is_empty());

    Mock::given(method("POST"))
        .and(path("/payments/initiate"))
        .and(body_json(json!({
            "amount": 4_500,
            "memberId": "1",
            "planId": "pl-1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "clientSecret": "cs_test",
            "paymentIntentId": "pi_1"
        })))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/payments/confirm/pi_1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/payments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![payment("p-1", "1", 4_500)]))
        .expect(1)
        .mount(&app.server)
        .await;

    let intent = queries::payments::charge(
        &ctx,
        &InitiatePaymentRequest {
            amount: 4_500,
            member_id: "1".into(),
            plan_id: "pl-1".into(),
        },
    )
    .await
    .unwrap();
    assert_eq!(intent.payment_intent_id, "pi_1");

    assert_eq!(queries::payments::history(&ctx).await.unwrap().len(), 1);

    let notifications = ctx.notifier.drain();
    assert_eq!(notifications[0].level, Level::Success);
    assert_eq!(notifications[0].message, "Payment processed successfully!");
}

#[tokio::test]
async fn a_failed_confirm_is_not_retried_and_keeps_the_history() {
    let app = spawn_app().await;
    let ctx = app.context();

    Mock::given(method("GET"))
        .and(path("/payments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/payments/initiate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "clientSecret": "cs_test",
            "paymentIntentId": "pi_1"
        })))
        .expect(1)
        .mount(&app.server)
        .await;
    // Confirm fails once and must be called exactly once: a duplicate
    // confirm could charge the card twice.
    Mock::given(method("POST"))
        .and(path("/payments/confirm/pi_1"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "Processor timeout" })),
        )
        .expect(1)
        .mount(&app.server)
        .await;

    queries::payments::history(&ctx).await.unwrap();

    let result = queries::payments::charge(
        &ctx,
        &InitiatePaymentRequest {
            amount: 4_500,
            member_id: "1".into(),
            plan_id: "pl-1".into(),
        },
    )
    .await;
    assert!(result.is_err());

    // Cached history survives; the single expected GET proves no refetch.
    queries::payments::history(&ctx).await.unwrap();

    let notifications = ctx.notifier.drain();
    assert_eq!(notifications[0].level, Level::Error);
    assert!(notifications[0].message.contains("Processor timeout"));
}

#[tokio::test]
async fn a_manual_payment_is_recorded() {
    let app = spawn_app().await;
    let ctx = app.context();

    Mock::given(method("POST"))
        .and(path("/payments"))
        .and(body_json(json!({
            "memberId": "1",
            "amount": 3_000,
            "notes": "cash at the desk"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(payment("p-9", "1", 3_000)))
        .expect(1)
        .mount(&app.server)
        .await;

    let created = queries::payments::record_manual(
        &ctx,
        &CreatePaymentRequest {
            member_id: "1".into(),
            membership_plan_id: None,
            amount: 3_000,
            notes: Some("cash at the desk".into()),
        },
    )
    .await
    .unwrap();
    assert_eq!(created.amount, 3_000);

    let notifications = ctx.notifier.drain();
    assert_eq!(notifications[0].level, Level::Success);
    assert_eq!(notifications[0].message, "Payment recorded successfully!");
}
