mod helpers;

use gymdesk_client::notification::Level;
use gymdesk_client::queries;
use gymdesk_common::domain::MembershipStatus;
use helpers::{check_in, member, spawn_app};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn a_recorded_check_in_shows_up_on_the_next_read() {
    let app = spawn_app().await;
    let ctx = app.context();

    let john = member("1", "John", MembershipStatus::Active);
    Mock::given(method("GET"))
        .and(path("/members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![john.clone()]))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/check-ins"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .up_to_n_times(1)
        .mount(&app.server)
        .await;

    assert!(queries::check_ins::rows(&ctx, None).await.unwrap().is_empty());

    Mock::given(method("POST"))
        .and(path("/check-ins"))
        .and(body_json(json!({ "memberId": "1" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(check_in("c-1", "1")))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/check-ins"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![check_in("c-1", "1")]))
        .expect(1)
        .mount(&app.server)
        .await;

    queries::check_ins::record(&ctx, "1").await.unwrap();

    let rows = queries::check_ins::rows(&ctx, None).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].member_name, john.full_name());

    let notifications = ctx.notifier.drain();
    assert_eq!(notifications[0].level, Level::Success);
    assert_eq!(notifications[0].message, "Check-in successful!");
}

#[tokio::test]
async fn a_failed_check_in_leaves_the_log_unchanged() {
    let app = spawn_app().await;
    let ctx = app.context();

    let john = member("1", "John", MembershipStatus::Active);
    Mock::given(method("GET"))
        .and(path("/members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![john.clone()]))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/check-ins"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![check_in("c-0", "1")]))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/check-ins"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "Database down" })),
        )
        .expect(1)
        .mount(&app.server)
        .await;

    assert_eq!(queries::check_ins::rows(&ctx, None).await.unwrap().len(), 1);

    let result = queries::check_ins::record(&ctx, "1").await;
    assert!(result.is_err());

    // Same single backend read: the failed mutation invalidated nothing.
    assert_eq!(queries::check_ins::rows(&ctx, None).await.unwrap().len(), 1);

    let notifications = ctx.notifier.drain();
    assert_eq!(notifications[0].level, Level::Error);
    assert!(notifications[0].message.starts_with("Check-in failed"));
}

#[tokio::test]
async fn checking_in_a_lapsed_member_warns_but_still_counts() {
    let app = spawn_app().await;
    let ctx = app.context();

    let john = member("1", "John", MembershipStatus::Expired);
    Mock::given(method("GET"))
        .and(path("/members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![john.clone()]))
        .mount(&app.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/check-ins"))
        .respond_with(ResponseTemplate::new(201).set_body_json(check_in("c-1", "1")))
        .expect(1)
        .mount(&app.server)
        .await;

    queries::check_ins::record(&ctx, "1").await.unwrap();

    let notifications = ctx.notifier.drain();
    assert_eq!(notifications[0].level, Level::Warning);
    assert!(notifications[0].message.contains("expired membership"));
    assert_eq!(notifications[1].level, Level::Success);
}

#[tokio::test]
async fn the_log_can_be_filtered_to_one_member() {
    let app = spawn_app().await;
    let ctx = app.context();

    let john = member("1", "John", MembershipStatus::Active);
    Mock::given(method("GET"))
        .and(path("/members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![john.clone()]))
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/check-ins"))
        .and(wiremock::matchers::query_param("memberId", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![check_in("c-1", "1")]))
        .expect(1)
        .mount(&app.server)
        .await;

    let rows = queries::check_ins::rows(&ctx, Some("1")).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].check_in.member_id, "1");
}
