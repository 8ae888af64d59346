mod helpers;

use gymdesk_client::notification::Level;
use gymdesk_client::queries;
use gymdesk_common::api::CreatePlanRequest;
use gymdesk_common::domain::MembershipPlan;
use helpers::spawn_app;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

fn plan(id: &str, name: &str, duration_months: u32, price: i64) -> MembershipPlan {
    MembershipPlan {
        id: id.into(),
        name: name.into(),
        duration_months,
        price,
    }
}

#[tokio::test]
async fn creating_a_plan_refreshes_the_list() {
    let app = spawn_app().await;
    let ctx = app.context();

    let monthly = plan("pl-1", "Monthly", 1, 3_000);
    let yearly = plan("pl-2", "Yearly", 12, 30_000);

    Mock::given(method("GET"))
        .and(path("/membership-plans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![monthly.clone()]))
        .up_to_n_times(1)
        .mount(&app.server)
        .await;
    assert_eq!(queries::plans::list(&ctx).await.unwrap().len(), 1);

    Mock::given(method("POST"))
        .and(path("/membership-plans"))
        .and(body_json(json!({
            "name": "Yearly",
            "durationMonths": 12,
            "price": 30_000
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(&yearly))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/membership-plans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![monthly.clone(), yearly.clone()]))
        .expect(1)
        .mount(&app.server)
        .await;

    queries::plans::create(
        &ctx,
        &CreatePlanRequest {
            name: "Yearly".into(),
            duration_months: 12,
            price: 30_000,
        },
    )
    .await
    .unwrap();

    assert_eq!(queries::plans::list(&ctx).await.unwrap().len(), 2);

    let notifications = ctx.notifier.drain();
    assert_eq!(notifications[0].level, Level::Success);
    assert_eq!(
        notifications[0].message,
        "Membership plan created successfully!"
    );
}

#[tokio::test]
async fn a_rejected_plan_surfaces_the_backend_message() {
    let app = spawn_app().await;
    let ctx = app.context();

    Mock::given(method("POST"))
        .and(path("/membership-plans"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "Name is required" })),
        )
        .expect(1)
        .mount(&app.server)
        .await;

    let result = queries::plans::create(
        &ctx,
        &CreatePlanRequest {
            name: "".into(),
            duration_months: 1,
            price: 3_000,
        },
    )
    .await;
    assert!(result.is_err());

    let notifications = ctx.notifier.drain();
    assert_eq!(notifications[0].level, Level::Error);
    assert!(notifications[0].message.contains("Name is required"));
}
