mod helpers;

use gymdesk_client::router::{self, menu, NavDecision, Page};
use gymdesk_common::domain::Role;
use helpers::{admin, owner, spawn_app, spawn_app_with_session};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

async fn mock_me(app: &helpers::TestApp, user: &gymdesk_common::domain::User) {
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user))
        .mount(&app.server)
        .await;
}

#[tokio::test]
async fn protected_pages_send_signed_out_users_to_login() {
    let app = spawn_app().await;
    app.session.initialize().await;

    for page in Page::MENU {
        assert_eq!(
            router::resolve(page, &app.session).await,
            NavDecision::ToLogin { from: page },
            "{} should require a session",
            page.path()
        );
    }
}

#[tokio::test]
async fn an_admin_is_redirected_from_plans_without_any_plans_request() {
    let user = admin();
    let app = spawn_app_with_session(&user).await;
    mock_me(&app, &user).await;
    // The page never mounts, so its query never fires.
    Mock::given(method("GET"))
        .and(path("/membership-plans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&app.server)
        .await;

    app.session.initialize().await;

    assert_eq!(
        router::resolve(Page::MembershipPlans, &app.session).await,
        NavDecision::To(Page::CheckIn)
    );
}

#[tokio::test]
async fn an_owner_can_open_every_page() {
    let user = owner();
    let app = spawn_app_with_session(&user).await;
    mock_me(&app, &user).await;
    app.session.initialize().await;

    for page in Page::MENU {
        assert_eq!(
            router::resolve(page, &app.session).await,
            NavDecision::Allow,
            "{} should be open to the owner",
            page.path()
        );
    }
}

#[tokio::test]
async fn the_login_page_sends_signed_in_users_home() {
    let user = owner();
    let app = spawn_app_with_session(&user).await;
    mock_me(&app, &user).await;
    app.session.initialize().await;

    assert_eq!(
        router::resolve(Page::Login, &app.session).await,
        NavDecision::To(Page::Members)
    );
}

#[tokio::test]
async fn a_guard_waits_for_initialization_before_deciding() {
    let user = admin();
    let app = spawn_app_with_session(&user).await;
    mock_me(&app, &user).await;

    // Resolve before initialize has even started; it must block on the
    // session settling rather than read the indeterminate state.
    let session = app.session.clone();
    let decision = tokio::spawn(async move { router::resolve(Page::Members, &session).await });

    tokio::task::yield_now().await;
    app.session.initialize().await;

    assert_eq!(decision.await.unwrap(), NavDecision::Allow);
}

#[tokio::test]
async fn the_menu_is_filtered_by_role() {
    assert_eq!(
        menu(Role::Admin),
        vec![Page::Register, Page::Members, Page::CheckIn]
    );
    assert_eq!(menu(Role::Owner).len(), Page::MENU.len());
    assert_eq!(router::role_home(Role::Owner), Page::Members);
    assert_eq!(router::role_home(Role::Admin), Page::CheckIn);
}
