use super::views;
use eyre::Result;
use gymdesk_client::router::{self, NavDecision, Page};
use gymdesk_client::session::{SessionState, SessionStore};
use gymdesk_client::settings::Settings;
use gymdesk_client::AppContext;
use gymdesk_common::domain::User;

pub(crate) async fn open_session(settings: &Settings) -> SessionStore {
    let session = SessionStore::from_settings(settings);
    session.initialize().await;
    session
}

pub(crate) struct PageContext {
    pub ctx: AppContext,
    pub user: User,
}

/// Run the navigation guard for `page`. `None` means the command should
/// stop: the user was sent to login, or a role redirect already rendered
/// the fallback page here.
pub(crate) async fn enter(page: Page, settings: &Settings) -> Result<Option<PageContext>> {
    let session = open_session(settings).await;

    match router::resolve(page, &session).await {
        NavDecision::Allow => match session.state() {
            SessionState::Authenticated { user, token } => Ok(Some(PageContext {
                ctx: AppContext::from_settings(settings, &token)?,
                user,
            })),
            // Only the login page is public and it never goes through here.
            _ => Ok(None),
        },
        NavDecision::ToLogin { from } => {
            println!(
                "You are not signed in. Run 'gymdesk account login', then retry {}.",
                from.path()
            );
            Ok(None)
        }
        NavDecision::To(home) => {
            let state = session.state();
            let SessionState::Authenticated { user, token } = state else {
                return Ok(None);
            };
            println!(
                "{} is not available for the {} role. Showing {} instead.",
                page.title(),
                user.role,
                home.title()
            );
            let ctx = AppContext::from_settings(settings, &token)?;
            match home {
                Page::CheckIn => views::check_in_page(&ctx, None).await,
                _ => views::members_page(&ctx).await,
            }
            Ok(None)
        }
    }
}
