use crate::command::context;
use eyre::Result;
use gymdesk_client::session::SessionState;
use gymdesk_client::settings::Settings;

pub async fn run(settings: &Settings) -> Result<()> {
    let session = context::open_session(settings).await;

    match session.state() {
        SessionState::Authenticated { user, .. } => {
            println!("Signed in as {} ({}).", user.username, user.role);
        }
        _ => println!("You are not signed in."),
    }

    Ok(())
}
