use crate::command::context;
use eyre::Result;
use gymdesk_client::router;
use gymdesk_client::session::SessionState;
use gymdesk_client::settings::Settings;

pub async fn run(settings: &Settings) -> Result<()> {
    println!("gymdesk {}", crate::VERSION);
    println!("Server: {}", settings.server_address);

    let session = context::open_session(settings).await;
    match session.state() {
        SessionState::Authenticated { user, .. } => {
            println!("Signed in as {} ({}).", user.username, user.role);
            println!("Pages:");
            for page in router::menu(user.role) {
                println!("  {:<20} {}", page.title(), page.path());
            }
        }
        _ => println!("Not signed in. Run 'gymdesk account login'."),
    }

    Ok(())
}
