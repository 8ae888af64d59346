use crate::command::context;
use eyre::Result;
use gymdesk_client::settings::Settings;

pub async fn run(settings: &Settings) -> Result<()> {
    let session = context::open_session(settings).await;

    if !session.state().is_authenticated() {
        println!("You are not signed in.");
        return Ok(());
    }

    session.logout().await;
    println!("You are signed out.");
    Ok(())
}
