use crate::command::context;
use clap::Parser;
use eyre::Result;
use gymdesk_client::router::role_home;
use gymdesk_client::session::SessionState;
use gymdesk_client::settings::Settings;
use gymdesk_client::utils::{read_input, read_input_hidden};

#[derive(Parser, Debug)]
pub struct Cmd {
    #[arg(long, short)]
    username: Option<String>,
    #[arg(long, short)]
    password: Option<String>,
}

impl Cmd {
    pub async fn run(self, settings: &Settings) -> Result<()> {
        let session = context::open_session(settings).await;

        if session.state().is_authenticated() {
            println!("You are already signed in.");
            return Ok(());
        }

        let username = self.username.unwrap_or_else(|| read_input("username"));
        let password = self
            .password
            .unwrap_or_else(|| read_input_hidden("password"));

        match session.login(&username, &password).await {
            Ok(Some(user)) => {
                println!("Signed in as {} ({}).", user.username, user.role);
                println!(
                    "Landing page: {} ({}).",
                    role_home(user.role).title(),
                    role_home(user.role).path()
                );
            }
            Ok(None) => println!("Another sign-in is already running."),
            Err(_) => {
                if let SessionState::Error { message } = session.state() {
                    println!("Sign-in failed: {message}");
                    session.clear_error();
                }
            }
        }

        Ok(())
    }
}
