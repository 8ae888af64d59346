use clap::Subcommand;
use eyre::Result;
use gymdesk_client::settings::Settings;

mod login;
mod logout;
mod status;

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Sign in with a backend account
    Login(login::Cmd),
    /// Sign out locally and invalidate the session server-side
    Logout,
    /// Show the identity behind the current session
    Status,
}

impl Cmd {
    pub async fn run(self, settings: &Settings) -> Result<()> {
        match self {
            Self::Login(cmd) => cmd.run(settings).await,
            Self::Logout => logout::run(settings).await,
            Self::Status => status::run(settings).await,
        }
    }
}
