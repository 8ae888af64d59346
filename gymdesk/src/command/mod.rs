use clap::Subcommand;
use eyre::Result;
use gymdesk_client::settings::Settings;

mod account;
mod check_in;
mod context;
mod dashboard;
mod info;
mod members;
mod payment;
mod plans;
mod views;

#[derive(Subcommand)]
pub enum GymdeskCmd {
    /// Sign in and out of the console
    #[command(subcommand)]
    Account(account::Cmd),

    /// Register, list and manage members
    #[command(subcommand)]
    Members(members::Cmd),

    /// Manage membership plans
    #[command(subcommand)]
    Plans(plans::Cmd),

    /// Record and review attendance
    #[command(subcommand)]
    CheckIn(check_in::Cmd),

    /// Process payments and review the history
    #[command(subcommand)]
    Payment(payment::Cmd),

    /// Owner overview of members, plans and payments
    Dashboard,

    /// Show who is signed in and which pages are available
    Info,
}

impl GymdeskCmd {
    #[tokio::main]
    pub async fn run(self) -> Result<()> {
        let settings = Settings::new()?;

        match self {
            Self::Account(cmd) => cmd.run(&settings).await,
            Self::Members(cmd) => cmd.run(&settings).await,
            Self::Plans(cmd) => cmd.run(&settings).await,
            Self::CheckIn(cmd) => cmd.run(&settings).await,
            Self::Payment(cmd) => cmd.run(&settings).await,
            Self::Dashboard => dashboard::run(&settings).await,
            Self::Info => info::run(&settings).await,
        }
    }
}
