use crate::command::{context, views};
use clap::Subcommand;
use eyre::Result;
use gymdesk_client::queries;
use gymdesk_client::router::Page;
use gymdesk_client::settings::Settings;

mod charge;
mod manual;

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Charge a member through the payment processor
    Charge(charge::Cmd),
    /// Record a payment taken at the desk
    Manual(manual::Cmd),
    /// Show the payment history
    History,
}

impl Cmd {
    pub async fn run(self, settings: &Settings) -> Result<()> {
        match self {
            Self::Charge(cmd) => cmd.run(settings).await,
            Self::Manual(cmd) => cmd.run(settings).await,
            Self::History => history(settings).await,
        }
    }
}

async fn history(settings: &Settings) -> Result<()> {
    let Some(page) = context::enter(Page::PaymentHistory, settings).await? else {
        return Ok(());
    };

    match queries::payments::history_with_members(&page.ctx).await {
        Ok(rows) => views::payments_table(&rows),
        Err(err) => println!("Could not load payments: {err}. Retry with 'gymdesk payment history'."),
    }
    Ok(())
}
