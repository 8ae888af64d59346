use crate::command::{context, views};
use clap::Parser;
use eyre::Result;
use gymdesk_client::queries;
use gymdesk_client::router::Page;
use gymdesk_client::settings::Settings;

#[derive(Parser, Debug)]
pub struct Cmd {
    /// Only members with an active membership
    #[arg(long, conflicts_with = "expired")]
    active: bool,
    /// Only members whose membership lapsed
    #[arg(long)]
    expired: bool,
}

impl Cmd {
    pub async fn run(self, settings: &Settings) -> Result<()> {
        let Some(page) = context::enter(Page::Members, settings).await? else {
            return Ok(());
        };

        let members = if self.active {
            queries::members::active(&page.ctx).await
        } else if self.expired {
            queries::members::expired(&page.ctx).await
        } else {
            queries::members::list(&page.ctx).await
        };

        match members {
            Ok(members) => views::members_table(&members),
            Err(err) => {
                println!("Could not load members: {err}. Retry with 'gymdesk members list'.")
            }
        }
        Ok(())
    }
}
