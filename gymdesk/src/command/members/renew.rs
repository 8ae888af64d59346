use crate::command::members::parse_date;
use crate::command::{context, views};
use clap::Parser;
use eyre::Result;
use gymdesk_client::queries;
use gymdesk_client::router::Page;
use gymdesk_client::settings::Settings;
use gymdesk_common::api::RenewMembershipRequest;
use gymdesk_common::domain::Role;
use time::Date;

#[derive(Parser, Debug)]
pub struct Cmd {
    /// National ID on the membership being renewed
    dni: String,
    /// New renewal date; the backend derives one from the plan if omitted
    #[arg(long, value_parser = parse_date)]
    renewal_date: Option<Date>,
    /// Switch the membership to this plan
    #[arg(long)]
    plan_id: Option<String>,
}

impl Cmd {
    pub async fn run(self, settings: &Settings) -> Result<()> {
        let Some(page) = context::enter(Page::Members, settings).await? else {
            return Ok(());
        };
        if page.user.role != Role::Owner {
            println!("Only the owner can renew memberships.");
            return Ok(());
        }

        let renew = RenewMembershipRequest {
            renewal_date: self.renewal_date,
            membership_plan_id: self.plan_id,
        };

        let _ = queries::members::renew(&page.ctx, &self.dni, &renew).await;
        views::print_notifications(&page.ctx);
        Ok(())
    }
}
