use crate::command::members::parse_date;
use crate::command::{context, views};
use clap::Parser;
use eyre::Result;
use gymdesk_client::queries;
use gymdesk_client::router::Page;
use gymdesk_client::settings::Settings;
use gymdesk_common::api::UpdateMemberRequest;
use gymdesk_common::domain::Role;
use time::Date;

#[derive(Parser, Debug)]
pub struct Cmd {
    id: String,
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long, value_parser = parse_date)]
    renewal_date: Option<Date>,
    #[arg(long)]
    plan_id: Option<String>,
}

impl Cmd {
    pub async fn run(self, settings: &Settings) -> Result<()> {
        let Some(page) = context::enter(Page::Members, settings).await? else {
            return Ok(());
        };
        if page.user.role != Role::Owner {
            println!("Only the owner can update members.");
            return Ok(());
        }

        let update = UpdateMemberRequest {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            renewal_date: self.renewal_date,
            status: None,
            membership_plan_id: self.plan_id,
        };

        let _ = queries::members::update(&page.ctx, &self.id, &update).await;
        views::print_notifications(&page.ctx);
        Ok(())
    }
}
