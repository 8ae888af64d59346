use crate::command::members::parse_date;
use crate::command::{context, views};
use clap::Parser;
use eyre::Result;
use gymdesk_client::queries;
use gymdesk_client::router::Page;
use gymdesk_client::settings::Settings;
use gymdesk_common::api::CreateMemberRequest;
use time::{Date, OffsetDateTime};

#[derive(Parser, Debug)]
pub struct Cmd {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    dni: String,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    /// Membership start, defaults to today
    #[arg(long, value_parser = parse_date)]
    start_date: Option<Date>,
    /// Date the membership runs to
    #[arg(long, value_parser = parse_date)]
    renewal_date: Date,
    #[arg(long)]
    plan_id: Option<String>,
}

impl Cmd {
    pub async fn run(self, settings: &Settings) -> Result<()> {
        let Some(page) = context::enter(Page::Register, settings).await? else {
            return Ok(());
        };

        let member = CreateMemberRequest {
            first_name: self.first_name,
            last_name: self.last_name,
            dni: self.dni,
            email: self.email,
            phone: self.phone,
            start_date: self
                .start_date
                .unwrap_or_else(|| OffsetDateTime::now_utc().date()),
            renewal_date: self.renewal_date,
            membership_plan_id: self.plan_id,
        };

        let _ = queries::members::register(&page.ctx, &member).await;
        views::print_notifications(&page.ctx);
        Ok(())
    }
}
