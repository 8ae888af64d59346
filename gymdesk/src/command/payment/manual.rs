use crate::command::{context, views};
use clap::Parser;
use eyre::Result;
use gymdesk_client::queries;
use gymdesk_client::router::Page;
use gymdesk_client::settings::Settings;
use gymdesk_common::api::CreatePaymentRequest;

#[derive(Parser, Debug)]
pub struct Cmd {
    #[arg(long)]
    member_id: String,
    /// Amount in cents
    #[arg(long)]
    amount: i64,
    #[arg(long)]
    plan_id: Option<String>,
    #[arg(long)]
    notes: Option<String>,
}

impl Cmd {
    pub async fn run(self, settings: &Settings) -> Result<()> {
        let Some(page) = context::enter(Page::Payment, settings).await? else {
            return Ok(());
        };

        let payment = CreatePaymentRequest {
            member_id: self.member_id,
            membership_plan_id: self.plan_id,
            amount: self.amount,
            notes: self.notes,
        };

        let _ = queries::payments::record_manual(&page.ctx, &payment).await;
        views::print_notifications(&page.ctx);
        Ok(())
    }
}
