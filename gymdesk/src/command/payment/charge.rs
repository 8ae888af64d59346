use crate::command::{context, views};
use clap::Parser;
use eyre::Result;
use gymdesk_client::queries;
use gymdesk_client::router::Page;
use gymdesk_client::settings::Settings;
use gymdesk_common::api::InitiatePaymentRequest;

#[derive(Parser, Debug)]
pub struct Cmd {
    #[arg(long)]
    member_id: String,
    #[arg(long)]
    plan_id: String,
    /// Amount in cents
    #[arg(long)]
    amount: i64,
}

impl Cmd {
    pub async fn run(self, settings: &Settings) -> Result<()> {
        let Some(page) = context::enter(Page::Payment, settings).await? else {
            return Ok(());
        };

        if settings.payment_publishable_key.is_empty() {
            println!(
                "No payment processor key configured. Record the payment with \
                 'gymdesk payment manual', or set payment_publishable_key."
            );
            return Ok(());
        }

        let request = InitiatePaymentRequest {
            amount: self.amount,
            member_id: self.member_id,
            plan_id: self.plan_id,
        };

        if let Ok(intent) = queries::payments::charge(&page.ctx, &request).await {
            println!("Payment intent {} confirmed.", intent.payment_intent_id);
        }
        views::print_notifications(&page.ctx);
        Ok(())
    }
}
