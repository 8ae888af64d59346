use crate::command::{context, views};
use clap::Subcommand;
use eyre::Result;
use gymdesk_client::queries;
use gymdesk_client::router::Page;
use gymdesk_client::settings::Settings;
use gymdesk_common::api::{CreatePlanRequest, UpdatePlanRequest};

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// List the membership plans
    List,
    /// Create a plan
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        duration_months: u32,
        /// Price in cents
        #[arg(long)]
        price: i64,
    },
    /// Update a plan
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        duration_months: Option<u32>,
        /// Price in cents
        #[arg(long)]
        price: Option<i64>,
    },
    /// Delete a plan
    Delete { id: String },
}

impl Cmd {
    pub async fn run(self, settings: &Settings) -> Result<()> {
        // All plan management is owner-only, which the page gate enforces.
        let Some(page) = context::enter(Page::MembershipPlans, settings).await? else {
            return Ok(());
        };

        match self {
            Self::List => match queries::plans::list(&page.ctx).await {
                Ok(plans) => views::plans_table(&plans),
                Err(err) => {
                    println!("Could not load plans: {err}. Retry with 'gymdesk plans list'.")
                }
            },
            Self::Create {
                name,
                duration_months,
                price,
            } => {
                let plan = CreatePlanRequest {
                    name,
                    duration_months,
                    price,
                };
                let _ = queries::plans::create(&page.ctx, &plan).await;
            }
            Self::Update {
                id,
                name,
                duration_months,
                price,
            } => {
                let plan = UpdatePlanRequest {
                    name,
                    duration_months,
                    price,
                };
                let _ = queries::plans::update(&page.ctx, &id, &plan).await;
            }
            Self::Delete { id } => {
                let _ = queries::plans::delete(&page.ctx, &id).await;
            }
        }

        views::print_notifications(&page.ctx);
        Ok(())
    }
}
