use crate::command::{context, views};
use clap::Subcommand;
use eyre::Result;
use gymdesk_client::queries;
use gymdesk_client::router::Page;
use gymdesk_client::settings::Settings;

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Show the attendance log
    List {
        /// Only check-ins of this member
        #[arg(long)]
        member_id: Option<String>,
    },
    /// Record a check-in for a member, by id or by national ID
    Add {
        member_id: Option<String>,
        #[arg(long, conflicts_with = "member_id")]
        dni: Option<String>,
    },
}

impl Cmd {
    pub async fn run(self, settings: &Settings) -> Result<()> {
        let Some(page) = context::enter(Page::CheckIn, settings).await? else {
            return Ok(());
        };

        match self {
            Self::List { member_id } => {
                views::check_in_page(&page.ctx, member_id.as_deref()).await;
            }
            Self::Add { member_id, dni } => {
                let member_id = match (member_id, dni) {
                    (Some(id), _) => Some(id),
                    (None, Some(dni)) => {
                        match queries::members::find_by_dni(&page.ctx, &dni).await {
                            Ok(member) => {
                                let id = member.as_ref().as_ref().map(|m| m.id.clone());
                                if id.is_none() {
                                    println!("No member with DNI {dni}.");
                                }
                                id
                            }
                            Err(err) => {
                                println!("Could not look the member up: {err}.");
                                None
                            }
                        }
                    }
                    (None, None) => {
                        println!("Pass a member id or --dni.");
                        None
                    }
                };

                if let Some(member_id) = member_id {
                    let _ = queries::check_ins::record(&page.ctx, &member_id).await;
                }
            }
        }

        views::print_notifications(&page.ctx);
        Ok(())
    }
}
