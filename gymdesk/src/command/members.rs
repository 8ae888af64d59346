use crate::command::{context, views};
use clap::Subcommand;
use eyre::Result;
use gymdesk_client::queries;
use gymdesk_client::router::Page;
use gymdesk_client::settings::Settings;
use gymdesk_common::domain::Role;
use time::format_description::well_known::Iso8601;
use time::Date;

mod list;
mod register;
mod renew;
mod update;

pub(crate) fn parse_date(value: &str) -> Result<Date, String> {
    Date::parse(value, &Iso8601::DEFAULT)
        .map_err(|_| format!("'{value}' is not a date (expected YYYY-MM-DD)"))
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// List members, optionally only a status subset
    List(list::Cmd),
    /// Register a new member
    Register(register::Cmd),
    /// Update a member's details
    Update(update::Cmd),
    /// Delete a member
    Delete {
        id: String,
    },
    /// Look a member up by national ID
    Find {
        dni: String,
    },
    /// Renew a membership by national ID
    Renew(renew::Cmd),
    /// Ask the backend to recompute statuses from renewal dates
    RecomputeStatuses,
}

impl Cmd {
    pub async fn run(self, settings: &Settings) -> Result<()> {
        match self {
            Self::List(cmd) => cmd.run(settings).await,
            Self::Register(cmd) => cmd.run(settings).await,
            Self::Update(cmd) => cmd.run(settings).await,
            Self::Delete { id } => delete(settings, &id).await,
            Self::Find { dni } => find(settings, &dni).await,
            Self::Renew(cmd) => cmd.run(settings).await,
            Self::RecomputeStatuses => recompute(settings).await,
        }
    }
}

async fn delete(settings: &Settings, id: &str) -> Result<()> {
    let Some(page) = context::enter(Page::Members, settings).await? else {
        return Ok(());
    };
    if page.user.role != Role::Owner {
        println!("Only the owner can delete members.");
        return Ok(());
    }

    let _ = queries::members::delete(&page.ctx, id).await;
    views::print_notifications(&page.ctx);
    Ok(())
}

async fn find(settings: &Settings, dni: &str) -> Result<()> {
    let Some(page) = context::enter(Page::Members, settings).await? else {
        return Ok(());
    };

    match queries::members::find_by_dni(&page.ctx, dni).await {
        Ok(member) => match member.as_ref() {
            Some(member) => views::members_table(std::slice::from_ref(member)),
            None => println!("No member with DNI {dni}."),
        },
        Err(err) => println!("Could not look the member up: {err}. Retry with 'gymdesk members find'."),
    }
    Ok(())
}

async fn recompute(settings: &Settings) -> Result<()> {
    let Some(page) = context::enter(Page::Members, settings).await? else {
        return Ok(());
    };
    if page.user.role != Role::Owner {
        println!("Only the owner can recompute member statuses.");
        return Ok(());
    }

    let _ = queries::members::recompute_statuses(&page.ctx).await;
    views::print_notifications(&page.ctx);
    Ok(())
}
