use crate::command::context;
use eyre::Result;
use gymdesk_client::queries;
use gymdesk_client::router::Page;
use gymdesk_client::settings::Settings;
use gymdesk_common::domain::MembershipStatus;

pub async fn run(settings: &Settings) -> Result<()> {
    let Some(page) = context::enter(Page::Dashboard, settings).await? else {
        return Ok(());
    };

    let (members, plans, payments) = tokio::join!(
        queries::members::list(&page.ctx),
        queries::plans::list(&page.ctx),
        queries::payments::history(&page.ctx),
    );

    match members {
        Ok(members) => {
            let active = members
                .iter()
                .filter(|m| m.status == MembershipStatus::Active)
                .count();
            println!(
                "Members: {} ({} active, {} expired)",
                members.len(),
                active,
                members.len() - active
            );
        }
        Err(err) => println!("Could not load members: {err}."),
    }

    match plans {
        Ok(plans) => println!("Plans: {}", plans.len()),
        Err(err) => println!("Could not load plans: {err}."),
    }

    match payments {
        Ok(payments) => {
            let total: i64 = payments.iter().map(|p| p.amount).sum();
            println!(
                "Payments: {} (total {}.{:02})",
                payments.len(),
                total / 100,
                (total % 100).abs()
            );
        }
        Err(err) => println!("Could not load payments: {err}."),
    }

    Ok(())
}
