use gymdesk_client::domain::check_in::CheckInRow;
use gymdesk_client::domain::member::status_is_stale;
use gymdesk_client::domain::payment::PaymentRow;
use gymdesk_client::{queries, AppContext};
use gymdesk_common::domain::{Member, MembershipPlan};
use time::OffsetDateTime;

pub(crate) fn print_notifications(ctx: &AppContext) {
    for notification in ctx.notifier.drain() {
        println!("[{}] {}", notification.level.as_str(), notification.message);
    }
}

fn cents(amount: i64) -> String {
    format!("{}.{:02}", amount / 100, (amount % 100).abs())
}

pub(crate) fn members_table(members: &[Member]) {
    println!(
        "{:<24} {:<12} {:<8} {:<12} {:<12}",
        "Name", "DNI", "Status", "Renewal", "Plan"
    );
    for member in members {
        println!(
            "{:<24} {:<12} {:<8} {:<12} {:<12}",
            member.full_name(),
            member.dni,
            member.status.as_str(),
            member.renewal_date.to_string(),
            member.membership_plan_id.as_deref().unwrap_or("-")
        );
    }
    println!("{} member(s)", members.len());

    let today = OffsetDateTime::now_utc().date();
    let stale = members.iter().filter(|m| status_is_stale(m, today)).count();
    if stale > 0 {
        println!(
            "{stale} member(s) out of step with their renewal date. \
             Run 'gymdesk members recompute-statuses'."
        );
    }
}

pub(crate) fn plans_table(plans: &[MembershipPlan]) {
    println!("{:<8} {:<20} {:<10} {:<10}", "Id", "Name", "Months", "Price");
    for plan in plans {
        println!(
            "{:<8} {:<20} {:<10} {:<10}",
            plan.id,
            plan.name,
            plan.duration_months,
            cents(plan.price)
        );
    }
    println!("{} plan(s)", plans.len());
}

pub(crate) fn check_ins_table(rows: &[CheckInRow]) {
    println!("{:<24} {:<28}", "Member", "When");
    for row in rows {
        println!(
            "{:<24} {:<28}",
            row.member_name,
            row.check_in.date_time.to_string()
        );
    }
    println!("{} check-in(s)", rows.len());
}

pub(crate) fn payments_table(rows: &[PaymentRow]) {
    println!(
        "{:<24} {:<10} {:<12} {:<28}",
        "Member", "Amount", "Status", "Date"
    );
    for row in rows {
        println!(
            "{:<24} {:<10} {:<12} {:<28}",
            row.member_name,
            cents(row.payment.amount),
            row.payment.status,
            row.payment.date.to_string()
        );
    }
    println!("{} payment(s)", rows.len());
}

/// Default view of the member list page; also what a role redirect lands
/// on for owners.
pub(crate) async fn members_page(ctx: &AppContext) {
    match queries::members::list(ctx).await {
        Ok(members) => members_table(&members),
        Err(err) => println!("Could not load members: {err}. Retry with 'gymdesk members list'."),
    }
}

/// Default view of the check-in page; the admin role redirect lands here.
pub(crate) async fn check_in_page(ctx: &AppContext, member_id: Option<&str>) {
    match queries::check_ins::rows(ctx, member_id).await {
        Ok(rows) => check_ins_table(&rows),
        Err(err) => println!("Could not load check-ins: {err}. Retry with 'gymdesk check-in list'."),
    }
}
