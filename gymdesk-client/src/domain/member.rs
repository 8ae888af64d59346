use gymdesk_common::domain::{Member, MembershipStatus};
use time::Date;

/// Expiry as derivable from the renewal date. Display aid only; the
/// `status` field the backend sends remains the authority.
pub fn derived_status(member: &Member, today: Date) -> MembershipStatus {
    if member.renewal_date < today {
        MembershipStatus::Expired
    } else {
        MembershipStatus::Active
    }
}

/// True when the stored status disagrees with the renewal date, meaning
/// the backend has not recomputed statuses since the date passed.
pub fn status_is_stale(member: &Member, today: Date) -> bool {
    member.status != derived_status(member, today)
}

/// Warning shown when checking in a member who is not active. Check-in
/// still goes through; the desk decides what to do with it.
pub fn check_in_warning(member: &Member) -> Option<String> {
    match member.status {
        MembershipStatus::Active => None,
        MembershipStatus::Expired => Some(format!(
            "{} has an expired membership.",
            member.full_name()
        )),
    }
}
