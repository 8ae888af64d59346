use gymdesk_common::domain::{Member, Payment};
use std::collections::HashMap;

pub const UNKNOWN_MEMBER: &str = "Unknown Member";

/// Payment history row with the member name resolved client-side. The
/// backend stores only the member id on a payment.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRow {
    pub payment: Payment,
    pub member_name: String,
}

/// Join payments against the member list. Payments for members that were
/// deleted since keep their row under a placeholder name.
pub fn with_member_names(payments: Vec<Payment>, members: &[Member]) -> Vec<PaymentRow> {
    let names: HashMap<&str, String> = members
        .iter()
        .map(|member| (member.id.as_str(), member.full_name()))
        .collect();

    payments
        .into_iter()
        .map(|payment| {
            let member_name = names
                .get(payment.member_id.as_str())
                .cloned()
                .unwrap_or_else(|| UNKNOWN_MEMBER.to_string());
            PaymentRow {
                payment,
                member_name,
            }
        })
        .collect()
}
