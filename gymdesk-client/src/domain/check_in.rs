use gymdesk_common::domain::{CheckIn, Member};
use std::collections::HashMap;

/// Attendance row with the member resolved for display.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckInRow {
    pub check_in: CheckIn,
    pub member_name: String,
}

pub fn with_member_names(check_ins: Vec<CheckIn>, members: &[Member]) -> Vec<CheckInRow> {
    let names: HashMap<&str, String> = members
        .iter()
        .map(|member| (member.id.as_str(), member.full_name()))
        .collect();

    check_ins
        .into_iter()
        .map(|check_in| {
            let member_name = names
                .get(check_in.member_id.as_str())
                .cloned()
                .unwrap_or_else(|| "Unknown Member".to_string());
            CheckInRow {
                check_in,
                member_name,
            }
        })
        .collect()
}
