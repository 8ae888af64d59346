use crate::session::{SessionState, SessionStore};
use gymdesk_common::domain::Role;

const BOTH: &[Role] = &[Role::Owner, Role::Admin];
const OWNER_ONLY: &[Role] = &[Role::Owner];

/// One console page per client-side route of the old web console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Dashboard,
    Members,
    Register,
    CheckIn,
    MembershipPlans,
    Payment,
    PaymentHistory,
}

impl Page {
    /// Menu order as the front desk sees it.
    pub const MENU: [Page; 7] = [
        Page::Register,
        Page::Members,
        Page::Payment,
        Page::PaymentHistory,
        Page::MembershipPlans,
        Page::CheckIn,
        Page::Dashboard,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Login => "/login",
            Page::Dashboard => "/dashboard",
            Page::Members => "/members",
            Page::Register => "/register",
            Page::CheckIn => "/check-in",
            Page::MembershipPlans => "/membership-plans",
            Page::Payment => "/payment",
            Page::PaymentHistory => "/payment-history",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Login => "Login",
            Page::Dashboard => "Dashboard",
            Page::Members => "Member List",
            Page::Register => "Register Member",
            Page::CheckIn => "Member Check-in",
            Page::MembershipPlans => "Membership Plans",
            Page::Payment => "Process Payment",
            Page::PaymentHistory => "Payment History",
        }
    }

    pub fn requires_auth(&self) -> bool {
        *self != Page::Login
    }

    /// Admins run the front desk: members and check-ins. Money and plan
    /// management stay with the owner.
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Page::Login => BOTH,
            Page::Members | Page::Register | Page::CheckIn => BOTH,
            Page::Dashboard | Page::MembershipPlans | Page::Payment | Page::PaymentHistory => {
                OWNER_ONLY
            }
        }
    }

    pub fn allows(&self, role: Role) -> bool {
        self.allowed_roles().contains(&role)
    }
}

/// Where a signed-in user lands when no page was asked for, or when the
/// asked-for page is not theirs to see.
pub fn role_home(role: Role) -> Page {
    match role {
        Role::Owner => Page::Members,
        Role::Admin => Page::CheckIn,
    }
}

pub fn menu(role: Role) -> Vec<Page> {
    Page::MENU
        .into_iter()
        .filter(|page| page.allows(role))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavDecision {
    Allow,
    /// Send to login, remembering the page that was asked for.
    ToLogin {
        from: Page,
    },
    /// Role mismatch; show this page instead. Never an error page.
    To(Page),
}

/// Gate a page before anything on it runs. Waits for the session to
/// settle first and reads its state at decision time, so a decision is
/// never made on a stale or indeterminate session.
pub async fn resolve(page: Page, session: &SessionStore) -> NavDecision {
    match session.settled().await {
        SessionState::Authenticated { user, .. } => {
            if page != Page::Login && page.allows(user.role) {
                NavDecision::Allow
            } else {
                NavDecision::To(role_home(user.role))
            }
        }
        _ => {
            if page.requires_auth() {
                NavDecision::ToLogin { from: page }
            } else {
                NavDecision::Allow
            }
        }
    }
}
