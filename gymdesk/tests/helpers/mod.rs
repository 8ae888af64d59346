use fake::faker::internet::en::FreeEmail;
use fake::faker::name::en::LastName;
use fake::Fake;
use gymdesk_client::session::{Credentials, MemoryCredentialStorage, SessionStore};
use gymdesk_client::AppContext;
use gymdesk_common::domain::{CheckIn, Member, MembershipStatus, Payment, Role, User};
use std::sync::Arc;
use std::time::Duration;
use time::{Date, Month, OffsetDateTime};
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";
pub const TIMEOUT: Duration = Duration::from_secs(2);

pub struct TestApp {
    pub server: MockServer,
    pub storage: Arc<MemoryCredentialStorage>,
    pub session: Arc<SessionStore>,
}

impl TestApp {
    pub fn context(&self) -> AppContext {
        AppContext::new(&self.server.uri(), TOKEN, TIMEOUT).unwrap()
    }
}

/// Console with no persisted session, talking to a fresh mock backend.
pub async fn spawn_app() -> TestApp {
    let server = MockServer::start().await;
    let storage = Arc::new(MemoryCredentialStorage::default());
    let session = Arc::new(SessionStore::new(server.uri(), TIMEOUT, storage.clone()));
    TestApp {
        server,
        storage,
        session,
    }
}

/// Console with `user`'s session already persisted, as after an earlier
/// login. The caller still drives `initialize` and mocks `/auth/me`.
pub async fn spawn_app_with_session(user: &User) -> TestApp {
    let server = MockServer::start().await;
    let storage = Arc::new(MemoryCredentialStorage::with(Credentials {
        token: TOKEN.into(),
        user: user.clone(),
    }));
    let session = Arc::new(SessionStore::new(server.uri(), TIMEOUT, storage.clone()));
    TestApp {
        server,
        storage,
        session,
    }
}

pub fn owner() -> User {
    User {
        id: "u-1".into(),
        username: "olivia".into(),
        role: Role::Owner,
    }
}

pub fn admin() -> User {
    User {
        id: "u-2".into(),
        username: "sam".into(),
        role: Role::Admin,
    }
}

pub fn date(year: i32, month: u8, day: u8) -> Date {
    Date::from_calendar_date(year, Month::try_from(month).unwrap(), day).unwrap()
}

pub fn member(id: &str, first_name: &str, status: MembershipStatus) -> Member {
    Member {
        id: id.into(),
        first_name: first_name.into(),
        last_name: LastName().fake(),
        dni: format!("dni-{id}"),
        email: Some(FreeEmail().fake()),
        phone: None,
        start_date: date(2026, 1, 10),
        renewal_date: match status {
            MembershipStatus::Active => date(2027, 1, 10),
            MembershipStatus::Expired => date(2026, 2, 10),
        },
        status,
        membership_plan_id: None,
        created_at: OffsetDateTime::UNIX_EPOCH,
        updated_at: OffsetDateTime::UNIX_EPOCH,
    }
}

pub fn check_in(id: &str, member_id: &str) -> CheckIn {
    CheckIn {
        id: id.into(),
        member_id: member_id.into(),
        date_time: OffsetDateTime::UNIX_EPOCH,
    }
}

pub fn payment(id: &str, member_id: &str, amount: i64) -> Payment {
    Payment {
        id: id.into(),
        member_id: member_id.into(),
        membership_plan_id: None,
        amount,
        date: OffsetDateTime::UNIX_EPOCH,
        status: "completed".into(),
        notes: None,
    }
}
