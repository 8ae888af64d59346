use crate::api_client::{self, ApiError, AuthClient};
use crate::settings::Settings;
use eyre::Result;
use gymdesk_common::domain::User;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, error};

#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub token: String,
    pub user: User,
}

/// Where the session survives between runs. The store never touches the
/// filesystem directly so tests can swap in [`MemoryCredentialStorage`].
pub trait CredentialStorage: Send + Sync {
    fn load(&self) -> Result<Option<Credentials>>;
    fn store(&self, credentials: &Credentials) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Token and signed-in user as two files in the data dir. Last writer
/// wins across concurrent runs; every process re-reads at startup.
pub struct FileCredentialStorage {
    session_path: PathBuf,
    user_path: PathBuf,
}

impl FileCredentialStorage {
    pub fn new(session_path: impl Into<PathBuf>, user_path: impl Into<PathBuf>) -> Self {
        Self {
            session_path: session_path.into(),
            user_path: user_path.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.session_path, &settings.user_path)
    }
}

impl CredentialStorage for FileCredentialStorage {
    fn load(&self) -> Result<Option<Credentials>> {
        if !self.session_path.exists() || !self.user_path.exists() {
            return Ok(None);
        }
        let token = fs_err::read_to_string(&self.session_path)?.trim().to_string();
        if token.is_empty() {
            return Ok(None);
        }
        let user = serde_json::from_str(&fs_err::read_to_string(&self.user_path)?)?;
        Ok(Some(Credentials { token, user }))
    }

    fn store(&self, credentials: &Credentials) -> Result<()> {
        if let Some(dir) = self.session_path.parent() {
            fs_err::create_dir_all(dir)?;
        }
        fs_err::write(&self.session_path, credentials.token.as_bytes())?;
        fs_err::write(&self.user_path, serde_json::to_string(&credentials.user)?)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        for path in [&self.session_path, &self.user_path] {
            if path.exists() {
                fs_err::remove_file(path)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryCredentialStorage {
    inner: Mutex<Option<Credentials>>,
}

impl MemoryCredentialStorage {
    pub fn with(credentials: Credentials) -> Self {
        Self {
            inner: Mutex::new(Some(credentials)),
        }
    }
}

impl CredentialStorage for MemoryCredentialStorage {
    fn load(&self) -> Result<Option<Credentials>> {
        Ok(self.inner.lock().unwrap().clone())
    }

    fn store(&self, credentials: &Credentials) -> Result<()> {
        *self.inner.lock().unwrap() = Some(credentials.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.inner.lock().unwrap() = None;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Uninitialized,
    Loading,
    Authenticated { user: User, token: String },
    Unauthenticated,
    Error { message: String },
}

impl SessionState {
    /// Settled means a navigation decision can be made on it.
    pub fn is_settled(&self) -> bool {
        !matches!(self, SessionState::Uninitialized | SessionState::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            SessionState::Authenticated { token, .. } => Some(token.as_str()),
            _ => None,
        }
    }
}

/// Single source of truth for who is signed in. State changes go out over
/// a watch channel so guards can block on [`SessionStore::settled`]
/// instead of polling.
pub struct SessionStore {
    address: String,
    timeout: Duration,
    storage: Arc<dyn CredentialStorage>,
    state: watch::Sender<SessionState>,
}

impl SessionStore {
    pub fn new(
        address: impl Into<String>,
        timeout: Duration,
        storage: Arc<dyn CredentialStorage>,
    ) -> Self {
        let (state, _) = watch::channel(SessionState::Uninitialized);
        Self {
            address: address.into(),
            timeout,
            storage,
            state,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            &settings.server_address,
            settings.request_timeout(),
            Arc::new(FileCredentialStorage::from_settings(settings)),
        )
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Wait until the session is neither uninitialized nor mid-operation.
    pub async fn settled(&self) -> SessionState {
        let mut rx = self.state.subscribe();
        let state = rx
            .wait_for(SessionState::is_settled)
            .await
            .expect("session state channel closed");
        state.clone()
    }

    /// Revive a persisted session, re-validating the token against the
    /// backend. Runs once per process, before any navigation decision.
    pub async fn initialize(&self) {
        if *self.state.borrow() != SessionState::Uninitialized {
            debug!("session already initialized, skipping");
            return;
        }
        self.state.send_replace(SessionState::Loading);

        let credentials = match self.storage.load() {
            Ok(credentials) => credentials,
            Err(err) => {
                error!("failed to read stored session: {err}");
                None
            }
        };
        let Some(credentials) = credentials else {
            self.state.send_replace(SessionState::Unauthenticated);
            return;
        };

        match self.validate(&credentials).await {
            Ok(user) => {
                // Keep the stored user in step with what the backend says now.
                let refreshed = Credentials {
                    token: credentials.token.clone(),
                    user: user.clone(),
                };
                if let Err(err) = self.storage.store(&refreshed) {
                    error!("failed to refresh stored user: {err}");
                }
                self.state.send_replace(SessionState::Authenticated {
                    user,
                    token: credentials.token,
                });
            }
            Err(err) => {
                debug!("stored session failed validation: {err}");
                self.clear_storage();
                self.state.send_replace(SessionState::Unauthenticated);
            }
        }
    }

    async fn validate(&self, credentials: &Credentials) -> Result<User, ApiError> {
        AuthClient::new(&self.address, &credentials.token, self.timeout)?
            .me()
            .await
    }

    /// Returns `Ok(None)` when another auth operation is in flight; the
    /// attempt is dropped, not queued.
    pub async fn login(&self, username: &str, password: &str) -> Result<Option<User>, ApiError> {
        if *self.state.borrow() == SessionState::Loading {
            debug!("login requested while another auth call is in flight, ignoring");
            return Ok(None);
        }
        self.state.send_replace(SessionState::Loading);

        match api_client::login(&self.address, self.timeout, username, password).await {
            Ok(res) => {
                let credentials = Credentials {
                    token: res.token.clone(),
                    user: res.user.clone(),
                };
                if let Err(err) = self.storage.store(&credentials) {
                    error!("failed to persist session: {err}");
                }
                self.state.send_replace(SessionState::Authenticated {
                    user: res.user.clone(),
                    token: res.token,
                });
                Ok(Some(res.user))
            }
            Err(err) => {
                self.clear_storage();
                self.state.send_replace(SessionState::Error {
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Server-side invalidation is best effort; local state and storage
    /// are always cleared so the user is never stuck signed in.
    pub async fn logout(&self) {
        if let SessionState::Authenticated { token, .. } = self.state() {
            match AuthClient::new(&self.address, &token, self.timeout) {
                Ok(client) => match client.logout().await {
                    Ok(res) if !res.ok => debug!("server did not acknowledge the logout"),
                    Ok(_) => {}
                    Err(err) => error!("server-side logout failed: {err}"),
                },
                Err(err) => error!("server-side logout failed: {err}"),
            }
        }
        self.clear_storage();
        self.state.send_replace(SessionState::Unauthenticated);
    }

    pub fn clear_error(&self) {
        self.state.send_if_modified(|state| {
            if matches!(state, SessionState::Error { .. }) {
                *state = SessionState::Unauthenticated;
                true
            } else {
                false
            }
        });
    }

    fn clear_storage(&self) {
        if let Err(err) = self.storage.clear() {
            error!("failed to clear stored session: {err}");
        }
    }
}
