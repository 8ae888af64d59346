use crate::api_client::{ApiError, AuthClient};
use crate::cache::QueryCache;
use crate::notification::Notifications;
use crate::settings::Settings;
use std::time::Duration;

pub mod api_client;
pub mod cache;
pub mod domain;
pub mod notification;
pub mod queries;
pub mod router;
pub mod session;
pub mod settings;
pub mod utils;

/// Everything a signed-in page needs: the authorized api client, the
/// query cache and the notification queue. Built once per run, after the
/// session store has a token.
pub struct AppContext {
    pub api: AuthClient,
    pub cache: QueryCache,
    pub notifier: Notifications,
}

impl AppContext {
    pub fn new(address: &str, token: &str, timeout: Duration) -> Result<Self, ApiError> {
        Ok(Self {
            api: AuthClient::new(address, token, timeout)?,
            cache: QueryCache::new(),
            notifier: Notifications::default(),
        })
    }

    pub fn from_settings(settings: &Settings, token: &str) -> Result<Self, ApiError> {
        Self::new(&settings.server_address, token, settings.request_timeout())
    }
}
