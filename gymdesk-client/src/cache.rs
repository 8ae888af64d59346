use crate::api_client::ApiError;
use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Cache key per query the console can issue. The member subsets are
/// separate keys on purpose: the backend computes them, so a member
/// mutation has to drop all of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Members,
    ActiveMembers,
    ExpiredMembers,
    MemberByDni(String),
    MembershipPlans,
    CheckIns,
    MemberCheckIns(String),
    Payments,
}

impl QueryKey {
    fn is_member_query(&self) -> bool {
        matches!(
            self,
            QueryKey::Members
                | QueryKey::ActiveMembers
                | QueryKey::ExpiredMembers
                | QueryKey::MemberByDni(_)
        )
    }
}

type Entry = Arc<dyn Any + Send + Sync>;

/// Ephemeral per-run cache over the backend. Entries are discarded on
/// invalidation and re-fetched on the next read, never patched locally.
/// Concurrent fetches of the same key may race; the last response wins.
#[derive(Default)]
pub struct QueryCache {
    entries: Mutex<HashMap<QueryKey, Entry>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached value for `key`, or run `fetch` and keep the result. A read
    /// that fails at the transport level is retried once; any other
    /// failure propagates untouched. Mutations never come through here.
    pub async fn fetch<T, F, Fut>(&self, key: QueryKey, fetch: F) -> Result<Arc<T>, ApiError>
    where
        T: Send + Sync + 'static,
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        if let Some(hit) = self.entries.lock().unwrap().get(&key) {
            if let Ok(value) = hit.clone().downcast::<T>() {
                return Ok(value);
            }
        }

        let value = match fetch().await {
            Ok(value) => value,
            Err(err) if err.is_network() => {
                debug!("read for {key:?} failed at transport level, retrying once: {err}");
                fetch().await?
            }
            Err(err) => return Err(err),
        };

        let value = Arc::new(value);
        self.entries
            .lock()
            .unwrap()
            .insert(key, value.clone() as Entry);
        Ok(value)
    }

    pub fn invalidate(&self, key: &QueryKey) {
        self.entries.lock().unwrap().remove(key);
    }

    /// Drop the member list and every derived subset, including all
    /// by-dni lookups.
    pub fn invalidate_member_queries(&self) {
        self.entries
            .lock()
            .unwrap()
            .retain(|key, _| !key.is_member_query());
    }

    pub fn invalidate_check_ins(&self, member_id: &str) {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(&QueryKey::CheckIns);
        entries.remove(&QueryKey::MemberCheckIns(member_id.to_string()));
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}
