use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::auth::AuthSession;
use crate::domain::entities::Product;
use crate::domain::ports::{
    Clock, CodeVerifier, LevelProvider, ProductCatalog, SessionStore, SessionWrite,
};
use crate::domain::pricing::PricingConfig;
use crate::domain::role::{RedirectTargets, Role};

// A login session plus the last time it was written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredSession {
    pub session: AuthSession,
    pub last_active: u64,
}

pub type SessionTable = Arc<Mutex<HashMap<String, StoredSession>>>;

// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    // In-progress login attempts keyed by session id.
    pub sessions: SessionTable,
    pub session_idle_ttl_seconds: u64,
    pub redirects: RedirectTargets,
    pub pricing: PricingConfig,
    pub accepted_code: String,
    pub level: u32,
}

impl AppState {
    pub fn new(
        redirects: RedirectTargets,
        pricing: PricingConfig,
        accepted_code: String,
        level: u32,
        session_idle_ttl_seconds: u64,
    ) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            session_idle_ttl_seconds,
            redirects,
            pricing,
            accepted_code,
            level,
        }
    }
}

// System clock adapter used by the session store.
#[derive(Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_seconds(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

// In-memory session store adapter. Sessions idle for `idle_ttl_seconds` are
// treated as missing and dropped when touched; inserts sweep the whole table.
#[derive(Clone)]
pub struct InMemorySessionStore<C> {
    pub sessions: SessionTable,
    pub clock: C,
    pub idle_ttl_seconds: u64,
}

impl<C> InMemorySessionStore<C>
where
    C: Clock,
{
    fn is_expired(&self, entry: &StoredSession, now: u64) -> bool {
        now.saturating_sub(entry.last_active) >= self.idle_ttl_seconds
    }

    // Drops the entry if it has expired, so callers only see live sessions.
    fn evict_if_expired(
        &self,
        sessions: &mut HashMap<String, StoredSession>,
        session_id: &str,
        now: u64,
    ) {
        let expired = sessions
            .get(session_id)
            .is_some_and(|entry| self.is_expired(entry, now));
        if expired {
            sessions.remove(session_id);
            debug!(session_id, "login session expired");
        }
    }
}

#[async_trait]
impl<C> SessionStore for InMemorySessionStore<C>
where
    C: Clock,
{
    async fn insert(&self, session_id: String, session: AuthSession) -> Result<(), String> {
        let now = self.clock.now_epoch_seconds();
        let mut sessions = self.sessions.lock().await;
        sessions.retain(|_, entry| !self.is_expired(entry, now));
        sessions.insert(
            session_id,
            StoredSession {
                session,
                last_active: now,
            },
        );
        Ok(())
    }

    async fn get(&self, session_id: &str) -> Result<Option<AuthSession>, String> {
        let now = self.clock.now_epoch_seconds();
        let mut sessions = self.sessions.lock().await;
        self.evict_if_expired(&mut sessions, session_id, now);
        Ok(sessions.get(session_id).map(|entry| entry.session.clone()))
    }

    async fn remove(&self, session_id: &str) -> Result<bool, String> {
        let now = self.clock.now_epoch_seconds();
        let mut sessions = self.sessions.lock().await;
        self.evict_if_expired(&mut sessions, session_id, now);
        Ok(sessions.remove(session_id).is_some())
    }

    async fn update<F, T>(&self, session_id: &str, apply: F) -> Result<Option<T>, String>
    where
        F: FnOnce(&AuthSession) -> (SessionWrite, T) + Send,
        T: Send,
    {
        let now = self.clock.now_epoch_seconds();
        // Held across read, transition and write so concurrent actions on one
        // session apply in sequence.
        let mut sessions = self.sessions.lock().await;
        self.evict_if_expired(&mut sessions, session_id, now);
        let Some(entry) = sessions.get_mut(session_id) else {
            return Ok(None);
        };

        let (write, output) = apply(&entry.session);
        match write {
            SessionWrite::Unchanged => {}
            SessionWrite::Replace(session) => {
                entry.session = session;
                entry.last_active = now;
            }
            SessionWrite::Remove => {
                sessions.remove(session_id);
            }
        }
        Ok(Some(output))
    }
}

// Accepts a single configured code for every session until a real delivery
// channel issues per-session codes.
#[derive(Clone)]
pub struct SentinelCodeVerifier {
    pub accepted_code: String,
}

impl CodeVerifier for SentinelCodeVerifier {
    fn verify(&self, _session: &AuthSession, candidate: &str) -> bool {
        candidate == self.accepted_code
    }
}

#[derive(Clone, Copy)]
pub struct ConstantLevelProvider(pub u32);

impl LevelProvider for ConstantLevelProvider {
    fn level_for(&self, _role: Role) -> u32 {
        self.0
    }
}

// Catalog holding only the placeholder product.
#[derive(Clone, Copy)]
pub struct PlaceholderCatalog;

impl ProductCatalog for PlaceholderCatalog {
    fn list(&self) -> Vec<Product> {
        vec![Product::placeholder()]
    }

    fn get(&self, product_id: u64) -> Option<Product> {
        let product = Product::placeholder();
        (product.id == product_id).then_some(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::AuthState;
    use crate::use_cases::test_support::ManualClock;

    const TTL: u64 = 600;

    fn store_at(clock: &ManualClock) -> InMemorySessionStore<ManualClock> {
        InMemorySessionStore {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            clock: clock.clone(),
            idle_ttl_seconds: TTL,
        }
    }

    #[tokio::test]
    async fn when_session_is_inserted_then_it_can_be_read_and_removed() {
        let store = store_at(&ManualClock::starting_at(1_700_000_000));
        let session = AuthSession::new(Role::Buyer);

        store
            .insert("session-1".to_string(), session.clone())
            .await
            .expect("expected insert");

        assert_eq!(store.get("session-1").await, Ok(Some(session)));
        assert_eq!(store.remove("session-1").await, Ok(true));
        assert_eq!(store.remove("session-1").await, Ok(false));
    }

    #[tokio::test]
    async fn when_update_replaces_session_then_next_read_sees_it() {
        let store = store_at(&ManualClock::starting_at(1_700_000_000));
        store
            .insert("session-1".to_string(), AuthSession::new(Role::Seller))
            .await
            .expect("expected insert");

        let output = store
            .update("session-1", |session| {
                let next = session.clone().enter_phone_number("0300");
                (SessionWrite::Replace(next), "replaced")
            })
            .await;

        assert_eq!(output, Ok(Some("replaced")));
        let stored = store
            .get("session-1")
            .await
            .expect("expected read")
            .expect("expected session");
        assert_eq!(stored.phone_number, "0300");
    }

    #[tokio::test]
    async fn when_update_removes_session_then_it_is_gone() {
        let store = store_at(&ManualClock::starting_at(1_700_000_000));
        store
            .insert("session-1".to_string(), AuthSession::new(Role::Buyer))
            .await
            .expect("expected insert");

        let output = store
            .update("session-1", |_| (SessionWrite::Remove, ()))
            .await;

        assert_eq!(output, Ok(Some(())));
        assert_eq!(store.get("session-1").await, Ok(None));
    }

    #[tokio::test]
    async fn when_update_targets_missing_session_then_closure_is_not_called() {
        let store = store_at(&ManualClock::starting_at(1_700_000_000));

        let output = store
            .update("missing", |_| -> (SessionWrite, ()) {
                panic!("closure must not run for a missing session")
            })
            .await;

        assert_eq!(output, Ok(None));
    }

    #[tokio::test]
    async fn when_session_is_idle_past_ttl_then_it_reads_as_missing_and_is_evicted() {
        let clock = ManualClock::starting_at(1_700_000_000);
        let store = store_at(&clock);
        store
            .insert("session-1".to_string(), AuthSession::new(Role::Buyer))
            .await
            .expect("expected insert");

        clock.advance(TTL - 1);
        assert!(matches!(store.get("session-1").await, Ok(Some(_))));

        clock.advance(1);
        assert_eq!(store.get("session-1").await, Ok(None));
        assert!(store.sessions.lock().await.is_empty());

        let output = store
            .update("session-1", |session| (SessionWrite::Unchanged, session.state()))
            .await;
        assert_eq!(output, Ok(None));
    }

    #[tokio::test]
    async fn when_session_is_written_then_idle_window_restarts() {
        let clock = ManualClock::starting_at(1_700_000_000);
        let store = store_at(&clock);
        store
            .insert("session-1".to_string(), AuthSession::new(Role::Buyer))
            .await
            .expect("expected insert");

        clock.advance(TTL - 10);
        store
            .update("session-1", |session| {
                (SessionWrite::Replace(session.clone().enter_phone_number("0300")), ())
            })
            .await
            .expect("expected update");

        clock.advance(TTL - 10);
        let state = store
            .update("session-1", |session| (SessionWrite::Unchanged, session.state()))
            .await;
        assert_eq!(state, Ok(Some(AuthState::AwaitingPhone)));
    }

    #[tokio::test]
    async fn when_new_session_is_inserted_then_expired_ones_are_swept() {
        let clock = ManualClock::starting_at(1_700_000_000);
        let store = store_at(&clock);
        for id in ["stale-1", "stale-2"] {
            store
                .insert(id.to_string(), AuthSession::new(Role::Seller))
                .await
                .expect("expected insert");
        }

        clock.advance(TTL);
        store
            .insert("fresh".to_string(), AuthSession::new(Role::Buyer))
            .await
            .expect("expected insert");

        let sessions = store.sessions.lock().await;
        assert_eq!(sessions.len(), 1);
        assert!(sessions.contains_key("fresh"));
    }

    #[tokio::test]
    async fn when_expired_session_is_abandoned_then_nothing_is_reported_removed() {
        let clock = ManualClock::starting_at(1_700_000_000);
        let store = store_at(&clock);
        store
            .insert("session-1".to_string(), AuthSession::new(Role::Buyer))
            .await
            .expect("expected insert");

        clock.advance(TTL + 5);

        assert_eq!(store.remove("session-1").await, Ok(false));
    }

    #[test]
    fn when_candidate_matches_accepted_code_then_verifier_accepts() {
        let verifier = SentinelCodeVerifier {
            accepted_code: "1234".to_string(),
        };
        let session = AuthSession::new(Role::Seller);

        assert!(verifier.verify(&session, "1234"));
        assert!(!verifier.verify(&session, "12345"));
        assert!(!verifier.verify(&session, ""));
    }

    #[test]
    fn when_placeholder_catalog_is_queried_then_only_product_one_exists() {
        assert_eq!(PlaceholderCatalog.list().len(), 1);
        assert_eq!(PlaceholderCatalog.get(1), Some(Product::placeholder()));
        assert_eq!(PlaceholderCatalog.get(2), None);
    }
}
