use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::auth::AuthSession;
use crate::domain::entities::Product;
use crate::domain::ports::{
    Clock, CodeVerifier, LevelProvider, ProductCatalog, SessionStore, SessionWrite,
};
use crate::domain::role::Role;
use crate::interface_adapters::state::InMemorySessionStore;

pub(crate) type SessionTable = Arc<Mutex<HashMap<String, AuthSession>>>;

// Accepts exactly one code so verification outcomes are deterministic.
pub(crate) struct FixedVerifier(pub(crate) &'static str);

impl CodeVerifier for FixedVerifier {
    fn verify(&self, _session: &AuthSession, candidate: &str) -> bool {
        candidate == self.0
    }
}

pub(crate) struct FixedLevel(pub(crate) u32);

impl LevelProvider for FixedLevel {
    fn level_for(&self, _role: Role) -> u32 {
        self.0
    }
}

// Catalog backed by whatever products a test hands it.
pub(crate) struct ListCatalog(pub(crate) Vec<Product>);

impl ProductCatalog for ListCatalog {
    fn list(&self) -> Vec<Product> {
        self.0.clone()
    }

    fn get(&self, product_id: u64) -> Option<Product> {
        self.0.iter().find(|product| product.id == product_id).cloned()
    }
}

// Clock that only moves when a test advances it.
#[derive(Clone)]
pub(crate) struct ManualClock(Arc<AtomicU64>);

impl ManualClock {
    pub(crate) fn starting_at(now: u64) -> Self {
        Self(Arc::new(AtomicU64::new(now)))
    }

    pub(crate) fn advance(&self, seconds: u64) {
        self.0.fetch_add(seconds, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_epoch_seconds(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

// The production store on a frozen clock.
pub(crate) fn in_memory_store() -> InMemorySessionStore<ManualClock> {
    InMemorySessionStore {
        sessions: Default::default(),
        clock: ManualClock::starting_at(1_700_000_000),
        idle_ttl_seconds: 900,
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub insert: bool,
    pub get: bool,
    pub remove: bool,
    pub update: bool,
}

#[derive(Clone)]
pub(crate) struct RecordingStore {
    sessions: SessionTable,
    failures: FailureFlags,
    // Replace/Remove writes made through `update`.
    writes: Arc<AtomicUsize>,
}

impl RecordingStore {
    pub(crate) fn new() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            failures: FailureFlags::default(),
            writes: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn insert_test_session(&self, session_id: impl Into<String>, session: AuthSession) {
        let mut guard = self.sessions.lock().expect("sessions mutex poisoned");
        guard.insert(session_id.into(), session);
    }

    pub(crate) fn get_test_session(&self, session_id: &str) -> Option<AuthSession> {
        let guard = self.sessions.lock().expect("sessions mutex poisoned");
        guard.get(session_id).cloned()
    }

    pub(crate) fn len(&self) -> usize {
        self.sessions.lock().expect("sessions mutex poisoned").len()
    }

    pub(crate) fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionStore for RecordingStore {
    async fn insert(&self, session_id: String, session: AuthSession) -> Result<(), String> {
        if self.failures.insert {
            return Err("insert failed".to_string());
        }

        let mut guard = self.sessions.lock().expect("sessions mutex poisoned");
        guard.insert(session_id, session);
        Ok(())
    }

    async fn get(&self, session_id: &str) -> Result<Option<AuthSession>, String> {
        if self.failures.get {
            return Err("get failed".to_string());
        }

        let guard = self.sessions.lock().expect("sessions mutex poisoned");
        Ok(guard.get(session_id).cloned())
    }

    async fn remove(&self, session_id: &str) -> Result<bool, String> {
        if self.failures.remove {
            return Err("remove failed".to_string());
        }

        let mut guard = self.sessions.lock().expect("sessions mutex poisoned");
        Ok(guard.remove(session_id).is_some())
    }

    async fn update<F, T>(&self, session_id: &str, apply: F) -> Result<Option<T>, String>
    where
        F: FnOnce(&AuthSession) -> (SessionWrite, T) + Send,
        T: Send,
    {
        if self.failures.update {
            return Err("update failed".to_string());
        }

        let mut guard = self.sessions.lock().expect("sessions mutex poisoned");
        let Some(session) = guard.get(session_id) else {
            return Ok(None);
        };
        let (write, output) = apply(session);
        match write {
            SessionWrite::Unchanged => {}
            SessionWrite::Replace(next) => {
                guard.insert(session_id.to_string(), next);
                self.writes.fetch_add(1, Ordering::SeqCst);
            }
            SessionWrite::Remove => {
                guard.remove(session_id);
                self.writes.fetch_add(1, Ordering::SeqCst);
            }
        }
        Ok(Some(output))
    }
}

// Holds every update open for `stall` after its transition is computed, so a
// test can start a second request while the first is mid-write.
#[derive(Clone)]
pub(crate) struct StallingStore<S> {
    pub(crate) inner: S,
    stall: Duration,
    entered: Arc<AtomicBool>,
}

impl<S> StallingStore<S> {
    pub(crate) fn new(inner: S, stall: Duration) -> Self {
        Self {
            inner,
            stall,
            entered: Arc::new(AtomicBool::new(false)),
        }
    }

    // Resolves once some update is inside its transition.
    pub(crate) async fn wait_until_stalled(&self) {
        while !self.entered.load(Ordering::SeqCst) {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    }
}

#[async_trait]
impl<S> SessionStore for StallingStore<S>
where
    S: SessionStore,
{
    async fn insert(&self, session_id: String, session: AuthSession) -> Result<(), String> {
        self.inner.insert(session_id, session).await
    }

    async fn get(&self, session_id: &str) -> Result<Option<AuthSession>, String> {
        self.inner.get(session_id).await
    }

    async fn remove(&self, session_id: &str) -> Result<bool, String> {
        self.inner.remove(session_id).await
    }

    async fn update<F, T>(&self, session_id: &str, apply: F) -> Result<Option<T>, String>
    where
        F: FnOnce(&AuthSession) -> (SessionWrite, T) + Send,
        T: Send,
    {
        let entered = Arc::clone(&self.entered);
        let stall = self.stall;
        self.inner
            .update(session_id, move |session| {
                let outcome = apply(session);
                entered.store(true, Ordering::SeqCst);
                std::thread::sleep(stall);
                outcome
            })
            .await
    }
}
