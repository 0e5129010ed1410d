use async_trait::async_trait;

use crate::domain::auth::AuthSession;
use crate::domain::entities::Product;
use crate::domain::role::Role;

// What an update wants done with the stored session.
#[derive(Debug, PartialEq, Eq)]
pub enum SessionWrite {
    Unchanged,
    Replace(AuthSession),
    Remove,
}

// Port for holding in-progress login sessions between user actions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn insert(&self, session_id: String, session: AuthSession) -> Result<(), String>;
    async fn get(&self, session_id: &str) -> Result<Option<AuthSession>, String>;
    async fn remove(&self, session_id: &str) -> Result<bool, String>;

    // Read, transition and write back as one step. Returns None when the
    // session does not exist; `apply` is not called in that case.
    async fn update<F, T>(&self, session_id: &str, apply: F) -> Result<Option<T>, String>
    where
        F: FnOnce(&AuthSession) -> (SessionWrite, T) + Send,
        T: Send;
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now_epoch_seconds(&self) -> u64;
}

// Port for checking a submitted code against the one issued for a session.
pub trait CodeVerifier: Send + Sync {
    fn verify(&self, session: &AuthSession, candidate: &str) -> bool;
}

// Port for the level shown on the home screens.
pub trait LevelProvider: Send + Sync {
    fn level_for(&self, role: Role) -> u32;
}

// Port for read-only product lookups.
pub trait ProductCatalog: Send + Sync {
    fn list(&self) -> Vec<Product>;
    fn get(&self, product_id: u64) -> Option<Product>;
}
