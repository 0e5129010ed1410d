pub mod abandon_login;
pub mod checkout;
pub mod enter_phone;
pub mod home;
pub mod request_code;
pub mod seller_products;
pub mod start_login;
pub mod submit_code;

#[cfg(test)]
pub(crate) mod test_support;

use crate::domain::auth::AuthSession;
use crate::domain::errors::AuthError;
use crate::domain::ports::SessionStore;

// Load a login session or report that it does not exist.
pub(crate) async fn fetch_session<S>(store: &S, session_id: &str) -> Result<AuthSession, AuthError>
where
    S: SessionStore,
{
    store
        .get(session_id)
        .await
        .map_err(|_| AuthError::StorageFailure)?
        .ok_or(AuthError::SessionNotFound)
}
