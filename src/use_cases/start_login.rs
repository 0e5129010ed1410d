use tracing::info;
use uuid::Uuid;

use crate::domain::auth::AuthSession;
use crate::domain::errors::AuthError;
use crate::domain::ports::SessionStore;
use crate::domain::role::Role;

// Response returned when a login screen is entered.
pub struct StartLoginResponse {
    pub session_id: String,
    pub session: AuthSession,
}

// Opens a fresh login attempt for one role.
pub struct StartLoginUseCase<S> {
    pub store: S,
}

impl<S> StartLoginUseCase<S>
where
    S: SessionStore,
{
    pub async fn execute(&self, role: Role) -> Result<StartLoginResponse, AuthError> {
        let session_id = Uuid::new_v4().to_string();
        let session = AuthSession::new(role);

        self.store
            .insert(session_id.clone(), session.clone())
            .await
            .map_err(|_| AuthError::StorageFailure)?;

        info!(%session_id, %role, "login session started");

        Ok(StartLoginResponse {
            session_id,
            session,
        })
    }
}
