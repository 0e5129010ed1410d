use tracing::info;

use crate::domain::errors::AuthError;
use crate::domain::ports::SessionStore;

pub struct AbandonLoginResponse {
    pub abandoned: bool,
}

// Drops a login attempt when the user navigates away.
pub struct AbandonLoginUseCase<S> {
    pub store: S,
}

impl<S> AbandonLoginUseCase<S>
where
    S: SessionStore,
{
    pub async fn execute(&self, session_id: &str) -> Result<AbandonLoginResponse, AuthError> {
        let abandoned = self
            .store
            .remove(session_id)
            .await
            .map_err(|_| AuthError::StorageFailure)?;

        if abandoned {
            info!(%session_id, "login session abandoned");
        }

        Ok(AbandonLoginResponse { abandoned })
    }
}
