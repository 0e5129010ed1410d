use tracing::info;

use crate::domain::auth::{request_code, Transition};
use crate::domain::errors::AuthError;
use crate::domain::ports::{SessionStore, SessionWrite};
use crate::domain::role::RedirectTargets;

// Marks a code as issued for the session. Nothing is actually delivered.
pub struct RequestCodeUseCase<S> {
    pub store: S,
    pub redirects: RedirectTargets,
}

impl<S> RequestCodeUseCase<S>
where
    S: SessionStore,
{
    pub async fn execute(&self, session_id: &str) -> Result<Transition, AuthError> {
        let (transition, issued) = self
            .store
            .update(session_id, |session| {
                let issued = !session.code_issued && !session.verified;
                let transition = request_code(session.clone(), &self.redirects);
                let write = if issued {
                    SessionWrite::Replace(transition.session.clone())
                } else {
                    SessionWrite::Unchanged
                };
                (write, (transition, issued))
            })
            .await
            .map_err(|_| AuthError::StorageFailure)?
            .ok_or(AuthError::SessionNotFound)?;

        if issued {
            info!(%session_id, role = %transition.session.role, "login code issued");
        }

        Ok(transition)
    }
}
