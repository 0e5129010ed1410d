use tracing::{info, warn};

use crate::domain::auth::{AuthFlowController, Transition};
use crate::domain::errors::AuthError;
use crate::domain::ports::{CodeVerifier, SessionStore, SessionWrite};
use crate::domain::role::RedirectTargets;

// Verifies a submitted code and discards the session once it succeeds.
pub struct SubmitCodeUseCase<V, S> {
    pub verifier: V,
    pub store: S,
    pub redirects: RedirectTargets,
}

impl<V, S> SubmitCodeUseCase<V, S>
where
    V: CodeVerifier,
    S: SessionStore,
{
    pub async fn execute(self, session_id: &str, candidate: &str) -> Result<Transition, AuthError> {
        let controller = AuthFlowController {
            verifier: self.verifier,
            redirects: self.redirects,
        };

        let transition = self
            .store
            .update(session_id, |session| {
                match controller.submit_code(session.clone(), candidate) {
                    // Verified sessions are not kept around.
                    Ok(transition) if transition.is_authenticated() => {
                        (SessionWrite::Remove, Ok(transition))
                    }
                    Ok(transition) => (
                        SessionWrite::Replace(transition.session.clone()),
                        Ok(transition),
                    ),
                    Err(e) => (SessionWrite::Unchanged, Err(e)),
                }
            })
            .await
            .map_err(|_| AuthError::StorageFailure)?
            .ok_or(AuthError::SessionNotFound)??;

        let role = transition.session.role;
        if transition.is_authenticated() {
            info!(%session_id, %role, "login verified");
        } else {
            warn!(%session_id, %role, "invalid login code submitted");
        }

        Ok(transition)
    }
}
