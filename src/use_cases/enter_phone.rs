use crate::domain::auth::AuthSession;
use crate::domain::errors::AuthError;
use crate::domain::ports::{SessionStore, SessionWrite};

// Records the phone number typed into the login form.
pub struct EnterPhoneUseCase<S> {
    pub store: S,
}

impl<S> EnterPhoneUseCase<S>
where
    S: SessionStore,
{
    pub async fn execute(
        &self,
        session_id: &str,
        phone_number: String,
    ) -> Result<AuthSession, AuthError> {
        self.store
            .update(session_id, |session| {
                let edited = session.clone().enter_phone_number(phone_number);
                (SessionWrite::Replace(edited.clone()), edited)
            })
            .await
            .map_err(|_| AuthError::StorageFailure)?
            .ok_or(AuthError::SessionNotFound)
    }
}
