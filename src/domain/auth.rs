use serde::{Deserialize, Serialize};

use crate::domain::errors::AuthError;
use crate::domain::ports::CodeVerifier;
use crate::domain::role::{RedirectTargets, Role};

pub const INVALID_CODE_MESSAGE: &str = "Invalid OTP";

// Where a login attempt currently stands. Progress is one-way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthState {
    AwaitingPhone,
    CodeSent,
    Verified,
}

// One in-progress login attempt, owned by the client that started it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub role: Role,
    pub phone_number: String,
    pub code_issued: bool,
    pub entered_code: String,
    pub verified: bool,
}

impl AuthSession {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            phone_number: String::new(),
            code_issued: false,
            entered_code: String::new(),
            verified: false,
        }
    }

    pub fn state(&self) -> AuthState {
        if self.verified {
            AuthState::Verified
        } else if self.code_issued {
            AuthState::CodeSent
        } else {
            AuthState::AwaitingPhone
        }
    }

    // Raw input, stored verbatim. Editing the number never moves the state.
    pub fn enter_phone_number(mut self, raw: impl Into<String>) -> Self {
        self.phone_number = raw.into();
        self
    }
}

// What the presentation layer should do after a transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Directive {
    ShowCodeEntry,
    Redirect { path: String },
    ShowError { message: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub session: AuthSession,
    pub directive: Directive,
}

impl Transition {
    pub fn is_authenticated(&self) -> bool {
        self.session.verified
    }
}

// Issue a code for the session. Repeating the request is harmless and leaves
// the session as it was; a verified session is pointed back at its home.
pub fn request_code(mut session: AuthSession, redirects: &RedirectTargets) -> Transition {
    if session.verified {
        let path = redirects.for_role(session.role).to_string();
        return Transition {
            session,
            directive: Directive::Redirect { path },
        };
    }
    session.code_issued = true;
    Transition {
        session,
        directive: Directive::ShowCodeEntry,
    }
}

// Drives the phone/code funnel for a role and decides when the redirect to
// the role's home screen is allowed.
pub struct AuthFlowController<V> {
    pub verifier: V,
    pub redirects: RedirectTargets,
}

impl<V> AuthFlowController<V>
where
    V: CodeVerifier,
{
    pub fn start(&self, role: Role) -> AuthSession {
        AuthSession::new(role)
    }

    pub fn request_code(&self, session: AuthSession) -> Transition {
        request_code(session, &self.redirects)
    }

    pub fn submit_code(
        &self,
        mut session: AuthSession,
        candidate: &str,
    ) -> Result<Transition, AuthError> {
        if session.verified {
            return Err(AuthError::AlreadyVerified);
        }
        if !session.code_issued {
            return Err(AuthError::CodeNotRequested);
        }

        session.entered_code = candidate.to_string();

        if self.verifier.verify(&session, candidate) {
            session.verified = true;
            let path = self.redirects.for_role(session.role).to_string();
            return Ok(Transition {
                session,
                directive: Directive::Redirect { path },
            });
        }

        // Leave the entered code in place so the user can correct it.
        Ok(Transition {
            session,
            directive: Directive::ShowError {
                message: INVALID_CODE_MESSAGE.to_string(),
            },
        })
    }
}
