//! Session-backed authentication boundary.
//!
//! The session carries a single boolean under [`LOGGED_IN_KEY`]; there is
//! one shared operator credential and no per-user identity. Handlers never
//! poke at the session directly for authorization. They take an
//! [`AuthContext`], resolved here once per request.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tower_sessions::Session;

use crate::error::ServerError;

/// Key for storing the operator flag in the session.
pub const LOGGED_IN_KEY: &str = "logged_in";

/// Authentication context resolved at the request boundary.
///
/// Gated handlers receive this explicitly and pick their own failure mode:
/// the admin listing redirects to the login form, the mutating routes
/// answer 401. That split is long-standing behavior and stays per route.
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
    logged_in: bool,
}

impl AuthContext {
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// 401 unless the session is authenticated. For the routes that
    /// refuse rather than redirect.
    pub fn require(&self) -> Result<(), ServerError> {
        if self.logged_in {
            Ok(())
        } else {
            Err(ServerError::Unauthorized)
        }
    }
}

impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| ServerError::Internal(format!("session layer: {msg}")))?;

        let logged_in = session
            .get::<bool>(LOGGED_IN_KEY)
            .await?
            .unwrap_or(false);

        Ok(Self { logged_in })
    }
}

/// Mark the session authenticated after a successful credential check.
pub async fn log_in(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.insert(LOGGED_IN_KEY, true).await
}

/// Clear the flag. Logging out an anonymous session is a no-op.
pub async fn log_out(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.remove::<bool>(LOGGED_IN_KEY).await.map(|_| ())
}
