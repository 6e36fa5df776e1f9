//! Login and logout

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use maud::Markup;
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::ServerResult;
use crate::render;
use crate::session::{self, AuthContext};
use crate::state::AppState;

/// Shown on the login form after a failed attempt.
const WRONG_CREDENTIALS: &str = "Wrong login or password.";

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub login: String,
    pub password: String,
}

/// GET /login - The login form
pub async fn login_form(State(state): State<AppState>) -> Markup {
    render::login_page(&state.config().author, None)
}

/// POST /login - Check the credential pair and mark the session
///
/// An already-authenticated session skips the check entirely. A wrong
/// pair re-renders the form with the failure message and leaves the
/// session untouched.
pub async fn login(
    State(state): State<AppState>,
    auth: AuthContext,
    session: Session,
    Form(form): Form<LoginForm>,
) -> ServerResult<Response> {
    if auth.is_logged_in() {
        return Ok(Redirect::to("/admin").into_response());
    }

    let config = state.config();
    if form.login == config.username && form.password == config.password {
        session::log_in(&session).await?;
        tracing::info!(user = %form.login, "login succeeded");
        Ok(Redirect::to("/admin").into_response())
    } else {
        tracing::warn!(user = %form.login, "login failed");
        Ok(render::login_page(&config.author, Some(WRONG_CREDENTIALS)).into_response())
    }
}

/// GET /logout - Clear the flag and return to the journal
pub async fn logout(session: Session) -> ServerResult<Redirect> {
    session::log_out(&session).await?;
    Ok(Redirect::to("/"))
}
