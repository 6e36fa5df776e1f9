//! Admin routes - the write side of the journal
//!
//! Every handler checks the session flag before opening a connection, so
//! a refused request never touches storage.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use maud::Markup;
use serde::Deserialize;

use dreamlog_core::{parse_form_date, today, EntryDraft};

use crate::db::EntryRepo;
use crate::error::{ServerError, ServerResult};
use crate::render::{self, EntryFormView};
use crate::session::AuthContext;
use crate::state::AppState;

/// Form body shared by the new and modify flows.
#[derive(Debug, Deserialize)]
pub struct EntryForm {
    pub title: String,
    pub date: String,
    pub content: String,
}

impl EntryForm {
    fn into_draft(self) -> ServerResult<EntryDraft> {
        let date =
            parse_form_date(&self.date).map_err(|e| ServerError::BadRequest(e.to_string()))?;

        Ok(EntryDraft {
            title: self.title,
            body: self.content,
            date,
        })
    }
}

/// GET /admin - Entry overview; anonymous visitors go to the login form
pub async fn admin(State(state): State<AppState>, auth: AuthContext) -> ServerResult<Response> {
    if !auth.is_logged_in() {
        return Ok(Redirect::to("/login").into_response());
    }

    let conn = state.connect()?;
    let summaries = EntryRepo::new(&conn).list_summaries()?;

    Ok(render::admin_page(&state.config().author, &summaries).into_response())
}

/// GET /new - Blank entry form, date prefilled with today
pub async fn new_form(State(state): State<AppState>, auth: AuthContext) -> ServerResult<Markup> {
    auth.require()?;

    Ok(render::entry_form_page(
        &state.config().author,
        &EntryFormView::blank(today()),
    ))
}

/// POST /new - Store a new dream
pub async fn create(
    State(state): State<AppState>,
    auth: AuthContext,
    Form(form): Form<EntryForm>,
) -> ServerResult<Redirect> {
    auth.require()?;
    let draft = form.into_draft()?;

    let conn = state.connect()?;
    let id = EntryRepo::new(&conn).insert(&draft)?;
    tracing::info!(id, title = %draft.title, "dream recorded");

    Ok(Redirect::to("/admin"))
}

/// GET /remove/{id} - Delete a dream
///
/// Deleting an id that is already gone still redirects; the outcome is
/// the same either way.
pub async fn remove(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<i64>,
) -> ServerResult<Redirect> {
    auth.require()?;

    let conn = state.connect()?;
    let removed = EntryRepo::new(&conn).delete(id)?;
    if removed {
        tracing::info!(id, "dream removed");
    }

    Ok(Redirect::to("/admin"))
}

/// GET /modify/{id} - Edit form prefilled from the stored entry
pub async fn edit_form(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<i64>,
) -> ServerResult<Markup> {
    auth.require()?;

    let conn = state.connect()?;
    let entry = EntryRepo::new(&conn)
        .get(id)?
        .ok_or_else(|| ServerError::NotFound(format!("dream {} not found", id)))?;

    Ok(render::entry_form_page(
        &state.config().author,
        &EntryFormView::for_entry(&entry),
    ))
}

/// POST /modify/{id} - Replace every field of an existing dream
pub async fn update(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<i64>,
    Form(form): Form<EntryForm>,
) -> ServerResult<Redirect> {
    auth.require()?;
    let draft = form.into_draft()?;

    let conn = state.connect()?;
    let updated = EntryRepo::new(&conn).update(id, &draft)?;
    if !updated {
        return Err(ServerError::NotFound(format!("dream {} not found", id)));
    }
    tracing::info!(id, "dream updated");

    Ok(Redirect::to("/admin"))
}
