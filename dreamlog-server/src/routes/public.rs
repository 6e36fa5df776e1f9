//! Public routes - the journal anyone can read

use axum::extract::{Path, State};
use maud::Markup;

use dreamlog_core::paginate;

use crate::db::EntryRepo;
use crate::error::{ServerError, ServerResult};
use crate::render;
use crate::state::AppState;

/// GET / - First page of the journal
pub async fn index(State(state): State<AppState>) -> ServerResult<Markup> {
    page_at(&state, 0)
}

/// GET /{offset} - Page of the journal starting at the given offset
pub async fn page(State(state): State<AppState>, Path(offset): Path<i64>) -> ServerResult<Markup> {
    page_at(&state, offset)
}

fn page_at(state: &AppState, offset: i64) -> ServerResult<Markup> {
    let conn = state.connect()?;
    let repo = EntryRepo::new(&conn);

    let page_size = state.config().page_size;
    let entries = repo.list_page(offset, page_size)?;
    let total = repo.count()?;
    let window = paginate(offset, page_size, total);

    Ok(render::journal_page(&state.config().author, &entries, &window))
}

/// GET /dream/{id} - A single dream; 404 when it does not exist
pub async fn show_entry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ServerResult<Markup> {
    let conn = state.connect()?;
    let entry = EntryRepo::new(&conn)
        .get(id)?
        .ok_or_else(|| ServerError::NotFound(format!("dream {} not found", id)))?;

    Ok(render::entry_page(&state.config().author, &entry))
}
