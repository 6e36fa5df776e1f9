//! dreamlog-server: the journal's HTTP application.
//!
//! Public pages (paginated listing, single entries) plus a session-gated
//! admin panel for the single operator. Handlers open their own SQLite
//! connection per request and hand typed view models to the maud views.

pub mod db;
pub mod error;
pub mod render;
pub mod routes;
pub mod server;
pub mod session;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use server::{create_router, run_server};
pub use state::AppState;
