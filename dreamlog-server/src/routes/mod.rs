//! Route handlers for the journal
//!
//! Organized by audience:
//! - public: the paginated listing and single dreams
//! - auth: login and logout
//! - admin: the write side, gated on the session flag

pub mod admin;
pub mod auth;
pub mod public;

pub use admin::*;
pub use auth::*;
pub use public::*;
