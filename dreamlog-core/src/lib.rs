pub mod config;
pub mod date;
pub mod entry;
pub mod error;
pub mod pagination;
pub mod text;

pub use config::AppConfig;
pub use date::{format_display_date, format_form_date, parse_form_date, today};
pub use entry::{Entry, EntryDraft, EntrySummary};
pub use error::{CoreError, Result};
pub use pagination::{paginate, PageWindow, NO_NEXT, NO_PREVIOUS};
pub use text::paragraphs;
