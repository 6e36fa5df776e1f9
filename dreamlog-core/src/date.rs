//! Date formats at the HTTP boundary.
//!
//! Two human formats exist: `dd-mm-yyyy` everywhere a date is displayed,
//! and `dd/mm/yyyy` in form fields (the new-entry form prefills today in
//! that shape). Storage uses ISO-8601 so that SQL ordering equals date
//! ordering; these helpers only cover the rendered/submitted shapes.

use chrono::{Local, NaiveDate};

use crate::error::{CoreError, Result};

/// Format for dates shown on pages.
pub const DISPLAY_FORMAT: &str = "%d-%m-%Y";

/// Format for dates in form fields.
pub const FORM_FORMAT: &str = "%d/%m/%Y";

/// Render a date for display: `17-03-2024`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Render a date for a form field: `17/03/2024`.
pub fn format_form_date(date: NaiveDate) -> String {
    date.format(FORM_FORMAT).to_string()
}

/// Parse a submitted form date.
pub fn parse_form_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), FORM_FORMAT)
        .map_err(|_| CoreError::invalid_date(value, "dd/mm/yyyy"))
}

/// Today's date in the server's local timezone, for form prefills.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
