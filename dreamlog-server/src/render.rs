//! HTML rendering.
//!
//! Every page is built with maud so dynamic content is escaped at the
//! splice points. Handlers pass plain domain values in; nothing here
//! touches the database or the session.

use axum::http::StatusCode;
use chrono::NaiveDate;
use maud::{html, Markup, PreEscaped, DOCTYPE};

use dreamlog_core::{format_display_date, format_form_date, paragraphs, Entry, EntrySummary, PageWindow};

const STYLESHEET: &str = "\
body { max-width: 42rem; margin: 2rem auto; padding: 0 1rem; font-family: Georgia, serif; color: #222; }
header h1 { font-size: 1.6rem; }
header h1 a { color: inherit; text-decoration: none; }
article.dream { margin: 2.5rem 0; }
article.dream h2 { margin-bottom: 0.2rem; }
article.dream h2 a { color: inherit; }
p.date { color: #777; font-size: 0.85rem; margin-top: 0; }
p.error { color: #a00; }
nav.pages { margin: 3rem 0 1rem; display: flex; justify-content: space-between; }
form p { margin: 0.8rem 0; }
form label { display: block; color: #555; font-size: 0.85rem; }
form input[type=text], form input[type=password], form textarea { width: 100%; font: inherit; padding: 0.3rem; }
table.entries { width: 100%; border-collapse: collapse; }
table.entries td { padding: 0.4rem 0.6rem; border-bottom: 1px solid #eee; }
td.ops { text-align: right; white-space: nowrap; }
footer { margin-top: 4rem; color: #999; font-size: 0.8rem; }
";

/// Common page shell: header linking home, the content, an optional
/// author footer.
fn layout(author: &str, title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                header {
                    h1 { a href="/" { "dreams" } }
                }
                main {
                    (content)
                }
                @if !author.is_empty() {
                    footer { "made by " (author) }
                }
            }
        }
    }
}

/// Body text as paragraphs. Blank-line runs split `<p>` blocks, single
/// newlines become `<br>` inside a block.
fn entry_body(body: &str) -> Markup {
    html! {
        @for para in paragraphs(body) {
            p {
                @for (i, line) in para.split('\n').enumerate() {
                    @if i > 0 { br; }
                    (line.trim_end_matches('\r'))
                }
            }
        }
    }
}

fn dream_article(entry: &Entry) -> Markup {
    html! {
        article.dream {
            h2 { a href=(format!("/dream/{}", entry.id)) { (entry.title) } }
            p.date { (format_display_date(entry.date)) }
            (entry_body(&entry.body))
        }
    }
}

/// The paginated listing. Links are emitted only when the window says
/// the neighbouring page exists.
pub fn journal_page(author: &str, entries: &[Entry], window: &PageWindow) -> Markup {
    layout(
        author,
        "dreams",
        html! {
            @if entries.is_empty() {
                p { "Nothing here yet." }
            }
            @for entry in entries {
                (dream_article(entry))
            }
            nav.pages {
                @if window.has_previous() {
                    a href=(format!("/{}", window.previous)) { "\u{ab} previous" }
                } @else {
                    span {}
                }
                @if window.has_next() {
                    a href=(format!("/{}", window.next)) { "next \u{bb}" }
                }
            }
        },
    )
}

/// A single dream on its own page.
pub fn entry_page(author: &str, entry: &Entry) -> Markup {
    layout(author, &entry.title, dream_article(entry))
}

/// Login form, with the failure message when the last attempt was wrong.
pub fn login_page(author: &str, error: Option<&str>) -> Markup {
    layout(
        author,
        "login",
        html! {
            h2 { "login" }
            @if let Some(message) = error {
                p.error { (message) }
            }
            form method="post" action="/login" {
                p {
                    label for="login" { "login" }
                    input type="text" name="login" id="login";
                }
                p {
                    label for="password" { "password" }
                    input type="password" name="password" id="password";
                }
                p { input type="submit" value="log in"; }
            }
        },
    )
}

/// Admin overview: every entry as a date/title row with edit and delete
/// links.
pub fn admin_page(author: &str, summaries: &[EntrySummary]) -> Markup {
    layout(
        author,
        "admin",
        html! {
            h2 { "admin" }
            p {
                a href="/new" { "new dream" }
                " \u{b7} "
                a href="/logout" { "log out" }
            }
            @if summaries.is_empty() {
                p { "No dreams recorded." }
            } @else {
                table.entries {
                    @for summary in summaries {
                        tr {
                            td.date { (format_display_date(summary.date)) }
                            td { a href=(format!("/dream/{}", summary.id)) { (summary.title) } }
                            td.ops {
                                a href=(format!("/modify/{}", summary.id)) { "edit" }
                                " "
                                a href=(format!("/remove/{}", summary.id)) { "delete" }
                            }
                        }
                    }
                }
            }
        },
    )
}

/// What the entry form shows and where it posts. One view type serves
/// both the new-entry and the modify flows.
pub struct EntryFormView {
    pub heading: &'static str,
    pub action: String,
    pub title: String,
    pub date: String,
    pub body: String,
}

impl EntryFormView {
    /// Blank form for a new dream, date prefilled with today.
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            heading: "new dream",
            action: "/new".to_string(),
            title: String::new(),
            date: format_form_date(today),
            body: String::new(),
        }
    }

    /// Form prefilled from a stored entry, posting back to its modify
    /// route.
    pub fn for_entry(entry: &Entry) -> Self {
        Self {
            heading: "modify dream",
            action: format!("/modify/{}", entry.id),
            title: entry.title.clone(),
            date: format_form_date(entry.date),
            body: entry.body.clone(),
        }
    }
}

pub fn entry_form_page(author: &str, form: &EntryFormView) -> Markup {
    layout(
        author,
        form.heading,
        html! {
            h2 { (form.heading) }
            form method="post" action=(form.action) {
                p {
                    label for="title" { "title" }
                    input type="text" name="title" id="title" value=(form.title);
                }
                p {
                    label for="date" { "date (dd/mm/yyyy)" }
                    input type="text" name="date" id="date" value=(form.date);
                }
                p {
                    label for="content" { "dream" }
                    textarea name="content" id="content" rows="12" { (form.body) }
                }
                p { input type="submit" value="save"; }
            }
        },
    )
}

/// Standalone error page. No config in scope here, so no author footer.
pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let reason = status.canonical_reason().unwrap_or("error");
    layout(
        "",
        reason,
        html! {
            h2 { (status.as_u16()) " " (reason) }
            p { (message) }
            p { a href="/" { "back to the journal" } }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use dreamlog_core::paginate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(id: i64, title: &str, body: &str) -> Entry {
        Entry {
            id,
            title: title.to_string(),
            body: body.to_string(),
            date: date(2024, 3, 9),
        }
    }

    #[test]
    fn body_markup_splits_paragraphs_and_lines() {
        let html = entry_body("first line\nsecond line\n\nnew paragraph").into_string();
        assert_eq!(html.matches("<p>").count(), 2);
        assert_eq!(html.matches("<br>").count(), 1);
        assert!(html.contains("first line<br>second line"));
    }

    #[test]
    fn body_markup_escapes_html() {
        let html = entry_body("<script>alert(1)</script>").into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn journal_page_links_follow_the_window() {
        let entries = vec![entry(1, "one", "body")];

        let middle = journal_page("", &entries, &paginate(10, 10, 25)).into_string();
        assert!(middle.contains("href=\"/0\""));
        assert!(middle.contains("href=\"/20\""));

        let first = journal_page("", &entries, &paginate(0, 10, 25)).into_string();
        assert!(!first.contains("previous"));
        assert!(first.contains("href=\"/10\""));

        let last = journal_page("", &entries, &paginate(20, 10, 25)).into_string();
        assert!(last.contains("href=\"/10\""));
        assert!(!last.contains("next \u{bb}"));
    }

    #[test]
    fn journal_page_shows_display_dates() {
        let html = journal_page("", &[entry(1, "one", "body")], &paginate(0, 10, 1)).into_string();
        assert!(html.contains("09-03-2024"));
        assert!(html.contains("href=\"/dream/1\""));
    }

    #[test]
    fn author_footer_only_when_configured() {
        let with = journal_page("ada", &[], &paginate(0, 10, 0)).into_string();
        assert!(with.contains("made by ada"));

        let without = journal_page("", &[], &paginate(0, 10, 0)).into_string();
        assert!(!without.contains("made by"));
    }

    #[test]
    fn login_page_error_line_is_optional() {
        let clean = login_page("", None).into_string();
        assert!(!clean.contains("class=\"error\""));

        let failed = login_page("", Some("Wrong login or password.")).into_string();
        assert!(failed.contains("Wrong login or password."));
    }

    #[test]
    fn admin_page_lists_edit_and_delete_links() {
        let summaries = vec![EntrySummary {
            id: 7,
            title: "falling".to_string(),
            date: date(2024, 1, 2),
        }];
        let html = admin_page("", &summaries).into_string();
        assert!(html.contains("href=\"/modify/7\""));
        assert!(html.contains("href=\"/remove/7\""));
        assert!(html.contains("02-01-2024"));
    }

    #[test]
    fn blank_form_prefills_today_in_form_format() {
        let form = EntryFormView::blank(date(2024, 3, 9));
        assert_eq!(form.date, "09/03/2024");
        assert_eq!(form.action, "/new");

        let html = entry_form_page("", &form).into_string();
        assert!(html.contains("value=\"09/03/2024\""));
        assert!(html.contains("action=\"/new\""));
    }

    #[test]
    fn edit_form_prefills_entry_fields() {
        let form = EntryFormView::for_entry(&entry(3, "falling", "down\n\nand down"));
        assert_eq!(form.action, "/modify/3");

        let html = entry_form_page("", &form).into_string();
        assert!(html.contains("value=\"falling\""));
        assert!(html.contains("down\n\nand down"));
    }

    #[test]
    fn error_page_names_the_status() {
        let html = error_page(StatusCode::NOT_FOUND, "dream 9 not found").into_string();
        assert!(html.contains("404"));
        assert!(html.contains("Not Found"));
        assert!(html.contains("dream 9 not found"));
    }
}
