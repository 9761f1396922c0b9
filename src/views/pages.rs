use crate::models::{HistoryItem, MediaDetail, MediaEntry};

use super::{encode_segment, escape};

pub fn index(username: Option<&str>) -> String {
    let greeting = match username {
        Some(name) => format!(
            r#"<p>Welcome back, {}. Browse the <a href="/list">catalog</a>, your <a href="/favorites">favorites</a> or your <a href="/history">history</a>.</p>"#,
            escape(name)
        ),
        None => r#"<p><a href="/login">Log in</a> or <a href="/register">create an account</a> to browse the catalog.</p>"#
            .to_string(),
    };
    format!(
        r#"<h1>Media Catalog</h1>
<p>Movies and shows, filterable by title and genre.</p>
{greeting}"#
    )
}

pub fn login() -> String {
    credentials_form("Login", "/login_input", "Log in")
        + r#"<p>No account yet? <a href="/register">Register</a>.</p>"#
}

pub fn register() -> String {
    credentials_form("Register", "/register_input", "Create account")
        + r#"<p>Already registered? <a href="/login">Log in</a>.</p>"#
}

fn credentials_form(heading: &str, action: &str, submit: &str) -> String {
    format!(
        r#"<h1>{heading}</h1>
<form method="post" action="{action}">
    <p><label>Username <input type="text" name="username" required></label></p>
    <p><label>Password <input type="password" name="password" required></label></p>
    <p><button type="submit">{submit}</button></p>
</form>
"#
    )
}

/// Catalog table. `filter` is `(kind, value)` when the list is filtered.
pub fn list(entries: &[MediaEntry], filter: Option<(&str, &str)>) -> String {
    let heading = match filter {
        Some((kind, value)) => format!(
            r#"<h1>Catalog: {} "{}"</h1>
<p><a href="/list">Show everything</a></p>"#,
            escape(kind),
            escape(value)
        ),
        None => "<h1>Catalog</h1>".to_string(),
    };
    format!("{heading}\n{}", media_table(entries, "No entries match."))
}

pub fn detail(detail: &MediaDetail) -> String {
    let media = &detail.media;
    let (state, action) = if detail.favorite.is_favorited() {
        ("In your favorites.", "Remove from favorites")
    } else {
        ("Not in your favorites.", "Add to favorites")
    };
    format!(
        r#"<h1>{title}</h1>
<table>
    <tr><th>Genre</th><td>{genre}</td></tr>
    <tr><th>Released</th><td>{release}</td></tr>
    <tr><th>Duration</th><td>{duration}</td></tr>
</table>
<p>{description}</p>
<p>{state}</p>
<form method="post" action="/favoritesUpdate/{id}">
    <button type="submit">{action}</button>
</form>
<p><a href="/list">Back to catalog</a></p>"#,
        title = escape(&media.title),
        genre = genre_link(&media.genre),
        release = escape(media.release_date.as_deref().unwrap_or("-")),
        duration = duration_text(media.duration),
        description = escape(media.description.as_deref().unwrap_or("")),
        id = media.id,
    )
}

pub fn favorites(entries: &[MediaEntry]) -> String {
    format!(
        "<h1>Favorites</h1>\n{}",
        media_table(entries, "You have no favorites yet.")
    )
}

pub fn history(items: &[HistoryItem]) -> String {
    if items.is_empty() {
        return "<h1>History</h1>\n<p>Nothing watched yet.</p>".to_string();
    }
    let rows: String = items
        .iter()
        .map(|item| {
            format!(
                r#"    <tr><td><a href="/detail/{id}">{title}</a></td><td>{genre}</td><td>{viewed}</td></tr>
"#,
                id = item.media.id,
                title = escape(&item.media.title),
                genre = genre_link(&item.media.genre),
                viewed = item.viewed_at.format("%Y-%m-%d %H:%M UTC"),
            )
        })
        .collect();
    format!(
        r#"<h1>History</h1>
<table>
    <tr><th>Title</th><th>Genre</th><th>Viewed</th></tr>
{rows}</table>"#
    )
}

fn media_table(entries: &[MediaEntry], empty: &str) -> String {
    if entries.is_empty() {
        return format!("<p>{}</p>", escape(empty));
    }
    let rows: String = entries
        .iter()
        .map(|entry| {
            format!(
                r#"    <tr><td><a href="/detail/{id}">{title}</a></td><td>{genre}</td><td>{release}</td><td>{duration}</td></tr>
"#,
                id = entry.id,
                title = escape(&entry.title),
                genre = genre_link(&entry.genre),
                release = escape(entry.release_date.as_deref().unwrap_or("-")),
                duration = duration_text(entry.duration),
            )
        })
        .collect();
    format!(
        r#"<table>
    <tr><th>Title</th><th>Genre</th><th>Released</th><th>Duration</th></tr>
{rows}</table>"#
    )
}

fn genre_link(genre: &str) -> String {
    format!(
        r#"<a href="/list/genre+{}">{}</a>"#,
        encode_segment(genre),
        escape(genre)
    )
}

fn duration_text(duration: Option<i32>) -> String {
    duration
        .map(|minutes| format!("{minutes} min"))
        .unwrap_or_else(|| "-".to_string())
}
