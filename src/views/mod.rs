//! Server-rendered HTML. Every page goes through [`render`], which wraps the
//! body in the shared layout and consumes any pending flash message.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{flash::Flash, middleware::auth::RequestContext};

pub mod pages;

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Percent-encodes a value for a single path segment.
pub fn encode_segment(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

pub fn render(ctx: &RequestContext, title: &str, body: &str) -> Response {
    let username = ctx.user.as_ref().map(|user| user.username.as_str());
    let html = layout(title, username, ctx.flash, body);
    let jar = match ctx.flash {
        Some(_) => Flash::consume(ctx.jar.clone()),
        None => ctx.jar.clone(),
    };
    (jar, Html(html)).into_response()
}

/// Error pages are rendered without a request context.
pub fn render_error(status: StatusCode, message: &str) -> Response {
    let body = format!(
        r#"<section class="error">
    <h1>{code}</h1>
    <p>{message}</p>
    <p><a href="/">Back to home</a></p>
</section>"#,
        code = status.as_u16(),
        message = escape(message),
    );
    (status, Html(layout("Error", None, None, &body))).into_response()
}

fn layout(title: &str, username: Option<&str>, flash: Option<Flash>, body: &str) -> String {
    let nav = match username {
        Some(name) => format!(
            r#"<a href="/">Home</a>
        <a href="/list">Catalog</a>
        <a href="/favorites">Favorites</a>
        <a href="/history">History</a>
        <span class="user">{}</span>
        <a href="/logout">Logout</a>"#,
            escape(name)
        ),
        None => r#"<a href="/">Home</a>
        <a href="/login">Login</a>
        <a href="/register">Register</a>"#
            .to_string(),
    };
    let flash = flash
        .map(|flash| {
            let class = if flash.is_error() { "flash error" } else { "flash" };
            format!(r#"<div class="{class}">{}</div>"#, escape(flash.message()))
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - Media Catalog</title>
    <style>
        body {{
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background-color: #1a1a1a;
            color: #e0e0e0;
            margin: 0;
        }}
        nav {{
            background-color: #2a2a2a;
            border-bottom: 1px solid #3a3a3a;
            padding: 12px 20px;
        }}
        nav a {{
            color: #4a9eff;
            margin-right: 16px;
            text-decoration: none;
        }}
        nav .user {{
            color: #888;
            margin-right: 16px;
        }}
        main {{
            padding: 20px;
            max-width: 960px;
        }}
        a {{
            color: #4a9eff;
        }}
        .flash {{
            background: #234;
            border-left: 4px solid #4a9eff;
            padding: 8px 12px;
            margin-bottom: 16px;
        }}
        .flash.error {{
            background: #422;
            border-left-color: #f55;
        }}
        table {{
            border-collapse: collapse;
            width: 100%;
        }}
        th, td {{
            text-align: left;
            padding: 6px 10px;
            border-bottom: 1px solid #3a3a3a;
        }}
    </style>
</head>
<body>
    <nav>
        {nav}
    </nav>
    <main>
        {flash}
        {body}
    </main>
</body>
</html>"#,
        title = escape(title),
    )
}
