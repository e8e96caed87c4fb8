//! HTML echo page.
//!
//! Layout is fixed: banner, headers block, method, body block. Values are
//! embedded verbatim unless `EscapeMode::Html` is selected.

use std::fmt::Write;

use crate::snapshot::RequestSnapshot;

pub const BANNER: &str = "<h1>Welcome to our API, here are your details for the request</h1>";

/// How user-controlled values are embedded in the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EscapeMode {
    /// Header values and body go out as received. Injection-prone; debug use only.
    #[default]
    Verbatim,
    /// Escape `& < > " '` before embedding.
    Html,
}

impl EscapeMode {
    pub fn from_flag(escape_html: bool) -> Self {
        if escape_html {
            EscapeMode::Html
        } else {
            EscapeMode::Verbatim
        }
    }

    fn apply<'a>(self, s: &'a str) -> std::borrow::Cow<'a, str> {
        match self {
            EscapeMode::Verbatim => std::borrow::Cow::Borrowed(s),
            EscapeMode::Html => escape_html(s),
        }
    }
}

/// Escape the five HTML-significant characters. Borrows when nothing changes.
pub fn escape_html(s: &str) -> std::borrow::Cow<'_, str> {
    if !s.contains(|c: char| matches!(c, '&' | '<' | '>' | '"' | '\'')) {
        return std::borrow::Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    std::borrow::Cow::Owned(out)
}

/// Render the echo page for a captured request.
pub fn render_page(snap: &RequestSnapshot, mode: EscapeMode) -> String {
    let body = snap.body_text();
    let mut out = String::with_capacity(256 + body.len());

    out.push_str(BANNER);
    out.push_str("<h2>Headers</h2><pre>");
    for (name, value) in &snap.headers {
        let _ = write!(out, "{}: {}<br>", mode.apply(name), mode.apply(value));
    }
    out.push_str("</pre>");

    let _ = write!(out, "<h2>Method</h2><p>{}</p>", mode.apply(&snap.method));
    let _ = write!(out, "<h2>Body</h2><pre>{}</pre>", mode.apply(&body));
    out
}
