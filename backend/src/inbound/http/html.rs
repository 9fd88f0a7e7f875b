//! Shared HTML building blocks for the server-rendered views.
//!
//! Pages are assembled from plain strings. Every piece of upstream text must
//! pass through [`escape`] before it is interpolated.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;

use crate::domain::{AvatarUrls, Error};

const STYLES: &str = "\
body{font-family:system-ui,sans-serif;margin:0;color:#212121;background:#fafafa}\
header{background:#3f51b5;padding:0 1.5rem;display:flex;gap:1.5rem;align-items:center}\
header a{color:#fff;text-decoration:none;line-height:3.5rem}\
header a.brand{font-weight:600;margin-right:auto}\
main{max-width:72rem;margin:0 auto;padding:1.5rem}\
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(180px,1fr));gap:1rem}\
.card{background:#fff;border-radius:6px;box-shadow:0 1px 3px rgba(0,0,0,.15);overflow:hidden}\
.card .body{padding:.5rem .75rem}\
.card a{color:inherit}\
img.loading{background:#e0e0e0}\
img.thumb{display:block;width:100%;aspect-ratio:1/1;object-fit:cover}\
img.large{display:block;max-width:100%;width:600px;aspect-ratio:3/2;object-fit:cover}\
img.avatar{border-radius:50%;vertical-align:middle}\
table{border-collapse:collapse;width:100%;background:#fff}\
th,td{text-align:left;padding:.5rem;border-bottom:1px solid #e0e0e0}\
nav.pages{display:flex;gap:.25rem;margin:1rem 0;flex-wrap:wrap}\
nav.pages a,nav.pages span{padding:.25rem .6rem;border:1px solid #c5cae9;border-radius:4px;text-decoration:none}\
nav.pages span.current{background:#3f51b5;color:#fff}\
.toggle a{margin-right:.75rem}\
.toggle a.active{font-weight:600}\
.viewer{background:#fff;padding:1rem;margin-bottom:1.5rem;border-radius:6px}\
nav.crumbs{margin-bottom:.5rem;color:#757575}\
.muted{color:#757575}\
.empty{padding:2rem;text-align:center;color:#757575}";

/// Escape text for use in element content and double-quoted attributes.
///
/// # Examples
/// ```
/// use gallery::inbound::http::html::escape;
///
/// assert_eq!(escape(r#"<b>"Tom" & 'Jerry'</b>"#), "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
/// ```
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Wrap `body` in the site chrome.
#[must_use]
pub fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title} | Gallery</title>\n<style>{STYLES}</style>\n</head>\n<body>\n\
         <header><a class=\"brand\" href=\"/\">Gallery</a>\
         <a href=\"/albums\">Albums</a><a href=\"/users\">Users</a></header>\n\
         <main>\n{body}\n</main>\n</body>\n</html>\n",
        title = escape(title),
    )
}

/// Avatar `<img>` whose alt text is the user's initials.
#[must_use]
pub fn avatar_img(avatars: &AvatarUrls, name: &str, size: u32) -> String {
    let avatar = avatars.avatar(name, size);
    format!(
        "<img class=\"avatar\" src=\"{url}\" alt=\"{initials}\" title=\"{name}\" \
         width=\"{size}\" height=\"{size}\">",
        url = escape(&avatar.url),
        initials = escape(&avatar.initials),
        name = escape(name),
    )
}

/// Full error page for a domain error. Internal errors are redacted.
#[must_use]
pub fn error_page(error: &Error) -> String {
    let shown = error.redacted();
    let trace = shown.trace_id().map_or_else(String::new, |id| {
        format!("<p class=\"muted\">Reference: <code>{}</code></p>", escape(id))
    });
    let body = format!(
        "<h1>{title}</h1>\n<p>{message}</p>\n{trace}<p><a href=\"/\">Back to the gallery</a></p>",
        title = escape(shown.code().title()),
        message = escape(shown.message()),
    );
    layout(shown.code().title(), &body)
}

/// `text/html` response with the given status.
#[must_use]
pub fn html_response(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body)
}

#[cfg(test)]
mod tests {
    //! Escaping and page chrome.

    use super::*;
    use rstest::rstest;
    use url::Url;

    #[rstest]
    #[case("plain", "plain")]
    #[case("a<b", "a&lt;b")]
    #[case("\"quoted\"", "&quot;quoted&quot;")]
    #[case("rock & roll", "rock &amp; roll")]
    fn escapes_markup_characters(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(escape(raw), expected);
    }

    #[test]
    fn layout_escapes_the_title() {
        let page = layout("<script>", "<p>body</p>");
        assert!(page.contains("<title>&lt;script&gt; | Gallery</title>"));
        assert!(page.contains("<p>body</p>"));
    }

    #[test]
    fn internal_error_pages_hide_the_message() {
        let page = error_page(&Error::internal("secret detail").with_trace_id("t-1"));
        assert!(!page.contains("secret detail"));
        assert!(page.contains("Internal server error"));
        assert!(page.contains("t-1"));
    }

    #[test]
    fn avatar_alt_text_is_initials() {
        let avatars = AvatarUrls::new(Url::parse("https://ui-avatars.com/api/").expect("url"));
        let img = avatar_img(&avatars, "Jane Doe", 40);
        assert!(img.contains("alt=\"JD\""));
        assert!(img.contains("name=Jane%20Doe&amp;size=40&amp;background=random"));
    }
}
