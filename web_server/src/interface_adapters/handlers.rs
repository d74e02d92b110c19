use axum::{http::Uri, response::Html};

// Page rendering lives in the front-end bundle; the server only hands back
// a shell that names the requested route.
pub async fn page_shell(uri: Uri) -> Html<String> {
    let path = escape_html(uri.path());
    Html(format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>Konsulin</title></head>\
         <body><div id=\"app\" data-route=\"{path}\"></div></body></html>"
    ))
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
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
