//! Standalone HTML page with an image grid.

use crate::image_url::ImageUrl;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>ftpgrid</title>
<style>
#grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(160px, 1fr)); gap: 8px; }
#grid img { width: 100%; height: auto; }
</style>
</head>
<body>
<div id="grid">
"#;

const PAGE_TAIL: &str = "</div>\n</body>\n</html>\n";

/// Escapes `&`, `<`, `>`, `"` and `'` for use inside a double-quoted attribute.
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Page with one `<img>` per URL inside `<div id="grid">`. No URLs, empty grid.
pub fn render_html(urls: &[ImageUrl]) -> String {
    let mut out = String::from(PAGE_HEAD);
    for u in urls {
        out.push_str(&format!(
            "  <img src=\"{}\" alt=\"{}\">\n",
            escape_attr(u.as_str()),
            escape_attr(u.file_name())
        ));
    }
    out.push_str(PAGE_TAIL);
    out
}
