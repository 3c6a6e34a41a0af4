//! Presentation of a URL list.
//!
//! Renderers only consume `ImageUrl`s; they never touch the network. The
//! HTML renderer produces a standalone page with a `grid` element holding one
//! `<img>` per URL.

mod html;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::image_url::ImageUrl;

pub use html::{escape_attr, render_html};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One URL per line.
    #[default]
    Plain,
    /// JSON array of URL strings.
    Json,
    /// HTML page with an image grid.
    Html,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" | "text" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            "html" => Ok(OutputFormat::Html),
            other => Err(format!(
                "unknown format {other:?} (expected plain, json or html)"
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Json => "json",
            OutputFormat::Html => "html",
        };
        f.write_str(s)
    }
}

pub fn render(urls: &[ImageUrl], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(render_plain(urls)),
        OutputFormat::Json => render_json(urls),
        OutputFormat::Html => Ok(render_html(urls)),
    }
}

fn render_plain(urls: &[ImageUrl]) -> String {
    let mut out = String::new();
    for u in urls {
        out.push_str(u.as_str());
        out.push('\n');
    }
    out
}

fn render_json(urls: &[ImageUrl]) -> Result<String> {
    let list: Vec<&str> = urls.iter().map(ImageUrl::as_str).collect();
    let mut out = serde_json::to_string_pretty(&list)?;
    out.push('\n');
    Ok(out)
}
