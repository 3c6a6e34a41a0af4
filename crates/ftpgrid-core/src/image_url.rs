//! `ftp://` URLs for listed images.

use std::fmt;

/// An `ftp://<host>/<filename>` reference to one image.
///
/// Built by plain concatenation: the filename is neither escaped nor encoded,
/// and the working directory is not part of the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrl {
    url: String,
    file_name: String,
}

impl ImageUrl {
    pub fn as_str(&self) -> &str {
        &self.url
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl AsRef<str> for ImageUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

pub fn image_url(host: &str, file_name: &str) -> ImageUrl {
    ImageUrl {
        url: format!("ftp://{host}/{file_name}"),
        file_name: file_name.to_string(),
    }
}
