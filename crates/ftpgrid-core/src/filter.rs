//! Filename suffix filter.

/// Selects names ending in one of a set of suffixes.
///
/// Matching is a plain suffix test: no MIME sniffing, no deduplication.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    extensions: Vec<String>,
    case_sensitive: bool,
}

impl ExtensionFilter {
    pub fn new<I, S>(extensions: I, case_sensitive: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|e| {
                if case_sensitive {
                    e.as_ref().to_string()
                } else {
                    e.as_ref().to_ascii_lowercase()
                }
            })
            .filter(|e| !e.is_empty())
            .collect();
        Self {
            extensions,
            case_sensitive,
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        if self.case_sensitive {
            self.extensions.iter().any(|e| name.ends_with(e.as_str()))
        } else {
            let lower = name.to_ascii_lowercase();
            self.extensions.iter().any(|e| lower.ends_with(e.as_str()))
        }
    }
}

/// Keeps the names accepted by `filter`, in listing order.
pub fn filter_images<I>(names: I, filter: &ExtensionFilter) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    names.into_iter().filter(|n| filter.matches(n)).collect()
}

/// Prefixes a `.` when the user wrote a bare extension (`png` -> `.png`).
pub fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim();
    if ext.is_empty() || ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}
