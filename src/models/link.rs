/// A resolved hyperlink: the target URL and the text shown for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub url: String,
    pub label: String,
}

impl Link {
    /// Builds the link for one subdirectory: the URL is the prefix and the
    /// name concatenated as-is (no separator is inserted between them), the
    /// label is the bare name.
    pub fn from_name(prefix: &str, name: &str) -> Link {
        Link {
            url: format!("{prefix}{name}"),
            label: name.to_string(),
        }
    }
}
