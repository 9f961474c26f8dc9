use std::{fs, path::Path};

use lazy_static::lazy_static;
use regex::Regex;

pub const DEFAULT_BASE_URL: &str = "https://parallax-labs.github.io/context-harness";

lazy_static! {
    static ref BASE_URL_LINE: Regex =
        Regex::new(r#"^base_url\s*=\s*["']([^"']+)["']"#).unwrap();
}

/// Site settings read from the zola-style `config.toml`.
///
/// Only `base_url` is consulted. The file is scanned line by line rather
/// than parsed, so anything that isn't a quoted `base_url = "..."` line is
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteConfig {
    base_url: Option<String>,
}

impl SiteConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
        }
    }

    /// Reads the config at `path`, falling back to the default base url if
    /// the file can't be read.
    pub fn read(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) => {
                tracing::warn!(
                    "could not read {}: {e}, using default base url",
                    path.display()
                );
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Self {
        Self {
            base_url: content
                .lines()
                .find_map(|line| BASE_URL_LINE.captures(line))
                .map(|captures| captures[1].to_string()),
        }
    }

    /// The configured base url without trailing slashes.
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    /// Prefers `other`'s base url when it has one.
    pub fn extends(self, other: SiteConfig) -> Self {
        Self {
            base_url: other.base_url.or(self.base_url),
        }
    }
}
