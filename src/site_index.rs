use std::path::Path;

use serde::Serialize;

use crate::{
    config::SiteConfig,
    error::Result,
    markdown_file::MarkdownFile,
    util::{atomic_write, is_internal, markdown_files},
};

/// One record of `site-index.json`, as read by the search widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    pub title: String,
    pub url: String,
    pub description: String,
}

impl IndexEntry {
    fn new(title: &str, url: String, description: &str) -> Self {
        Self {
            title: title.to_string(),
            url,
            description: description.to_string(),
        }
    }
}

/// Pages that have no content file of their own.
pub fn static_entries(base_url: &str) -> [IndexEntry; 2] {
    [
        IndexEntry::new(
            "Context Harness",
            format!("{base_url}/"),
            "Local-first context engine for AI tools",
        ),
        IndexEntry::new(
            "Demo",
            format!("{base_url}/demo/"),
            "Search a pre-built knowledge base in your browser",
        ),
    ]
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SiteIndex {
    pub entries: Vec<IndexEntry>,
}

impl SiteIndex {
    /// Scans `content_root` and collects the static entries followed by one
    /// entry per routable page, in path order.
    pub fn build(content_root: &Path, config: &SiteConfig) -> Result<Self> {
        let base_url = config.base_url();
        tracing::info!("indexing {} with base url {base_url}", content_root.display());

        let mut entries = Vec::from(static_entries(base_url));

        for path in markdown_files(content_root)? {
            let relative_path = path.strip_prefix(content_root).unwrap_or(&path);
            if is_internal(relative_path) {
                tracing::debug!("skipping {}", relative_path.display());
                continue;
            }

            let entry = MarkdownFile::at_path(content_root, &path)?.index_entry(base_url);
            tracing::debug!("indexed {} as {}", relative_path.display(), entry.url);
            entries.push(entry);
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The index as a JSON array indented by two spaces.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    /// Replaces whatever is at `output` with the index.
    pub fn write(&self, output: &Path) -> Result<()> {
        atomic_write(output, &self.to_json()?)?;
        tracing::info!("wrote {} entries to {}", self.len(), output.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn static_entries_use_base_url() {
        let [home, demo] = static_entries("https://x.test");
        assert_eq!("Context Harness", home.title);
        assert_eq!("https://x.test/", home.url);
        assert_eq!("Demo", demo.title);
        assert_eq!("https://x.test/demo/", demo.url);
    }

    #[test]
    fn json_is_pretty_printed_with_ordered_keys() {
        let index = SiteIndex {
            entries: vec![IndexEntry::new(
                "Guide",
                "https://x.test/guide/".to_string(),
                "",
            )],
        };

        assert_eq!(
            indoc! {r#"
                [
                  {
                    "title": "Guide",
                    "url": "https://x.test/guide/",
                    "description": ""
                  }
                ]"#},
            index.to_json().unwrap()
        );
    }

    #[test]
    fn empty_index_serializes_to_empty_array() {
        assert_eq!("[]", SiteIndex::default().to_json().unwrap());
    }
}
