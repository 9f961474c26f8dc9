use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    error::{IndexError, Result},
    front_matter::FrontMatter,
    route::page_url,
    site_index::IndexEntry,
    util::route_path,
};

/// A page under the content root.
pub struct MarkdownFile {
    /// Path relative to the content root.
    relative_path: PathBuf,
    content: String,
}

impl MarkdownFile {
    pub fn at_path(content_root: &Path, path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| IndexError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let relative_path = path.strip_prefix(content_root).unwrap_or(path).to_path_buf();
        Ok(Self {
            relative_path,
            content,
        })
    }

    pub fn front_matter(&self) -> FrontMatter {
        FrontMatter::extract(&self.relative_path, &self.content)
    }

    pub fn url(&self, base_url: &str) -> String {
        page_url(&route_path(&self.relative_path), base_url)
    }

    pub fn index_entry(&self, base_url: &str) -> IndexEntry {
        let FrontMatter { title, description } = self.front_matter();
        IndexEntry {
            title,
            url: self.url(base_url),
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn builds_entry_from_front_matter_and_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("docs/getting-started.md");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            indoc! {r#"
                +++
                title = "Quick Start"
                description = "Install and run"
                +++
                # Quick Start
            "#},
        )
        .unwrap();

        let file = MarkdownFile::at_path(dir.path(), &path).unwrap();

        assert_eq!(Path::new("docs/getting-started.md"), file.relative_path);
        assert_eq!(
            IndexEntry {
                title: "Quick Start".to_string(),
                url: "https://x.test/docs/getting-started/".to_string(),
                description: "Install and run".to_string(),
            },
            file.index_entry("https://x.test")
        );
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.md");
        let result = MarkdownFile::at_path(dir.path(), &path);
        assert!(matches!(result, Err(IndexError::Read { .. })));
    }
}
