use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use walkdir::{DirEntry, WalkDir};

use crate::error::{IndexError, Result};

fn is_markdown(entry: &DirEntry) -> bool {
    let is_file =
        entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file());
    is_file && entry.file_name().to_string_lossy().ends_with(".md")
}

/// Every markdown file below `content_root`, sorted by path.
pub fn markdown_files(content_root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(content_root) {
        let entry = entry?;
        if is_markdown(&entry) {
            files.push(entry.into_path());
        }
    }
    // walk order depends on the platform
    files.sort();
    Ok(files)
}

/// Whether a content-relative path lives under a top-level `_` entry, like
/// `_drafts/post.md` or a top-level `_index.md`. Those aren't routable pages.
pub fn is_internal(relative_path: &Path) -> bool {
    match relative_path.components().next() {
        Some(Component::Normal(first)) => first.to_string_lossy().starts_with('_'),
        _ => false,
    }
}

/// The content-relative path with `/` separators, as used in urls.
pub fn route_path(relative_path: &Path) -> String {
    relative_path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Writes `content` to a sibling temp file and renames it over `path`,
/// creating parent directories as needed.
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let write_error = |source| IndexError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }

    let mut tmp_path = path.to_path_buf();
    tmp_path.set_extension("tmp.json");
    fs::write(&tmp_path, content).map_err(write_error)?;
    if let Err(source) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(write_error(source));
    }
    Ok(())
}
