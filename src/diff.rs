use console::{style, Style};
use similar::{ChangeTag, TextDiff};

/// Renders the unified line diff from the index on disk to a freshly built
/// one, or `None` when they are identical.
#[must_use]
pub fn diff(on_disk: &str, fresh: &str) -> Option<String> {
    if on_disk == fresh {
        return None;
    }

    let index_diff = TextDiff::from_lines(on_disk, fresh);
    let mut rendered = String::new();

    for hunk in index_diff.unified_diff().iter_hunks() {
        rendered.push_str(&format!("{}\n", style(hunk.header()).cyan()));
        for change in hunk.iter_changes() {
            let (sign, line_style) = match change.tag() {
                ChangeTag::Delete => ('-', Style::new().red()),
                ChangeTag::Insert => ('+', Style::new().green()),
                ChangeTag::Equal => (' ', Style::new().dim()),
            };
            let line = change.value().trim_end_matches('\n');
            rendered.push_str(&format!("{}\n", line_style.apply_to(format!("{sign}{line}"))));
        }
    }

    Some(rendered)
}
