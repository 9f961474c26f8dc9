//! Maps content files to the urls zola serves them at.

const SECTION_INDEX: &str = "_index.md";

/// Derives the absolute url of a page from its path relative to the content
/// root.
///
/// `docs/_index.md` is the section page served at `<base>/docs/`, any other
/// file is served under its own stem, e.g. `docs/guide.md` at
/// `<base>/docs/guide/`. A top-level `_index.md` yields `<base>//`.
pub fn page_url(relative_path: &str, base_url: &str) -> String {
    let normalized = relative_path.replace('\\', "/");
    let (parent, file_name) = normalized
        .rsplit_once('/')
        .unwrap_or(("", normalized.as_str()));

    let route = if file_name == SECTION_INDEX {
        parent.to_string()
    } else {
        let stem = file_name.replace(".md", "");
        if parent.is_empty() {
            stem
        } else {
            format!("{parent}/{stem}")
        }
    };

    format!("{base_url}/{route}/")
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    const BASE: &str = "https://x.test";

    macro_rules! page_url_tests {
        ($($name:ident $path:expr => $expected:expr)*) => {
        $(
            #[test]
            fn $name() {
                assert_eq!($expected, page_url($path, BASE));
            }
        )*
        }
    }

    page_url_tests! {
        section_index "docs/_index.md" => "https://x.test/docs/"
        nested_section_index "docs/guides/_index.md" => "https://x.test/docs/guides/"
        page "docs/guide.md" => "https://x.test/docs/guide/"
        top_level_page "about.md" => "https://x.test/about/"
        deeply_nested_page "a/b/c/d.md" => "https://x.test/a/b/c/d/"
        top_level_section_index "_index.md" => "https://x.test//"
        backslashes_normalized "docs\\guides\\setup.md" => "https://x.test/docs/guides/setup/"
        index_without_underscore "docs/index.md" => "https://x.test/docs/index/"
        every_md_removed "notes.md.md" => "https://x.test/notes/"
        dotted_stem "release-1.2.md" => "https://x.test/release-1.2/"
    }

    proptest! {
        #[test]
        fn url_is_rooted_at_base_and_ends_with_slash(
            dirs in prop::collection::vec("[a-z0-9-]{1,8}", 0..4),
            stem in "[a-z0-9-]{1,12}",
        ) {
            let mut path = dirs;
            path.push(format!("{stem}.md"));
            let url = page_url(&path.join("/"), BASE);

            prop_assert!(url.starts_with("https://x.test/"));
            prop_assert!(url.ends_with('/'));
            prop_assert!(!url.ends_with("//"));
            prop_assert!(url.trim_end_matches('/').ends_with(&stem));
        }

        #[test]
        fn section_index_maps_to_its_directory(
            dirs in prop::collection::vec("[a-z0-9-]{1,8}", 1..4),
        ) {
            let mut path = dirs.clone();
            path.push(SECTION_INDEX.to_string());
            let url = page_url(&path.join("/"), BASE);

            prop_assert_eq!(url, format!("{BASE}/{}/", dirs.join("/")));
        }
    }
}
