use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

const DELIMITER: &str = "+++";

lazy_static! {
    static ref TITLE: Regex = Regex::new(r#"title\s*=\s*["']([^"']+)["']"#).unwrap();
    static ref DESCRIPTION: Regex =
        Regex::new(r#"description\s*=\s*["']([^"']+)["']"#).unwrap();
}

/// The metadata a page contributes to the search index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: String,
    pub description: String,
}

impl FrontMatter {
    /// Extracts the title and description from a page's `+++` block.
    ///
    /// Only quoted `title = "..."` and `description = "..."` lines are
    /// recognised, anything else in the block is skipped. When the block is
    /// missing or unterminated the title comes from `path`'s file name and
    /// the description is empty.
    pub fn extract(path: &Path, content: &str) -> Self {
        let mut front_matter = Self {
            title: default_title(path),
            description: String::new(),
        };

        let Some(block) = front_matter_block(content) else {
            return front_matter;
        };

        for line in block.split('\n') {
            let trimmed = line.trim();
            if trimmed.starts_with("title") {
                if let Some(captures) = TITLE.captures(line) {
                    front_matter.title = captures[1].to_string();
                }
            }
            if trimmed.starts_with("description") {
                if let Some(captures) = DESCRIPTION.captures(line) {
                    front_matter.description = captures[1].to_string();
                }
            }
        }

        front_matter
    }
}

/// The text strictly between the opening `+++` and the next `+++`.
fn front_matter_block(content: &str) -> Option<&str> {
    let rest = content.strip_prefix(DELIMITER)?;
    let end = rest.find(DELIMITER)?;
    Some(&rest[..end])
}

/// `getting-started_guide.md` becomes `Getting Started Guide`.
pub fn default_title(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    title_case(&stem.replace(['-', '_'], " "))
}

/// Titlecases the first cased letter after any uncased character and
/// lowercases the rest, so `hello world2go` becomes `Hello World2Go` and
/// `日本guide` becomes `日本Guide`.
fn title_case(s: &str) -> String {
    let mut titled = String::with_capacity(s.len());
    let mut in_word = false;
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if !in_word {
            push_titlecase(&mut titled, c);
        } else if c == 'Σ' && !chars.peek().copied().is_some_and(is_cased) {
            titled.push('ς');
        } else {
            titled.extend(c.to_lowercase());
        }
        in_word = is_cased(c);
    }
    titled
}

fn is_titlecase(c: char) -> bool {
    matches!(
        c,
        '\u{01C5}'
            | '\u{01C8}'
            | '\u{01CB}'
            | '\u{01F2}'
            | '\u{1F88}'..='\u{1F8F}'
            | '\u{1F98}'..='\u{1F9F}'
            | '\u{1FA8}'..='\u{1FAF}'
            | '\u{1FBC}'
            | '\u{1FCC}'
            | '\u{1FFC}'
    )
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase() || is_titlecase(c)
}

/// Pushes the titlecase form of `c`, which only differs from its uppercase
/// form for ligatures, digraphs and greek letters with ypogegrammeni.
fn push_titlecase(titled: &mut String, c: char) {
    let ligature = match c {
        'ß' => "Ss",
        '\u{FB00}' => "Ff",
        '\u{FB01}' => "Fi",
        '\u{FB02}' => "Fl",
        '\u{FB03}' => "Ffi",
        '\u{FB04}' => "Ffl",
        '\u{FB05}' | '\u{FB06}' => "St",
        '\u{0587}' => "\u{0535}\u{0582}",
        '\u{FB13}' => "\u{0544}\u{0576}",
        '\u{FB14}' => "\u{0544}\u{0565}",
        '\u{FB15}' => "\u{0544}\u{056B}",
        '\u{FB16}' => "\u{054E}\u{0576}",
        '\u{FB17}' => "\u{0544}\u{056D}",
        _ => "",
    };
    if !ligature.is_empty() {
        titled.push_str(ligature);
        return;
    }

    match c {
        '\u{01C4}'..='\u{01C6}' => titled.push('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => titled.push('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => titled.push('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => titled.push('\u{01F2}'),
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            titled.push(char::from_u32(c as u32 + 8).unwrap_or(c))
        }
        '\u{1FB3}' => titled.push('\u{1FBC}'),
        '\u{1FC3}' => titled.push('\u{1FCC}'),
        '\u{1FF3}' => titled.push('\u{1FFC}'),
        c if is_titlecase(c) => titled.push(c),
        c => titled.extend(c.to_uppercase()),
    }
}
