//! Human-readable titles derived from map file names.
//!
//! Map files are named in kebab case (`ancient-ruins.dd2vtt`), so the title
//! is recovered from the file name alone, without looking at the content.

use std::path::Path;

/// Derive a page title from a map file path.
///
/// # Rules
/// 1. Take the file name (directories are ignored)
/// 2. Strip a trailing `.{extension}` if present
/// 3. Replace every `-` with a space
/// 4. Title-case the result (see [`titlecase`])
///
/// Underscores are kept as-is: `sewer_map.dd2vtt` becomes `Sewer_Map`.
#[must_use]
pub fn title_from_path(path: &Path, extension: &str) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();

    let suffix = format!(".{extension}");
    let stem = name.strip_suffix(suffix.as_str()).unwrap_or(&name);

    titlecase(&stem.replace('-', " "))
}

/// Capitalize the first letter of every word, leaving other letters intact.
///
/// A word is a run of alphanumeric characters and apostrophes, so any other
/// character (whitespace, `_`, `.`, `(`) starts a new word. Letters after the
/// first keep their original casing: `the DM's lair` becomes `The DM's Lair`.
#[must_use]
pub fn titlecase(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;

    for c in text.chars() {
        if is_word_char(c) {
            if word_start {
                push_titlecase(&mut out, c);
            } else {
                out.push(c);
            }
            word_start = false;
        } else {
            out.push(c);
            word_start = true;
        }
    }

    out
}

/// Title-case mapping for a word's first character. Digraph letters have
/// dedicated title-case forms; a multi-char uppercase expansion keeps only
/// its first char uppercase (`ß` becomes `Ss`).
fn push_titlecase(out: &mut String, c: char) {
    match c {
        '\u{01C4}'..='\u{01C6}' => out.push('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => out.push('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => out.push('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => out.push('\u{01F2}'),
        _ => {
            let mut upper = c.to_uppercase();
            if let Some(first) = upper.next() {
                out.push(first);
            }
            out.extend(upper.flat_map(char::to_lowercase));
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\'' || c == '\u{2019}'
}
