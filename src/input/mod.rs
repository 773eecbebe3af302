//! Command-line note input parsing.
//!
//! Splits the words typed after `ink` into the note body and its tags.
//! A word that starts with `#` on its own is a tag; `#words` inside the
//! body are tags too but stay in the text.

use crate::storage::models::normalize_tag;

/// Punctuation trimmed from the end of tags found inside the note text.
const SENTENCE_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', '"', '\''];

/// A parsed note: body text plus deduplicated tag tokens (each `#`-prefixed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteInput {
    pub text: String,
    pub tags: Vec<String>,
}

/// Parses the words of an add command into a note body and tags.
///
/// Standalone `#tag` words are removed from the body. If the remaining body
/// is wrapped in a single pair of double quotes, that pair is stripped. Tags
/// are kept in first-seen order without duplicates.
pub fn parse_note_input<S: AsRef<str>>(words: &[S]) -> NoteInput {
    let mut tags = Vec::new();
    let mut body_words = Vec::new();

    for word in words {
        let word = word.as_ref();
        if is_tag_token(word) {
            push_unique(&mut tags, word.to_string());
        } else {
            body_words.push(word);
        }
    }

    let text = strip_wrapping_quotes(body_words.join(" ").trim()).to_string();

    for token in text.split_whitespace() {
        let token = token.trim_end_matches(SENTENCE_PUNCTUATION);
        if is_tag_token(token) {
            push_unique(&mut tags, token.to_string());
        }
    }

    NoteInput { text, tags }
}

/// Turns tag arguments (`#rust` or `rust`) into deduplicated `#`-prefixed tags.
///
/// Arguments that are empty after normalization are dropped.
pub fn parse_tag_args<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    let mut tags = Vec::new();
    for arg in args {
        if let Some(name) = normalize_tag(arg.as_ref()) {
            push_unique(&mut tags, format!("#{name}"));
        }
    }
    tags
}

fn is_tag_token(word: &str) -> bool {
    word.len() > 1 && word.starts_with('#') && !word.chars().any(char::is_whitespace)
}

fn strip_wrapping_quotes(text: &str) -> &str {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

fn push_unique(tags: &mut Vec<String>, tag: String) {
    if !tags.contains(&tag) {
        tags.push(tag);
    }
}
