use lazy_static::lazy_static;
use regex::Regex;

use crate::data::models::VocabDraft;

lazy_static! {
    // Word (pos) - meaning
    static ref WITH_POS_RE: Regex =
        Regex::new(r"^\s*([A-Za-z\-' ]+)\s*\(([^)]+)\)\s*[-–—]\s*(.+)$").unwrap();
    // Word - meaning
    static ref WITHOUT_POS_RE: Regex =
        Regex::new(r"^\s*([A-Za-z\-' ]+)\s*[-–—]\s*(.+)$").unwrap();
    // Any line boundary, including lone `\r` and Unicode separators
    static ref LINE_BREAK_RE: Regex =
        Regex::new(r"\r\n|[\n\r\x0b\x0c\x1c-\x1e\x{85}\x{2028}\x{2029}]").unwrap();
}

/// Maps free-form part-of-speech text to its canonical abbreviation.
///
/// Lookup ignores case, surrounding whitespace and periods. Unknown tags
/// are returned trimmed with their original casing.
pub fn normalize_pos(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let key = trimmed.to_lowercase().replace('.', "");
    let canonical = match key.as_str() {
        "n" | "noun" => "n.",
        "v" | "verb" => "v.",
        "adj" | "adjective" => "adj.",
        "adv" | "adverb" => "adv.",
        "pron" | "pronoun" => "pron.",
        "prep" | "preposition" => "prep.",
        "conj" | "conjunction" => "conj.",
        "interj" | "interjection" => "interj.",
        _ => trimmed,
    };
    canonical.to_string()
}

/// Trim, lower-case and collapse whitespace runs to a single space.
pub fn canon(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Parses one line; `None` when neither layout matches.
pub fn parse_line(line: &str) -> Option<VocabDraft> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(caps) = WITH_POS_RE.captures(line) {
        return Some(VocabDraft::new(
            caps[1].trim(),
            normalize_pos(&caps[2]),
            caps[3].trim(),
        ));
    }

    WITHOUT_POS_RE
        .captures(line)
        .map(|caps| VocabDraft::new(caps[1].trim(), "", caps[2].trim()))
}

/// Parses pasted text, one entry per recognised line.
///
/// Lines that match neither layout are dropped, so the result can be
/// shorter than the input. Callers enforce their own size cap.
pub fn parse_bulk(text: &str) -> Vec<VocabDraft> {
    LINE_BREAK_RE.split(text).filter_map(parse_line).collect()
}
