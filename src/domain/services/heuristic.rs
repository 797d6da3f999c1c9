//! Full heuristic pass: turns noisy OCR lines into scored item candidates.

use super::text::{
    is_header_like, letter_density, normalize_whitespace, score, split_comma_list, split_name,
    strip_bullets, strip_parentheticals, strip_price, trim_residual, MIN_LETTER_DENSITY,
};
use crate::domain::model::Candidate;
use std::collections::HashSet;

/// Per-call state: the case-insensitive dedupe set and the id counter.
#[derive(Debug, Default)]
struct Emitter {
    seen: HashSet<String>,
    next_id: usize,
    candidates: Vec<Candidate>,
}

impl Emitter {
    fn emit(&mut self, name: &str, original: &str) {
        if name.is_empty() || !self.seen.insert(name.to_lowercase()) {
            return;
        }

        self.candidates.push(Candidate {
            id: self.next_id.to_string(),
            name: name.to_string(),
            original: original.to_string(),
            score: score(letter_density(name)),
        });
        self.next_id += 1;
    }
}

/// Cleans one line down to its name segment, or `None` if the line is dropped.
///
/// Runs everything up to and including the letter-density filter; comma lists
/// are still joined in the returned segment.
pub fn clean_line(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }

    let s = normalize_whitespace(raw);
    if is_header_like(&s) {
        tracing::trace!(line = %s, "header dropped");
        return None;
    }

    let s = strip_bullets(&s);
    let s = strip_parentheticals(&s);
    let name = strip_price(split_name(&s));
    let name = trim_residual(&name);

    if name.is_empty() {
        return None;
    }
    if letter_density(name) < MIN_LETTER_DENSITY {
        tracing::trace!(segment = %name, "low letter density");
        return None;
    }

    Some(name.to_string())
}

/// Extract probable menu item names from OCR lines.
///
/// Never fails: malformed input only yields fewer candidates. Names are unique
/// case-insensitively, ids count up from `0` in emission order.
pub fn extract_items<S: AsRef<str>>(lines: &[S]) -> Vec<Candidate> {
    let mut emitter = Emitter::default();

    for raw in lines {
        let raw = raw.as_ref();
        let Some(segment) = clean_line(raw) else {
            continue;
        };

        for part in split_comma_list(&segment) {
            emitter.emit(&part, raw);
        }
    }

    tracing::debug!(
        lines = lines.len(),
        candidates = emitter.candidates.len(),
        "heuristic extraction finished"
    );
    emitter.candidates
}
