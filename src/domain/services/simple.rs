//! Coarse pass for text that is already mostly clean.
//!
//! No header detection, bullet stripping or comma splitting: lines are only
//! length-checked, price-stripped and de-duplicated.

use crate::domain::model::ParsedLine;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static CURRENCY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[$\x{00A3}\x{20AC}]\s*\d+|\d+\s*(?:USD|EUR|GBP)").expect("currency regex")
});

/// Remove `$12`, `£3`, `45 USD` style tokens and trim what is left.
pub fn strip_currency(s: &str) -> String {
    CURRENCY_RE.replace_all(s, "").trim().to_string()
}

/// Filter lines into unique item texts; ids are the source line indexes.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Vec<ParsedLine> {
    let mut items = Vec::new();
    let mut seen = HashSet::new();

    for (i, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        if line.chars().count() < 2 {
            continue;
        }

        let text = if CURRENCY_RE.is_match(line) {
            let cleaned = strip_currency(line);
            if cleaned.is_empty() {
                continue;
            }
            cleaned
        } else {
            line.to_string()
        };

        if !seen.insert(text.to_lowercase()) {
            continue;
        }
        items.push(ParsedLine {
            id: i.to_string(),
            text,
        });
    }

    tracing::debug!(lines = lines.len(), items = items.len(), "simple parse finished");
    items
}
