//! Pure text transforms used by the line classifier.
//!
//! Every step of the heuristic pass lives here as its own function so each
//! filter can be exercised on its own.

use regex::Regex;
use std::sync::LazyLock;

/// Section words that mark a line as a menu header rather than an item.
pub const SECTION_KEYWORDS: &[&str] = &[
    "veg",
    "non-veg",
    "vegetarian",
    "non vegetarian",
    "snacks",
    "beverages",
    "drinks",
    "rice",
    "dessert",
    "starters",
    "mains",
    "sides",
    "salads",
    "soups",
    "curries",
    "thali",
    "menu",
    "specials",
    "combo",
    "set",
    "kitchen",
];

/// Lines whose letter density falls below this are treated as numeric noise.
pub const MIN_LETTER_DENSITY: f64 = 0.4;

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex"));

static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\-\x{2022}\*\d\)\.]+\s*").expect("bullet regex"));

static PAREN_GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*?\)").expect("paren group regex"));

static NAME_SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s{2,}|\s[\-\x{2013}\x{2014}:]\s|\s\|\s|\t").expect("separator regex")
});

static LETTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}").expect("letter regex"));

static PRICE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\x{20B9}|Rs\.?|INR|\$|\x{20AC}|\x{00A3})?\s*[0-9]+(?:[.,][0-9]{1,2})?\s*(?:/-)?")
        .expect("price regex")
});

/// Collapse every whitespace run into a single ASCII space and trim the ends.
pub fn normalize_whitespace(s: &str) -> String {
    WHITESPACE_RE.replace_all(s, " ").trim().to_string()
}

fn is_all_upper(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

fn is_all_digits(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_numeric)
}

/// Short all-caps titles such as `VEG SNACKS`, or anything naming a menu section.
///
/// The word-shape rule looks at the whole line. The keyword rule only looks at
/// the name segment (see [`split_name`]) so a description like
/// `"- spicy rice dish"` does not turn an item into a header.
pub fn is_header_like(s: &str) -> bool {
    let t = s.trim();
    if t.is_empty() {
        return true;
    }

    let words: Vec<&str> = t.split_whitespace().collect();
    if words.len() <= 4
        && words
            .iter()
            .all(|w| is_all_upper(w) || is_all_digits(w) || w.chars().count() <= 3)
    {
        return true;
    }

    contains_section_keyword(split_name(t))
}

/// Case-insensitive substring check against [`SECTION_KEYWORDS`].
pub fn contains_section_keyword(s: &str) -> bool {
    let lower = s.to_lowercase();
    SECTION_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Drop a leading run of bullets or ordinals, e.g. `"2) "`, `"- "`, `"12. "`.
pub fn strip_bullets(s: &str) -> String {
    BULLET_RE.replace(s, "").into_owned()
}

/// Remove an unbalanced leading `(` or trailing `)`, then every `(...)` group.
pub fn strip_parentheticals(s: &str) -> String {
    let opens = s.matches('(').count();
    let closes = s.matches(')').count();

    let mut t = s;
    if opens > closes {
        t = t.strip_prefix('(').unwrap_or(t);
    }
    if closes > opens {
        t = t.strip_suffix(')').unwrap_or(t);
    }

    PAREN_GROUP_RE.replace_all(t, "").trim().to_string()
}

/// First segment before a name/description separator.
pub fn split_name(s: &str) -> &str {
    NAME_SEPARATOR_RE.split(s).next().unwrap_or(s)
}

/// Remove every price token, with or without a currency marker.
pub fn strip_price(s: &str) -> String {
    PRICE_RE.replace_all(s, "").trim().to_string()
}

fn is_residual(c: char) -> bool {
    matches!(c, '.' | ',' | ':' | '-' | ' ')
}

/// Trim `.` `,` `:` `-` and spaces from both ends.
pub fn trim_residual(s: &str) -> &str {
    s.trim_matches(is_residual).trim()
}

/// Fraction of characters in the Unicode letter category (`L*`), any script.
///
/// Combining marks such as Indic vowel signs are not letters and only count
/// towards the total.
pub fn letter_density(s: &str) -> f64 {
    let total = s.chars().count();
    if total == 0 {
        return 0.0;
    }
    let letters = LETTER_RE.find_iter(s).count();
    letters as f64 / total as f64
}

/// Split a comma list into cleaned parts. A segment without commas yields itself.
pub fn split_comma_list(s: &str) -> Vec<String> {
    if !s.contains(',') {
        return vec![s.trim().to_string()];
    }
    s.split(',')
        .map(|part| trim_residual(&normalize_whitespace(part)).to_string())
        .collect()
}

/// Round to two decimals after clamping into `[0, 1]`.
///
/// Rounds the exact binary value with ties to even, so `0.625` gives `0.62`.
pub fn score(density: f64) -> f64 {
    let clamped = density.clamp(0.0, 1.0);
    format!("{:.2}", clamped).parse().unwrap_or(clamped)
}
