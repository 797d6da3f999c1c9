use menu_extract::{extract_items, parse_lines};
use std::collections::HashSet;

/// A noisy board scan with headers, bullets, prices, phone numbers and repeats.
fn noisy_menu() -> Vec<&'static str> {
    vec![
        "SOUTH INDIAN",
        "1. Masala Dosa ........ 80",
        "2) Rava Idli (2 pcs)   \u{20B9}60/-",
        "- Medu Vada | Rs. 45",
        "   ",
        "Filter Coffee, Badam Milk, masala dosa",
        "Ph: 080 2345 6789",
        "Paneer Tikka    \u{20B9}180/-",
        "2) Chicken Biryani - spicy rice dish",
        "VEG SNACKS",
        "123456",
        "Onion Uttapam \u{2014} with chutney",
        "PANEER TIKKA roll",
    ]
}

#[test]
fn test_noisy_menu_end_to_end() {
    let candidates = extract_items(&noisy_menu());
    let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();

    assert_eq!(
        names,
        vec![
            "Masala Dosa",
            "Rava Idli",
            "Medu Vada",
            "Filter Coffee",
            "Badam Milk",
            "Paneer Tikka",
            "Chicken Biryani",
            "Onion Uttapam",
            "PANEER TIKKA roll",
        ]
    );

    for (i, c) in candidates.iter().enumerate() {
        assert_eq!(c.id, i.to_string());
        assert!((0.0..=1.0).contains(&c.score));
    }
}

#[test]
fn test_no_two_candidates_share_a_name() {
    let candidates = extract_items(&noisy_menu());
    let mut seen = HashSet::new();
    for c in &candidates {
        assert!(seen.insert(c.name.to_lowercase()), "duplicate {}", c.name);
    }
}

#[test]
fn test_names_are_never_empty_or_numeric() {
    let candidates = extract_items(&noisy_menu());
    for c in &candidates {
        assert!(!c.name.is_empty());
        assert!(c.name.chars().any(char::is_alphabetic));
    }
}

#[test]
fn test_original_is_the_untouched_source_line() {
    let candidates = extract_items(&noisy_menu());
    let coffee = candidates.iter().find(|c| c.name == "Filter Coffee").unwrap();
    assert_eq!(coffee.original, "Filter Coffee, Badam Milk, masala dosa");

    let idli = candidates.iter().find(|c| c.name == "Rava Idli").unwrap();
    assert_eq!(idli.original, "2) Rava Idli (2 pcs)   \u{20B9}60/-");
}

#[test]
fn test_clean_names_are_stable_when_reprocessed() {
    let first = extract_items(&noisy_menu());
    for c in &first {
        let again = extract_items(&[c.name.as_str()]);
        assert_eq!(again.len(), 1, "{} was dropped on re-run", c.name);
        assert_eq!(again[0].name, c.name);
        assert_eq!(again[0].score, c.score);
    }
}

#[test]
fn test_header_lines_never_produce_candidates() {
    for header in ["VEG SNACKS", "STARTERS", "NON-VEG CURRIES", "Today's Specials", "MAINS 2"] {
        assert!(extract_items(&[header]).is_empty(), "{} produced output", header);
    }
}

#[test]
fn test_concurrent_calls_do_not_share_state() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| extract_items(&["Tea, Coffee, Lassi"])))
        .collect();

    for handle in handles {
        let candidates = handle.join().unwrap();
        let ids: Vec<&str> = candidates.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "2"]);
    }
}

#[test]
fn test_candidates_serialize_with_expected_keys() {
    let candidates = extract_items(&["Paneer Tikka    \u{20B9}180/-"]);
    let json = serde_json::to_value(&candidates).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "id": "0",
            "name": "Paneer Tikka",
            "original": "Paneer Tikka    \u{20B9}180/-",
            "score": 0.92
        }])
    );
}

#[test]
fn test_simple_pass_is_independent_of_heuristics() {
    let lines = noisy_menu();
    let simple = parse_lines(&lines);

    // headers survive the coarse pass
    assert!(simple.iter().any(|p| p.text == "VEG SNACKS"));
    // blank-looking lines of length >= 2 are kept verbatim
    assert!(simple.iter().any(|p| p.text == "   "));
    assert_eq!(simple[0].id, "0");
}
