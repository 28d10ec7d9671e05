//! Heuristic field extractors.
//!
//! Pure functions that mine a free-text snippet (plus title) for the
//! structured fields a package card needs. Each returns `None` (or an empty
//! list) when the snippet carries no signal; the normalizer decides the
//! fallback.

use std::sync::LazyLock;

use regex::Regex;

/// Destinations the extractor recognizes. First match wins.
pub const KNOWN_DESTINATIONS: &[&str] = &[
    "Ooty",
    "Goa",
    "Kashmir",
    "Kerala",
    "Rajasthan",
    "Himachal",
    "Uttarakhand",
];

/// Accommodation keywords, in priority order.
const ACCOMMODATION_KEYWORDS: &[(&str, &str)] = &[
    ("resort", "Resort"),
    ("hotel", "Hotel"),
    ("homestay", "Homestay"),
    ("guesthouse", "Guesthouse"),
];

/// Keyword-triggered highlight phrases, insertion order.
const HIGHLIGHT_KEYWORDS: &[(&[&str], &str)] = &[
    (&["tea", "garden"], "Tea garden visits included"),
    (&["mountain", "hill"], "Scenic mountain views"),
    (&["lake", "boating"], "Lake activities and boating"),
    (&["temple", "heritage"], "Cultural and heritage sites"),
];

/// Generic highlights used when no keyword matches.
const GENERIC_HIGHLIGHTS: &[&str] = &[
    "Professional tour guide included",
    "All major attractions covered",
];

const MAX_HIGHLIGHTS: usize = 4;

static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"₹\s*([0-9][0-9,]*)").expect("price regex"));

static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*(?:day|night)").expect("duration regex"));

/// First currency-prefixed amount in the snippet, commas stripped.
pub fn extract_price(content: &str) -> Option<u32> {
    let captures = PRICE_RE.captures(content)?;
    let digits: String = captures[1].chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Case-insensitive match against the known destination list, searching
/// snippet and title together. First list entry found wins.
pub fn extract_destination(content: &str, title: &str) -> Option<&'static str> {
    let combined = format!("{} {}", content, title).to_lowercase();
    KNOWN_DESTINATIONS
        .iter()
        .find(|dest| combined.contains(&dest.to_lowercase()))
        .copied()
}

/// `"<n> day"` / `"<n> night"` rendered as `"<n> Days / <n-1> Nights"`.
pub fn extract_duration(content: &str) -> Option<String> {
    let captures = DURATION_RE.captures(content)?;
    let days: u32 = captures[1].parse().ok()?;
    Some(format!("{} Days / {} Nights", days, days.saturating_sub(1)))
}

/// Accommodation type by keyword, resort > hotel > homestay > guesthouse.
pub fn extract_accommodation(content: &str) -> Option<&'static str> {
    let lower = content.to_lowercase();
    ACCOMMODATION_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, label)| *label)
}

/// Keyword-triggered highlight phrases; two generic fallbacks when nothing
/// matches. Capped at 4, insertion order.
pub fn extract_highlights(content: &str, title: &str) -> Vec<&'static str> {
    let combined = format!("{} {}", content, title).to_lowercase();

    let mut highlights: Vec<&'static str> = HIGHLIGHT_KEYWORDS
        .iter()
        .filter(|(keywords, _)| keywords.iter().any(|k| combined.contains(k)))
        .map(|(_, phrase)| *phrase)
        .collect();

    if highlights.is_empty() {
        highlights.extend_from_slice(GENERIC_HIGHLIGHTS);
    }

    highlights.truncate(MAX_HIGHLIGHTS);
    highlights
}
