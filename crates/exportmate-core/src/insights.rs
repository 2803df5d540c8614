//! Insight extraction from free-text model output.
//!
//! Used by the widget when a reply arrives without structured insights.
//! Everything here is a pure function of the text and the keyword sets.

use exportmate_types::insights::{Insights, MAX_INSIGHT_ITEMS};

pub const DEFAULT_SUMMARY: &str =
    "Your agent has created a tailored go-to-market path for the buyers you target.";

pub const DEFAULT_FOCUS_MARKETS: [&str; 3] = [
    "Shortlist distributors active in your HS code via trade directories.",
    "Validate demand signals with recent import volume data.",
    "Highlight compliance readiness in your first touch outreach.",
];

pub const DEFAULT_NEXT_STEPS: [&str; 3] = [
    "Compile a value-centric line-sheet with FOB pricing.",
    "Craft bilingual outreach messages for high-intent buyers.",
    "Prepare compliance documents (certificates, lab tests, logistics).",
];

const MARKET_KEYWORDS: [&str; 5] = ["market", "buyer", "country", "region", "import"];

const STEP_KEYWORDS: [&str; 9] = [
    "step", "call", "follow", "send", "prepare", "draft", "schedule", "launch", "plan",
];

/// The two keyword lists that route bullet lines into categories.
/// Matching is a case-insensitive substring test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSets {
    pub focus_markets: Vec<String>,
    pub next_steps: Vec<String>,
}

impl Default for KeywordSets {
    fn default() -> Self {
        Self {
            focus_markets: MARKET_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            next_steps: STEP_KEYWORDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl KeywordSets {
    pub fn new(focus_markets: Vec<String>, next_steps: Vec<String>) -> Self {
        Self {
            focus_markets: focus_markets.into_iter().map(|k| k.to_lowercase()).collect(),
            next_steps: next_steps.into_iter().map(|k| k.to_lowercase()).collect(),
        }
    }
}

/// Derive insights from a model reply. Empty categories get the defaults.
pub fn derive_insights(message: &str, keywords: &KeywordSets) -> Insights {
    let summary = summarize(message).unwrap_or_else(|| DEFAULT_SUMMARY.to_string());

    let (focus_markets, next_steps) = filter_bullets(message, keywords);

    Insights {
        summary,
        focus_markets: or_defaults(focus_markets, &DEFAULT_FOCUS_MARKETS),
        next_steps: or_defaults(next_steps, &DEFAULT_NEXT_STEPS),
    }
}

/// First two sentence fragments, emphasis removed. `None` when nothing is left.
pub fn summarize(message: &str) -> Option<String> {
    let cleaned = message.replace('*', "");
    let sentences: Vec<&str> = cleaned
        .split(['\n', '.'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(2)
        .collect();

    if sentences.is_empty() {
        None
    } else {
        Some(sentences.join(". "))
    }
}

/// Lines of the message with list markers stripped, empties dropped.
pub fn bullet_lines(message: &str) -> Vec<String> {
    message
        .split('\n')
        .map(strip_list_marker)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Route bullet lines into (focus markets, next steps), at most
/// `MAX_INSIGHT_ITEMS` each, in source order. A line may land in both.
pub fn filter_bullets(message: &str, keywords: &KeywordSets) -> (Vec<String>, Vec<String>) {
    let candidates = bullet_lines(message);

    let focus_markets = first_matching(&candidates, &keywords.focus_markets);
    let next_steps = first_matching(&candidates, &keywords.next_steps);

    (focus_markets, next_steps)
}

fn strip_list_marker(line: &str) -> &str {
    line.trim_start_matches(|c: char| {
        c == '-' || c == '•' || c == '.' || c == ')' || c.is_ascii_digit() || c.is_whitespace()
    })
}

fn first_matching(candidates: &[String], keywords: &[String]) -> Vec<String> {
    candidates
        .iter()
        .filter(|line| {
            let lower = line.to_lowercase();
            keywords.iter().any(|k| lower.contains(k.as_str()))
        })
        .take(MAX_INSIGHT_ITEMS)
        .cloned()
        .collect()
}

fn or_defaults(items: Vec<String>, defaults: &[&str]) -> Vec<String> {
    if items.is_empty() {
        defaults.iter().map(|s| s.to_string()).collect()
    } else {
        items
    }
}
