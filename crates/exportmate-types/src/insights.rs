use serde::{Deserialize, Serialize};

/// Upper bound on the focus-market and next-step lists.
pub const MAX_INSIGHT_ITEMS: usize = 3;

/// Summary / focus-markets / next-steps triple shown next to a reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub summary: String,
    pub focus_markets: Vec<String>,
    pub next_steps: Vec<String>,
}

impl Insights {
    pub fn new(
        summary: impl Into<String>,
        focus_markets: Vec<String>,
        next_steps: Vec<String>,
    ) -> Self {
        Self {
            summary: summary.into(),
            focus_markets,
            next_steps,
        }
    }

    /// Build from static string slices, used for the canned lists.
    pub fn from_static(summary: &str, focus_markets: &[&str], next_steps: &[&str]) -> Self {
        Self {
            summary: summary.to_string(),
            focus_markets: focus_markets.iter().map(|s| s.to_string()).collect(),
            next_steps: next_steps.iter().map(|s| s.to_string()).collect(),
        }
    }
}
