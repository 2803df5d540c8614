//! Canned answer served when no model credential is configured.
//!
//! Deterministic: the same prompt always yields the same text.

use exportmate_types::insights::Insights;

/// Characters of the prompt quoted in the snapshot line.
pub const EXCERPT_CHARS: usize = 120;
/// Words of the prompt quoted in the sample outreach script.
pub const PITCH_WORDS: usize = 5;

pub const FALLBACK_HEADLINE: &str = "OPENAI_API_KEY missing: serving smart fallback.";

pub const FALLBACK_WARNING: &str = "Live OpenAI integration is inactive. Aapko philhaal heuristic-based plan mil raha hai. OPENAI_API_KEY set karke realtime intelligence unlock karein.";

const FALLBACK_SUMMARY: &str = "Based on a quick rule-based estimate, focus on markets with stable demand, mid-sized distributors, and value-added packaging to stand out.";

const FALLBACK_FOCUS_MARKETS: [&str; 3] = [
    "Dubai (re-export hub with high premium demand)",
    "Singapore (gateway for ASEAN buyers)",
    "Rotterdam (EU entry point, strong compliance culture)",
];

const FALLBACK_NEXT_STEPS: [&str; 3] = [
    "Build a concise product line-sheet with FOB pricing & MOQ.",
    "Shortlist buyers via trade associations & LinkedIn groups.",
    "Prepare compliance kit (certifications, lab tests, logistics).",
];

/// The fixed insights that accompany every fallback reply.
pub fn fallback_insights() -> Insights {
    Insights::from_static(FALLBACK_SUMMARY, &FALLBACK_FOCUS_MARKETS, &FALLBACK_NEXT_STEPS)
}

/// Render the fallback template around the latest prompt.
pub fn build_fallback_message(prompt: &str) -> String {
    let excerpt = excerpt(prompt);
    let pitch = pitch_words(prompt);

    format!(
        "{FALLBACK_HEADLINE}

📦 *Opportunity Snapshot*
- Product focus: {excerpt}…
- Buyer profile: Mid-sized importers valuing reliable supply & compliance.
- Pitch hook: Emphasise Indian origin, quality control, and ready paperwork.

🧭 *Market Moves*
1. Identify top 25 prospects via Alibaba Verified Buyers + trade directories.
2. Craft bilingual WhatsApp intro: “Namaste {{{{buyer_name}}}}, hum {pitch} exporters hain. Ready compliance + competitive FOB. Shall we schedule a quick pricing walkthrough?”
3. Offer sampler packs with clear Incoterms (FOB Nhava Sheva / CIF Jebel Ali).

✅ *Compliance Checklist*
- Ensure HS code alignment, country-specific labelling, and phytosanitary docs if agri.
- Lock in freight quote + insurance before quoting landed price.

🚀 *Action Plan*
Step 1: Finalise product dossier (spec sheet, MOQ, lead time) by tomorrow.
Step 2: Launch outreach sprint to 15 priority buyers with personalised trade stats."
    )
}

/// First `EXCERPT_CHARS` characters, never splitting a code point.
pub fn excerpt(prompt: &str) -> &str {
    match prompt.char_indices().nth(EXCERPT_CHARS) {
        Some((idx, _)) => &prompt[..idx],
        None => prompt,
    }
}

/// First `PITCH_WORDS` single-space separated words.
pub fn pitch_words(prompt: &str) -> String {
    prompt
        .split(' ')
        .take(PITCH_WORDS)
        .collect::<Vec<_>>()
        .join(" ")
}
