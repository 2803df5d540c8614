//! WASM-target tests for exportmate-core.
//!
//! Runs the insight extractor, fallback generator, and chat controller
//! under wasm32-unknown-unknown via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use exportmate_core::controller::{ChatController, NETWORK_APOLOGY, STARTER_PROMPTS};
use exportmate_core::event_bus::EventBus;
use exportmate_core::fallback::{build_fallback_message, FALLBACK_HEADLINE};
use exportmate_core::insights::{derive_insights, KeywordSets, DEFAULT_NEXT_STEPS};
use exportmate_types::api::AgentResponse;
use exportmate_types::event::AgentEvent;
use exportmate_types::AgentError;

// ─── Insight Extractor Tests ─────────────────────────────

#[wasm_bindgen_test]
fn extractor_routes_lines() {
    let insights = derive_insights(
        "Buyers: UAE market is growing.\nStep 1: call them.",
        &KeywordSets::default(),
    );
    assert_eq!(insights.focus_markets, vec!["Buyers: UAE market is growing."]);
    assert_eq!(insights.next_steps, vec!["Step 1: call them."]);
}

#[wasm_bindgen_test]
fn extractor_defaults_on_no_match() {
    let insights = derive_insights("Just a greeting", &KeywordSets::default());
    assert_eq!(insights.next_steps, DEFAULT_NEXT_STEPS.to_vec());
}

// ─── Fallback Tests ──────────────────────────────────────

#[wasm_bindgen_test]
fn fallback_quotes_prompt() {
    let text = build_fallback_message("organic turmeric powder");
    assert!(text.starts_with(FALLBACK_HEADLINE));
    assert!(text.contains("organic turmeric powder"));
}

// ─── Controller + EventBus Tests ─────────────────────────

#[wasm_bindgen_test]
fn controller_applies_bus_events() {
    let bus = EventBus::new();
    let mut controller = ChatController::new();

    let pending = controller.submit_prompt(STARTER_PROMPTS[2]).unwrap();
    assert!(controller.submit_prompt(STARTER_PROMPTS[0]).is_none());

    bus.reply_received(
        pending.request_id,
        Err(AgentError::Network("offline".to_string())),
    );

    for event in bus.drain() {
        if let AgentEvent::ReplyReceived { request_id, reply } = event {
            controller.complete(request_id, reply);
        }
    }

    assert!(!controller.is_sending());
    assert_eq!(controller.messages().last().unwrap().content, NETWORK_APOLOGY);
}

#[wasm_bindgen_test]
fn controller_accepts_next_submit_after_reply() {
    let mut controller = ChatController::new();
    let first = controller.submit_prompt("one").unwrap();
    controller.complete(first.request_id, Ok(AgentResponse::reply("done")));

    let second = controller.submit_prompt("two").unwrap();
    assert!(second.request_id > first.request_id);
}
