//! WASM-target tests for exportmate-platform.
//!
//! Covers the browser transport's wire mapping under wasm32-unknown-unknown
//! via `wasm-pack test --node`. Nothing here touches the network.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use exportmate_platform::http::wire::{decode_reply, encode_request};
use exportmate_platform::http::HttpAgentTransport;
use exportmate_types::api::AgentRequest;
use exportmate_types::config::ClientConfig;
use exportmate_types::message::ChatMessage;
use exportmate_types::AgentError;

// ─── Transport Tests ─────────────────────────────────────

#[wasm_bindgen_test]
fn transport_uses_configured_endpoint() {
    let transport = HttpAgentTransport::new(&ClientConfig::default());
    assert_eq!(transport.endpoint(), "/api/agent");
}

#[wasm_bindgen_test]
fn request_body_carries_history() {
    let req = AgentRequest {
        messages: vec![
            ChatMessage::assistant("Namaste!"),
            ChatMessage::user("jute bags"),
        ],
    };
    let body = encode_request(&req).unwrap();
    assert!(body.starts_with(r#"{"messages":[{"role":"assistant""#));
    assert!(body.contains(r#""content":"jute bags""#));
}

// ─── Reply Mapping Tests ─────────────────────────────────

#[wasm_bindgen_test]
fn non_2xx_status_is_error() {
    let err = decode_reply(502, r#"{"success":true,"message":"ok"}"#).unwrap_err();
    assert_eq!(err, AgentError::Network("HTTP 502".to_string()));
}

#[wasm_bindgen_test]
fn undecodable_body_is_error() {
    let err = decode_reply(200, "not json").unwrap_err();
    assert!(matches!(err, AgentError::Serialization(_)));
}

#[wasm_bindgen_test]
fn success_body_decodes() {
    let reply = decode_reply(200, r#"{"success":true,"message":"Target UAE"}"#).unwrap();
    assert!(reply.success);
    assert_eq!(reply.message, "Target UAE");
}
