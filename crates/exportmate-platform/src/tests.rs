#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use futures::executor::block_on;

    use crate::llm::openai_compat::{parse_completion, ApiResponse};
    use crate::http::wire::{decode_reply, encode_request};
    use crate::llm::OpenAiCompatProvider;
    use exportmate_core::ports::{CompletionPort, CompletionRequest};
    use exportmate_types::api::{AgentRequest, ModelReply};
    use exportmate_types::config::LlmConfig;
    use exportmate_types::message::ChatMessage;
    use exportmate_types::AgentError;

    fn request() -> CompletionRequest {
        CompletionRequest {
            messages: vec![
                ChatMessage::system("You are ExportMate AI"),
                ChatMessage::user("organic spices to Germany"),
            ],
            model: "gpt-4o-mini".to_string(),
            max_output_tokens: 900,
            temperature: None,
        }
    }

    fn parse(json: &str) -> exportmate_types::Result<ModelReply> {
        let data: ApiResponse = serde_json::from_str(json).unwrap();
        parse_completion(data)
    }

    // ─── Request Body Tests ──────────────────────────────────

    #[test]
    fn test_request_body_shape() {
        let provider = OpenAiCompatProvider::new(LlmConfig::default());
        let body = provider.build_request_body(&request());

        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["max_tokens"], 900);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "organic spices to Germany");
        assert!(body.get("temperature").is_none());
    }

    #[test]
    fn test_request_body_with_temperature() {
        let provider = OpenAiCompatProvider::new(LlmConfig::default());
        let mut req = request();
        req.temperature = Some(0.5);
        let body = provider.build_request_body(&req);
        assert_eq!(body["temperature"], 0.5);
    }

    #[test]
    fn test_completions_url() {
        let mut config = LlmConfig::default();
        assert_eq!(
            OpenAiCompatProvider::new(config.clone()).completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );

        config.api_base = "http://localhost:11434/".to_string();
        assert_eq!(
            OpenAiCompatProvider::new(config).completions_url(),
            "http://localhost:11434/v1/chat/completions"
        );
    }

    #[test]
    fn test_complete_without_key_is_config_error() {
        let provider = OpenAiCompatProvider::new(LlmConfig::default());
        let err = block_on(provider.complete(request())).unwrap_err();
        assert!(matches!(err, AgentError::Config(_)));
    }

    // ─── Response Parsing Tests ──────────────────────────────

    #[test]
    fn test_parse_first_choice_text() {
        let reply = parse(
            r#"{"choices":[{"message":{"role":"assistant","content":"Target UAE buyers"}},{"message":{"content":"ignored"}}],
                "usage":{"prompt_tokens":10,"completion_tokens":5,"total_tokens":15}}"#,
        )
        .unwrap();
        assert_eq!(reply, ModelReply::ModelText("Target UAE buyers".to_string()));
    }

    #[test]
    fn test_parse_no_choices() {
        let err = parse(r#"{"choices":[]}"#).unwrap_err();
        assert_eq!(err, AgentError::Llm("No choices in response".to_string()));
    }

    #[test]
    fn test_parse_null_content() {
        let err = parse(r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#)
            .unwrap_err();
        assert!(matches!(err, AgentError::Llm(_)));
    }

    // ─── Agent Endpoint Wire Tests ───────────────────────────

    #[test]
    fn test_encode_request_shape() {
        let req = AgentRequest {
            messages: vec![ChatMessage::user("brass handicrafts for Canada")],
        };
        assert_eq!(
            encode_request(&req).unwrap(),
            r#"{"messages":[{"role":"user","content":"brass handicrafts for Canada"}]}"#
        );
    }

    #[test]
    fn test_decode_reply_ok() {
        let reply = decode_reply(
            200,
            r#"{"success":true,"message":"Plan ready","warning":"fallback"}"#,
        )
        .unwrap();
        assert_eq!(reply.message, "Plan ready");
        assert_eq!(reply.warning.as_deref(), Some("fallback"));
        assert!(reply.insights.is_none());
    }

    #[test]
    fn test_decode_reply_non_2xx_is_network_error() {
        // A well-formed failure body does not rescue the status
        let err = decode_reply(500, r#"{"success":false,"message":"Server side error"}"#)
            .unwrap_err();
        assert_eq!(err, AgentError::Network("HTTP 500".to_string()));

        let err = decode_reply(400, "").unwrap_err();
        assert_eq!(err, AgentError::Network("HTTP 400".to_string()));
    }

    #[test]
    fn test_decode_reply_undecodable_body() {
        let err = decode_reply(200, "<html>gateway timeout</html>").unwrap_err();
        assert!(matches!(err, AgentError::Serialization(_)));
    }
}
