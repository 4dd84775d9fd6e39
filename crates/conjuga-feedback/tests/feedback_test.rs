use conjuga_core::config::FeedbackConfig;
use conjuga_core::errors::GatewayError;
use conjuga_core::traits::IFeedbackGateway;
use conjuga_feedback::client::status_error;
use conjuga_feedback::{parse_critique, parse_generate_response, GeminiConfig, GeminiGateway};

const PORTUGUESE: &str = r#"[
  {
    "original_sentence_index": "0",
    "is_portuguese": true,
    "feedback": {
      "grammar_analysis": "Correto.",
      "spelling_errors": [{ "error": "portugues", "correction": "português" }],
      "naturalness_evaluation": "Soa natural.",
      "suggestions": ["Ele fala bem português."]
    },
    "overall_comment": "Muito bem!"
  }
]"#;

fn envelope(text: &str) -> String {
    serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": text }] } }]
    })
    .to_string()
}

// ── Parsing ───────────────────────────────────────────────────────────────

#[test]
fn strict_array_is_parsed() {
    let critique = parse_critique(PORTUGUESE).unwrap();
    assert!(critique.is_target_language);
    assert_eq!(critique.grammar_notes, "Correto.");
    assert_eq!(critique.spelling_errors.len(), 1);
    assert_eq!(critique.spelling_errors[0].correction, "português");
    assert_eq!(critique.naturalness_note, "Soa natural.");
    assert_eq!(critique.suggestions, vec!["Ele fala bem português."]);
    assert_eq!(critique.overall_comment.as_deref(), Some("Muito bem!"));
}

#[test]
fn fenced_output_is_extracted() {
    let text = format!("Here you go:\n```json\n{PORTUGUESE}\n```\nBoa sorte!");
    let critique = parse_critique(&text).unwrap();
    assert_eq!(critique.grammar_notes, "Correto.");
}

#[test]
fn bare_object_is_accepted() {
    let critique = parse_critique(
        r#"{"is_portuguese": false, "feedback": null, "overall_comment": "Isto é inglês."}"#,
    )
    .unwrap();
    assert!(!critique.is_target_language);
    assert!(critique.grammar_notes.is_empty());
    assert!(critique.suggestions.is_empty());
    assert_eq!(critique.overall_comment.as_deref(), Some("Isto é inglês."));
}

#[test]
fn object_with_arrays_inside_prose_is_accepted() {
    let text = r#"Here you go: {"is_portuguese": true, "feedback": {"grammar_analysis": "Correto.", "spelling_errors": [], "naturalness_evaluation": "Natural.", "suggestions": ["Ele fala bem."]}, "overall_comment": "Boa!"} thanks"#;
    let critique = parse_critique(text).unwrap();
    assert!(critique.is_target_language);
    assert_eq!(critique.grammar_notes, "Correto.");
    assert_eq!(critique.suggestions, vec!["Ele fala bem."]);
    assert_eq!(critique.overall_comment.as_deref(), Some("Boa!"));
}

#[test]
fn garbage_is_malformed() {
    for text in ["not json at all", "[]", "42", "[\"a string\"]"] {
        let err = parse_critique(text).unwrap_err();
        assert!(
            matches!(err, GatewayError::MalformedResponse { .. }),
            "{text:?} gave {err:?}"
        );
    }
}

#[test]
fn envelope_is_unwrapped() {
    let critique = parse_generate_response(&envelope(PORTUGUESE)).unwrap();
    assert_eq!(critique.overall_comment.as_deref(), Some("Muito bem!"));
}

#[test]
fn empty_envelope_is_malformed() {
    let blank = envelope("  ");
    for body in ["{}", r#"{"candidates": []}"#, "<html>", blank.as_str()] {
        assert!(matches!(
            parse_generate_response(body),
            Err(GatewayError::MalformedResponse { .. })
        ));
    }
}

// ── Error mapping ─────────────────────────────────────────────────────────

#[test]
fn status_codes_map_to_error_kinds() {
    assert_eq!(
        status_error(429, Some("17"), ""),
        GatewayError::RateLimited {
            retry_after_secs: Some(17)
        }
    );
    assert_eq!(
        status_error(429, Some("Wed, 21 Oct 2015 07:28:00 GMT"), ""),
        GatewayError::RateLimited {
            retry_after_secs: None
        }
    );
    assert!(matches!(
        status_error(403, None, ""),
        GatewayError::NotConfigured { .. }
    ));
    assert!(matches!(
        status_error(503, None, "overloaded"),
        GatewayError::Unavailable { .. }
    ));
}

#[test]
fn missing_key_is_not_configured() {
    let config = FeedbackConfig {
        api_key_env: "CONJUGA_FEEDBACK_TEST_KEY_THAT_IS_NEVER_SET".into(),
        ..Default::default()
    };
    let err = GeminiGateway::from_feedback_config(&config).unwrap_err();
    assert!(matches!(err, GatewayError::NotConfigured { .. }));
}

#[test]
fn unreachable_upstream_is_unavailable() {
    let config = FeedbackConfig {
        base_url: "http://127.0.0.1:9/".into(),
        timeout_secs: 2,
        ..Default::default()
    };
    let gateway = GeminiGateway::new(GeminiConfig::with_api_key(&config, "test-key")).unwrap();
    assert_eq!(gateway.config().base_url, "http://127.0.0.1:9");

    let err = gateway.critique("Ele fala.", "fala").unwrap_err();
    assert!(matches!(err, GatewayError::Unavailable { .. }));
}
