//! Lenient decoding of upstream output into a [`Critique`].

use serde_json::Value;

use conjuga_core::errors::GatewayError;
use conjuga_core::models::{Critique, SpellingCorrection};

use crate::wire::{GenerateResponse, SentenceFeedback};

fn malformed(reason: impl Into<String>) -> GatewayError {
    GatewayError::MalformedResponse {
        reason: reason.into(),
    }
}

/// Decode a full `generateContent` response body.
pub fn parse_generate_response(body: &str) -> Result<Critique, GatewayError> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| malformed(format!("response body: {e}")))?;

    let text = response
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.as_str())
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| malformed("response has no candidate text"))?;

    parse_critique(text)
}

/// Decode the model's text. Accepts a JSON array (first element is used)
/// or a bare object, optionally surrounded by prose or code fences.
pub fn parse_critique(text: &str) -> Result<Critique, GatewayError> {
    let value = match serde_json::from_str::<Value>(text.trim()) {
        Ok(value) => value,
        Err(strict_err) => {
            tracing::debug!(error = %strict_err, "strict JSON parse failed, extracting span");
            candidate_spans(text)
                .into_iter()
                .find_map(|span| serde_json::from_str::<Value>(span).ok())
                .ok_or_else(|| malformed(format!("no JSON found: {strict_err}")))?
        }
    };

    let entry = match value {
        Value::Array(items) => items
            .into_iter()
            .next()
            .ok_or_else(|| malformed("empty feedback array"))?,
        object @ Value::Object(_) => object,
        other => return Err(malformed(format!("unexpected JSON value: {other}"))),
    };

    let feedback: SentenceFeedback =
        serde_json::from_value(entry).map_err(|e| malformed(format!("feedback object: {e}")))?;
    Ok(into_critique(feedback))
}

/// Outermost `[...]` and outermost `{...}`, earliest opening bracket first.
fn candidate_spans(text: &str) -> Vec<&str> {
    let mut spans: Vec<(usize, &str)> = [('[', ']'), ('{', '}')]
        .into_iter()
        .filter_map(|(open, close)| {
            let start = text.find(open)?;
            let end = text.rfind(close)?;
            (end > start).then(|| (start, &text[start..=end]))
        })
        .collect();
    spans.sort_by_key(|(start, _)| *start);
    spans.into_iter().map(|(_, span)| span).collect()
}

fn into_critique(feedback: SentenceFeedback) -> Critique {
    let mut critique = Critique {
        is_target_language: feedback.is_portuguese,
        overall_comment: feedback.overall_comment.filter(|c| !c.trim().is_empty()),
        ..Default::default()
    };
    if let Some(detail) = feedback.feedback {
        critique.grammar_notes = detail.grammar_analysis;
        critique.naturalness_note = detail.naturalness_evaluation;
        critique.suggestions = detail.suggestions;
        critique.spelling_errors = detail
            .spelling_errors
            .into_iter()
            .map(|s| SpellingCorrection {
                error: s.error,
                correction: s.correction,
            })
            .collect();
    }
    critique
}
