//! Tutor prompt for one produced sentence.

/// Prompt asking for a JSON array with one evaluation object.
pub fn build_prompt(sentence: &str, target_form: &str) -> String {
    let lines = [
        "You are an expert Portuguese language tutor. Evaluate the following Portuguese sentence submitted by a student.",
        "The student was practising the verb form given below; comment on whether it is used correctly.",
        "Your response MUST be a single, valid JSON array containing exactly one JSON object.",
        "",
        "For a sentence identified as Portuguese the object must look like:",
        r#"{
  "is_portuguese": true,
  "feedback": {
    "grammar_analysis": "Detailed grammar feedback. Point out specific errors and explain them. If correct, acknowledge.",
    "spelling_errors": [{ "error": "misspelled_word", "correction": "corrected_word" }],
    "naturalness_evaluation": "How natural the sentence sounds.",
    "suggestions": ["Alternative phrasing or improvement."]
  },
  "overall_comment": "A brief overall comment or encouragement."
}"#,
        "",
        "For a sentence NOT identified as Portuguese (or nonsensical):",
        r#"{
  "is_portuguese": false,
  "feedback": null,
  "overall_comment": "Why this does not appear to be a Portuguese sentence."
}"#,
        "",
        "Key requirements for the JSON:",
        "- The entire output must be a single JSON array `[ ... ]`.",
        "- All keys and string values must be double-quoted and properly escaped.",
        "- `spelling_errors` and `suggestions` may be empty arrays.",
        "- No trailing commas.",
        "",
    ];

    let mut prompt = lines.join("\n");
    prompt.push_str(&format!("Target form: \"{target_form}\"\n"));
    prompt.push_str(&format!("Sentence 0: \"{sentence}\""));
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_carries_sentence_and_form() {
        let prompt = build_prompt("Ele fala português.", "fala");
        assert!(prompt.contains("Sentence 0: \"Ele fala português.\""));
        assert!(prompt.contains("Target form: \"fala\""));
        assert!(prompt.contains("\"is_portuguese\""));
    }
}
