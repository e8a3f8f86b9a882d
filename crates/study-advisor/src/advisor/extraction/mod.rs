//! Natural-language extraction collaborator.
//!
//! Free text goes out to an external chat-completions service and comes back
//! as the same twelve-field shape the structured path uses. The engine is
//! never invoked when extraction fails; the collaborator's error message is
//! surfaced to the caller verbatim. One attempt, timeout-bounded, no retries.

mod groq;

pub use groq::GroqExtractor;

use async_trait::async_trait;

use super::input::ResolvedFields;

/// Seam between the advisor and whatever turns free text into state fields.
/// Production uses [`GroqExtractor`]; tests script the responses.
#[async_trait]
pub trait StateExtractor: Send + Sync {
    async fn extract(&self, text: &str) -> Result<ResolvedFields, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("natural-language extraction is not configured (missing API key)")]
    NotConfigured,
    #[error("extraction request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("extraction service returned no completion text")]
    EmptyCompletion,
    #[error("failed to parse extraction payload: {message}. Response was: {snippet}")]
    MalformedPayload { message: String, snippet: String },
}

/// Instructions sent ahead of the student's message. The field list, domains,
/// and fallback defaults must stay in lockstep with the structured intake
/// defaults in [`crate::advisor::input::defaults`].
pub(crate) fn extraction_prompt(user_message: &str) -> String {
    format!(
        r#"You are helping extract structured information from a student's description of their current state.

The student said: "{user_message}"

Extract the following information and return ONLY a valid JSON object with these exact fields:

{{
    "sleep_hours": <number between 0-12, default 7>,
    "energy_level": <"Very Low" | "Low" | "Moderate" | "High", default "Moderate">,
    "stress_level": <"Low" | "Moderate" | "High" | "Very High", default "Moderate">,
    "study_hours_today": <number between 0-12, default 2>,
    "deadline_urgency": <"None" | "This week" | "Within 48 hours" | "Urgent (within 24h)", default "None">,
    "break_taken": <true | false, default false>,
    "task_complexity": <"Low" | "Medium" | "High", default "Medium">,
    "passive_learning_hours": <number between 0-8, default 1>,
    "social_isolation_days": <integer between 0-7, default 1>,
    "sedentary_hours": <number between 0-12, default 4>,
    "cramming": <true | false, default false>,
    "current_time": <integer between 0-23 for hour of day, use 14 if not mentioned>
}}

Rules for extraction:
- If information is not mentioned, use the default value
- Be conservative with estimates
- "tired", "exhausted", "drained" -> energy_level: "Low" or "Very Low"
- "stressed", "anxious", "overwhelmed" -> stress_level: "High" or "Very High"
- "exam tomorrow", "assignment due" -> deadline_urgency: "Urgent (within 24h)"
- "haven't slept much", "barely slept" -> sleep_hours: 3-5
- "all-nighter", "didn't sleep" -> sleep_hours: 0-2
- "been studying all day", "studied for hours" -> study_hours_today: 6-8
- "cramming", "studying non-stop" -> cramming: true
- "haven't talked to anyone", "isolated" -> social_isolation_days: 3-7

Return ONLY the JSON object, no explanation or markdown formatting."#
    )
}

/// Decode a model completion into state fields, tolerating the markdown code
/// fences some models wrap JSON in despite instructions.
pub(crate) fn parse_completion(raw: &str) -> Result<ResolvedFields, ExtractionError> {
    let trimmed = strip_code_fences(raw.trim());
    serde_json::from_str(trimmed).map_err(|err| ExtractionError::MalformedPayload {
        message: err.to_string(),
        snippet: snippet(trimmed),
    })
}

fn strip_code_fences(text: &str) -> &str {
    let text = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    text.strip_suffix("```").unwrap_or(text).trim()
}

fn snippet(text: &str) -> String {
    const MAX: usize = 200;
    if text.len() <= MAX {
        text.to_string()
    } else {
        let mut end = MAX;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &text[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::domain::{DeadlineUrgency, EnergyLevel};

    const PAYLOAD: &str = r#"{
        "sleep_hours": 4,
        "energy_level": "Very Low",
        "stress_level": "High",
        "study_hours_today": 1,
        "deadline_urgency": "Urgent (within 24h)",
        "break_taken": false,
        "task_complexity": "Medium",
        "passive_learning_hours": 1,
        "social_isolation_days": 1,
        "sedentary_hours": 4,
        "cramming": false,
        "current_time": 10
    }"#;

    #[test]
    fn parses_bare_json_completion() {
        let fields = parse_completion(PAYLOAD).expect("payload parses");
        assert_eq!(fields.sleep_hours, 4.0);
        assert_eq!(fields.energy_level, EnergyLevel::VeryLow);
        assert_eq!(fields.deadline_urgency, DeadlineUrgency::Urgent);
    }

    #[test]
    fn strips_markdown_fences_before_parsing() {
        let fenced = format!("```json\n{PAYLOAD}\n```");
        let fields = parse_completion(&fenced).expect("fenced payload parses");
        assert_eq!(fields.current_time, 10);

        let plain_fence = format!("```\n{PAYLOAD}\n```");
        assert!(parse_completion(&plain_fence).is_ok());
    }

    #[test]
    fn malformed_payload_reports_message_and_snippet() {
        let err = parse_completion("the student seems tired").expect_err("prose is not JSON");
        match err {
            ExtractionError::MalformedPayload { snippet, .. } => {
                assert!(snippet.contains("tired"));
            }
            other => panic!("expected malformed payload, got {other:?}"),
        }
    }

    #[test]
    fn prompt_embeds_the_student_message() {
        let prompt = extraction_prompt("I barely slept and my exam is tomorrow");
        assert!(prompt.contains("I barely slept and my exam is tomorrow"));
        assert!(prompt.contains("\"sleep_hours\""));
    }
}
