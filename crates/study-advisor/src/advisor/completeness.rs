//! Provided/assumed classification for incomplete input.
//!
//! Advisory only: the report is surfaced next to the recommendations so the
//! caller can see which fields rested on defaults, but it never feeds back
//! into the engine's confidence values. Each rule's confidence is fixed.

use serde::{Deserialize, Serialize};

use super::input::{defaults, ResolvedFields};

/// Which fields were explicitly supplied versus filled from the documented
/// defaults, with human-readable annotations for each.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletenessReport {
    pub provided: Vec<String>,
    pub assumed: Vec<String>,
}

impl CompletenessReport {
    /// Completeness percentage = provided / (provided + assumed) * 100.
    pub fn percent(&self) -> f64 {
        let total = self.provided.len() + self.assumed.len();
        if total == 0 {
            return 100.0;
        }
        self.provided.len() as f64 / total as f64 * 100.0
    }

    pub fn assumption_count(&self) -> usize {
        self.assumed.len()
    }
}

/// Structured path: the six core fields always count as provided (the form
/// collects them up front); the optional tail is classified by comparing the
/// resolved value against its default.
pub(crate) fn classify_structured(fields: &ResolvedFields) -> CompletenessReport {
    let mut report = CompletenessReport::default();
    push_core(&mut report.provided, fields);
    classify_optional_tail(&mut report, fields);
    report
}

/// Extraction path: the collaborator populates every field, so presence tells
/// us nothing. A value equal to its documented default is treated as assumed
/// (the model was instructed to fall back to defaults for unmentioned facts).
pub(crate) fn classify_extracted(fields: &ResolvedFields) -> CompletenessReport {
    let mut report = CompletenessReport::default();

    classify(
        &mut report,
        fields.sleep_hours != defaults::SLEEP_HOURS,
        format!("Sleep hours: {}h", fields.sleep_hours),
        "Sleep hours: 7h (default)".to_string(),
    );
    classify(
        &mut report,
        fields.energy_level != defaults::ENERGY_LEVEL,
        format!("Energy level: {}", fields.energy_level.label()),
        "Energy level: Moderate (default)".to_string(),
    );
    classify(
        &mut report,
        fields.stress_level != defaults::STRESS_LEVEL,
        format!("Stress level: {}", fields.stress_level.label()),
        "Stress level: Moderate (default)".to_string(),
    );
    classify(
        &mut report,
        fields.study_hours_today != defaults::STUDY_HOURS_TODAY,
        format!("Study hours today: {}h", fields.study_hours_today),
        "Study hours today: 2h (default)".to_string(),
    );
    classify(
        &mut report,
        fields.deadline_urgency != defaults::DEADLINE_URGENCY,
        format!("Deadline urgency: {}", fields.deadline_urgency.label()),
        "Deadline urgency: None (default)".to_string(),
    );
    classify(
        &mut report,
        fields.break_taken != defaults::BREAK_TAKEN,
        "Break taken: Yes".to_string(),
        "Break taken: No (default)".to_string(),
    );

    classify_optional_tail(&mut report, fields);
    report
}

fn push_core(provided: &mut Vec<String>, fields: &ResolvedFields) {
    provided.push(format!("Sleep hours: {}h", fields.sleep_hours));
    provided.push(format!("Energy level: {}", fields.energy_level.label()));
    provided.push(format!("Stress level: {}", fields.stress_level.label()));
    provided.push(format!("Study hours today: {}h", fields.study_hours_today));
    provided.push(format!("Deadline urgency: {}", fields.deadline_urgency.label()));
    provided.push(format!(
        "Break taken: {}",
        if fields.break_taken { "Yes" } else { "No" }
    ));
}

fn classify_optional_tail(report: &mut CompletenessReport, fields: &ResolvedFields) {
    classify(
        report,
        fields.passive_learning_hours != defaults::PASSIVE_LEARNING_HOURS,
        format!("Passive learning: {}h", fields.passive_learning_hours),
        "Passive learning: 1h (default - moderate amount)".to_string(),
    );
    classify(
        report,
        fields.task_complexity != defaults::TASK_COMPLEXITY,
        format!("Task complexity: {}", fields.task_complexity.label()),
        "Task complexity: Medium (default)".to_string(),
    );
    classify(
        report,
        fields.sedentary_hours != defaults::SEDENTARY_HOURS,
        format!("Sedentary hours: {}h", fields.sedentary_hours),
        "Sedentary hours: 4h (default - typical)".to_string(),
    );
    classify(
        report,
        fields.social_isolation_days != defaults::SOCIAL_ISOLATION_DAYS,
        format!("Social isolation: {} days", fields.social_isolation_days),
        "Social isolation: 1 day (default - recent contact)".to_string(),
    );
    classify(
        report,
        fields.cramming,
        "Cramming: Yes".to_string(),
        "Cramming: No (default - normal pace)".to_string(),
    );
}

fn classify(report: &mut CompletenessReport, provided: bool, yes: String, no: String) {
    if provided {
        report.provided.push(yes);
    } else {
        report.assumed.push(no);
    }
}
