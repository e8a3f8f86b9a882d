use async_trait::async_trait;

use crate::advisor::domain::{
    DeadlineUrgency, EnergyLevel, StressLevel, StudentState, TaskComplexity,
};
use crate::advisor::extraction::{ExtractionError, StateExtractor};
use crate::advisor::input::ResolvedFields;

/// A state that satisfies no rule conjunction: rested but not enough for the
/// adequate-sleep rules, low everything else, outside every time window.
pub(super) fn balanced_fields() -> ResolvedFields {
    ResolvedFields {
        sleep_hours: 7.5,
        energy_level: EnergyLevel::Low,
        stress_level: StressLevel::Low,
        study_hours_today: 1.0,
        deadline_urgency: DeadlineUrgency::None,
        break_taken: true,
        task_complexity: TaskComplexity::Low,
        passive_learning_hours: 0.0,
        social_isolation_days: 0,
        sedentary_hours: 1.0,
        cramming: false,
        current_time: 10,
    }
}

pub(super) fn balanced_state() -> StudentState {
    state_from(balanced_fields())
}

pub(super) fn state_from(fields: ResolvedFields) -> StudentState {
    StudentState::from_fields(fields).expect("fixture fields are in domain")
}

/// Exhausted student the night before an exam.
pub(super) fn exam_crunch_fields() -> ResolvedFields {
    ResolvedFields {
        sleep_hours: 3.0,
        energy_level: EnergyLevel::VeryLow,
        stress_level: StressLevel::High,
        study_hours_today: 1.0,
        deadline_urgency: DeadlineUrgency::Urgent,
        break_taken: false,
        task_complexity: TaskComplexity::Medium,
        passive_learning_hours: 1.0,
        social_isolation_days: 1,
        sedentary_hours: 4.0,
        cramming: false,
        current_time: 10,
    }
}

/// Extractor scripted with either a canned field set or a failure message.
pub(super) struct ScriptedExtractor {
    script: Result<ResolvedFields, String>,
}

impl ScriptedExtractor {
    pub(super) fn returning(fields: ResolvedFields) -> Self {
        Self {
            script: Ok(fields),
        }
    }

    pub(super) fn failing(message: &str) -> Self {
        Self {
            script: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl StateExtractor for ScriptedExtractor {
    async fn extract(&self, _text: &str) -> Result<ResolvedFields, ExtractionError> {
        match &self.script {
            Ok(fields) => Ok(fields.clone()),
            Err(message) => Err(ExtractionError::MalformedPayload {
                message: message.clone(),
                snippet: String::new(),
            }),
        }
    }
}
