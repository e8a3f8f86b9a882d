//! Input provider for the inference engine.
//!
//! The engine only ever sees a fully-resolved, validated [`StudentState`].
//! This module owns the documented defaults and the translation from the two
//! intake shapes (structured request with optional fields, extraction payload
//! with every field present) into that state.

use serde::{Deserialize, Serialize};

use super::completeness::{self, CompletenessReport};
use super::domain::{
    DeadlineUrgency, EnergyLevel, StateValidationError, StressLevel, StudentState, TaskComplexity,
};

/// Documented defaults applied when an optional field is omitted. These are
/// also the baseline the extraction collaborator is instructed to fall back
/// to, so both intake paths share one source of truth.
pub mod defaults {
    use super::{DeadlineUrgency, EnergyLevel, StressLevel, TaskComplexity};

    pub const SLEEP_HOURS: f64 = 7.0;
    pub const ENERGY_LEVEL: EnergyLevel = EnergyLevel::Moderate;
    pub const STRESS_LEVEL: StressLevel = StressLevel::Moderate;
    pub const STUDY_HOURS_TODAY: f64 = 2.0;
    pub const DEADLINE_URGENCY: DeadlineUrgency = DeadlineUrgency::None;
    pub const BREAK_TAKEN: bool = false;
    pub const TASK_COMPLEXITY: TaskComplexity = TaskComplexity::Medium;
    pub const PASSIVE_LEARNING_HOURS: f64 = 1.0;
    pub const SOCIAL_ISOLATION_DAYS: u8 = 1;
    pub const SEDENTARY_HOURS: f64 = 4.0;
    pub const CRAMMING: bool = false;
    pub const CURRENT_TIME: u8 = 14;
}

/// Structured intake shape. Unknown keys are rejected outright; omitted keys
/// fall back to the documented defaults during [`StateFields::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StateFields {
    #[serde(default)]
    pub sleep_hours: Option<f64>,
    #[serde(default)]
    pub energy_level: Option<EnergyLevel>,
    #[serde(default)]
    pub stress_level: Option<StressLevel>,
    #[serde(default)]
    pub study_hours_today: Option<f64>,
    #[serde(default)]
    pub deadline_urgency: Option<DeadlineUrgency>,
    #[serde(default)]
    pub break_taken: Option<bool>,
    #[serde(default)]
    pub task_complexity: Option<TaskComplexity>,
    #[serde(default)]
    pub passive_learning_hours: Option<f64>,
    #[serde(default)]
    pub social_isolation_days: Option<u8>,
    #[serde(default)]
    pub sedentary_hours: Option<f64>,
    #[serde(default)]
    pub cramming: Option<bool>,
    #[serde(default)]
    pub current_time: Option<u8>,
}

impl StateFields {
    /// Fill every omitted field with its documented default.
    pub fn resolve(self) -> ResolvedFields {
        ResolvedFields {
            sleep_hours: self.sleep_hours.unwrap_or(defaults::SLEEP_HOURS),
            energy_level: self.energy_level.unwrap_or(defaults::ENERGY_LEVEL),
            stress_level: self.stress_level.unwrap_or(defaults::STRESS_LEVEL),
            study_hours_today: self.study_hours_today.unwrap_or(defaults::STUDY_HOURS_TODAY),
            deadline_urgency: self.deadline_urgency.unwrap_or(defaults::DEADLINE_URGENCY),
            break_taken: self.break_taken.unwrap_or(defaults::BREAK_TAKEN),
            task_complexity: self.task_complexity.unwrap_or(defaults::TASK_COMPLEXITY),
            passive_learning_hours: self
                .passive_learning_hours
                .unwrap_or(defaults::PASSIVE_LEARNING_HOURS),
            social_isolation_days: self
                .social_isolation_days
                .unwrap_or(defaults::SOCIAL_ISOLATION_DAYS),
            sedentary_hours: self.sedentary_hours.unwrap_or(defaults::SEDENTARY_HOURS),
            cramming: self.cramming.unwrap_or(defaults::CRAMMING),
            current_time: self.current_time.unwrap_or(defaults::CURRENT_TIME),
        }
    }
}

/// Every field concrete, ready for validation into a [`StudentState`].
///
/// The extraction collaborator returns this shape directly (its contract
/// requires all twelve fields, defaulted by the model when unmentioned).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedFields {
    pub sleep_hours: f64,
    pub energy_level: EnergyLevel,
    pub stress_level: StressLevel,
    pub study_hours_today: f64,
    pub deadline_urgency: DeadlineUrgency,
    pub break_taken: bool,
    pub task_complexity: TaskComplexity,
    pub passive_learning_hours: f64,
    pub social_isolation_days: u8,
    pub sedentary_hours: f64,
    pub cramming: bool,
    pub current_time: u8,
}

/// Resolve a structured request into a validated state fact plus the
/// provided/assumed classification the presentation layer reports.
pub fn resolve_structured(
    fields: StateFields,
) -> Result<(StudentState, CompletenessReport), StateValidationError> {
    let resolved = fields.resolve();
    let report = completeness::classify_structured(&resolved);
    let state = StudentState::from_fields(resolved)?;
    Ok((state, report))
}

/// Resolve an extraction payload. Here every field arrived populated, so the
/// classification compares values against the documented defaults instead.
pub fn resolve_extracted(
    fields: ResolvedFields,
) -> Result<(StudentState, CompletenessReport), StateValidationError> {
    let report = completeness::classify_extracted(&fields);
    let state = StudentState::from_fields(fields)?;
    Ok((state, report))
}
