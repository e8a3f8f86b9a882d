use serde::{Deserialize, Serialize};

/// Self-reported energy bands offered by the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyLevel {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Moderate,
    High,
}

impl EnergyLevel {
    pub fn label(&self) -> &'static str {
        match self {
            EnergyLevel::VeryLow => "Very Low",
            EnergyLevel::Low => "Low",
            EnergyLevel::Moderate => "Moderate",
            EnergyLevel::High => "High",
        }
    }
}

/// Self-reported stress bands offered by the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StressLevel {
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl StressLevel {
    pub fn label(&self) -> &'static str {
        match self {
            StressLevel::Low => "Low",
            StressLevel::Moderate => "Moderate",
            StressLevel::High => "High",
            StressLevel::VeryHigh => "Very High",
        }
    }

    /// Elevated stress covers everything from Moderate upward.
    pub fn is_elevated(&self) -> bool {
        !matches!(self, StressLevel::Low)
    }
}

/// Most urgent deadline the student is facing. The serde labels are the only
/// valid domain values; rules match on variants, never on substrings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeadlineUrgency {
    None,
    #[serde(rename = "This week")]
    ThisWeek,
    #[serde(rename = "Within 48 hours")]
    Within48Hours,
    #[serde(rename = "Urgent (within 24h)")]
    Urgent,
}

impl DeadlineUrgency {
    pub fn label(&self) -> &'static str {
        match self {
            DeadlineUrgency::None => "None",
            DeadlineUrgency::ThisWeek => "This week",
            DeadlineUrgency::Within48Hours => "Within 48 hours",
            DeadlineUrgency::Urgent => "Urgent (within 24h)",
        }
    }
}

/// Complexity of the current or next planned task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskComplexity {
    Low,
    Medium,
    High,
}

impl TaskComplexity {
    pub fn label(&self) -> &'static str {
        match self {
            TaskComplexity::Low => "Low",
            TaskComplexity::Medium => "Medium",
            TaskComplexity::High => "High",
        }
    }
}

/// Tag grouping recommendations for presentation and export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityCategory {
    Rest,
    Study,
    Break,
    Wellness,
    Social,
    Exercise,
    StudyStrategy,
}

impl ActivityCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityCategory::Rest => "rest",
            ActivityCategory::Study => "study",
            ActivityCategory::Break => "break",
            ActivityCategory::Wellness => "wellness",
            ActivityCategory::Social => "social",
            ActivityCategory::Exercise => "exercise",
            ActivityCategory::StudyStrategy => "study_strategy",
        }
    }
}

/// Immutable snapshot of a student's state for one inference run.
///
/// All twelve fields are concrete at evaluation time; the input provider is
/// responsible for defaulting any the caller omitted. Construct through
/// [`StudentState::from_fields`] so out-of-domain values are rejected before
/// the engine ever sees them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentState {
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

impl StudentState {
    /// Validate a fully-resolved field set into an immutable state fact.
    pub fn from_fields(fields: crate::advisor::input::ResolvedFields) -> Result<Self, StateValidationError> {
        let state = Self {
            sleep_hours: fields.sleep_hours,
            energy_level: fields.energy_level,
            stress_level: fields.stress_level,
            study_hours_today: fields.study_hours_today,
            deadline_urgency: fields.deadline_urgency,
            break_taken: fields.break_taken,
            task_complexity: fields.task_complexity,
            passive_learning_hours: fields.passive_learning_hours,
            social_isolation_days: fields.social_isolation_days,
            sedentary_hours: fields.sedentary_hours,
            cramming: fields.cramming,
            current_time: fields.current_time,
        };
        state.validate()?;
        Ok(state)
    }

    fn validate(&self) -> Result<(), StateValidationError> {
        check_range("sleep_hours", self.sleep_hours, 0.0, 12.0)?;
        check_range("study_hours_today", self.study_hours_today, 0.0, 12.0)?;
        check_range("passive_learning_hours", self.passive_learning_hours, 0.0, 8.0)?;
        check_range("sedentary_hours", self.sedentary_hours, 0.0, 12.0)?;
        if self.social_isolation_days > 7 {
            return Err(StateValidationError::OutOfDomain {
                field: "social_isolation_days",
                value: self.social_isolation_days.to_string(),
                domain: "0..=7",
            });
        }
        if self.current_time > 23 {
            return Err(StateValidationError::OutOfDomain {
                field: "current_time",
                value: self.current_time.to_string(),
                domain: "0..=23",
            });
        }
        Ok(())
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), StateValidationError> {
    if !value.is_finite() || value < min || value > max {
        return Err(StateValidationError::OutOfDomain {
            field,
            value: value.to_string(),
            domain: match field {
                "passive_learning_hours" => "0.0..=8.0",
                _ => "0.0..=12.0",
            },
        });
    }
    Ok(())
}

/// Fail-fast rejection of malformed state input. The engine performs no local
/// recovery: invalid input never reaches a rule condition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateValidationError {
    #[error("{field} value {value} is outside its domain ({domain})")]
    OutOfDomain {
        field: &'static str,
        value: String,
        domain: &'static str,
    },
}

/// One ranked, explainable suggestion produced by a fired rule.
///
/// Immutable once produced; lives only for the inference run that declared it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub activity: String,
    pub description: String,
    pub confidence: u8,
    pub reason: String,
    pub priority: u8,
    pub duration: String,
    pub category: ActivityCategory,
    pub rule_fired: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_labels_round_trip_through_serde() {
        let urgency: DeadlineUrgency =
            serde_json::from_str("\"Urgent (within 24h)\"").expect("full label parses");
        assert_eq!(urgency, DeadlineUrgency::Urgent);
        assert_eq!(
            serde_json::to_string(&urgency).expect("serializes"),
            "\"Urgent (within 24h)\""
        );

        let energy: EnergyLevel = serde_json::from_str("\"Very Low\"").expect("label parses");
        assert_eq!(energy.label(), "Very Low");
    }

    #[test]
    fn bare_urgent_is_not_a_valid_urgency_label() {
        let result: Result<DeadlineUrgency, _> = serde_json::from_str("\"Urgent\"");
        assert!(result.is_err());
    }

    #[test]
    fn category_serializes_in_snake_case() {
        assert_eq!(
            serde_json::to_string(&ActivityCategory::StudyStrategy).expect("serializes"),
            "\"study_strategy\""
        );
    }
}
