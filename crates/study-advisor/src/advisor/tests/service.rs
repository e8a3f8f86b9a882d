use std::sync::Arc;

use super::common::*;
use crate::advisor::domain::{EnergyLevel, StateValidationError};
use crate::advisor::input::StateFields;
use crate::advisor::service::{AdvisorService, AdvisorServiceError};

fn service_with(extractor: ScriptedExtractor) -> AdvisorService<ScriptedExtractor> {
    AdvisorService::new(Arc::new(extractor))
}

#[test]
fn structured_path_fills_defaults_and_reports_assumptions() {
    let service = service_with(ScriptedExtractor::returning(balanced_fields()));
    let outcome = service
        .advise(StateFields {
            sleep_hours: Some(3.0),
            energy_level: Some(EnergyLevel::VeryLow),
            ..StateFields::default()
        })
        .expect("valid request");

    assert!(outcome
        .recommendations
        .iter()
        .any(|rec| rec.rule_fired == "R1_CRITICAL_SLEEP_DEFICIT"));
    // All five optional fields were omitted.
    assert_eq!(outcome.completeness.assumption_count(), 5);
    assert_eq!(outcome.summary.alternatives, outcome.recommendations.len());
}

#[test]
fn structured_path_rejects_out_of_domain_values() {
    let service = service_with(ScriptedExtractor::returning(balanced_fields()));
    let err = service
        .advise(StateFields {
            social_isolation_days: Some(9),
            ..StateFields::default()
        })
        .expect_err("nine days is outside the 0-7 domain");
    assert!(matches!(
        err,
        StateValidationError::OutOfDomain {
            field: "social_isolation_days",
            ..
        }
    ));
}

#[test]
fn balanced_outcome_has_empty_list_and_zeroed_summary() {
    let service = service_with(ScriptedExtractor::returning(balanced_fields()));
    let outcome = service
        .advise(StateFields {
            sleep_hours: Some(7.5),
            energy_level: Some(EnergyLevel::Low),
            stress_level: Some(crate::advisor::domain::StressLevel::Low),
            study_hours_today: Some(1.0),
            break_taken: Some(true),
            passive_learning_hours: Some(0.0),
            social_isolation_days: Some(0),
            sedentary_hours: Some(1.0),
            current_time: Some(10),
            ..StateFields::default()
        })
        .expect("valid request");

    assert!(outcome.is_balanced());
    assert_eq!(outcome.summary.alternatives, 0);
    assert_eq!(outcome.summary.average_confidence, 0.0);
    assert_eq!(outcome.summary.rules_fired, 0);
}

#[tokio::test]
async fn text_path_runs_inference_on_extracted_fields() {
    let service = service_with(ScriptedExtractor::returning(exam_crunch_fields()));
    let outcome = service
        .advise_text("barely slept, exam tomorrow morning")
        .await
        .expect("extraction succeeds");

    let ids: Vec<&str> = outcome
        .recommendations
        .iter()
        .map(|rec| rec.rule_fired.as_str())
        .collect();
    assert!(ids.contains(&"R1_CRITICAL_SLEEP_DEFICIT"));
    assert!(ids.contains(&"R21_URGENT_POOR_STATE"));

    // Non-default extracted values count as provided.
    assert!(outcome
        .completeness
        .provided
        .iter()
        .any(|line| line == "Sleep hours: 3h"));
}

#[tokio::test]
async fn extraction_failure_short_circuits_inference() {
    let service = service_with(ScriptedExtractor::failing("model returned prose"));
    let err = service
        .advise_text("feeling fine I guess")
        .await
        .expect_err("scripted failure surfaces");

    match err {
        AdvisorServiceError::Extraction(inner) => {
            assert!(inner.to_string().contains("model returned prose"));
        }
        other => panic!("expected extraction error, got {other:?}"),
    }
}

#[test]
fn summary_counts_distinct_rules_and_average_confidence() {
    let service = service_with(ScriptedExtractor::returning(balanced_fields()));
    let mut request = StateFields::default();
    request.sleep_hours = Some(3.0); // R1 only: everything else at defaults
    request.current_time = Some(10);
    let outcome = service.advise(request).expect("valid request");

    assert_eq!(outcome.summary.alternatives, 1);
    assert_eq!(outcome.summary.rules_fired, 1);
    assert_eq!(outcome.summary.average_confidence, 90.0);
}
