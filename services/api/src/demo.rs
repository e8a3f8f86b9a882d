use crate::infra::ApiExtractor;
use chrono::{Local, Timelike};
use clap::Args;
use std::io::{ErrorKind, Read};
use std::path::PathBuf;
use std::sync::Arc;
use study_advisor::advisor::{export, AdvisorOutcome, AdvisorService, StateFields};
use study_advisor::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct AdviseArgs {
    /// Path to a JSON document with state fields; reads stdin when omitted
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Print the recommendations as CSV instead of a readable listing
    #[arg(long)]
    pub(crate) csv: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Also print the completeness breakdown for each scenario
    #[arg(long)]
    pub(crate) show_completeness: bool,
}

fn parse_fields(raw: &str) -> Result<StateFields, AppError> {
    serde_json::from_str(raw)
        .map_err(|err| AppError::Io(std::io::Error::new(ErrorKind::InvalidData, err)))
}

pub(crate) fn run_advise(args: AdviseArgs) -> Result<(), AppError> {
    let raw = match &args.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let mut fields = parse_fields(&raw)?;
    if fields.current_time.is_none() {
        // The original form pre-filled the hour from the wall clock; only the
        // CLI does this, the HTTP path sticks to the documented default.
        fields.current_time = Some(Local::now().hour() as u8);
    }

    let service = AdvisorService::new(Arc::new(ApiExtractor::Disabled));
    let outcome = service.advise(fields)?;

    if args.csv {
        let csv = export::to_csv(&outcome.recommendations)
            .map_err(|err| AppError::Io(std::io::Error::new(ErrorKind::InvalidData, err)))?;
        print!("{csv}");
        return Ok(());
    }

    render_outcome(&outcome, true);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = AdvisorService::new(Arc::new(ApiExtractor::Disabled));

    println!("Study advisor demo");

    println!("\nScenario 1: exhausted student the night before an exam");
    let exam_crunch = StateFields {
        sleep_hours: Some(3.0),
        energy_level: Some(study_advisor::advisor::EnergyLevel::VeryLow),
        stress_level: Some(study_advisor::advisor::StressLevel::High),
        study_hours_today: Some(1.0),
        deadline_urgency: Some(study_advisor::advisor::DeadlineUrgency::Urgent),
        break_taken: Some(false),
        current_time: Some(10),
        ..StateFields::default()
    };
    let outcome = service.advise(exam_crunch)?;
    render_outcome(&outcome, args.show_completeness);

    println!("\nScenario 2: rested, low-key day");
    let balanced = StateFields {
        sleep_hours: Some(7.5),
        energy_level: Some(study_advisor::advisor::EnergyLevel::Low),
        stress_level: Some(study_advisor::advisor::StressLevel::Low),
        study_hours_today: Some(1.0),
        break_taken: Some(true),
        passive_learning_hours: Some(0.0),
        social_isolation_days: Some(0),
        sedentary_hours: Some(1.0),
        current_time: Some(10),
        ..StateFields::default()
    };
    let outcome = service.advise(balanced)?;
    render_outcome(&outcome, args.show_completeness);

    Ok(())
}

fn render_outcome(outcome: &AdvisorOutcome, show_completeness: bool) {
    if outcome.is_balanced() {
        println!("No rule matched: balanced state, keep to your planned routine.");
    } else {
        println!(
            "{} recommendation(s) | avg confidence {:.0}% | {} rule(s) fired",
            outcome.summary.alternatives,
            outcome.summary.average_confidence,
            outcome.summary.rules_fired
        );
        for (index, rec) in outcome.recommendations.iter().enumerate() {
            println!(
                "{}. {} [priority {} | confidence {}% | {}]",
                index + 1,
                rec.activity,
                rec.priority,
                rec.confidence,
                rec.duration
            );
            println!("   What to do: {}", rec.description);
            println!("   Why: {}", rec.reason);
            println!("   Rule: {}", rec.rule_fired);
        }
    }

    if show_completeness {
        println!(
            "Information completeness: {:.0}% ({} assumption(s))",
            outcome.completeness.percent(),
            outcome.completeness.assumption_count()
        );
        for line in &outcome.completeness.assumed {
            println!("   assumed {line}");
        }
    }
}
