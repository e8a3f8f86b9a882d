//! The advisor rule catalogue: sixteen independent condition/action pairs
//! evaluated against a single immutable [`StudentState`] snapshot.
//!
//! Each rule is a pure, total function of the state. Conditions never consult
//! another rule's output, so one pass over [`RULES`] is a complete inference
//! run. Thresholds, confidence values, priorities, durations, and category
//! tags are fixed domain content and are covered by tests; changing any of
//! them is a behavioral change, not a refactor.

use super::super::domain::{
    ActivityCategory, DeadlineUrgency, EnergyLevel, Recommendation, StressLevel, StudentState,
    TaskComplexity,
};

pub(crate) type RuleFn = fn(&StudentState) -> Option<Recommendation>;

/// Declaration order doubles as the tie-break for equal (priority, confidence)
/// pairs after the stable ranking sort.
pub(crate) const RULES: [RuleFn; 16] = [
    critical_sleep_deficit,
    moderate_sleep_deficit,
    power_nap,
    adequate_sleep,
    mandatory_break,
    study_overload,
    anti_cramming,
    morning_peak,
    late_evening_stop,
    low_energy_complex_task,
    high_energy_utilization,
    social_isolation,
    exercise_for_energy,
    urgent_deadline_good_state,
    urgent_deadline_poor_state,
    active_learning,
];

fn recommendation(
    activity: &str,
    description: &str,
    confidence: u8,
    reason: String,
    priority: u8,
    duration: &str,
    category: ActivityCategory,
    rule_fired: &str,
) -> Recommendation {
    Recommendation {
        activity: activity.to_string(),
        description: description.to_string(),
        confidence,
        reason,
        priority,
        duration: duration.to_string(),
        category,
        rule_fired: rule_fired.to_string(),
    }
}

// Sleep

fn critical_sleep_deficit(state: &StudentState) -> Option<Recommendation> {
    if state.sleep_hours >= 5.0 {
        return None;
    }
    Some(recommendation(
        "Rest Priority",
        "Take a 30-90 minute rest/nap before studying",
        90,
        format!(
            "Critical sleep deficit detected ({}h). Research shows severe cognitive \
             impairment below 5 hours. Rest will improve study efficiency even with \
             deadline pressure.",
            state.sleep_hours
        ),
        1,
        "30-90 minutes",
        ActivityCategory::Rest,
        "R1_CRITICAL_SLEEP_DEFICIT",
    ))
}

fn moderate_sleep_deficit(state: &StudentState) -> Option<Recommendation> {
    let in_band = (5.0..6.5).contains(&state.sleep_hours);
    let low_energy = matches!(state.energy_level, EnergyLevel::Low | EnergyLevel::VeryLow);
    if !(in_band && low_energy) {
        return None;
    }
    Some(recommendation(
        "Short Rest",
        "Take a 30-60 minute rest before demanding tasks",
        75,
        format!(
            "Moderate sleep deficit ({}h) with low energy. Short rest can help recover \
             cognitive capacity.",
            state.sleep_hours
        ),
        2,
        "30-60 minutes",
        ActivityCategory::Rest,
        "R2_MODERATE_SLEEP_DEFICIT",
    ))
}

fn power_nap(state: &StudentState) -> Option<Recommendation> {
    if !(state.sleep_hours < 6.5 && (13..16).contains(&state.current_time)) {
        return None;
    }
    Some(recommendation(
        "Power Nap",
        "Take a 20-30 minute power nap",
        85,
        format!(
            "Sleep deficit with afternoon timing (current time: {}:00). Short naps \
             improve alertness for 2-3 hours without disrupting night sleep.",
            state.current_time
        ),
        1,
        "20-30 minutes",
        ActivityCategory::Rest,
        "R3_POWER_NAP",
    ))
}

fn adequate_sleep(state: &StudentState) -> Option<Recommendation> {
    let rested = state.sleep_hours >= 7.0;
    let good_energy = matches!(state.energy_level, EnergyLevel::High | EnergyLevel::Moderate);
    if !(rested && good_energy) {
        return None;
    }
    Some(recommendation(
        "Challenging Study",
        "Tackle your most difficult subjects/topics now",
        85,
        format!(
            "Well-rested state ({}h sleep) with good energy. Optimal conditions for \
             cognitively demanding tasks.",
            state.sleep_hours
        ),
        1,
        "60-90 minutes",
        ActivityCategory::Study,
        "R4_ADEQUATE_SLEEP",
    ))
}

// Study duration and breaks

fn mandatory_break(state: &StudentState) -> Option<Recommendation> {
    if !(state.study_hours_today >= 4.0 && !state.break_taken) {
        return None;
    }
    Some(recommendation(
        "Mandatory Break",
        "Take a 15-30 minute break immediately",
        80,
        format!(
            "You've studied {} hours today without a substantial break. Attention and \
             cognitive performance decline after 4 hours continuous work.",
            state.study_hours_today
        ),
        1,
        "15-30 minutes",
        ActivityCategory::Break,
        "R5_MANDATORY_BREAK",
    ))
}

fn study_overload(state: &StudentState) -> Option<Recommendation> {
    let overloaded = state.study_hours_today > 6.0;
    let stressed = matches!(state.stress_level, StressLevel::High | StressLevel::VeryHigh);
    if !(overloaded && stressed) {
        return None;
    }
    Some(recommendation(
        "Stress Reduction",
        "Stop studying and do a stress-reduction activity",
        80,
        format!(
            "Very high study hours ({}h) combined with high stress. Continuing will be \
             counterproductive. Take a real break.",
            state.study_hours_today
        ),
        1,
        "30-60 minutes",
        ActivityCategory::Wellness,
        "R15_HIGH_STRESS",
    ))
}

fn anti_cramming(state: &StudentState) -> Option<Recommendation> {
    if !state.cramming {
        return None;
    }
    Some(recommendation(
        "Distributed Practice",
        "Break your study into multiple shorter sessions over time",
        90,
        "Cramming (massed practice) is significantly less effective than distributed \
         practice. Plan to study in spaced intervals."
            .to_string(),
        2,
        "Multiple sessions",
        ActivityCategory::StudyStrategy,
        "R7_ANTI_CRAMMING",
    ))
}

// Time of day

fn morning_peak(state: &StudentState) -> Option<Recommendation> {
    let morning = (9..12).contains(&state.current_time);
    let good_energy = matches!(state.energy_level, EnergyLevel::Moderate | EnergyLevel::High);
    if !(morning && good_energy && state.sleep_hours >= 6.0) {
        return None;
    }
    Some(recommendation(
        "Challenging Study",
        "Focus on your most difficult subjects during morning hours",
        75,
        format!(
            "Morning time ({}:00) with adequate rest and energy. Most people show peak \
             cognitive performance in late morning.",
            state.current_time
        ),
        1,
        "90-120 minutes",
        ActivityCategory::Study,
        "R9_MORNING_PEAK",
    ))
}

fn late_evening_stop(state: &StudentState) -> Option<Recommendation> {
    if !(state.current_time >= 22 && state.sleep_hours < 7.0) {
        return None;
    }
    Some(recommendation(
        "Prepare for Sleep",
        "Stop studying and prepare for bed",
        80,
        format!(
            "Late evening ({}:00) with existing sleep debt ({}h previous night). Sleep \
             should be prioritized over late-night studying.",
            state.current_time, state.sleep_hours
        ),
        1,
        "Begin sleep routine",
        ActivityCategory::Rest,
        "R11_EVENING_STOP",
    ))
}

// Energy and cognitive load

fn low_energy_complex_task(state: &StudentState) -> Option<Recommendation> {
    if !(state.energy_level == EnergyLevel::VeryLow
        && state.task_complexity == TaskComplexity::High)
    {
        return None;
    }
    Some(recommendation(
        "Rest or Switch Task",
        "Either rest, or switch to simpler tasks (review notes, organize)",
        85,
        "Very low energy with high complexity task. Cognitive load theory indicates \
         this will be ineffective. Rest or simplify tasks."
            .to_string(),
        1,
        "20-30 min rest OR switch tasks",
        ActivityCategory::Rest,
        "R12_ENERGY_TASK_MISMATCH",
    ))
}

fn high_energy_utilization(state: &StudentState) -> Option<Recommendation> {
    if !(state.energy_level == EnergyLevel::High && state.sleep_hours >= 7.0) {
        return None;
    }
    Some(recommendation(
        "Tackle Hardest Tasks",
        "Use this high-energy state for your most challenging work",
        80,
        "High energy with good sleep. Cognitive resources are at peak. Tackle the most \
         demanding tasks before resources deplete."
            .to_string(),
        1,
        "90-120 minutes",
        ActivityCategory::Study,
        "R14_HIGH_ENERGY_USE",
    ))
}

// Stress and mental health

fn social_isolation(state: &StudentState) -> Option<Recommendation> {
    if !(state.social_isolation_days > 3 && state.stress_level.is_elevated()) {
        return None;
    }
    Some(recommendation(
        "Social Activity",
        "Connect with friends - study group, meal together, or casual hangout",
        75,
        format!(
            "You haven't had social interaction in {} days with elevated stress. Social \
             connection buffers stress and improves well-being.",
            state.social_isolation_days
        ),
        2,
        "1-2 hours",
        ActivityCategory::Social,
        "R16_SOCIAL_ISOLATION",
    ))
}

// Physical activity

fn exercise_for_energy(state: &StudentState) -> Option<Recommendation> {
    if !(state.energy_level == EnergyLevel::Low
        && state.sleep_hours >= 6.0
        && state.sedentary_hours > 4.0)
    {
        return None;
    }
    Some(recommendation(
        "Light Exercise",
        "Take a 10-20 minute walk or do light stretching",
        80,
        format!(
            "Low energy but adequate sleep with {}h sedentary time. Light physical \
             activity can boost alertness and focus.",
            state.sedentary_hours
        ),
        2,
        "10-20 minutes",
        ActivityCategory::Exercise,
        "R18_EXERCISE_BOOST",
    ))
}

// Deadline management

fn urgent_deadline_good_state(state: &StudentState) -> Option<Recommendation> {
    let urgent = state.deadline_urgency == DeadlineUrgency::Urgent;
    let good_energy = matches!(state.energy_level, EnergyLevel::Moderate | EnergyLevel::High);
    if !(urgent && state.sleep_hours >= 6.0 && good_energy) {
        return None;
    }
    Some(recommendation(
        "Focused Study Session",
        "Use Pomodoro technique: 25 min focused work + 5 min breaks",
        80,
        "Urgent deadline with adequate rest and energy. You're in good condition for \
         productive focused work."
            .to_string(),
        1,
        "Multiple 25-min sessions",
        ActivityCategory::Study,
        "R20_URGENT_GOOD_STATE",
    ))
}

fn urgent_deadline_poor_state(state: &StudentState) -> Option<Recommendation> {
    if !(state.deadline_urgency == DeadlineUrgency::Urgent && state.sleep_hours < 5.0) {
        return None;
    }
    Some(recommendation(
        "Strategic Rest Then Study",
        "Take 20-30 min power nap, THEN study",
        75,
        format!(
            "Urgent deadline but severe sleep deficit ({}h). Even with time pressure, \
             short rest will improve efficiency more than tired studying.",
            state.sleep_hours
        ),
        1,
        "20-30 min nap + focused study",
        ActivityCategory::Rest,
        "R21_URGENT_POOR_STATE",
    ))
}

// Task variety

fn active_learning(state: &StudentState) -> Option<Recommendation> {
    if state.passive_learning_hours <= 2.0 {
        return None;
    }
    Some(recommendation(
        "Active Learning",
        "Switch to active learning: practice problems, teach concept, or write summary",
        85,
        format!(
            "You've done {}h of passive learning (reading/watching). Research shows \
             active learning is significantly more effective.",
            state.passive_learning_hours
        ),
        2,
        "30-60 minutes",
        ActivityCategory::StudyStrategy,
        "R24_ACTIVE_LEARNING",
    ))
}
