use tracing::debug;

use crate::algorithm::required_gpa::compute_required_gpa;
use crate::error::{PlannerError, PlannerResult};
use crate::models::{BestScenario, Scenario, ScenarioComparison, ScenarioOutcome};

/// Upper bound on scenarios compared side by side.
pub const MAX_SCENARIOS: usize = 5;

/// Evaluates every scenario with the required-GPA formula and picks the
/// achievable one that asks for the lowest reported (2 dp) semester GPA.
/// Scenarios that report the same value keep the earliest one.
pub fn compare_scenarios(scenarios: &[Scenario]) -> PlannerResult<ScenarioComparison> {
    if scenarios.is_empty() {
        return Err(PlannerError::invalid("scenarios", "at least one scenario is required"));
    }
    if scenarios.len() > MAX_SCENARIOS {
        return Err(PlannerError::invalid(
            "scenarios",
            format!("maximum {} scenarios allowed, got {}", MAX_SCENARIOS, scenarios.len()),
        ));
    }

    let mut outcomes: Vec<ScenarioOutcome> = Vec::with_capacity(scenarios.len());
    for (i, s) in scenarios.iter().enumerate() {
        let result = compute_required_gpa(&s.standing).map_err(|e| match e {
            PlannerError::InvalidArgument { field, reason } => {
                PlannerError::invalid(format!("scenarios[{}].{}", i, field), reason)
            }
        })?;
        outcomes.push(ScenarioOutcome { name: s.name.clone(), standing: s.standing, result });
    }

    let mut best: Option<(usize, f64)> = None;
    for (i, o) in outcomes.iter().enumerate() {
        if !o.result.is_achievable {
            continue;
        }
        let required = o.result.required_semester_gpa;
        match best {
            Some((_, lowest)) if required >= lowest => {}
            _ => best = Some((i, required)),
        }
    }

    let best = best.map(|(index, _)| BestScenario {
        index,
        name: outcomes[index].name.clone(),
        required_semester_gpa: outcomes[index].result.required_semester_gpa,
    });
    debug!(count = outcomes.len(), best = ?best.as_ref().map(|b| b.index), "scenarios compared");

    Ok(ScenarioComparison { scenarios: outcomes, best })
}
