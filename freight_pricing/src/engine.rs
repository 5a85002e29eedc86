//! Batch estimation engine.
//!
//! The `engine` module evaluates an [`EstimateBatch`] of named
//! scenarios and returns one [`ScenarioResult`] per scenario.  It uses
//! the [`rayon`] crate to spread the scenarios across CPU cores; each
//! scenario is a pure computation so no coordination is needed and
//! results come back in input order.

use crate::enterprise::classify;
use crate::models::{
    EnterpriseClassification, EnterpriseUsageInput, PersonalUsageInput, PersonalUsageRequest,
    PersonalUsageResult, PlatformQuote, PlatformUsageInput, PlatformUsageRequest,
};
use crate::personal::estimate;
use crate::platform::quote;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single calculator invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Scenario {
    Personal(PersonalUsageRequest),
    Enterprise(EnterpriseUsageInput),
    Platform(PlatformUsageRequest),
}

/// A scenario with a caller-chosen label, e.g. `"current"` or `"next year"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedScenario {
    pub name: String,
    #[serde(flatten)]
    pub scenario: Scenario,
}

/// Input to [`run_estimates`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateBatch {
    pub scenarios: Vec<NamedScenario>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Outcome {
    Personal(PersonalUsageResult),
    Enterprise(EnterpriseClassification),
    Platform(PlatformQuote),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Aggregate result of a batch, in the same order as the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateBatchResult {
    pub results: Vec<ScenarioResult>,
}

/// Evaluate every scenario in `batch`.
pub fn run_estimates(batch: EstimateBatch) -> EstimateBatchResult {
    debug!(scenarios = batch.scenarios.len(), "running estimate batch");

    let results: Vec<ScenarioResult> = batch
        .scenarios
        .into_par_iter()
        .map(|NamedScenario { name, scenario }| ScenarioResult {
            name,
            outcome: evaluate(scenario),
        })
        .collect();

    EstimateBatchResult { results }
}

fn evaluate(scenario: Scenario) -> Outcome {
    match scenario {
        Scenario::Personal(req) => {
            let input = PersonalUsageInput::from(req);
            Outcome::Personal(estimate(
                input.monthly_emails,
                input.rates_per_email,
                input.usage_frequency,
            ))
        }
        Scenario::Enterprise(input) => {
            Outcome::Enterprise(classify(input.daily_emails, input.auto_push, input.history_storage))
        }
        Scenario::Platform(req) => Outcome::Platform(quote(&PlatformUsageInput::from(req))),
    }
}
