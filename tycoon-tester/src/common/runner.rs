use anyhow::Result;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::api::new_controller;
use crate::common::scenario::Scenario;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    /// `api` or the browser label the scenario ran in.
    pub target: String,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
}

impl ScenarioResult {
    /// Fold per-iteration outcomes into one result row.
    #[must_use]
    pub fn from_runs(
        scenario_name: &str,
        target: &str,
        runs: Vec<(Duration, Result<()>)>,
    ) -> Self {
        let iterations_run = runs.len();
        let mut failures = Vec::new();
        let mut total = Duration::ZERO;
        for (idx, (elapsed, outcome)) in runs.into_iter().enumerate() {
            total += elapsed;
            if let Err(err) = outcome {
                failures.push(format!("iteration {}: {err:#}", idx + 1));
            }
        }
        let average_duration = u32::try_from(iterations_run)
            .ok()
            .filter(|n| *n > 0)
            .map_or(Duration::ZERO, |n| total / n);
        Self {
            scenario_name: scenario_name.to_string(),
            target: target.to_string(),
            passed: failures.is_empty() && iterations_run > 0,
            iterations_run,
            successful_iterations: iterations_run - failures.len(),
            failures,
            average_duration,
        }
    }
}

/// Runs scenarios against a live backend through the dashboard controller.
pub struct ApiTester {
    api_url: String,
    timeout: Duration,
    verbose: bool,
}

impl ApiTester {
    pub fn new(api_url: impl Into<String>, timeout: Duration, verbose: bool) -> Self {
        Self {
            api_url: api_url.into(),
            timeout,
            verbose,
        }
    }

    /// Each iteration gets a fresh controller so client-side state never leaks
    /// between runs; backend state is whatever the previous run left behind.
    pub async fn run_scenario(&self, scenario: &dyn Scenario, iterations: usize) -> ScenarioResult {
        if self.verbose {
            println!(
                "🧪 Testing scenario: {} against {}",
                scenario.name().bright_white(),
                self.api_url
            );
        }
        let mut runs = Vec::with_capacity(iterations);
        for _ in 0..iterations {
            let start = Instant::now();
            let outcome = match new_controller(&self.api_url, self.timeout) {
                Ok(ctl) => scenario.run_api(&ctl).await,
                Err(err) => Err(err),
            };
            if self.verbose
                && let Err(err) = &outcome
            {
                println!("  ❌ {}", format!("{err:#}").red());
            }
            runs.push((start.elapsed(), outcome));
        }
        ScenarioResult::from_runs(scenario.name(), "api", runs)
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ms = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_runs_into_a_result() {
        let runs = vec![
            (Duration::from_millis(10), Ok(())),
            (Duration::from_millis(30), Err(anyhow::anyhow!("energy went negative"))),
        ];
        let result = ScenarioResult::from_runs("task-cycle", "api", runs);
        assert!(!result.passed);
        assert_eq!(result.iterations_run, 2);
        assert_eq!(result.successful_iterations, 1);
        assert_eq!(result.average_duration, Duration::from_millis(20));
        assert!(result.failures[0].starts_with("iteration 2"));
    }

    #[test]
    fn zero_iterations_never_pass() {
        let result = ScenarioResult::from_runs("smoke", "api", Vec::new());
        assert!(!result.passed);
        assert_eq!(result.average_duration, Duration::ZERO);
    }

    #[test]
    fn durations_serialize_as_milliseconds() {
        let result = ScenarioResult::from_runs("smoke", "api", vec![(Duration::from_millis(42), Ok(()))]);
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["average_duration"], 42);
        let back: ScenarioResult = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back.average_duration, Duration::from_millis(42));
    }

    #[tokio::test]
    async fn unreachable_backend_fails_every_iteration() {
        let tester = ApiTester::new("http://127.0.0.1:9", Duration::from_millis(500), false);
        let scenario = crate::common::scenario::get_scenario("smoke").expect("smoke exists");
        let result = tester.run_scenario(scenario.as_ref(), 2).await;
        assert!(!result.passed);
        assert_eq!(result.failures.len(), 2);
    }
}
