use anyhow::Result;
use thirtyfour::prelude::*;

use crate::api::ApiController;

pub mod day_cycle;
pub mod insights;
pub mod persistence;
pub mod smoke;
pub mod task_cycle;

#[derive(Debug, Clone)]
pub struct ScenarioCtx {
    pub base_url: String,
    pub verbose: bool,
}

/// A QA flow that can run against the backend, the rendered page, or both.
#[async_trait::async_trait(?Send)]
pub trait Scenario {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    async fn run_api(&self, ctl: &ApiController) -> Result<()>;

    async fn run_browser(&self, _driver: &WebDriver, _ctx: &ScenarioCtx) -> Result<()> {
        anyhow::bail!("Browser testing not implemented for {}", self.name())
    }
}

fn catalog() -> Vec<Box<dyn Scenario>> {
    vec![
        Box::new(smoke::SmokeScenario),
        Box::new(task_cycle::TaskCycleScenario),
        Box::new(day_cycle::DayCycleScenario),
        Box::new(persistence::PersistenceScenario),
        Box::new(insights::InsightsScenario),
    ]
}

pub fn get_scenario(name: &str) -> Option<Box<dyn Scenario>> {
    catalog().into_iter().find(|s| s.name() == name)
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    catalog()
        .iter()
        .map(|s| (s.name(), s.description()))
        .collect()
}

pub fn all_scenario_names() -> Vec<String> {
    catalog().iter().map(|s| s.name().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_names_are_unique_and_resolvable() {
        let names = all_scenario_names();
        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
        for name in &names {
            assert!(get_scenario(name).is_some(), "{name} should resolve");
        }
        assert!(get_scenario("missing").is_none());
    }

    #[test]
    fn listing_carries_descriptions() {
        let listing = list_scenarios();
        assert!(listing.iter().any(|(name, _)| *name == "smoke"));
        assert!(listing.iter().all(|(_, desc)| !desc.is_empty()));
    }
}
