use anyhow::{Context, Result};
use thirtyfour::prelude::*;
use tycoon_core::{FetchStatus, GameStateSnapshot};

use super::{Scenario, ScenarioCtx};
use crate::api::ApiController;
use crate::browser::DashboardPage;

pub struct SmokeScenario;

#[async_trait::async_trait(?Send)]
impl Scenario for SmokeScenario {
    fn name(&self) -> &'static str {
        "smoke"
    }

    fn description(&self) -> &'static str {
        "Dashboard state loads and looks sane"
    }

    async fn run_api(&self, ctl: &ApiController) -> Result<()> {
        let status = ctl.refresh().await;
        anyhow::ensure!(
            status == FetchStatus::Applied,
            "state refresh should apply, got {status:?}"
        );
        let frame = ctl.view().last_state().context("no state was shown")?;
        snapshot_expectation(&frame.snapshot)
    }

    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        let page = DashboardPage::open(driver, &ctx.base_url).await?;
        let cash = page.counter("cash").await?;
        let day = page.counter("current-day").await?;
        if ctx.verbose {
            println!("  🌐 Dashboard loaded: cash {cash}, day {day}");
        }
        anyhow::ensure!(day >= 0.0, "day counter should not be negative, got {day}");
        page.ensure_present("#energy-bar").await?;
        page.ensure_present("#lang-select").await?;
        page.ensure_present("a[href='#main']").await?;
        Ok(())
    }
}

fn snapshot_expectation(snapshot: &GameStateSnapshot) -> Result<()> {
    anyhow::ensure!(
        snapshot.current_day >= 0,
        "day should not be negative, got {}",
        snapshot.current_day
    );
    anyhow::ensure!(
        snapshot.energy >= 0.0,
        "energy should not be negative, got {}",
        snapshot.energy
    );
    anyhow::ensure!(
        snapshot.energy <= snapshot.max_energy,
        "energy {} exceeds max {}",
        snapshot.energy,
        snapshot.max_energy
    );
    anyhow::ensure!(
        snapshot.research >= 0.0,
        "research should not be negative, got {}",
        snapshot.research
    );
    Ok(())
}
