use anyhow::{Context, Result};
use std::time::Duration;
use thirtyfour::prelude::*;
use tycoon_core::{Action, DaySummary, FetchStatus};

use super::task_cycle::ensure_answered;
use super::{Scenario, ScenarioCtx};
use crate::api::ApiController;
use crate::browser::DashboardPage;

pub struct DayCycleScenario;

#[async_trait::async_trait(?Send)]
impl Scenario for DayCycleScenario {
    fn name(&self) -> &'static str {
        "day-cycle"
    }

    fn description(&self) -> &'static str {
        "End the day and check the summary and the day counter"
    }

    async fn run_api(&self, ctl: &ApiController) -> Result<()> {
        anyhow::ensure!(ctl.refresh().await == FetchStatus::Applied, "initial refresh failed");
        let day_before = ctl.snapshot().context("no snapshot")?.current_day;

        let outcome = ctl.perform(Action::EndDay).await;
        ensure_answered("end day", &outcome)?;
        if !outcome.is_applied() {
            return Ok(());
        }

        let snapshot = ctl.snapshot().context("no snapshot after end day")?;
        match outcome.summary.as_ref() {
            Some(summary) => summary_expectation(summary, day_before, snapshot.current_day)?,
            None => anyhow::ensure!(
                snapshot.current_day > day_before,
                "day should advance from {day_before}, got {}",
                snapshot.current_day
            ),
        }
        anyhow::ensure!(
            ctl.view().summaries().len() == usize::from(outcome.summary.is_some()),
            "a returned summary should be shown exactly once"
        );
        anyhow::ensure!(
            ctl.view().unlocks().len()
                == outcome.summary.as_ref().map_or(0, |s| s.achievements.len()),
            "every unlocked achievement should be celebrated"
        );
        Ok(())
    }

    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        let page = DashboardPage::open(driver, &ctx.base_url).await?;
        let day_before = page.counter("current-day").await?;
        page.click("#end-day-btn").await?;
        page.accept_confirm().await?;
        page.wait_for("#day-summary-content", Duration::from_secs(5))
            .await
            .context("day summary did not open")?;
        page.click("#summary-close-btn").await?;
        tokio::time::sleep(Duration::from_millis(500)).await;
        let day_after = page.counter("current-day").await?;
        if ctx.verbose {
            println!("  📅 Day {day_before} -> {day_after}");
        }
        anyhow::ensure!(day_after >= day_before, "day went backwards");
        Ok(())
    }
}

/// A game-over summary may keep the day; otherwise the counter must move.
fn summary_expectation(summary: &DaySummary, day_before: i64, day_after: i64) -> Result<()> {
    if summary.game_over.is_some() {
        return Ok(());
    }
    anyhow::ensure!(
        day_after > day_before,
        "day should advance from {day_before}, got {day_after}"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn game_over_may_freeze_the_day() {
        let summary = DaySummary::from_value(&json!({ "game_over": { "headline": "Bankrupt" } }), 32);
        summary_expectation(&summary, 9, 9).expect("game over");
    }

    #[test]
    fn regular_summary_requires_progress() {
        let summary = DaySummary::from_value(&json!({ "income": 100 }), 32);
        summary_expectation(&summary, 3, 4).expect("advanced");
        let err = summary_expectation(&summary, 3, 3).expect_err("stuck");
        assert!(err.to_string().contains("advance"));
    }
}
