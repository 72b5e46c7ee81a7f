use anyhow::{Context, Result};
use std::time::Duration;
use thirtyfour::prelude::*;
use tycoon_core::{FetchStatus, HistoryEntry};

use super::{Scenario, ScenarioCtx};
use crate::api::ApiController;
use crate::browser::DashboardPage;

pub struct InsightsScenario;

#[async_trait::async_trait(?Send)]
impl Scenario for InsightsScenario {
    fn name(&self) -> &'static str {
        "insights"
    }

    fn description(&self) -> &'static str {
        "Achievements, history, statistics and forecast panels load"
    }

    async fn run_api(&self, ctl: &ApiController) -> Result<()> {
        let loads = [
            ("achievements", ctl.load_achievements().await),
            ("history", ctl.load_history().await),
            ("stats", ctl.load_stats().await),
            ("predictions", ctl.load_forecast().await),
        ];
        for (label, status) in loads {
            anyhow::ensure!(status == FetchStatus::Applied, "{label} did not load: {status:?}");
        }

        let view = ctl.view();
        let history = view.history().context("history not shown")?;
        history_expectation(&history, ctl.config().history_window)?;
        view.achievements().context("achievements not shown")?;
        view.stats().context("stats not shown")?;
        view.forecast().context("forecast not shown")?;
        Ok(())
    }

    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        let page = DashboardPage::open(driver, &ctx.base_url).await?;
        page.click_nav("/insights").await?;
        page.wait_for(".insights-grid", Duration::from_secs(5)).await?;
        page.click_nav("/history").await?;
        page.wait_for(".history", Duration::from_secs(5)).await?;
        page.click_nav("/achievements").await?;
        page.wait_for(".achievements", Duration::from_secs(5)).await?;
        Ok(())
    }
}

fn history_expectation(history: &[HistoryEntry], window: u32) -> Result<()> {
    let window = usize::try_from(window).unwrap_or(usize::MAX);
    anyhow::ensure!(
        history.len() <= window,
        "history returned {} days for a window of {window}",
        history.len()
    );
    for entry in history {
        anyhow::ensure!(entry.day >= 0, "history has a negative day {}", entry.day);
    }
    Ok(())
}
