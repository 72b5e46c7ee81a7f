use anyhow::{Context, Result};
use tycoon_core::{Action, ActionStatus, FetchStatus, GameStateSnapshot};

use super::Scenario;
use super::task_cycle::ensure_answered;
use crate::api::ApiController;

pub struct PersistenceScenario;

#[async_trait::async_trait(?Send)]
impl Scenario for PersistenceScenario {
    fn name(&self) -> &'static str {
        "persistence"
    }

    fn description(&self) -> &'static str {
        "Save, change the company, load and compare"
    }

    async fn run_api(&self, ctl: &ApiController) -> Result<()> {
        anyhow::ensure!(ctl.refresh().await == FetchStatus::Applied, "initial refresh failed");
        let saved = ctl.snapshot().context("no snapshot to save")?;

        let shown = ctl.view().states().len();
        let save = ctl.perform(Action::Save).await;
        anyhow::ensure!(save.status == ActionStatus::Applied, "save failed: {:?}", save.message);
        anyhow::ensure!(ctl.view().states().len() == shown, "save must not refresh");

        ensure_answered("task", &ctl.perform(Action::Task("kod_yaz".into())).await)?;

        let load = ctl.perform(Action::Load).await;
        anyhow::ensure!(load.status == ActionStatus::Applied, "load failed: {:?}", load.message);
        let restored = ctl.snapshot().context("no snapshot after load")?;
        restore_expectation(&saved, &restored)
    }
}

fn restore_expectation(saved: &GameStateSnapshot, restored: &GameStateSnapshot) -> Result<()> {
    anyhow::ensure!(
        saved.current_day == restored.current_day,
        "loaded day {} differs from saved day {}",
        restored.current_day,
        saved.current_day
    );
    anyhow::ensure!(
        (saved.cash - restored.cash).abs() < 0.01,
        "loaded cash {} differs from saved cash {}",
        restored.cash,
        saved.cash
    );
    anyhow::ensure!(
        saved.employees.len() == restored.employees.len(),
        "employee count changed across save/load"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn identical_snapshots_match() {
        let snap = GameStateSnapshot::from_value(&json!({ "cash": 5000.5, "current_day": 4 }));
        restore_expectation(&snap, &snap.clone()).expect("same");
    }

    #[test]
    fn cash_drift_is_reported() {
        let saved = GameStateSnapshot::from_value(&json!({ "cash": 5000, "current_day": 4 }));
        let restored = GameStateSnapshot::from_value(&json!({ "cash": 4900, "current_day": 4 }));
        let err = restore_expectation(&saved, &restored).expect_err("drift");
        assert!(err.to_string().contains("cash"));
    }
}
