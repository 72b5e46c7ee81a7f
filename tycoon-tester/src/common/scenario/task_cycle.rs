use anyhow::{Context, Result};
use tycoon_core::{
    Action, ActionOutcome, ActionStatus, FetchStatus, Feedback, HireRequest, TASK_TYPES,
};

use super::Scenario;
use crate::api::ApiController;

pub struct TaskCycleScenario;

/// Rejections are game rules (no energy, no cash); only transport failures fail the run.
pub(crate) fn ensure_answered(label: &str, outcome: &ActionOutcome) -> Result<()> {
    anyhow::ensure!(
        matches!(outcome.status, ActionStatus::Applied | ActionStatus::Rejected),
        "{label} did not get an answer from the backend ({:?})",
        outcome.status
    );
    Ok(())
}

#[async_trait::async_trait(?Send)]
impl Scenario for TaskCycleScenario {
    fn name(&self) -> &'static str {
        "task-cycle"
    }

    fn description(&self) -> &'static str {
        "Every task type, energy restore, an upgrade and the hiring form"
    }

    async fn run_api(&self, ctl: &ApiController) -> Result<()> {
        anyhow::ensure!(ctl.refresh().await == FetchStatus::Applied, "initial refresh failed");

        for task in TASK_TYPES {
            let shown_before = ctl.view().states().len();
            let outcome = ctl.perform(Action::Task(task.to_string())).await;
            ensure_answered(task, &outcome)?;
            let shown_after = ctl.view().states().len();
            if outcome.is_applied() {
                anyhow::ensure!(
                    shown_after == shown_before + 1,
                    "{task} should refresh exactly once"
                );
            } else {
                anyhow::ensure!(shown_after == shown_before, "rejected {task} must not refresh");
            }
        }

        ensure_answered(
            "restore energy",
            &ctl.perform(Action::RestoreEnergy).await,
        )?;

        let snapshot = ctl.snapshot().context("no snapshot after tasks")?;
        if let Some(dept) = snapshot.department_keys().first() {
            ensure_answered(
                "department upgrade",
                &ctl.perform(Action::UpgradeDepartment(dept.clone())).await,
            )?;
        }

        let before = ctl.view().notices().len();
        let blank = ctl
            .perform(Action::Hire(HireRequest::new("  ", "Developer", "eng")))
            .await;
        anyhow::ensure!(
            blank.status == ActionStatus::Invalid,
            "blank hire form should be rejected locally, got {:?}",
            blank.status
        );
        let notices = ctl.view().notices();
        anyhow::ensure!(
            notices.len() == before + 1
                && notices.last().is_some_and(|n| n.feedback == Feedback::Key("hire.missing_fields")),
            "blank hire form should raise one missing-fields warning"
        );

        if let Some(dept) = snapshot.department_keys().first() {
            let hire = HireRequest::new("QA Bot", "Tester", dept.clone());
            ensure_answered("hire", &ctl.perform(Action::Hire(hire)).await)?;
        }

        anyhow::ensure!(ctl.view().danger_count() == 0, "no operation should fail");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(status: ActionStatus) -> ActionOutcome {
        ActionOutcome {
            status,
            message: None,
            summary: None,
        }
    }

    #[test]
    fn rejections_count_as_answers() {
        ensure_answered("task", &outcome(ActionStatus::Applied)).expect("applied");
        ensure_answered("task", &outcome(ActionStatus::Rejected)).expect("rejected");
        let err = ensure_answered("task", &outcome(ActionStatus::Failed)).expect_err("failed");
        assert!(err.to_string().contains("did not get an answer"));
        assert!(ensure_answered("hire", &outcome(ActionStatus::Invalid)).is_err());
    }
}
