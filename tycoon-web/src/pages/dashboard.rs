use crate::components::day_controls::DayControls;
use crate::components::departments::DepartmentsPanel;
use crate::components::employees::EmployeesPanel;
use crate::components::stats_bar::StatsBar;
use crate::components::tasks::TaskPanel;
use crate::i18n::t;
use tycoon_core::StateFrame;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// `None` until the first successful refresh.
    pub frame: Option<StateFrame>,
    pub animation_ms: u32,
    pub on_task: Callback<String>,
    pub on_upgrade: Callback<String>,
    pub on_restore_energy: Callback<()>,
    pub on_open_hire: Callback<()>,
    pub on_end_day: Callback<()>,
    pub on_save: Callback<()>,
    pub on_load: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component(DashboardPage)]
pub fn dashboard_page(p: &Props) -> Html {
    let Some(frame) = p.frame.clone() else {
        return html! {
            <section class="panel loading" aria-busy="true">
                <p>{ t("app.loading") }</p>
            </section>
        };
    };
    let departments = frame.snapshot.departments.clone();
    let employees = frame.snapshot.employees.clone();

    html! {
        <div class="dashboard">
            <StatsBar frame={frame} animation_ms={p.animation_ms} />
            <div class="dashboard-grid">
                <TaskPanel on_task={p.on_task.clone()} on_restore_energy={p.on_restore_energy.clone()} />
                <DayControls
                    on_end_day={p.on_end_day.clone()}
                    on_save={p.on_save.clone()}
                    on_load={p.on_load.clone()}
                    on_reset={p.on_reset.clone()}
                />
                <DepartmentsPanel departments={departments} on_upgrade={p.on_upgrade.clone()} />
                <EmployeesPanel employees={employees} on_hire={p.on_open_hire.clone()} />
            </div>
        </div>
    }
}
