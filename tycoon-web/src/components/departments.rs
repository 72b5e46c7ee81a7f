use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use tycoon_core::{Department, DepartmentKind};
use yew::prelude::*;

/// Localised name for a department key; unknown keys are shown as-is.
#[must_use]
pub fn department_label(key: &str) -> String {
    DepartmentKind::from_key(key).map_or_else(|| key.to_string(), |kind| t(kind.i18n_key()))
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub departments: Vec<Department>,
    pub on_upgrade: Callback<String>,
}

#[function_component(DepartmentsPanel)]
pub fn departments_panel(p: &Props) -> Html {
    let cards = p.departments.iter().map(|dept| {
        let level = dept.info.level().to_string();
        let count = dept.info.employee_count().to_string();
        let level_text = tr("dept.level", Some(&BTreeMap::from([("level", level.as_str())])));
        let count_text = tr("dept.employees", Some(&BTreeMap::from([("count", count.as_str())])));
        let upgrade = {
            let key = dept.key.clone();
            p.on_upgrade.reform(move |_: MouseEvent| key.clone())
        };
        html! {
            <div class="department-card" key={dept.key.clone()} data-department={dept.key.clone()}>
                <h3 class="card-title">{ department_label(&dept.key) }</h3>
                <p class="card-text">
                    <small>{ level_text }</small><br />
                    <small>{ count_text }</small>
                </p>
                <button type="button" class="btn btn-outline-primary" title={t("dept.upgrade_hint")} onclick={upgrade}>
                    { t("dept.upgrade") }
                </button>
            </div>
        }
    });

    html! {
        <section id="departments-container" class="panel departments">
            <h2>{ t("dept.title") }</h2>
            if p.departments.is_empty() {
                <p class="text-muted">{ t("dept.empty") }</p>
            } else {
                <div class="card-grid">{ for cards }</div>
            }
        </section>
    }
}
