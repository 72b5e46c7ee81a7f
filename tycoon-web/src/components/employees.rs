use crate::components::departments::department_label;
use crate::i18n::{fmt_money, t, tr};
use std::collections::BTreeMap;
use tycoon_core::Employee;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub employees: Vec<Employee>,
    pub on_hire: Callback<()>,
}

#[function_component(EmployeesPanel)]
pub fn employees_panel(p: &Props) -> Html {
    let open_hire = p.on_hire.reform(|_: MouseEvent| ());
    let rows = p.employees.iter().map(|emp| {
        let salary = fmt_money(emp.salary);
        html! {
            <li class="employee">
                <strong>{ emp.name.clone() }</strong>
                <span class="employee-position">{ emp.position.clone() }</span>
                if !emp.department.is_empty() {
                    <span class="employee-department">{ department_label(&emp.department) }</span>
                }
                <small class="employee-salary">
                    { tr("employees.salary", Some(&BTreeMap::from([("amount", salary.as_str())]))) }
                </small>
            </li>
        }
    });

    html! {
        <section id="employees-container" class="panel employees">
            <div class="panel-header">
                <h2>{ t("employees.title") }</h2>
                <button id="hire-open-btn" type="button" class="btn btn-primary" onclick={open_hire}>
                    { t("employees.hire") }
                </button>
            </div>
            if p.employees.is_empty() {
                <p class="text-muted">{ t("employees.empty") }</p>
            } else {
                <ul class="employee-list">{ for rows }</ul>
            }
        </section>
    }
}
