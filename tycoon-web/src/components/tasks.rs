use crate::i18n::t;
use tycoon_core::TASK_TYPES;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_task: Callback<String>,
    pub on_restore_energy: Callback<()>,
}

#[function_component(TaskPanel)]
pub fn task_panel(p: &Props) -> Html {
    let buttons = TASK_TYPES.into_iter().map(|task| {
        let onclick = p.on_task.reform(move |_: MouseEvent| task.to_string());
        html! {
            <button type="button" class="btn btn-outline-secondary task-btn" data-task={task} {onclick}>
                { t(&format!("tasks.{task}")) }
            </button>
        }
    });
    let restore = p.on_restore_energy.reform(|_: MouseEvent| ());

    html! {
        <section class="panel tasks">
            <h2>{ t("tasks.title") }</h2>
            <div class="btn-group">{ for buttons }</div>
            <button id="restore-energy-btn" type="button" class="btn btn-warning" onclick={restore}>
                { t("tasks.restore_energy") }
            </button>
        </section>
    }
}
