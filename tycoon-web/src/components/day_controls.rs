use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_end_day: Callback<()>,
    pub on_save: Callback<()>,
    pub on_load: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component(DayControls)]
pub fn day_controls(p: &Props) -> Html {
    let click = |cb: &Callback<()>| cb.reform(|_: MouseEvent| ());
    html! {
        <section class="panel day-controls">
            <h2>{ t("day.title") }</h2>
            <button id="end-day-btn" type="button" class="btn btn-danger" onclick={click(&p.on_end_day)}>
                { t("day.end") }
            </button>
            <div class="btn-group">
                <button id="save-btn" type="button" class="btn btn-success" onclick={click(&p.on_save)}>
                    { t("day.save") }
                </button>
                <button id="load-btn" type="button" class="btn btn-info" onclick={click(&p.on_load)}>
                    { t("day.load") }
                </button>
                <button id="reset-btn" type="button" class="btn btn-outline-danger" onclick={click(&p.on_reset)}>
                    { t("day.reset") }
                </button>
            </div>
            <p class="text-muted shortcuts-hint"><small>{ t("day.shortcuts") }</small></p>
        </section>
    }
}
