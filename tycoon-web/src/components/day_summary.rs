use crate::components::modal::Modal;
use crate::components::summary_tree::render_entries;
use crate::i18n::t;
use tycoon_core::DaySummary;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub summary: Option<DaySummary>,
    pub on_close: Callback<()>,
    /// Reset the game from the game-over block.
    pub on_restart: Callback<()>,
}

fn game_over_block(summary: &DaySummary, on_restart: &Callback<()>) -> Html {
    let Some(game_over) = summary.game_over.as_ref() else {
        return Html::default();
    };
    let headline = game_over.headline.clone().unwrap_or_else(|| t("summary.game_over"));
    let restart = on_restart.reform(|_: MouseEvent| ());
    html! {
        <div class="alert alert-dark game-over">
            <h3>{ headline }</h3>
            { game_over.reason.clone().map(|r| html! { <p class="game-over-reason">{ r }</p> }).unwrap_or_default() }
            { game_over.description.clone().map(|d| html! { <p>{ d }</p> }).unwrap_or_default() }
            <button id="game-over-restart-btn" type="button" class="btn btn-danger" onclick={restart}>
                { t("summary.restart") }
            </button>
        </div>
    }
}

/// End-of-day dialog. Closing it is the caller's cue to refresh.
#[function_component(DaySummaryModal)]
pub fn day_summary_modal(p: &Props) -> Html {
    let Some(summary) = p.summary.as_ref() else {
        return Html::default();
    };
    let close = p.on_close.reform(|_: MouseEvent| ());
    let footer = html! {
        <button id="summary-close-btn" type="button" class="btn btn-primary" onclick={close}>
            { t("summary.close") }
        </button>
    };

    html! {
        <Modal open=true title={t("summary.title")} on_close={p.on_close.clone()} footer={footer} return_focus_id={Some(AttrValue::from("end-day-btn"))}>
            <div id="day-summary-content">
                if let Some(message) = summary.bankruptcy.clone() {
                    <div class="alert alert-danger bankruptcy" role="alert">
                        <strong>{ t("summary.bankruptcy") }</strong>{ " " }{ message }
                    </div>
                }
                { game_over_block(summary, &p.on_restart) }
                if let Some(event) = summary.mini_event.clone() {
                    <div class="alert alert-info mini-event">
                        <strong>{ t("summary.mini_event") }{ ": " }{ event.name }</strong>
                        { event.description.map(|d| html! { <p>{ d }</p> }).unwrap_or_default() }
                    </div>
                }
                if !summary.achievements.is_empty() {
                    <div class="alert alert-success new-achievements">
                        <strong>{ t("summary.achievements") }</strong>
                        <ul>
                            { for summary.achievements.iter().map(|a| html! {
                                <li>
                                    { a.name.clone() }
                                    { a.description.clone().map(|d| html! { <small>{ " " }{ d }</small> }).unwrap_or_default() }
                                </li>
                            }) }
                        </ul>
                    </div>
                }
                if let Some(text) = summary.text.clone() {
                    <p class="summary-text">{ text }</p>
                }
                if !summary.entries.is_empty() {
                    { render_entries(&summary.entries) }
                }
            </div>
        </Modal>
    }
}
