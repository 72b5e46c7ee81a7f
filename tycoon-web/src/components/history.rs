use crate::i18n::{fmt_money, t};
use tycoon_core::HistoryEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub history: Option<Vec<HistoryEntry>>,
}

#[function_component(HistoryPanel)]
pub fn history_panel(p: &Props) -> Html {
    let body = match p.history.as_deref() {
        None => html! { <p class="text-muted">{ t("app.loading") }</p> },
        Some([]) => html! { <p class="text-muted">{ t("history.empty") }</p> },
        Some(rows) => html! {
            <table class="table history-table">
                <thead>
                    <tr>
                        <th>{ t("history.day") }</th>
                        <th>{ t("history.start") }</th>
                        <th>{ t("history.end") }</th>
                        <th>{ t("history.change") }</th>
                    </tr>
                </thead>
                <tbody>
                    { for rows.iter().map(|row| {
                        let class = if row.net_change < 0.0 { "text-danger" } else { "text-success" };
                        html! {
                            <tr key={row.day}>
                                <td>{ row.day }</td>
                                <td>{ fmt_money(row.starting_cash) }</td>
                                <td>{ fmt_money(row.ending_cash) }</td>
                                <td class={class}>{ fmt_money(row.net_change) }</td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        },
    };
    html! {
        <section class="panel history">
            <h2>{ t("history.title") }</h2>
            { body }
        </section>
    }
}
