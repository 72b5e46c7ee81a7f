use crate::components::summary_tree::render_node;
use crate::i18n::{fmt_money, fmt_number, t, tr};
use std::collections::BTreeMap;
use tycoon_core::{CashOutlook, DashboardStats, Forecast, humanize_key};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsProps {
    pub stats: Option<DashboardStats>,
}

#[function_component(StatsPanel)]
pub fn stats_panel(p: &StatsProps) -> Html {
    let Some(stats) = p.stats.as_ref() else {
        return html! {
            <section class="panel stats"><h2>{ t("insights.stats") }</h2><p class="text-muted">{ t("app.loading") }</p></section>
        };
    };
    let runway = stats.runway_days.map(|days| {
        let days = fmt_number(days);
        tr("insights.runway", Some(&BTreeMap::from([("days", days.as_str())])))
    });
    let flow = stats.net_daily_flow.map(|flow| {
        let amount = fmt_money(flow);
        tr("insights.net_flow", Some(&BTreeMap::from([("amount", amount.as_str())])))
    });
    html! {
        <section class="panel stats">
            <h2>{ t("insights.stats") }</h2>
            <div class="headline-figures">
                { runway.map(|r| html! { <p class="runway">{ r }</p> }).unwrap_or_default() }
                { flow.map(|f| html! { <p class="net-flow">{ f }</p> }).unwrap_or_default() }
            </div>
            if stats.sections.is_empty() {
                <p class="text-muted">{ t("insights.empty") }</p>
            }
            { for stats.sections.iter().map(|section| html! {
                <div class="stats-section" key={section.key.clone()}>
                    <h3>{ humanize_key(&section.key) }</h3>
                    { render_node(&section.node) }
                </div>
            }) }
        </section>
    }
}

const fn outlook_class(outlook: CashOutlook) -> &'static str {
    match outlook {
        CashOutlook::Healthy => "badge bg-success",
        CashOutlook::Warning => "badge bg-warning",
        CashOutlook::Critical => "badge bg-danger",
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ForecastProps {
    pub forecast: Option<Forecast>,
}

#[function_component(ForecastPanel)]
pub fn forecast_panel(p: &ForecastProps) -> Html {
    let Some(forecast) = p.forecast.as_ref() else {
        return html! {
            <section class="panel forecast"><h2>{ t("insights.forecast") }</h2><p class="text-muted">{ t("app.loading") }</p></section>
        };
    };
    let critical = forecast.first_critical_day().map(|day| {
        let day = day.to_string();
        tr("insights.first_critical", Some(&BTreeMap::from([("day", day.as_str())])))
    });
    html! {
        <section class="panel forecast">
            <h2>{ t("insights.forecast") }</h2>
            { critical.map(|c| html! { <div class="alert alert-danger">{ c }</div> }).unwrap_or_default() }
            <table class="table forecast-table">
                <thead>
                    <tr>
                        <th>{ t("predictions.day") }</th>
                        <th>{ t("predictions.estimated_cash") }</th>
                        <th>{ t("predictions.income") }</th>
                        <th>{ t("predictions.expenses") }</th>
                        <th>{ t("predictions.net_flow") }</th>
                        <th>{ t("predictions.status") }</th>
                    </tr>
                </thead>
                <tbody>
                    { for forecast.predictions.iter().map(|row| html! {
                        <tr key={row.day}>
                            <td>{ row.day }</td>
                            <td>{ fmt_money(row.estimated_cash) }</td>
                            <td>{ fmt_money(row.income) }</td>
                            <td>{ fmt_money(row.expenses) }</td>
                            <td>{ fmt_money(row.net_flow) }</td>
                            <td><span class={outlook_class(row.status)}>{ t(row.status.i18n_key()) }</span></td>
                        </tr>
                    }) }
                </tbody>
            </table>
            if !forecast.recommendations.is_empty() {
                <h3>{ t("insights.recommendations") }</h3>
                <ul class="recommendations">
                    { for forecast.recommendations.iter().map(|rec| html! {
                        <li class={format!("recommendation recommendation-{}", rec.kind)}>
                            <strong>{ rec.title.clone() }</strong>
                            <p>{ rec.message.clone() }</p>
                            if !rec.action.is_empty() {
                                <small class="text-muted">{ rec.action.clone() }</small>
                            }
                        </li>
                    }) }
                </ul>
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;
    use yew::LocalServerRenderer;

    #[test]
    fn stats_sections_and_headline_figures() {
        crate::i18n::set_lang("en");
        let stats = DashboardStats::from_body(
            &json!({
                "success": true,
                "financial_overview": { "runway_days": 14, "net_daily_flow": -250 },
                "employee_stats": { "total": 3 }
            }),
            32,
        )
        .expect("stats");
        let html = block_on(
            LocalServerRenderer::<StatsPanel>::with_props(StatsProps { stats: Some(stats) })
                .render(),
        );
        assert!(html.contains("Runway: 14 days"), "{html}");
        assert!(html.contains("-250 TL"), "{html}");
        assert!(html.contains("EMPLOYEE STATS"));
    }

    #[test]
    fn forecast_flags_first_critical_day() {
        crate::i18n::set_lang("en");
        let forecast = Forecast::from_body(&json!({
            "success": true,
            "predictions": [
                { "day": 5, "estimated_cash": 800, "income": 100, "expenses": 300, "net_flow": -200, "status": "warning" },
                { "day": 6, "estimated_cash": -100, "income": 100, "expenses": 300, "net_flow": -200, "status": "critical" }
            ],
            "recommendations": [
                { "type": "finance", "title": "Cut costs", "message": "Expenses exceed income", "action": "Fire someone" }
            ]
        }))
        .expect("forecast");
        let html = block_on(
            LocalServerRenderer::<ForecastPanel>::with_props(ForecastProps {
                forecast: Some(forecast),
            })
            .render(),
        );
        assert!(html.contains("Cash turns critical on day 6"), "{html}");
        assert!(html.contains("bg-danger"));
        assert!(html.contains("Cut costs"));
        assert!(html.contains("recommendation-finance"));
    }
}
