use crate::components::animated_value::AnimatedValue;
use crate::i18n::{fmt_number, t};
use tycoon_core::StateFrame;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub frame: StateFrame,
    #[prop_or(700)]
    pub animation_ms: u32,
}

#[function_component(StatsBar)]
pub fn stats_bar(p: &Props) -> Html {
    let snapshot = &p.frame.snapshot;
    let energy_pct = snapshot.energy_percent();
    let energy_text = format!(
        "{}/{}",
        fmt_number(snapshot.energy),
        fmt_number(snapshot.max_energy)
    );

    html! {
        <section class="stats-bar" aria-label={t("app.title")}>
            <div class="stat-card">
                <span class="stat-label">{ t("stats.cash") }</span>
                <span class="stat-value">
                    <AnimatedValue
                        id="cash"
                        value={p.frame.cash.to}
                        from={p.frame.cash.from}
                        duration_ms={p.animation_ms}
                        grouped=true
                    />
                    { " " }{ t("app.currency") }
                </span>
            </div>
            <div class="stat-card">
                <span class="stat-label">{ t("stats.research") }</span>
                <span class="stat-value">
                    <AnimatedValue
                        id="research"
                        value={p.frame.research.to}
                        from={p.frame.research.from}
                        duration_ms={p.animation_ms}
                    />
                </span>
            </div>
            <div class="stat-card">
                <span class="stat-label">{ t("stats.energy") }</span>
                <span id="energy" class="stat-value">{ fmt_number(snapshot.energy) }</span>
                <div class="progress">
                    <div
                        id="energy-bar"
                        class="progress-bar"
                        role="progressbar"
                        style={format!("width: {energy_pct}%")}
                        aria-valuenow={snapshot.energy.to_string()}
                        aria-valuemin="0"
                        aria-valuemax={snapshot.max_energy.to_string()}
                    >
                        { energy_text }
                    </div>
                </div>
            </div>
            <div class="stat-card">
                <span class="stat-label">{ t("stats.day") }</span>
                <span id="current-day" class="stat-value">{ snapshot.current_day }</span>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;
    use tycoon_core::{ClientState, GameStateSnapshot};
    use yew::LocalServerRenderer;

    #[test]
    fn stats_bar_renders_core_fields() {
        crate::i18n::set_lang("en");
        let mut state = ClientState::default();
        let frame = state.apply(GameStateSnapshot::from_value(&json!({
            "cash": 15000,
            "research": 42,
            "energy": 60,
            "max_energy": 120,
            "day": 7
        })));
        let props = Props {
            frame,
            animation_ms: 700,
        };
        let html = block_on(LocalServerRenderer::<StatsBar>::with_props(props).render());
        assert!(html.contains("15,000"), "{html}");
        assert!(html.contains("TL"), "{html}");
        assert!(html.contains(">42<"), "{html}");
        assert!(html.contains("60/120"), "{html}");
        assert!(html.contains("width: 50%"), "{html}");
        assert!(html.contains(">7<"), "{html}");
    }
}
