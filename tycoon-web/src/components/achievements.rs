use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use tycoon_core::Achievement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// `None` until the first fetch lands.
    pub achievements: Option<Vec<Achievement>>,
    pub on_refresh: Callback<()>,
}

#[function_component(AchievementsPanel)]
pub fn achievements_panel(p: &Props) -> Html {
    let refresh = p.on_refresh.reform(|_: MouseEvent| ());
    let body = match p.achievements.as_deref() {
        None => html! { <p class="text-muted">{ t("app.loading") }</p> },
        Some([]) => html! { <p class="text-muted">{ t("achievements.empty") }</p> },
        Some(list) => {
            let unlocked = list.iter().filter(|a| a.unlocked).count().to_string();
            let progress = tr(
                "achievements.progress",
                Some(&BTreeMap::from([("count", unlocked.as_str())])),
            );
            html! {
                <>
                    <p class="achievement-progress">{ progress }</p>
                    <ul class="achievement-list">
                        { for list.iter().map(|a| {
                            let class = if a.unlocked { "achievement unlocked" } else { "achievement locked" };
                            let status = if a.unlocked { t("achievements.unlocked") } else { t("achievements.locked") };
                            html! {
                                <li class={class} key={a.id.clone()}>
                                    <strong>{ a.name.clone() }</strong>
                                    <span class="achievement-desc">{ a.description.clone() }</span>
                                    <span class="badge">{ status }</span>
                                </li>
                            }
                        }) }
                    </ul>
                </>
            }
        }
    };

    html! {
        <section class="panel achievements">
            <div class="panel-header">
                <h2>{ t("achievements.title") }</h2>
                <button type="button" class="btn btn-sm btn-outline-secondary" onclick={refresh}>{ t("ui.refresh") }</button>
            </div>
            { body }
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
    fn lists_locked_and_unlocked() {
        crate::i18n::set_lang("en");
        let list = Achievement::list_from_body(&json!({
            "achievements": [
                { "id": "first_day", "name": "First Day", "desc": "Finish a day", "unlocked": true },
                { "id": "tycoon", "name": "Tycoon", "desc": "Reach 1M", "unlocked": false }
            ]
        }))
        .expect("achievements");
        let props = Props {
            achievements: Some(list),
            on_refresh: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<AchievementsPanel>::with_props(props).render());
        assert!(html.contains("First Day"));
        assert!(html.contains("Reach 1M"));
        assert!(html.contains("achievement locked"));
        assert!(html.contains("1 unlocked"), "{html}");
    }
}
