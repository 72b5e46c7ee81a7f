use crate::i18n::t;
use tycoon_core::{SummaryEntry, SummaryNode, humanize_key};
use yew::prelude::*;

/// Render a summary tree; map keys are shown humanised (`upkeep_cost` → `UPKEEP COST`).
#[must_use]
pub fn render_node(node: &SummaryNode) -> Html {
    match node {
        SummaryNode::Missing => html! { <span class="text-muted summary-missing">{ t("summary.missing") }</span> },
        SummaryNode::Truncated => html! { <span class="text-muted summary-truncated">{ t("summary.truncated") }</span> },
        SummaryNode::Scalar(text) => html! { <span class="summary-value">{ text.clone() }</span> },
        SummaryNode::List(items) => html! {
            <ul class="summary-list">
                { for items.iter().map(|item| html! { <li>{ render_node(item) }</li> }) }
            </ul>
        },
        SummaryNode::Map(entries) => render_entries(entries),
    }
}

#[must_use]
pub fn render_entries(entries: &[SummaryEntry]) -> Html {
    html! {
        <dl class="summary-map">
            { for entries.iter().map(|entry| html! {
                <>
                    <dt>{ humanize_key(&entry.key) }</dt>
                    <dd>{ render_node(&entry.value) }</dd>
                </>
            }) }
        </dl>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub node: SummaryNode,
}

#[function_component(SummaryTree)]
pub fn summary_tree(p: &Props) -> Html {
    render_node(&p.node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;
    use yew::LocalServerRenderer;

    #[test]
    fn nested_values_render_every_leaf() {
        crate::i18n::set_lang("en");
        let node = SummaryNode::from_value(
            &json!({
                "daily_costs": { "salaries": 1200, "upkeep_cost": 300 },
                "events": ["launch", { "client": "Acme" }],
                "note": null
            }),
            32,
        );
        let html = block_on(
            LocalServerRenderer::<SummaryTree>::with_props(Props { node: node.clone() }).render(),
        );
        for leaf in node.leaves() {
            assert!(html.contains(leaf), "missing {leaf}: {html}");
        }
        assert!(html.contains("DAILY COSTS"));
        assert!(html.contains("UPKEEP COST"));
        assert!(html.contains("summary-missing"));
    }

    #[test]
    fn truncated_nodes_render_a_marker() {
        crate::i18n::set_lang("en");
        let node = SummaryNode::from_value(&json!({ "a": { "b": { "c": 1 } } }), 1);
        let html = block_on(LocalServerRenderer::<SummaryTree>::with_props(Props { node }).render());
        assert!(html.contains("summary-truncated"), "{html}");
        assert!(!html.contains(">1<"), "{html}");
    }
}
