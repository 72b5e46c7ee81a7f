use yew::prelude::*;

/// Shown when the URL matches no dashboard section.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let go_home = props.on_go_home.reform(|_: MouseEvent| ());

    html! {
        <section class="panel not-found" aria-live="assertive">
            <h1>{ crate::i18n::t("not_found.title") }</h1>
            <p>{ crate::i18n::t("not_found.message") }</p>
            <button type="button" class="btn btn-primary" onclick={go_home}>
                { crate::i18n::t("not_found.back") }
            </button>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn offers_a_way_back() {
        crate::i18n::set_lang("en");
        let html = block_on(
            LocalServerRenderer::<NotFound>::with_props(Props {
                on_go_home: Callback::noop(),
            })
            .render(),
        );
        assert!(html.contains("Back to dashboard"));
    }
}
