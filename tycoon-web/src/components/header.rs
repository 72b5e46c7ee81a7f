use crate::i18n::{locales, set_lang, t};
use crate::router::Route;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::Routable;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current_lang: String,
    pub on_lang_change: Callback<String>,
    pub active: Route,
    pub on_navigate: Callback<Route>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                set_lang(&sel.value());
                cb.emit(sel.value());
            }
        })
    };
    let tabs = Route::NAV.into_iter().map(|route| {
        let active = route == p.active;
        let class = if active { "nav-link active" } else { "nav-link" };
        let label = t(route.label_key());
        let path = route.to_path();
        let onclick = {
            let route = route.clone();
            p.on_navigate.reform(move |_: MouseEvent| route.clone())
        };
        html! {
            <button type="button" class={class} data-route={path} aria-current={active.then_some("page")} {onclick}>
                { label }
            </button>
        }
    });

    html! {
        <header role="banner" class="app-header">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <div class="header-content">
                <div class="brand">
                    <h1>{ t("app.title") }</h1>
                    <small class="text-muted">{ t("app.tagline") }</small>
                </div>
                <nav aria-label={t("nav.label")} class="header-nav">{ for tabs }</nav>
                <div class="header-right">
                    <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                    <select id="lang-select" onchange={on_change} aria-label={t("nav.language")}>
                        { for locales().iter().map(|meta| html! {
                            <option value={meta.code} selected={meta.code == p.current_lang}>{ meta.name }</option>
                        }) }
                    </select>
                </div>
            </div>
        </header>
    }
}
