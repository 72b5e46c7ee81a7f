use crate::api::BrowserApi;
use crate::router::Route;
use tycoon_core::{ClientConfig, Controller};
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod bootstrap;
pub mod bridge;
pub mod notices;
pub mod state;
pub mod view;

pub use bridge::{WebController, YewView};

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let navigator = use_navigator();
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let on_navigate = Callback::from(move |next: Route| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&next);
        }
    });
    html! { <Shell route={route} on_navigate={on_navigate} /> }
}

/// Resolved client configuration for this page.
#[must_use]
pub fn page_config() -> ClientConfig {
    ClientConfig::default().with_api_base(crate::paths::api_base())
}

#[derive(Properties, PartialEq)]
pub struct ShellProps {
    pub route: Route,
    pub on_navigate: Callback<Route>,
}

/// Dashboard chrome and the active view, independent of the router.
#[function_component(Shell)]
pub fn shell(p: &ShellProps) -> Html {
    let config = use_memo((), |()| page_config());
    let app_state = state::use_app_state(&config);
    let controller = {
        let view = YewView::new(&app_state);
        let config = (*config).clone();
        use_memo((), move |()| Controller::new(BrowserApi, view, config))
    };
    bootstrap::use_bootstrap(&controller, &app_state);
    bootstrap::use_panel_loader(&controller, &p.route);

    let handlers = view::AppHandlers::new(&app_state, &controller, &p.on_navigate);
    view::render_app(&app_state, &handlers, &p.route, config.animation_ms)
}
