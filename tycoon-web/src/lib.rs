#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod animate;
pub mod api;
pub mod app;
pub mod components;
pub mod dom;
pub mod i18n;
pub mod pages;
pub mod paths;
pub mod router;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Sets <html lang> from the saved locale before the first render.
    crate::i18n::set_lang(&crate::i18n::current_lang());
    dom::console_info("TaskTycoon dashboard starting");
    yew::Renderer::<app::App>::new().render();
}
