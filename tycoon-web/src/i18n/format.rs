#[cfg(target_arch = "wasm32")]
use crate::i18n::bundle::with_bundle;
#[cfg(target_arch = "wasm32")]
use js_sys::{Function, Intl, Object};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Format a number using the current locale via `Intl.NumberFormat`.
///
/// Off the browser this falls back to comma grouping.
#[must_use]
pub fn fmt_number(num: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        with_bundle(|bundle| {
            let locales = js_sys::Array::of1(&JsValue::from_str(&bundle.lang));
            let nf = Intl::NumberFormat::new(&locales, &Object::new());
            let format_fn: Function = nf.format();
            format_fn
                .call1(&nf, &JsValue::from_f64(num))
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| tycoon_core::format_grouped(num))
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tycoon_core::format_grouped(num)
    }
}

/// Amount followed by the in-game currency suffix.
#[must_use]
pub fn fmt_money(amount: f64) -> String {
    format!("{} {}", fmt_number(amount), crate::i18n::t("app.currency"))
}
