// Accessibility helpers

/// Focus ring and screen-reader utility CSS injected with the app shell.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus{outline:3px solid #0d6efd;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Move focus back to `id`, typically the control that opened a dialog.
pub fn restore_focus(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        if let Some(el) = crate::dom::document()
            .ok()
            .and_then(|doc| doc.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        {
            let _ = el.focus();
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}
