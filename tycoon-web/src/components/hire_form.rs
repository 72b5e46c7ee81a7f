use crate::components::departments::department_label;
use crate::components::modal::Modal;
use crate::i18n::t;
use tycoon_core::HireRequest;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    /// Department keys offered in the select, in server order.
    pub departments: Vec<String>,
    pub on_submit: Callback<HireRequest>,
    pub on_close: Callback<()>,
}

fn input_value(e: &InputEvent) -> Option<String> {
    e.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
}

/// Hiring dialog. The form is handed over as typed; the controller rejects
/// blank fields before anything is sent.
#[function_component(HireDialog)]
pub fn hire_dialog(p: &Props) -> Html {
    let name = use_state(String::new);
    let position = use_state(String::new);
    let department = use_state(|| p.departments.first().cloned().unwrap_or_default());

    {
        // Keep the selection valid when the department list changes.
        let department = department.clone();
        use_effect_with(p.departments.clone(), move |keys| {
            if !keys.contains(&*department) {
                department.set(keys.first().cloned().unwrap_or_default());
            }
            || {}
        });
    }

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(v) = input_value(&e) {
                name.set(v);
            }
        })
    };
    let on_position = {
        let position = position.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(v) = input_value(&e) {
                position.set(v);
            }
        })
    };
    let on_department = {
        let department = department.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                department.set(sel.value());
            }
        })
    };
    let submit = {
        let (name, position, department) = (name.clone(), position.clone(), department.clone());
        let on_submit = p.on_submit.clone();
        let on_close = p.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = HireRequest::new((*name).clone(), (*position).clone(), (*department).clone());
            let complete = form.validated().is_ok();
            on_submit.emit(form);
            if complete {
                name.set(String::new());
                position.set(String::new());
                on_close.emit(());
            }
        })
    };
    let cancel = p.on_close.reform(|_: MouseEvent| ());

    let options = p.departments.iter().map(|key| {
        html! {
            <option value={key.clone()} selected={*key == *department}>{ department_label(key) }</option>
        }
    });

    html! {
        <Modal open={p.open} title={t("hire.title")} on_close={p.on_close.clone()} return_focus_id={Some(AttrValue::from("hire-open-btn"))}>
            <form id="hire-form" onsubmit={submit}>
                <label for="emp-name">{ t("hire.name") }</label>
                <input id="emp-name" type="text" value={(*name).clone()} oninput={on_name} />
                <label for="emp-position">{ t("hire.position") }</label>
                <input id="emp-position" type="text" value={(*position).clone()} oninput={on_position} />
                <label for="emp-department">{ t("hire.department") }</label>
                <select id="emp-department" onchange={on_department}>{ for options }</select>
                <div class="form-actions">
                    <button type="button" class="btn btn-secondary" onclick={cancel}>{ t("hire.cancel") }</button>
                    <button type="submit" class="btn btn-primary">{ t("hire.submit") }</button>
                </div>
            </form>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn offers_every_department() {
        crate::i18n::set_lang("en");
        let props = Props {
            open: true,
            departments: vec!["engLevel".into(), "salesLevel".into()],
            on_submit: Callback::noop(),
            on_close: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<HireDialog>::with_props(props).render());
        assert!(html.contains("value=\"engLevel\""), "{html}");
        assert!(html.contains("Sales"), "{html}");
        assert!(html.contains("emp-name"));
    }
}
