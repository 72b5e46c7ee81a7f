use crate::a11y::restore_focus;
use std::sync::atomic::{AtomicUsize, Ordering};
use yew::prelude::*;

static MODAL_IDS: AtomicUsize = AtomicUsize::new(0);

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
    #[prop_or_default]
    pub footer: Option<Html>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    let modal_id = use_state(|| MODAL_IDS.fetch_add(1, Ordering::Relaxed));
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        use_effect_with(props.open, move |is_open| {
            if *is_open && let Some(el) = container_ref.cast::<web_sys::HtmlElement>() {
                let _ = el.focus();
            }
            || {}
        });
    }

    if !props.open {
        return Html::default();
    }

    let title_id = format!("modal-title-{}", *modal_id);
    let close = {
        let cb = props.on_close.clone();
        let return_focus_id = props.return_focus_id.clone();
        Callback::from(move |()| {
            cb.emit(());
            if let Some(id) = return_focus_id.as_ref() {
                restore_focus(id);
            }
        })
    };
    let on_close_click = close.reform(|_: MouseEvent| ());
    let on_keydown = {
        let close = close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                close.emit(());
            }
        })
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" role="presentation" onclick={on_close_click.clone()}>
            <div
                class="modal-dialog"
                role="dialog"
                aria-modal="true"
                aria-labelledby={title_id.clone()}
                tabindex="-1"
                onkeydown={on_keydown}
                onclick={stop}
                ref={container_ref}
            >
                <div class="modal-header">
                    <h2 id={title_id} class="modal-title">{ props.title.clone() }</h2>
                    <button type="button" class="btn-close" aria-label={crate::i18n::t("ui.close")} onclick={on_close_click}>
                        {"×"}
                    </button>
                </div>
                <div class="modal-body">
                    { for props.children.iter() }
                </div>
                { props.footer.clone().map(|footer| html! {
                    <div class="modal-footer">{ footer }</div>
                }).unwrap_or_default() }
            </div>
        </div>
    }
}
