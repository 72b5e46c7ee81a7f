use crate::i18n::{feedback_text, t};
use tycoon_core::{Notice, NoticeKind};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ToastProps {
    pub notice: Notice,
    pub on_dismiss: Callback<u64>,
}

/// One notice; removes itself once its TTL passes.
#[function_component(Toast)]
pub fn toast(p: &ToastProps) -> Html {
    #[cfg(target_arch = "wasm32")]
    {
        let id = p.notice.id;
        let ttl = i32::try_from(p.notice.ttl_ms).unwrap_or(i32::MAX);
        let on_dismiss = p.on_dismiss.clone();
        use_effect_with(id, move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                if crate::dom::sleep_ms(ttl).await.is_ok() {
                    on_dismiss.emit(id);
                }
            });
            || {}
        });
    }

    let dismiss = {
        let id = p.notice.id;
        p.on_dismiss.reform(move |_: MouseEvent| id)
    };
    let (class, icon) = match p.notice.kind {
        NoticeKind::Alert => (
            format!("alert alert-{} toast-item", p.notice.severity.as_str()),
            None,
        ),
        NoticeKind::Achievement => (
            "alert alert-success toast-item achievement-toast".to_string(),
            Some(html! { <span class="toast-icon" aria-hidden="true">{"🏆"}</span> }),
        ),
    };
    html! {
        <div class={class} role="alert" data-notice-id={p.notice.id.to_string()}>
            { icon.unwrap_or_default() }
            <span class="toast-text">{ feedback_text(&p.notice.feedback) }</span>
            { p.notice.detail.clone().map(|d| html! { <small class="toast-detail">{ d }</small> }).unwrap_or_default() }
            <button type="button" class="btn-close" aria-label={t("notify.dismiss")} onclick={dismiss}>{"×"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub notices: Vec<Notice>,
    pub on_dismiss: Callback<u64>,
}

/// Top-right stack of alerts and achievement toasts, newest last.
#[function_component(ToastStack)]
pub fn toast_stack(p: &Props) -> Html {
    html! {
        <div class="toast-stack" aria-live="polite">
            { for p.notices.iter().map(|notice| html! {
                <Toast key={notice.id} notice={notice.clone()} on_dismiss={p.on_dismiss.clone()} />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use tycoon_core::{ClientConfig, Feedback, NoticeBoard, Severity};
    use yew::LocalServerRenderer;

    #[test]
    fn stack_renders_every_notice_with_its_severity() {
        crate::i18n::set_lang("en");
        let mut board = NoticeBoard::new(&ClientConfig::default());
        board.alert(Severity::Danger, Feedback::Key("error.refresh"));
        board.alert(Severity::Success, Feedback::Server("Code shipped".into()));
        board.achievement("First Day".into(), Some("Survived".into()));
        let props = Props {
            notices: board.items().to_vec(),
            on_dismiss: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<ToastStack>::with_props(props).render());
        assert!(html.contains("alert-danger"));
        assert!(html.contains("Could not refresh the dashboard"));
        assert!(html.contains("Code shipped"));
        assert!(html.contains("Achievement unlocked: First Day"));
        assert!(html.contains("Survived"));
    }
}
