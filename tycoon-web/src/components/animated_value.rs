use crate::animate::{AnimationHandle, run_tween_in};
use crate::i18n::fmt_number;
use tycoon_core::Tween;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub id: AttrValue,
    pub value: f64,
    /// Previous value; the counter tweens from here when it differs.
    #[prop_or_default]
    pub from: Option<f64>,
    #[prop_or(700)]
    pub duration_ms: u32,
    /// Locale digit grouping instead of the raw number.
    #[prop_or_default]
    pub grouped: bool,
}

/// Number that counts up or down to its new value.
#[function_component(AnimatedValue)]
pub fn animated_value(p: &Props) -> Html {
    let shown = use_state(|| p.from.unwrap_or(p.value));
    // Outstanding tweens keep running across value changes; unmount stops them all.
    let scope = use_memo((), |()| AnimationHandle::default());
    {
        let scope = scope.clone();
        use_effect_with((), move |()| move || scope.cancel());
    }
    {
        let shown = shown.clone();
        use_effect_with(
            (p.from, p.value, p.duration_ms),
            move |&(from, to, duration_ms)| match from {
                Some(start) if (start - to).abs() > f64::EPSILON => {
                    let sink = shown.clone();
                    run_tween_in(
                        &scope,
                        Tween::new(start, to, f64::from(duration_ms)),
                        move |v| sink.set(v),
                    );
                }
                _ => shown.set(to),
            },
        );
    }

    let text = if p.grouped {
        fmt_number(*shown)
    } else {
        (*shown).to_string()
    };
    html! {
        <span id={p.id.clone()} class="counter" data-value={p.value.to_string()}>{ text }</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn renders_target_without_history() {
        let props = Props {
            id: AttrValue::from("cash"),
            value: 12_500.0,
            from: None,
            duration_ms: 700,
            grouped: true,
        };
        let html = block_on(LocalServerRenderer::<AnimatedValue>::with_props(props).render());
        assert!(html.contains("id=\"cash\""), "{html}");
        assert!(html.contains("12,500"), "{html}");
        assert!(html.contains("data-value=\"12500\""), "{html}");
    }

    #[test]
    fn first_paint_starts_from_previous_value() {
        let props = Props {
            id: AttrValue::from("research"),
            value: 40.0,
            from: Some(25.0),
            duration_ms: 700,
            grouped: false,
        };
        let html = block_on(LocalServerRenderer::<AnimatedValue>::with_props(props).render());
        assert!(html.contains(">25<"), "{html}");
    }
}
