use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;
use tycoon_core::Feedback;

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn plural_category(count: f64) -> &'static str {
    if (count - 1.0).abs() < f64::EPSILON {
        "one"
    } else if count.abs() < f64::EPSILON {
        "zero"
    } else {
        "other"
    }
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            let category = args
                .and_then(|m| m.get("count"))
                .and_then(|c| c.parse::<f64>().ok())
                .map(plural_category);
            category
                .and_then(|c| map.get(c))
                .or_else(|| map.get("_"))
                .and_then(Value::as_str)?
                .to_string()
        }
        _ => return None,
    };

    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    with_bundle(|bundle| {
        get_nested_value(&bundle.translations, key)
            .and_then(|v| render_value(v, args))
            .or_else(|| get_nested_value(&bundle.fallback, key).and_then(|v| render_value(v, args)))
    })
}

/// Translate a key to the current language.
///
/// Falls back to English, then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with `{var}` substitution.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

#[must_use]
pub fn tr_name(key: &str, name: &str) -> String {
    let args = BTreeMap::from([("name", name)]);
    tr(key, Some(&args))
}

/// Text for a controller notice.
#[must_use]
pub fn feedback_text(feedback: &Feedback) -> String {
    match feedback {
        Feedback::Server(text) => text.clone(),
        Feedback::Key(key) => t(key),
        Feedback::KeyWithName(key, name) => tr_name(key, name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_selection_defaults() {
        let value = serde_json::json!({ "one": "one hire", "other": "{count} hires" });
        let mut args = BTreeMap::new();
        args.insert("count", "1");
        assert_eq!(render_value(&value, Some(&args)).unwrap(), "one hire");
        args.insert("count", "3");
        assert_eq!(render_value(&value, Some(&args)).unwrap(), "3 hires");
    }

    #[test]
    fn missing_keys_fall_back_to_the_key() {
        crate::i18n::set_lang("en");
        assert_eq!(t("does.not.exist"), "does.not.exist");
    }

    #[test]
    fn feedback_is_localised() {
        crate::i18n::set_lang("tr");
        assert_eq!(
            feedback_text(&Feedback::Key("hire.missing_fields")),
            "Lütfen tüm alanları doldurun"
        );
        assert_eq!(
            feedback_text(&Feedback::Server("raw".into())),
            "raw"
        );
        assert!(
            feedback_text(&Feedback::KeyWithName("notify.achievement", "İlk Gün".into()))
                .contains("İlk Gün")
        );
        crate::i18n::set_lang("en");
    }
}
