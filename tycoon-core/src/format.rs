//! Pure display helpers shared by the browser and native front-ends.

use serde_json::Value;

/// Numeric value of a JSON field, or `0.0` when absent or not a number.
#[must_use]
pub fn number_or_zero(value: Option<&Value>) -> f64 {
    value.and_then(Value::as_f64).filter(|n| n.is_finite()).unwrap_or(0.0)
}

/// Integer view used by counters and the tween; fractions are floored.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn floor_i64(value: f64) -> i64 {
    if value.is_finite() {
        value.floor().clamp(i64::MIN as f64, i64::MAX as f64) as i64
    } else {
        0
    }
}

/// Group the integer part in threes and keep at most three fraction digits.
///
/// Mirrors what `Intl.NumberFormat("en")` produces so host builds and
/// tests see the same text the browser shows.
#[must_use]
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = (value * 1000.0).round() / 1000.0;
    let negative = rounded < 0.0;
    let text = format!("{:.3}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let frac = frac_part.trim_end_matches('0');
    let sign = if negative && (int_part != "0" || !frac.is_empty()) {
        "-"
    } else {
        ""
    };
    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac}")
    }
}

/// `upkeep_cost` → `UPKEEP COST`.
#[must_use]
pub fn humanize_key(key: &str) -> String {
    key.replace('_', " ").to_uppercase()
}

/// Scalar JSON rendered the way a template literal would print it.
#[must_use]
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// The four departments the backend knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepartmentKind {
    Engineering,
    Research,
    HumanResources,
    Sales,
}

impl DepartmentKind {
    pub const ALL: [Self; 4] = [
        Self::Engineering,
        Self::Research,
        Self::HumanResources,
        Self::Sales,
    ];

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "engLevel" | "eng" => Some(Self::Engineering),
            "rndLevel" | "rnd" => Some(Self::Research),
            "hrLevel" | "hr" => Some(Self::HumanResources),
            "salesLevel" | "sales" => Some(Self::Sales),
            _ => None,
        }
    }

    /// Translation key for the department's display name.
    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::Engineering => "dept.eng",
            Self::Research => "dept.rnd",
            Self::HumanResources => "dept.hr",
            Self::Sales => "dept.sales",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_fall_back_to_zero() {
        let state = json!({ "cash": 12.5, "research": "lots" });
        assert!((number_or_zero(state.get("cash")) - 12.5).abs() < f64::EPSILON);
        assert!(number_or_zero(state.get("research")).abs() < f64::EPSILON);
        assert!(number_or_zero(state.get("missing")).abs() < f64::EPSILON);
    }

    #[test]
    fn grouping_matches_browser_defaults() {
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(1_000.0), "1,000");
        assert_eq!(format_grouped(1_234_567.0), "1,234,567");
        assert_eq!(format_grouped(-4_200.5), "-4,200.5");
        assert_eq!(format_grouped(2.0 / 3.0), "0.667");
        assert_eq!(format_grouped(-0.0001), "0");
    }

    #[test]
    fn keys_are_humanized() {
        assert_eq!(humanize_key("upkeep_cost"), "UPKEEP COST");
        assert_eq!(humanize_key("level_up"), "LEVEL UP");
    }

    #[test]
    fn department_keys_resolve_both_spellings() {
        assert_eq!(
            DepartmentKind::from_key("engLevel"),
            Some(DepartmentKind::Engineering)
        );
        assert_eq!(DepartmentKind::from_key("sales"), Some(DepartmentKind::Sales));
        assert_eq!(DepartmentKind::from_key("marketing"), None);
        assert_eq!(DepartmentKind::HumanResources.i18n_key(), "dept.hr");
    }

    #[test]
    fn floor_handles_non_finite() {
        assert_eq!(floor_i64(12.9), 12);
        assert_eq!(floor_i64(-0.5), -1);
        assert_eq!(floor_i64(f64::NAN), 0);
    }
}
