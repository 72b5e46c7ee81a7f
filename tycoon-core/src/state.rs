//! Client-side copy of the server game state.

use crate::format::{floor_i64, number_or_zero};
use serde_json::Value;

/// A department entry after normalization at the API boundary.
///
/// The backend sends either a bare level number or an object carrying a
/// level and a list of employee references.
#[derive(Debug, Clone, PartialEq)]
pub enum DepartmentInfo {
    Level(u32),
    Detailed { level: u32, employees: Vec<Value> },
}

impl DepartmentInfo {
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self::Detailed {
                level: level_of(map.get("level")),
                employees: map
                    .get("employees")
                    .and_then(Value::as_array)
                    .cloned()
                    .unwrap_or_default(),
            },
            other => Self::Level(level_of(Some(other))),
        }
    }

    #[must_use]
    pub const fn level(&self) -> u32 {
        match self {
            Self::Level(level) | Self::Detailed { level, .. } => *level,
        }
    }

    #[must_use]
    pub fn employee_count(&self) -> usize {
        match self {
            Self::Level(_) => 0,
            Self::Detailed { employees, .. } => employees.len(),
        }
    }
}

fn level_of(value: Option<&Value>) -> u32 {
    let n = floor_i64(number_or_zero(value));
    u32::try_from(n.max(0)).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    pub key: String,
    pub info: DepartmentInfo,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub name: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
}

impl Employee {
    fn from_value(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            name: text("name").unwrap_or_default(),
            position: text("position").or_else(|| text("role")).unwrap_or_default(),
            department: text("department").unwrap_or_default(),
            salary: number_or_zero(value.get("salary")),
        }
    }
}

/// Last fetched `/api/state`, normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct GameStateSnapshot {
    pub cash: f64,
    pub research: f64,
    pub energy: f64,
    pub max_energy: f64,
    pub current_day: i64,
    /// Server order is preserved.
    pub departments: Vec<Department>,
    pub employees: Vec<Employee>,
}

impl Default for GameStateSnapshot {
    fn default() -> Self {
        Self {
            cash: 0.0,
            research: 0.0,
            energy: 0.0,
            max_energy: 100.0,
            current_day: 0,
            departments: Vec::new(),
            employees: Vec::new(),
        }
    }
}

impl GameStateSnapshot {
    /// Build a snapshot from the raw state document.
    ///
    /// Missing or non-numeric fields fall back to zero; `current_day` falls
    /// back to `day`, and `max_energy` to `maxEnergy` then 100.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let day = value
            .get("current_day")
            .filter(|v| v.as_f64().is_some_and(|n| n != 0.0))
            .or_else(|| value.get("day"));
        let max_energy = value
            .get("max_energy")
            .or_else(|| value.get("maxEnergy"))
            .and_then(Value::as_f64)
            .filter(|n| *n > 0.0)
            .unwrap_or(100.0);

        let departments = value
            .get("departments")
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .map(|(key, info)| Department {
                        key: key.clone(),
                        info: DepartmentInfo::from_value(info),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let employees = value
            .get("employees")
            .and_then(Value::as_array)
            .map(|list| list.iter().map(Employee::from_value).collect())
            .unwrap_or_default();

        Self {
            cash: number_or_zero(value.get("cash")),
            research: number_or_zero(value.get("research")),
            energy: number_or_zero(value.get("energy")),
            max_energy,
            current_day: floor_i64(number_or_zero(day)),
            departments,
            employees,
        }
    }

    #[must_use]
    pub fn department(&self, key: &str) -> Option<&DepartmentInfo> {
        self.departments
            .iter()
            .find(|dept| dept.key == key)
            .map(|dept| &dept.info)
    }

    #[must_use]
    pub fn department_keys(&self) -> Vec<String> {
        self.departments.iter().map(|d| d.key.clone()).collect()
    }

    /// Energy as a 0–100 bar width.
    #[must_use]
    pub fn energy_percent(&self) -> f64 {
        (self.energy / self.max_energy * 100.0).clamp(0.0, 100.0)
    }
}

/// Movement of an animated counter between two refreshes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    pub from: Option<f64>,
    pub to: f64,
}

impl Trend {
    /// Whether the display should tween rather than jump.
    #[must_use]
    pub fn animates(&self) -> bool {
        self.from.is_some_and(|from| from != self.to)
    }
}

/// What the view receives after a refresh is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct StateFrame {
    pub snapshot: GameStateSnapshot,
    pub cash: Trend,
    pub research: Trend,
}

/// Monotonic counter used to fence responses for one resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generation {
    issued: u64,
    applied: u64,
}

impl Generation {
    /// Ticket for a request that is about to be issued.
    pub const fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Accept a response carrying `ticket` unless a newer one already landed.
    pub const fn accept(&mut self, ticket: u64) -> bool {
        if ticket <= self.applied {
            return false;
        }
        self.applied = ticket;
        true
    }

    #[must_use]
    pub const fn applied(&self) -> u64 {
        self.applied
    }
}

/// Fences for the independently fetched resources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fences {
    pub state: Generation,
    pub stats: Generation,
    pub predictions: Generation,
    pub achievements: Generation,
    pub history: Generation,
}

/// Everything the controller remembers between refreshes.
#[derive(Debug, Clone, Default)]
pub struct ClientState {
    snapshot: Option<GameStateSnapshot>,
    last_cash: Option<f64>,
    last_research: Option<f64>,
    pub fences: Fences,
}

impl ClientState {
    #[must_use]
    pub const fn snapshot(&self) -> Option<&GameStateSnapshot> {
        self.snapshot.as_ref()
    }

    /// Replace the snapshot wholesale and report counter movement.
    pub fn apply(&mut self, snapshot: GameStateSnapshot) -> StateFrame {
        let cash = Trend {
            from: self.last_cash,
            to: snapshot.cash,
        };
        let research = Trend {
            from: self.last_research,
            to: snapshot.research,
        };
        self.last_cash = Some(snapshot.cash);
        self.last_research = Some(snapshot.research);
        self.snapshot = Some(snapshot.clone());
        StateFrame {
            snapshot,
            cash,
            research,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn departments_normalize_both_shapes() {
        let state = json!({
            "departments": {
                "eng": { "level": 2, "employees": [{"id": 1}, {"id": 2}] },
                "hrLevel": 3,
                "rnd": { "employees": "nope" }
            }
        });
        let snap = GameStateSnapshot::from_value(&state);
        let eng = snap.department("eng").unwrap();
        assert_eq!(eng.level(), 2);
        assert_eq!(eng.employee_count(), 2);
        let hr = snap.department("hrLevel").unwrap();
        assert_eq!(*hr, DepartmentInfo::Level(3));
        assert_eq!(hr.employee_count(), 0);
        let rnd = snap.department("rnd").unwrap();
        assert_eq!(rnd.level(), 0);
        assert_eq!(rnd.employee_count(), 0);
        assert_eq!(snap.department_keys(), vec!["eng", "hrLevel", "rnd"]);
    }

    #[test]
    fn department_cards_keep_server_order() {
        let raw: Value = serde_json::from_str(
            r#"{"departments": {"salesLevel": 1, "engLevel": 2, "rndLevel": {"level": 3}}}"#,
        )
        .unwrap();
        let snap = GameStateSnapshot::from_value(&raw);
        assert_eq!(
            snap.department_keys(),
            vec!["salesLevel", "engLevel", "rndLevel"]
        );
    }

    #[test]
    fn missing_numbers_fall_back_to_zero() {
        let snap = GameStateSnapshot::from_value(&json!({ "cash": "x", "day": 4 }));
        assert!(snap.cash.abs() < f64::EPSILON);
        assert!(snap.research.abs() < f64::EPSILON);
        assert_eq!(snap.current_day, 4);
        assert!((snap.max_energy - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn employees_accept_role_as_position() {
        let snap = GameStateSnapshot::from_value(&json!({
            "employees": [{ "name": "Ada", "role": "Dev", "salary": 500 }]
        }));
        assert_eq!(snap.employees[0].position, "Dev");
        assert_eq!(snap.employees[0].department, "");
    }

    #[test]
    fn energy_percent_uses_max_energy() {
        let snap = GameStateSnapshot::from_value(&json!({ "energy": 60, "maxEnergy": 120 }));
        assert!((snap.energy_percent() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn apply_reports_trends_from_previous_snapshot() {
        let mut client = ClientState::default();
        let first = client.apply(GameStateSnapshot::from_value(&json!({ "cash": 100 })));
        assert!(!first.cash.animates());
        let second = client.apply(GameStateSnapshot::from_value(&json!({ "cash": 200 })));
        assert_eq!(second.cash.from, Some(100.0));
        assert!(second.cash.animates());
        assert!(!second.research.animates());
    }

    #[test]
    fn generation_rejects_stale_tickets() {
        let mut generation = Generation::default();
        let first = generation.issue();
        let second = generation.issue();
        assert!(generation.accept(second));
        assert!(!generation.accept(first));
        assert_eq!(generation.applied(), second);
    }
}
