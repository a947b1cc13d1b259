/*!
Events students can register for.
*/
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::parse_int_prefix;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub cost: u64,
    pub description: String,
}

/**
The fields a client supplies when creating an `Event`.

Nothing here is validated. Missing text fields come through empty, and
`cost` is kept as raw JSON until `EventDraft::cost()` coerces it.
*/
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct EventDraft {
    pub name: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub cost: Value,
    pub description: String,
}

impl EventDraft {
    pub fn cost(&self) -> u64 { coerce_cost(&self.cost) }

    pub fn into_event(self, id: i64) -> Event {
        let cost = self.cost();
        Event {
            id,
            name: self.name,
            date: self.date,
            time: self.time,
            venue: self.venue,
            cost,
            description: self.description,
        }
    }
}

fn clamp_float(x: f64) -> u64 {
    if x.is_finite() && x > 0.0 {
        // `as` saturates at u64::MAX.
        x.trunc() as u64
    } else {
        0
    }
}

/// Coerce an arbitrary JSON value into a non-negative integer cost.
///
/// Non-numeric input is 0; negatives clamp to 0; fractions truncate.
/// Strings only contribute their leading integer (`"12abc"` is 12).
pub fn coerce_cost(v: &Value) -> u64 {
    match v {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                u
            } else if n.as_i64().is_some() {
                // Only negative integers fail `as_u64()` but pass `as_i64()`.
                0
            } else {
                n.as_f64().map(clamp_float).unwrap_or(0)
            }
        },
        Value::String(s) => match parse_int_prefix(s) {
            Some(n) if n > 0 => n as u64,
            _ => 0,
        },
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cost_coercion() {
        assert_eq!(coerce_cost(&json!(800)), 800);
        assert_eq!(coerce_cost(&json!(12.9)), 12);
        assert_eq!(coerce_cost(&json!(-5)), 0);
        assert_eq!(coerce_cost(&json!(-5.5)), 0);
        assert_eq!(coerce_cost(&json!("400")), 400);
        assert_eq!(coerce_cost(&json!(" 25.75 ")), 25);
        assert_eq!(coerce_cost(&json!("12abc")), 12);
        assert_eq!(coerce_cost(&json!("1e3")), 1);
        assert_eq!(coerce_cost(&json!("-40")), 0);
        assert_eq!(coerce_cost(&json!("free")), 0);
        assert_eq!(coerce_cost(&json!(null)), 0);
        assert_eq!(coerce_cost(&json!(true)), 0);
        assert_eq!(coerce_cost(&json!([3])), 0);
    }

    #[test]
    fn partial_draft_fills_defaults() {
        let d: EventDraft = serde_json::from_value(json!({
            "name": "Hackathon",
            "cost": "150"
        })).unwrap();
        let ev = d.into_event(7);

        assert_eq!(ev.id, 7);
        assert_eq!(&ev.name, "Hackathon");
        assert_eq!(ev.cost, 150);
        assert_eq!(&ev.venue, "");
        assert_eq!(&ev.description, "");
    }

    #[test]
    fn client_supplied_id_is_ignored() {
        let d: EventDraft = serde_json::from_value(json!({
            "id": 99,
            "name": "Sneaky"
        })).unwrap();
        assert_eq!(d.into_event(4).id, 4);
    }
}
