//! Backend identifiers.
//!
//! The catalog backend hands out integer ids, but older snapshots of the API
//! (and hand-edited form files) carry the same ids as strings. [`Id`] keeps
//! whichever form arrived and serializes it back unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A backend identifier: either numeric or an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Num(i64),
    Text(String),
}

impl Id {
    /// Reads an id out of a raw JSON value.
    ///
    /// Integers and non-blank strings resolve; `null`, blank strings, booleans,
    /// fractional numbers, arrays and objects do not.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().map(Id::Num),
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(Id::Text(trimmed.to_owned()))
                }
            }
            _ => None,
        }
    }

    /// Returns the numeric form of a string id when it parses as an integer.
    ///
    /// Request payloads send ids as numbers whenever possible.
    #[must_use]
    pub fn coerce(self) -> Self {
        match self {
            Id::Text(s) => s.trim().parse::<i64>().map_or(Id::Text(s), Id::Num),
            num @ Id::Num(_) => num,
        }
    }

    /// Compares two ids the way form inputs do: by their textual form.
    #[must_use]
    pub fn matches(&self, other: &Id) -> bool {
        self.to_string() == other.to_string()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Num(n) => write!(f, "{n}"),
            Id::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Id {
    fn from(value: i64) -> Self {
        Id::Num(value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Id::Text(value.to_owned())
    }
}

impl std::str::FromStr for Id {
    type Err = std::convert::Infallible;

    /// Parses command-line and path input; integers become [`Id::Num`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Id::Text(s.trim().to_owned()).coerce())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn from_json_accepts_integers_and_strings() {
        assert_eq!(Id::from_json(&json!(7)), Some(Id::Num(7)));
        assert_eq!(Id::from_json(&json!("sku-7")), Some(Id::Text("sku-7".into())));
    }

    #[test]
    fn from_json_rejects_null_blank_and_structures() {
        assert_eq!(Id::from_json(&Value::Null), None);
        assert_eq!(Id::from_json(&json!("   ")), None);
        assert_eq!(Id::from_json(&json!(true)), None);
        assert_eq!(Id::from_json(&json!({"id": 1})), None);
        assert_eq!(Id::from_json(&json!(1.5)), None);
    }

    #[test]
    fn coerce_turns_numeric_strings_into_numbers() {
        assert_eq!(Id::Text("42".into()).coerce(), Id::Num(42));
        assert_eq!(Id::Text("abc".into()).coerce(), Id::Text("abc".into()));
    }

    #[test]
    fn matches_compares_textual_forms() {
        assert!(Id::Num(3).matches(&Id::Text("3".into())));
        assert!(!Id::Num(3).matches(&Id::Num(4)));
    }

    #[test]
    fn serializes_untagged() {
        assert_eq!(serde_json::to_value(Id::Num(5)).unwrap(), json!(5));
        assert_eq!(serde_json::to_value(Id::from("x")).unwrap(), json!("x"));
        let parsed: Id = serde_json::from_value(json!("9")).unwrap();
        assert_eq!(parsed, Id::Text("9".into()));
    }

    #[test]
    fn from_str_prefers_numbers() {
        assert_eq!("12".parse::<Id>().unwrap(), Id::Num(12));
        assert_eq!("abc".parse::<Id>().unwrap(), Id::Text("abc".into()));
    }
}
