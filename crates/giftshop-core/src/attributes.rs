use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::Id;

/// A configurable product dimension such as "Color", with its allowed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeType {
    pub id: Option<Id>,
    pub name: String,
    /// Free-text description carried by the older attribute schema. Empty
    /// when the backend does not send one.
    pub description: String,
    pub input_type: InputKind,
    pub attribute_values: Vec<AttributeValue>,
}

/// One allowed value of an [`AttributeType`], e.g. `"Red"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeValue {
    pub id: Option<Id>,
    pub value: String,
    /// Short code some backends attach for display (e.g. a hex color).
    pub display_code: Option<String>,
}

/// How a shopper supplies a value for an attribute.
///
/// The set is defined by the backend; kinds this crate does not know are kept
/// verbatim in [`InputKind::Other`] and sent back unchanged. A blank kind
/// reads as [`InputKind::Text`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InputKind {
    #[default]
    Text,
    File,
    Dropdown,
    Multiple,
    Radio,
    Checkbox,
    Other(String),
}

impl InputKind {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            InputKind::Text => "TEXT",
            InputKind::File => "FILE",
            InputKind::Dropdown => "DROPDOWN",
            InputKind::Multiple => "MULTIPLE",
            InputKind::Radio => "RADIO",
            InputKind::Checkbox => "CHECKBOX",
            InputKind::Other(raw) => raw,
        }
    }
}

impl From<&str> for InputKind {
    fn from(raw: &str) -> Self {
        match raw {
            "" => InputKind::Text,
            "TEXT" => InputKind::Text,
            "FILE" => InputKind::File,
            "DROPDOWN" => InputKind::Dropdown,
            "MULTIPLE" => InputKind::Multiple,
            "RADIO" => InputKind::Radio,
            "CHECKBOX" => InputKind::Checkbox,
            other => InputKind::Other(other.to_owned()),
        }
    }
}

impl From<String> for InputKind {
    fn from(raw: String) -> Self {
        InputKind::from(raw.as_str())
    }
}

impl From<InputKind> for String {
    fn from(kind: InputKind) -> Self {
        kind.as_str().to_owned()
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
