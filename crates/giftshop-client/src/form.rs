//! Admin form state for products and attribute types.
//!
//! Numeric fields hold the text an administrator typed; [`crate::payload`]
//! coerces them when building requests. The product tax field is a
//! percentage (`"18"`), while [`Product::tax_rate`] is a fraction (`0.18`).

use giftshop_core::{AttributeType, Id, InputKind, Product};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Editable state of the product form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    #[serde(deserialize_with = "text_or_number")]
    pub base_price: String,
    #[serde(deserialize_with = "text_or_number")]
    pub stock: String,
    /// Percentage, 0–100.
    #[serde(deserialize_with = "text_or_number")]
    pub tax_rate: String,
    pub category: String,
    pub image_url: String,
    pub attributes: Vec<AttributeRow>,
}

/// One attribute assignment being edited.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttributeRow {
    /// Persisted assignment id; `None` for a row added in this form.
    pub product_attribute_id: Option<Id>,
    pub attribute_type_id: Option<Id>,
    pub label: String,
    pub values: Vec<ValueRow>,
}

/// One offered value within an [`AttributeRow`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValueRow {
    /// Persisted value-selection id; `None` for a value ticked in this form.
    pub product_attribute_value_id: Option<Id>,
    pub attribute_value_id: Option<Id>,
    pub value_label: String,
    #[serde(deserialize_with = "text_or_number")]
    pub extra_price: String,
}

impl ProductForm {
    /// Loads an existing product for editing.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            base_price: number_text(product.base_price),
            stock: product.stock.to_string(),
            tax_rate: number_text(product.tax_rate * 100.0),
            category: product.category.clone(),
            image_url: product.image_url.clone(),
            attributes: product
                .attributes
                .iter()
                .map(|attribute| AttributeRow {
                    product_attribute_id: attribute.product_attribute_id.clone(),
                    attribute_type_id: attribute.attribute_type_id.clone(),
                    label: attribute.label.clone(),
                    values: attribute
                        .values
                        .iter()
                        .map(|value| ValueRow {
                            product_attribute_value_id: value.product_attribute_value_id.clone(),
                            attribute_value_id: value.attribute_value_id.clone(),
                            value_label: value.value_label.clone(),
                            extra_price: number_text(value.extra_price),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    pub fn add_attribute_row(&mut self) {
        self.attributes.push(AttributeRow::default());
    }

    pub fn remove_attribute_row(&mut self, index: usize) {
        if index < self.attributes.len() {
            self.attributes.remove(index);
        }
    }

    /// Points a row at a different attribute type.
    ///
    /// Previously ticked values belong to the old type and are cleared. An
    /// empty label takes the type's name.
    pub fn set_attribute_type(
        &mut self,
        index: usize,
        attribute_type_id: Option<Id>,
        attribute_types: &[AttributeType],
    ) {
        let Some(row) = self.attributes.get_mut(index) else {
            return;
        };
        let attribute_type_id = attribute_type_id.map(Id::coerce);
        if row.label.is_empty() {
            if let Some(def) = attribute_type_id.as_ref().and_then(|id| {
                attribute_types
                    .iter()
                    .find(|t| t.id.as_ref().is_some_and(|own| own.matches(id)))
            }) {
                row.label.clone_from(&def.name);
            }
        }
        row.attribute_type_id = attribute_type_id;
        row.values.clear();
    }

    pub fn set_attribute_label(&mut self, index: usize, label: &str) {
        if let Some(row) = self.attributes.get_mut(index) {
            label.clone_into(&mut row.label);
        }
    }

    /// Ticks or unticks an attribute value on a row. Ticking an already
    /// ticked value, or unticking one that is not, does nothing.
    pub fn toggle_value(&mut self, index: usize, attribute_value_id: &Id, checked: bool) {
        let Some(row) = self.attributes.get_mut(index) else {
            return;
        };
        let position = row.values.iter().position(|v| {
            v.attribute_value_id
                .as_ref()
                .is_some_and(|own| own.matches(attribute_value_id))
        });
        match (checked, position) {
            (true, None) => row.values.push(ValueRow {
                product_attribute_value_id: None,
                attribute_value_id: Some(attribute_value_id.clone()),
                value_label: String::new(),
                extra_price: "0".to_string(),
            }),
            (false, Some(pos)) => {
                row.values.remove(pos);
            }
            _ => {}
        }
    }

    pub fn set_extra_price(&mut self, index: usize, attribute_value_id: &Id, extra_price: &str) {
        let Some(row) = self.attributes.get_mut(index) else {
            return;
        };
        for value in &mut row.values {
            if value
                .attribute_value_id
                .as_ref()
                .is_some_and(|own| own.matches(attribute_value_id))
            {
                extra_price.clone_into(&mut value.extra_price);
            }
        }
    }
}

/// Editable state of the attribute-type form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttributeForm {
    pub name: String,
    pub input_type: InputKind,
    pub attribute_values: Vec<AttributeValueRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttributeValueRow {
    pub id: Option<Id>,
    pub value: String,
}

impl Default for AttributeForm {
    /// A blank form starts with one empty value row.
    fn default() -> Self {
        Self {
            name: String::new(),
            input_type: InputKind::Text,
            attribute_values: vec![AttributeValueRow::default()],
        }
    }
}

impl AttributeForm {
    /// Loads an existing attribute type for editing.
    #[must_use]
    pub fn from_attribute_type(attribute: &AttributeType) -> Self {
        let attribute_values = if attribute.attribute_values.is_empty() {
            vec![AttributeValueRow::default()]
        } else {
            attribute
                .attribute_values
                .iter()
                .map(|v| AttributeValueRow {
                    id: v.id.clone(),
                    value: v.value.clone(),
                })
                .collect()
        };
        Self {
            name: attribute.name.clone(),
            input_type: attribute.input_type.clone(),
            attribute_values,
        }
    }

    pub fn add_value_row(&mut self) {
        self.attribute_values.push(AttributeValueRow::default());
    }

    pub fn remove_value_row(&mut self, index: usize) {
        if index < self.attribute_values.len() {
            self.attribute_values.remove(index);
        }
    }

    pub fn set_value(&mut self, index: usize, value: &str) {
        if let Some(row) = self.attribute_values.get_mut(index) {
            value.clone_into(&mut row.value);
        }
    }
}

/// Renders a number for a text field without float noise such as
/// `7.000000000000001`.
fn number_text(value: f64) -> String {
    let rounded = (value * 1e9).round() / 1e9;
    format!("{rounded}")
}

/// Accepts either a JSON string or number for a text field; `null` is empty.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}
