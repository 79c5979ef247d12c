use serde::{Deserialize, Serialize};

use crate::id::Id;

/// A catalog product in canonical form, as produced by the normalizer.
///
/// Serializes to camelCase; feeding that JSON back through the normalizer
/// yields the same record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Option<Id>,
    pub name: String,
    pub description: String,
    /// Price before extras and tax. Never negative.
    pub base_price: f64,
    /// Tax as a fraction, e.g. `0.18` for 18%.
    pub tax_rate: f64,
    pub stock: u32,
    pub category: String,
    pub image_url: String,
    pub attributes: Vec<ProductAttribute>,
    /// Backend timestamp, passed through verbatim.
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Product {
    /// Returns `true` if at least one unit is in stock.
    #[must_use]
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Returns the assignment linked to the given persisted assignment id.
    #[must_use]
    pub fn attribute(&self, product_attribute_id: &Id) -> Option<&ProductAttribute> {
        self.attributes.iter().find(|a| {
            a.product_attribute_id
                .as_ref()
                .is_some_and(|own| own.matches(product_attribute_id))
        })
    }

    /// Lowest pre-tax unit price a shopper can configure: the base price plus
    /// the cheapest value of every assignment that offers values.
    #[must_use]
    pub fn starting_price(&self) -> f64 {
        let cheapest_extras: f64 = self
            .attributes
            .iter()
            .filter_map(|a| {
                a.values
                    .iter()
                    .map(|v| v.extra_price)
                    .min_by(f64::total_cmp)
            })
            .sum();
        self.base_price + cheapest_extras
    }
}

/// Link between a product and an attribute type, carrying which values the
/// product offers and what each one adds to the price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAttribute {
    /// Persisted id of the assignment itself; `None` until saved.
    pub product_attribute_id: Option<Id>,
    pub attribute_type_id: Option<Id>,
    pub attribute_name: String,
    pub attribute_input_type: String,
    /// Product-specific override label; may be empty.
    pub label: String,
    /// Offered values. Every entry has an `attribute_value_id`.
    pub values: Vec<ProductAttributeValue>,
}

impl ProductAttribute {
    /// Label to show a shopper: the override label, else the type name.
    #[must_use]
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.attribute_name
        } else {
            &self.label
        }
    }
}

/// One offered value of a [`ProductAttribute`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAttributeValue {
    /// Persisted id of this value selection; `None` until saved.
    pub product_attribute_value_id: Option<Id>,
    pub attribute_value_id: Option<Id>,
    pub value_label: String,
    /// Added to the base price when this value is chosen. Never negative.
    pub extra_price: f64,
}
