//! Session-local shopping cart.
//!
//! The cart lives for one session and is never persisted. Lines are keyed by a
//! locally generated [`LineId`]; totals are recomputed from the current lines
//! on every read.

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::id::Id;
use crate::pricing::{price_line, price_lines, OrderTotals};
use crate::products::{Product, ProductAttribute, ProductAttributeValue};

/// Identifier of a cart line, unique within one session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(String);

impl LineId {
    /// `<unix millis>-<random hex>`.
    fn generate() -> Self {
        LineId(format!(
            "{}-{:x}",
            Utc::now().timestamp_millis(),
            rand::random::<u64>()
        ))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LineId {
    fn from(value: &str) -> Self {
        LineId(value.to_owned())
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One chosen attribute value on a cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedAttribute {
    pub attribute_type_id: Option<Id>,
    /// Persisted assignment id, sent with the order.
    pub product_attribute_id: Option<Id>,
    pub attribute_value_id: Option<Id>,
    /// Persisted value-selection id, sent with the order.
    pub product_attribute_value_id: Option<Id>,
    pub value_label: String,
    pub extra_price: f64,
}

impl SelectedAttribute {
    /// Records the choice of `value` for `assignment`.
    #[must_use]
    pub fn from_choice(assignment: &ProductAttribute, value: &ProductAttributeValue) -> Self {
        Self {
            attribute_type_id: assignment
                .attribute_type_id
                .clone()
                .or_else(|| assignment.product_attribute_id.clone()),
            product_attribute_id: assignment.product_attribute_id.clone(),
            attribute_value_id: value.attribute_value_id.clone(),
            product_attribute_value_id: value.product_attribute_value_id.clone(),
            value_label: value.value_label.clone(),
            extra_price: value.extra_price,
        }
    }
}

/// The preselected configuration of a product: the first offered value of
/// every assignment that offers any.
#[must_use]
pub fn default_selections(product: &Product) -> Vec<SelectedAttribute> {
    product
        .attributes
        .iter()
        .filter_map(|assignment| {
            assignment
                .values
                .first()
                .map(|value| SelectedAttribute::from_choice(assignment, value))
        })
        .collect()
}

/// A line as requested by the shopper, before the cart assigns it an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartLine {
    pub product_id: Option<Id>,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub base_price: f64,
    pub tax_rate: f64,
    pub quantity: u32,
    pub selected_attributes: Vec<SelectedAttribute>,
}

impl NewCartLine {
    /// Snapshots the product fields the cart needs. Later catalog edits do not
    /// reach lines already in the cart.
    #[must_use]
    pub fn from_product(
        product: &Product,
        selected_attributes: Vec<SelectedAttribute>,
        quantity: u32,
    ) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            image_url: product.image_url.clone(),
            base_price: product.base_price,
            tax_rate: product.tax_rate,
            quantity,
            selected_attributes,
        }
    }
}

/// A configured product in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub line_id: LineId,
    pub product_id: Option<Id>,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub base_price: f64,
    pub tax_rate: f64,
    /// Always at least 1.
    pub quantity: u32,
    pub selected_attributes: Vec<SelectedAttribute>,
}

impl CartLineItem {
    /// Line total including tax.
    #[must_use]
    pub fn total_price(&self) -> f64 {
        price_line(self).line_total
    }

    /// Pre-tax unit price with the selected extras.
    #[must_use]
    pub fn unit_price(&self) -> f64 {
        let breakdown = price_line(self);
        breakdown.base_price + breakdown.extras
    }
}

/// Ordered collection of cart lines.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLineItem>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line and returns its id. Quantity is raised to at least 1.
    pub fn add(&mut self, line: NewCartLine) -> LineId {
        let mut line_id = LineId::generate();
        while self.find(&line_id).is_some() {
            line_id = LineId::generate();
        }

        self.lines.push(CartLineItem {
            line_id: line_id.clone(),
            product_id: line.product_id,
            name: line.name,
            description: line.description,
            image_url: line.image_url,
            base_price: line.base_price,
            tax_rate: line.tax_rate,
            quantity: line.quantity.max(1),
            selected_attributes: line.selected_attributes,
        });
        line_id
    }

    /// Drops the line with the given id. Unknown ids are ignored.
    pub fn remove(&mut self, line_id: &LineId) {
        self.lines.retain(|line| &line.line_id != line_id);
    }

    /// Sets a line's quantity, clamped to at least 1.
    pub fn update_quantity(&mut self, line_id: &LineId, quantity: u32) {
        if let Some(line) = self.lines.iter_mut().find(|l| &l.line_id == line_id) {
            line.quantity = quantity.max(1);
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    #[must_use]
    pub fn find(&self, line_id: &LineId) -> Option<&CartLineItem> {
        self.lines.iter().find(|l| &l.line_id == line_id)
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLineItem] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Subtotal, tax and grand total of the current lines.
    #[must_use]
    pub fn totals(&self) -> OrderTotals {
        price_lines(&self.lines)
    }

    /// Grand total including tax.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.totals().grand_total
    }
}
