//! Normalization from raw backend JSON to the canonical catalog model.
//!
//! Field lookups go through [`crate::resolve`]; this module only lists the
//! candidate keys for each field and assembles the canonical structs.

use giftshop_core::{
    AttributeType, AttributeValue, Id, InputKind, Product, ProductAttribute,
    ProductAttributeValue,
};
use serde_json::Value;

use crate::resolve::{
    coerce_count, coerce_price, first_id, first_list, first_nonempty_text, first_optional_text,
    first_present, first_text,
};

/// Candidate keys for an attribute-type id, in priority order.
pub const ATTRIBUTE_TYPE_ID_KEYS: &[&str] = &["attributeTypeId", "attributeId", "typeId", "id"];

const ATTRIBUTE_VALUE_LIST_KEYS: &[&str] = &["attributeValues", "values"];
const ATTRIBUTE_VALUE_ID_KEYS: &[&str] = &["id", "attributeValueId", "valueId"];
const ATTRIBUTE_VALUE_LABEL_KEYS: &[&str] = &["value", "name", "valueName"];

const PRODUCT_ATTRIBUTE_LIST_KEYS: &[&str] = &[
    "attributes",
    "productAttributes",
    "productAttributeResponses",
    "productAttributeRequestList",
];
const PRODUCT_ATTRIBUTE_ID_KEYS: &[&str] = &["productAttributeId", "id"];
const PRODUCT_ATTRIBUTE_LABEL_KEYS: &[&str] = &["productAttributeLabel", "label", "type", "name"];
const PRODUCT_ATTRIBUTE_VALUE_LIST_KEYS: &[&str] = &[
    "productAttributeValues",
    "productAttributeValueResponses",
    "values",
    "attributeValues",
    "productAttributeValueRequestList",
];

const SELECTION_ID_KEYS: &[&str] = &["productAttributeValueId", "id"];
const SELECTION_VALUE_ID_KEYS: &[&str] = &["attributeValueId", "valueId"];
const SELECTION_LABEL_KEYS: &[&str] =
    &["valueLabel", "attributeValueName", "value", "name", "valueName"];

/// Normalizes one attribute type from either backend schema.
#[must_use]
pub fn normalize_attribute_type(raw: &Value) -> AttributeType {
    let input_type = first_optional_text(raw, &["inputType", "attributeInputType"])
        .map_or(InputKind::Text, InputKind::from);

    AttributeType {
        id: first_id(raw, ATTRIBUTE_TYPE_ID_KEYS),
        name: first_nonempty_text(raw, &["name", "type"]),
        description: first_text(raw, &["description"]),
        input_type,
        attribute_values: first_list(raw, ATTRIBUTE_VALUE_LIST_KEYS)
            .iter()
            .map(normalize_attribute_value)
            .collect(),
    }
}

fn normalize_attribute_value(raw: &Value) -> AttributeValue {
    AttributeValue {
        id: first_id(raw, ATTRIBUTE_VALUE_ID_KEYS),
        value: first_nonempty_text(raw, ATTRIBUTE_VALUE_LABEL_KEYS),
        display_code: first_optional_text(raw, &["displayCode"]),
    }
}

/// Normalizes one product, preferring canonical keys over the legacy
/// `product`-prefixed ones. Numeric fields default to 0.
#[must_use]
pub fn normalize_product(raw: &Value) -> Product {
    Product {
        id: first_id(raw, &["id", "productId"]),
        name: first_text(raw, &["name", "productName"]),
        description: first_text(raw, &["description", "productDescription"]),
        base_price: coerce_price(first_present(raw, &["basePrice", "productPrice"])),
        tax_rate: coerce_price(first_present(raw, &["taxRate", "productTaxRate"])),
        stock: coerce_count(first_present(raw, &["stock", "productStock"])),
        category: first_text(raw, &["category", "productCategory"]),
        image_url: first_text(raw, &["imageUrl", "productImageUrl"]),
        attributes: first_list(raw, PRODUCT_ATTRIBUTE_LIST_KEYS)
            .iter()
            .map(normalize_product_attribute)
            .collect(),
        created_at: first_optional_text(raw, &["createdAt"]),
        updated_at: first_optional_text(raw, &["updatedAt"]),
    }
}

/// Normalizes one product-attribute assignment.
///
/// Values that do not reference an attribute value are dropped, so an
/// assignment never carries a dangling value.
#[must_use]
pub fn normalize_product_attribute(raw: &Value) -> ProductAttribute {
    ProductAttribute {
        product_attribute_id: first_id(raw, PRODUCT_ATTRIBUTE_ID_KEYS),
        attribute_type_id: first_id(raw, ATTRIBUTE_TYPE_ID_KEYS),
        attribute_name: first_nonempty_text(raw, &["attributeName", "type", "name"]),
        attribute_input_type: first_text(raw, &["attributeInputType", "inputType"]),
        label: first_nonempty_text(raw, PRODUCT_ATTRIBUTE_LABEL_KEYS),
        values: first_list(raw, PRODUCT_ATTRIBUTE_VALUE_LIST_KEYS)
            .iter()
            .map(normalize_product_attribute_value)
            .filter(|value| value.attribute_value_id.is_some())
            .collect(),
    }
}

fn normalize_product_attribute_value(raw: &Value) -> ProductAttributeValue {
    ProductAttributeValue {
        product_attribute_value_id: first_id(raw, SELECTION_ID_KEYS),
        attribute_value_id: selection_value_id(raw),
        value_label: first_nonempty_text(raw, SELECTION_LABEL_KEYS),
        extra_price: coerce_price(raw.get("extraPrice")),
    }
}

/// Resolves which attribute value a selection points at.
///
/// A bare `id` doubles as the reference only when the entry carries no
/// reference key at all; an explicit `null` reference stays unresolved.
fn selection_value_id(raw: &Value) -> Option<Id> {
    if SELECTION_VALUE_ID_KEYS.iter().any(|key| raw.get(key).is_some()) {
        first_id(raw, SELECTION_VALUE_ID_KEYS)
    } else {
        first_id(raw, &["id"])
    }
}

/// Normalizes a product list body. A body that is not an array yields no
/// products.
#[must_use]
pub fn normalize_products(body: &Value) -> Vec<Product> {
    body.as_array()
        .map(|items| items.iter().map(normalize_product).collect())
        .unwrap_or_default()
}

/// Normalizes an attribute-type list body. A body that is not an array yields
/// no attribute types.
#[must_use]
pub fn normalize_attribute_types(body: &Value) -> Vec<AttributeType> {
    body.as_array()
        .map(|items| items.iter().map(normalize_attribute_type).collect())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
