//! Request payloads for the admin catalog endpoints.
//!
//! Create and update use different shapes. A create payload never carries
//! identifiers. An update payload references persisted rows by their own id
//! and new rows by the attribute type or value they point at, never both.

use giftshop_core::{Id, InputKind};
use serde::Serialize;

use crate::form::{AttributeForm, AttributeRow, ProductForm, ValueRow};
use crate::resolve::{count_from_f64, parse_number_text};

/// Product fields shared by the create and update shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseProductPayload {
    pub name: String,
    pub description: String,
    pub base_price: f64,
    pub stock: u32,
    /// Fraction, e.g. `0.18`.
    pub tax_rate: f64,
    pub category: String,
    pub image_url: String,
}

/// Body of `POST /product`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductPayload {
    #[serde(flatten)]
    pub base: BaseProductPayload,
    pub product_attribute_request_list: Vec<CreateProductAttribute>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductAttribute {
    pub attribute_type_id: Id,
    pub product_attribute_label: String,
    pub product_attribute_value_request_list: Vec<CreateProductAttributeValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductAttributeValue {
    pub attribute_value_id: Id,
    pub extra_price: f64,
}

/// Body of `PUT /product/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductPayload {
    pub id: Id,
    #[serde(flatten)]
    pub base: BaseProductPayload,
    pub product_attributes: Vec<UpdateProductAttribute>,
}

/// An assignment in an update. Exactly one of `id` and `attribute_type_id`
/// is serialized when the assignment has an id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductAttribute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_type_id: Option<Id>,
    pub product_attribute_label: String,
    pub product_attribute_values: Vec<UpdateProductAttributeValue>,
}

/// A value in an update: either a persisted selection (`id`) or a new one
/// (`attribute_value_id`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductAttributeValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_value_id: Option<Id>,
    pub extra_price: f64,
}

/// Body of `POST /attribute` and `PUT /attribute/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeTypePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    pub name: String,
    pub input_type: InputKind,
    pub attribute_values: Vec<AttributeValuePayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeValuePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    pub value: String,
}

/// Builds the scalar product fields from form text.
///
/// Unparseable or negative prices and stock become 0. The percentage tax
/// field is divided by 100.
#[must_use]
pub fn build_base_product_payload(form: &ProductForm) -> BaseProductPayload {
    BaseProductPayload {
        name: form.name.trim().to_owned(),
        description: form.description.trim().to_owned(),
        base_price: money_from_text(&form.base_price),
        stock: parse_number_text(&form.stock).map_or(0, count_from_f64),
        tax_rate: parse_number_text(&form.tax_rate).map_or(0.0, |percent| percent / 100.0),
        category: form.category.trim().to_owned(),
        image_url: form.image_url.trim().to_owned(),
    }
}

/// Builds the create shape.
///
/// Assignments without an attribute type, and values without an attribute
/// value, cannot be created and are left out. So are assignments with no
/// values left.
#[must_use]
pub fn build_create_product_payload(form: &ProductForm) -> CreateProductPayload {
    let product_attribute_request_list = form
        .attributes
        .iter()
        .filter_map(|row| {
            let attribute_type_id = row.attribute_type_id.clone()?.coerce();
            let values: Vec<_> = row
                .values
                .iter()
                .filter_map(|value| {
                    Some(CreateProductAttributeValue {
                        attribute_value_id: value.attribute_value_id.clone()?.coerce(),
                        extra_price: money_from_text(&value.extra_price),
                    })
                })
                .collect();
            (!values.is_empty()).then(|| CreateProductAttribute {
                attribute_type_id,
                product_attribute_label: row.label.trim().to_owned(),
                product_attribute_value_request_list: values,
            })
        })
        .collect();

    CreateProductPayload {
        base: build_base_product_payload(form),
        product_attribute_request_list,
    }
}

/// Builds the update shape for the product with `product_id`.
#[must_use]
pub fn build_update_product_payload(form: &ProductForm, product_id: &Id) -> UpdateProductPayload {
    UpdateProductPayload {
        id: product_id.clone().coerce(),
        base: build_base_product_payload(form),
        product_attributes: form
            .attributes
            .iter()
            .filter_map(update_attribute)
            .collect(),
    }
}

fn update_attribute(row: &AttributeRow) -> Option<UpdateProductAttribute> {
    let id = row.product_attribute_id.clone().map(Id::coerce);
    let attribute_type_id = if id.is_some() {
        None
    } else {
        row.attribute_type_id.clone().map(Id::coerce)
    };
    let values: Vec<_> = row.values.iter().filter_map(update_value).collect();

    if id.is_none() && attribute_type_id.is_none() && values.is_empty() {
        return None;
    }
    Some(UpdateProductAttribute {
        id,
        attribute_type_id,
        product_attribute_label: row.label.trim().to_owned(),
        product_attribute_values: values,
    })
}

fn update_value(value: &ValueRow) -> Option<UpdateProductAttributeValue> {
    let extra_price = money_from_text(&value.extra_price);
    match (&value.product_attribute_value_id, &value.attribute_value_id) {
        (Some(id), _) => Some(UpdateProductAttributeValue {
            id: Some(id.clone().coerce()),
            attribute_value_id: None,
            extra_price,
        }),
        (None, Some(attribute_value_id)) => Some(UpdateProductAttributeValue {
            id: None,
            attribute_value_id: Some(attribute_value_id.clone().coerce()),
            extra_price,
        }),
        (None, None) => None,
    }
}

/// Builds the body for creating an attribute type. Blank values are dropped.
#[must_use]
pub fn build_create_attribute_payload(form: &AttributeForm) -> AttributeTypePayload {
    AttributeTypePayload {
        id: None,
        name: form.name.trim().to_owned(),
        input_type: input_kind_or_text(&form.input_type),
        attribute_values: form
            .attribute_values
            .iter()
            .filter_map(|row| {
                let value = row.value.trim();
                (!value.is_empty()).then(|| AttributeValuePayload {
                    id: None,
                    value: value.to_owned(),
                })
            })
            .collect(),
    }
}

/// Builds the body for updating attribute type `attribute_id`. Persisted
/// values keep their ids.
#[must_use]
pub fn build_update_attribute_payload(form: &AttributeForm, attribute_id: &Id) -> AttributeTypePayload {
    AttributeTypePayload {
        id: Some(attribute_id.clone().coerce()),
        name: form.name.trim().to_owned(),
        input_type: input_kind_or_text(&form.input_type),
        attribute_values: form
            .attribute_values
            .iter()
            .filter_map(|row| {
                let value = row.value.trim();
                (!value.is_empty()).then(|| AttributeValuePayload {
                    id: row.id.clone().map(Id::coerce),
                    value: value.to_owned(),
                })
            })
            .collect(),
    }
}

fn input_kind_or_text(kind: &InputKind) -> InputKind {
    if kind.as_str().trim().is_empty() {
        InputKind::Text
    } else {
        kind.clone()
    }
}

fn money_from_text(text: &str) -> f64 {
    parse_number_text(text).map_or(0.0, |n| n.max(0.0))
}
