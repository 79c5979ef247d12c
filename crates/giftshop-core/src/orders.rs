//! Order placement request and order history shapes.

use serde::{Deserialize, Serialize};

use crate::id::Id;

/// Body of `POST /order/place`.
///
/// A guest order carries contact details and a `null` user id; an order for a
/// signed-in user carries the user id and `null` contact fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub user_id: Option<Id>,
    pub guest_email: Option<String>,
    pub guest_phone: Option<String>,
    pub order_items: Vec<OrderItemRequest>,
    /// Sum of every line's subtotal plus tax.
    pub total_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub product_id: Option<Id>,
    pub quantity: u32,
    pub base_price: f64,
    /// Sum of the selected extras for one unit.
    pub extra_price: f64,
    /// Line subtotal before tax.
    pub line_total_price: f64,
    pub line_tax: f64,
    pub tax_rate: f64,
    pub order_item_attribute_request_list: Vec<OrderItemAttributeRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemAttributeRequest {
    pub product_attribute_id: Option<Id>,
    pub order_item_attribute_value_request_list: Vec<OrderItemAttributeValueRequest>,
}

/// A chosen value within an order line.
///
/// `custom_text` and `file_url` are always serialized; they stay `null` until
/// free-text and file capture exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemAttributeValueRequest {
    pub product_attribute_value_id: Option<Id>,
    pub custom_text: Option<String>,
    pub file_url: Option<String>,
    pub extra_price: f64,
}

/// An order as listed by `GET /orders/user/{userId}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderSummary {
    pub order_id: Option<Id>,
    pub status: Option<String>,
    pub total_price: f64,
    pub total_tax: f64,
    pub grand_total: f64,
    pub order_created_at: Option<String>,
    pub order_updated_at: Option<String>,
    pub guest_email: Option<String>,
    pub guest_phone: Option<String>,
    pub user_id: Option<Id>,
    pub order_items: Vec<OrderSummaryItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderSummaryItem {
    pub product_id: Option<Id>,
    pub product_name: Option<String>,
    pub quantity: u32,
    pub base_price: f64,
    pub line_extra_price: f64,
    pub line_tax: f64,
    pub line_total_price: f64,
    pub order_item_attribute_response_list: Vec<OrderSummaryAttribute>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderSummaryAttribute {
    pub product_attribute_id: Option<Id>,
    pub product_attribute_label: Option<String>,
    pub order_item_attribute_value_response_list: Vec<OrderSummaryAttributeValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderSummaryAttributeValue {
    #[serde(rename = "ProductAttributeValue_value")]
    pub value: Option<String>,
    pub extra_price: f64,
    pub custom_text: Option<String>,
    pub file_url: Option<String>,
}
