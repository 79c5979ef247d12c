use giftshop_core::{Id, OrderRequest, OrderSummary};
use reqwest::Method;
use serde_json::Value;

use super::ShopClient;
use crate::error::ClientError;
use crate::resolve::first_id;

impl ShopClient {
    /// Submits an order to `POST /order/place`.
    ///
    /// Returns the new order's id when the backend reports one.
    ///
    /// # Errors
    ///
    /// [`ClientError::UnexpectedStatus`] or [`ClientError::Http`]. A 2xx
    /// response is never an error, whatever its body.
    pub async fn place_order(&self, order: &OrderRequest) -> Result<Option<Id>, ClientError> {
        tracing::debug!(
            lines = order.order_items.len(),
            total_price = order.total_price,
            guest = order.user_id.is_none(),
            "placing order"
        );
        let body = self.send_json(Method::POST, "/order/place", order).await?;
        let order_id = order_id_from_body(&body);
        tracing::info!(order_id = ?order_id, "order placed");
        Ok(order_id)
    }

    /// Fetches a user's order history from `GET /orders/user/{user_id}`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::UnexpectedStatus`] or [`ClientError::Http`].
    /// - [`ClientError::InvalidResponse`] if the body is not JSON.
    /// - [`ClientError::Deserialize`] if it is not a list of orders.
    pub async fn list_user_orders(&self, user_id: &Id) -> Result<Vec<OrderSummary>, ClientError> {
        let path = format!("/orders/user/{user_id}");
        let body = self.get_json(&path).await?;
        let orders: Vec<OrderSummary> =
            serde_json::from_value(body).map_err(|source| ClientError::Deserialize {
                context: format!("GET {path}"),
                source,
            })?;
        tracing::debug!(count = orders.len(), %user_id, "fetched orders");
        Ok(orders)
    }
}

/// Reads an order id from a bare id body or an object's `orderId`/`id`.
///
/// A JSON string is unwrapped once more when it holds JSON, so a
/// double-encoded object still yields its id.
pub(super) fn order_id_from_body(body: &str) -> Option<Id> {
    if body.trim().is_empty() {
        return None;
    }
    let value = match serde_json::from_str::<Value>(body) {
        Ok(Value::String(inner)) => serde_json::from_str(&inner).unwrap_or(Value::String(inner)),
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, "order accepted but response was not JSON");
            return None;
        }
    };
    if value.is_object() {
        first_id(&value, &["orderId", "id"])
    } else {
        Id::from_json(&value)
    }
}
