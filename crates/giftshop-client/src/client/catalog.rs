use giftshop_core::{AttributeType, Id, Product};
use reqwest::Method;

use super::{record_from_body, ShopClient};
use crate::error::ClientError;
use crate::normalize::{
    normalize_attribute_type, normalize_attribute_types, normalize_product, normalize_products,
};
use crate::payload::{AttributeTypePayload, CreateProductPayload, UpdateProductPayload};

impl ShopClient {
    /// Fetches the catalog from `GET /products`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::UnexpectedStatus`] for a non-2xx status.
    /// - [`ClientError::InvalidResponse`] if the body is not JSON.
    /// - [`ClientError::Http`] on transport failure.
    pub async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        let body = self.get_json("/products").await?;
        let products = normalize_products(&body);
        tracing::debug!(count = products.len(), "fetched products");
        Ok(products)
    }

    /// Fetches every attribute type from `GET /attribute`.
    ///
    /// # Errors
    ///
    /// Same as [`ShopClient::list_products`].
    pub async fn list_attribute_types(&self) -> Result<Vec<AttributeType>, ClientError> {
        let body = self.get_json("/attribute").await?;
        let attribute_types = normalize_attribute_types(&body);
        tracing::debug!(count = attribute_types.len(), "fetched attribute types");
        Ok(attribute_types)
    }

    /// Creates a product. Returns the saved product when the backend echoes
    /// it back.
    ///
    /// # Errors
    ///
    /// [`ClientError::UnexpectedStatus`] or [`ClientError::Http`].
    pub async fn create_product(
        &self,
        payload: &CreateProductPayload,
    ) -> Result<Option<Product>, ClientError> {
        tracing::debug!(name = %payload.base.name, "creating product");
        let body = self.send_json(Method::POST, "/product", payload).await?;
        tracing::info!(name = %payload.base.name, "product created");
        Ok(record_from_body(&body).map(|raw| normalize_product(&raw)))
    }

    /// Replaces product `payload.id`.
    ///
    /// # Errors
    ///
    /// [`ClientError::UnexpectedStatus`] or [`ClientError::Http`].
    pub async fn update_product(
        &self,
        payload: &UpdateProductPayload,
    ) -> Result<Option<Product>, ClientError> {
        let path = format!("/product/{}", payload.id);
        tracing::debug!(id = %payload.id, "updating product");
        let body = self.send_json(Method::PUT, &path, payload).await?;
        tracing::info!(id = %payload.id, "product updated");
        Ok(record_from_body(&body).map(|raw| normalize_product(&raw)))
    }

    /// # Errors
    ///
    /// [`ClientError::UnexpectedStatus`] or [`ClientError::Http`].
    pub async fn delete_product(&self, id: &Id) -> Result<(), ClientError> {
        self.delete(&format!("/product/{id}")).await?;
        tracing::info!(%id, "product deleted");
        Ok(())
    }

    /// Creates an attribute type.
    ///
    /// # Errors
    ///
    /// [`ClientError::UnexpectedStatus`] or [`ClientError::Http`].
    pub async fn create_attribute_type(
        &self,
        payload: &AttributeTypePayload,
    ) -> Result<Option<AttributeType>, ClientError> {
        tracing::debug!(name = %payload.name, "creating attribute type");
        let body = self.send_json(Method::POST, "/attribute", payload).await?;
        tracing::info!(name = %payload.name, "attribute type created");
        Ok(record_from_body(&body).map(|raw| normalize_attribute_type(&raw)))
    }

    /// Replaces attribute type `id`.
    ///
    /// # Errors
    ///
    /// [`ClientError::UnexpectedStatus`] or [`ClientError::Http`].
    pub async fn update_attribute_type(
        &self,
        id: &Id,
        payload: &AttributeTypePayload,
    ) -> Result<Option<AttributeType>, ClientError> {
        let path = format!("/attribute/{id}");
        let body = self.send_json(Method::PUT, &path, payload).await?;
        tracing::info!(%id, "attribute type updated");
        Ok(record_from_body(&body).map(|raw| normalize_attribute_type(&raw)))
    }

    /// # Errors
    ///
    /// [`ClientError::UnexpectedStatus`] or [`ClientError::Http`].
    pub async fn delete_attribute_type(&self, id: &Id) -> Result<(), ClientError> {
        self.delete(&format!("/attribute/{id}")).await?;
        tracing::info!(%id, "attribute type deleted");
        Ok(())
    }
}
