pub mod checkout;
pub mod client;
pub mod error;
pub mod form;
pub mod normalize;
pub mod payload;
pub(crate) mod resolve;
pub mod response;

pub use checkout::{Checkout, PlacedOrder};
pub use client::ShopClient;
pub use error::{CheckoutError, ClientError};
pub use form::{AttributeForm, AttributeRow, AttributeValueRow, ProductForm, ValueRow};
pub use normalize::{
    normalize_attribute_type, normalize_attribute_types, normalize_product,
    normalize_product_attribute, normalize_products,
};
pub use payload::{
    build_base_product_payload, build_create_attribute_payload, build_create_product_payload,
    build_update_attribute_payload, build_update_product_payload, AttributeTypePayload,
    BaseProductPayload, CreateProductPayload, UpdateProductPayload,
};
