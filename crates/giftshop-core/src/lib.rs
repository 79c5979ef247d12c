pub mod app_config;
pub mod attributes;
pub mod cart;
pub mod config;
pub mod id;
pub mod orders;
pub mod pricing;
pub mod products;

pub use app_config::{AppConfig, Environment};
pub use attributes::{AttributeType, AttributeValue, InputKind};
pub use cart::{default_selections, Cart, CartLineItem, LineId, NewCartLine, SelectedAttribute};
pub use config::{load_app_config, load_app_config_from_env};
pub use id::Id;
pub use orders::{
    OrderItemAttributeRequest, OrderItemAttributeValueRequest, OrderItemRequest, OrderRequest,
    OrderSummary,
};
pub use pricing::{format_money, format_percent, price_line, price_lines, LineBreakdown, OrderTotals};
pub use products::{Product, ProductAttribute, ProductAttributeValue};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

impl ConfigError {
    /// Notification text for a front end.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::InvalidEnvVar { var, .. } => format!("Configuration value {var} is invalid."),
        }
    }
}
