//! Catalog admin command handlers.
//!
//! Forms are read from JSON files shaped like [`ProductForm`] and
//! [`AttributeForm`]; `export` writes the same shape for an existing record,
//! so an edit is export, change, update.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Subcommand;
use giftshop_client::{
    build_create_attribute_payload, build_create_product_payload, build_update_attribute_payload,
    build_update_product_payload, AttributeForm, ProductForm, ShopClient,
};
use giftshop_core::Id;
use serde::de::DeserializeOwned;

use crate::{client_failure, parse_id};

/// Sub-commands available under `product`.
#[derive(Debug, Subcommand)]
pub enum ProductCommands {
    /// Create a product from a form file
    Create {
        /// Path to a product form JSON file
        #[arg(long)]
        file: PathBuf,
    },
    /// Replace a product with the contents of a form file
    Update {
        #[arg(value_parser = parse_id)]
        id: Id,
        #[arg(long)]
        file: PathBuf,
    },
    /// Delete a product
    Delete {
        #[arg(value_parser = parse_id)]
        id: Id,
    },
    /// Print an existing product as a form file
    Export {
        #[arg(value_parser = parse_id)]
        id: Id,
    },
}

/// Sub-commands available under `attribute`.
#[derive(Debug, Subcommand)]
pub enum AttributeCommands {
    /// Create an attribute type from a form file
    Create {
        /// Path to an attribute form JSON file
        #[arg(long)]
        file: PathBuf,
    },
    /// Replace an attribute type with the contents of a form file
    Update {
        #[arg(value_parser = parse_id)]
        id: Id,
        #[arg(long)]
        file: PathBuf,
    },
    /// Delete an attribute type
    Delete {
        #[arg(value_parser = parse_id)]
        id: Id,
    },
    /// Print an existing attribute type as a form file
    Export {
        #[arg(value_parser = parse_id)]
        id: Id,
    },
}

fn read_form<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read form file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("form file {} is not a valid form", path.display()))
}

/// # Errors
///
/// Returns an error if the form file is unreadable or the backend rejects
/// the request.
pub(crate) async fn run_product_command(
    client: &ShopClient,
    command: ProductCommands,
) -> anyhow::Result<()> {
    match command {
        ProductCommands::Create { file } => {
            let form: ProductForm = read_form(&file)?;
            let saved = client
                .create_product(&build_create_product_payload(&form))
                .await
                .map_err(client_failure("create product"))?;
            match saved.and_then(|p| p.id) {
                Some(id) => println!("created product {id}"),
                None => println!("created product {}", form.name.trim()),
            }
        }
        ProductCommands::Update { id, file } => {
            let form: ProductForm = read_form(&file)?;
            client
                .update_product(&build_update_product_payload(&form, &id))
                .await
                .map_err(client_failure("update product"))?;
            println!("updated product {id}");
        }
        ProductCommands::Delete { id } => {
            client
                .delete_product(&id)
                .await
                .map_err(client_failure("delete product"))?;
            println!("deleted product {id}");
        }
        ProductCommands::Export { id } => {
            let products = client
                .list_products()
                .await
                .map_err(client_failure("load products"))?;
            let product = products
                .iter()
                .find(|p| p.id.as_ref().is_some_and(|own| own.matches(&id)))
                .ok_or_else(|| anyhow::anyhow!("product {id} not found"))?;
            let form = ProductForm::from_product(product);
            println!("{}", serde_json::to_string_pretty(&form)?);
        }
    }
    Ok(())
}

/// # Errors
///
/// Returns an error if the form file is unreadable or the backend rejects
/// the request.
pub(crate) async fn run_attribute_command(
    client: &ShopClient,
    command: AttributeCommands,
) -> anyhow::Result<()> {
    match command {
        AttributeCommands::Create { file } => {
            let form: AttributeForm = read_form(&file)?;
            let saved = client
                .create_attribute_type(&build_create_attribute_payload(&form))
                .await
                .map_err(client_failure("create attribute"))?;
            match saved.and_then(|a| a.id) {
                Some(id) => println!("created attribute type {id}"),
                None => println!("created attribute type {}", form.name.trim()),
            }
        }
        AttributeCommands::Update { id, file } => {
            let form: AttributeForm = read_form(&file)?;
            client
                .update_attribute_type(&id, &build_update_attribute_payload(&form, &id))
                .await
                .map_err(client_failure("update attribute"))?;
            println!("updated attribute type {id}");
        }
        AttributeCommands::Delete { id } => {
            client
                .delete_attribute_type(&id)
                .await
                .map_err(client_failure("delete attribute"))?;
            println!("deleted attribute type {id}");
        }
        AttributeCommands::Export { id } => {
            let attribute_types = client
                .list_attribute_types()
                .await
                .map_err(client_failure("load attributes"))?;
            let attribute = attribute_types
                .iter()
                .find(|a| a.id.as_ref().is_some_and(|own| own.matches(&id)))
                .ok_or_else(|| anyhow::anyhow!("attribute type {id} not found"))?;
            let form = AttributeForm::from_attribute_type(attribute);
            println!("{}", serde_json::to_string_pretty(&form)?);
        }
    }
    Ok(())
}
