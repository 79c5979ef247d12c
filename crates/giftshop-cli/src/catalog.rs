//! Read-only catalog listings.

use giftshop_client::ShopClient;
use giftshop_core::{format_money, format_percent, Id};

use crate::client_failure;

fn id_text(id: Option<&Id>) -> String {
    id.map_or_else(|| "\u{2014}".to_string(), ToString::to_string)
}

/// Prints every product with its base and lowest configurable price, tax
/// rate, stock and options.
///
/// # Errors
///
/// Returns an error if the catalog cannot be fetched.
pub(crate) async fn run_products(client: &ShopClient) -> anyhow::Result<()> {
    let products = client
        .list_products()
        .await
        .map_err(client_failure("load products"))?;

    if products.is_empty() {
        println!("no products in the catalog");
        return Ok(());
    }

    println!(
        "{:<8}{:<32}{:>12}{:>12}{:>10}{:>8}  CATEGORY",
        "ID", "NAME", "PRICE", "FROM", "TAX", "STOCK"
    );
    for product in &products {
        println!(
            "{:<8}{:<32}{:>12}{:>12}{:>10}{:>8}  {}",
            id_text(product.id.as_ref()),
            product.name,
            format_money(product.base_price),
            format_money(product.starting_price()),
            format_percent(product.tax_rate),
            product.stock,
            product.category
        );
        for attribute in &product.attributes {
            let values: Vec<String> = attribute
                .values
                .iter()
                .map(|v| {
                    let value_id = id_text(v.attribute_value_id.as_ref());
                    if v.extra_price > 0.0 {
                        format!("{value_id}={} (+{})", v.value_label, format_money(v.extra_price))
                    } else {
                        format!("{value_id}={}", v.value_label)
                    }
                })
                .collect();
            println!(
                "        {} [{}]: {}",
                attribute.display_label(),
                id_text(attribute.product_attribute_id.as_ref()),
                values.join(", ")
            );
        }
    }

    Ok(())
}

/// Prints every attribute type with its input kind and allowed values.
///
/// # Errors
///
/// Returns an error if the attribute types cannot be fetched.
pub(crate) async fn run_attributes(client: &ShopClient) -> anyhow::Result<()> {
    let attribute_types = client
        .list_attribute_types()
        .await
        .map_err(client_failure("load attributes"))?;

    if attribute_types.is_empty() {
        println!("no attribute types defined");
        return Ok(());
    }

    println!("{:<8}{:<24}{:<12}VALUES", "ID", "NAME", "KIND");
    for attribute in &attribute_types {
        let values: Vec<String> = attribute
            .attribute_values
            .iter()
            .map(|v| format!("{}={}", id_text(v.id.as_ref()), v.value))
            .collect();
        println!(
            "{:<8}{:<24}{:<12}{}",
            id_text(attribute.id.as_ref()),
            attribute.name,
            attribute.input_type.as_str(),
            values.join(", ")
        );
    }

    Ok(())
}
