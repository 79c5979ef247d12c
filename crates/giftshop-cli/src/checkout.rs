//! `checkout`: builds a cart from product ids and attribute choices, prints
//! the quote, and places the order.

use std::cell::RefCell;

use giftshop_client::{Checkout, ShopClient};
use giftshop_core::{
    default_selections, format_money, price_line, Cart, Id, NewCartLine, Product,
    SelectedAttribute,
};

use crate::{client_failure, parse_id};

/// One `--item` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ItemSpec {
    pub product_id: Id,
    pub quantity: u32,
    /// Explicit picks as `(product attribute id, attribute value id)`;
    /// assignments not listed keep their default value.
    pub choices: Vec<(Id, Id)>,
}

/// Parses `PRODUCT_ID[:QTY][@ASSIGNMENT_ID=VALUE_ID,...]`.
pub(crate) fn parse_item(raw: &str) -> Result<ItemSpec, String> {
    let (head, choices) = match raw.split_once('@') {
        Some((head, choices)) => (head, parse_choices(choices)?),
        None => (raw, Vec::new()),
    };
    let (id, quantity) = match head.rsplit_once(':') {
        Some((id, qty)) => {
            let quantity = qty
                .trim()
                .parse::<u32>()
                .map_err(|e| format!("invalid quantity \"{qty}\": {e}"))?;
            (id, quantity)
        }
        None => (head, 1),
    };
    if id.trim().is_empty() {
        return Err("product id must not be empty".to_string());
    }
    if quantity == 0 {
        return Err("quantity must be at least 1".to_string());
    }
    let Ok(product_id) = parse_id(id);
    Ok(ItemSpec {
        product_id,
        quantity,
        choices,
    })
}

fn parse_choices(raw: &str) -> Result<Vec<(Id, Id)>, String> {
    raw.split(',')
        .map(|pair| {
            let (assignment, value) = pair
                .split_once('=')
                .ok_or_else(|| format!("invalid choice \"{pair}\": expected ASSIGNMENT_ID=VALUE_ID"))?;
            if assignment.trim().is_empty() || value.trim().is_empty() {
                return Err(format!("invalid choice \"{pair}\": ids must not be empty"));
            }
            let Ok(assignment) = parse_id(assignment);
            let Ok(value) = parse_id(value);
            Ok((assignment, value))
        })
        .collect()
}

/// Who the order is for.
#[derive(Debug, Default)]
pub(crate) struct Contact {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub user_id: Option<Id>,
}

/// Adds one line per item. Each line starts from the product's default
/// selections; an explicit choice replaces the default for its assignment.
///
/// # Errors
///
/// Returns an error naming the first item whose product is not in the
/// catalog, or whose choice names an assignment or value the product does
/// not offer.
pub(crate) fn build_cart(products: &[Product], items: &[ItemSpec]) -> anyhow::Result<Cart> {
    let mut cart = Cart::new();
    for item in items {
        let product = products
            .iter()
            .find(|p| p.id.as_ref().is_some_and(|own| own.matches(&item.product_id)))
            .ok_or_else(|| anyhow::anyhow!("product {} not found", item.product_id))?;
        if !product.is_in_stock() {
            tracing::warn!(product_id = %item.product_id, "product is out of stock");
        }
        let selections = apply_choices(product, &item.choices)?;
        cart.add(NewCartLine::from_product(product, selections, item.quantity));
    }
    Ok(cart)
}

fn apply_choices(product: &Product, choices: &[(Id, Id)]) -> anyhow::Result<Vec<SelectedAttribute>> {
    let mut selections = default_selections(product);
    for (assignment_id, value_id) in choices {
        let assignment = product.attribute(assignment_id).ok_or_else(|| {
            anyhow::anyhow!("product {} has no attribute {assignment_id}", product.name)
        })?;
        let value = assignment
            .values
            .iter()
            .find(|v| v.attribute_value_id.as_ref().is_some_and(|own| own.matches(value_id)))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "attribute {assignment_id} of product {} offers no value {value_id}",
                    product.name
                )
            })?;
        let chosen = SelectedAttribute::from_choice(assignment, value);
        match selections
            .iter_mut()
            .find(|s| s.product_attribute_id == chosen.product_attribute_id)
        {
            Some(slot) => *slot = chosen,
            None => selections.push(chosen),
        }
    }
    Ok(selections)
}

fn print_quote(cart: &Cart) {
    for line in cart.lines() {
        let breakdown = price_line(line);
        println!(
            "{:<32}{:>5} x {:>10}{:>12}",
            line.name,
            breakdown.quantity,
            format_money(line.unit_price()),
            format_money(breakdown.line_total)
        );
        for selected in &line.selected_attributes {
            println!(
                "    {} (+{})",
                selected.value_label,
                format_money(selected.extra_price)
            );
        }
    }
    let totals = cart.totals();
    println!("{:<49}{:>12}", "Subtotal", format_money(totals.subtotal));
    println!("{:<49}{:>12}", "Tax", format_money(totals.tax));
    println!("{:<49}{:>12}", "Total", format_money(totals.grand_total));
}

/// # Errors
///
/// Returns an error if the catalog cannot be loaded, an item is unknown, the
/// checkout is refused, or the backend rejects the order.
pub(crate) async fn run_checkout(
    client: &ShopClient,
    items: &[ItemSpec],
    contact: Contact,
    dry_run: bool,
) -> anyhow::Result<()> {
    let products = client
        .list_products()
        .await
        .map_err(client_failure("load products"))?;
    let cart = RefCell::new(build_cart(&products, items)?);

    print_quote(&cart.borrow());
    if dry_run {
        println!("dry run: order not placed");
        return Ok(());
    }

    let checkout = match contact.user_id {
        Some(user_id) => Checkout::for_user(user_id),
        None => Checkout::new(),
    };
    checkout.set_guest_email(contact.email.as_deref().unwrap_or_default());
    checkout.set_guest_phone(contact.phone.as_deref().unwrap_or_default());

    match checkout.place_order(&cart, client).await {
        Ok(placed) => {
            match placed.order_id {
                Some(id) => println!("order {id} placed"),
                None => println!("order placed"),
            }
            println!("charged {}", format_money(placed.total_price));
            Ok(())
        }
        Err(e) => {
            if !e.is_validation() {
                tracing::warn!(error = %e, "checkout failed");
            }
            let message = e.user_message();
            Err(anyhow::Error::new(e).context(message))
        }
    }
}
