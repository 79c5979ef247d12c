use giftshop_client::ShopClient;
use giftshop_core::{format_money, Id};

use crate::client_failure;

/// Prints a user's order history, newest first as the backend returns it.
///
/// # Errors
///
/// Returns an error if the history cannot be fetched.
pub(crate) async fn run_orders(client: &ShopClient, user_id: &Id) -> anyhow::Result<()> {
    let orders = client
        .list_user_orders(user_id)
        .await
        .map_err(client_failure("load orders"))?;

    if orders.is_empty() {
        println!("no orders for user {user_id}");
        return Ok(());
    }

    println!("{:<10}{:<14}{:<22}{:>7}{:>12}", "ORDER", "STATUS", "PLACED", "ITEMS", "TOTAL");
    for order in &orders {
        let item_count: u32 = order.order_items.iter().map(|item| item.quantity).sum();
        println!(
            "{:<10}{:<14}{:<22}{:>7}{:>12}",
            order
                .order_id
                .as_ref()
                .map_or_else(|| "\u{2014}".to_string(), ToString::to_string),
            order.status.as_deref().unwrap_or("\u{2014}"),
            order.order_created_at.as_deref().unwrap_or("\u{2014}"),
            item_count,
            format_money(order.grand_total)
        );
        for item in &order.order_items {
            println!(
                "    {} x{}  {}",
                item.product_name.as_deref().unwrap_or("(unnamed)"),
                item.quantity,
                format_money(item.line_total_price + item.line_tax)
            );
        }
    }

    Ok(())
}
