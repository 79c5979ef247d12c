mod admin;
mod catalog;
mod checkout;
mod orders;

use std::convert::Infallible;

use clap::{Parser, Subcommand};
use giftshop_client::{ClientError, ShopClient};
use giftshop_core::Id;
use tracing_subscriber::EnvFilter;

use crate::admin::{AttributeCommands, ProductCommands};
use crate::checkout::ItemSpec;

#[derive(Debug, Parser)]
#[command(name = "giftshop")]
#[command(about = "Gift shop storefront and catalog admin client")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the product catalog
    Products,
    /// List attribute types and their values
    Attributes,
    /// Show a user's order history
    Orders {
        /// Backend user id
        #[arg(value_parser = parse_id)]
        user_id: Id,
    },
    /// Create, update, or delete products
    Product {
        #[command(subcommand)]
        command: ProductCommands,
    },
    /// Create, update, or delete attribute types
    Attribute {
        #[command(subcommand)]
        command: AttributeCommands,
    },
    /// Build a cart and place an order
    Checkout {
        /// Product to buy, as PRODUCT_ID[:QTY][@ASSIGNMENT_ID=VALUE_ID,...]
        /// (repeatable)
        #[arg(long = "item", required = true, value_parser = checkout::parse_item)]
        items: Vec<ItemSpec>,
        /// Guest contact email
        #[arg(long, conflicts_with = "user_id")]
        email: Option<String>,
        /// Guest contact phone
        #[arg(long, conflicts_with = "user_id")]
        phone: Option<String>,
        /// Place the order for a signed-in user instead of a guest
        #[arg(long, value_parser = parse_id)]
        user_id: Option<Id>,
        /// Print the quote without placing the order
        #[arg(long)]
        dry_run: bool,
    },
}

/// Reads an id argument; integers become numeric ids so request bodies
/// carry numbers.
pub(crate) fn parse_id(raw: &str) -> Result<Id, Infallible> {
    raw.parse()
}

/// Wraps a client error in the message a user should see for `action`,
/// keeping the underlying error as the source.
pub(crate) fn client_failure(action: &str) -> impl FnOnce(ClientError) -> anyhow::Error + '_ {
    move |e| {
        tracing::warn!(error = %e, action, "request failed");
        let message = e.user_message(action);
        anyhow::Error::new(e).context(message)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = giftshop_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("giftshop: no command given; run with --help for usage");
        return Ok(());
    };

    tracing::debug!(base_url = %config.api_base_url, env = %config.env, "starting");
    let client = ShopClient::new(&config)?;

    match command {
        Commands::Products => catalog::run_products(&client).await,
        Commands::Attributes => catalog::run_attributes(&client).await,
        Commands::Orders { user_id } => orders::run_orders(&client, &user_id).await,
        Commands::Product { command } => admin::run_product_command(&client, command).await,
        Commands::Attribute { command } => admin::run_attribute_command(&client, command).await,
        Commands::Checkout {
            items,
            email,
            phone,
            user_id,
            dry_run,
        } => {
            let contact = checkout::Contact {
                email,
                phone,
                user_id,
            };
            checkout::run_checkout(&client, &items, contact, dry_run).await
        }
    }
}

#[cfg(test)]
mod tests;
