use giftshop_client::Checkout;
use giftshop_core::{Product, ProductAttribute, ProductAttributeValue};
use serde_json::json;

use super::*;
use crate::checkout::{build_cart, parse_item};

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["giftshop"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_products_command() {
    let cli = Cli::try_parse_from(["giftshop", "products"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Products)));
}

#[test]
fn parses_orders_with_numeric_user_id() {
    let cli = Cli::try_parse_from(["giftshop", "orders", "42"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Orders { user_id: Id::Num(42) })
    ));
}

#[test]
fn parses_product_update_with_file() {
    let cli = Cli::try_parse_from(["giftshop", "product", "update", "7", "--file", "mug.json"])
        .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Product {
            command: ProductCommands::Update { id: Id::Num(7), ref file }
        }) if file.to_str() == Some("mug.json")
    ));
}

#[test]
fn parses_attribute_delete() {
    let cli = Cli::try_parse_from(["giftshop", "attribute", "delete", "3"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Attribute {
            command: AttributeCommands::Delete { id: Id::Num(3) }
        })
    ));
}

#[test]
fn product_create_requires_file() {
    assert!(Cli::try_parse_from(["giftshop", "product", "create"]).is_err());
}

#[test]
fn parses_guest_checkout() {
    let cli = Cli::try_parse_from([
        "giftshop", "checkout", "--item", "1:2", "--item", "5", "--email", "a@b.c", "--phone",
        "555", "--dry-run",
    ])
    .unwrap();
    let Some(Commands::Checkout {
        items,
        email,
        phone,
        user_id,
        dry_run,
    }) = cli.command
    else {
        panic!("expected checkout command");
    };
    assert_eq!(
        items,
        vec![
            ItemSpec { product_id: Id::Num(1), quantity: 2, choices: vec![] },
            ItemSpec { product_id: Id::Num(5), quantity: 1, choices: vec![] },
        ]
    );
    assert_eq!(email.as_deref(), Some("a@b.c"));
    assert_eq!(phone.as_deref(), Some("555"));
    assert!(user_id.is_none());
    assert!(dry_run);
}

#[test]
fn checkout_rejects_email_with_user_id() {
    let result = Cli::try_parse_from([
        "giftshop", "checkout", "--item", "1", "--user-id", "9", "--email", "a@b.c",
    ]);
    assert!(result.is_err());
}

#[test]
fn checkout_user_id_is_sent_as_a_number() {
    let cli = Cli::try_parse_from(["giftshop", "checkout", "--item", "1", "--user-id", "42"])
        .unwrap();
    let Some(Commands::Checkout { items, user_id: Some(user_id), .. }) = cli.command else {
        panic!("expected checkout command with a user id");
    };
    assert_eq!(user_id, Id::Num(42));

    let cart = build_cart(&catalog(), &items).unwrap();
    let body = serde_json::to_value(Checkout::for_user(user_id).build_order_request(&cart)).unwrap();
    assert_eq!(body["userId"], json!(42));
}

#[test]
fn non_numeric_ids_stay_text() {
    let cli = Cli::try_parse_from(["giftshop", "attribute", "export", "color-01"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Attribute {
            command: AttributeCommands::Export { id: Id::Text(ref id) }
        }) if id == "color-01"
    ));
}

#[test]
fn checkout_requires_an_item() {
    assert!(Cli::try_parse_from(["giftshop", "checkout", "--user-id", "9"]).is_err());
}

#[test]
fn parse_item_rejects_zero_and_garbage_quantities() {
    assert!(parse_item("1:0").is_err());
    assert!(parse_item("1:many").is_err());
    assert!(parse_item(":2").is_err());
    assert_eq!(
        parse_item("sku-9").unwrap(),
        ItemSpec { product_id: Id::Text("sku-9".into()), quantity: 1, choices: vec![] }
    );
}

#[test]
fn parse_item_reads_attribute_choices() {
    assert_eq!(
        parse_item("1:2@11=21,12=30").unwrap(),
        ItemSpec {
            product_id: Id::Num(1),
            quantity: 2,
            choices: vec![(Id::Num(11), Id::Num(21)), (Id::Num(12), Id::Num(30))],
        }
    );
    assert_eq!(
        parse_item("1@11=21").unwrap().choices,
        vec![(Id::Num(11), Id::Num(21))]
    );
    assert!(parse_item("1@11").is_err());
    assert!(parse_item("1@=21").is_err());
    assert!(parse_item("1:2@").is_err());
}

fn catalog() -> Vec<Product> {
    vec![Product {
        id: Some(Id::Num(1)),
        name: "Mug".into(),
        description: String::new(),
        base_price: 10.0,
        tax_rate: 0.1,
        stock: 5,
        category: String::new(),
        image_url: String::new(),
        attributes: vec![ProductAttribute {
            product_attribute_id: Some(Id::Num(11)),
            attribute_type_id: Some(Id::Num(2)),
            attribute_name: "Color".into(),
            attribute_input_type: "RADIO".into(),
            label: String::new(),
            values: vec![
                ProductAttributeValue {
                    product_attribute_value_id: Some(Id::Num(111)),
                    attribute_value_id: Some(Id::Num(20)),
                    value_label: "Red".into(),
                    extra_price: 5.0,
                },
                ProductAttributeValue {
                    product_attribute_value_id: Some(Id::Num(112)),
                    attribute_value_id: Some(Id::Num(21)),
                    value_label: "Blue".into(),
                    extra_price: 0.0,
                },
            ],
        }],
        created_at: None,
        updated_at: None,
    }]
}

#[test]
fn build_cart_uses_default_selections() {
    let items = [ItemSpec { product_id: Id::Num(1), quantity: 2, choices: vec![] }];
    let cart = build_cart(&catalog(), &items).unwrap();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.lines()[0].selected_attributes[0].value_label, "Red");
    assert!((cart.total() - 33.0).abs() < 1e-9);
}

#[test]
fn build_cart_rejects_unknown_product() {
    let items = [ItemSpec { product_id: Id::Num(99), quantity: 1, choices: vec![] }];
    let err = build_cart(&catalog(), &items).unwrap_err();
    assert!(err.to_string().contains("99"));
}

#[test]
fn build_cart_applies_chosen_value() {
    let items = [parse_item("1:2@11=21").unwrap()];
    let cart = build_cart(&catalog(), &items).unwrap();
    let selected = &cart.lines()[0].selected_attributes;
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].value_label, "Blue");
    assert_eq!(selected[0].product_attribute_value_id, Some(Id::Num(112)));
    assert!((cart.total() - 22.0).abs() < 1e-9);
}

#[test]
fn build_cart_keeps_choices_apart_per_line() {
    let items = [parse_item("1@11=21").unwrap(), parse_item("1").unwrap()];
    let cart = build_cart(&catalog(), &items).unwrap();
    assert_eq!(cart.len(), 2);
    assert_eq!(cart.lines()[0].selected_attributes[0].value_label, "Blue");
    assert_eq!(cart.lines()[1].selected_attributes[0].value_label, "Red");
}

#[test]
fn build_cart_rejects_unknown_choice() {
    let unknown_assignment = [parse_item("1@99=21").unwrap()];
    let err = build_cart(&catalog(), &unknown_assignment).unwrap_err();
    assert!(err.to_string().contains("no attribute 99"));

    let unknown_value = [parse_item("1@11=77").unwrap()];
    let err = build_cart(&catalog(), &unknown_value).unwrap_err();
    assert!(err.to_string().contains("no value 77"));
}
