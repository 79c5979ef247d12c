use giftshop_core::Id;
use serde_json::json;

use super::*;

// -----------------------------------------------------------------------
// normalize_attribute_type
// -----------------------------------------------------------------------

#[test]
fn attribute_type_resolves_each_legacy_id_alias() {
    for key in ["attributeTypeId", "attributeId", "typeId", "id"] {
        let raw = json!({ key: 42, "name": "Color" });
        assert_eq!(
            normalize_attribute_type(&raw).id,
            Some(Id::Num(42)),
            "alias {key} should resolve"
        );
    }
}

#[test]
fn attribute_type_prefers_attribute_type_id_over_id() {
    let raw = json!({ "id": 1, "typeId": 2, "attributeTypeId": 3 });
    assert_eq!(normalize_attribute_type(&raw).id, Some(Id::Num(3)));
}

#[test]
fn attribute_type_reads_newer_schema() {
    let raw = json!({
        "id": 5,
        "name": "Size",
        "inputType": "DROPDOWN",
        "attributeValues": [
            { "id": 50, "value": "S" },
            { "id": 51, "value": "M" }
        ]
    });
    let attr = normalize_attribute_type(&raw);
    assert_eq!(attr.name, "Size");
    assert_eq!(attr.input_type, InputKind::Dropdown);
    assert_eq!(attr.attribute_values.len(), 2);
    assert_eq!(attr.attribute_values[1].id, Some(Id::Num(51)));
    assert_eq!(attr.attribute_values[1].value, "M");
}

#[test]
fn attribute_type_reads_older_schema() {
    let raw = json!({
        "typeId": 8,
        "type": "Color",
        "description": "Paint finish",
        "values": [
            { "valueId": 80, "valueName": "Red", "displayCode": "#ff0000" },
            { "attributeValueId": 81, "name": "Blue" }
        ]
    });
    let attr = normalize_attribute_type(&raw);
    assert_eq!(attr.id, Some(Id::Num(8)));
    assert_eq!(attr.name, "Color");
    assert_eq!(attr.description, "Paint finish");
    assert_eq!(attr.input_type, InputKind::Text, "missing kind defaults to TEXT");
    assert_eq!(attr.attribute_values[0].id, Some(Id::Num(80)));
    assert_eq!(attr.attribute_values[0].value, "Red");
    assert_eq!(attr.attribute_values[0].display_code.as_deref(), Some("#ff0000"));
    assert_eq!(attr.attribute_values[1].id, Some(Id::Num(81)));
    assert_eq!(attr.attribute_values[1].value, "Blue");
}

#[test]
fn attribute_type_keeps_unknown_input_kind_verbatim() {
    let raw = json!({ "id": 1, "name": "Swatch", "inputType": "COLOR_PICKER" });
    assert_eq!(
        normalize_attribute_type(&raw).input_type,
        InputKind::Other("COLOR_PICKER".into())
    );
}

#[test]
fn attribute_type_normalization_is_idempotent() {
    let raw = json!({
        "typeId": "9",
        "type": "Ribbon",
        "values": [{ "valueId": 1, "valueName": "Gold" }, { "name": "No id" }]
    });
    let once = normalize_attribute_type(&raw);
    let twice = normalize_attribute_type(&serde_json::to_value(&once).unwrap());
    assert_eq!(once, twice);
}

// -----------------------------------------------------------------------
// normalize_product
// -----------------------------------------------------------------------

fn legacy_product_json() -> Value {
    json!({
        "productId": 12,
        "productName": "Gift Basket",
        "productDescription": "Assorted treats",
        "productPrice": "49.90",
        "productTaxRate": 0.18,
        "productStock": "6",
        "productCategory": "Food",
        "productImageUrl": "basket.jpg",
        "productAttributeResponses": [{
            "id": 300,
            "attributeTypeId": 4,
            "attributeName": "Wrap",
            "attributeInputType": "RADIO",
            "productAttributeLabel": "Wrapping",
            "productAttributeValueResponses": [
                { "id": 3000, "attributeValueId": 40, "attributeValueName": "Gold", "extraPrice": 2.5 },
                { "id": 3001, "attributeValueId": null, "attributeValueName": "Broken" }
            ]
        }]
    })
}

#[test]
fn product_falls_back_to_prefixed_fields() {
    let product = normalize_product(&legacy_product_json());
    assert_eq!(product.id, Some(Id::Num(12)));
    assert_eq!(product.name, "Gift Basket");
    assert_eq!(product.description, "Assorted treats");
    assert!((product.base_price - 49.9).abs() < 1e-9);
    assert!((product.tax_rate - 0.18).abs() < 1e-9);
    assert_eq!(product.stock, 6);
    assert_eq!(product.category, "Food");
    assert_eq!(product.image_url, "basket.jpg");
}

#[test]
fn product_prefers_canonical_fields() {
    let raw = json!({
        "id": 1, "productId": 2,
        "name": "Canonical", "productName": "Legacy",
        "basePrice": 10, "productPrice": 99,
        "stock": 3, "productStock": 30
    });
    let product = normalize_product(&raw);
    assert_eq!(product.id, Some(Id::Num(1)));
    assert_eq!(product.name, "Canonical");
    assert!((product.base_price - 10.0).abs() < 1e-9);
    assert_eq!(product.stock, 3);
}

#[test]
fn product_numeric_fields_default_to_zero() {
    let raw = json!({ "id": 1, "basePrice": "ten", "taxRate": null, "stock": [] });
    let product = normalize_product(&raw);
    assert!(product.base_price.abs() < 1e-9);
    assert!(product.tax_rate.abs() < 1e-9);
    assert_eq!(product.stock, 0);
}

#[test]
fn product_without_attributes_has_empty_list() {
    let product = normalize_product(&json!({ "id": 1, "name": "Card" }));
    assert!(product.attributes.is_empty());
    assert_eq!(product.description, "");
}

#[test]
fn product_attributes_are_normalized() {
    let product = normalize_product(&legacy_product_json());
    assert_eq!(product.attributes.len(), 1);
    let attr = &product.attributes[0];
    assert_eq!(attr.product_attribute_id, Some(Id::Num(300)));
    assert_eq!(attr.attribute_type_id, Some(Id::Num(4)));
    assert_eq!(attr.label, "Wrapping");
    assert_eq!(attr.attribute_name, "Wrap");
    assert_eq!(attr.values.len(), 1, "value without attributeValueId is dropped");
    assert_eq!(attr.values[0].product_attribute_value_id, Some(Id::Num(3000)));
    assert_eq!(attr.values[0].attribute_value_id, Some(Id::Num(40)));
    assert_eq!(attr.values[0].value_label, "Gold");
    assert!((attr.values[0].extra_price - 2.5).abs() < 1e-9);
}

#[test]
fn product_normalization_is_idempotent() {
    let once = normalize_product(&legacy_product_json());
    let twice = normalize_product(&serde_json::to_value(&once).unwrap());
    assert_eq!(once, twice);
}

// -----------------------------------------------------------------------
// normalize_product_attribute
// -----------------------------------------------------------------------

#[test]
fn product_attribute_label_falls_back_through_type_and_name() {
    let by_type = normalize_product_attribute(&json!({ "id": 1, "type": "Color" }));
    assert_eq!(by_type.label, "Color");
    let by_name = normalize_product_attribute(&json!({ "id": 1, "name": "Size" }));
    assert_eq!(by_name.label, "Size");
    let explicit = normalize_product_attribute(&json!({ "id": 1, "label": "Mug size", "name": "Size" }));
    assert_eq!(explicit.label, "Mug size");
}

#[test]
fn product_attribute_reads_first_present_value_list() {
    for key in [
        "productAttributeValues",
        "productAttributeValueResponses",
        "values",
        "attributeValues",
        "productAttributeValueRequestList",
    ] {
        let raw = json!({ "attributeTypeId": 1, key: [{ "attributeValueId": 7, "extraPrice": 1 }] });
        let attr = normalize_product_attribute(&raw);
        assert_eq!(attr.values.len(), 1, "list key {key} should be read");
    }
}

#[test]
fn product_attribute_never_keeps_dangling_values() {
    let raw = json!({
        "attributeTypeId": 1,
        "values": [
            { "attributeValueId": null, "value": "a" },
            { "valueLabel": "b", "extraPrice": 3 },
            { "attributeValueId": "", "value": "c" },
            { "valueId": 9, "value": "d" }
        ]
    });
    let attr = normalize_product_attribute(&raw);
    assert!(attr.values.iter().all(|v| v.attribute_value_id.is_some()));
    assert_eq!(attr.values.len(), 1);
    assert_eq!(attr.values[0].value_label, "d");
}

#[test]
fn product_attribute_bare_id_serves_both_references() {
    let raw = json!({ "attributeTypeId": 1, "values": [{ "id": 5, "value": "Red" }] });
    let attr = normalize_product_attribute(&raw);
    assert_eq!(attr.values[0].product_attribute_value_id, Some(Id::Num(5)));
    assert_eq!(attr.values[0].attribute_value_id, Some(Id::Num(5)));
}

#[test]
fn product_attribute_null_reference_is_not_replaced_by_selection_id() {
    let raw = json!({
        "attributeTypeId": 1,
        "values": [
            { "id": 3001, "attributeValueId": null, "value": "Gone" },
            { "productAttributeValueId": 3002, "valueId": null, "value": "Also gone" },
            { "id": 3003, "value": "Kept" }
        ]
    });
    let attr = normalize_product_attribute(&raw);
    assert_eq!(attr.values.len(), 1);
    assert_eq!(attr.values[0].value_label, "Kept");
    assert_eq!(attr.values[0].attribute_value_id, Some(Id::Num(3003)));
}

#[test]
fn product_attribute_label_does_not_borrow_type_name() {
    let attr = normalize_product_attribute(&json!({ "id": 1, "attributeName": "Color" }));
    assert_eq!(attr.attribute_name, "Color");
    assert_eq!(attr.label, "");
    assert_eq!(attr.display_label(), "Color");
}

#[test]
fn canonical_product_survives_renormalization() {
    let product = Product {
        id: Some(Id::Num(8)),
        name: "Tote".into(),
        description: String::new(),
        base_price: 15.0,
        tax_rate: 0.05,
        stock: 2,
        category: "Bags".into(),
        image_url: String::new(),
        attributes: vec![ProductAttribute {
            product_attribute_id: Some(Id::Num(80)),
            attribute_type_id: Some(Id::Num(2)),
            attribute_name: "Color".into(),
            attribute_input_type: "RADIO".into(),
            label: String::new(),
            values: vec![ProductAttributeValue {
                product_attribute_value_id: None,
                attribute_value_id: Some(Id::Num(20)),
                value_label: String::new(),
                extra_price: 1.5,
            }],
        }],
        created_at: Some(String::new()),
        updated_at: None,
    };
    let again = normalize_product(&serde_json::to_value(&product).unwrap());
    assert_eq!(again, product);
}

#[test]
fn product_attribute_negative_extra_price_is_clamped() {
    let raw = json!({ "attributeTypeId": 1, "values": [{ "attributeValueId": 5, "extraPrice": -3 }] });
    assert!(normalize_product_attribute(&raw).values[0].extra_price.abs() < 1e-9);
}

// -----------------------------------------------------------------------
// list helpers
// -----------------------------------------------------------------------

#[test]
fn list_helpers_ignore_non_array_bodies() {
    assert!(normalize_products(&json!({ "error": "nope" })).is_empty());
    assert!(normalize_attribute_types(&json!("text")).is_empty());
}

#[test]
fn list_helpers_keep_order() {
    let products = normalize_products(&json!([{ "id": 2 }, { "id": 1 }]));
    let ids: Vec<_> = products.into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![Some(Id::Num(2)), Some(Id::Num(1))]);
}
