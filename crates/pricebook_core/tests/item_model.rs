use pricebook_core::{Item, ItemInput};
use serde_json::json;

#[test]
fn item_serialization_uses_expected_wire_fields() {
    let item = Item {
        id: 7,
        name: "Widget".to_string(),
        price: 100,
    };

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["name"], "Widget");
    assert_eq!(json["price"], 100);

    let decoded: Item = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, item);
}

#[test]
fn from_input_builds_persisted_shape() {
    let input = ItemInput::new("assembled", 9);

    let item = Item::from_input(3, &input);
    assert_eq!(item.id, 3);
    assert_eq!(item.name, "assembled");
    assert_eq!(item.price, 9);
}

#[test]
fn input_decoding_requires_both_fields() {
    let missing_price = serde_json::from_value::<ItemInput>(json!({ "name": "x" }));
    assert!(missing_price.unwrap_err().to_string().contains("price"));

    let missing_name = serde_json::from_value::<ItemInput>(json!({ "price": 1 }));
    assert!(missing_name.unwrap_err().to_string().contains("name"));
}

#[test]
fn input_decoding_ignores_id_and_unknown_fields() {
    let input: ItemInput =
        serde_json::from_value(json!({ "id": 42, "name": "n", "price": 1, "extra": true }))
            .unwrap();

    assert_eq!(input, ItemInput::new("n", 1));
}
