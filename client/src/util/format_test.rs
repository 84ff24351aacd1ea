use super::*;

#[test]
fn format_number_drops_trailing_zero_fraction() {
    assert_eq!(format_number(20.0), "20");
    assert_eq!(format_number(0.0), "0");
}

#[test]
fn format_number_keeps_fraction_digits() {
    assert_eq!(format_number(3.6), "3.6");
    assert_eq!(format_number(9.99), "9.99");
    assert_eq!(format_number(4.49), "4.49");
}

#[test]
fn format_price_prefixes_label_and_currency() {
    assert_eq!(format_price(20.0), "Price: $20");
    assert_eq!(format_price(1299.5), "Price: $1299.5");
}

#[test]
fn spec_value_text_prints_strings_unquoted() {
    assert_eq!(spec_value_text(&serde_json::json!("red")), "red");
}

#[test]
fn spec_value_text_prints_scalars() {
    assert_eq!(spec_value_text(&serde_json::json!(40)), "40");
    assert_eq!(spec_value_text(&serde_json::json!(true)), "true");
    assert_eq!(spec_value_text(&serde_json::Value::Null), "");
}

#[test]
fn spec_value_text_joins_arrays() {
    assert_eq!(spec_value_text(&serde_json::json!(["USB-C", "Bluetooth", 5])), "USB-C, Bluetooth, 5");
}
