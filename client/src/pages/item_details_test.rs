use super::*;

#[test]
fn not_found_message_names_requested_id() {
    assert_eq!(not_found_message(Some("p999")), "No product matches \"p999\".");
}

#[test]
fn not_found_message_handles_missing_id() {
    assert_eq!(not_found_message(None), "No product was requested.");
    assert_eq!(not_found_message(Some("")), "No product was requested.");
}

#[test]
fn item_id_param_matches_route_segment() {
    assert_eq!(ITEM_ID_PARAM, "product_id");
}
