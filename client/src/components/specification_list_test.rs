use super::*;

#[test]
fn specification_lines_single_pair() {
    let spec = BTreeMap::from([("color".to_owned(), serde_json::json!("red"))]);
    let lines = specification_lines(&spec);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].to_string(), "color: red");
}

#[test]
fn specification_lines_cover_every_pair_in_key_order() {
    let spec = BTreeMap::from([
        ("weight".to_owned(), serde_json::json!("1.2 kg")),
        ("battery".to_owned(), serde_json::json!(5000)),
        ("ports".to_owned(), serde_json::json!(["USB-C", "HDMI"])),
    ]);
    let lines: Vec<String> = specification_lines(&spec).iter().map(ToString::to_string).collect();
    assert_eq!(lines, ["battery: 5000", "ports: USB-C, HDMI", "weight: 1.2 kg"]);
}

#[test]
fn specification_lines_empty_for_empty_mapping() {
    assert!(specification_lines(&BTreeMap::new()).is_empty());
}
