use time_range::{TimeRange, by_key, list, lookup, resolve_or_default};

#[test]
fn catalog_drives_a_picker() {
    let labels: Vec<&str> = list().iter().map(|descriptor| descriptor.label).collect();
    assert_eq!(
        labels,
        ["Last 15 Min", "Last Hour", "Last 12 Hours", "Last Day", "Last 7 Days", "Last Month"]
    );

    // A key persisted in the page URL maps back to its option.
    let selected = lookup("7d").expect("persisted key must resolve");
    assert_eq!(selected.key, TimeRange::Last7Days);
    assert_eq!(selected.label, "Last 7 Days");

    // A stale key from an old link falls back to the first option.
    assert_eq!(resolve_or_default("90d").key, TimeRange::Last15Min);
}

#[test]
fn map_mirrors_list() {
    assert_eq!(by_key().len(), list().len());
    for descriptor in list() {
        assert_eq!(by_key()[descriptor.key.as_str()], *descriptor);
    }
}

#[test]
fn options_serialize_for_the_frontend() {
    let json = serde_json::to_value(list()).unwrap();
    assert_eq!(json[0], serde_json::json!({ "key": "15m", "label": "Last 15 Min" }));
    assert_eq!(json[5], serde_json::json!({ "key": "30d", "label": "Last Month" }));
}
