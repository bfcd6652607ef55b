use std::fs;
use test_log::test;
use weighted_pick::{load_yaml, read_text, write_yaml, Error, ItemCollection, WeightedItem};

#[test]
fn test_yaml_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("items.yaml");
    let collection: ItemCollection = vec![
        WeightedItem::new("Cast {fireball}", 40),
        WeightedItem::new("Drink a potion", 100),
        WeightedItem::new("Weight: looks like yaml", 1),
        WeightedItem::new("", 7),
    ]
    .into();
    write_yaml(&path, &collection).unwrap();
    let loaded = load_yaml(&path).unwrap();
    assert_eq!(loaded, collection);
}

#[test]
fn test_text_conversion_to_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let text = dir.path().join("actions.txt");
    let yaml = dir.path().join("actions.yaml");
    fs::write(&text, "X\n\nY\r\n").unwrap();

    let collection = read_text(&text).unwrap();
    write_yaml(&yaml, &collection).unwrap();

    let loaded = load_yaml(&yaml).unwrap();
    assert_eq!(
        loaded.items,
        vec![WeightedItem::new("X", 100), WeightedItem::new("Y", 100)]
    );
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.yaml");
    assert!(matches!(load_yaml(&missing), Err(Error::FileRead { .. })));
    assert!(matches!(read_text(&missing), Err(Error::FileRead { .. })));
}

#[test]
fn test_bad_yaml_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.yaml");
    fs::write(&path, "items:\n  - Value: [unclosed\n").unwrap();
    let err = load_yaml(&path).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
    assert!(err.to_string().contains("bad.yaml"), "Got {}", err);
}

#[test]
fn test_unwritable_path_is_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("out.yaml");
    let collection: ItemCollection = vec![WeightedItem::new("X", 100)].into();
    assert!(matches!(
        write_yaml(&path, &collection),
        Err(Error::Write { .. })
    ));
}
