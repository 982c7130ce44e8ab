// File: tests/store_roundtrip.rs
// Persistence behaviour of the festival list: round-trips, corruption, removal.
use std::fs;
use utsav::context::{AppContext, TestContext};
use utsav::model::FestivalRecord;
use utsav::storage::FestivalStorage;
use utsav::store::FestivalStore;

fn rec(name: &str, month: u32, day: u32) -> FestivalRecord {
    FestivalRecord::new(name, month, day).unwrap()
}

fn sample() -> Vec<FestivalRecord> {
    vec![
        rec("Nepali New Year", 1, 1),
        rec("दशैं", 6, 10),
        rec("Tihar", 7, 15),
        // Duplicate names are allowed and keep their position.
        rec("Tihar", 7, 16),
        rec("Unnamed", 12, 31),
    ]
}

#[test]
fn test_save_then_load_is_identical() {
    let ctx = TestContext::new();
    let path = ctx.get_festival_path().unwrap();

    for records in [vec![], vec![rec("Solo", 3, 3)], sample()] {
        FestivalStorage::save(&path, &records).unwrap();
        assert_eq!(FestivalStorage::load(&path), records);
    }
}

#[test]
fn test_non_ascii_is_not_escaped() {
    let ctx = TestContext::new();
    let path = ctx.get_festival_path().unwrap();
    FestivalStorage::save(&path, &sample()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"दशैं\""));
    assert!(!text.contains("\\u"));
    assert!(text.starts_with("[\n  {\n    \"name\""));
}

#[test]
fn test_corrupt_file_loads_as_empty() {
    let ctx = TestContext::new();
    let path = ctx.get_festival_path().unwrap();

    for garbage in ["not json at all", "{\"name\": \"x\"}", "[{\"month\": \"one\"}]", ""] {
        fs::write(&path, garbage).unwrap();
        assert!(FestivalStorage::load(&path).is_empty(), "input: {:?}", garbage);
        assert!(FestivalStore::open(&path).is_empty());
    }
}

#[test]
fn test_store_reopens_with_same_order() {
    let ctx = TestContext::new();
    let path = ctx.get_festival_path().unwrap();

    let mut store = FestivalStore::open(&path);
    for r in sample() {
        store.add(r).unwrap();
    }

    let reopened = FestivalStore::open(&path);
    assert_eq!(reopened.festivals(), sample().as_slice());
}

#[test]
fn test_remove_by_index_keeps_order_and_persists() {
    let ctx = TestContext::new();
    let path = ctx.get_festival_path().unwrap();
    let n = sample().len();

    for i in 0..n {
        FestivalStorage::save(&path, &sample()).unwrap();
        let mut store = FestivalStore::open(&path);

        let removed = store.remove(i).unwrap();
        assert_eq!(removed, Some(sample()[i].clone()));

        let mut expected = sample();
        expected.remove(i);
        assert_eq!(store.len(), n - 1);
        assert_eq!(store.festivals(), expected.as_slice());
        // Already on disk, no explicit save needed.
        assert_eq!(FestivalStorage::load(&path), expected);
    }
}

#[test]
fn test_remove_out_of_range_is_noop() {
    let ctx = TestContext::new();
    let path = ctx.get_festival_path().unwrap();
    FestivalStorage::save(&path, &sample()).unwrap();

    let mut store = FestivalStore::open(&path);
    assert_eq!(store.remove(99).unwrap(), None);
    assert_eq!(store.festivals(), sample().as_slice());
}

#[test]
fn test_unwritable_destination_propagates_and_keeps_memory() {
    let ctx = TestContext::new();
    // Parent directory does not exist, so neither the lock nor the data file
    // can be created.
    let path = ctx.root.join("missing").join("festivals.json");

    assert!(FestivalStorage::save(&path, &sample()).is_err());

    let mut store = FestivalStore::open(&path);
    let err = store.add(rec("Holi", 11, 15)).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to save festivals"));
    // Not rolled back.
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(0).unwrap().name, "Holi");
}
