use book_nook_catalog::{Book, Library, LibraryStore, StoreError};
use std::fs;
use tempfile::TempDir;

fn book(title: &str, author: &str, year: i32, read: bool) -> Book {
    Book {
        title: title.to_string(),
        author: author.to_string(),
        year,
        genre: "Fiction".to_string(),
        read,
    }
}

#[test]
fn save_then_load_round_trips_in_order() {
    let tmp = TempDir::new().unwrap();
    let store = LibraryStore::new(tmp.path().join("library.json"));

    let mut lib = Library::new();
    lib.add(book("Dune", "Herbert", 1965, true));
    lib.add(book("Emma", "Austen", 1815, false));
    lib.add(book("Ubik", "Dick", 1969, false));
    store.save(&lib).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, lib);
}

#[test]
fn round_trip_after_removal_preserves_remaining_order() {
    let tmp = TempDir::new().unwrap();
    let store = LibraryStore::new(tmp.path().join("library.json"));

    let mut lib = Library::new();
    lib.add(book("A", "x", 1, false));
    lib.add(book("B", "y", 2, false));
    lib.add(book("C", "z", 3, false));
    lib.remove_first("B");
    store.save(&lib).unwrap();

    let loaded = store.load().unwrap();
    let titles: Vec<_> = loaded.books().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, ["A", "C"]);
}

#[test]
fn load_missing_file_is_an_io_error() {
    let tmp = TempDir::new().unwrap();
    let store = LibraryStore::new(tmp.path().join("nonexistent.json"));
    assert!(matches!(store.load(), Err(StoreError::Io { .. })));
}

#[test]
fn load_or_empty_on_missing_file() {
    let tmp = TempDir::new().unwrap();
    let store = LibraryStore::new(tmp.path().join("nonexistent.json"));
    assert!(store.load_or_empty().is_empty());
}

#[test]
fn load_malformed_content_is_a_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("library.json");
    fs::write(&path, "this is not json").unwrap();

    let store = LibraryStore::new(&path);
    assert!(matches!(store.load(), Err(StoreError::Parse { .. })));
    assert!(store.load_or_empty().is_empty());
}

#[test]
fn load_wrong_shape_is_a_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("library.json");
    fs::write(&path, r#"{"title": "not an array"}"#).unwrap();

    let store = LibraryStore::new(&path);
    assert!(matches!(store.load(), Err(StoreError::Parse { .. })));
}

#[test]
fn save_overwrites_previous_content() {
    let tmp = TempDir::new().unwrap();
    let store = LibraryStore::new(tmp.path().join("library.json"));

    let mut lib = Library::new();
    lib.add(book("A", "x", 1, false));
    lib.add(book("B", "y", 2, false));
    store.save(&lib).unwrap();

    lib.remove_first("A");
    store.save(&lib).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.books()[0].title, "B");
}

#[test]
fn save_creates_parent_directories() {
    let tmp = TempDir::new().unwrap();
    let store = LibraryStore::new(tmp.path().join("deep").join("nested").join("library.json"));
    store.save(&Library::new()).unwrap();
    assert!(store.path().exists());
}

#[test]
fn persisted_file_is_a_json_array_of_records() {
    let tmp = TempDir::new().unwrap();
    let store = LibraryStore::new(tmp.path().join("library.json"));

    let mut lib = Library::new();
    lib.add(book("Dune", "Herbert", 1965, true));
    store.save(&lib).unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let arr = value.as_array().expect("top level should be an array");
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["title"], "Dune");
    assert_eq!(arr[0]["year"], 1965);
    assert_eq!(arr[0]["read"], true);
    // Pretty-printed for hand editing.
    assert!(raw.contains('\n'));
}
