use contacts::api::ContactsApi;
use contacts::commands::select;
use contacts::model::Contact;
use contacts::store::fs::JsonFileStore;
use contacts::store::ContactStore;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, JsonFileStore) {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("contacts.json"));
    (dir, store)
}

/// Formats a value the way the store writes files.
fn pretty(value: &Value) -> String {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser).unwrap();
    String::from_utf8(buf).unwrap()
}

fn varied_contacts() -> Vec<Contact> {
    vec![
        Contact::new("Ivanov", "Petr", 12345, "1990-01-01"),
        Contact::new("Иванова", "Мария", 89161234567, "01.02.1993"),
        Contact::new("O'Brien", "Seán \"Jack\"", -1, ""),
        Contact::new("", "", 0, "not a date"),
    ]
}

#[test]
fn save_then_load_returns_the_same_contacts() {
    let (_dir, mut store) = setup();
    let contacts = varied_contacts();

    store.save(&contacts).unwrap();
    assert_eq!(store.load().unwrap(), contacts);
}

#[test]
fn empty_list_round_trips() {
    let (_dir, mut store) = setup();
    store.save(&[]).unwrap();

    assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn session_lifecycle_persists_only_after_add() {
    let (_dir, store) = setup();
    let path = store.path().to_path_buf();

    let mut api = ContactsApi::open(store);
    api.display_contacts();
    assert!(!api.save_if_dirty().unwrap());
    assert!(!path.exists());

    api.add_contact(
        "Ivanov".into(),
        "Petr".into(),
        12345,
        "1990-01-01".into(),
    );
    assert!(api.save_if_dirty().unwrap());

    let reopened = ContactsApi::open(JsonFileStore::new(&path));
    assert_eq!(
        select::matching(reopened.contacts(), "Ivanov"),
        vec![Contact::new("Ivanov", "Petr", 12345, "1990-01-01")]
    );
}

#[test]
fn add_leaves_hand_edited_records_unchanged() {
    let (_dir, store) = setup();
    let hand_edited = json!([
        {
            "family": "Sidorov",
            "name": "Ivan",
            "number": "+7-916-123",
            "born": "1980",
            "email": "i@x.ru"
        },
        {
            "family": "Big",
            "name": "Number",
            "number": 12345.0,
            "born": "2000"
        },
        "just a note"
    ]);
    let before = pretty(&hand_edited);
    fs::write(store.path(), &before).unwrap();
    let path = store.path().to_path_buf();

    let mut api = ContactsApi::open(store);
    assert_eq!(api.contacts()[0].number, 0);
    api.add_contact(
        "Ivanov".into(),
        "Petr".into(),
        12345,
        "1990-01-01".into(),
    );
    assert!(api.save_if_dirty().unwrap());

    let after = fs::read_to_string(&path).unwrap();
    let kept = before.strip_suffix("\n]").unwrap();
    assert!(after.starts_with(kept), "stored records changed:\n{after}");
    assert!(after.contains("\"number\": \"+7-916-123\""));
    assert!(after.contains("\"email\": \"i@x.ru\""));
    assert!(after.contains("\"number\": 12345.0"));

    let saved: Value = serde_json::from_str(&after).unwrap();
    let saved = saved.as_array().unwrap();
    assert_eq!(saved.len(), 4);
    assert_eq!(&saved[..3], hand_edited.as_array().unwrap().as_slice());
    assert_eq!(
        saved[3],
        json!({"family": "Ivanov", "name": "Petr", "number": 12345, "born": "1990-01-01"})
    );
}

#[test]
fn corrupt_file_opens_as_empty_session() {
    let (_dir, store) = setup();
    fs::write(store.path(), "{ truncated").unwrap();

    let api = ContactsApi::open(store);
    assert!(api.contacts().is_empty());
    assert!(api.load_error().is_some());
}
