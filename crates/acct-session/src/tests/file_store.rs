use crate::{FileKeyValueStore, KeyValueStore};

use googletest::prelude::*;
use tempfile::TempDir;

#[tokio::test]
async fn given_no_file_when_get_then_none_and_no_file_created() {
    // Given
    let temp = TempDir::new().unwrap();
    let store = FileKeyValueStore::new(temp.path().join("session.json"));

    // When
    let result = store.get("isLoggedIn").await.unwrap();

    // Then
    assert_that!(result, none());
    assert_that!(store.path().exists(), is_false());
}

#[tokio::test]
async fn given_value_set_when_reopened_then_value_persists() {
    // Given
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("session.json");
    FileKeyValueStore::new(&path)
        .set("isLoggedIn", "true")
        .await
        .unwrap();

    // When: A new store instance reads the same file
    let reopened = FileKeyValueStore::new(&path);

    // Then
    assert_that!(reopened.get("isLoggedIn").await.unwrap(), some(eq("true")));
}

#[tokio::test]
async fn given_two_keys_when_one_removed_then_other_survives() {
    // Given
    let temp = TempDir::new().unwrap();
    let store = FileKeyValueStore::new(temp.path().join("session.json"));
    store.set("a", "1").await.unwrap();
    store.set("b", "2").await.unwrap();

    // When
    store.remove("a").await.unwrap();

    // Then
    assert_that!(store.get("a").await.unwrap(), none());
    assert_that!(store.get("b").await.unwrap(), some(eq("2")));
}

#[tokio::test]
async fn given_successful_write_when_listing_dir_then_no_temp_file_left() {
    // Given
    let temp = TempDir::new().unwrap();
    let store = FileKeyValueStore::new(temp.path().join("session.json"));

    // When
    store.set("a", "1").await.unwrap();

    // Then
    let names: Vec<String> = std::fs::read_dir(temp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_that!(names, len(eq(1)));
    assert_that!(names[0].as_str(), eq("session.json"));
}

#[tokio::test]
async fn given_corrupted_file_when_get_then_empty_and_backup_created() {
    // Given: A file that is not a JSON object
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.json");
    std::fs::write(&path, "{not json").unwrap();
    let store = FileKeyValueStore::new(&path);

    // When
    let result = store.get("isLoggedIn").await.unwrap();

    // Then: Treated as empty and the bad file is moved aside
    assert_that!(result, none());
    assert_that!(path.exists(), is_false());
    let backups = std::fs::read_dir(temp.path())
        .unwrap()
        .filter(|entry| {
            entry
                .as_ref()
                .unwrap()
                .file_name()
                .to_string_lossy()
                .starts_with("session.json.corrupted.")
        })
        .count();
    assert_that!(backups, eq(1));
}

#[tokio::test]
async fn given_corrupted_file_when_set_then_store_recovers() {
    // Given
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();
    let store = FileKeyValueStore::new(&path);

    // When
    store.set("a", "1").await.unwrap();

    // Then
    assert_that!(store.get("a").await.unwrap(), some(eq("1")));
}
