use clutch_api::model::{PlayerIdentity, Region};
use clutch_store::{FileLinkStore, LinkStore, MemoryLinkStore};
use std::path::PathBuf;

fn identity(name: &str) -> PlayerIdentity {
    PlayerIdentity {
        name: name.into(),
        tag: "EUW".into(),
        region: Region::Eu,
    }
}

/// Fresh path per test so parallel tests cannot trample each other's files.
fn scratch_path(test: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "clutch-store-{}-{test}.json",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}

#[tokio::test]
async fn memory_store_roundtrip() {
    let store = MemoryLinkStore::default();

    assert_eq!(store.get(1).await.unwrap(), None);
    store.upsert(1, identity("Foo")).await.unwrap();
    assert_eq!(store.get(1).await.unwrap(), Some(identity("Foo")));

    assert!(store.remove(1).await.unwrap());
    assert!(!store.remove(1).await.unwrap());
    assert_eq!(store.get(1).await.unwrap(), None);
}

#[tokio::test]
async fn relinking_overwrites_the_previous_entry() {
    let store = MemoryLinkStore::default();
    store.upsert(1, identity("Foo")).await.unwrap();
    store.upsert(1, identity("Bar")).await.unwrap();

    assert_eq!(store.get(1).await.unwrap(), Some(identity("Bar")));
    assert_eq!(store.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn file_store_roundtrip() {
    let path = scratch_path("roundtrip");
    let store = FileLinkStore::new(&path);

    store.upsert(100, identity("Foo")).await.unwrap();
    store.upsert(200, identity("Bar")).await.unwrap();
    assert_eq!(store.get(100).await.unwrap(), Some(identity("Foo")));

    // A second handle over the same file sees the same entries.
    let reopened = FileLinkStore::new(&path);
    let all = reopened.list_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all.get(&200), Some(&identity("Bar")));

    assert!(reopened.remove(100).await.unwrap());
    assert!(!reopened.remove(100).await.unwrap());
    assert_eq!(store.get(100).await.unwrap(), None);

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn missing_file_reads_as_empty() {
    let path = scratch_path("missing");
    let store = FileLinkStore::new(&path);

    assert_eq!(store.get(1).await.unwrap(), None);
    assert!(store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn corrupt_file_degrades_to_empty() {
    let path = scratch_path("corrupt");
    std::fs::write(&path, "{ not json").unwrap();

    let store = FileLinkStore::new(&path);
    assert_eq!(store.get(1).await.unwrap(), None);

    // The store stays usable: the next write replaces the corrupt file.
    store.upsert(1, identity("Foo")).await.unwrap();
    assert_eq!(store.get(1).await.unwrap(), Some(identity("Foo")));

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn file_layout_matches_the_original_json_shape() {
    let path = scratch_path("layout");
    let store = FileLinkStore::new(&path);
    store.upsert(42, identity("Foo")).await.unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed["42"]["name"], "Foo");
    assert_eq!(parsed["42"]["tag"], "EUW");
    assert_eq!(parsed["42"]["region"], "eu");

    let _ = std::fs::remove_file(&path);
}
