//! End-to-end credential store integration tests.
//!
//! These exercise the full save/load path against a real directory tree:
//! layout creation, file placement, overwrite semantics, and the
//! fail-closed-to-empty behavior on corruption.

use sequential_secrets::{Category, CredentialStore, FileCredentialStore, LoadOutcome, Provider};
use tempfile::TempDir;

fn store() -> (FileCredentialStore, TempDir) {
    let tmp = TempDir::new().unwrap();
    (FileCredentialStore::new(tmp.path()), tmp)
}

#[tokio::test]
async fn test_save_creates_exactly_one_key_and_one_blob() {
    let (store, tmp) = store();
    let discord = Provider::new("Discord").unwrap();

    store
        .save(Category::Tokens, &discord, "abc.def.ghi")
        .await
        .unwrap();

    // Full tree exists even for the category that was not written.
    for sub in ["tokens/encrypted", "tokens/key", "apis/encrypted", "apis/key"] {
        assert!(tmp.path().join(sub).is_dir(), "missing {sub}");
    }

    assert!(tmp.path().join("tokens/encrypted/.discord.token").is_file());
    assert!(tmp.path().join("tokens/key/.discord.key").is_file());
    assert_eq!(
        std::fs::read_dir(tmp.path().join("tokens/encrypted"))
            .unwrap()
            .count(),
        1
    );
    assert_eq!(
        std::fs::read_dir(tmp.path().join("tokens/key")).unwrap().count(),
        1
    );

    assert_eq!(store.load(Category::Tokens, &discord).await, "abc.def.ghi");
}

#[tokio::test]
async fn test_blob_on_disk_is_not_plaintext() {
    let (store, tmp) = store();
    let p = Provider::new("discord").unwrap();

    store
        .save(Category::Tokens, &p, "abc.def.ghi")
        .await
        .unwrap();

    let blob = std::fs::read(tmp.path().join("tokens/encrypted/.discord.token")).unwrap();
    let haystack = String::from_utf8_lossy(&blob);
    assert!(!haystack.contains("abc.def.ghi"));
}

#[tokio::test]
async fn test_absent_and_corrupt_are_distinguishable_but_render_alike() {
    let (store, tmp) = store();
    let p = Provider::new("discord").unwrap();

    // Never saved: Absent.
    assert!(matches!(
        store.load_entry(Category::Tokens, &p).await,
        LoadOutcome::Absent
    ));

    // Saved then corrupted: Corrupt.
    store.save(Category::Tokens, &p, "token").await.unwrap();
    let path = tmp.path().join("tokens/encrypted/.discord.token");
    let mut blob = std::fs::read(&path).unwrap();
    let mid = blob.len() / 2;
    blob[mid] ^= 0xff;
    std::fs::write(&path, &blob).unwrap();

    assert!(matches!(
        store.load_entry(Category::Tokens, &p).await,
        LoadOutcome::Corrupt { .. }
    ));

    // Both render as the same empty string at the caller surface.
    assert_eq!(store.load(Category::Tokens, &p).await, "");
}

#[tokio::test]
async fn test_overwrite_after_corruption_recovers() {
    let (store, tmp) = store();
    let p = Provider::new("discord").unwrap();

    store.save(Category::Tokens, &p, "old-token").await.unwrap();
    let path = tmp.path().join("tokens/encrypted/.discord.token");
    std::fs::write(&path, b"garbage").unwrap();
    assert_eq!(store.load(Category::Tokens, &p).await, "");

    // A fresh save replaces the blob under the unchanged key.
    store.save(Category::Tokens, &p, "new-token").await.unwrap();
    assert_eq!(store.load(Category::Tokens, &p).await, "new-token");
}

#[tokio::test]
async fn test_every_load_rereads_disk() {
    let (store_a, tmp) = store();
    let store_b = FileCredentialStore::new(tmp.path());
    let p = Provider::new("discord").unwrap();

    // A second store over the same tree sees the write immediately; there
    // is no per-process cache to invalidate.
    store_a.save(Category::Tokens, &p, "shared").await.unwrap();
    assert_eq!(store_b.load(Category::Tokens, &p).await, "shared");

    store_b.save(Category::Tokens, &p, "updated").await.unwrap();
    assert_eq!(store_a.load(Category::Tokens, &p).await, "updated");
}

#[tokio::test]
async fn test_list_reflects_saved_providers_across_categories() {
    let (store, _tmp) = store();

    for (category, label, value) in [
        (Category::Tokens, "Discord", "t1"),
        (Category::Tokens, "backup", "t2"),
        (Category::Apis, "OpenAI", "k1"),
    ] {
        store
            .save(category, &Provider::new(label).unwrap(), value)
            .await
            .unwrap();
    }

    let tokens = store.list(Category::Tokens).await.unwrap();
    assert_eq!(
        tokens.iter().map(|p| p.as_str()).collect::<Vec<_>>(),
        vec!["backup", "discord"]
    );

    let apis = store.list(Category::Apis).await.unwrap();
    assert_eq!(
        apis.iter().map(|p| p.as_str()).collect::<Vec<_>>(),
        vec!["openai"]
    );
}
