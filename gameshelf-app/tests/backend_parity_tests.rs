#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Backend parity: the same scenarios run against `SqliteStore` and
//! `MemoryStore`, asserting identical observable behavior.

use gameshelf_app::adapters::{MemoryStore, SqliteStore};
use gameshelf_core::error::CoreError;
use gameshelf_core::traits::{IdentityRepository, LibraryRepository, ProfileRepository};
use gameshelf_core::types::{EntryDraft, NewIdentity, DEFAULT_STATUS};

/// Everything a scenario needs from a backend.
trait Store: IdentityRepository + ProfileRepository + LibraryRepository {}
impl<T: IdentityRepository + ProfileRepository + LibraryRepository> Store for T {}

/// Run one scenario against both backends. The temp dir must outlive the
/// SQLite run.
macro_rules! parity_test {
    ($name:ident, $scenario:ident) => {
        #[tokio::test]
        async fn $name() {
            let tmp = tempfile::tempdir().expect("failed to create temp dir");
            let sqlite = SqliteStore::new(&tmp.path().join("parity.db"))
                .await
                .expect("failed to create SqliteStore");
            $scenario(&sqlite).await;

            let memory = MemoryStore::new();
            $scenario(&memory).await;
        }
    };
}

fn new_identity(username: &str) -> NewIdentity {
    NewIdentity {
        username: username.to_string(),
        secret_hash: format!("$pbkdf2-sha256$fake-hash-for-{username}"),
    }
}

fn draft(title: &str, platform: &str) -> EntryDraft {
    EntryDraft {
        title: title.to_string(),
        platform: platform.to_string(),
        ..EntryDraft::default()
    }
}

// ===== Scenarios =====

/// Register "alice" -> id 1; create "Celeste" -> id 1 with defaults; full
/// replace flips status/progress/genres; delete twice is true then false.
async fn alice_celeste_script(store: &impl Store) {
    let alice = store.create_with_profile(new_identity("alice")).await.unwrap();
    assert_eq!(alice.id, 1);

    let entry = store.create(alice.id, draft("Celeste", "PC")).await.unwrap();
    assert_eq!(entry.id, 1);
    assert_eq!(entry.status, "backlog");
    assert_eq!(entry.progress, 0);
    assert!(entry.genres.is_empty());

    let updated = store
        .update_owned(
            entry.id,
            alice.id,
            EntryDraft {
                status: Some("completed".to_string()),
                progress: Some(100),
                genres: Some(vec!["Platformer".to_string()]),
                ..draft("Celeste", "PC")
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, "completed");
    assert_eq!(updated.progress, 100);
    assert_eq!(updated.genres, vec!["Platformer".to_string()]);

    assert!(store.delete_owned(entry.id, alice.id).await.unwrap());
    assert!(!store.delete_owned(entry.id, alice.id).await.unwrap());
}
parity_test!(parity_alice_celeste_script, alice_celeste_script);

/// Two identities each track "Hades"; listing stays per-identity.
async fn hades_isolation(store: &impl Store) {
    let a = store.create_with_profile(new_identity("player-a")).await.unwrap();
    let b = store.create_with_profile(new_identity("player-b")).await.unwrap();

    let a_entry = store.create(a.id, draft("Hades", "PC")).await.unwrap();
    let b_entry = store.create(b.id, draft("Hades", "Switch")).await.unwrap();

    let a_list = store.list_for(a.id).await.unwrap();
    assert_eq!(a_list.len(), 1);
    assert_eq!(a_list[0].id, a_entry.id);
    assert_eq!(a_list[0].platform, "PC");

    let b_list = store.list_for(b.id).await.unwrap();
    assert_eq!(b_list.len(), 1);
    assert_eq!(b_list[0].id, b_entry.id);
}
parity_test!(parity_hades_isolation, hades_isolation);

/// Duplicate usernames conflict on both backends.
async fn duplicate_conflict(store: &impl Store) {
    store.create_with_profile(new_identity("alice")).await.unwrap();
    let err = store
        .create_with_profile(new_identity("alice"))
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Conflict(u) if u == "alice"));
}
parity_test!(parity_duplicate_conflict, duplicate_conflict);

/// Genres survive storage unchanged, unicode and quoting included.
async fn genre_round_trip(store: &impl Store) {
    let alice = store.create_with_profile(new_identity("alice")).await.unwrap();

    let genres = vec![
        "Röguelike".to_string(),
        "Action \"RPG\"".to_string(),
        "メトロイドヴァニア".to_string(),
    ];
    let entry = store
        .create(
            alice.id,
            EntryDraft {
                genres: Some(genres.clone()),
                ..draft("Hollow Knight", "PC")
            },
        )
        .await
        .unwrap();

    let fetched = store
        .find_owned(entry.id, alice.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.genres, genres);
}
parity_test!(parity_genre_round_trip, genre_round_trip);

/// An entry owned by someone else is indistinguishable from a missing one.
async fn cross_identity_not_found(store: &impl Store) {
    let alice = store.create_with_profile(new_identity("alice")).await.unwrap();
    let bob = store.create_with_profile(new_identity("bob")).await.unwrap();
    let entry = store.create(alice.id, draft("Hades", "PC")).await.unwrap();

    assert!(store.find_owned(entry.id, bob.id).await.unwrap().is_none());
    assert!(store.find_owned(9999, bob.id).await.unwrap().is_none());
}
parity_test!(parity_cross_identity_not_found, cross_identity_not_found);

/// Cascade delete removes the profile and every entry of the identity.
async fn cascade_delete(store: &impl Store) {
    let alice = store.create_with_profile(new_identity("alice")).await.unwrap();
    store.create(alice.id, draft("Hades", "PC")).await.unwrap();
    store.create(alice.id, draft("Celeste", "Switch")).await.unwrap();

    IdentityRepository::delete(store, alice.id).await.unwrap();

    assert!(store.find_public(alice.id).await.unwrap().is_none());
    assert!(store.find_by_identity(alice.id).await.unwrap().is_none());
    assert!(store.list_for(alice.id).await.unwrap().is_empty());
}
parity_test!(parity_cascade_delete, cascade_delete);

/// progress=100 alone never flips status; the replace is literal.
async fn no_status_inference(store: &impl Store) {
    let alice = store.create_with_profile(new_identity("alice")).await.unwrap();
    let entry = store.create(alice.id, draft("Hades", "PC")).await.unwrap();

    let updated = store
        .update_owned(
            entry.id,
            alice.id,
            EntryDraft {
                progress: Some(100),
                ..draft("Hades", "PC")
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.progress, 100);
    assert_eq!(updated.status, DEFAULT_STATUS);
}
parity_test!(parity_no_status_inference, no_status_inference);

/// The catalog link set at creation survives updates that omit it.
async fn catalog_link_survives_update(store: &impl Store) {
    let alice = store.create_with_profile(new_identity("alice")).await.unwrap();
    let entry = store
        .create(
            alice.id,
            EntryDraft {
                catalog_id: Some(504_230),
                ..draft("Celeste", "PC")
            },
        )
        .await
        .unwrap();
    assert_eq!(entry.catalog_id, Some(504_230));

    let updated = store
        .update_owned(
            entry.id,
            alice.id,
            EntryDraft {
                progress: Some(50),
                ..draft("Celeste", "PC")
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.catalog_id, Some(504_230));
    assert_eq!(updated.progress, 50);
}
parity_test!(parity_catalog_link_survives_update, catalog_link_survives_update);

/// Neither backend accepts an entry for an identity that does not exist.
async fn create_requires_existing_owner(store: &impl Store) {
    let err = store.create(42, draft("Hades", "PC")).await.unwrap_err();
    assert!(matches!(err, CoreError::StorageError(_)));
}
parity_test!(parity_create_requires_existing_owner, create_requires_existing_owner);

/// Ids keep climbing after deletes on both backends.
async fn monotonic_ids(store: &impl Store) {
    let first = store.create_with_profile(new_identity("one")).await.unwrap();
    IdentityRepository::delete(store, first.id).await.unwrap();
    let second = store.create_with_profile(new_identity("two")).await.unwrap();
    assert!(second.id > first.id);

    let e1 = store.create(second.id, draft("Hades", "PC")).await.unwrap();
    store.delete_owned(e1.id, second.id).await.unwrap();
    let e2 = store.create(second.id, draft("Celeste", "PC")).await.unwrap();
    assert!(e2.id > e1.id);
}
parity_test!(parity_monotonic_ids, monotonic_ids);
