use careermate_client::prelude::*;

fn session(access: &str) -> StoredSession {
    StoredSession {
        access_token: access.to_string(),
        refresh_token: Some("R1".to_string()),
        user: Some(UserInfo {
            email: "a@b.c".to_string(),
            ..UserInfo::default()
        }),
        expires_at: None,
    }
}

#[test]
fn test_memory_store_save_load_clear() {
    let store = MemoryStore::new();
    assert!(store.load().unwrap().is_none());

    store.save(&session("A1")).unwrap();
    store.save(&session("A2")).unwrap();
    assert_eq!(store.load().unwrap().unwrap().access_token, "A2");

    store.clear().unwrap();
    store.clear().unwrap();
    assert!(store.load().unwrap().is_none());
}

#[test]
fn test_file_store_overwrites_and_survives_new_instance() {
    let dir = std::env::temp_dir().join(format!("careermate-unit-store-{}", std::process::id()));
    let path = dir.join("nested").join("session.json");

    FileStore::new(&path).save(&session("A1")).unwrap();
    FileStore::new(&path).save(&session("A2")).unwrap();

    let reopened = FileStore::new(&path);
    let loaded = reopened.load().unwrap().unwrap();
    assert_eq!(loaded.access_token, "A2");
    assert_eq!(loaded.user.map(|u| u.email).as_deref(), Some("a@b.c"));

    reopened.clear().unwrap();
    assert!(reopened.load().unwrap().is_none());
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn test_cache_dir_store_location() {
    if let Ok(store) = FileStore::in_cache_dir() {
        assert!(store.path().ends_with("careermate/session.json"));
    }
}
