use super::*;

fn temp_token_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("styleshare-test-{}", uuid::Uuid::new_v4()))
        .join("token")
}

#[test]
fn file_store_missing_file_loads_none() {
    let store = FileTokenStore::new(temp_token_path());
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn file_store_save_then_load_trims() {
    let store = FileTokenStore::new(temp_token_path());
    store.save("  abc123 ").unwrap();
    assert_eq!(store.load().unwrap(), Some("abc123".to_owned()));
    let _ = std::fs::remove_dir_all(store.path().parent().unwrap());
}

#[test]
fn file_store_remove_clears_and_is_idempotent() {
    let store = FileTokenStore::new(temp_token_path());
    store.save("abc123").unwrap();
    store.remove().unwrap();
    assert_eq!(store.load().unwrap(), None);
    store.remove().unwrap();
    let _ = std::fs::remove_dir_all(store.path().parent().unwrap());
}

#[test]
fn file_store_blank_file_loads_none() {
    let store = FileTokenStore::new(temp_token_path());
    store.save("   ").unwrap();
    assert_eq!(store.load().unwrap(), None);
    let _ = std::fs::remove_dir_all(store.path().parent().unwrap());
}

#[test]
fn memory_store_round_trip() {
    let store = MemoryTokenStore::default();
    assert_eq!(store.load().unwrap(), None);
    store.save("tok").unwrap();
    assert_eq!(store.load().unwrap(), Some("tok".to_owned()));
    store.remove().unwrap();
    assert_eq!(store.load().unwrap(), None);
}

#[cfg(unix)]
#[test]
fn file_store_token_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let store = FileTokenStore::new(temp_token_path());
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), "old\n").unwrap();
    std::fs::set_permissions(store.path(), std::fs::Permissions::from_mode(0o644)).unwrap();

    store.save("secret").unwrap();

    let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
    assert_eq!(store.load().unwrap(), Some("secret".to_owned()));
    let _ = std::fs::remove_dir_all(store.path().parent().unwrap());
}
