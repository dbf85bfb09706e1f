use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let store = MemoryStorage::new();
    assert!(store.is_empty());
    store.set_item("k", "v1");
    store.set_item("k", "v2");
    assert_eq!(store.get_item("k").as_deref(), Some("v2"));
    assert_eq!(store.len(), 1);
    store.remove_item("k");
    assert_eq!(store.get_item("k"), None);
    store.remove_item("k");
    assert!(store.is_empty());
}

#[test]
fn memory_storage_clones_share_items() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.set_item("shared", "1");
    assert_eq!(b.get_item("shared").as_deref(), Some("1"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_noop_outside_browser() {
    let store = BrowserStorage;
    store.set_item("k", "v");
    assert_eq!(store.get_item("k"), None);
    store.remove_item("k");
}

#[test]
fn checked_reports_failed_storage_calls() {
    assert!(checked("remove", "portal_auth", Ok::<(), &str>(())));
    assert!(!checked("remove", "portal_auth", Err::<(), _>("SecurityError")));
    assert!(!checked("write", "portal_theme", Err::<(), _>("QuotaExceededError")));
}
