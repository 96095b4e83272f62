use bijux_portal_core::{checklist_storage_key, AckStore, MemoryAckStore};

#[test]
fn storage_key_is_derived_from_project_id() {
    assert_eq!(checklist_storage_key("PLV-2025-08-24"), "checklist:PLV-2025-08-24");
}

#[test]
fn toggles_are_scoped_per_project_key() {
    let mut store = MemoryAckStore::new();
    let plv = checklist_storage_key("PLV-2025-08-24");
    let sea = checklist_storage_key("SEA-2025-09-02");

    store.set_acknowledged(&plv, 2, true).expect("set");
    store.set_acknowledged(&sea, 0, true).expect("set");

    assert_eq!(store.acknowledged(&plv).expect("read").into_iter().collect::<Vec<_>>(), vec![2]);
    assert_eq!(store.acknowledged(&sea).expect("read").into_iter().collect::<Vec<_>>(), vec![0]);
}

#[test]
fn unset_and_clear_drop_state() {
    let mut store = MemoryAckStore::new();
    let key = checklist_storage_key("PLV-2025-08-24");
    store.set_acknowledged(&key, 1, true).expect("set");
    store.set_acknowledged(&key, 1, false).expect("unset");
    assert!(store.acknowledged(&key).expect("read").is_empty());

    store.set_acknowledged(&key, 0, true).expect("set");
    store.clear(&key).expect("clear");
    assert!(store.acknowledged(&key).expect("read").is_empty());
    assert_eq!(store, MemoryAckStore::new());
}
