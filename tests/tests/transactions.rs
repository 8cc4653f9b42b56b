use tenon::{Sqlite, Store, TableMapping};
use tests::{models::*, OpKind};

#[test]
fn nested_transactions_reach_the_driver_once() {
    let (mut store, mut log) = tests::logging_store(Sqlite::in_memory());
    store.register_class(&PET, TableMapping::Flat).unwrap();
    store.connect().unwrap();
    log.clear();

    store.begin_transaction().unwrap();
    store.begin_transaction().unwrap();
    assert_eq!(store.transaction_depth(), 2);

    store.store_object(&pet("Rex", 3)).unwrap();
    store.commit_transaction().unwrap();
    assert_eq!(store.transaction_depth(), 1);
    assert_eq!(log.count_kind(OpKind::CommitTransaction), 0);

    store.store_object(&pet("Fido", 5)).unwrap();
    store.commit_transaction().unwrap();
    assert_eq!(store.transaction_depth(), 0);

    assert_eq!(log.count_kind(OpKind::BeginTransaction), 1);
    assert_eq!(log.count_kind(OpKind::CommitTransaction), 1);

    let names: Vec<_> = store
        .query(&PET, None)
        .unwrap()
        .map(|pet| name_of(&pet.unwrap()))
        .collect();
    assert_eq!(names, ["Rex", "Fido"]);
}

#[test]
fn commit_without_begin_is_an_error() {
    tests::init_tracing();

    let mut store = Store::new();
    store.register_class(&PET, TableMapping::Flat).unwrap();

    assert!(store.commit_transaction().is_err());
    assert_eq!(store.transaction_depth(), 0);

    store.begin_transaction().unwrap();
    store.commit_transaction().unwrap();
    assert!(store.commit_transaction().is_err());
}

#[test]
fn committed_writes_are_durable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pets.db");
    tests::init_tracing();

    let oid = {
        let mut store = Store::with_driver(Sqlite::open(&path));
        store.register_class(&PET, TableMapping::Flat).unwrap();

        store.begin_transaction().unwrap();
        let oid = store.store_object(&pet("Rex", 3)).unwrap();
        store.commit_transaction().unwrap();
        oid
    };

    let mut store = Store::with_driver(Sqlite::open(&path));
    store.register_class(&PET, TableMapping::Flat).unwrap();
    let rex = store.fetch_object(&PET, oid).unwrap().unwrap();
    assert_eq!(name_of(&rex), "Rex");
}
