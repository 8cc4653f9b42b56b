use pretty_assertions::assert_eq;

use tenon::{MemberFlags, Store, TableMapping, Value};
use tests::{models::*, raw_connection, Inspect};

fn connected_store() -> Store {
    tests::init_tracing();

    let mut store = Store::new();
    store.register_class(&PET, TableMapping::Flat).unwrap();
    store.connect().unwrap();
    assert!(store.is_connected());
    store
}

#[test]
fn connecting_is_lazy() {
    tests::init_tracing();

    let mut store = Store::new();
    store.register_class(&PET, TableMapping::Flat).unwrap();
    assert!(!store.is_connected());

    store.store_object(&pet("Rex", 3)).unwrap();
    assert!(store.is_connected());
}

#[test]
fn configuration_is_frozen_after_connecting() {
    let mut store = connected_store();

    let err = store.register_class(&DOG, TableMapping::Flat).unwrap_err();
    assert!(err.is_invalid_schema());

    let err = store
        .set_member_flags(&PET, "name", MemberFlags::INDEXED)
        .unwrap_err();
    assert!(err.is_invalid_schema());

    let err = store.set_table_name_prefix("t1_").unwrap_err();
    assert!(err.is_invalid_schema());

    let err = store.set_location("sqlite::memory:").unwrap_err();
    assert!(err.is_already_connected());
}

#[test]
fn table_name_prefix_applies_to_tables_and_views() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pets.db");
    tests::init_tracing();

    let mut store = Store::new();
    store.set_location(&format!("sqlite:{}", path.display())).unwrap();
    store.set_table_name_prefix("t1_").unwrap();
    store.register_class(&PET, TableMapping::Flat).unwrap();
    store.register_class(&TOY, TableMapping::Flat).unwrap();
    store.register_class(&PERSON, TableMapping::Flat).unwrap();
    store.connect().unwrap();

    let mut raw = raw_connection(&path);
    assert!(raw.table_exists("t1_Pet"));
    assert!(raw.table_exists("t1__Person_toys"));
    assert!(raw.view_exists("t1_Pet_v"));
    assert!(!raw.table_exists("Pet"));
}

#[test]
fn indexed_member_gets_an_index() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pets.db");
    tests::init_tracing();

    let mut store = Store::new();
    store.set_location(&format!("sqlite:{}", path.display())).unwrap();
    store.register_class(&PET, TableMapping::Flat).unwrap();
    store.register_class(&DOG, TableMapping::Flat).unwrap();
    store
        .set_member_flags(&DOG, "name", MemberFlags::INDEXED)
        .unwrap();
    store.connect().unwrap();

    // Flags set through a subclass land on the declaring class, and every
    // table holding the column is indexed
    let mut raw = raw_connection(&path);
    let indices = raw.column_values(
        "SELECT name FROM sqlite_master WHERE type='index' AND name LIKE 'idx_%' ORDER BY name;",
    );
    assert_eq!(
        indices,
        [Value::from("idx_Dog_name"), Value::from("idx_Pet_name")]
    );
}

#[test]
fn unknown_member_flag_is_rejected() {
    tests::init_tracing();

    let mut store = Store::new();
    let err = store
        .set_member_flags(&PET, "breed", MemberFlags::INDEXED)
        .unwrap_err();
    assert!(err.is_invalid_schema());
}

#[test]
fn unregistered_referenced_class_fails_to_open() {
    tests::init_tracing();

    let mut store = Store::new();
    store.register_class(&PERSON, TableMapping::Flat).unwrap();

    let err = store.connect().unwrap_err();
    assert!(err.is_invalid_schema());
    assert!(!store.is_connected());

    // The store stays usable once the schema is complete
    store.register_class(&PET, TableMapping::Flat).unwrap();
    store.register_class(&TOY, TableMapping::Flat).unwrap();
    store.connect().unwrap();
}

#[test]
fn different_class_with_the_same_name_is_rejected() {
    static OTHER_PET: tenon::TypeInfo = tenon::TypeInfo {
        name: "Pet",
        parent: None,
        members: &[],
        create: || tenon::share(Pet::default()),
    };

    tests::init_tracing();

    let mut store = Store::new();
    store.register_class(&PET, TableMapping::Flat).unwrap();
    store.register_class(&PET, TableMapping::Linked).unwrap();

    let err = store
        .register_class(&OTHER_PET, TableMapping::Flat)
        .unwrap_err();
    assert!(err.is_invalid_schema());
}

#[test]
fn unsupported_location_scheme() {
    tests::init_tracing();

    let mut store = Store::new();
    store.register_class(&PET, TableMapping::Flat).unwrap();
    store.set_location("mysql://localhost/pets").unwrap();

    let err = store.connect().unwrap_err();
    assert!(err.is_invalid_connection_url());
}

#[test]
fn builder_opens_the_store() {
    tests::init_tracing();

    let mut store = Store::builder()
        .register(&PET, TableMapping::Flat)
        .register(&DOG, TableMapping::Embedded)
        .member_flags(&PET, "name", MemberFlags::INDEXED)
        .location("sqlite::memory:")
        .build()
        .unwrap();
    assert!(store.is_connected());

    let oid = store.store_object(&dog("Rex", "Lab")).unwrap();
    let rex = store.fetch_object(&PET, oid).unwrap().unwrap();
    assert_eq!(class_of(&rex), "Dog");
}

#[test]
fn builder_reports_the_first_configuration_error() {
    tests::init_tracing();

    let err = Store::builder()
        .register(&PET, TableMapping::Flat)
        .member_flags(&PET, "colour", MemberFlags::INDEXED)
        .location("mysql://localhost/pets")
        .build()
        .unwrap_err();
    assert!(err.is_invalid_schema());
}

#[test]
fn builder_with_driver() {
    tests::init_tracing();

    let mut store = Store::builder()
        .register(&TOY, TableMapping::Default)
        .table_name_prefix("app_")
        .build_with_driver(tenon::Sqlite::in_memory())
        .unwrap();

    assert!(store.store_object(&toy("ball")).unwrap().is_valid());
}
