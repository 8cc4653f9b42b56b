use std::rc::Rc;

use tenon::{
    driver::Connection as _, share, with_mut, with_ref, ObjectId, Sqlite, Store, TableMapping,
};
use tests::{models::*, raw_connection};

fn pet_store() -> Store {
    tests::init_tracing();

    let mut store = Store::new();
    store.register_class(&PET, TableMapping::Flat).unwrap();
    store.register_class(&TOY, TableMapping::Flat).unwrap();
    store
}

#[test]
fn fetch_after_insert_returns_same_instance() {
    let mut store = pet_store();

    let rex = pet("Rex", 3);
    let oid = store.store_object(&rex).unwrap();
    assert!(oid.is_valid());
    assert_eq!(rex.borrow().object_id(), oid);

    let fetched = store.fetch_object(&PET, oid).unwrap().unwrap();
    assert!(Rc::ptr_eq(&rex, &fetched));
}

#[test]
fn storing_twice_keeps_the_id() {
    let mut store = pet_store();

    let rex = pet("Rex", 3);
    let first = store.store_object(&rex).unwrap();
    let second = store.store_object(&rex).unwrap();
    assert_eq!(first, second);

    let all: Vec<_> = store
        .query(&PET, None)
        .unwrap()
        .collect::<tenon::Result<_>>()
        .unwrap();
    assert_eq!(all.len(), 1);
}

#[test]
fn members_round_trip_through_the_database() {
    let mut store = pet_store();

    let toy = share(Toy {
        label: "Bob's \"squeaky\" ball".to_string(),
        photo: vec![0, 1, 2, 254, 255],
        ..Toy::default()
    });
    let oid = store.store_object(&toy).unwrap();

    // Force a fresh materialization from the row
    store.release_object(&toy).unwrap();
    let fetched = store.fetch_object(&TOY, oid).unwrap().unwrap();
    assert!(!Rc::ptr_eq(&toy, &fetched));

    with_ref::<Toy, _>(&fetched, |fetched| {
        assert_eq!(fetched.label, "Bob's \"squeaky\" ball");
        assert_eq!(fetched.photo, vec![0, 1, 2, 254, 255]);
        assert_eq!(fetched.identity.oid, oid);
    })
    .unwrap();
}

#[test]
fn fetch_missing_id_is_none() {
    let mut store = pet_store();
    store.store_object(&pet("Rex", 3)).unwrap();

    assert!(store.fetch_object(&PET, ObjectId(999)).unwrap().is_none());
}

#[test]
fn update_writes_changed_members() {
    let mut store = pet_store();

    let rex = pet("Rex", 3);
    let oid = store.store_object(&rex).unwrap();

    with_mut::<Pet, _>(&rex, |rex| rex.age = 4).unwrap();
    store.update_object(&rex).unwrap();

    store.release_object(&rex).unwrap();
    let fetched = store.fetch_object(&PET, oid).unwrap().unwrap();
    assert_eq!(with_ref::<Pet, _>(&fetched, |pet| pet.age), Some(4));
}

#[test]
fn update_of_transient_object_is_a_no_op() {
    let mut store = pet_store();

    let rex = pet("Rex", 3);
    store.update_object(&rex).unwrap();
    assert!(!rex.borrow().identity().is_persisted());
}

#[test]
fn remove_detaches_and_deletes() {
    let mut store = pet_store();

    let rex = pet("Rex", 3);
    let oid = store.store_object(&rex).unwrap();
    assert_eq!(store.cached_objects(&PET), 1);

    store.remove_object(&rex).unwrap();
    assert!(!rex.borrow().identity().is_persisted());
    assert_eq!(store.cached_objects(&PET), 0);
    assert!(store.fetch_object(&PET, oid).unwrap().is_none());

    // Removing again is a no-op
    store.remove_object(&rex).unwrap();
}

#[test]
fn removed_object_can_be_stored_again() {
    let mut store = pet_store();

    let rex = pet("Rex", 3);
    store.store_object(&rex).unwrap();
    store.remove_object(&rex).unwrap();

    let oid = store.store_object(&rex).unwrap();
    assert!(oid.is_valid());

    let fetched = store.fetch_object(&PET, oid).unwrap().unwrap();
    assert!(Rc::ptr_eq(&rex, &fetched));
}

#[test]
fn cache_does_not_keep_objects_alive() {
    let mut store = pet_store();

    let kept = pet("Rex", 3);
    store.store_object(&kept).unwrap();
    store.store_object(&pet("Fido", 5)).unwrap();
    assert_eq!(store.cached_objects(&PET), 1);

    assert_eq!(store.release_unreferenced(), 1);
    assert_eq!(store.release_unreferenced(), 0);
    assert_eq!(store.cached_objects(&PET), 1);

    // The dropped object is still in the database
    let names: Vec<_> = store
        .query(&PET, None)
        .unwrap()
        .map(|pet| name_of(&pet.unwrap()))
        .collect();
    assert_eq!(names, ["Rex", "Fido"]);
}

#[test]
fn release_detaches_the_object() {
    let mut store = pet_store();

    let rex = pet("Rex", 3);
    let oid = store.store_object(&rex).unwrap();

    store.release_object(&rex).unwrap();
    assert!(!rex.borrow().object_id().is_valid());
    assert!(!rex.borrow().identity().is_persisted());
    assert_eq!(store.cached_objects(&PET), 0);

    let fetched = store.fetch_object(&PET, oid).unwrap().unwrap();
    assert!(!Rc::ptr_eq(&rex, &fetched));
    assert_eq!(fetched.borrow().object_id(), oid);
    assert_eq!(name_of(&fetched), "Rex");

    // Releasing a detached object is a no-op
    store.release_object(&rex).unwrap();
    assert!(store.fetch_object(&PET, oid).unwrap().is_some());
}

#[test]
fn load_failure_names_the_object() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pets.db");
    tests::init_tracing();

    let mut store = Store::with_driver(Sqlite::open(&path));
    store.register_class(&PET, TableMapping::Flat).unwrap();
    let oid = store.store_object(&pet("Rex", 3)).unwrap();

    raw_connection(&path)
        .execute("UPDATE Pet SET _age='old';")
        .unwrap();

    let Err(err) = store.fetch_object(&PET, oid) else {
        panic!("expected a load error");
    };
    assert_eq!(
        err.to_string(),
        format!("failed to load `Pet` object {oid}: member `age` cannot be converted to i64")
    );

    // The failed instance is not cached
    assert_eq!(store.cached_objects(&PET), 0);
}

#[test]
fn store_of_unregistered_class_fails() {
    let mut store = pet_store();

    let err = store.store_object(&node("a")).unwrap_err();
    assert!(err.is_unknown_class());
}

#[test]
fn explicit_sqlite_driver() {
    tests::init_tracing();

    let mut store = Store::with_driver(Sqlite::in_memory());
    store.register_class(&PET, TableMapping::Default).unwrap();

    let oid = store.store_object(&pet("Rex", 3)).unwrap();
    assert!(store.fetch_object(&PET, oid).unwrap().is_some());
}
