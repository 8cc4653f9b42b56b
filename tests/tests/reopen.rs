use pretty_assertions::assert_eq;
use std::path::Path;

use tenon::{share, with_ref, ObjectId, Sqlite, Store, TableMapping, TypeInfo, Value};
use tests::{models::*, raw_connection, Inspect};

fn open(path: &Path, classes: &[&'static TypeInfo]) -> Store {
    tests::init_tracing();

    let mut store = Store::with_driver(Sqlite::open(path));
    for ty in classes {
        store.register_class(*ty, TableMapping::Default).unwrap();
    }
    store.connect().unwrap();
    store
}

#[test]
fn objects_survive_reopening() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pets.db");

    let (alice, rex) = {
        let mut store = open(&path, &[&PET, &DOG, &TOY, &PERSON]);
        let rex = dog("Rex", "Lab");
        let alice = share(Person {
            name: "Alice".to_string(),
            pet: Some(rex.clone()),
            toys: vec![toy("ball"), toy("rope")],
            ..Person::default()
        });
        let oid = store.store_object(&alice).unwrap();
        let rex_oid = rex.borrow().object_id();
        (oid, rex_oid)
    };

    let mut store = open(&path, &[&PET, &DOG, &TOY, &PERSON]);
    let fetched = store.fetch_object(&PERSON, alice).unwrap().unwrap();

    with_ref::<Person, _>(&fetched, |person| {
        assert_eq!(person.name, "Alice");

        let pet = person.pet.as_ref().unwrap();
        assert_eq!(pet.borrow().object_id(), rex);
        assert_eq!(class_of(pet), "Dog");

        let labels: Vec<_> = person
            .toys
            .iter()
            .map(|toy| member(toy, "label"))
            .collect();
        assert_eq!(labels, ["ball", "rope"].map(Value::from));
    })
    .unwrap();
}

#[test]
fn class_ids_are_stable_across_registration_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pets.db");

    let cids = |path: &Path| {
        raw_connection(path).column_values("SELECT class || ':' || cid FROM _classes ORDER BY class;")
    };

    let oid = {
        let mut store = open(&path, &[&PET, &DOG]);
        store.store_object(&dog("Rex", "Lab")).unwrap()
    };
    let before = cids(&path);

    // Registering more classes, in a different order, assigns new ids only
    // to the new classes
    let mut store = open(&path, &[&CAT, &DOG, &PET]);
    let after = cids(&path);
    assert_eq!(after.len(), 3);
    for cid in &before {
        assert!(after.contains(cid), "{cid:?} changed");
    }

    let rex = store.fetch_object(&PET, oid).unwrap().unwrap();
    assert_eq!(class_of(&rex), "Dog");
    assert_eq!(store.query(&CAT, None).unwrap().count(), 0);
}

#[test]
fn added_member_becomes_a_new_column() {
    static OLD_PET: TypeInfo = TypeInfo {
        name: "Pet",
        parent: None,
        members: &[tenon::MemberDef::string("name")],
        create: || share(Pet::default()),
    };

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pets.db");

    let oid = {
        let mut store = open(&path, &[&OLD_PET]);
        store.store_object(&pet("Rex", 3)).unwrap()
    };
    assert!(!raw_connection(&path).column_exists("Pet", "_age"));

    let mut store = open(&path, &[&PET]);
    assert!(raw_connection(&path).column_exists("Pet", "_age"));

    // Rows written before the column existed read it as NULL
    let rex = store.fetch_object(&PET, oid).unwrap().unwrap();
    with_ref::<Pet, _>(&rex, |pet| {
        assert_eq!(pet.name, "Rex");
        assert_eq!(pet.age, 0);
    })
    .unwrap();

    let tom = store.store_object(&pet("Tom", 2)).unwrap();
    store.release_unreferenced();
    let tom = store.fetch_object(&PET, tom).unwrap().unwrap();
    assert_eq!(member(&tom, "age"), Value::from(2));
}

#[test]
fn missing_database_file_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh.db");
    assert!(!path.exists());

    let mut store = open(&path, &[&PET]);
    assert!(path.exists());
    assert!(store.fetch_object(&PET, ObjectId(1)).unwrap().is_none());
}
