//! Sample classes shared by the integration tests.
//!
//! ```text
//! Pet ─┬─ Dog ── Puppy      Person ──> Pet, [Toy]
//!      └─ Cat               Node ──> Node
//! Kennel ── Ward            Kennel ──> [Pet]
//! ```

use tenon::{share, Identity, MemberDef, ObjectRef, ObjectState, Result, TypeInfo, Value};

/// Member export and import, written once per class.
pub trait Members {
    fn store(&self, state: &mut ObjectState);

    fn restore(&mut self, state: &ObjectState) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct Pet {
    pub identity: Identity,
    pub name: String,
    pub age: i64,
}

pub static PET: TypeInfo = TypeInfo {
    name: "Pet",
    parent: None,
    members: &[MemberDef::string("name"), MemberDef::int("age")],
    create: || share(Pet::default()),
};

persistent!(Pet, PET);

impl Members for Pet {
    fn store(&self, state: &mut ObjectState) {
        state.set("name", self.name.as_str());
        state.set("age", self.age);
    }

    fn restore(&mut self, state: &ObjectState) -> Result<()> {
        self.name = state.string("name")?;
        self.age = state.i64("age")?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct Dog {
    pub identity: Identity,
    pub name: String,
    pub age: i64,
    pub breed: String,
    pub trained: bool,
}

pub static DOG: TypeInfo = TypeInfo {
    name: "Dog",
    parent: Some(&PET),
    members: &[MemberDef::string("breed"), MemberDef::bool("trained")],
    create: || share(Dog::default()),
};

persistent!(Dog, DOG);

impl Members for Dog {
    fn store(&self, state: &mut ObjectState) {
        state.set("name", self.name.as_str());
        state.set("age", self.age);
        state.set("breed", self.breed.as_str());
        state.set("trained", self.trained);
    }

    fn restore(&mut self, state: &ObjectState) -> Result<()> {
        self.name = state.string("name")?;
        self.age = state.i64("age")?;
        self.breed = state.string("breed")?;
        self.trained = state.bool("trained")?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct Puppy {
    pub identity: Identity,
    pub name: String,
    pub age: i64,
    pub breed: String,
    pub trained: bool,
    pub weight: f64,
}

pub static PUPPY: TypeInfo = TypeInfo {
    name: "Puppy",
    parent: Some(&DOG),
    members: &[MemberDef::float("weight")],
    create: || share(Puppy::default()),
};

persistent!(Puppy, PUPPY);

impl Members for Puppy {
    fn store(&self, state: &mut ObjectState) {
        state.set("name", self.name.as_str());
        state.set("age", self.age);
        state.set("breed", self.breed.as_str());
        state.set("trained", self.trained);
        state.set("weight", self.weight);
    }

    fn restore(&mut self, state: &ObjectState) -> Result<()> {
        self.name = state.string("name")?;
        self.age = state.i64("age")?;
        self.breed = state.string("breed")?;
        self.trained = state.bool("trained")?;
        self.weight = state.f64("weight")?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct Cat {
    pub identity: Identity,
    pub name: String,
    pub age: i64,
    pub lives: i64,
}

pub static CAT: TypeInfo = TypeInfo {
    name: "Cat",
    parent: Some(&PET),
    members: &[MemberDef::int("lives")],
    create: || share(Cat::default()),
};

persistent!(Cat, CAT);

impl Members for Cat {
    fn store(&self, state: &mut ObjectState) {
        state.set("name", self.name.as_str());
        state.set("age", self.age);
        state.set("lives", self.lives);
    }

    fn restore(&mut self, state: &ObjectState) -> Result<()> {
        self.name = state.string("name")?;
        self.age = state.i64("age")?;
        self.lives = state.i64("lives")?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct Toy {
    pub identity: Identity,
    pub label: String,
    pub photo: Vec<u8>,
}

pub static TOY: TypeInfo = TypeInfo {
    name: "Toy",
    parent: None,
    members: &[MemberDef::string("label"), MemberDef::blob("photo")],
    create: || share(Toy::default()),
};

persistent!(Toy, TOY);

impl Members for Toy {
    fn store(&self, state: &mut ObjectState) {
        state.set("label", self.label.as_str());
        state.set("photo", self.photo.clone());
    }

    fn restore(&mut self, state: &ObjectState) -> Result<()> {
        self.label = state.string("label")?;
        self.photo = state.bytes("photo")?;
        Ok(())
    }
}

#[derive(Default)]
pub struct Person {
    pub identity: Identity,
    pub name: String,
    pub pet: Option<ObjectRef>,
    pub toys: Vec<ObjectRef>,
}

pub static PERSON: TypeInfo = TypeInfo {
    name: "Person",
    parent: None,
    members: &[
        MemberDef::string("name"),
        MemberDef::object("pet", "Pet"),
        MemberDef::container("toys", "Toy"),
    ],
    create: || share(Person::default()),
};

persistent!(Person, PERSON);

impl Members for Person {
    fn store(&self, state: &mut ObjectState) {
        state.set("name", self.name.as_str());
        state.set_object("pet", self.pet.clone());
        state.set_container("toys", self.toys.iter().cloned());
    }

    fn restore(&mut self, state: &ObjectState) -> Result<()> {
        self.name = state.string("name")?;
        self.pet = state.object("pet");
        self.toys = state.container("toys").to_vec();
        Ok(())
    }
}

/// A linked list cell; `next` may point back into the list.
#[derive(Default)]
pub struct Node {
    pub identity: Identity,
    pub name: String,
    pub next: Option<ObjectRef>,
}

pub static NODE: TypeInfo = TypeInfo {
    name: "Node",
    parent: None,
    members: &[MemberDef::string("name"), MemberDef::object("next", "Node")],
    create: || share(Node::default()),
};

persistent!(Node, NODE);

impl Members for Node {
    fn store(&self, state: &mut ObjectState) {
        state.set("name", self.name.as_str());
        state.set_object("next", self.next.clone());
    }

    fn restore(&mut self, state: &ObjectState) -> Result<()> {
        self.name = state.string("name")?;
        self.next = state.object("next");
        Ok(())
    }
}

#[derive(Default)]
pub struct Kennel {
    pub identity: Identity,
    pub name: String,
    pub pets: Vec<ObjectRef>,
}

pub static KENNEL: TypeInfo = TypeInfo {
    name: "Kennel",
    parent: None,
    members: &[MemberDef::string("name"), MemberDef::container("pets", "Pet")],
    create: || share(Kennel::default()),
};

persistent!(Kennel, KENNEL);

impl Members for Kennel {
    fn store(&self, state: &mut ObjectState) {
        state.set("name", self.name.as_str());
        state.set_container("pets", self.pets.iter().cloned());
    }

    fn restore(&mut self, state: &ObjectState) -> Result<()> {
        self.name = state.string("name")?;
        self.pets = state.container("pets").to_vec();
        Ok(())
    }
}

/// A kennel whose only own member is a container.
#[derive(Default)]
pub struct Ward {
    pub identity: Identity,
    pub name: String,
    pub pets: Vec<ObjectRef>,
    pub patients: Vec<ObjectRef>,
}

pub static WARD: TypeInfo = TypeInfo {
    name: "Ward",
    parent: Some(&KENNEL),
    members: &[MemberDef::container("patients", "Pet")],
    create: || share(Ward::default()),
};

persistent!(Ward, WARD);

impl Members for Ward {
    fn store(&self, state: &mut ObjectState) {
        state.set("name", self.name.as_str());
        state.set_container("pets", self.pets.iter().cloned());
        state.set_container("patients", self.patients.iter().cloned());
    }

    fn restore(&mut self, state: &ObjectState) -> Result<()> {
        self.name = state.string("name")?;
        self.pets = state.container("pets").to_vec();
        self.patients = state.container("patients").to_vec();
        Ok(())
    }
}

pub fn pet(name: &str, age: i64) -> ObjectRef {
    share(Pet {
        name: name.to_string(),
        age,
        ..Pet::default()
    })
}

pub fn dog(name: &str, breed: &str) -> ObjectRef {
    share(Dog {
        name: name.to_string(),
        breed: breed.to_string(),
        ..Dog::default()
    })
}

pub fn cat(name: &str, lives: i64) -> ObjectRef {
    share(Cat {
        name: name.to_string(),
        lives,
        ..Cat::default()
    })
}

pub fn puppy(name: &str, weight: f64) -> ObjectRef {
    share(Puppy {
        name: name.to_string(),
        breed: "Mixed".to_string(),
        weight,
        ..Puppy::default()
    })
}

pub fn toy(label: &str) -> ObjectRef {
    share(Toy {
        label: label.to_string(),
        ..Toy::default()
    })
}

pub fn node(name: &str) -> ObjectRef {
    share(Node {
        name: name.to_string(),
        ..Node::default()
    })
}

/// Reads one member of any object through its export contract.
pub fn member(object: &ObjectRef, name: &'static str) -> Value {
    let mut state = ObjectState::new([name]);
    object.borrow().store_members(&mut state);
    state.get(name).clone()
}

/// The `name` member as a string.
pub fn name_of(object: &ObjectRef) -> String {
    match member(object, "name") {
        Value::String(name) => name,
        value => panic!("`name` is not a string: {value:?}"),
    }
}

pub fn class_of(object: &ObjectRef) -> &'static str {
    object.borrow().type_info().name
}
