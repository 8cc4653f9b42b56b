use super::ObjectRef;
use crate::{stmt::Value, Error, Result};

use std::fmt;

/// One member slot of an [`ObjectState`].
#[derive(Clone)]
pub enum Field {
    /// Primitive, string or blob member
    Value(Value),

    /// Reference to another persistent object
    Object(Option<ObjectRef>),

    /// Container of persistent objects
    Container(Vec<ObjectRef>),
}

/// Transient holder for the member values of one object.
///
/// Slots are named after the mapped members of the object's class. Writing a
/// name the class does not map is silently ignored and reading one yields
/// `NULL`, so objects can export members of their whole hierarchy without
/// knowing which of them are persisted.
#[derive(Debug, Clone)]
pub struct ObjectState {
    names: Vec<&'static str>,
    slots: Vec<Field>,
}

static NULL: Value = Value::Null;

impl ObjectState {
    pub fn new(names: impl IntoIterator<Item = &'static str>) -> Self {
        let names: Vec<_> = names.into_iter().collect();
        let slots = vec![Field::default(); names.len()];
        Self { names, slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    pub fn at(&self, index: usize) -> &Field {
        &self.slots[index]
    }

    pub fn at_mut(&mut self, index: usize) -> &mut Field {
        &mut self.slots[index]
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| *n == name)
    }

    fn slot(&self, name: &str) -> Option<&Field> {
        self.position(name).map(|index| &self.slots[index])
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.position(name).map(|index| &mut self.slots[index])
    }

    pub fn set(&mut self, name: &str, value: impl Into<Value>) {
        if let Some(slot) = self.slot_mut(name) {
            *slot = Field::Value(value.into());
        }
    }

    pub fn get(&self, name: &str) -> &Value {
        match self.slot(name) {
            Some(Field::Value(value)) => value,
            _ => &NULL,
        }
    }

    pub fn set_object(&mut self, name: &str, object: Option<ObjectRef>) {
        if let Some(slot) = self.slot_mut(name) {
            *slot = Field::Object(object);
        }
    }

    pub fn object(&self, name: &str) -> Option<ObjectRef> {
        match self.slot(name) {
            Some(Field::Object(object)) => object.clone(),
            _ => None,
        }
    }

    pub fn set_container(&mut self, name: &str, elements: impl IntoIterator<Item = ObjectRef>) {
        if let Some(slot) = self.slot_mut(name) {
            *slot = Field::Container(elements.into_iter().collect());
        }
    }

    pub fn container(&self, name: &str) -> &[ObjectRef] {
        match self.slot(name) {
            Some(Field::Container(elements)) => elements,
            _ => &[],
        }
    }

    /// Reads a string member; `NULL` reads as the empty string.
    pub fn string(&self, name: &str) -> Result<String> {
        match self.get(name) {
            Value::Null => Ok(String::new()),
            Value::String(value) => Ok(value.clone()),
            _ => Err(Error::type_conversion(name, "string")),
        }
    }

    /// Reads an integer member; `NULL` reads as zero.
    pub fn i64(&self, name: &str) -> Result<i64> {
        match self.get(name) {
            Value::Null => Ok(0),
            value => value
                .as_i64()
                .ok_or_else(|| Error::type_conversion(name, "i64")),
        }
    }

    /// Reads a float member; `NULL` reads as zero.
    pub fn f64(&self, name: &str) -> Result<f64> {
        match self.get(name) {
            Value::Null => Ok(0.0),
            value => value
                .as_f64()
                .ok_or_else(|| Error::type_conversion(name, "f64")),
        }
    }

    pub fn bool(&self, name: &str) -> Result<bool> {
        match self.get(name) {
            Value::Null => Ok(false),
            value => value
                .as_bool()
                .ok_or_else(|| Error::type_conversion(name, "bool")),
        }
    }

    /// Reads a blob member; `NULL` reads as an empty blob.
    pub fn bytes(&self, name: &str) -> Result<Vec<u8>> {
        match self.get(name) {
            Value::Null => Ok(vec![]),
            Value::Bytes(value) => Ok(value.clone()),
            _ => Err(Error::type_conversion(name, "bytes")),
        }
    }
}

impl Default for Field {
    fn default() -> Self {
        Field::Value(Value::Null)
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn oid(object: &ObjectRef) -> super::ObjectId {
            object.borrow().object_id()
        }

        match self {
            Field::Value(value) => fmt::Debug::fmt(value, f),
            Field::Object(None) => f.write_str("Object(None)"),
            Field::Object(Some(object)) => write!(f, "Object({:?})", oid(object)),
            Field::Container(elements) => f
                .debug_tuple("Container")
                .field(&elements.iter().map(oid).collect::<Vec<_>>())
                .finish(),
        }
    }
}
