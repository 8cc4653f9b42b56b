use std::fmt;

/// Identifies a persisted object within the tables of its class.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub i64);

/// Discriminator identifying the concrete class of a persisted object.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub i64);

impl ObjectId {
    pub const INVALID: ObjectId = ObjectId(-1);

    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl ClassId {
    pub const INVALID: ClassId = ClassId(-1);

    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::INVALID
    }
}

impl Default for ClassId {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ObjectId({})", self.0)
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ClassId({})", self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, fmt)
    }
}

/// The persisted identity every object embeds.
///
/// Transient objects carry invalid ids. The engine stamps both ids on the
/// first successful insert or fetch and clears them again when the object is
/// removed or released.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub oid: ObjectId,
    pub cid: ClassId,
}

impl Identity {
    pub fn is_persisted(&self) -> bool {
        self.oid.is_valid()
    }

    pub fn connect(&mut self, cid: ClassId, oid: ObjectId) {
        self.cid = cid;
        self.oid = oid;
    }

    pub fn detach(&mut self) {
        *self = Identity::default();
    }
}
