/// A declared member of a persistent class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberDef {
    pub name: &'static str,
    pub ty: MemberTy,
}

/// The value kind of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberTy {
    Bool,
    Int,
    Float,
    String,
    Blob,

    /// Reference to an object of the named class or one of its subclasses
    Object(&'static str),

    /// Container of objects of the named class or its subclasses
    Container(&'static str),
}

/// How a member is laid out in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    /// One column in the class table
    Primitive,

    /// A class id column plus an object id column
    Object,

    /// No column; one association row per element
    Container,
}

impl MemberDef {
    pub const fn new(name: &'static str, ty: MemberTy) -> Self {
        Self { name, ty }
    }

    pub const fn bool(name: &'static str) -> Self {
        Self::new(name, MemberTy::Bool)
    }

    pub const fn int(name: &'static str) -> Self {
        Self::new(name, MemberTy::Int)
    }

    pub const fn float(name: &'static str) -> Self {
        Self::new(name, MemberTy::Float)
    }

    pub const fn string(name: &'static str) -> Self {
        Self::new(name, MemberTy::String)
    }

    pub const fn blob(name: &'static str) -> Self {
        Self::new(name, MemberTy::Blob)
    }

    pub const fn object(name: &'static str, class_name: &'static str) -> Self {
        Self::new(name, MemberTy::Object(class_name))
    }

    pub const fn container(name: &'static str, class_name: &'static str) -> Self {
        Self::new(name, MemberTy::Container(class_name))
    }

    pub fn storage(&self) -> StorageKind {
        self.ty.storage()
    }

    /// The class referenced by an object or container member.
    pub fn class_name(&self) -> Option<&'static str> {
        match self.ty {
            MemberTy::Object(name) | MemberTy::Container(name) => Some(name),
            _ => None,
        }
    }
}

impl MemberTy {
    pub fn storage(self) -> StorageKind {
        match self {
            MemberTy::Object(_) => StorageKind::Object,
            MemberTy::Container(_) => StorageKind::Container,
            _ => StorageKind::Primitive,
        }
    }
}
