use super::MemberDef;
use crate::object::ObjectRef;

use std::fmt;

/// Class metadata for a persistent type.
///
/// Type descriptors are usually `static` items, so they can reference their
/// parent by address:
///
/// ```
/// # use tenon_core::{schema::app::{MemberDef, TypeInfo}, ObjectRef};
/// # fn create() -> ObjectRef { unimplemented!() }
/// static PET: TypeInfo = TypeInfo {
///     name: "Pet",
///     parent: None,
///     members: &[MemberDef::string("name")],
///     create,
/// };
///
/// static DOG: TypeInfo = TypeInfo {
///     name: "Dog",
///     parent: Some(&PET),
///     members: &[MemberDef::string("breed")],
///     create,
/// };
///
/// assert!(DOG.is_a(&PET));
/// ```
pub struct TypeInfo {
    pub name: &'static str,

    pub parent: Option<&'static TypeInfo>,

    /// Members declared by this class, not including inherited ones
    pub members: &'static [MemberDef],

    /// Creates a blank, transient instance
    pub create: fn() -> ObjectRef,
}

impl TypeInfo {
    pub fn class_name(&self) -> &'static str {
        self.name
    }

    pub fn parent_type(&self) -> Option<&'static TypeInfo> {
        self.parent
    }

    pub fn create_instance(&self) -> ObjectRef {
        (self.create)()
    }

    /// Iterates over this type and its ancestors, nearest first.
    pub fn ancestry(&'static self) -> impl Iterator<Item = &'static TypeInfo> {
        std::iter::successors(Some(self), |ty| ty.parent)
    }

    pub fn is_a(&'static self, other: &TypeInfo) -> bool {
        self.ancestry().any(|ty| ty.name == other.name)
    }
}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("name", &self.name)
            .field("parent", &self.parent.map(|parent| parent.name))
            .field("members", &self.members)
            .finish()
    }
}
