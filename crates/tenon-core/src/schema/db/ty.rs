use crate::schema::app::MemberTy;

/// Storage type of a column.
///
/// Drivers render these into their own type names when creating tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Integer,
    Float,
    Text,
    Blob,
}

impl Type {
    /// The storage type backing a primitive member. Object references are
    /// stored as a pair of integer columns; containers have no column.
    pub fn from_member(ty: MemberTy) -> Option<Self> {
        match ty {
            MemberTy::Bool | MemberTy::Int => Some(Self::Integer),
            MemberTy::Float => Some(Self::Float),
            MemberTy::String => Some(Self::Text),
            MemberTy::Blob => Some(Self::Blob),
            MemberTy::Object(_) => Some(Self::Integer),
            MemberTy::Container(_) => None,
        }
    }
}
