use super::Type;

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Name of the column
    pub name: String,

    /// Storage type
    pub ty: Type,

    /// The column is the table's row id
    pub primary_key: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            primary_key: false,
        }
    }

    pub fn primary_key(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: Type::Integer,
            primary_key: true,
        }
    }
}
