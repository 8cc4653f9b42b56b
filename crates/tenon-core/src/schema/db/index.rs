#[derive(Debug, Clone, PartialEq)]
pub struct Index {
    /// Index name is unique within the database
    pub name: String,

    /// Name of the table being indexed
    pub on: String,

    /// Name of the indexed column
    pub column: String,
}

impl Index {
    pub fn new(name: impl Into<String>, on: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            on: on.into(),
            column: column.into(),
        }
    }
}
