/// A possibly qualified name, e.g. `a._name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(pub Vec<String>);

impl Name {
    pub fn qualified(qualifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self(vec![qualifier.into(), name.into()])
    }

    /// The last segment of the name.
    pub fn base(&self) -> &str {
        self.0.last().map(String::as_str).unwrap_or_default()
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Self(vec![value.to_string()])
    }
}

impl From<String> for Name {
    fn from(value: String) -> Self {
        Self(vec![value])
    }
}

impl From<&String> for Name {
    fn from(value: &String) -> Self {
        Self(vec![value.clone()])
    }
}
