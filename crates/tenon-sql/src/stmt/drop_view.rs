use super::*;

#[derive(Debug, Clone)]
pub struct DropView {
    pub name: Name,
}

impl Statement {
    pub fn drop_view(name: impl Into<Name>) -> Self {
        DropView { name: name.into() }.into()
    }
}

impl From<DropView> for Statement {
    fn from(value: DropView) -> Self {
        Self::DropView(value)
    }
}
