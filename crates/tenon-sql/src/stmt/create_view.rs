use super::*;

#[derive(Debug, Clone)]
pub struct CreateView {
    pub name: Name,

    pub select: Select,
}

impl Statement {
    pub fn create_view(name: impl Into<Name>, select: Select) -> Self {
        CreateView {
            name: name.into(),
            select,
        }
        .into()
    }
}

impl From<CreateView> for Statement {
    fn from(value: CreateView) -> Self {
        Self::CreateView(value)
    }
}
