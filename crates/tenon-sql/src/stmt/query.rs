use super::*;

/// One or more selects combined with `UNION`.
#[derive(Debug, Clone)]
pub struct Query {
    pub body: Vec<Select>,

    /// Sort by this output column
    pub order_by: Option<Name>,
}

#[derive(Debug, Clone)]
pub struct Select {
    pub distinct: bool,

    pub columns: Vec<SelectColumn>,

    pub from: TableRef,

    pub joins: Vec<Join>,

    pub filter: Option<Condition>,
}

#[derive(Debug, Clone)]
pub struct SelectColumn {
    pub expr: Name,

    pub alias: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TableRef {
    pub name: Name,

    pub alias: Option<String>,
}

/// `JOIN table ON lhs=rhs`
#[derive(Debug, Clone)]
pub struct Join {
    pub table: TableRef,

    pub on: Condition,
}

impl Select {
    pub fn from_table(table: impl Into<TableRef>) -> Self {
        Self {
            distinct: false,
            columns: vec![],
            from: table.into(),
            joins: vec![],
            filter: None,
        }
    }

    pub fn column(mut self, expr: impl Into<Name>) -> Self {
        self.columns.push(SelectColumn {
            expr: expr.into(),
            alias: None,
        });
        self
    }

    pub fn column_as(mut self, expr: impl Into<Name>, alias: impl Into<String>) -> Self {
        self.columns.push(SelectColumn {
            expr: expr.into(),
            alias: Some(alias.into()),
        });
        self
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn join(mut self, table: impl Into<TableRef>, on: Condition) -> Self {
        self.joins.push(Join {
            table: table.into(),
            on,
        });
        self
    }

    /// Adds `condition` to the `WHERE` clause.
    pub fn filter(mut self, condition: Condition) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(filter) => filter.and(condition),
            None => condition,
        });
        self
    }
}

impl TableRef {
    pub fn aliased(name: impl Into<Name>, alias: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: Some(alias.into()),
        }
    }
}

impl From<Name> for TableRef {
    fn from(value: Name) -> Self {
        Self {
            name: value,
            alias: None,
        }
    }
}

impl From<&str> for TableRef {
    fn from(value: &str) -> Self {
        Name::from(value).into()
    }
}

impl From<String> for TableRef {
    fn from(value: String) -> Self {
        Name::from(value).into()
    }
}

impl From<&String> for TableRef {
    fn from(value: &String) -> Self {
        Name::from(value).into()
    }
}

impl Statement {
    pub fn query(select: Select) -> Self {
        Query {
            body: vec![select],
            order_by: None,
        }
        .into()
    }

    /// Unions `selects`, ordered by the output column `order_by`.
    pub fn union(selects: Vec<Select>, order_by: Option<Name>) -> Self {
        Query {
            body: selects,
            order_by,
        }
        .into()
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::query(value)
    }
}

impl From<Query> for Statement {
    fn from(value: Query) -> Self {
        Self::Query(value)
    }
}
