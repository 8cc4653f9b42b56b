use super::{Params, ToSql};

use tenon_core::schema::db::Type;

impl ToSql for Type {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        fmt!(
            f,
            match self {
                Type::Integer => "INTEGER",
                Type::Float => "REAL",
                Type::Text => "TEXT",
                Type::Blob => "BLOB",
            }
        );
    }
}
