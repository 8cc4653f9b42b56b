#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited, Period};

mod expr;
pub use expr::ResolveColumn;
use expr::{ExprCompiler, Priority};

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod name;
mod statement;
mod ty;
mod value;
use value::Literal;

use crate::stmt::{Expr, ExprArg, Statement, Value};

/// Serialize a statement to a SQL string
#[derive(Debug, Default, Clone, Copy)]
pub struct Serializer {
    _p: (),
}

struct Formatter<'a, T> {
    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    pub fn sqlite() -> Self {
        Self { _p: () }
    }

    /// Serializes a schema or data statement. Statements carry no late-bound
    /// arguments; every parameter is a positional `?` bound by the caller.
    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();
        let mut params: Vec<ExprArg> = vec![];

        let mut fmt = Formatter {
            dst: &mut ret,
            params: &mut params,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        ret
    }

    /// Compiles a member filter into condition text, resolving member names
    /// through `columns`.
    ///
    /// Late-bound arguments render as `?` and are recorded in `params` in
    /// the order their placeholders appear in the text.
    pub fn compile<P: Params>(
        &self,
        expr: &Expr,
        columns: &dyn ResolveColumn,
        params: &mut P,
    ) -> String {
        let mut ret = String::new();

        let mut compiler = ExprCompiler {
            f: Formatter {
                dst: &mut ret,
                params,
            },
            columns,
            outer: Priority::Or,
        };

        compiler.compile(expr);
        ret
    }

    /// Renders `value` as a literal.
    pub fn literal(&self, value: &Value) -> String {
        let mut ret = String::new();
        let mut params: Vec<ExprArg> = vec![];

        let mut fmt = Formatter {
            dst: &mut ret,
            params: &mut params,
        };

        Literal(value).to_sql(&mut fmt);
        ret
    }
}
