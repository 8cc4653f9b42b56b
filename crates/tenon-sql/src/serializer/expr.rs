use super::{Comma, Formatter, Literal, Params, ToSql};

use crate::stmt::{self, BinaryOp, Expr, Operand, Value};

/// Maps member names to the column expressions of one class.
pub trait ResolveColumn {
    /// Returns `None` when the class does not map `member`.
    fn resolve_column(&self, member: &str) -> Option<String>;
}

impl<F> ResolveColumn for F
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve_column(&self, member: &str) -> Option<String> {
        self(member)
    }
}

/// Binding strength of an expression node. A node is bracketed only when it
/// binds weaker than the context it is compiled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum Priority {
    Or = 0,
    And = 1,
    Compare = 2,
}

/// Rendered for a comparison on a member the class does not map, and for an
/// empty conjunction.
const ALWAYS_TRUE: &str = "1=1";

/// Rendered for an empty disjunction.
const ALWAYS_FALSE: &str = "0=1";

pub(super) struct ExprCompiler<'a, P> {
    pub(super) f: Formatter<'a, P>,

    pub(super) columns: &'a dyn ResolveColumn,

    /// Priority of the enclosing node
    pub(super) outer: Priority,
}

impl<P: Params> ExprCompiler<'_, P> {
    pub(super) fn compile(&mut self, expr: &Expr) {
        match expr {
            Expr::And(expr) if expr.operands.is_empty() => self.f.dst.push_str(ALWAYS_TRUE),
            Expr::And(expr) => self.compound(Priority::And, " AND ", &expr.operands),
            Expr::Or(expr) if expr.operands.is_empty() => self.f.dst.push_str(ALWAYS_FALSE),
            Expr::Or(expr) => self.compound(Priority::Or, " OR ", &expr.operands),
            Expr::Not(expr) => {
                self.f.dst.push_str("NOT ");
                let outer = std::mem::replace(&mut self.outer, Priority::Compare);
                self.compile(&expr.expr);
                self.outer = outer;
            }
            Expr::BinaryOp(expr) => {
                let Some(column) = self.column(&expr.member) else {
                    return;
                };

                match (&expr.rhs, expr.op) {
                    (Operand::Value(Value::Null), BinaryOp::Eq) => {
                        fmt!(&mut self.f, &column " IS NULL")
                    }
                    (Operand::Value(Value::Null), BinaryOp::Ne) => {
                        fmt!(&mut self.f, &column " IS NOT NULL")
                    }
                    (rhs, op) => {
                        fmt!(&mut self.f, &column op);
                        self.operand(rhs);
                    }
                }
            }
            Expr::Like(expr) => {
                let Some(column) = self.column(&expr.member) else {
                    return;
                };

                fmt!(&mut self.f, &column " LIKE ");
                self.operand(&expr.pattern);
            }
            Expr::Contains(expr) => {
                let Some(column) = self.column(&expr.member) else {
                    return;
                };

                fmt!(&mut self.f, &column " LIKE ");

                match &expr.substring {
                    Operand::Value(Value::String(substring)) => {
                        let pattern = Value::String(format!("%{substring}%"));
                        fmt!(&mut self.f, Literal(&pattern));
                    }
                    substring => {
                        fmt!(&mut self.f, "'%'||");
                        self.operand(substring);
                        fmt!(&mut self.f, "||'%'");
                    }
                }
            }
            Expr::InList(expr) => {
                let Some(column) = self.column(&expr.member) else {
                    return;
                };

                let list = Comma(expr.list.iter().map(Literal));
                fmt!(&mut self.f, &column " IN (" list ")");
            }
        }
    }

    fn compound(&mut self, priority: Priority, separator: &str, operands: &[Expr]) {
        let bracket = priority < self.outer;

        if bracket {
            self.f.dst.push('(');
        }

        let outer = std::mem::replace(&mut self.outer, priority);

        for (i, operand) in operands.iter().enumerate() {
            if i > 0 {
                self.f.dst.push_str(separator);
            }
            self.compile(operand);
        }

        self.outer = outer;

        if bracket {
            self.f.dst.push(')');
        }
    }

    /// Resolves `member`, writing the always-true literal when it is unmapped.
    fn column(&mut self, member: &str) -> Option<String> {
        let column = self.columns.resolve_column(member);

        if column.is_none() {
            self.f.dst.push_str(ALWAYS_TRUE);
        }

        column
    }

    fn operand(&mut self, operand: &Operand) {
        match operand {
            Operand::Value(value) => fmt!(&mut self.f, Literal(value)),
            Operand::Arg(arg) => {
                let placeholder = self.f.params.push(*arg);
                fmt!(&mut self.f, placeholder);
            }
        }
    }
}

impl ToSql for BinaryOp {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push_str(match self {
            stmt::BinaryOp::Eq => "=",
            stmt::BinaryOp::Ne => "<>",
            stmt::BinaryOp::Gt => ">",
            stmt::BinaryOp::Ge => ">=",
            stmt::BinaryOp::Lt => "<",
            stmt::BinaryOp::Le => "<=",
        })
    }
}
