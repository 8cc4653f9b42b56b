use super::{Formatter, Params, ToSql};

use crate::stmt::Value;

use std::fmt::Write;

/// A value rendered inline as a SQL literal.
pub(super) struct Literal<'a>(pub(super) &'a Value);

impl ToSql for Literal<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self.0 {
            Value::Null => f.dst.push_str("NULL"),
            Value::Bool(true) => f.dst.push('1'),
            Value::Bool(false) => f.dst.push('0'),
            Value::I64(v) => {
                let _ = write!(f.dst, "{v}");
            }
            Value::F64(v) => float(*v, f.dst),
            Value::String(v) => string(v, f.dst),
            Value::Bytes(v) => {
                f.dst.push_str("X'");
                for byte in v {
                    let _ = write!(f.dst, "{byte:02X}");
                }
                f.dst.push('\'');
            }
        }
    }
}

/// Fixed notation, always carrying a decimal point so the literal keeps its
/// real affinity. Non-finite values have no literal form and render as NULL.
fn float(v: f64, dst: &mut String) {
    if !v.is_finite() {
        dst.push_str("NULL");
        return;
    }

    let start = dst.len();
    let _ = write!(dst, "{v}");

    if !dst[start..].contains('.') {
        dst.push_str(".0");
    }
}

fn string(v: &str, dst: &mut String) {
    dst.push('\'');
    dst.push_str(&v.replace('\'', "''"));
    dst.push('\'');
}
