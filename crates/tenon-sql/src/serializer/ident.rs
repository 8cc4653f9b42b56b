use super::{Formatter, Params, ToSql};

/// An identifier, quoted only when it is not a plain word.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let ident = self.0.as_ref();

        if is_plain(ident) {
            f.dst.push_str(ident);
        } else {
            f.dst.push('"');
            f.dst.push_str(&ident.replace('"', "\"\""));
            f.dst.push('"');
        }
    }
}

fn is_plain(ident: &str) -> bool {
    let mut chars = ident.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
