use super::Error;

/// Error when a state slot holds a value of a different kind than requested.
#[derive(Debug)]
pub(super) struct TypeConversionError {
    member: Box<str>,
    expected: &'static str,
}

impl std::error::Error for TypeConversionError {}

impl core::fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "member `{}` cannot be converted to {}",
            self.member, self.expected
        )
    }
}

impl Error {
    /// Creates a type conversion error for the named member.
    pub fn type_conversion(member: impl Into<String>, expected: &'static str) -> Error {
        Error::from(super::ErrorKind::TypeConversion(TypeConversionError {
            member: member.into().into(),
            expected,
        }))
    }

    /// Returns `true` if this error is a type conversion error.
    pub fn is_type_conversion(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeConversion(_))
    }
}
