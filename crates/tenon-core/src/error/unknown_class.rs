use super::Error;

/// Error when an object or type descriptor names a class the store does not know.
#[derive(Debug)]
pub(super) struct UnknownClass {
    class_name: Box<str>,
}

impl std::error::Error for UnknownClass {}

impl core::fmt::Display for UnknownClass {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "class `{}` is not registered with the store",
            self.class_name
        )
    }
}

impl Error {
    /// Creates an unknown class error.
    pub fn unknown_class(class_name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownClass(UnknownClass {
            class_name: class_name.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown class error.
    pub fn is_unknown_class(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownClass(_))
    }
}
