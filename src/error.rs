use core::fmt::{Display, Formatter};

/// A cookie option was given a value outside of its allowed set.
///
/// Returned when text like `"bogus"` is parsed as a [`SameSite`](crate::SameSite).
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct InvalidConfiguration {
    pub msg: String,
}
impl InvalidConfiguration {
    #[must_use]
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
impl Display for InvalidConfiguration {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), core::fmt::Error> {
        write!(f, "invalid cookie configuration: {}", self.msg)
    }
}
impl std::error::Error for InvalidConfiguration {}

/// The transport refused one `Set-Cookie` header.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DispatchError {
    pub msg: String,
}
impl DispatchError {
    #[must_use]
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }

    #[must_use]
    pub fn headers_already_sent() -> Self {
        Self::new("headers already sent")
    }
}
impl Display for DispatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), core::fmt::Error> {
        write!(f, "error dispatching cookie: {}", self.msg)
    }
}
impl std::error::Error for DispatchError {}
impl From<&'_ str> for DispatchError {
    fn from(value: &'_ str) -> Self {
        Self::new(value)
    }
}
impl From<String> for DispatchError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
impl From<std::io::Error> for DispatchError {
    fn from(value: std::io::Error) -> Self {
        Self::new(value.to_string())
    }
}
