use crate::util::escape_and_elide;
use crate::{Cookie, DispatchError};
use core::fmt::{Debug, Display, Formatter};
use std::ops::Deref;

/// The response layer that receives outgoing cookies.
///
/// The registry calls [`emit_set_cookie`](Transport::emit_set_cookie) once per stored cookie.
pub trait Transport {
    /// Adds one `Set-Cookie` header to the outgoing response.
    ///
    /// # Errors
    /// Returns an error when the header cannot be added, for example because the
    /// response headers were already sent.
    fn emit_set_cookie(&mut self, cookie: &Cookie) -> Result<(), DispatchError>;
}
impl<T: Transport + ?Sized> Transport for &mut T {
    fn emit_set_cookie(&mut self, cookie: &Cookie) -> Result<(), DispatchError> {
        (**self).emit_set_cookie(cookie)
    }
}

/// Adapts a closure into a [`Transport`].
///
/// # Example
/// ```
/// use cookie_registry::{Cookie, CookieOptions, CookieRegistry, DispatchError, FnTransport};
///
/// let mut registry = CookieRegistry::new();
/// registry.set("a", "1", &CookieOptions::new());
/// let mut lines = Vec::new();
/// let report = registry.dispatch_all(FnTransport(
///     |cookie: &Cookie| -> Result<(), DispatchError> {
///         lines.push(cookie.to_set_cookie_header_line());
///         Ok(())
///     },
/// ));
/// assert!(report.is_ok());
/// assert_eq!(lines, vec!["Set-Cookie: a=1; path=/; samesite=lax".to_string()]);
/// ```
pub struct FnTransport<F>(pub F);
impl<F: FnMut(&Cookie) -> Result<(), DispatchError>> Transport for FnTransport<F> {
    fn emit_set_cookie(&mut self, cookie: &Cookie) -> Result<(), DispatchError> {
        (self.0)(cookie)
    }
}

/// One response header.  `Debug` escapes non-printable bytes and elides long values.
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Header {
    pub name: String,
    pub value: String,
}
impl Header {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
impl Debug for Header {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), core::fmt::Error> {
        write!(
            f,
            "Header({}:{})",
            escape_and_elide(self.name.as_bytes(), 30),
            escape_and_elide(self.value.as_bytes(), 1000)
        )
    }
}
impl Display for Header {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), core::fmt::Error> {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// Response headers held in memory until the response is written.
///
/// Implements [`Transport`] by appending `set-cookie` headers.
/// After [`seal`](HeaderList::seal), it rejects new cookies the way a response
/// rejects headers after they are sent.
#[derive(Clone, Default, Eq, PartialEq)]
pub struct HeaderList {
    headers: Vec<Header>,
    sealed: bool,
}
impl HeaderList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header.
    ///
    /// You can call this multiple times to add multiple headers with the same name.
    ///
    /// # Errors
    /// Returns an error after [`seal`](HeaderList::seal) was called.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), DispatchError> {
        if self.sealed {
            return Err(DispatchError::headers_already_sent());
        }
        self.headers.push(Header::new(name, value));
        Ok(())
    }

    /// Marks the headers as sent.
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Searches for a header that matches `name`.
    /// Uses a case-insensitive comparison.
    ///
    /// Returns the value of the header.
    ///
    /// Returns `None` when multiple headers matched or none matched.
    pub fn get_only(&self, name: impl AsRef<str>) -> Option<&str> {
        let mut values = self.get_all(name).into_iter();
        match (values.next(), values.next()) {
            (Some(value), None) => Some(value),
            _ => None,
        }
    }

    /// Looks for headers with names that match `name`.
    /// Uses a case-insensitive comparison.
    /// Returns the values of the matching headers in the order they were added.
    pub fn get_all(&self, name: impl AsRef<str>) -> Vec<&str> {
        self.headers
            .iter()
            .filter(|header| header.name.eq_ignore_ascii_case(name.as_ref()))
            .map(|header| header.value.as_str())
            .collect()
    }

    /// Removes all headers with the specified `name`.
    /// Uses a case-insensitive comparison.
    ///
    /// Returns the values of the headers.
    pub fn remove_all(&mut self, name: impl AsRef<str>) -> Vec<String> {
        let (removed, kept): (Vec<Header>, Vec<Header>) = self
            .headers
            .drain(..)
            .partition(|header| header.name.eq_ignore_ascii_case(name.as_ref()));
        self.headers = kept;
        removed.into_iter().map(|header| header.value).collect()
    }
}
impl Transport for HeaderList {
    fn emit_set_cookie(&mut self, cookie: &Cookie) -> Result<(), DispatchError> {
        self.add("set-cookie", cookie.to_header_value())
    }
}
impl Debug for HeaderList {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), core::fmt::Error> {
        let strings: Vec<String> = self.headers.iter().map(|h| format!("{h:?}")).collect();
        write!(
            f,
            "HeaderList{{{}{}}}",
            strings.join(", "),
            if self.sealed { ", sealed" } else { "" }
        )
    }
}
impl Deref for HeaderList {
    type Target = Vec<Header>;

    fn deref(&self) -> &Self::Target {
        &self.headers
    }
}
impl<'x> IntoIterator for &'x HeaderList {
    type Item = &'x Header;
    type IntoIter = core::slice::Iter<'x, Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.headers.iter()
    }
}

/// The result of handing one cookie to the transport.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DispatchOutcome {
    pub name: String,
    pub path: String,
    pub domain: String,
    pub header_line: String,
    pub result: Result<(), DispatchError>,
}
impl DispatchOutcome {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of [`CookieRegistry::dispatch_all`](crate::CookieRegistry::dispatch_all),
/// in the order the cookies were dispatched.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DispatchReport(pub Vec<DispatchOutcome>);
impl DispatchReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when every cookie was emitted.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.0.iter().all(DispatchOutcome::is_ok)
    }

    pub fn failures(&self) -> impl Iterator<Item = &DispatchOutcome> {
        self.0.iter().filter(|outcome| !outcome.is_ok())
    }

    #[must_use]
    pub fn num_failures(&self) -> usize {
        self.failures().count()
    }

    #[must_use]
    pub fn header_lines(&self) -> Vec<&str> {
        self.0
            .iter()
            .map(|outcome| outcome.header_line.as_str())
            .collect()
    }
}
impl Deref for DispatchReport {
    type Target = Vec<DispatchOutcome>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl<'x> IntoIterator for &'x DispatchReport {
    type Item = &'x DispatchOutcome;
    type IntoIter = core::slice::Iter<'x, DispatchOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
