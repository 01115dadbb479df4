use crate::log::{debug, error, tag};
use crate::{
    Cookie, CookieDefaults, CookieId, CookieOptions, DispatchOutcome, DispatchReport, Transport,
};

/// Expiry time given to deleted cookies: `Thu, 01 Jan 1970 00:00:00 GMT`.
pub const DELETED_EXPIRES: i64 = 0;

/// Collects the cookies to send on one response.
///
/// Cookies are kept in insertion order.  Setting a cookie with the same name, path,
/// and domain as a stored one replaces it in place.
///
/// Make one registry per request.  The registry does no locking.
///
/// # Example
/// ```
/// use cookie_registry::{CookieOptions, CookieRegistry, HeaderList};
///
/// let mut registry = CookieRegistry::new();
/// registry.set("session", "abc", &CookieOptions::new().with_http_only(true));
/// registry.delete("theme", &CookieOptions::new());
///
/// let mut headers = HeaderList::new();
/// let report = registry.dispatch_all(&mut headers);
/// assert!(report.is_ok());
/// assert_eq!(
///     headers.get_all("set-cookie"),
///     vec![
///         "session=abc; path=/; httponly; samesite=lax",
///         "theme=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/; samesite=lax",
///     ]
/// );
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CookieRegistry {
    defaults: CookieDefaults,
    entries: Vec<(CookieId, Cookie)>,
}
impl CookieRegistry {
    /// Makes an empty registry that uses [`CookieDefaults::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_defaults(CookieDefaults::default())
    }

    #[must_use]
    pub fn with_defaults(defaults: CookieDefaults) -> Self {
        Self {
            defaults,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn defaults(&self) -> &CookieDefaults {
        &self.defaults
    }

    /// Stores a cookie made from `options` over this registry's defaults.
    ///
    /// Replaces any stored cookie with the same name, path, and domain,
    /// keeping its position.
    pub fn set(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        options: &CookieOptions,
    ) {
        let cookie = Cookie::with_defaults(name, value, options, &self.defaults);
        self.insert(cookie);
    }

    /// Stores `cookie` as-is, ignoring this registry's defaults.
    pub fn insert(&mut self, cookie: Cookie) {
        let id = cookie.id();
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| *key == id) {
            entry.1 = cookie;
        } else {
            self.entries.push((id, cookie));
        }
    }

    /// Stores an empty cookie that expired at the Unix epoch, telling the client to
    /// remove its cookie.  The entry stays in the registry so it gets dispatched.
    ///
    /// Any expiry time in `options` is replaced.
    pub fn delete(&mut self, name: impl Into<String>, options: &CookieOptions) {
        let options = options.clone().with_expires(DELETED_EXPIRES);
        self.set(name, "", &options);
    }

    /// Returns the first stored cookie named `name`, in insertion order.
    /// Does not look at path or domain.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Cookie> {
        self.iter().find(|cookie| cookie.name() == name)
    }

    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the stored cookies in insertion order.
    #[must_use]
    pub fn all(&self) -> Vec<&Cookie> {
        self.iter().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cookie> {
        self.entries.iter().map(|(_, cookie)| cookie)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every cookie.  Defaults are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns `Set-Cookie: ...` lines for the stored cookies, in insertion order.
    #[must_use]
    pub fn header_lines(&self) -> Vec<String> {
        self.iter().map(Cookie::to_set_cookie_header_line).collect()
    }

    /// Hands every stored cookie to `transport`, in insertion order.
    ///
    /// A failed cookie does not stop the rest.  Failures are logged and returned in the report.
    /// The registry keeps its cookies; call [`clear`](Self::clear) to reset it.
    ///
    /// Logs a debug-level summary.  With no logger set, debug events are dropped,
    /// so a successful dispatch prints nothing.
    pub fn dispatch_all(&self, mut transport: impl Transport) -> DispatchReport {
        let mut report = DispatchReport::new();
        for cookie in self.iter() {
            let result = transport.emit_set_cookie(cookie);
            if let Err(e) = &result {
                error(
                    "error dispatching cookie",
                    (
                        tag("cookie", cookie.name()),
                        tag("path", cookie.path()),
                        tag("domain", cookie.domain()),
                        tag("err", e.msg.as_str()),
                    ),
                );
            }
            report.0.push(DispatchOutcome {
                name: cookie.name().to_string(),
                path: cookie.path().to_string(),
                domain: cookie.domain().to_string(),
                header_line: cookie.to_set_cookie_header_line(),
                result,
            });
        }
        debug(
            "dispatched cookies",
            (
                tag("count", report.len()),
                tag("failures", report.num_failures()),
            ),
        );
        report
    }
}
impl<'x> IntoIterator for &'x CookieRegistry {
    type Item = &'x Cookie;
    type IntoIter = std::iter::Map<
        core::slice::Iter<'x, (CookieId, Cookie)>,
        fn(&'x (CookieId, Cookie)) -> &'x Cookie,
    >;

    fn into_iter(self) -> Self::IntoIter {
        let value: fn(&'x (CookieId, Cookie)) -> &'x Cookie = |(_, cookie)| cookie;
        self.entries.iter().map(value)
    }
}
