use crate::encode::{encode_name, encode_value};
use crate::time::{now_epoch_seconds, FormatTime};
use crate::{CookieDefaults, CookieOptions, SameSite};
use core::fmt::{Display, Formatter};

/// Identifies a cookie slot: a browser stores one cookie per name, path, and domain.
///
/// Displays as `name;path;domain`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CookieId {
    pub name: String,
    pub path: String,
    pub domain: String,
}
impl Display for CookieId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), core::fmt::Error> {
        write!(f, "{};{};{}", self.name, self.path, self.domain)
    }
}

/// One outgoing cookie.  Immutable after construction.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Cookie {
    name: String,
    value: String,
    expires: Option<i64>,
    path: String,
    domain: String,
    secure: bool,
    http_only: bool,
    same_site: Option<SameSite>,
}
impl Cookie {
    /// Makes a cookie, applying `options` over [`CookieDefaults::default`].
    ///
    /// # Example
    /// ```
    /// use cookie_registry::{Cookie, CookieOptions};
    ///
    /// let cookie = Cookie::new("test", "value=1", &CookieOptions::new());
    /// assert_eq!(cookie.to_header_value(), "test=value%3D1; path=/; samesite=lax");
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>, options: &CookieOptions) -> Self {
        Self::with_defaults(name, value, options, &CookieDefaults::default())
    }

    #[must_use]
    pub fn with_defaults(
        name: impl Into<String>,
        value: impl Into<String>,
        options: &CookieOptions,
        defaults: &CookieDefaults,
    ) -> Self {
        Self::from_attributes(name, value, options.merge_over(defaults))
    }

    #[must_use]
    pub fn from_attributes(
        name: impl Into<String>,
        value: impl Into<String>,
        attributes: CookieDefaults,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            expires: attributes.expires,
            path: attributes.path,
            domain: attributes.domain,
            secure: attributes.secure,
            http_only: attributes.http_only,
            same_site: attributes.same_site,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Seconds since the Unix epoch, or `None` for a session cookie.
    #[must_use]
    pub fn expires(&self) -> Option<i64> {
        self.expires
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    #[must_use]
    pub fn same_site(&self) -> Option<SameSite> {
        self.same_site
    }

    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.secure
    }

    #[must_use]
    pub fn is_http_only(&self) -> bool {
        self.http_only
    }

    #[must_use]
    pub fn id(&self) -> CookieId {
        CookieId {
            name: self.name.clone(),
            path: self.path.clone(),
            domain: self.domain.clone(),
        }
    }

    /// Returns `true` when the cookie has an expiry time before now.
    /// Session cookies never expire.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(now_epoch_seconds())
    }

    #[must_use]
    pub fn is_expired_at(&self, now_epoch_seconds: i64) -> bool {
        matches!(self.expires, Some(t) if t < now_epoch_seconds)
    }

    /// The value of a `Set-Cookie` header, like `name=value; path=/; samesite=lax`.
    #[must_use]
    pub fn to_header_value(&self) -> String {
        self.to_string()
    }

    /// A complete header line, like `Set-Cookie: name=value; path=/; samesite=lax`.
    #[must_use]
    pub fn to_set_cookie_header_line(&self) -> String {
        format!("Set-Cookie: {self}")
    }
}
impl Display for Cookie {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        // https://datatracker.ietf.org/doc/html/rfc6265#section-4.1
        // Set-Cookie: <name>=<value>[; expires=<date>][; path=<path>][; domain=<domain>]
        //     [; secure][; httponly][; samesite=<lax|strict|none>]
        write!(
            f,
            "{}={}",
            encode_name(&self.name),
            encode_value(&self.value)
        )?;
        if let Some(expires) = self.expires {
            write!(f, "; expires={}", expires.imf_fixdate())?;
        }
        if !self.path.is_empty() {
            write!(f, "; path={}", self.path)?;
        }
        if !self.domain.is_empty() {
            write!(f, "; domain={}", self.domain)?;
        }
        if self.secure {
            write!(f, "; secure")?;
        }
        if self.http_only {
            write!(f, "; httponly")?;
        }
        if let Some(same_site) = self.same_site {
            write!(f, "; samesite={same_site}")?;
        }
        Ok(())
    }
}
