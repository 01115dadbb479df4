use crate::time::epoch_seconds;
use crate::{InvalidConfiguration, SameSite};
use std::time::SystemTime;

/// The complete set of cookie attributes used when a caller does not override them.
///
/// [`Default`] gives a session cookie with path `/`, no domain,
/// `secure` and `http_only` off, and `samesite=lax`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct CookieDefaults {
    /// Seconds since the Unix epoch. `None` makes a session cookie.
    pub expires: Option<i64>,
    pub path: String,
    pub domain: String,
    pub secure: bool,
    pub http_only: bool,
    /// `None` writes no `samesite` attribute.  In config, `""` and `null` both mean `None`.
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "serde_fields::deserialize_same_site")
    )]
    pub same_site: Option<SameSite>,
}
impl CookieDefaults {
    #[must_use]
    pub fn new() -> Self {
        Self {
            expires: None,
            path: "/".to_string(),
            domain: String::new(),
            secure: false,
            http_only: false,
            same_site: Some(SameSite::Lax),
        }
    }

    #[must_use]
    pub fn with_expires(mut self, epoch_seconds: Option<i64>) -> Self {
        self.expires = epoch_seconds;
        self
    }

    #[must_use]
    pub fn with_path(mut self, p: impl Into<String>) -> Self {
        self.path = p.into();
        self
    }

    #[must_use]
    pub fn with_domain(mut self, d: impl Into<String>) -> Self {
        self.domain = d.into();
        self
    }

    #[must_use]
    pub fn with_secure(mut self, b: bool) -> Self {
        self.secure = b;
        self
    }

    #[must_use]
    pub fn with_http_only(mut self, b: bool) -> Self {
        self.http_only = b;
        self
    }

    #[must_use]
    pub fn with_same_site(mut self, s: Option<SameSite>) -> Self {
        self.same_site = s;
        self
    }

    /// Reads defaults from a JSON object like `{"path":"/app","secure":true,"sameSite":"Strict"}`.
    /// Missing fields keep their [`Default`] values.
    ///
    /// # Errors
    /// Returns an error when `json` is malformed or `sameSite` is not a valid value.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, InvalidConfiguration> {
        serde_json::from_str(json)
            .map_err(|e| InvalidConfiguration::new(format!("error parsing cookie defaults: {e}")))
    }
}
impl Default for CookieDefaults {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-cookie overrides.  Fields left unset take their values from [`CookieDefaults`].
///
/// # Example
/// ```
/// use cookie_registry::{Cookie, CookieOptions, SameSite};
///
/// let options = CookieOptions::new()
///     .with_path("/app")
///     .with_secure(true)
///     .with_same_site(SameSite::Strict);
/// assert_eq!(
///     Cookie::new("id", "1", &options).to_string(),
///     "id=1; path=/app; secure; samesite=strict",
/// );
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct CookieOptions {
    /// `Some(None)` makes a session cookie.  In config, `null` means `Some(None)`.
    #[cfg_attr(
        feature = "serde",
        serde(
            deserialize_with = "serde_fields::deserialize_expires",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub expires: Option<Option<i64>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub path: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub domain: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub secure: Option<bool>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub http_only: Option<bool>,
    /// `Some(None)` writes no `samesite` attribute.  In config, `""` and `null` mean `Some(None)`.
    #[cfg_attr(
        feature = "serde",
        serde(
            deserialize_with = "serde_fields::deserialize_optional_same_site",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub same_site: Option<Option<SameSite>>,
}
impl CookieOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the expiry time in seconds since the Unix epoch.
    #[must_use]
    pub fn with_expires(mut self, epoch_seconds: i64) -> Self {
        self.expires = Some(Some(epoch_seconds));
        self
    }

    #[must_use]
    pub fn with_expires_at(self, t: SystemTime) -> Self {
        self.with_expires(epoch_seconds(t))
    }

    /// Makes a session cookie, even when the defaults have an expiry time.
    #[must_use]
    pub fn with_session(mut self) -> Self {
        self.expires = Some(None);
        self
    }

    /// An empty path writes no `path` attribute.
    #[must_use]
    pub fn with_path(mut self, p: impl Into<String>) -> Self {
        self.path = Some(p.into());
        self
    }

    #[must_use]
    pub fn with_domain(mut self, d: impl Into<String>) -> Self {
        self.domain = Some(d.into());
        self
    }

    #[must_use]
    pub fn with_secure(mut self, b: bool) -> Self {
        self.secure = Some(b);
        self
    }

    #[must_use]
    pub fn with_http_only(mut self, b: bool) -> Self {
        self.http_only = Some(b);
        self
    }

    #[must_use]
    pub fn with_same_site(mut self, s: SameSite) -> Self {
        self.same_site = Some(Some(s));
        self
    }

    /// Writes no `samesite` attribute.
    #[must_use]
    pub fn without_same_site(mut self) -> Self {
        self.same_site = Some(None);
        self
    }

    /// Sets `samesite` from text, ignoring case.  Empty text acts like [`without_same_site`](Self::without_same_site).
    ///
    /// # Errors
    /// Returns an error when `s` is not empty, `lax`, `strict`, or `none`.
    pub fn with_same_site_str(mut self, s: &str) -> Result<Self, InvalidConfiguration> {
        self.same_site = Some(SameSite::parse_optional(s)?);
        Ok(self)
    }

    /// Applies the fields that were set on top of `defaults`.
    #[must_use]
    pub fn merge_over(&self, defaults: &CookieDefaults) -> CookieDefaults {
        CookieDefaults {
            expires: self.expires.unwrap_or(defaults.expires),
            path: self.path.clone().unwrap_or_else(|| defaults.path.clone()),
            domain: self.domain.clone().unwrap_or_else(|| defaults.domain.clone()),
            secure: self.secure.unwrap_or(defaults.secure),
            http_only: self.http_only.unwrap_or(defaults.http_only),
            same_site: self.same_site.unwrap_or(defaults.same_site),
        }
    }
}

/// Field deserializers for config where an explicit `null` or `""` differs from a missing field.
/// Missing fields never reach these functions; `#[serde(default)]` fills them.
#[cfg(feature = "serde")]
mod serde_fields {
    use crate::SameSite;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize_same_site<'de, D>(deserializer: D) -> Result<Option<SameSite>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => SameSite::parse_optional(&s).map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }

    pub fn deserialize_optional_same_site<'de, D>(
        deserializer: D,
    ) -> Result<Option<Option<SameSite>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_same_site(deserializer).map(Some)
    }

    pub fn deserialize_expires<'de, D>(deserializer: D) -> Result<Option<Option<i64>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<i64>::deserialize(deserializer).map(Some)
    }
}
