use crate::InvalidConfiguration;
use core::fmt::{Display, Formatter};
use core::str::FromStr;

/// Value of the `samesite` cookie attribute.
///
/// Parsing is case-insensitive and the attribute is always written in lower case.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum SameSite {
    Lax,
    Strict,
    None,
}
impl SameSite {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Lax => "lax",
            SameSite::Strict => "strict",
            SameSite::None => "none",
        }
    }

    /// Parses an optional attribute value.
    ///
    /// Empty text means "write no `samesite` attribute" and returns `Ok(None)`.
    ///
    /// # Errors
    /// Returns an error when `s` is not empty and is not `lax`, `strict`, or `none`.
    pub fn parse_optional(s: &str) -> Result<Option<SameSite>, InvalidConfiguration> {
        if s.is_empty() {
            Ok(None)
        } else {
            s.parse().map(Some)
        }
    }
}
impl Display for SameSite {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), core::fmt::Error> {
        write!(f, "{}", self.as_str())
    }
}
impl FromStr for SameSite {
    type Err = InvalidConfiguration;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lax" => Ok(SameSite::Lax),
            "strict" => Ok(SameSite::Strict),
            "none" => Ok(SameSite::None),
            _ => Err(InvalidConfiguration::new(format!(
                "invalid sameSite option {s:?}, expected \"lax\", \"strict\", or \"none\""
            ))),
        }
    }
}
impl TryFrom<&str> for SameSite {
    type Error = InvalidConfiguration;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
impl TryFrom<String> for SameSite {
    type Error = InvalidConfiguration;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
impl From<SameSite> for String {
    fn from(value: SameSite) -> Self {
        value.as_str().to_string()
    }
}
