//! Cookie Registry
//! ===============
//! [![license: Apache 2.0](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](http://www.apache.org/licenses/LICENSE-2.0)
//! [![unsafe forbidden](https://img.shields.io/badge/unsafe-forbidden-success.svg)](https://github.com/rust-secure-code/safety-dance/)
//!
//! Builds `Set-Cookie` headers and collects the cookies to send on a response.
//!
//! # Features
//! - `forbid(unsafe_code)`
//! - `Set-Cookie` values with percent-encoded names and values and RFC 7231 `expires` dates
//! - Typed cookie options merged over per-registry defaults
//! - One slot per (name, path, domain): setting a cookie again replaces it
//! - Deleting a cookie stores an expired cookie so the client removes it
//! - Best-effort dispatch: every cookie is tried and failures are reported
//! - Structured logging with tags
//! - `serde` feature to load defaults from config, `json` feature adds [`CookieDefaults::from_json`]
//!
//! # Limitations
//! - Does not parse incoming `Cookie` headers.
//! - No locking.  Use one registry per request.
//!
//! # Example
//! ```rust
//! use cookie_registry::{CookieOptions, CookieRegistry, HeaderList, SameSite};
//!
//! let mut registry = CookieRegistry::new();
//! registry.set(
//!     "session",
//!     "a b",
//!     &CookieOptions::new()
//!         .with_expires(9999999999)
//!         .with_secure(true)
//!         .with_http_only(true)
//!         .with_same_site(SameSite::Strict),
//! );
//! registry.set("theme", "dark", &CookieOptions::new());
//! registry.set("theme", "light", &CookieOptions::new());
//! assert_eq!(registry.count(), 2);
//!
//! let mut headers = HeaderList::new();
//! let report = registry.dispatch_all(&mut headers);
//! assert!(report.is_ok());
//! assert_eq!(
//!     report.header_lines(),
//!     vec![
//!         "Set-Cookie: session=a%20b; expires=Sat, 20 Nov 2286 17:46:39 GMT; path=/; secure; httponly; samesite=strict",
//!         "Set-Cookie: theme=light; path=/; samesite=lax",
//!     ]
//! );
//! ```
#![forbid(unsafe_code)]
mod cookie;
mod encode;
mod error;
pub mod log;
mod options;
mod registry;
mod same_site;
mod time;
mod transport;
mod util;

pub use crate::cookie::{Cookie, CookieId};
pub use crate::error::{DispatchError, InvalidConfiguration};
pub use crate::options::{CookieDefaults, CookieOptions};
pub use crate::registry::{CookieRegistry, DELETED_EXPIRES};
pub use crate::same_site::SameSite;
pub use crate::transport::{
    DispatchOutcome, DispatchReport, FnTransport, Header, HeaderList, Transport,
};

/// This part of the library is not covered by the semver guarantees.
/// If you use these in your program, a minor version upgrade could break your build.
///
/// If you use these items in a published library,
/// your library should depend on a specific version of this library.
pub mod internal {
    pub use crate::encode::*;
    pub use crate::time::*;
    pub use crate::util::*;
}
