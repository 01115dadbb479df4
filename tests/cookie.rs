use crate::test_util::{assert_has_imf_fixdate_expires, assert_starts_with};
use cookie_registry::internal::now_epoch_seconds;
use cookie_registry::{Cookie, CookieDefaults, CookieOptions, SameSite};
use std::time::{Duration, SystemTime};


fn options() -> CookieOptions {
    CookieOptions::new()
}

#[test]
fn defaults() {
    let cookie = Cookie::new("test", "value", &options());
    assert_eq!(cookie.name(), "test");
    assert_eq!(cookie.value(), "value");
    assert_eq!(cookie.expires(), None);
    assert_eq!(cookie.path(), "/");
    assert_eq!(cookie.domain(), "");
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert!(!cookie.is_secure());
    assert!(!cookie.is_http_only());
    assert_eq!(cookie.to_string(), "test=value; path=/; samesite=lax");
}

#[test]
fn accessors() {
    let cookie = Cookie::new(
        "test",
        "value",
        &options()
            .with_expires(1_648_625_373)
            .with_path("/test")
            .with_domain("test.com")
            .with_secure(true)
            .with_http_only(true)
            .with_same_site(SameSite::Strict),
    );
    assert_eq!(cookie.expires(), Some(1_648_625_373));
    assert_eq!(cookie.path(), "/test");
    assert_eq!(cookie.domain(), "test.com");
    assert_eq!(cookie.same_site(), Some(SameSite::Strict));
    assert!(cookie.is_secure());
    assert!(cookie.is_http_only());
}

#[test]
fn empty_value() {
    assert_eq!(
        Cookie::new("name1", "", &options()).to_header_value(),
        "name1=; path=/; samesite=lax",
    );
}

#[test]
fn encoded_name() {
    assert_eq!(
        Cookie::new("test=1", "value", &options()).to_header_value(),
        "test%3D1=value; path=/; samesite=lax",
    );
    assert_eq!(
        Cookie::new("a b,c;d\te", "v", &options()).to_header_value(),
        "a%20b%2Cc%3Bd%09e=v; path=/; samesite=lax",
    );
    assert_eq!(
        Cookie::new("a/b", "v", &options()).to_header_value(),
        "a/b=v; path=/; samesite=lax",
    );
}

#[test]
fn encoded_value() {
    assert_eq!(
        Cookie::new("test", "value=1", &options()).to_header_value(),
        "test=value%3D1; path=/; samesite=lax",
    );
    assert_eq!(
        Cookie::new("test", "a b/c;\u{e9}~", &options()).to_header_value(),
        "test=a%20b%2Fc%3B%C3%A9~; path=/; samesite=lax",
    );
}

#[allow(clippy::unreadable_literal)]
#[test]
fn all_attributes() {
    let cookie = Cookie::new(
        "test",
        "value",
        &options()
            .with_expires(9999999999)
            .with_path("/test")
            .with_domain("test.com")
            .with_secure(true)
            .with_http_only(true)
            .with_same_site_str("strict")
            .unwrap(),
    );
    assert_eq!(
        cookie.to_header_value(),
        "test=value; expires=Sat, 20 Nov 2286 17:46:39 GMT; path=/test; domain=test.com; secure; httponly; samesite=strict",
    );
    assert_eq!(
        cookie.to_set_cookie_header_line(),
        "Set-Cookie: test=value; expires=Sat, 20 Nov 2286 17:46:39 GMT; path=/test; domain=test.com; secure; httponly; samesite=strict",
    );
    assert_has_imf_fixdate_expires(cookie.to_header_value());
}

#[allow(clippy::unreadable_literal)]
#[test]
fn extreme_expires() {
    assert_eq!(
        Cookie::new("a", "b", &options().with_expires(i64::MAX)).to_header_value(),
        "a=b; expires=Sun, 04 Dec 292277026596 15:30:07 GMT; path=/; samesite=lax"
    );
    assert_eq!(
        Cookie::new("a", "b", &options().with_expires(i64::MIN)).to_header_value(),
        "a=b; expires=Sun, 27 Jan -292277022657 08:29:52 GMT; path=/; samesite=lax"
    );
}

#[test]
fn with_expires_at() {
    let cookie = Cookie::new(
        "name1",
        "value1",
        &options().with_expires_at(SystemTime::UNIX_EPOCH + Duration::from_secs(1648690632)),
    );
    assert_eq!(cookie.expires(), Some(1648690632));
    assert_eq!(
        cookie.to_header_value(),
        "name1=value1; expires=Thu, 31 Mar 2022 01:37:12 GMT; path=/; samesite=lax",
    );
}

#[test]
fn with_path() {
    assert_eq!(
        Cookie::new("name1", "value1", &options().with_path("")).to_header_value(),
        "name1=value1; samesite=lax",
    );
    assert_eq!(
        Cookie::new("name1", "value1", &options().with_path("/a b;c")).to_header_value(),
        "name1=value1; path=/a b;c; samesite=lax",
    );
}

#[test]
fn with_same_site() {
    for (expected, same_site) in [
        ("name1=value1; path=/; samesite=lax", SameSite::Lax),
        ("name1=value1; path=/; samesite=strict", SameSite::Strict),
        ("name1=value1; path=/; samesite=none", SameSite::None),
    ] {
        assert_eq!(
            Cookie::new("name1", "value1", &options().with_same_site(same_site)).to_header_value(),
            expected
        );
    }
    assert_eq!(
        Cookie::new("name1", "value1", &options().without_same_site()).to_header_value(),
        "name1=value1; path=/",
    );
}

#[test]
fn same_site_text_is_case_insensitive() {
    for text in ["LAX", "Lax", "lax"] {
        let cookie = Cookie::new("n", "v", &options().with_same_site_str(text).unwrap());
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.to_header_value(), "n=v; path=/; samesite=lax");
    }
    let cookie = Cookie::new("n", "v", &options().with_same_site_str("").unwrap());
    assert_eq!(cookie.same_site(), None);
}

#[test]
fn invalid_same_site() {
    let err = options().with_same_site_str("bogus").unwrap_err();
    assert_starts_with(err.to_string(), "invalid cookie configuration: ");
    assert!(err.msg.contains("\"bogus\""), "{err:?}");
    assert!("bogus".parse::<SameSite>().is_err());
    assert!(SameSite::try_from("Strictly").is_err());
    assert_eq!(Ok(SameSite::None), "NoNe".parse::<SameSite>());
}

#[test]
fn is_expired() {
    let now = now_epoch_seconds();
    assert!(!Cookie::new("t", "v", &options()).is_expired());
    assert!(!Cookie::new("t", "v", &options().with_expires(now + 3600)).is_expired());
    assert!(Cookie::new("t", "v", &options().with_expires(now - 3600)).is_expired());
    assert!(Cookie::new("t", "v", &options().with_expires(0)).is_expired());
}

#[test]
fn is_expired_at() {
    let cookie = Cookie::new("t", "v", &options().with_expires(100));
    assert!(!cookie.is_expired_at(99));
    assert!(!cookie.is_expired_at(100));
    assert!(cookie.is_expired_at(101));
    assert!(!Cookie::new("t", "v", &options()).is_expired_at(i64::MAX));
}

#[test]
fn with_defaults() {
    let defaults = CookieDefaults::default()
        .with_path("/app")
        .with_domain("example.com")
        .with_secure(true)
        .with_same_site(Some(SameSite::None));
    assert_eq!(
        Cookie::with_defaults("a", "1", &options(), &defaults).to_header_value(),
        "a=1; path=/app; domain=example.com; secure; samesite=none",
    );
    assert_eq!(
        Cookie::with_defaults("a", "1", &options().with_secure(false).with_domain(""), &defaults)
            .to_header_value(),
        "a=1; path=/app; samesite=none",
    );
}

#[test]
fn session_overrides_default_expiry() {
    let defaults = CookieDefaults::default().with_expires(Some(0));
    let cookie = Cookie::with_defaults("a", "1", &options().with_session(), &defaults);
    assert_eq!(cookie.expires(), None);
    assert_eq!(cookie.to_header_value(), "a=1; path=/; samesite=lax");
}

#[test]
fn id() {
    let cookie = Cookie::new("a", "1", &options().with_path("/p").with_domain("d.com"));
    assert_eq!(cookie.id().to_string(), "a;/p;d.com");
    assert_eq!(
        cookie.id(),
        Cookie::new("a", "2", &options().with_path("/p").with_domain("d.com").with_secure(true))
            .id()
    );
    assert_ne!(cookie.id(), Cookie::new("a", "1", &options()).id());
}
