use crate::test_util::RecordingTransport;
use cookie_registry::{
    Cookie, CookieOptions, CookieRegistry, DispatchError, FnTransport, HeaderList,
};


fn options() -> CookieOptions {
    CookieOptions::new()
}

fn registry_xyz() -> CookieRegistry {
    let mut registry = CookieRegistry::new();
    registry.set("x", "1", &options());
    registry.set("y", "2", &options().with_secure(true));
    registry.set("z", "3", &options());
    registry
}

#[test]
fn empty() {
    let mut transport = RecordingTransport::new();
    let report = CookieRegistry::new().dispatch_all(&mut transport);
    assert!(report.is_ok());
    assert!(report.is_empty());
    assert_eq!(transport.attempts, 0);
}

#[test]
fn in_insertion_order() {
    let mut transport = RecordingTransport::new();
    let report = registry_xyz().dispatch_all(&mut transport);
    assert!(report.is_ok());
    assert_eq!(report.num_failures(), 0);
    assert_eq!(
        transport.lines,
        vec![
            "Set-Cookie: x=1; path=/; samesite=lax",
            "Set-Cookie: y=2; path=/; secure; samesite=lax",
            "Set-Cookie: z=3; path=/; samesite=lax",
        ]
    );
    assert_eq!(report.header_lines(), transport.lines);
}

#[test]
fn failure_does_not_stop_dispatch() {
    let mut transport = RecordingTransport::failing_on(&["y"]);
    let report = registry_xyz().dispatch_all(&mut transport);
    assert!(!report.is_ok());
    assert_eq!(transport.attempts, 3);
    assert_eq!(
        transport.lines,
        vec![
            "Set-Cookie: x=1; path=/; samesite=lax",
            "Set-Cookie: z=3; path=/; samesite=lax",
        ]
    );
    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].name, "y");
    assert_eq!(failures[0].path, "/");
    assert_eq!(failures[0].domain, "");
    assert_eq!(
        failures[0].header_line,
        "Set-Cookie: y=2; path=/; secure; samesite=lax"
    );
    assert_eq!(failures[0].result, Err(DispatchError::new("refused y")));
    assert_eq!(report.len(), 3);
    assert!(report[0].is_ok());
    assert!(report[2].is_ok());
}

#[test]
fn every_cookie_fails() {
    let mut transport = RecordingTransport::failing_on(&["x", "y", "z"]);
    let report = registry_xyz().dispatch_all(&mut transport);
    assert_eq!(report.num_failures(), 3);
    assert_eq!(transport.attempts, 3);
    assert!(transport.lines.is_empty());
}

#[test]
fn header_list() {
    let mut headers = HeaderList::new();
    headers.add("content-type", "text/plain").unwrap();
    let report = registry_xyz().dispatch_all(&mut headers);
    assert!(report.is_ok());
    assert_eq!(
        headers.get_all("Set-Cookie"),
        vec![
            "x=1; path=/; samesite=lax",
            "y=2; path=/; secure; samesite=lax",
            "z=3; path=/; samesite=lax",
        ]
    );
    assert_eq!(headers.get_only("CONTENT-TYPE"), Some("text/plain"));
    assert_eq!(headers.get_only("set-cookie"), None);
    assert_eq!(headers.len(), 4);
    assert_eq!(
        headers.remove_all("set-cookie"),
        vec![
            "x=1; path=/; samesite=lax".to_string(),
            "y=2; path=/; secure; samesite=lax".to_string(),
            "z=3; path=/; samesite=lax".to_string(),
        ]
    );
    assert_eq!(headers.len(), 1);
}

#[test]
fn header_list_sealed() {
    let mut headers = HeaderList::new();
    headers.seal();
    assert!(headers.is_sealed());
    let report = registry_xyz().dispatch_all(&mut headers);
    assert_eq!(report.num_failures(), 3);
    for outcome in &report {
        assert_eq!(outcome.result, Err(DispatchError::headers_already_sent()));
    }
    assert!(headers.is_empty());
}

#[test]
fn header_list_debug() {
    let mut registry = CookieRegistry::new();
    registry.set("x", "1", &options());
    let mut headers = HeaderList::new();
    let _report = registry.dispatch_all(&mut headers);
    headers.add("x-note", "a\r\nb").unwrap();
    headers.seal();
    assert_eq!(
        format!("{headers:?}"),
        "HeaderList{Header(set-cookie:x=1; path=/; samesite=lax), Header(x-note:a\\r\\nb), sealed}"
    );
}

#[test]
fn header_debug_elides_long_values() {
    let header = cookie_registry::Header::new("set-cookie", "v".repeat(1001));
    assert_eq!(
        format!("{header:?}"),
        format!("Header(set-cookie:{}...)", "v".repeat(1000))
    );
}

#[test]
fn fn_transport() {
    let mut names = Vec::new();
    let report = registry_xyz().dispatch_all(FnTransport(
        |cookie: &Cookie| -> Result<(), DispatchError> {
            names.push(cookie.name().to_string());
            if cookie.is_secure() {
                Err("secure cookie over http".into())
            } else {
                Ok(())
            }
        },
    ));
    assert_eq!(names, vec!["x", "y", "z"]);
    assert_eq!(report.num_failures(), 1);
    assert_eq!(
        report.failures().next().unwrap().result,
        Err(DispatchError::new("secure cookie over http"))
    );
}

#[test]
fn dispatch_keeps_cookies() {
    let registry = registry_xyz();
    let _report = registry.dispatch_all(&mut RecordingTransport::new());
    assert_eq!(registry.count(), 3);
    let mut transport = RecordingTransport::new();
    let _report = registry.dispatch_all(&mut transport);
    assert_eq!(transport.lines.len(), 3);
}

#[test]
fn deleted_cookie_is_dispatched() {
    let mut registry = CookieRegistry::new();
    registry.set("session", "abc", &options());
    registry.delete("session", &options());
    let mut transport = RecordingTransport::new();
    let report = registry.dispatch_all(&mut transport);
    assert!(report.is_ok());
    assert_eq!(
        transport.lines,
        vec!["Set-Cookie: session=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/; samesite=lax"]
    );
}
