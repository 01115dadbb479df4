use std::borrow::Cow;

/// Characters that cannot appear literally in a cookie name.
pub const RESERVED_NAME_CHARS: [char; 9] = ['=', ',', ';', ' ', '\t', '\r', '\n', '\u{b}', '\u{c}'];

/// Percent-encodes the reserved characters in a cookie name.
/// All other characters, including non-ASCII ones, are copied unchanged.
#[must_use]
pub fn encode_name(name: &str) -> Cow<'_, str> {
    if !name.contains(RESERVED_NAME_CHARS) {
        return Cow::Borrowed(name);
    }
    let mut result = String::with_capacity(name.len() + 8);
    for c in name.chars() {
        if RESERVED_NAME_CHARS.contains(&c) {
            let mut buf = [0_u8; 4];
            result.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        } else {
            result.push(c);
        }
    }
    Cow::Owned(result)
}

/// Percent-encodes every byte of `value` except the RFC 3986 unreserved characters
/// `A-Z a-z 0-9 - _ . ~`.
#[must_use]
pub fn encode_value(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}
