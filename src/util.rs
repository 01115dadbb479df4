/// Convert a byte slice into a string.
/// Includes printable ASCII characters as-is.
/// Converts non-printable or non-ASCII characters to strings like "\n" and "\x19".
///
/// This function is useful for printing header values to logs and comparing them in tests.
///
/// Example test:
/// ```
/// use cookie_registry::internal::escape_ascii;
/// assert_eq!("abc", escape_ascii(b"abc"));
/// assert_eq!("abc\\n", escape_ascii(b"abc\n"));
/// assert_eq!(
///     "Euro sign: \\xe2\\x82\\xac",
///     escape_ascii("Euro sign: \u{20AC}".as_bytes())
/// );
/// ```
#[must_use]
pub fn escape_ascii(input: &[u8]) -> String {
    input
        .iter()
        .flat_map(|b| core::ascii::escape_default(*b))
        .map(char::from)
        .collect()
}

#[must_use]
pub fn escape_and_elide(input: &[u8], max_len: usize) -> String {
    if input.len() > max_len {
        escape_ascii(&input[..max_len]) + "..."
    } else {
        escape_ascii(input)
    }
}
