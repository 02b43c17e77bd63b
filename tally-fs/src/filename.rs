use std::fmt::Write;

/// Bytes kept as-is in filenames. Everything else, including `%` itself, becomes `%XX`.
fn is_plain(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b',')
}

/// Percent-encodes a persistence key into a filename stem.
///
/// Plain ASCII letters, digits and `-_.,` are kept, so the default keys map to
/// `users`, `products` and `manifest`. Every other UTF-8 byte is written as `%XX`.
///
/// # Examples
///
/// ```
/// # use tally_fs::encode_for_filename;
/// assert_eq!(encode_for_filename("users"), "users");
/// assert_eq!(encode_for_filename("admin/users"), "admin%2Fusers");
/// ```
pub fn encode_for_filename(key: &str) -> String {
    key.bytes().fold(String::with_capacity(key.len()), |mut stem, byte| {
        if is_plain(byte) {
            stem.push(char::from(byte));
        } else {
            // Writing into a String cannot fail.
            let _ = write!(stem, "%{byte:02X}");
        }
        stem
    })
}

/// Recovers the persistence key from a filename stem.
///
/// Returns `None` for a truncated or non-hex escape, or when the escapes do not
/// spell UTF-8.
///
/// # Examples
///
/// ```
/// # use tally_fs::decode_from_filename;
/// assert_eq!(decode_from_filename("admin%2Fusers"), Some("admin/users".to_string()));
/// assert_eq!(decode_from_filename("invalid%"), None);
/// ```
pub fn decode_from_filename(stem: &str) -> Option<String> {
    let raw = stem.as_bytes();
    let mut key = Vec::with_capacity(raw.len());
    let mut pos = 0;

    while let Some(&byte) = raw.get(pos) {
        if byte != b'%' {
            key.push(byte);
            pos += 1;
            continue;
        }
        let hex = raw.get(pos + 1..pos + 3)?;
        if !hex.iter().all(u8::is_ascii_hexdigit) {
            return None;
        }
        key.push(u8::from_str_radix(std::str::from_utf8(hex).ok()?, 16).ok()?);
        pos += 3;
    }
    String::from_utf8(key).ok()
}
