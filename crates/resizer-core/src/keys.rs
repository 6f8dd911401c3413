//! Object key handling.
//!
//! Destination key format: `{prefix}{basename}`, where `basename` is the final
//! `/`-separated segment of the source key. Two source keys that share a basename
//! therefore map to the same destination key.

/// Final `/`-separated segment of an object key.
///
/// Returns the whole key when it contains no `/`, and an empty string when it ends with one.
pub fn object_basename(key: &str) -> &str {
    match key.rfind('/') {
        Some(idx) => &key[idx + 1..],
        None => key,
    }
}

/// Derive the destination key for a source key.
pub fn derive_destination_key(prefix: &str, source_key: &str) -> String {
    format!("{}{}", prefix, object_basename(source_key))
}

/// Decode an object key as delivered in a storage notification.
///
/// Notification keys are form-encoded: spaces arrive as `+` and other reserved
/// characters as `%XX` escapes. If the escapes do not decode to valid UTF-8 the
/// `+`-replaced key is returned unchanged.
pub fn decode_event_key(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
