//! Log sanitization utilities
//!
//! Response bodies can carry whole manifests (secrets, config maps), and the
//! bearer token must never be printed. Everything logged by the HTTP layer goes
//! through these helpers first.

/// Maximum number of characters kept when logging a body.
const TRUNCATE_LIMIT: usize = 256;

/// Truncate a string for safe logging.
///
/// Strings within the limit are returned unchanged; longer ones keep the
/// first `TRUNCATE_LIMIT` characters plus a suffix with the total byte length.
pub fn truncate_for_log(s: &str) -> String {
    match s.char_indices().nth(TRUNCATE_LIMIT) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}... [truncated, total {} bytes]", &s[..cut], s.len()),
    }
}

/// Describe a bearer token without revealing it: `<none>` or `****abcd`.
pub fn mask_token(token: Option<&str>) -> String {
    match token {
        None | Some("") => "<none>".to_string(),
        Some(t) => {
            let tail: String = t
                .chars()
                .rev()
                .take(4)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            if t.chars().count() <= 8 {
                "****".to_string()
            } else {
                format!("****{tail}")
            }
        }
    }
}
