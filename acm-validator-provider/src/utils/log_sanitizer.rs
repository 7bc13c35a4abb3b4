//! Log sanitization utilities
//!
//! Keeps response bodies short in debug logs and strips session tokens from the SigV4
//! canonical request before it is logged.

/// Maximum number of bytes of a body kept in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Signed header carrying temporary credentials.
const SECURITY_TOKEN_HEADER: &str = "x-amz-security-token:";

/// Largest char boundary not after `index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// Truncate a string for safe logging.
///
/// Strings within the limit are returned unchanged; longer ones keep the first
/// `TRUNCATE_LIMIT` bytes (on a char boundary) plus the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    format!(
        "{}... [truncated, total {} bytes]",
        &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
        s.len()
    )
}

/// Replace the value of the `x-amz-security-token` canonical header line.
pub fn redact_security_token(canonical_request: &str) -> String {
    canonical_request
        .lines()
        .map(|line| {
            if line.starts_with(SECURITY_TOKEN_HEADER) {
                format!("{SECURITY_TOKEN_HEADER}***")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
