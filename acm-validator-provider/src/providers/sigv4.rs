//! AWS Signature Version 4 (AWS4-HMAC-SHA256)
//!
//! Reference: <https://docs.aws.amazon.com/IAM/latest/UserGuide/reference_sigv-create-signed-request.html>

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::providers::common::{hmac_sha256, sha256_hex};
use crate::types::AwsCredentials;
use crate::utils::log_sanitizer::{redact_security_token, truncate_for_log};

const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Service/region scope of a signature.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SigningScope<'a> {
    pub service: &'a str,
    pub region: &'a str,
}

/// Timestamp in `x-amz-date` format.
pub(crate) fn amz_date(now: DateTime<Utc>) -> String {
    now.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Headers signed on every request: host, x-amz-date, and x-amz-security-token for temporary credentials.
pub(crate) fn base_headers(
    host: &str,
    amz_date: &str,
    credentials: &AwsCredentials,
) -> Vec<(String, String)> {
    let mut headers = vec![
        ("Host".to_string(), host.to_string()),
        ("X-Amz-Date".to_string(), amz_date.to_string()),
    ];
    if let Some(token) = &credentials.session_token {
        headers.push(("X-Amz-Security-Token".to_string(), token.clone()));
    }
    headers
}

/// Build the `Authorization` header.
///
/// `uri` must already be URI-encoded; `query` is `k=v` pairs joined by `&`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn sign(
    credentials: &AwsCredentials,
    scope: SigningScope<'_>,
    method: &str,
    uri: &str,
    query: &str,
    headers: &[(String, String)],
    payload: &str,
    amz_date: &str,
) -> String {
    let date = amz_date.get(..8).unwrap_or(amz_date);

    // 1. Canonical request
    let canonical_uri = if uri.is_empty() { "/" } else { uri };

    let canonical_query = if query.is_empty() {
        String::new()
    } else {
        let mut params: Vec<&str> = query.split('&').collect();
        params.sort_unstable();
        params.join("&")
    };

    let mut sorted_headers: Vec<(String, &str)> = headers
        .iter()
        .map(|(k, v)| (k.to_lowercase(), v.trim()))
        .collect();
    sorted_headers.sort_by(|a, b| a.0.cmp(&b.0));

    let canonical_headers = sorted_headers
        .iter()
        .fold(String::new(), |mut acc, (k, v)| {
            let _ = writeln!(acc, "{k}:{v}");
            acc
        });

    let signed_headers = sorted_headers
        .iter()
        .map(|(k, _)| k.as_str())
        .collect::<Vec<_>>()
        .join(";");

    let hashed_payload = sha256_hex(payload.as_bytes());

    let canonical_request = format!(
        "{method}\n{canonical_uri}\n{canonical_query}\n{canonical_headers}\n{signed_headers}\n{hashed_payload}"
    );

    log::debug!(
        "CanonicalRequest:\n{}",
        truncate_for_log(&redact_security_token(&canonical_request))
    );

    // 2. String to sign
    let credential_scope = format!("{date}/{}/{}/aws4_request", scope.region, scope.service);
    let string_to_sign = format!(
        "{ALGORITHM}\n{amz_date}\n{credential_scope}\n{}",
        sha256_hex(canonical_request.as_bytes())
    );

    log::debug!("StringToSign:\n{string_to_sign}");

    // 3. Derive the signing key and sign
    let k_date = hmac_sha256(
        format!("AWS4{}", credentials.secret_access_key).as_bytes(),
        date.as_bytes(),
    );
    let k_region = hmac_sha256(&k_date, scope.region.as_bytes());
    let k_service = hmac_sha256(&k_region, scope.service.as_bytes());
    let k_signing = hmac_sha256(&k_service, b"aws4_request");
    let signature = hex::encode(hmac_sha256(&k_signing, string_to_sign.as_bytes()));

    // 4. Authorization
    format!(
        "{ALGORITHM} Credential={}/{credential_scope}, SignedHeaders={signed_headers}, Signature={signature}",
        credentials.access_key_id
    )
}
