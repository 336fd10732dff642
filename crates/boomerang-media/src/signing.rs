//! Upload request signing.
//!
//! The signature is the hex SHA-256 of the signed parameters sorted by name,
//! joined as `k=v&k=v`, with the API secret appended.

use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Parameters the vendor never includes in the signature.
const UNSIGNED_PARAMS: &[&str] = &[
    "file",
    "api_key",
    "cloud_name",
    "resource_type",
    "signature",
    "signature_algorithm",
];

pub const SIGNATURE_ALGORITHM: &str = "sha256";

/// The canonical `k=v&k=v` string that gets hashed.
pub fn string_to_sign(params: &BTreeMap<&str, String>) -> String {
    params
        .iter()
        .filter(|(key, value)| !UNSIGNED_PARAMS.contains(*key) && !value.is_empty())
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn sign_params(params: &BTreeMap<&str, String>, api_secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(string_to_sign(params).as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}
