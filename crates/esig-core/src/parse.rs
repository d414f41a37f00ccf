//! Strict JSON helpers for wire payloads.
//!
//! These operate on in-memory bytes only; the crate does no network or
//! filesystem I/O. Callers provide explicit size limits rather than relying
//! on environment defaults, and decoding the same bytes always produces the
//! same value.

use serde::Serialize;

use crate::errors::{EsigError, EsigResult};
use crate::model::api::{Approval, Package};

/// Default maximum JSON bytes accepted by the helpers (2 MiB).
pub const DEFAULT_MAX_JSON_BYTES: usize = 2 * 1024 * 1024;

fn check_size(bytes: &[u8], max_bytes: usize) -> EsigResult<()> {
    if bytes.len() > max_bytes {
        return Err(EsigError::invalid_argument(format!(
            "JSON payload too large ({} bytes > limit {})",
            bytes.len(),
            max_bytes
        )));
    }
    Ok(())
}

/// Decode an approval from JSON bytes with a hard size limit.
pub fn parse_approval_json(bytes: &[u8], max_bytes: usize) -> EsigResult<Approval> {
    check_size(bytes, max_bytes)?;
    serde_json::from_slice(bytes)
        .map_err(|e| EsigError::serialization(format!("failed to decode approval: {e}")))
}

/// Decode a package from JSON bytes with a hard size limit.
pub fn parse_package_json(bytes: &[u8], max_bytes: usize) -> EsigResult<Package> {
    check_size(bytes, max_bytes)?;
    serde_json::from_slice(bytes)
        .map_err(|e| EsigError::serialization(format!("failed to decode package: {e}")))
}

/// Encode any wire value as JSON.
pub fn to_json_vec<T: Serialize>(value: &T) -> EsigResult<Vec<u8>> {
    serde_json::to_vec(value)
        .map_err(|e| EsigError::serialization(format!("failed to encode JSON: {e}")))
}
