//! Typed coercion of raw property values.
//!
//! Each function converts one raw string into its declared target type or
//! fails with a [`CoercionError`] naming the key, the offending value, and
//! the expected type. Integer parses are width-checked only; domain ranges
//! (buffer ceilings, the LAN Manager level) are the validator's business.
//! Nothing here performs DNS lookups - address values must be numeric.

use std::net::IpAddr;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::command::SmbCommand;
use crate::config::ResolverKind;
use crate::dialect::DialectVersion;
use crate::machine_id::MachineId;

/// A raw value that could not be converted to its declared type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("property {key}: cannot interpret {value:?} as {expected}")]
pub struct CoercionError {
    /// The property key the value was supplied under.
    pub key: String,
    /// The raw value as given.
    pub value: String,
    /// Human-readable name of the expected type.
    pub expected: &'static str,
}

impl CoercionError {
    fn new(key: &str, value: &str, expected: &'static str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
            expected,
        }
    }
}

/// Parse a boolean. Accepts `true`/`false`/`yes`/`no`, case-insensitively,
/// and nothing else - a malformed flag is an error, never a silent default.
pub fn parse_bool(key: &str, raw: &str) -> Result<bool, CoercionError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" => Ok(true),
        "false" | "no" => Ok(false),
        _ => Err(CoercionError::new(key, raw, "boolean (true/false/yes/no)")),
    }
}

/// Parse an unsigned 32-bit integer.
pub fn parse_u32(key: &str, raw: &str) -> Result<u32, CoercionError> {
    raw.trim()
        .parse()
        .map_err(|_| CoercionError::new(key, raw, "unsigned integer"))
}

/// Parse an unsigned 16-bit integer (ports, virtual circuit numbers).
pub fn parse_u16(key: &str, raw: &str) -> Result<u16, CoercionError> {
    raw.trim()
        .parse()
        .map_err(|_| CoercionError::new(key, raw, "unsigned 16-bit integer"))
}

/// Parse a signed 32-bit integer.
pub fn parse_i32(key: &str, raw: &str) -> Result<i32, CoercionError> {
    raw.trim()
        .parse()
        .map_err(|_| CoercionError::new(key, raw, "integer"))
}

/// Parse a signed 64-bit integer.
pub fn parse_i64(key: &str, raw: &str) -> Result<i64, CoercionError> {
    raw.trim()
        .parse()
        .map_err(|_| CoercionError::new(key, raw, "integer"))
}

/// Parse a duration given in milliseconds.
pub fn parse_duration_ms(key: &str, raw: &str) -> Result<Duration, CoercionError> {
    let ms: u64 = raw
        .trim()
        .parse()
        .map_err(|_| CoercionError::new(key, raw, "duration in milliseconds"))?;
    Ok(Duration::from_millis(ms))
}

/// Parse a duration given in seconds (used where the key documents seconds,
/// e.g. the DFS cache TTL).
pub fn parse_duration_secs(key: &str, raw: &str) -> Result<Duration, CoercionError> {
    let secs: u64 = raw
        .trim()
        .parse()
        .map_err(|_| CoercionError::new(key, raw, "duration in seconds"))?;
    Ok(Duration::from_secs(secs))
}

/// Parse a numeric IP address. Host names are not resolved here - endpoint
/// resolution is deferred to the consumers that own the sockets.
pub fn parse_addr(key: &str, raw: &str) -> Result<IpAddr, CoercionError> {
    IpAddr::from_str(raw.trim()).map_err(|_| CoercionError::new(key, raw, "IP address"))
}

/// Parse a comma-separated, order-preserving list of numeric IP addresses.
/// An empty value yields an empty list.
pub fn parse_addr_list(key: &str, raw: &str) -> Result<Vec<IpAddr>, CoercionError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    raw.split(',').map(|part| parse_addr(key, part)).collect()
}

/// Parse an SMB dialect name.
pub fn parse_dialect(key: &str, raw: &str) -> Result<DialectVersion, CoercionError> {
    raw.parse()
        .map_err(|_| CoercionError::new(key, raw, "SMB dialect (SMB1..SMB311)"))
}

/// Parse the resolver order list. Order is priority; duplicates and empty
/// lists pass coercion and are rejected later by validation.
pub fn parse_resolve_order(key: &str, raw: &str) -> Result<Vec<ResolverKind>, CoercionError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    raw.split(',')
        .map(|token| {
            token
                .parse()
                .map_err(|_| CoercionError::new(key, token.trim(), "resolver kind (LMHOSTS/WINS/BCAST/DNS)"))
        })
        .collect()
}

/// Parse a supplied machine identifier (64 hex digits).
pub fn parse_machine_id(key: &str, raw: &str) -> Result<MachineId, CoercionError> {
    raw.parse()
        .map_err(|_| CoercionError::new(key, raw, "machine identifier (32 bytes of hex)"))
}

/// Parse a protocol command token from a policy key suffix.
pub fn parse_command(key: &str, token: &str) -> Result<SmbCommand, CoercionError> {
    token
        .parse()
        .map_err(|_| CoercionError::new(key, token, "SMB command name"))
}
