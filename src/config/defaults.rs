//! Default value functions for configuration.
//!
//! One function per property with a non-trivial default, shared between the
//! resolver fallback and the groups' `Default` impls.

use std::net::{IpAddr, Ipv4Addr};

use crate::config::ResolverKind;
use crate::dialect::DialectVersion;

// =============================================================================
// Protocol Defaults
// =============================================================================

pub fn default_min_version() -> DialectVersion {
    DialectVersion::Smb1
}

pub fn default_max_version() -> DialectVersion {
    DialectVersion::Smb210
}

pub fn default_native_os() -> String {
    std::env::consts::OS.to_string()
}

pub fn default_native_lanman() -> String {
    "rsmb".to_string()
}

pub fn default_oem_encoding() -> String {
    "Cp850".to_string()
}

// =============================================================================
// Buffer Defaults
// =============================================================================

pub fn default_buffer_size() -> u32 {
    65535
}

pub fn default_notify_buffer_size() -> u32 {
    1024
}

pub fn default_maximum_buffer_size() -> u32 {
    0x10000
}

pub fn default_buffer_cache_size() -> u32 {
    16
}

pub fn default_list_count() -> u32 {
    200
}

pub fn default_list_size() -> u32 {
    65435
}

// =============================================================================
// Timeout Defaults (milliseconds)
// =============================================================================

pub fn default_so_timeout_ms() -> u64 {
    35_000
}

pub fn default_conn_timeout_ms() -> u64 {
    35_000
}

pub fn default_session_timeout_ms() -> u64 {
    35_000
}

pub fn default_response_timeout_ms() -> u64 {
    30_000
}

pub fn default_attr_cache_timeout_ms() -> u64 {
    5_000
}

// =============================================================================
// Session Defaults
// =============================================================================

pub fn default_session_limit() -> u32 {
    250
}

pub fn default_max_mpx_count() -> u32 {
    10
}

pub fn default_vc_number() -> u16 {
    1
}

pub fn default_max_request_retries() -> u32 {
    2
}

/// Low 16 bits of the real process id. The identifier only disambiguates
/// requests on the wire, so a stable per-process value keeps repeated
/// resolutions of the same input equal.
pub fn default_pid() -> u16 {
    (std::process::id() & 0xffff) as u16
}

// =============================================================================
// Auth Defaults
// =============================================================================

pub fn default_lanman_compatibility() -> i32 {
    3
}

pub fn default_guest_username() -> String {
    "GUEST".to_string()
}

// =============================================================================
// Name Resolution Defaults
// =============================================================================

pub fn default_resolve_order() -> Vec<ResolverKind> {
    vec![
        ResolverKind::Lmhosts,
        ResolverKind::Dns,
        ResolverKind::Wins,
        ResolverKind::Bcast,
    ]
}

pub fn default_broadcast_address() -> IpAddr {
    IpAddr::V4(Ipv4Addr::BROADCAST)
}

pub fn default_netbios_so_timeout_ms() -> u64 {
    5_000
}

pub fn default_netbios_buffer_size() -> u32 {
    576
}

pub fn default_netbios_retry_timeout_ms() -> u64 {
    3_000
}

pub fn default_netbios_retry_count() -> u32 {
    2
}

pub fn default_netbios_cache_policy_secs() -> i64 {
    600
}

// =============================================================================
// DFS Defaults
// =============================================================================

pub fn default_dfs_ttl_secs() -> u64 {
    300
}
