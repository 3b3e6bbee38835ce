//! NetBIOS name service configuration and resolver ordering.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::defaults::*;
use crate::keys;
use crate::resolve::FieldResolver;

/// A name-resolution module.
///
/// The `resolveOrder` property lists these in priority order; consumers try
/// each in turn until a name resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResolverKind {
    /// Static entries from an lmhosts file.
    Lmhosts,
    /// WINS server lookup.
    Wins,
    /// NetBIOS broadcast query.
    Bcast,
    /// DNS lookup.
    Dns,
}

impl ResolverKind {
    /// Canonical configuration token for this resolver.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lmhosts => "LMHOSTS",
            Self::Wins => "WINS",
            Self::Bcast => "BCAST",
            Self::Dns => "DNS",
        }
    }
}

impl fmt::Display for ResolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolver token that names no known resolver module.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resolver kind: {0}")]
pub struct UnknownResolver(pub String);

impl FromStr for ResolverKind {
    type Err = UnknownResolver;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LMHOSTS" => Ok(Self::Lmhosts),
            "WINS" => Ok(Self::Wins),
            "BCAST" => Ok(Self::Bcast),
            "DNS" => Ok(Self::Dns),
            other => Err(UnknownResolver(other.to_string())),
        }
    }
}

/// NetBIOS transport and name cache configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetbiosConfig {
    /// Local NetBIOS/short name to announce.
    pub hostname: Option<String>,
    /// NetBIOS scope to set in requests.
    pub scope: Option<String>,
    /// Broadcast address (default: 255.255.255.255).
    pub broadcast_address: IpAddr,
    /// WINS servers, in order of preference (default: none).
    pub wins_servers: Vec<IpAddr>,
    /// Local bind port for NetBIOS connections; 0 picks an ephemeral port.
    pub local_port: u16,
    /// Local bind address for NetBIOS connections, if pinned.
    pub local_addr: Option<IpAddr>,
    /// Socket timeout for NetBIOS connections (default: 5s).
    pub so_timeout: Duration,
    /// NetBIOS send buffer size (default: 576).
    pub send_buffer_size: u32,
    /// NetBIOS receive buffer size (default: 576).
    pub receive_buffer_size: u32,
    /// Timeout of NetBIOS retry requests (default: 3s).
    pub retry_timeout: Duration,
    /// Maximum retries for NetBIOS requests (default: 2).
    pub retry_count: u32,
    /// Name cache timeout in seconds; 0 disables caching, -1 caches forever
    /// (default: 600).
    pub cache_policy_secs: i64,
    /// Path of the lmhosts file consulted by the LMHOSTS resolver. Recorded
    /// only - this crate never reads it.
    pub lmhosts_path: Option<String>,
    /// Order and selection of name resolver modules
    /// (default: LMHOSTS,DNS,WINS,BCAST).
    pub resolve_order: Vec<ResolverKind>,
}

impl Default for NetbiosConfig {
    fn default() -> Self {
        Self {
            hostname: None,
            scope: None,
            broadcast_address: default_broadcast_address(),
            wins_servers: Vec::new(),
            local_port: 0,
            local_addr: None,
            so_timeout: Duration::from_millis(default_netbios_so_timeout_ms()),
            send_buffer_size: default_netbios_buffer_size(),
            receive_buffer_size: default_netbios_buffer_size(),
            retry_timeout: Duration::from_millis(default_netbios_retry_timeout_ms()),
            retry_count: default_netbios_retry_count(),
            cache_policy_secs: default_netbios_cache_policy_secs(),
            lmhosts_path: None,
            resolve_order: default_resolve_order(),
        }
    }
}

impl NetbiosConfig {
    pub(crate) fn resolve(r: &mut FieldResolver<'_>) -> Self {
        Self {
            hostname: r.opt_string(keys::NETBIOS_HOSTNAME),
            scope: r.opt_string(keys::NETBIOS_SCOPE),
            broadcast_address: r.addr_or(keys::NETBIOS_BADDR, default_broadcast_address()),
            wins_servers: r.addr_list(keys::NETBIOS_WINS),
            local_port: r.u16_or(keys::NETBIOS_LPORT, 0),
            local_addr: r.opt_addr(keys::NETBIOS_LADDR),
            so_timeout: r
                .duration_ms_or(keys::NETBIOS_SO_TIMEOUT, default_netbios_so_timeout_ms()),
            send_buffer_size: r
                .u32_or(keys::NETBIOS_SND_BUF_SIZE, default_netbios_buffer_size()),
            receive_buffer_size: r
                .u32_or(keys::NETBIOS_RCV_BUF_SIZE, default_netbios_buffer_size()),
            retry_timeout: r.duration_ms_or(
                keys::NETBIOS_RETRY_TIMEOUT,
                default_netbios_retry_timeout_ms(),
            ),
            retry_count: r.u32_or(keys::NETBIOS_RETRY_COUNT, default_netbios_retry_count()),
            cache_policy_secs: r
                .i64_or(keys::NETBIOS_CACHE_POLICY, default_netbios_cache_policy_secs()),
            lmhosts_path: r.opt_string(keys::NETBIOS_LMHOSTS),
            resolve_order: r.resolve_order_or(keys::RESOLVE_ORDER, default_resolve_order()),
        }
    }
}
