//! DFS referral handling configuration.

use std::time::Duration;

use crate::config::defaults::default_dfs_ttl_secs;
use crate::keys;
use crate::resolve::FieldResolver;

/// DFS behavior flags and cache TTL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsConfig {
    /// Time to live for DFS cache entries (default: 300s).
    ///
    /// Only meaningful while [`disabled`](Self::disabled) is false; consumers
    /// must honor `disabled` regardless of the TTL.
    pub ttl: Duration,
    /// Throw on authentication errors during DFS resolving (default: false).
    pub strict_view: bool,
    /// Disable DFS lookups entirely (default: false).
    pub disabled: bool,
    /// Convert NetBIOS names returned by DFS to FQDNs (default: false).
    pub convert_to_fqdn: bool,
}

impl Default for DfsConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(default_dfs_ttl_secs()),
            strict_view: false,
            disabled: false,
            convert_to_fqdn: false,
        }
    }
}

impl DfsConfig {
    pub(crate) fn resolve(r: &mut FieldResolver<'_>) -> Self {
        Self {
            ttl: r.duration_secs_or(keys::DFS_TTL, default_dfs_ttl_secs()),
            strict_view: r.bool_or(keys::DFS_STRICT_VIEW, false),
            disabled: r.bool_or(keys::DFS_DISABLED, false),
            convert_to_fqdn: r.bool_or(keys::DFS_CONVERT_TO_FQDN, false),
        }
    }
}
