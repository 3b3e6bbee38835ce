//! Core client protocol and transport tuning.

use std::net::IpAddr;
use std::time::Duration;

use crate::config::defaults::*;
use crate::dialect::DialectVersion;
use crate::keys;
use crate::resolve::FieldResolver;

/// Protocol negotiation, buffer, and timeout configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Minimum protocol version to use/allow (default: SMB1).
    pub min_version: DialectVersion,
    /// Maximum protocol version to use/allow (default: SMB210).
    pub max_version: DialectVersion,
    /// Use SMB2 non-backward compatible negotiation style (default: false).
    pub use_smb2_negotiation: bool,
    /// Enforce secure negotiation verification (default: true).
    ///
    /// Provides no actual downgrade protection while SMB1 remains in the
    /// allowed range.
    pub require_secure_negotiate: bool,
    /// Fail over to the legacy transport on port 139 (default: false).
    pub port139_failover: bool,
    /// Announce unicode support (default: true).
    pub use_unicode: bool,
    /// Use unicode even if the server does not announce it (default: false).
    pub force_unicode: bool,
    /// Enable SMB1 AndX command batching (default: false).
    pub use_batching: bool,
    /// OS string to report (default: host OS name).
    pub native_os: String,
    /// LAN Manager string to report (default: "rsmb").
    pub native_lanman: String,
    /// Receive buffer size in bytes (default: 65535).
    pub receive_buffer_size: u32,
    /// Send buffer size in bytes (default: 65535).
    pub send_buffer_size: u32,
    /// Maximum data size for transactions (default: 65535).
    pub transaction_buffer_size: u32,
    /// Requested server notify buffer size (default: 1024).
    pub notify_buffer_size: u32,
    /// Ceiling for all IO buffers; limits the maximum message size
    /// (default: 65536).
    pub maximum_buffer_size: u32,
    /// Number of buffers to keep cached (default: 16).
    pub buffer_cache_size: u32,
    /// Socket read timeout (default: 35s).
    pub so_timeout: Duration,
    /// Socket connect timeout (default: 35s).
    pub conn_timeout: Duration,
    /// SMB session timeout (default: 35s).
    pub session_timeout: Duration,
    /// SMB response timeout (default: 30s).
    pub response_timeout: Duration,
    /// File attribute cache timeout (default: 5s).
    pub attr_cache_timeout: Duration,
    /// Local port for outgoing connections; 0 picks an ephemeral port.
    pub local_port: u16,
    /// Local address for outgoing connections, if pinned.
    pub local_addr: Option<IpAddr>,
    /// Share to connect to during authentication; IPC$ when unset.
    pub logon_share: Option<String>,
    /// Maximum sessions on a single connection (default: 250).
    pub session_limit: u32,
    /// Maximum concurrent commands to announce (default: 10).
    pub max_mpx_count: u32,
    /// Virtual circuit number (default: 1).
    pub vc_number: u16,
    /// Custom capability bits ORed into the negotiate request (default: 0).
    pub capabilities: u32,
    /// Custom flags2 bits ORed into request headers (default: 0).
    pub flags2: u16,
    /// Maximum elements per list request (default: 200).
    pub list_count: u32,
    /// Maximum data size for list/info requests (default: 65435).
    pub list_size: u32,
    /// Retry requests on failure up to this many times (default: 2).
    pub max_request_retries: u32,
    /// Ignore errors that occur during server-side copies (default: false).
    pub ignore_copy_to_exception: bool,
    /// Hold tree references as long as any file handle uses them
    /// (default: false).
    pub strict_resource_lifecycle: bool,
    /// Track the locations from which resources were created; debugging only
    /// (default: false).
    pub trace_resource_usage: bool,
    /// OEM encoding for legacy strings (default: "Cp850").
    pub oem_encoding: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            min_version: default_min_version(),
            max_version: default_max_version(),
            use_smb2_negotiation: false,
            require_secure_negotiate: true,
            port139_failover: false,
            use_unicode: true,
            force_unicode: false,
            use_batching: false,
            native_os: default_native_os(),
            native_lanman: default_native_lanman(),
            receive_buffer_size: default_buffer_size(),
            send_buffer_size: default_buffer_size(),
            transaction_buffer_size: default_buffer_size(),
            notify_buffer_size: default_notify_buffer_size(),
            maximum_buffer_size: default_maximum_buffer_size(),
            buffer_cache_size: default_buffer_cache_size(),
            so_timeout: Duration::from_millis(default_so_timeout_ms()),
            conn_timeout: Duration::from_millis(default_conn_timeout_ms()),
            session_timeout: Duration::from_millis(default_session_timeout_ms()),
            response_timeout: Duration::from_millis(default_response_timeout_ms()),
            attr_cache_timeout: Duration::from_millis(default_attr_cache_timeout_ms()),
            local_port: 0,
            local_addr: None,
            logon_share: None,
            session_limit: default_session_limit(),
            max_mpx_count: default_max_mpx_count(),
            vc_number: default_vc_number(),
            capabilities: 0,
            flags2: 0,
            list_count: default_list_count(),
            list_size: default_list_size(),
            max_request_retries: default_max_request_retries(),
            ignore_copy_to_exception: false,
            strict_resource_lifecycle: false,
            trace_resource_usage: false,
            oem_encoding: default_oem_encoding(),
        }
    }
}

impl ClientConfig {
    pub(crate) fn resolve(r: &mut FieldResolver<'_>) -> Self {
        Self {
            min_version: r.dialect_or(keys::CLIENT_MIN_VERSION, default_min_version()),
            max_version: r.dialect_or(keys::CLIENT_MAX_VERSION, default_max_version()),
            use_smb2_negotiation: r.bool_or(keys::CLIENT_USE_SMB2_NEGOTIATION, false),
            require_secure_negotiate: r.bool_or(keys::CLIENT_REQUIRE_SECURE_NEGOTIATE, true),
            port139_failover: r.bool_or(keys::CLIENT_PORT139_ENABLED, false),
            use_unicode: r.bool_or(keys::CLIENT_USE_UNICODE, true),
            force_unicode: r.bool_or(keys::CLIENT_FORCE_UNICODE, false),
            use_batching: r.bool_or(keys::CLIENT_USE_BATCHING, false),
            native_os: r.string_or(keys::CLIENT_NATIVE_OS, default_native_os()),
            native_lanman: r.string_or(keys::CLIENT_NATIVE_LANMAN, default_native_lanman()),
            receive_buffer_size: r.u32_or(keys::CLIENT_RCV_BUF_SIZE, default_buffer_size()),
            send_buffer_size: r.u32_or(keys::CLIENT_SND_BUF_SIZE, default_buffer_size()),
            transaction_buffer_size: r
                .u32_or(keys::CLIENT_TRANSACTION_BUF_SIZE, default_buffer_size()),
            notify_buffer_size: r
                .u32_or(keys::CLIENT_NOTIFY_BUF_SIZE, default_notify_buffer_size()),
            maximum_buffer_size: r
                .u32_or(keys::CLIENT_MAX_BUFFER_SIZE, default_maximum_buffer_size()),
            buffer_cache_size: r.u32_or(keys::CLIENT_MAX_BUFFERS, default_buffer_cache_size()),
            so_timeout: r.duration_ms_or(keys::CLIENT_SO_TIMEOUT, default_so_timeout_ms()),
            conn_timeout: r.duration_ms_or(keys::CLIENT_CONN_TIMEOUT, default_conn_timeout_ms()),
            session_timeout: r
                .duration_ms_or(keys::CLIENT_SESSION_TIMEOUT, default_session_timeout_ms()),
            response_timeout: r
                .duration_ms_or(keys::CLIENT_RESPONSE_TIMEOUT, default_response_timeout_ms()),
            attr_cache_timeout: r.duration_ms_or(
                keys::CLIENT_ATTR_EXPIRATION_PERIOD,
                default_attr_cache_timeout_ms(),
            ),
            local_port: r.u16_or(keys::CLIENT_LPORT, 0),
            local_addr: r.opt_addr(keys::CLIENT_LADDR),
            logon_share: r.opt_string(keys::CLIENT_LOGON_SHARE),
            session_limit: r.u32_or(keys::CLIENT_SSN_LIMIT, default_session_limit()),
            max_mpx_count: r.u32_or(keys::CLIENT_MAX_MPX_COUNT, default_max_mpx_count()),
            vc_number: r.u16_or(keys::CLIENT_VC_NUMBER, default_vc_number()),
            capabilities: r.u32_or(keys::CLIENT_CAPABILITIES, 0),
            flags2: r.u16_or(keys::CLIENT_FLAGS2, 0),
            list_count: r.u32_or(keys::CLIENT_LIST_COUNT, default_list_count()),
            list_size: r.u32_or(keys::CLIENT_LIST_SIZE, default_list_size()),
            max_request_retries: r
                .u32_or(keys::CLIENT_MAX_REQUEST_RETRIES, default_max_request_retries()),
            ignore_copy_to_exception: r.bool_or(keys::CLIENT_IGNORE_COPY_TO_EXCEPTION, false),
            strict_resource_lifecycle: r.bool_or(keys::CLIENT_STRICT_RESOURCE_LIFECYCLE, false),
            trace_resource_usage: r.bool_or(keys::CLIENT_TRACE_RESOURCE_USAGE, false),
            oem_encoding: r.string_or(keys::OEM_ENCODING, default_oem_encoding()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::Properties;

    #[test]
    fn default_values_are_correct() {
        let config = ClientConfig::default();
        assert_eq!(config.min_version, DialectVersion::Smb1);
        assert_eq!(config.max_version, DialectVersion::Smb210);
        assert!(config.require_secure_negotiate);
        assert!(!config.use_smb2_negotiation);
        assert_eq!(config.receive_buffer_size, 65535);
        assert_eq!(config.notify_buffer_size, 1024);
        assert_eq!(config.maximum_buffer_size, 65536);
        assert_eq!(config.so_timeout, Duration::from_secs(35));
        assert_eq!(config.response_timeout, Duration::from_secs(30));
        assert_eq!(config.session_limit, 250);
        assert_eq!(config.list_count, 200);
        assert_eq!(config.list_size, 65435);
        assert_eq!(config.oem_encoding, "Cp850");
    }

    #[test]
    fn resolve_without_properties_equals_default() {
        let props = Properties::new();
        let mut r = FieldResolver::new(&props);
        assert_eq!(ClientConfig::resolve(&mut r), ClientConfig::default());
        assert!(r.into_errors().is_empty());
    }

    #[test]
    fn resolve_applies_overrides() {
        let props = Properties::new()
            .with("client.maxVersion", "SMB311")
            .with("client.soTimeout", "10000")
            .with("client.laddr", "192.168.1.10")
            .with("client.logonShare", "NETLOGON");
        let mut r = FieldResolver::new(&props);
        let config = ClientConfig::resolve(&mut r);
        assert_eq!(config.max_version, DialectVersion::Smb311);
        assert_eq!(config.so_timeout, Duration::from_secs(10));
        assert_eq!(config.local_addr, Some("192.168.1.10".parse().unwrap()));
        assert_eq!(config.logon_share.as_deref(), Some("NETLOGON"));
        assert!(r.into_errors().is_empty());
    }
}
