//! Property key namespace.
//!
//! Every configuration attribute is addressed by one dot-separated key.
//! The key, its declared type, and its default form a compatibility contract:
//! renaming a key or changing its default is a breaking change for every
//! deployment that sets it. Durations are milliseconds unless the key's doc
//! says otherwise.

// ============================================================================
// Protocol negotiation
// ============================================================================

/// `client.minVersion` (dialect, default `SMB1`) - minimum protocol version
/// to use/allow.
pub const CLIENT_MIN_VERSION: &str = "client.minVersion";
/// `client.maxVersion` (dialect, default `SMB210`) - maximum protocol version
/// to use/allow.
pub const CLIENT_MAX_VERSION: &str = "client.maxVersion";
/// `client.useSMB2Negotiation` (bool, default `false`) - use non-backward
/// compatible SMB2-only negotiation.
pub const CLIENT_USE_SMB2_NEGOTIATION: &str = "client.useSMB2Negotiation";
/// `client.requireSecureNegotiate` (bool, default `true`) - enforce secure
/// negotiation verification.
pub const CLIENT_REQUIRE_SECURE_NEGOTIATE: &str = "client.requireSecureNegotiate";
/// `client.port139.enabled` (bool, default `false`) - fail over to the legacy
/// transport on port 139.
pub const CLIENT_PORT139_ENABLED: &str = "client.port139.enabled";
/// `client.useUnicode` (bool, default `true`) - announce unicode support.
pub const CLIENT_USE_UNICODE: &str = "client.useUnicode";
/// `client.forceUnicode` (bool, default `false`) - use unicode even if the
/// server does not announce it.
pub const CLIENT_FORCE_UNICODE: &str = "client.forceUnicode";
/// `client.useBatching` (bool, default `false`) - enable SMB1 AndX command
/// batching.
pub const CLIENT_USE_BATCHING: &str = "client.useBatching";
/// `client.nativeOs` (string, default: host OS name) - OS string to report.
pub const CLIENT_NATIVE_OS: &str = "client.nativeOs";
/// `client.nativeLanMan` (string, default `rsmb`) - LAN Manager string to
/// report.
pub const CLIENT_NATIVE_LANMAN: &str = "client.nativeLanMan";
/// `client.vcNumber` (int, default `1`) - virtual circuit number.
pub const CLIENT_VC_NUMBER: &str = "client.vcNumber";
/// `client.capabilities` (int, default `0`) - custom capability bits.
pub const CLIENT_CAPABILITIES: &str = "client.capabilities";
/// `client.flags2` (int, default `0`) - custom flags2 bits.
pub const CLIENT_FLAGS2: &str = "client.flags2";
/// `client.ssnLimit` (int, default `250`) - maximum sessions per connection.
pub const CLIENT_SSN_LIMIT: &str = "client.ssnLimit";
/// `client.maxMpxCount` (int, default `10`) - maximum concurrent commands to
/// announce.
pub const CLIENT_MAX_MPX_COUNT: &str = "client.maxMpxCount";
/// `client.maxRequestRetries` (int, default `2`) - retry requests on failure
/// up to n times.
pub const CLIENT_MAX_REQUEST_RETRIES: &str = "client.maxRequestRetries";

// ============================================================================
// Buffers
// ============================================================================

/// `client.rcv_buf_size` (int, default `65535`) - receive buffer size in
/// bytes.
pub const CLIENT_RCV_BUF_SIZE: &str = "client.rcv_buf_size";
/// `client.snd_buf_size` (int, default `65535`) - send buffer size in bytes.
pub const CLIENT_SND_BUF_SIZE: &str = "client.snd_buf_size";
/// `client.transaction_buf_size` (int, default `65535`) - maximum data size
/// for transactions.
pub const CLIENT_TRANSACTION_BUF_SIZE: &str = "client.transaction_buf_size";
/// `client.notify_buf_size` (int, default `1024`) - requested server notify
/// buffer size.
pub const CLIENT_NOTIFY_BUF_SIZE: &str = "client.notify_buf_size";
/// `client.maxBufferSize` (int, default `65536`) - ceiling for all IO
/// buffers; limits the maximum message size.
pub const CLIENT_MAX_BUFFER_SIZE: &str = "client.maxBufferSize";
/// `client.maxBuffers` (int, default `16`) - buffers to keep in the cache.
pub const CLIENT_MAX_BUFFERS: &str = "client.maxBuffers";
/// `client.listCount` (int, default `200`) - maximum elements per list
/// request.
pub const CLIENT_LIST_COUNT: &str = "client.listCount";
/// `client.listSize` (int, default `65435`) - maximum data size for list/info
/// requests.
pub const CLIENT_LIST_SIZE: &str = "client.listSize";

// ============================================================================
// Timeouts
// ============================================================================

/// `client.soTimeout` (duration, default `35000`) - socket read timeout.
pub const CLIENT_SO_TIMEOUT: &str = "client.soTimeout";
/// `client.connTimeout` (duration, default `35000`) - socket connect timeout.
pub const CLIENT_CONN_TIMEOUT: &str = "client.connTimeout";
/// `client.sessionTimeout` (duration, default `35000`) - SMB session timeout.
pub const CLIENT_SESSION_TIMEOUT: &str = "client.sessionTimeout";
/// `client.responseTimeout` (duration, default `30000`) - SMB response
/// timeout.
pub const CLIENT_RESPONSE_TIMEOUT: &str = "client.responseTimeout";
/// `client.attrExpirationPeriod` (duration, default `5000`) - file attribute
/// cache timeout.
pub const CLIENT_ATTR_EXPIRATION_PERIOD: &str = "client.attrExpirationPeriod";

// ============================================================================
// Local binding
// ============================================================================

/// `client.lport` (int, default `0` = ephemeral) - local port for outgoing
/// connections.
pub const CLIENT_LPORT: &str = "client.lport";
/// `client.laddr` (address, no default) - local address for outgoing
/// connections.
pub const CLIENT_LADDR: &str = "client.laddr";
/// `client.logonShare` (string, no default = `IPC$`) - share to connect to
/// during authentication.
pub const CLIENT_LOGON_SHARE: &str = "client.logonShare";
/// `client.pid` (int, default: low 16 bits of the process id) - process id to
/// send.
pub const CLIENT_PID: &str = "client.pid";
/// `client.machineId` (32-byte hex blob, generated when unset) - machine
/// identifier from which ClientGuid and friends are derived.
pub const CLIENT_MACHINE_ID: &str = "client.machineId";

// ============================================================================
// Signing, encryption, integrity
// ============================================================================

/// `client.signingPreferred` (bool, default `false`) - enable SMB signing if
/// available.
pub const CLIENT_SIGNING_PREFERRED: &str = "client.signingPreferred";
/// `client.signingEnforced` (bool, default `false`) - enforce SMB signing for
/// everything.
pub const CLIENT_SIGNING_ENFORCED: &str = "client.signingEnforced";
/// `client.ipcSigningEnforced` (bool, default `true`) - enforce SMB signing
/// for IPC connections.
pub const CLIENT_IPC_SIGNING_ENFORCED: &str = "client.ipcSigningEnforced";
/// `client.encryptionEnabled` (bool, default `false`) - announce SMB3
/// encryption support during negotiation.
pub const CLIENT_ENCRYPTION_ENABLED: &str = "client.encryptionEnabled";
/// `client.forceExtendedSecurity` (bool, default `false`) - force extended
/// security usage.
pub const CLIENT_FORCE_EXTENDED_SECURITY: &str = "client.forceExtendedSecurity";
/// `client.disablePlainTextPasswords` (bool, default `true`) - prohibit
/// plaintext password usage.
pub const CLIENT_DISABLE_PLAIN_TEXT_PASSWORDS: &str = "client.disablePlainTextPasswords";
/// `client.disableSpnegoIntegrity` (bool, default `false`) - disable
/// sending/verifying the SPNEGO mechanism list MIC.
pub const CLIENT_DISABLE_SPNEGO_INTEGRITY: &str = "client.disableSpnegoIntegrity";
/// `client.enforceSpnegoIntegrity` (bool, default `false`) - require
/// verification of the SPNEGO mechanism list MIC.
pub const CLIENT_ENFORCE_SPNEGO_INTEGRITY: &str = "client.enforceSpnegoIntegrity";
/// `client.SendNTLMTargetName` (bool, default `true`) - send an AvTargetName
/// with the NTLM exchange.
pub const CLIENT_SEND_NTLM_TARGET_NAME: &str = "client.SendNTLMTargetName";
/// `lmCompatibility` (int, default `3`) - LAN Manager compatibility level,
/// 0-5.
pub const LM_COMPATIBILITY: &str = "lmCompatibility";
/// `allowNTLMFallback` (bool, default `true`) - allow fallback from Kerberos
/// to NTLM.
pub const ALLOW_NTLM_FALLBACK: &str = "allowNTLMFallback";
/// `useRawNTLM` (bool, default `false`) - use raw NTLMSSP tokens instead of
/// SPNEGO-wrapped ones.
pub const USE_RAW_NTLM: &str = "useRawNTLM";

// ============================================================================
// Misc client behavior
// ============================================================================

/// `encoding` (string, default `Cp850`) - OEM encoding for legacy strings.
pub const OEM_ENCODING: &str = "encoding";
/// `client.ignoreCopyToException` (bool, default `false`) - ignore errors
/// that occur during server-side copies.
pub const CLIENT_IGNORE_COPY_TO_EXCEPTION: &str = "client.ignoreCopyToException";
/// `client.strictResourceLifecycle` (bool, default `false`) - hold trees
/// referenced as long as any file handle uses them.
pub const CLIENT_STRICT_RESOURCE_LIFECYCLE: &str = "client.strictResourceLifecycle";
/// `client.traceResourceUsage` (bool, default `false`) - track the locations
/// from which resources were created (debugging only).
pub const CLIENT_TRACE_RESOURCE_USAGE: &str = "client.traceResourceUsage";

// ============================================================================
// Credential defaults
// ============================================================================

/// `client.domain` (string, no default) - default credentials, domain name.
pub const CLIENT_DOMAIN: &str = "client.domain";
/// `client.username` (string, no default) - default credentials, user name.
pub const CLIENT_USERNAME: &str = "client.username";
/// `client.password` (string, no default) - default credentials, password.
pub const CLIENT_PASSWORD: &str = "client.password";
/// `client.guestUsername` (string, default `GUEST`) - username for guest
/// authentication.
pub const CLIENT_GUEST_USERNAME: &str = "client.guestUsername";
/// `client.guestPassword` (string, default empty) - password for guest
/// authentication.
pub const CLIENT_GUEST_PASSWORD: &str = "client.guestPassword";
/// `client.allowGuestFallback` (bool, default `false`) - permit guest logins
/// when user authentication was requested.
pub const CLIENT_ALLOW_GUEST_FALLBACK: &str = "client.allowGuestFallback";

// ============================================================================
// Name resolution
// ============================================================================

/// `resolveOrder` (resolver list, default `LMHOSTS,DNS,WINS,BCAST`) - order
/// and selection of name resolver modules.
pub const RESOLVE_ORDER: &str = "resolveOrder";
/// `netbios.hostname` (string, no default) - local NetBIOS/short name to
/// announce.
pub const NETBIOS_HOSTNAME: &str = "netbios.hostname";
/// `netbios.scope` (string, no default) - NetBIOS scope to set in requests.
pub const NETBIOS_SCOPE: &str = "netbios.scope";
/// `netbios.baddr` (address, default `255.255.255.255`) - broadcast address.
pub const NETBIOS_BADDR: &str = "netbios.baddr";
/// `netbios.wins` (address list, default empty) - WINS servers, in order of
/// preference.
pub const NETBIOS_WINS: &str = "netbios.wins";
/// `netbios.lport` (int, default `0`) - local bind port for NetBIOS
/// connections.
pub const NETBIOS_LPORT: &str = "netbios.lport";
/// `netbios.laddr` (address, no default) - local bind address for NetBIOS
/// connections.
pub const NETBIOS_LADDR: &str = "netbios.laddr";
/// `netbios.soTimeout` (duration, default `5000`) - socket timeout for
/// NetBIOS connections.
pub const NETBIOS_SO_TIMEOUT: &str = "netbios.soTimeout";
/// `netbios.snd_buf_size` (int, default `576`) - NetBIOS send buffer size.
pub const NETBIOS_SND_BUF_SIZE: &str = "netbios.snd_buf_size";
/// `netbios.rcv_buf_size` (int, default `576`) - NetBIOS receive buffer size.
pub const NETBIOS_RCV_BUF_SIZE: &str = "netbios.rcv_buf_size";
/// `netbios.retryTimeout` (duration, default `3000`) - timeout of NetBIOS
/// retry requests.
pub const NETBIOS_RETRY_TIMEOUT: &str = "netbios.retryTimeout";
/// `netbios.retryCount` (int, default `2`) - maximum retries for NetBIOS
/// requests.
pub const NETBIOS_RETRY_COUNT: &str = "netbios.retryCount";
/// `netbios.cachePolicy` (int seconds, default `600`; `0` disables caching,
/// `-1` caches forever) - name cache timeout.
pub const NETBIOS_CACHE_POLICY: &str = "netbios.cachePolicy";
/// `netbios.lmhosts` (string path, no default) - lmhosts file consulted by
/// the LMHOSTS resolver. This crate records the path; it never reads it.
pub const NETBIOS_LMHOSTS: &str = "netbios.lmhosts";

// ============================================================================
// DFS
// ============================================================================

/// `dfs.ttl` (int seconds, default `300`) - time to live for DFS cache
/// entries.
pub const DFS_TTL: &str = "dfs.ttl";
/// `dfs.strictView` (bool, default `false`) - throw on authentication errors
/// during DFS resolving.
pub const DFS_STRICT_VIEW: &str = "dfs.strictView";
/// `dfs.disabled` (bool, default `false`) - disable DFS lookups entirely.
pub const DFS_DISABLED: &str = "dfs.disabled";
/// `dfs.convertToFQDN` (bool, default `false`) - convert NetBIOS names
/// returned by DFS to FQDNs.
pub const DFS_CONVERT_TO_FQDN: &str = "dfs.convertToFQDN";

// ============================================================================
// Per-command policy
// ============================================================================

/// Key prefix for per-command batch limits: `client.batchLimit.<Command>`
/// (int). The token `default` addresses the wildcard entry.
pub const BATCH_LIMIT_PREFIX: &str = "client.batchLimit.";
/// Key prefix for per-command compounding policy:
/// `client.allowCompound.<Command>` (bool). The token `default` addresses the
/// wildcard entry.
pub const ALLOW_COMPOUND_PREFIX: &str = "client.allowCompound.";
/// Wildcard token addressing a policy table's default entry.
pub const POLICY_DEFAULT_TOKEN: &str = "default";
