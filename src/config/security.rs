//! Signing, encryption, and authentication hardening configuration.

use crate::config::defaults::default_lanman_compatibility;
use crate::keys;
use crate::resolve::FieldResolver;

/// Security posture knobs.
///
/// These fields are individually simple but related: the validator rejects
/// contradictions such as enforcing signing while signing is disabled, or
/// enforcing secure negotiation when no dialect in the allowed range can
/// provide it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityConfig {
    /// Enable SMB signing when the server offers it (default: false).
    pub signing_enabled: bool,
    /// Require SMB signing for all connections (default: false).
    pub signing_enforced: bool,
    /// Require SMB signing for IPC connections (default: true).
    pub ipc_signing_enforced: bool,
    /// Announce SMB3 encryption support during negotiation (default: false).
    pub encryption_enabled: bool,
    /// Force extended security usage (default: false).
    pub force_extended_security: bool,
    /// Prohibit plaintext password usage (default: true).
    pub disable_plain_text_passwords: bool,
    /// LAN Manager compatibility level, 0-5 (default: 3, NTLMv2 only).
    ///
    /// 0-1 send LM and NTLM responses, 2 NTLM only, 3-5 NTLMv2 only.
    pub lanman_compatibility: i32,
    /// Allow fallback from Kerberos to NTLM (default: true).
    pub allow_ntlm_fallback: bool,
    /// Use raw NTLMSSP tokens instead of SPNEGO-wrapped ones (default: false).
    pub use_raw_ntlm: bool,
    /// Disable sending/verifying the SPNEGO mechanism list MIC
    /// (default: false).
    pub disable_spnego_integrity: bool,
    /// Require verification of the SPNEGO mechanism list MIC
    /// (default: false).
    pub enforce_spnego_integrity: bool,
    /// Send an AvTargetName with the NTLM exchange (default: true).
    pub send_ntlm_target_name: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            signing_enabled: false,
            signing_enforced: false,
            ipc_signing_enforced: true,
            encryption_enabled: false,
            force_extended_security: false,
            disable_plain_text_passwords: true,
            lanman_compatibility: default_lanman_compatibility(),
            allow_ntlm_fallback: true,
            use_raw_ntlm: false,
            disable_spnego_integrity: false,
            enforce_spnego_integrity: false,
            send_ntlm_target_name: true,
        }
    }
}

impl SecurityConfig {
    pub(crate) fn resolve(r: &mut FieldResolver<'_>) -> Self {
        Self {
            signing_enabled: r.bool_or(keys::CLIENT_SIGNING_PREFERRED, false),
            signing_enforced: r.bool_or(keys::CLIENT_SIGNING_ENFORCED, false),
            ipc_signing_enforced: r.bool_or(keys::CLIENT_IPC_SIGNING_ENFORCED, true),
            encryption_enabled: r.bool_or(keys::CLIENT_ENCRYPTION_ENABLED, false),
            force_extended_security: r.bool_or(keys::CLIENT_FORCE_EXTENDED_SECURITY, false),
            disable_plain_text_passwords: r
                .bool_or(keys::CLIENT_DISABLE_PLAIN_TEXT_PASSWORDS, true),
            lanman_compatibility: r.i32_or(keys::LM_COMPATIBILITY, default_lanman_compatibility()),
            allow_ntlm_fallback: r.bool_or(keys::ALLOW_NTLM_FALLBACK, true),
            use_raw_ntlm: r.bool_or(keys::USE_RAW_NTLM, false),
            disable_spnego_integrity: r.bool_or(keys::CLIENT_DISABLE_SPNEGO_INTEGRITY, false),
            enforce_spnego_integrity: r.bool_or(keys::CLIENT_ENFORCE_SPNEGO_INTEGRITY, false),
            send_ntlm_target_name: r.bool_or(keys::CLIENT_SEND_NTLM_TARGET_NAME, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::Properties;

    #[test]
    fn defaults_are_ntlmv2_with_ipc_signing() {
        let config = SecurityConfig::default();
        assert!(!config.signing_enabled);
        assert!(!config.signing_enforced);
        assert!(config.ipc_signing_enforced);
        assert!(config.disable_plain_text_passwords);
        assert_eq!(config.lanman_compatibility, 3);
        assert!(config.allow_ntlm_fallback);
        assert!(config.send_ntlm_target_name);
    }

    #[test]
    fn resolve_reads_signing_flags() {
        let props = Properties::new()
            .with("client.signingPreferred", "true")
            .with("client.signingEnforced", "true")
            .with("lmCompatibility", "5");
        let mut r = FieldResolver::new(&props);
        let config = SecurityConfig::resolve(&mut r);
        assert!(config.signing_enabled);
        assert!(config.signing_enforced);
        assert_eq!(config.lanman_compatibility, 5);
        assert!(r.into_errors().is_empty());
    }

    #[test]
    fn negative_lanman_level_survives_coercion() {
        // Range checking is the validator's job; the coercer only types it.
        let props = Properties::new().with("lmCompatibility", "-1");
        let mut r = FieldResolver::new(&props);
        let config = SecurityConfig::resolve(&mut r);
        assert_eq!(config.lanman_compatibility, -1);
        assert!(r.into_errors().is_empty());
    }
}
