//! Cross-field configuration validation.
//!
//! Runs after every field has been coerced. Rules inspect relationships
//! between otherwise-independent fields and collect **all** violations, so a
//! rejected configuration reports every problem at once. A handful of
//! inconsistencies are merely noted via `tracing::warn!` and do not reject.

use thiserror::Error;

use crate::config::{Config, ResolverKind};
use crate::dialect::DialectVersion;
use crate::keys;

/// Valid range for the LAN Manager compatibility level.
const LANMAN_COMPATIBILITY_RANGE: std::ops::RangeInclusive<i32> = 0..=5;
/// Maximum AndX chain length expressible on the wire.
const MAX_BATCH_LIMIT: u32 = 255;

/// A violated relationship between configuration fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `client.minVersion` exceeds `client.maxVersion`.
    #[error("client.minVersion ({min}) exceeds client.maxVersion ({max})")]
    VersionBoundsInverted {
        /// Configured minimum dialect.
        min: DialectVersion,
        /// Configured maximum dialect.
        max: DialectVersion,
    },
    /// Secure negotiation is enforced but unavailable at every allowed
    /// dialect.
    #[error(
        "client.requireSecureNegotiate is set but client.maxVersion ({max}) predates secure negotiation (SMB202)"
    )]
    SecureNegotiateUnavailable {
        /// Configured maximum dialect.
        max: DialectVersion,
    },
    /// Encryption is enabled but unavailable at every allowed dialect.
    #[error(
        "client.encryptionEnabled is set but client.maxVersion ({max}) predates SMB3 encryption (SMB300)"
    )]
    EncryptionUnavailable {
        /// Configured maximum dialect.
        max: DialectVersion,
    },
    /// Signing is enforced while signing itself is disabled.
    #[error("client.signingEnforced is set but client.signingPreferred is disabled")]
    SigningEnforcedWithoutSigning,
    /// Guest fallback would use an LM-class authentication path that the
    /// plaintext-password policy forbids.
    #[error(
        "client.allowGuestFallback with client.disablePlainTextPasswords requires lmCompatibility >= 2, got {level}"
    )]
    GuestFallbackPlainText {
        /// Configured LAN Manager compatibility level.
        level: i32,
    },
    /// LAN Manager compatibility level outside the documented range.
    #[error("lmCompatibility must be between 0 and 5, got {0}")]
    LanManCompatibilityOutOfRange(i32),
    /// A buffer size property is zero.
    #[error("{key} must be positive")]
    BufferSizeZero {
        /// The offending property key.
        key: &'static str,
    },
    /// A buffer size property exceeds the configured ceiling.
    #[error("{key} ({size}) exceeds client.maxBufferSize ({max})")]
    BufferSizeExceedsMaximum {
        /// The offending property key.
        key: &'static str,
        /// Configured buffer size.
        size: u32,
        /// Configured ceiling.
        max: u32,
    },
    /// The resolver order names no resolvers.
    #[error("resolveOrder must name at least one resolver")]
    EmptyResolveOrder,
    /// The resolver order lists the same resolver more than once.
    #[error("resolveOrder lists {0} more than once")]
    DuplicateResolver(ResolverKind),
    /// A per-command batch limit does not fit the wire format.
    #[error("{key} ({limit}) exceeds the maximum batch limit of 255")]
    BatchLimitOutOfRange {
        /// The offending property key.
        key: String,
        /// Configured batch limit.
        limit: u32,
    },
}

/// Validate a fully-coerced candidate, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    // Dialect bounds
    let min = config.client.min_version;
    let max = config.client.max_version;
    if min > max {
        errors.push(ValidationError::VersionBoundsInverted { min, max });
    }
    if config.client.require_secure_negotiate && !max.supports_secure_negotiate() {
        errors.push(ValidationError::SecureNegotiateUnavailable { max });
    }
    if config.security.encryption_enabled && !max.supports_encryption() {
        errors.push(ValidationError::EncryptionUnavailable { max });
    }

    // Signing: enforcement without capability is a contradiction, not an
    // implicit upgrade. IPC signing enforcement is exempt - it defaults on
    // while global signing defaults off.
    if config.security.signing_enforced && !config.security.signing_enabled {
        errors.push(ValidationError::SigningEnforcedWithoutSigning);
    }

    // Authentication levels
    let level = config.security.lanman_compatibility;
    if !LANMAN_COMPATIBILITY_RANGE.contains(&level) {
        errors.push(ValidationError::LanManCompatibilityOutOfRange(level));
    } else if config.auth.allow_guest_fallback
        && config.security.disable_plain_text_passwords
        && level < 2
    {
        errors.push(ValidationError::GuestFallbackPlainText { level });
    }

    // Buffer sizes
    let ceiling = config.client.maximum_buffer_size;
    for (key, size) in [
        (keys::CLIENT_RCV_BUF_SIZE, config.client.receive_buffer_size),
        (keys::CLIENT_SND_BUF_SIZE, config.client.send_buffer_size),
        (
            keys::CLIENT_TRANSACTION_BUF_SIZE,
            config.client.transaction_buffer_size,
        ),
        (
            keys::CLIENT_NOTIFY_BUF_SIZE,
            config.client.notify_buffer_size,
        ),
    ] {
        if size == 0 {
            errors.push(ValidationError::BufferSizeZero { key });
        } else if size > ceiling {
            errors.push(ValidationError::BufferSizeExceedsMaximum {
                key,
                size,
                max: ceiling,
            });
        }
    }

    // Resolver order
    let order = &config.netbios.resolve_order;
    if order.is_empty() {
        errors.push(ValidationError::EmptyResolveOrder);
    }
    let mut seen = Vec::with_capacity(order.len());
    for &kind in order {
        if seen.contains(&kind) {
            if !errors
                .iter()
                .any(|e| matches!(e, ValidationError::DuplicateResolver(k) if *k == kind))
            {
                errors.push(ValidationError::DuplicateResolver(kind));
            }
        } else {
            seen.push(kind);
        }
    }

    // Command policy
    for (cmd, limit) in config.policy.batch_entries() {
        if limit > MAX_BATCH_LIMIT {
            errors.push(ValidationError::BatchLimitOutOfRange {
                key: format!("{}{}", keys::BATCH_LIMIT_PREFIX, cmd),
                limit,
            });
        }
    }
    if config.policy.default_batch_limit() > MAX_BATCH_LIMIT {
        errors.push(ValidationError::BatchLimitOutOfRange {
            key: format!(
                "{}{}",
                keys::BATCH_LIMIT_PREFIX,
                keys::POLICY_DEFAULT_TOKEN
            ),
            limit: config.policy.default_batch_limit(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Emit warnings for configurations that are consistent enough to accept but
/// unlikely to mean what the operator intended.
pub(crate) fn warn_inconsistencies(config: &Config, dfs_ttl_configured: bool) {
    if config.dfs.disabled && dfs_ttl_configured {
        tracing::warn!(
            ttl_secs = config.dfs.ttl.as_secs(),
            "dfs.ttl is configured but dfs.disabled is set; the TTL will never be consulted"
        );
    }

    if config.netbios.resolve_order.contains(&ResolverKind::Wins)
        && config.netbios.wins_servers.is_empty()
    {
        tracing::warn!(
            "resolveOrder includes WINS but netbios.wins names no servers; the WINS resolver will be skipped"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::Properties;
    use crate::resolve::FieldResolver;

    fn resolve_candidate(props: &Properties) -> Config {
        let mut r = FieldResolver::new(props);
        let candidate = Config::resolve_candidate(&mut r, &mut deterministic_rng());
        assert!(
            r.into_errors().is_empty(),
            "candidate should coerce cleanly"
        );
        candidate
    }

    fn deterministic_rng() -> impl rand::RngCore + rand::CryptoRng {
        use rand::SeedableRng;
        rand::rngs::StdRng::seed_from_u64(0)
    }

    #[test]
    fn test_default_config_passes() {
        let config = resolve_candidate(&Properties::new());
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_inverted_version_bounds_fail() {
        let props = Properties::new()
            .with("client.minVersion", "SMB311")
            .with("client.maxVersion", "SMB202");
        let errors = validate(&resolve_candidate(&props)).unwrap_err();
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::VersionBoundsInverted {
                min: DialectVersion::Smb311,
                max: DialectVersion::Smb202
            }
        )));
    }

    #[test]
    fn test_secure_negotiate_requires_smb2_in_range() {
        let props = Properties::new()
            .with("client.minVersion", "SMB1")
            .with("client.maxVersion", "SMB1");
        let errors = validate(&resolve_candidate(&props)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::SecureNegotiateUnavailable { .. })));

        // Dropping the enforcement makes the same bound valid.
        let props = props.with("client.requireSecureNegotiate", "false");
        assert!(validate(&resolve_candidate(&props)).is_ok());
    }

    #[test]
    fn test_encryption_requires_smb3_in_range() {
        let props = Properties::new().with("client.encryptionEnabled", "true");
        let errors = validate(&resolve_candidate(&props)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::EncryptionUnavailable { .. })));

        let props = props.with("client.maxVersion", "SMB300");
        assert!(validate(&resolve_candidate(&props)).is_ok());
    }

    #[test]
    fn test_signing_enforcement_requires_signing() {
        let props = Properties::new().with("client.signingEnforced", "true");
        let errors = validate(&resolve_candidate(&props)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::SigningEnforcedWithoutSigning)));

        let props = props.with("client.signingPreferred", "true");
        assert!(validate(&resolve_candidate(&props)).is_ok());
    }

    #[test]
    fn test_lanman_level_out_of_range_fails_not_clamps() {
        for bad in ["-1", "6"] {
            let props = Properties::new().with("lmCompatibility", bad);
            let errors = validate(&resolve_candidate(&props)).unwrap_err();
            assert!(errors
                .iter()
                .any(|e| matches!(e, ValidationError::LanManCompatibilityOutOfRange(_))));
        }
    }

    #[test]
    fn test_guest_fallback_with_lm_levels_and_plaintext_disabled() {
        let props = Properties::new()
            .with("client.allowGuestFallback", "true")
            .with("lmCompatibility", "1");
        let errors = validate(&resolve_candidate(&props)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::GuestFallbackPlainText { level: 1 })));

        // NTLMv2-only keeps guest fallback usable.
        let props = Properties::new().with("client.allowGuestFallback", "true");
        assert!(validate(&resolve_candidate(&props)).is_ok());

        // So does explicitly permitting plaintext.
        let props = Properties::new()
            .with("client.allowGuestFallback", "true")
            .with("lmCompatibility", "1")
            .with("client.disablePlainTextPasswords", "false");
        assert!(validate(&resolve_candidate(&props)).is_ok());
    }

    #[test]
    fn test_buffer_sizes_must_be_positive_and_bounded() {
        let props = Properties::new()
            .with("client.rcv_buf_size", "0")
            .with("client.snd_buf_size", "70000");
        let errors = validate(&resolve_candidate(&props)).unwrap_err();
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::BufferSizeZero {
                key: keys::CLIENT_RCV_BUF_SIZE
            }
        )));
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::BufferSizeExceedsMaximum {
                key: keys::CLIENT_SND_BUF_SIZE,
                size: 70000,
                max: 65536
            }
        )));
    }

    #[test]
    fn test_raising_the_ceiling_admits_larger_buffers() {
        let props = Properties::new()
            .with("client.snd_buf_size", "70000")
            .with("client.maxBufferSize", "131072");
        assert!(validate(&resolve_candidate(&props)).is_ok());
    }

    #[test]
    fn test_resolve_order_duplicates_fail_once_per_kind() {
        let props = Properties::new().with("resolveOrder", "DNS,DNS,DNS,WINS");
        let errors = validate(&resolve_candidate(&props)).unwrap_err();
        let duplicates: Vec<_> = errors
            .iter()
            .filter(|e| matches!(e, ValidationError::DuplicateResolver(_)))
            .collect();
        assert_eq!(duplicates.len(), 1);
    }

    #[test]
    fn test_batch_limit_above_wire_maximum_fails() {
        let props = Properties::new().with("client.batchLimit.ReadAndX", "300");
        let errors = validate(&resolve_candidate(&props)).unwrap_err();
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::BatchLimitOutOfRange { limit: 300, .. }
        )));
    }

    #[test]
    fn test_all_violations_are_collected() {
        let props = Properties::new()
            .with("client.minVersion", "SMB311")
            .with("client.maxVersion", "SMB1")
            .with("client.signingEnforced", "true")
            .with("lmCompatibility", "9");
        let errors = validate(&resolve_candidate(&props)).unwrap_err();
        // Inverted bounds, secure negotiate unavailable (default on),
        // enforcement without signing, bad lanman level.
        assert_eq!(errors.len(), 4);
    }
}
