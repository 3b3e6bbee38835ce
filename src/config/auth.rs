//! Default and guest credential configuration.

use crate::config::defaults::default_guest_username;
use crate::keys;
use crate::resolve::FieldResolver;
use crate::secret::SecureString;

/// Credentials used when the caller supplies none of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Default credentials, domain name.
    pub default_domain: Option<String>,
    /// Default credentials, user name.
    pub default_username: Option<String>,
    /// Default credentials, password. Zeroized on drop.
    pub default_password: Option<SecureString>,
    /// Username used when guest authentication is requested
    /// (default: "GUEST").
    pub guest_username: String,
    /// Password used when guest authentication is requested (default: empty).
    /// Zeroized on drop.
    pub guest_password: SecureString,
    /// Permit guest logins when user authentication was requested
    /// (default: false).
    pub allow_guest_fallback: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            default_domain: None,
            default_username: None,
            default_password: None,
            guest_username: default_guest_username(),
            guest_password: SecureString::default(),
            allow_guest_fallback: false,
        }
    }
}

impl AuthConfig {
    pub(crate) fn resolve(r: &mut FieldResolver<'_>) -> Self {
        Self {
            default_domain: r.opt_string(keys::CLIENT_DOMAIN),
            default_username: r.opt_string(keys::CLIENT_USERNAME),
            default_password: r.opt_secret(keys::CLIENT_PASSWORD),
            guest_username: r.string_or(keys::CLIENT_GUEST_USERNAME, default_guest_username()),
            guest_password: r.secret_or(keys::CLIENT_GUEST_PASSWORD, ""),
            allow_guest_fallback: r.bool_or(keys::CLIENT_ALLOW_GUEST_FALLBACK, false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::Properties;

    #[test]
    fn defaults_have_no_credentials_and_guest_disabled() {
        let config = AuthConfig::default();
        assert!(config.default_domain.is_none());
        assert!(config.default_username.is_none());
        assert!(config.default_password.is_none());
        assert_eq!(config.guest_username, "GUEST");
        assert!(config.guest_password.is_empty());
        assert!(!config.allow_guest_fallback);
    }

    #[test]
    fn resolve_reads_credentials() {
        let props = Properties::new()
            .with("client.domain", "WORKGROUP")
            .with("client.username", "backup")
            .with("client.password", "s3cret");
        let mut r = FieldResolver::new(&props);
        let config = AuthConfig::resolve(&mut r);
        assert_eq!(config.default_domain.as_deref(), Some("WORKGROUP"));
        assert_eq!(config.default_username.as_deref(), Some("backup"));
        assert_eq!(
            config.default_password,
            Some(SecureString::new("s3cret"))
        );
        assert!(r.into_errors().is_empty());
    }

    #[test]
    fn password_debug_output_is_redacted() {
        let props = Properties::new().with("client.password", "s3cret");
        let mut r = FieldResolver::new(&props);
        let config = AuthConfig::resolve(&mut r);
        assert!(!format!("{config:?}").contains("s3cret"));
    }
}
