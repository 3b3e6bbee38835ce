//! Configuration resolution and the immutable configuration object.
//!
//! This module is split into logical submodules:
//! - [`client`]: Protocol negotiation, buffer, and timeout tuning ([`ClientConfig`])
//! - [`security`]: Signing, encryption, and auth hardening ([`SecurityConfig`])
//! - [`auth`]: Default and guest credentials ([`AuthConfig`])
//! - [`netbios`]: Name service parameters and resolver order ([`NetbiosConfig`], [`ResolverKind`])
//! - [`dfs`]: DFS referral behavior ([`DfsConfig`])
//! - [`validation`]: The cross-field rule set run on every candidate
//!
//! [`Config::resolve`] ties them together: coerce every field (collecting all
//! malformed values), assemble the candidate, validate it as a whole, and only
//! then freeze it.

mod auth;
mod client;
pub(crate) mod defaults;
mod dfs;
mod netbios;
mod security;
pub mod validation;

pub use auth::AuthConfig;
pub use client::ClientConfig;
pub use dfs::DfsConfig;
pub use netbios::{NetbiosConfig, ResolverKind, UnknownResolver};
pub use security::SecurityConfig;

use chrono::FixedOffset;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::command::CommandPolicy;
use crate::config::defaults::default_pid;
use crate::error::{Problem, ResolveError};
use crate::keys;
use crate::machine_id::MachineId;
use crate::properties::Properties;
use crate::resolve::FieldResolver;

/// The immutable client configuration.
///
/// Constructed once per client instance by [`Config::resolve`]; every field
/// is frozen afterwards, so arbitrarily many threads may read it concurrently
/// without synchronization and consumers may cache derived values without
/// re-checking. No accessor performs I/O or recomputation.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Protocol negotiation, buffer, and timeout tuning.
    pub client: ClientConfig,
    /// Signing, encryption, and authentication hardening.
    pub security: SecurityConfig,
    /// Default and guest credentials.
    pub auth: AuthConfig,
    /// NetBIOS name service parameters and resolver order.
    pub netbios: NetbiosConfig,
    /// DFS referral behavior.
    pub dfs: DfsConfig,
    /// Per-command batch-limit and compounding policy.
    pub policy: CommandPolicy,
    /// Machine identifier; supplied via `client.machineId` or generated from
    /// the secure random source exactly once per configuration instance.
    pub machine_id: MachineId,
    /// Process id to send (default: low 16 bits of the real process id).
    pub pid: u16,
    /// Local UTC offset captured at resolution time.
    pub local_offset: FixedOffset,
}

impl Config {
    /// Resolve a configuration from raw properties, drawing any generated
    /// machine identifier from the operating system's secure random source.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] carrying every coercion failure and every
    /// cross-field violation found; no partially-valid configuration is ever
    /// produced.
    pub fn resolve(props: &Properties) -> Result<Self, ResolveError> {
        Self::resolve_with_rng(props, &mut OsRng)
    }

    /// [`resolve`](Self::resolve) with an explicit random source, so tests
    /// and embedders can supply a deterministic one.
    ///
    /// # Errors
    ///
    /// See [`resolve`](Self::resolve).
    pub fn resolve_with_rng<R: RngCore + CryptoRng>(
        props: &Properties,
        rng: &mut R,
    ) -> Result<Self, ResolveError> {
        let mut r = FieldResolver::new(props);
        let candidate = Self::resolve_candidate(&mut r, rng);

        let mut problems: Vec<Problem> =
            r.into_errors().into_iter().map(Problem::Coercion).collect();
        if let Err(violations) = validation::validate(&candidate) {
            problems.extend(violations.into_iter().map(Problem::Validation));
        }
        if !problems.is_empty() {
            return Err(ResolveError::new(problems));
        }

        validation::warn_inconsistencies(&candidate, props.contains(keys::DFS_TTL));
        tracing::debug!(
            min = %candidate.client.min_version,
            max = %candidate.client.max_version,
            signing = candidate.security.signing_enabled,
            resolvers = candidate.netbios.resolve_order.len(),
            "configuration resolved"
        );
        Ok(candidate)
    }

    /// Coerce every field, falling back to defaults. The result is a
    /// candidate only - callers must run validation before handing it out.
    pub(crate) fn resolve_candidate<R: RngCore + CryptoRng>(
        r: &mut FieldResolver<'_>,
        rng: &mut R,
    ) -> Self {
        let machine_id = r
            .opt_machine_id(keys::CLIENT_MACHINE_ID)
            .unwrap_or_else(|| MachineId::generate(rng));
        Self {
            client: ClientConfig::resolve(r),
            security: SecurityConfig::resolve(r),
            auth: AuthConfig::resolve(r),
            netbios: NetbiosConfig::resolve(r),
            dfs: DfsConfig::resolve(r),
            policy: CommandPolicy::resolve(r),
            machine_id,
            pid: r.u16_or(keys::CLIENT_PID, default_pid()),
            local_offset: *chrono::Local::now().offset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_properties_resolve_to_documented_defaults() {
        let config = Config::resolve(&Properties::new()).unwrap();
        assert_eq!(config, {
            // The generated machine id and ambient pid/offset are the only
            // parts Default cannot predict.
            Config {
                client: ClientConfig::default(),
                security: SecurityConfig::default(),
                auth: AuthConfig::default(),
                netbios: NetbiosConfig::default(),
                dfs: DfsConfig::default(),
                policy: CommandPolicy::default(),
                machine_id: config.machine_id,
                pid: config.pid,
                local_offset: config.local_offset,
            }
        });
    }

    #[test]
    fn supplied_machine_id_is_used_verbatim() {
        let hex = "5a".repeat(32);
        let props = Properties::new().with("client.machineId", hex.clone());
        let config = Config::resolve(&props).unwrap();
        assert_eq!(config.machine_id.to_hex(), hex);
    }

    #[test]
    fn generated_machine_ids_differ_between_instances() {
        let a = Config::resolve(&Properties::new()).unwrap();
        let b = Config::resolve(&Properties::new()).unwrap();
        assert_ne!(a.machine_id, b.machine_id);
    }

    #[test]
    fn seeded_rng_makes_generation_reproducible() {
        let a = Config::resolve_with_rng(&Properties::new(), &mut StdRng::seed_from_u64(9)).unwrap();
        let b = Config::resolve_with_rng(&Properties::new(), &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a.machine_id, b.machine_id);
    }

    #[test]
    fn coercion_and_validation_problems_aggregate() {
        let props = Properties::new()
            .with("client.connTimeout", "later")
            .with("client.signingEnforced", "true");
        let err = Config::resolve(&props).unwrap_err();
        let problems = err.problems();
        assert_eq!(problems.len(), 2);
        assert!(matches!(problems[0], Problem::Coercion(_)));
        assert!(matches!(problems[1], Problem::Validation(_)));
    }

    #[test]
    fn config_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Config>();
    }
}
