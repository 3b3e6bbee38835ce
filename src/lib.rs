//! # rsmb-conf
//!
//! Configuration resolution for the rsmb SMB/CIFS client.
//!
//! This crate turns an unordered collection of raw string properties into a
//! single immutable, strongly-typed [`Config`] that every other client
//! subsystem (transport, sessions, name resolution, DFS, caching) reads for
//! its entire lifetime. Resolution runs exactly once per client instance:
//! raw properties are coerced to their declared types, missing keys fall back
//! to documented defaults, and the fully-coerced candidate is checked against
//! a fixed set of cross-field rules before anything is handed out.
//!
//! ## Features
//!
//! - Last-writer-wins property merging across ordered sources
//! - Typed coercion with per-key error reporting
//! - Cross-field validation that collects *every* violation, not just the first
//! - Per-command batch-limit and compounding policy with default fallback
//! - A frozen, `Send + Sync` configuration object with no interior mutability
//!
//! No network or disk I/O happens anywhere in this crate; property-source
//! loading is the caller's job.
//!
//! ## Quick Start
//!
//! ```rust
//! use rsmb_conf::{Config, DialectVersion, Properties};
//!
//! let mut props = Properties::new();
//! props.set("client.minVersion", "SMB202");
//! props.set("client.signingPreferred", "true");
//!
//! let config = Config::resolve(&props).expect("valid configuration");
//! assert_eq!(config.client.min_version, DialectVersion::Smb202);
//! assert!(config.security.signing_enabled);
//! ```
//!
//! Invalid input fails as a whole, with every problem reported at once:
//!
//! ```rust
//! use rsmb_conf::{Config, Properties};
//!
//! let mut props = Properties::new();
//! props.set("client.minVersion", "SMB311");
//! props.set("client.maxVersion", "SMB1");
//! props.set("client.rcv_buf_size", "banana");
//!
//! let err = Config::resolve(&props).unwrap_err();
//! assert_eq!(err.problems().len(), 3);
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod coerce;
pub mod command;
pub mod config;
pub mod dialect;
pub mod error;
pub mod keys;
pub mod machine_id;
pub mod properties;
mod resolve;
pub mod secret;

pub use self::coerce::CoercionError;
pub use self::command::{CommandPolicy, SmbCommand};
pub use self::config::validation::ValidationError;
pub use self::config::{
    AuthConfig, ClientConfig, Config, DfsConfig, NetbiosConfig, ResolverKind, SecurityConfig,
};
pub use self::dialect::DialectVersion;
pub use self::error::{Problem, ResolveError};
pub use self::machine_id::MachineId;
pub use self::properties::{Properties, PropertyError};
pub use self::secret::SecureString;
