//! SMB protocol dialect versions.
//!
//! Dialects form a total order; configuration carries an inclusive
//! `(minimum, maximum)` bound drawn from it. Capability predicates live here
//! so validation rules can ask "is secure negotiation reachable in this
//! range" without hardcoding dialect comparisons elsewhere.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An SMB protocol dialect, ordered from oldest to newest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum DialectVersion {
    /// Legacy SMB1/CIFS.
    Smb1,
    /// SMB 2.0.2, the first SMB2 dialect.
    Smb202,
    /// SMB 2.1.
    Smb210,
    /// SMB 3.0.
    Smb300,
    /// SMB 3.0.2.
    Smb302,
    /// SMB 3.1.1.
    Smb311,
}

/// All dialects, oldest first.
pub const DIALECTS: &[DialectVersion] = &[
    DialectVersion::Smb1,
    DialectVersion::Smb202,
    DialectVersion::Smb210,
    DialectVersion::Smb300,
    DialectVersion::Smb302,
    DialectVersion::Smb311,
];

impl DialectVersion {
    /// Canonical configuration string for this dialect.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Smb1 => "SMB1",
            Self::Smb202 => "SMB202",
            Self::Smb210 => "SMB210",
            Self::Smb300 => "SMB300",
            Self::Smb302 => "SMB302",
            Self::Smb311 => "SMB311",
        }
    }

    /// Whether this is an SMB2-family dialect.
    pub fn is_smb2(self) -> bool {
        self >= Self::Smb202
    }

    /// Whether secure negotiation is available at this dialect.
    ///
    /// SMB1 has no secure negotiation at all; every SMB2+ dialect can either
    /// validate the negotiation (3.x) or sign the negotiate response (2.x).
    pub fn supports_secure_negotiate(self) -> bool {
        self >= Self::Smb202
    }

    /// Whether transparent encryption is available at this dialect (SMB3+).
    pub fn supports_encryption(self) -> bool {
        self >= Self::Smb300
    }
}

impl fmt::Display for DialectVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dialect string that names no known dialect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown SMB dialect: {0}")]
pub struct UnknownDialect(pub String);

impl FromStr for DialectVersion {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "SMB1" => Ok(Self::Smb1),
            "SMB202" => Ok(Self::Smb202),
            "SMB210" => Ok(Self::Smb210),
            "SMB300" => Ok(Self::Smb300),
            "SMB302" => Ok(Self::Smb302),
            "SMB311" => Ok(Self::Smb311),
            other => Err(UnknownDialect(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_oldest_to_newest() {
        assert!(DialectVersion::Smb1 < DialectVersion::Smb202);
        assert!(DialectVersion::Smb202 < DialectVersion::Smb210);
        assert!(DialectVersion::Smb210 < DialectVersion::Smb300);
        assert!(DialectVersion::Smb300 < DialectVersion::Smb302);
        assert!(DialectVersion::Smb302 < DialectVersion::Smb311);
    }

    #[test]
    fn dialects_slice_is_sorted_and_complete() {
        assert_eq!(DIALECTS.len(), 6);
        assert!(DIALECTS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn round_trips_through_strings() {
        for &dialect in DIALECTS {
            assert_eq!(dialect.as_str().parse::<DialectVersion>().unwrap(), dialect);
        }
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(
            " SMB311 ".parse::<DialectVersion>().unwrap(),
            DialectVersion::Smb311
        );
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "SMB4".parse::<DialectVersion>().unwrap_err();
        assert_eq!(err, UnknownDialect("SMB4".to_string()));
    }

    #[test]
    fn secure_negotiate_requires_smb2() {
        assert!(!DialectVersion::Smb1.supports_secure_negotiate());
        assert!(DialectVersion::Smb202.supports_secure_negotiate());
        assert!(DialectVersion::Smb311.supports_secure_negotiate());
    }

    #[test]
    fn encryption_requires_smb3() {
        assert!(!DialectVersion::Smb210.supports_encryption());
        assert!(DialectVersion::Smb300.supports_encryption());
    }
}
