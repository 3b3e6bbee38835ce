//! Client machine identifier.
//!
//! A 32-byte value from which per-connection identifiers (ClientGuid and
//! friends) are derived. Normally generated freshly for each configuration
//! instance; deployments that need a stable identity supply it as 64 hex
//! digits via `client.machineId`.

use std::fmt;
use std::str::FromStr;

use rand::{CryptoRng, RngCore};
use thiserror::Error;

/// Length of a machine identifier in bytes.
pub const MACHINE_ID_LEN: usize = 32;

/// A fixed-length client machine identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MachineId([u8; MACHINE_ID_LEN]);

impl MachineId {
    /// Wrap raw bytes.
    pub fn from_bytes(bytes: [u8; MACHINE_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// The raw identifier bytes.
    pub fn as_bytes(&self) -> &[u8; MACHINE_ID_LEN] {
        &self.0
    }

    /// Hex rendering of the identifier.
    pub fn to_hex(self) -> String {
        hex::encode(self.0)
    }

    /// Draw a fresh identifier from a cryptographically secure source.
    pub(crate) fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; MACHINE_ID_LEN];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }
}

/// A supplied machine identifier that is not 32 bytes of hex.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidMachineId {
    /// Decoded length differed from [`MACHINE_ID_LEN`].
    #[error("machine identifier must be {MACHINE_ID_LEN} bytes, got {0}")]
    Length(usize),
    /// The string was not valid hex.
    #[error("machine identifier is not valid hex")]
    Encoding,
}

impl FromStr for MachineId {
    type Err = InvalidMachineId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = hex::decode(s.trim()).map_err(|_| InvalidMachineId::Encoding)?;
        let bytes: [u8; MACHINE_ID_LEN] = decoded
            .try_into()
            .map_err(|v: Vec<u8>| InvalidMachineId::Length(v.len()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for MachineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for MachineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MachineId({})", self.to_hex())
    }
}
