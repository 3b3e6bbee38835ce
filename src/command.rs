//! Protocol commands and per-command policy.
//!
//! Two client behaviors are tuned per command rather than globally: how many
//! follow-up commands may be chained onto an SMB1 AndX request (the batch
//! limit) and whether an SMB2 request may participate in a compound chain.
//! Both lookups are exact-match with a designated default entry for commands
//! that carry no entry of their own.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coerce::{parse_bool, parse_command, parse_u32};
use crate::keys;
use crate::resolve::FieldResolver;

/// Protocol commands subject to per-command policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SmbCommand {
    /// `SMB_COM_NEGOTIATE`
    Negotiate,
    /// `SMB_COM_SESSION_SETUP_ANDX`
    SessionSetupAndX,
    /// `SMB_COM_LOGOFF_ANDX`
    LogoffAndX,
    /// `SMB_COM_TREE_CONNECT_ANDX`
    TreeConnectAndX,
    /// `SMB_COM_TREE_DISCONNECT`
    TreeDisconnect,
    /// `SMB_COM_OPEN_ANDX`
    OpenAndX,
    /// `SMB_COM_NT_CREATE_ANDX`
    NtCreateAndX,
    /// `SMB_COM_READ_ANDX`
    ReadAndX,
    /// `SMB_COM_WRITE_ANDX`
    WriteAndX,
    /// `SMB_COM_CLOSE`
    Close,
    /// `SMB_COM_TRANSACTION`
    Transaction,
    /// `SMB_COM_TRANSACTION2`
    Transaction2,
    /// `SMB_COM_QUERY_INFORMATION`
    QueryInformation,
    /// `SMB_COM_CHECK_DIRECTORY`
    CheckDirectory,
    /// `SMB_COM_DELETE`
    Delete,
    /// `SMB_COM_RENAME`
    Rename,
    /// `SMB_COM_ECHO`
    Echo,
    /// `SMB2 NEGOTIATE`
    Smb2Negotiate,
    /// `SMB2 SESSION_SETUP`
    Smb2SessionSetup,
    /// `SMB2 TREE_CONNECT`
    Smb2TreeConnect,
    /// `SMB2 CREATE`
    Smb2Create,
    /// `SMB2 CLOSE`
    Smb2Close,
    /// `SMB2 READ`
    Smb2Read,
    /// `SMB2 WRITE`
    Smb2Write,
    /// `SMB2 FLUSH`
    Smb2Flush,
    /// `SMB2 IOCTL`
    Smb2Ioctl,
    /// `SMB2 QUERY_DIRECTORY`
    Smb2QueryDirectory,
    /// `SMB2 ECHO`
    Smb2Echo,
}

/// All policy-addressable commands.
pub const COMMANDS: &[SmbCommand] = &[
    SmbCommand::Negotiate,
    SmbCommand::SessionSetupAndX,
    SmbCommand::LogoffAndX,
    SmbCommand::TreeConnectAndX,
    SmbCommand::TreeDisconnect,
    SmbCommand::OpenAndX,
    SmbCommand::NtCreateAndX,
    SmbCommand::ReadAndX,
    SmbCommand::WriteAndX,
    SmbCommand::Close,
    SmbCommand::Transaction,
    SmbCommand::Transaction2,
    SmbCommand::QueryInformation,
    SmbCommand::CheckDirectory,
    SmbCommand::Delete,
    SmbCommand::Rename,
    SmbCommand::Echo,
    SmbCommand::Smb2Negotiate,
    SmbCommand::Smb2SessionSetup,
    SmbCommand::Smb2TreeConnect,
    SmbCommand::Smb2Create,
    SmbCommand::Smb2Close,
    SmbCommand::Smb2Read,
    SmbCommand::Smb2Write,
    SmbCommand::Smb2Flush,
    SmbCommand::Smb2Ioctl,
    SmbCommand::Smb2QueryDirectory,
    SmbCommand::Smb2Echo,
];

impl SmbCommand {
    /// Canonical name used in policy property keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Negotiate => "Negotiate",
            Self::SessionSetupAndX => "SessionSetupAndX",
            Self::LogoffAndX => "LogoffAndX",
            Self::TreeConnectAndX => "TreeConnectAndX",
            Self::TreeDisconnect => "TreeDisconnect",
            Self::OpenAndX => "OpenAndX",
            Self::NtCreateAndX => "NtCreateAndX",
            Self::ReadAndX => "ReadAndX",
            Self::WriteAndX => "WriteAndX",
            Self::Close => "Close",
            Self::Transaction => "Transaction",
            Self::Transaction2 => "Transaction2",
            Self::QueryInformation => "QueryInformation",
            Self::CheckDirectory => "CheckDirectory",
            Self::Delete => "Delete",
            Self::Rename => "Rename",
            Self::Echo => "Echo",
            Self::Smb2Negotiate => "Smb2Negotiate",
            Self::Smb2SessionSetup => "Smb2SessionSetup",
            Self::Smb2TreeConnect => "Smb2TreeConnect",
            Self::Smb2Create => "Smb2Create",
            Self::Smb2Close => "Smb2Close",
            Self::Smb2Read => "Smb2Read",
            Self::Smb2Write => "Smb2Write",
            Self::Smb2Flush => "Smb2Flush",
            Self::Smb2Ioctl => "Smb2Ioctl",
            Self::Smb2QueryDirectory => "Smb2QueryDirectory",
            Self::Smb2Echo => "Smb2Echo",
        }
    }
}

impl fmt::Display for SmbCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A command token that names no known command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown SMB command: {0}")]
pub struct UnknownCommand(pub String);

impl FromStr for SmbCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        COMMANDS
            .iter()
            .find(|cmd| cmd.as_str() == token)
            .copied()
            .ok_or_else(|| UnknownCommand(token.to_string()))
    }
}

/// Frozen per-command policy table.
///
/// Built once alongside the configuration object from the same
/// raw/default/validate pipeline; queried by consumers at runtime. Lookups
/// are exact-match first, falling back to the default entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandPolicy {
    batch_limits: HashMap<SmbCommand, u32>,
    default_batch_limit: u32,
    compound_allowed: HashMap<SmbCommand, bool>,
    default_compound_allowed: bool,
}

impl Default for CommandPolicy {
    /// The built-in table: AndX requests that commonly carry one chained
    /// follow-up get a limit of 1; session setup and tree connect cannot be
    /// compounded in SMB2 chains.
    fn default() -> Self {
        let batch_limits = HashMap::from([
            (SmbCommand::SessionSetupAndX, 1),
            (SmbCommand::TreeConnectAndX, 1),
            (SmbCommand::OpenAndX, 1),
            (SmbCommand::NtCreateAndX, 0),
            (SmbCommand::ReadAndX, 1),
            (SmbCommand::WriteAndX, 1),
        ]);
        let compound_allowed = HashMap::from([
            (SmbCommand::Smb2SessionSetup, false),
            (SmbCommand::Smb2TreeConnect, false),
        ]);
        Self {
            batch_limits,
            default_batch_limit: 0,
            compound_allowed,
            default_compound_allowed: true,
        }
    }
}

impl CommandPolicy {
    /// Maximum number of follow-up commands that may be chained after `cmd`.
    pub fn batch_limit(&self, cmd: SmbCommand) -> u32 {
        self.batch_limits
            .get(&cmd)
            .copied()
            .unwrap_or(self.default_batch_limit)
    }

    /// Whether `cmd` may participate in an SMB2 compound chain.
    pub fn is_compound_allowed(&self, cmd: SmbCommand) -> bool {
        self.compound_allowed
            .get(&cmd)
            .copied()
            .unwrap_or(self.default_compound_allowed)
    }

    /// Batch limit of the wildcard entry.
    pub fn default_batch_limit(&self) -> u32 {
        self.default_batch_limit
    }

    /// Compounding policy of the wildcard entry.
    pub fn default_compound_allowed(&self) -> bool {
        self.default_compound_allowed
    }

    /// Entries of the batch-limit table, for validation.
    pub(crate) fn batch_entries(&self) -> impl Iterator<Item = (SmbCommand, u32)> + '_ {
        self.batch_limits.iter().map(|(cmd, limit)| (*cmd, *limit))
    }

    /// Overlay `client.batchLimit.*` and `client.allowCompound.*` properties
    /// onto the built-in table. Unknown command tokens and malformed values
    /// are recorded as coercion errors.
    pub(crate) fn resolve(r: &mut FieldResolver<'_>) -> Self {
        let mut policy = Self::default();

        for (key, value) in r.props().with_prefix(keys::BATCH_LIMIT_PREFIX) {
            let token = &key[keys::BATCH_LIMIT_PREFIX.len()..];
            if token == keys::POLICY_DEFAULT_TOKEN {
                match parse_u32(key, value) {
                    Ok(limit) => policy.default_batch_limit = limit,
                    Err(e) => r.record(e),
                }
                continue;
            }
            match parse_command(key, token) {
                Ok(cmd) => match parse_u32(key, value) {
                    Ok(limit) => {
                        policy.batch_limits.insert(cmd, limit);
                    }
                    Err(e) => r.record(e),
                },
                Err(e) => r.record(e),
            }
        }

        for (key, value) in r.props().with_prefix(keys::ALLOW_COMPOUND_PREFIX) {
            let token = &key[keys::ALLOW_COMPOUND_PREFIX.len()..];
            if token == keys::POLICY_DEFAULT_TOKEN {
                match parse_bool(key, value) {
                    Ok(allowed) => policy.default_compound_allowed = allowed,
                    Err(e) => r.record(e),
                }
                continue;
            }
            match parse_command(key, token) {
                Ok(cmd) => match parse_bool(key, value) {
                    Ok(allowed) => {
                        policy.compound_allowed.insert(cmd, allowed);
                    }
                    Err(e) => r.record(e),
                },
                Err(e) => r.record(e),
            }
        }

        policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_names_round_trip() {
        for &cmd in COMMANDS {
            assert_eq!(cmd.as_str().parse::<SmbCommand>().unwrap(), cmd);
        }
    }

    #[test]
    fn unknown_command_is_rejected() {
        let err = "FooAndX".parse::<SmbCommand>().unwrap_err();
        assert_eq!(err, UnknownCommand("FooAndX".to_string()));
    }

    #[test]
    fn builtin_table_has_andx_chain_allowances() {
        let policy = CommandPolicy::default();
        assert_eq!(policy.batch_limit(SmbCommand::ReadAndX), 1);
        assert_eq!(policy.batch_limit(SmbCommand::NtCreateAndX), 0);
    }

    #[test]
    fn unlisted_command_falls_back_to_default_entry() {
        let policy = CommandPolicy::default();
        assert_eq!(
            policy.batch_limit(SmbCommand::Echo),
            policy.default_batch_limit()
        );
        assert!(policy.is_compound_allowed(SmbCommand::Smb2Read));
    }

    #[test]
    fn session_setup_and_tree_connect_are_not_compoundable() {
        let policy = CommandPolicy::default();
        assert!(!policy.is_compound_allowed(SmbCommand::Smb2SessionSetup));
        assert!(!policy.is_compound_allowed(SmbCommand::Smb2TreeConnect));
    }
}
