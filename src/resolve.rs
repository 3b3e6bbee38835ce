//! Property-to-field resolution.
//!
//! [`FieldResolver`] walks the raw store one key at a time: present values
//! are coerced, absent keys fall back to the caller's default, and coercion
//! failures are recorded and replaced by the default so a single resolution
//! pass reports every malformed value instead of stopping at the first.

use std::net::IpAddr;
use std::time::Duration;

use crate::coerce::{
    self, parse_addr, parse_addr_list, parse_bool, parse_dialect, parse_duration_ms,
    parse_duration_secs, parse_i32, parse_machine_id, parse_resolve_order, parse_u16, parse_u32,
    CoercionError,
};
use crate::config::ResolverKind;
use crate::dialect::DialectVersion;
use crate::machine_id::MachineId;
use crate::properties::Properties;
use crate::secret::SecureString;

pub(crate) struct FieldResolver<'a> {
    props: &'a Properties,
    errors: Vec<CoercionError>,
}

impl<'a> FieldResolver<'a> {
    pub(crate) fn new(props: &'a Properties) -> Self {
        Self {
            props,
            errors: Vec::new(),
        }
    }

    /// The underlying store. The returned reference is independent of the
    /// resolver borrow, so callers can iterate it while recording errors.
    pub(crate) fn props(&self) -> &'a Properties {
        self.props
    }

    pub(crate) fn record(&mut self, error: CoercionError) {
        self.errors.push(error);
    }

    pub(crate) fn into_errors(self) -> Vec<CoercionError> {
        self.errors
    }

    fn coerce_or<T>(
        &mut self,
        key: &str,
        default: T,
        parse: impl FnOnce(&str, &str) -> Result<T, CoercionError>,
    ) -> T {
        match self.props.get(key) {
            None => default,
            Some(raw) => match parse(key, raw) {
                Ok(value) => value,
                Err(error) => {
                    self.record(error);
                    default
                }
            },
        }
    }

    fn coerce_opt<T>(
        &mut self,
        key: &str,
        parse: impl FnOnce(&str, &str) -> Result<T, CoercionError>,
    ) -> Option<T> {
        match self.props.get(key) {
            None => None,
            Some(raw) => match parse(key, raw) {
                Ok(value) => Some(value),
                Err(error) => {
                    self.record(error);
                    None
                }
            },
        }
    }

    pub(crate) fn bool_or(&mut self, key: &str, default: bool) -> bool {
        self.coerce_or(key, default, parse_bool)
    }

    pub(crate) fn u32_or(&mut self, key: &str, default: u32) -> u32 {
        self.coerce_or(key, default, parse_u32)
    }

    pub(crate) fn u16_or(&mut self, key: &str, default: u16) -> u16 {
        self.coerce_or(key, default, parse_u16)
    }

    pub(crate) fn i32_or(&mut self, key: &str, default: i32) -> i32 {
        self.coerce_or(key, default, parse_i32)
    }

    pub(crate) fn i64_or(&mut self, key: &str, default: i64) -> i64 {
        self.coerce_or(key, default, coerce::parse_i64)
    }

    pub(crate) fn duration_ms_or(&mut self, key: &str, default_ms: u64) -> Duration {
        self.coerce_or(key, Duration::from_millis(default_ms), parse_duration_ms)
    }

    pub(crate) fn duration_secs_or(&mut self, key: &str, default_secs: u64) -> Duration {
        self.coerce_or(key, Duration::from_secs(default_secs), parse_duration_secs)
    }

    pub(crate) fn string_or(&mut self, key: &str, default: impl Into<String>) -> String {
        match self.props.get(key) {
            Some(raw) => raw.to_string(),
            None => default.into(),
        }
    }

    pub(crate) fn opt_string(&mut self, key: &str) -> Option<String> {
        self.props.get(key).map(str::to_string)
    }

    pub(crate) fn secret_or(&mut self, key: &str, default: &str) -> SecureString {
        match self.props.get(key) {
            Some(raw) => SecureString::new(raw),
            None => SecureString::new(default),
        }
    }

    pub(crate) fn opt_secret(&mut self, key: &str) -> Option<SecureString> {
        self.props.get(key).map(SecureString::new)
    }

    pub(crate) fn opt_addr(&mut self, key: &str) -> Option<IpAddr> {
        self.coerce_opt(key, parse_addr)
    }

    pub(crate) fn addr_or(&mut self, key: &str, default: IpAddr) -> IpAddr {
        self.coerce_or(key, default, parse_addr)
    }

    pub(crate) fn addr_list(&mut self, key: &str) -> Vec<IpAddr> {
        self.coerce_or(key, Vec::new(), parse_addr_list)
    }

    pub(crate) fn dialect_or(&mut self, key: &str, default: DialectVersion) -> DialectVersion {
        self.coerce_or(key, default, parse_dialect)
    }

    pub(crate) fn resolve_order_or(
        &mut self,
        key: &str,
        default: Vec<ResolverKind>,
    ) -> Vec<ResolverKind> {
        self.coerce_or(key, default, parse_resolve_order)
    }

    pub(crate) fn opt_machine_id(&mut self, key: &str) -> Option<MachineId> {
        self.coerce_opt(key, parse_machine_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_takes_default_without_error() {
        let props = Properties::new();
        let mut r = FieldResolver::new(&props);
        assert_eq!(r.u32_or("client.listCount", 200), 200);
        assert!(r.into_errors().is_empty());
    }

    #[test]
    fn present_key_overrides_default() {
        let props = Properties::new().with("client.listCount", "50");
        let mut r = FieldResolver::new(&props);
        assert_eq!(r.u32_or("client.listCount", 200), 50);
        assert!(r.into_errors().is_empty());
    }

    #[test]
    fn malformed_value_records_error_and_keeps_default() {
        let props = Properties::new()
            .with("client.listCount", "many")
            .with("client.useBatching", "definitely");
        let mut r = FieldResolver::new(&props);
        assert_eq!(r.u32_or("client.listCount", 200), 200);
        assert!(!r.bool_or("client.useBatching", false));
        let errors = r.into_errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].key, "client.listCount");
        assert_eq!(errors[1].key, "client.useBatching");
    }

    #[test]
    fn optional_fields_stay_none_when_absent() {
        let props = Properties::new();
        let mut r = FieldResolver::new(&props);
        assert!(r.opt_string("client.username").is_none());
        assert!(r.opt_addr("client.laddr").is_none());
        assert!(r.opt_machine_id("client.machineId").is_none());
        assert!(r.into_errors().is_empty());
    }
}
