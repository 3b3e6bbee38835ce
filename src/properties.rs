//! Raw property store.
//!
//! An ordered key/value collection fed by one or more property sources.
//! Later writes override earlier ones for the same key; beyond that, keys
//! carry no ordering semantics. The store holds raw strings only - typing
//! happens during resolution.

use std::collections::btree_map;
use std::collections::BTreeMap;

use thiserror::Error;

/// Errors raised while building a property store.
#[derive(Debug, Error)]
pub enum PropertyError {
    /// The input document was not valid TOML.
    #[error("failed to parse properties: {0}")]
    Parse(#[from] toml::de::Error),
    /// A TOML value has no flat string representation (e.g. a table inside
    /// an array).
    #[error("property {0}: value cannot be flattened to a string")]
    Unflattenable(String),
}

/// Raw, untyped property settings keyed by dot-separated names.
///
/// Sources are merged in order with last-writer-wins semantics: apply the
/// lowest-precedence source first, then [`merge`](Self::merge) or
/// [`set`](Self::set) the overrides on top. Unknown keys are permitted - the
/// store may be shared with other subsystems that read their own namespaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: BTreeMap<String, String>,
}

impl Properties {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single property, replacing any earlier value for the key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Merge another source on top of this one. Colliding keys take the
    /// other source's value.
    pub fn merge(&mut self, other: &Properties) {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    /// Look up a raw value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether the key was supplied by any source.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of stored properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over the pairs whose key starts with `prefix`, in key order.
    pub fn with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.entries
            .range(prefix.to_string()..)
            .take_while(move |(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Build a store from TOML text, flattening nested tables into
    /// dot-separated keys and scalar arrays into comma-separated lists.
    ///
    /// This is a convenience for callers that already hold a TOML document;
    /// no file access happens here.
    ///
    /// ```rust
    /// use rsmb_conf::Properties;
    ///
    /// let props = Properties::from_toml_str(
    ///     "[client]\nminVersion = \"SMB210\"\n\n[netbios]\nwins = [\"10.0.0.1\", \"10.0.0.2\"]\n",
    /// )
    /// .unwrap();
    /// assert_eq!(props.get("client.minVersion"), Some("SMB210"));
    /// assert_eq!(props.get("netbios.wins"), Some("10.0.0.1,10.0.0.2"));
    /// ```
    pub fn from_toml_str(input: &str) -> Result<Self, PropertyError> {
        let table: toml::Table = toml::from_str(input)?;
        let mut props = Properties::new();
        flatten_table(&mut props, "", &table)?;
        Ok(props)
    }
}

impl FromIterator<(String, String)> for Properties {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut props = Properties::new();
        for (key, value) in iter {
            props.set(key, value);
        }
        props
    }
}

impl Extend<(String, String)> for Properties {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<'a> IntoIterator for &'a Properties {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn flatten_table(
    props: &mut Properties,
    prefix: &str,
    table: &toml::Table,
) -> Result<(), PropertyError> {
    for (name, value) in table {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        match value {
            toml::Value::Table(nested) => flatten_table(props, &key, nested)?,
            other => {
                let flat = flatten_value(&key, other)?;
                props.set(key, flat);
            }
        }
    }
    Ok(())
}

fn flatten_value(key: &str, value: &toml::Value) -> Result<String, PropertyError> {
    match value {
        toml::Value::String(s) => Ok(s.clone()),
        toml::Value::Integer(i) => Ok(i.to_string()),
        toml::Value::Float(f) => Ok(f.to_string()),
        toml::Value::Boolean(b) => Ok(b.to_string()),
        toml::Value::Datetime(dt) => Ok(dt.to_string()),
        toml::Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    toml::Value::Array(_) | toml::Value::Table(_) => {
                        return Err(PropertyError::Unflattenable(key.to_string()));
                    }
                    scalar => parts.push(flatten_value(key, scalar)?),
                }
            }
            Ok(parts.join(","))
        }
        toml::Value::Table(_) => Err(PropertyError::Unflattenable(key.to_string())),
    }
}
