use std::collections::BTreeMap;
use std::collections::btree_map;
use std::ops::Index;
use std::str::FromStr;

use crate::error::Error;
use crate::value::Value;

static EMPTY: Value = Value::empty();

/// The key → cell mapping produced by parsing, or built programmatically
/// with [`set`](Config::set).
///
/// Keys are unique; setting an existing key overwrites its cell. Lookups
/// for absent keys yield a shared empty cell instead of failing, so
/// callers can chain straight into [`Value`] accessors:
///
/// ```
/// use confparse::Config;
///
/// let mut config = Config::new();
/// config.set("retries", 3);
/// assert_eq!(config.get("retries").parse::<u32>().unwrap(), 3);
/// assert!(config.get("no such key").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    entries: BTreeMap<String, Value>,
}

impl Config {
    /// An empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored cell for `key`, or the shared empty cell when the key
    /// is absent. Never fails.
    pub fn get(&self, key: &str) -> &Value {
        self.entries.get(key).unwrap_or(&EMPTY)
    }

    /// Insert or overwrite the cell for `key`. Accepts anything a
    /// [`Value`] can be constructed from: text, booleans, integers,
    /// reals.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Remove the entry for `key`, returning its cell. Removing an
    /// absent key is a no-op, not an error.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Whether an entry for `key` is present. `get(key).is_empty()`
    /// answers the same question except for a stored empty cell, which
    /// only [`set`](Config::set) with [`Value::empty`] can produce.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of distinct keys present.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no keys are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(key, cell)` pairs in key order. A fresh iteration
    /// reflects the contents at the time it starts.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

/// Iterator over a [`Config`]'s `(key, cell)` pairs, in key order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, Value>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Config {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl IntoIterator for Config {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Index<&str> for Config {
    type Output = Value;

    /// `config["key"]` with [`get`](Config::get) semantics: a missing key
    /// yields the empty cell rather than panicking.
    fn index(&self, key: &str) -> &Value {
        self.get(key)
    }
}

impl FromStr for Config {
    type Err = Error;

    /// Parse configuration text with the default rule set, so that
    /// `text.parse::<Config>()` works.
    fn from_str(s: &str) -> Result<Self, Error> {
        crate::Parser::new().parse_str(s)
    }
}

impl FromIterator<(String, Value)> for Config {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Config {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<(String, Value)> for Config {
    fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}
