//! `Serialize` for the mapping and its cells, so a parsed configuration
//! can be handed to any serde format (dumping as JSON, embedding in a
//! larger document, ...). This is interop with serde data models, not
//! write-back to configuration text.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::config::Config;
use crate::value::Value;

impl Serialize for Value {
    /// An empty cell serializes as none; any other cell as its text.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_empty() {
            serializer.serialize_none()
        } else {
            serializer.serialize_str(self.as_str())
        }
    }
}

impl Serialize for Config {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
