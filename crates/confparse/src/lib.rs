#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod loader;
pub mod options;
pub mod parser;
pub mod scan;
pub mod value;

mod number;

#[cfg(feature = "serde")]
pub mod de;
#[cfg(feature = "serde")]
pub mod ser;

pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::loader::{FileLoader, ResourceLoader};
pub use crate::options::ParseOptions;
pub use crate::parser::Parser;
pub use crate::value::{ConvertError, FromValue, Value};

/// Parse configuration text with the default rule set.
pub fn parse_str(input: &str) -> Result<Config> {
    Parser::new().parse_str(input)
}

/// Read `path` from the filesystem and parse it with the default rule
/// set. Equivalent to `Parser::new().parse_resource(&FileLoader, path)`.
pub fn parse_file(path: &str) -> Result<Config> {
    Parser::new().parse_resource(&FileLoader, path)
}
