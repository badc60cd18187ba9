//! The resource collaborator: how text reaches the parser. The parser
//! core never opens files or interprets paths itself.

use std::fs;
use std::io;

/// Reads the entire contents of a named resource as text.
///
/// [`Parser::parse_resource`](crate::Parser::parse_resource) is generic
/// over this trait, so configuration can come from the filesystem, an
/// archive, an in-memory fixture, or anywhere else that can hand back a
/// `String` for a name.
pub trait ResourceLoader {
    /// The full text behind `name`, or a descriptive I/O error. Any
    /// handle opened to satisfy the read must be released before
    /// returning.
    fn load(&self, name: &str) -> io::Result<String>;
}

/// [`ResourceLoader`] over the filesystem; the resource name is used as a
/// path.
///
/// ```no_run
/// use confparse::{FileLoader, Parser};
///
/// let config = Parser::new().parse_resource(&FileLoader, "app.cfg")?;
/// # Ok::<(), confparse::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FileLoader;

impl ResourceLoader for FileLoader {
    fn load(&self, name: &str) -> io::Result<String> {
        fs::read_to_string(name)
    }
}
