/// Rule set applied by [`Parser`](crate::Parser) to every line.
///
/// Construct with [`Default`] and override individual fields; a parser
/// reads its options immutably, so one `ParseOptions` value can serve any
/// number of parse calls.
///
/// ```
/// use confparse::{ParseOptions, Parser};
///
/// let mut options = ParseOptions::default();
/// options.delimiters = String::from(":");
/// let config = Parser::with_options(options).parse_str("port: 9000").unwrap();
/// assert_eq!(config.get("port").as_str(), "9000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParseOptions {
    /// Characters treated as whitespace by every trimming rule
    /// (default: space, tab, carriage return).
    pub whitespace: String,

    /// Characters accepted as the key/value delimiter; the first
    /// occurrence on a line splits it (default: `=`).
    pub delimiters: String,

    /// Characters that open a comment running to end of line
    /// (default: `#` and `;`). Markers are single characters and cannot
    /// be escaped.
    pub comments: String,

    /// Accept lines that are blank after preprocessing instead of failing
    /// the parse (default: true).
    pub allow_empty_lines: bool,

    /// Accept a delimiter as the last character of a line, storing an
    /// empty value for the key (default: true).
    pub allow_empty_values: bool,

    /// Drop allowed blank lines. When unset, an allowed blank line still
    /// reaches delimiter search and fails there; a blank line never
    /// produces an entry (default: true).
    pub skip_blank_lines: bool,

    /// Trim the start of the whole line before anything else looks at it
    /// (default: true).
    pub trim_line_start: bool,

    /// Trim the end of the whole line before anything else looks at it
    /// (default: true).
    pub trim_line_end: bool,

    /// Trim both ends of each key after splitting (default: true).
    pub trim_keys: bool,

    /// Trim both ends of each value after splitting (default: true).
    pub trim_values: bool,

    /// Strip comments during preprocessing (default: true).
    pub allow_comments: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            whitespace: String::from(" \t\r"),
            delimiters: String::from("="),
            comments: String::from("#;"),
            allow_empty_lines: true,
            allow_empty_values: true,
            skip_blank_lines: true,
            trim_line_start: true,
            trim_line_end: true,
            trim_keys: true,
            trim_values: true,
            allow_comments: true,
        }
    }
}
