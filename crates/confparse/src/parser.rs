use crate::config::Config;
use crate::error::{Error, Result};
use crate::loader::ResourceLoader;
use crate::options::ParseOptions;
use crate::scan;

/// The line parser: applies a [`ParseOptions`] rule set to configuration
/// text and produces a [`Config`].
///
/// A parser is cheap to construct and holds nothing but its rule set, so
/// one instance can parse any number of inputs; each call returns a
/// fresh, independently owned mapping.
///
/// ```
/// use confparse::Parser;
///
/// let parser = Parser::new();
/// let config = parser.parse_str("name = confparse\nthreads = 4\n").unwrap();
/// assert_eq!(config.get("name").as_str(), "confparse");
/// assert_eq!(config.get("threads").parse::<usize>().unwrap(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    /// A parser with the default rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// A parser applying a caller-supplied rule set.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// The rule set this parser applies.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse configuration text.
    ///
    /// The input is split into physical lines on `\n` / `\r\n`. Each line
    /// is preprocessed (trimming, comment stripping), checked against the
    /// blank-line policy, split at the first delimiter character, and
    /// inserted. The first failing line aborts the parse with its 1-based
    /// line number; when the same key appears on several lines, the last
    /// one wins silently.
    pub fn parse_str(&self, input: &str) -> Result<Config> {
        let mut config = Config::new();
        for (idx, raw) in input.lines().enumerate() {
            let line_no = idx + 1;
            let line = self.preprocess(raw);
            if line.is_empty() {
                if !self.options.allow_empty_lines {
                    return Err(Error::EmptyLine { line: line_no });
                }
                if self.options.skip_blank_lines {
                    continue;
                }
                // Not skipped: fall through to delimiter search, which
                // fails on an empty line. A blank line never becomes an
                // entry.
            }
            let (key, value) = self.split_pair(line, line_no)?;
            config.set(key, value);
        }
        Ok(config)
    }

    /// Read `name` through `loader`, then parse the text.
    ///
    /// A read failure surfaces as [`Error::Resource`] carrying the
    /// underlying I/O error; whatever handle the loader opened is closed
    /// by the time parsing starts.
    pub fn parse_resource<L>(&self, loader: &L, name: &str) -> Result<Config>
    where
        L: ResourceLoader + ?Sized,
    {
        let text = loader.load(name).map_err(|source| Error::Resource {
            name: name.to_owned(),
            source,
        })?;
        self.parse_str(&text)
    }

    /// Trim the whole line and truncate it at the first comment marker,
    /// per the rule set. Comment markers are not escapable.
    fn preprocess<'a>(&self, mut line: &'a str) -> &'a str {
        let options = &self.options;
        if options.trim_line_start {
            line = scan::trim_start_matching(line, &options.whitespace);
        }
        if options.trim_line_end {
            line = scan::trim_end_matching(line, &options.whitespace);
        }
        if options.allow_comments {
            if let Some(pos) = scan::find_first_of(line, &options.comments) {
                line = &line[..pos];
            }
        }
        line
    }

    /// Locate the delimiter and split the line into its key and value,
    /// trimmed per the rule set.
    fn split_pair<'a>(&self, line: &'a str, line_no: usize) -> Result<(&'a str, &'a str)> {
        let options = &self.options;
        let at = scan::find_first_of(line, &options.delimiters)
            .ok_or(Error::NoDelimiter { line: line_no })?;
        if at == 0 {
            return Err(Error::EmptyKey { line: line_no });
        }
        let delimiter_len = line[at..].chars().next().map_or(1, char::len_utf8);
        let mut key = &line[..at];
        let mut value = &line[at + delimiter_len..];
        if value.is_empty() && !options.allow_empty_values {
            return Err(Error::EmptyValue { line: line_no });
        }
        if options.trim_keys {
            key = scan::trim_matching(key, &options.whitespace);
        }
        if options.trim_values {
            value = scan::trim_matching(value, &options.whitespace);
        }
        Ok((key, value))
    }
}
