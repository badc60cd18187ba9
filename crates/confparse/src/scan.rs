//! Text mechanics shared by the parser: character-set trimming and
//! first-of-set search over string slices. Everything here returns
//! subslices of its input and allocates nothing.

/// Slice of `s` with leading characters belonging to `set` removed.
pub fn trim_start_matching<'a>(s: &'a str, set: &str) -> &'a str {
    s.trim_start_matches(|c| set.contains(c))
}

/// Slice of `s` with trailing characters belonging to `set` removed.
pub fn trim_end_matching<'a>(s: &'a str, set: &str) -> &'a str {
    s.trim_end_matches(|c| set.contains(c))
}

/// Slice of `s` trimmed at both ends against `set`.
pub fn trim_matching<'a>(s: &'a str, set: &str) -> &'a str {
    trim_end_matching(trim_start_matching(s, set), set)
}

/// Byte index of the first character of `s` that belongs to `set`, or
/// `None` when no character of `set` occurs. An empty `set` matches
/// nothing.
#[cfg(feature = "perf_memchr")]
pub fn find_first_of(s: &str, set: &str) -> Option<usize> {
    // Byte search is only sound when the whole set is ASCII: ASCII bytes
    // never occur inside a multi-byte UTF-8 sequence.
    if set.is_ascii() {
        match set.as_bytes() {
            [] => return None,
            [a] => return memchr::memchr(*a, s.as_bytes()),
            [a, b] => return memchr::memchr2(*a, *b, s.as_bytes()),
            [a, b, c] => return memchr::memchr3(*a, *b, *c, s.as_bytes()),
            _ => {}
        }
    }
    s.find(|c| set.contains(c))
}

/// Byte index of the first character of `s` that belongs to `set`, or
/// `None` when no character of `set` occurs. An empty `set` matches
/// nothing.
#[cfg(not(feature = "perf_memchr"))]
pub fn find_first_of(s: &str, set: &str) -> Option<usize> {
    s.find(|c| set.contains(c))
}
