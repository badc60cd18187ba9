use confparse::parse_str;

#[test]
fn three_entries() {
    let config = parse_str("Key=Value\nSecond=Third\nFourth=Fifth\n").unwrap();
    assert_eq!(config.len(), 3);
    assert_eq!(config.get("Key").as_str(), "Value");
    assert_eq!(config.get("Second").as_str(), "Third");
    assert_eq!(config.get("Fourth").as_str(), "Fifth");
}

#[test]
fn empty_input_is_empty_config() {
    let config = parse_str("").unwrap();
    assert!(config.is_empty());
}

#[test]
fn whitespace_around_key_and_value_is_trimmed() {
    let config = parse_str("  host \t=  localhost  \n").unwrap();
    assert_eq!(config.get("host").as_str(), "localhost");
}

#[test]
fn crlf_line_endings() {
    let config = parse_str("a=1\r\nb=2\r\n").unwrap();
    assert_eq!(config.len(), 2);
    assert_eq!(config.get("a").as_str(), "1");
    assert_eq!(config.get("b").as_str(), "2");
}

#[test]
fn missing_trailing_newline() {
    let config = parse_str("a=1\nb=2").unwrap();
    assert_eq!(config.len(), 2);
    assert_eq!(config.get("b").as_str(), "2");
}

#[test]
fn last_duplicate_key_wins() {
    let config = parse_str("key=first\nkey=second\nkey=third\n").unwrap();
    assert_eq!(config.len(), 1);
    assert_eq!(config.get("key").as_str(), "third");
}

#[test]
fn blank_lines_are_skipped() {
    let config = parse_str("\n\na=1\n   \t\nb=2\n\n").unwrap();
    assert_eq!(config.len(), 2);
}

#[test]
fn empty_value_allowed_by_default() {
    let config = parse_str("key=\n").unwrap();
    assert_eq!(config.len(), 1);
    let cell = config.get("key");
    assert_eq!(cell.as_str(), "");
    // Stored empty text, not a missing entry.
    assert!(!cell.is_empty());
}

#[test]
fn value_may_contain_further_delimiters() {
    let config = parse_str("equation=a=b+c\n").unwrap();
    assert_eq!(config.get("equation").as_str(), "a=b+c");
}

#[test]
fn parse_is_idempotent() {
    let input = "one=1\ntwo=2\nthree=3\n# comment\nfour=4\n";
    let first = parse_str(input).unwrap();
    let second = parse_str(input).unwrap();
    assert_eq!(first, second);
}

#[test]
fn round_trip_plain_pairs() {
    for (key, value) in [("K", "V"), ("name", "confparse"), ("x", "hello world")] {
        let line = format!("{key}={value}");
        let config = parse_str(&line).unwrap();
        assert_eq!(config.get(key).as_str(), value, "line {line:?}");
    }
}
