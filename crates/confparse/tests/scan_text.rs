use confparse::scan::{find_first_of, trim_end_matching, trim_matching, trim_start_matching};

#[test]
fn trim_against_a_set() {
    assert_eq!(trim_start_matching("  \tkey", " \t"), "key");
    assert_eq!(trim_end_matching("key  \t", " \t"), "key");
    assert_eq!(trim_matching(" \t key \t ", " \t"), "key");
}

#[test]
fn trim_leaves_interior_characters() {
    assert_eq!(trim_matching(" a b ", " "), "a b");
}

#[test]
fn trim_can_consume_everything() {
    assert_eq!(trim_matching("   ", " "), "");
    assert_eq!(trim_matching("", " "), "");
}

#[test]
fn empty_set_trims_nothing() {
    assert_eq!(trim_matching("  x  ", ""), "  x  ");
}

#[test]
fn find_first_of_any_set_member() {
    assert_eq!(find_first_of("key=value", "="), Some(3));
    assert_eq!(find_first_of("a:b=c", ":="), Some(1));
    assert_eq!(find_first_of("plain", "="), None);
    assert_eq!(find_first_of("", "="), None);
    assert_eq!(find_first_of("abc", ""), None);
}

#[test]
fn find_first_of_reports_byte_indices() {
    // Multi-byte characters before the match still give a usable byte
    // index for slicing.
    let line = "héllo=1";
    let at = find_first_of(line, "=").unwrap();
    assert_eq!(&line[..at], "héllo");
    assert_eq!(&line[at + 1..], "1");
}

#[test]
fn non_ascii_set_members() {
    assert_eq!(find_first_of("a→b", "→"), Some(1));
}
