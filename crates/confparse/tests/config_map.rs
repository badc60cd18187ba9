use confparse::{Config, Value};

#[test]
fn missing_key_yields_empty_cell() {
    let config = Config::new();
    assert!(config.get("anything").is_empty());
    assert_eq!(config.get("anything").as_str(), "");
    assert!(config["anything"].is_empty());
}

#[test]
fn set_and_get() {
    let mut config = Config::new();
    config.set("name", "confparse");
    config.set("threads", 4u32);
    config.set("ratio", 0.5f64);
    config.set("verbose", true);
    assert_eq!(config.len(), 4);
    assert_eq!(config.get("name").as_str(), "confparse");
    assert_eq!(config.get("threads").as_str(), "4");
    assert_eq!(config.get("ratio").as_str(), "0.5");
    assert_eq!(config.get("verbose").as_str(), "True");
}

#[test]
fn set_overwrites() {
    let mut config = Config::new();
    config.set("key", "old");
    config.set("key", "new");
    assert_eq!(config.len(), 1);
    assert_eq!(config.get("key").as_str(), "new");
}

#[test]
fn remove_is_a_noop_for_absent_keys() {
    let mut config = Config::new();
    config.set("key", 1);
    assert_eq!(config.remove("key").unwrap().as_str(), "1");
    assert!(config.remove("key").is_none());
    assert!(config.is_empty());
}

#[test]
fn contains_key_distinguishes_stored_empty_text() {
    let mut config = Config::new();
    config.set("blank", "");
    assert!(config.contains_key("blank"));
    assert!(!config.get("blank").is_empty());
    assert!(!config.contains_key("missing"));
}

#[test]
fn iteration_in_key_order() {
    let mut config = Config::new();
    config.set("b", 2);
    config.set("a", 1);
    config.set("c", 3);
    let keys: Vec<&str> = config.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, ["a", "b", "c"]);
    assert_eq!(config.iter().len(), 3);
}

#[test]
fn fresh_iteration_reflects_current_contents() {
    let mut config = Config::new();
    config.set("a", 1);
    assert_eq!(config.iter().count(), 1);
    config.set("b", 2);
    config.remove("a");
    let pairs: Vec<(&str, &Value)> = config.iter().collect();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].0, "b");
}

#[test]
fn from_str_parses_with_defaults() {
    let config: Config = "a=1\nb=2\n".parse().unwrap();
    assert_eq!(config.len(), 2);
    assert!("=broken".parse::<Config>().is_err());
}

#[test]
fn collect_and_extend() {
    let mut config: Config = [(String::from("a"), Value::from(1))].into_iter().collect();
    config.extend([(String::from("b"), Value::from(2))]);
    assert_eq!(config.len(), 2);
    assert_eq!(config.get("b").as_str(), "2");
}

#[test]
fn owned_iteration_moves_the_entries() {
    let mut config = Config::new();
    config.set("a", "x");
    let pairs: Vec<(String, Value)> = config.into_iter().collect();
    assert_eq!(pairs, [(String::from("a"), Value::from("x"))]);
}
