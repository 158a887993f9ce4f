// Integration tests for options/map.rs — OptionMap construction and lookups
//
// Covers the resolution rules of get_string / get_bool / get_int, the
// explicit-beats-negation rule, soft sets, and read-only sharing.

use std::ffi::OsString;
use std::sync::Arc;

use getarg::OptionMap;

fn parse(line: &str) -> OptionMap {
    OptionMap::parse(line.split_whitespace())
}

#[test]
fn absent_names_return_defaults() {
    let map = parse("-SHT=1 -noBAR");
    assert!(map.get_bool("-fo", true));
    assert!(!map.get_bool("-fo", false));
    assert_eq!(map.get_string("-fo", "d"), "d");
    assert_eq!(map.get_int("-fo", -7), -7);
}

#[test]
fn lookup_names_include_the_dash() {
    let map = parse("-SHT=5");
    assert_eq!(map.get_int("SHT", 1), 1);
    assert_eq!(map.get_int("-SHT", 1), 5);
}

#[test]
fn names_are_case_sensitive() {
    let map = parse("-sht=1");
    assert!(!map.is_set("-SHT"));
    assert!(map.is_set("-sht"));
}

#[test]
fn bool_literal_values() {
    let map = parse("-a=yes -b=false -c=0 -d=");
    assert!(map.get_bool("-a", false));
    assert!(map.get_bool("-b", false));
    assert!(!map.get_bool("-c", true));
    assert!(map.get_bool("-d", false));
}

#[test]
fn explicit_zero_beats_negation_zero() {
    let map = parse("-SHT=0 -noSHT=0");
    assert!(!map.get_bool("-SHT", true));
}

#[test]
fn negation_does_not_affect_string_or_int() {
    let map = parse("-noBAR");
    assert_eq!(map.get_string("-BAR", "d"), "d");
    assert_eq!(map.get_int("-BAR", 4), 4);
    assert!(!map.is_set("-BAR"));
}

#[test]
fn negations_view_excludes_explicit_names() {
    let map = parse("-noA -noB=0 -A=1");
    assert_eq!(map.negations().collect::<Vec<_>>(), vec![("-B", false)]);
    assert_eq!(map.negation("-A"), None);
}

#[test]
fn reparse_does_not_accumulate() {
    let first = parse("-SHT=1 -noBAR");
    let second = parse("-other");
    assert!(first.is_set("-SHT"));
    assert!(!second.is_set("-SHT"));
    assert_eq!(second.negation("-BAR"), None);
}

#[test]
fn iteration_is_sorted_by_name() {
    let map = parse("-z=1 -a=2 -m");
    let names: Vec<&str> = map.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["-a", "-m", "-z"]);
    assert_eq!((&map).into_iter().count(), 3);
}

#[test]
fn soft_set_respects_user_input() {
    let mut map = parse("-port=18333 -noupnp");
    assert!(!map.soft_set("-port", "8333"));
    assert!(!map.soft_set_bool("-upnp", true));
    assert!(map.soft_set("-datadir", "/var/lib/node"));
    assert!(!map.soft_set("-datadir", "/tmp"));

    assert_eq!(map.get_int("-port", 0), 18333);
    assert!(!map.get_bool("-upnp", true));
    assert_eq!(map.get_string("-datadir", ""), "/var/lib/node");
}

#[test]
fn shared_across_threads_read_only() {
    let map = Arc::new(parse("-threads=4 -nolisten"));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let map = Arc::clone(&map);
            std::thread::spawn(move || (map.get_int("-threads", 1), map.get_bool("-listen", true)))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), (4, false));
    }
}

#[test]
fn owned_string_arguments() {
    let args: Vec<String> = vec!["-name=é".to_owned(), "--x".to_owned()];
    let map = OptionMap::parse(&args);
    assert_eq!(map.get_string("-name", ""), "é");
    assert!(map.get_bool("-x", false));
}

#[test]
fn len_agrees_with_is_empty() {
    for line in ["", "-noBAR", "-noBAR=0", "-SHT", "-SHT -noBAR", "file"] {
        let map = parse(line);
        assert_eq!(map.len() == 0, map.is_empty(), "{line:?}");
    }
    assert_eq!(parse("-noBAR").len(), 1);
    assert_eq!(parse("-SHT -noBAR -noSHT").len(), 2);
}

#[test]
fn soft_set_values_count_as_set() {
    let mut map = parse("");
    assert!(map.soft_set_bool("-listen", false));
    assert!(map.is_set("-listen"));
    assert_eq!(map.iter().collect::<Vec<_>>(), vec![("-listen", "0")]);
}

#[test]
fn parse_os_matches_parse_for_utf8() {
    let args = ["-SHT", "--noBAR", "-n=3", "file"];
    let from_os = OptionMap::parse_os(args.iter().map(OsString::from));
    assert_eq!(from_os, OptionMap::parse(args));
}

#[cfg(unix)]
#[test]
fn parse_os_replaces_invalid_utf8() {
    use std::os::unix::ffi::OsStringExt;

    let map = OptionMap::parse_os(vec![
        OsString::from_vec(b"-na\xffme=v".to_vec()),
        OsString::from_vec(b"-no\xfe".to_vec()),
    ]);
    assert_eq!(map.get_string("-na\u{FFFD}me", ""), "v");
    assert_eq!(map.negation("-\u{FFFD}"), Some(true));
}
