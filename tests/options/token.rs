// Integration tests for options/token.rs — single-argument classification
//
// Covers:
//   - positional and bare-dash tokens
//   - `-` / `--` normalization
//   - first-`=` value split
//   - `-noX` negation directives and the literal `-no` name

use getarg::options::token::{classify, normalize, split_value};
use getarg::Token;

#[test]
fn positional_tokens_are_not_options() {
    for raw in ["file", "", "a=b", "+x", "x-"] {
        assert_eq!(classify(raw), Token::Positional, "{raw:?}");
    }
}

#[test]
fn dash_and_double_dash_normalize_to_single_dash() {
    assert_eq!(normalize("-SHT"), Some("-SHT"));
    assert_eq!(normalize("--SHT"), Some("-SHT"));
    assert_eq!(classify("--SHT=verbose"), classify("-SHT=verbose"));
}

#[test]
fn double_dash_alone_is_not_an_end_marker() {
    assert_eq!(classify("--"), Token::Bare);
}

#[test]
fn split_on_first_equals_only() {
    assert_eq!(split_value("-a=b=c"), ("-a", "b=c"));
    assert_eq!(split_value("-a="), ("-a", ""));
    assert_eq!(split_value("-a"), ("-a", ""));
}

#[test]
fn negation_target_keeps_case() {
    assert_eq!(
        classify("-noBAR"),
        Token::Negation { target: "-BAR".to_owned(), negated: true }
    );
    // Case-sensitive prefix: `-NoBAR` is an ordinary option.
    assert_eq!(classify("-NoBAR"), Token::Setting { name: "-NoBAR", value: "" });
}

#[test]
fn negation_value_other_than_zero_negates() {
    assert_eq!(
        classify("--noBAR=yes"),
        Token::Negation { target: "-BAR".to_owned(), negated: true }
    );
    assert_eq!(
        classify("--noBAR=0"),
        Token::Negation { target: "-BAR".to_owned(), negated: false }
    );
}

#[test]
fn words_starting_with_no_are_negations() {
    // `-node` negates `-de`; there is no dictionary of known names.
    assert_eq!(
        classify("-node"),
        Token::Negation { target: "-de".to_owned(), negated: true }
    );
}

#[test]
fn lone_no_is_a_literal_option() {
    assert_eq!(classify("--no"), Token::Setting { name: "-no", value: "" });
    assert_eq!(classify("-no=1"), Token::Setting { name: "-no", value: "1" });
}
