#[macro_use]
extern crate assert_matches;

use optscan::{Action, Arity, ConfigError, OptionSpec, OptionTable, ParseError, Value};
use rstest::rstest;

fn script() -> OptionTable {
    OptionTable::new("script")
        .add(OptionSpec::named("verbose", 'v').help("Enable verbose mode"))
        .add(OptionSpec::named("output", 'o').help("Specify output file"))
        .add(OptionSpec::named("port", 'p').help("Specify port number"))
}

#[test]
fn builder_compiles() {
    OptionTable::new("script").build();
}

#[rstest]
#[case(vec!["--verbose"], "verbose", Value::Switch)]
#[case(vec!["-o", "out.txt"], "output", Value::from("out.txt"))]
#[case(vec!["--port=8080"], "port", Value::from("8080"))]
fn parse_single_option(#[case] tokens: Vec<&str>, #[case] key: &str, #[case] expected: Value) {
    let parser = script().build_parser().unwrap();

    let parsed = parser.parse_tokens(tokens.as_slice()).unwrap();

    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed.get(key), Some(&expected));
}

#[rstest]
#[case(vec!["-x"], ParseError::UnknownShortOption("-x".to_string()))]
#[case(vec!["foo"], ParseError::InvalidArgument("foo".to_string()))]
#[case(vec!["--port", "1", "--size=2"], ParseError::UnknownLongOptionWithValue("size".to_string()))]
fn parse_failure(#[case] tokens: Vec<&str>, #[case] expected: ParseError) {
    let parser = script().build_parser().unwrap();

    assert_eq!(parser.try_parse(tokens.as_slice()), Err(expected));
    assert_eq!(parser.parse_tokens(tokens.as_slice()), Err(1));
}

#[test]
fn parse_first_fatal_token_wins() {
    let parser = script().build_parser().unwrap();

    assert_eq!(
        parser.try_parse(vec!["foo", "--help"].as_slice()),
        Err(ParseError::InvalidArgument("foo".to_string()))
    );
    assert_eq!(parser.parse_tokens(vec!["foo", "--help"].as_slice()), Err(1));
    assert_eq!(
        parser.try_parse(vec!["-v", "--help", "foo"].as_slice()),
        Ok(Action::PrintHelp)
    );
    assert_eq!(parser.parse_tokens(vec!["--help"].as_slice()), Err(0));
}

#[test]
fn parse_round_trip() {
    let parser = script().build_parser().unwrap();
    let first = parser
        .parse_tokens(vec!["-v", "-p", "8080", "--output=out.txt"].as_slice())
        .unwrap();
    let encoded = first.to_tokens();

    let second = parser
        .parse_tokens(
            encoded
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        )
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn parse_negative_value() {
    let parser = OptionTable::new("program")
        .add(OptionSpec::named("offset", 'n').arity(Arity::Value))
        .build_parser()
        .unwrap();

    let parsed = parser.parse_tokens(vec!["-n", "-5"].as_slice()).unwrap();

    assert_eq!(parsed.get_text("offset"), Some("-5"));
}

#[test]
fn build_duplicate_short() {
    let result = script().add(OptionSpec::named("version", 'v')).build_parser();

    assert_matches!(result, Err(ConfigError::DuplicateShort('v')));
}
