//! Output formats over the sample trees

use deptree::formats::{FormatError, FormatParams, FormatRegistry};
use deptree::parse_tree;
use rstest::rstest;
use std::fs;

fn read_fixture(name: &str) -> String {
    fs::read_to_string(format!("tests/fixtures/{name}")).expect("Failed to read fixture")
}

#[rstest]
#[case::pizza("pizza.txt")]
#[case::friend("friend.txt")]
#[case::impressed("impressed.txt")]
#[case::agree("agree.txt")]
fn treeviz_redraws_parser_output(#[case] fixture: &str) {
    let source = read_fixture(fixture);
    let tree = parse_tree(&source).unwrap();

    let drawn = FormatRegistry::with_defaults()
        .serialize(&tree, "treeviz", &FormatParams::new())
        .unwrap();

    assert_eq!(drawn, source);
    assert_eq!(parse_tree(&drawn).unwrap(), tree);
}

#[test]
fn sentence_format() {
    let tree = parse_tree(&read_fixture("friend.txt")).unwrap();
    let sentence = FormatRegistry::with_defaults()
        .serialize(&tree, "sentence", &FormatParams::new())
        .unwrap();
    assert_eq!(
        sentence,
        "why hello there my dear friend , what has caused you to seek me out this fine evening ?"
    );
}

#[test]
fn yaml_format_lists_words_first() {
    let tree = parse_tree(&read_fixture("agree.txt")).unwrap();
    let yaml = FormatRegistry::with_defaults()
        .serialize(&tree, "arcs-yaml", &FormatParams::new())
        .unwrap();
    assert!(yaml.starts_with("words:\n- tag: MD\n  text: Can\n"));
    assert!(yaml.contains("arcs:\n- dir: left\n  start: 0\n  end: 2\n  label: aux\n"));
}

#[test]
fn unknown_format() {
    let tree = parse_tree(&read_fixture("agree.txt")).unwrap();
    let err = FormatRegistry::with_defaults()
        .serialize(&tree, "svg", &FormatParams::new())
        .unwrap_err();
    assert_eq!(err, FormatError::FormatNotFound("svg".to_string()));
}
