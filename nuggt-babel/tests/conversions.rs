//! Cross-format conversions through the default registry

use nuggt_babel::{FormatError, FormatRegistry};
use rstest::rstest;

const SAMPLE: &str = "\
Welcome back
[3]: { [2]: card: (title: \"Hi, there\", highlight: \"<Why: greet first>\"), button: [(label: Go), prompt: Submit <emailId>] }
[3]: { [2]: continue, input: [(placeholder: Email), emailId] }
accordion: (trigger: What?, content: This)
accordion: (trigger: Why?, content: \"<Because, reasons>\")
";

#[rstest]
#[case::json("json")]
#[case::yaml("yaml")]
#[case::nuggt("nuggt")]
fn test_model_survives_conversion(#[case] via: &str) {
    let registry = FormatRegistry::with_defaults();
    let document = registry.parse(SAMPLE, "nuggt").unwrap();

    let text = registry.serialize(&document, via).unwrap();
    assert_eq!(registry.parse(&text, via).unwrap(), document);
}

#[test]
fn test_canonical_dsl() {
    let registry = FormatRegistry::with_defaults();
    let output = registry.convert(SAMPLE, "nuggt", "nuggt").unwrap();

    insta::assert_snapshot!(output.trim_end(), @r###"
    Welcome back
    [3]: { [2]: card: (title: "<Hi, there>", highlight: "<Why: greet first>"), button: [(label: Go), prompt: Submit <emailId>] }
    [3]: { [2]: continue, input: [(placeholder: Email), emailId] }
    accordion: (trigger: What?, content: This)
    accordion: (trigger: Why?, content: "<Because, reasons>")
    "###);
}

#[test]
fn test_treeviz_cannot_be_parsed() {
    let registry = FormatRegistry::with_defaults();
    assert!(matches!(
        registry.convert("x", "treeviz", "nuggt"),
        Err(FormatError::NotSupported(_))
    ));
}

#[test]
fn test_unknown_target_format() {
    let registry = FormatRegistry::with_defaults();
    let error = registry.convert("x", "nuggt", "html").unwrap_err();
    assert_eq!(error.to_string(), "unknown format 'html'");
}
