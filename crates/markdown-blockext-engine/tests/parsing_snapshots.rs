use markdown_blockext_engine::{Config, Document, Error, parse_str, parsing::snapshot};

#[test]
fn fixture_sections_and_links() {
    assert_fixture("sections_and_links");
}

#[test]
fn fixture_options_and_code() {
    assert_fixture("options_and_code");
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn assert_fixture(name: &str) {
    let md = read_fixture(name);
    let doc = parse_str(&md, &Config::default()).unwrap();
    snapshot::invariants(&doc);

    let snap = snapshot::normalize(&doc);
    insta::assert_yaml_snapshot!(name, snap);
}

/// Every block span slices back to non-empty text.
#[test]
fn lossless_span_invariant() {
    let md = read_fixture("sections_and_links");
    let doc = parse_str(&md, &Config::default()).unwrap();

    for (_, block) in doc.tree.iter() {
        let text = doc.rope().slice_to_cow(block.span.start..block.span.end);
        assert!(!text.is_empty());
    }
}

#[test]
fn errors_name_the_block_and_position() {
    let err = parse_str("# Title\n\n@{\"type\": \"x\"}\n\n! late\n", &Config::default()).unwrap_err();

    assert!(matches!(err, Error::Document(_)));
    assert_eq!(
        err.to_string(),
        "options block at line 3, column 1 must immediately precede the alert block it configures"
    );
}

#[test]
fn parses_from_bytes() {
    let doc = Document::from_bytes(b"# One\n", &Config::default()).unwrap();
    assert_eq!(doc.resolve_reference("one").map(|r| r.url).as_deref(), Some("#one"));

    assert!(Document::from_bytes(&[0xff, 0xfe], &Config::default()).is_err());
}
