//! Whole-document parsing tests: options payloads, section nesting, ids and
//! heading links working together.

use markdown_blockext_config::{Config, WrapperKind};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::error::{BlockName, DocumentError, Error, MalformedReason, OrphanCause, Position};
use crate::format::FormatError;
use crate::parsing::{
    Document, ResolvedLink,
    blocks::{BlockId, BlockKind},
    inline::InlineNode,
    parse_str,
    rope::slice_to_string,
    snapshot,
};

fn parse(md: &str) -> Document {
    let doc = parse_str(md, &Config::default()).unwrap();
    snapshot::invariants(&doc);
    doc
}

fn parse_err(md: &str) -> DocumentError {
    match parse_str(md, &Config::default()) {
        Err(Error::Document(err)) => err,
        Err(other) => panic!("expected a document error, got {other}"),
        Ok(doc) => panic!("expected an error, got {:?}", doc.tree),
    }
}

/// Section ids in document order.
fn section_ids(doc: &Document) -> Vec<String> {
    doc.tree
        .sections()
        .map(|(_, s)| s.id.clone().unwrap_or_default())
        .collect()
}

fn only_root(doc: &Document) -> BlockId {
    assert_eq!(doc.tree.roots().len(), 1, "{:#?}", doc.tree);
    doc.tree.roots()[0]
}

fn url(doc: &Document, label: &str) -> Option<String> {
    doc.resolve_reference(label).map(|r| r.url)
}

// Options payloads

#[test]
fn payload_configures_the_next_alert() {
    let doc = parse("@{\"type\": \"warning\"}\n! Careful now\n");

    let alert = only_root(&doc);
    let BlockKind::Alert(alert_block) = &doc.tree[alert].kind else {
        panic!("expected an alert");
    };
    assert_eq!(alert_block.options.alert_type, "warning");
    assert_eq!(alert_block.class_name.as_deref(), Some("alert-warning"));
    assert_eq!(doc.content(alert).unwrap(), "Careful now");
}

#[test]
fn multi_line_payload_with_quotes_and_braces_in_strings() {
    let md = concat!(
        "@{\n",
        "  \"title\": \"say \\\"hi\\\" {x}\",\n",
        "  \"line_numbers\": true }\n",
        "```rust\n",
        "fn main() {}\n",
        "```\n",
    );
    let doc = parse(md);

    let code = only_root(&doc);
    let BlockKind::FencedCode(code_block) = &doc.tree[code].kind else {
        panic!("expected a code block");
    };
    let options = code_block.options.as_ref().unwrap();
    assert_eq!(options.title.as_deref(), Some("say \"hi\" {x}"));
    assert!(options.line_numbers);
    assert!(options.copy_icon);
    assert_eq!(code_block.language(), Some("rust"));
    assert_eq!(code_block.class_name.as_deref(), Some("language-rust"));
    assert_eq!(doc.content(code).unwrap(), "fn main() {}\n");
}

#[test]
fn payload_language_overrides_info_string() {
    let doc = parse("@{\"language\": \"toml\"}\n```\n[a]\n```\n");

    let BlockKind::FencedCode(code) = &doc.tree[only_root(&doc)].kind else {
        panic!("expected a code block");
    };
    assert_eq!(code.class_name.as_deref(), Some("language-toml"));
}

#[test]
fn text_after_closing_brace_is_ignored() {
    let doc = parse("@{\"type\": \"tip\"} trailing words\n! x\n");

    let BlockKind::Alert(alert) = &doc.tree[only_root(&doc)].kind else {
        panic!("expected an alert");
    };
    assert_eq!(alert.options.alert_type, "tip");
}

#[test]
fn consecutive_payloads_orphan_the_first() {
    let err = parse_err("@{\"type\": \"a\"}\n@{\"type\": \"b\"}\n! x\n");

    assert_eq!(
        err,
        DocumentError::OrphanedPayload {
            block: BlockName::OptionsBlock,
            position: Position { line: 1, column: 1 },
            cause: OrphanCause::Superseded,
        }
    );
}

#[test]
fn blank_line_before_consumer_is_mispositioned() {
    let err = parse_err("text\n\n  @{\"type\": \"x\"}\n\n! a\n");

    assert_eq!(
        err,
        DocumentError::MispositionedPayload {
            block: BlockName::OptionsBlock,
            position: Position { line: 3, column: 3 },
            consumer: BlockName::AlertBlock,
        }
    );
}

#[test]
fn paragraph_between_payload_and_consumer_is_mispositioned() {
    let err = parse_err("@{}\nplain text\n# Heading\n");

    assert!(matches!(
        err,
        DocumentError::MispositionedPayload {
            consumer: BlockName::SectionBlock,
            ..
        }
    ));
}

#[test]
fn payload_at_end_is_unconsumed() {
    let err = parse_err("some text\n@{}\n");

    assert_eq!(
        err,
        DocumentError::OrphanedPayload {
            block: BlockName::OptionsBlock,
            position: Position { line: 2, column: 1 },
            cause: OrphanCause::Unconsumed,
        }
    );
}

#[test]
fn unterminated_payload_is_malformed() {
    let err = parse_err("# Title\n@{\"type\": \"x\",\n\"icon\": \"}\n");

    assert_eq!(
        err,
        DocumentError::MalformedPayload {
            block: BlockName::OptionsBlock,
            position: Position { line: 2, column: 1 },
            raw: "{\"type\": \"x\",\n\"icon\": \"}".to_string(),
            reason: MalformedReason::Unterminated,
        }
    );
}

#[rstest]
#[case::wrong_type("@{\"line_numbers\": \"yes\"}\n```\n```\n")]
#[case::not_json("@{type: warning}\n! x\n")]
#[case::unknown_element("@{\"element\": \"div\"}\n# H\n")]
fn invalid_payload_data_is_malformed(#[case] md: &str) {
    let err = parse_err(md);

    assert!(
        matches!(
            &err,
            DocumentError::MalformedPayload {
                reason: MalformedReason::InvalidData(_),
                position: Position { line: 1, column: 1 },
                ..
            }
        ),
        "{err}"
    );
}

#[test]
fn bad_class_format_reports_the_block() {
    let err = parse_err("intro\n\n@{\"class_format\": \"a-{1}\"}\n! x\n");

    assert_eq!(
        err,
        DocumentError::InvalidFormat {
            block: BlockName::AlertBlock,
            position: Position { line: 4, column: 1 },
            format: "a-{1}".to_string(),
            source: FormatError::MissingArgument(1),
        }
    );
}

#[test]
fn fences_are_raw_zones() {
    let doc = parse("```\n# not a heading\n@{\n! nor an alert\n```\n");

    let code = only_root(&doc);
    assert!(matches!(doc.tree[code].kind, BlockKind::FencedCode(_)));
    assert_eq!(doc.tree.sections().count(), 0);
    assert_eq!(
        doc.content(code).unwrap(),
        "# not a heading\n@{\n! nor an alert\n"
    );
}

#[test]
fn unterminated_fence_runs_to_end() {
    let doc = parse("```\ncode\n# still code\n");

    let code = only_root(&doc);
    assert_eq!(doc.content(code).unwrap(), "code\n# still code\n");
}

// Sections

#[test]
fn siblings_and_nesting_follow_levels() {
    let doc = parse("# A\n## B\n# C\n");

    assert_eq!(section_ids(&doc), vec!["a", "b", "c"]);
    let roots = doc.tree.roots();
    assert_eq!(roots.len(), 2);

    let a = &doc.tree[roots[0]];
    assert_eq!(a.children.len(), 2);
    assert!(matches!(doc.tree[a.children[0]].kind, BlockKind::Heading { level: 1, .. }));
    assert_eq!(doc.tree[a.children[1]].section().map(|s| s.level), Some(2));
}

#[test]
fn depths_mirror_heading_levels() {
    let doc = parse("# a\n## b\n### c\n## d\n# e\n");

    let depths: Vec<_> = doc.tree.sections().map(|(id, _)| doc.tree.depth(id)).collect();
    assert_eq!(depths, vec![1, 2, 3, 2, 1]);

    let (c, _) = doc.tree.sections().nth(2).unwrap();
    let (b, _) = doc.tree.sections().nth(1).unwrap();
    assert_eq!(doc.tree[c].parent, Some(b));
}

#[test]
fn skipped_levels_still_nest() {
    let doc = parse("# a\n### c\n## b\n");

    let depths: Vec<_> = doc.tree.sections().map(|(id, _)| doc.tree.depth(id)).collect();
    assert_eq!(depths, vec![1, 2, 2]);
}

#[test]
fn section_span_covers_its_content() {
    let md = "# A\ntext\n## B\nmore\n# C\n";
    let doc = parse(md);

    let a = doc.tree.roots()[0];
    assert_eq!(slice_to_string(doc.rope(), doc.tree[a].span), "# A\ntext\n## B\nmore\n");
}

#[rstest]
#[case("# X\n# X\n", &["x", "x-1"])]
#[case("# Intro\n# Intro\n# Intro\n", &["intro", "intro-1", "intro-2"])]
#[case("# Intro 1\n# Intro\n# Intro\n", &["intro-1", "intro", "intro-2"])]
#[case("# ¿Qué?\n# !!!\n", &["qu", "section"])]
fn ids_are_unique(#[case] md: &str, #[case] expected: &[&str]) {
    assert_eq!(section_ids(&parse(md)), expected);
}

#[test]
fn nested_duplicates_are_numbered_in_close_order() {
    let doc = parse("# Intro\n## Intro\n");

    // The inner section closes first.
    assert_eq!(section_ids(&doc), vec!["intro-1", "intro"]);
}

#[test]
fn unwrapped_heading_stands_alone() {
    let doc = parse("# Outer\n@{\"element\": \"none\"}\n## Plain\ntext\n");

    let outer = only_root(&doc);
    let kinds: Vec<_> = doc.tree.children(outer).iter().map(|&c| doc.tree[c].kind.name()).collect();
    assert_eq!(
        kinds,
        vec![BlockName::Heading, BlockName::Heading, BlockName::Paragraph]
    );
    assert_eq!(section_ids(&doc), vec!["outer"]);
}

#[test]
fn wrapper_comes_from_the_payload() {
    let doc = parse("@{\"element\": \"article\", \"attributes\": {\"class\": \"wide\"}}\n# A\n");

    let section = doc.tree[only_root(&doc)].section().unwrap().clone();
    assert_eq!(section.wrapper, WrapperKind::Article);
    assert_eq!(section.options.attributes.get("class").map(String::as_str), Some("wide"));
}

#[test]
fn id_generation_can_be_turned_off() {
    let doc = parse("@{\"generate_id\": false}\n# A\n# B\n");

    assert_eq!(section_ids(&doc), vec!["", "b"]);
    assert_eq!(url(&doc, "a"), None);
    assert_eq!(url(&doc, "b").as_deref(), Some("#b"));
}

// Heading links

#[test]
fn explicit_definition_beats_heading_link() {
    let doc = parse("[Intro]: /custom \"Custom\"\n\n# Intro\n\n# Usage\n");

    assert_eq!(
        doc.resolve_reference("intro"),
        Some(ResolvedLink {
            url: "/custom".to_string(),
            title: Some("Custom".to_string()),
        })
    );
    assert_eq!(url(&doc, "USAGE").as_deref(), Some("#usage"));
}

#[test]
fn last_heading_wins_the_link() {
    let doc = parse("# Intro\n# Intro\n");

    assert_eq!(url(&doc, "Intro").as_deref(), Some("#intro-1"));
}

#[test]
fn auto_link_can_be_turned_off() {
    let doc = parse("@{\"auto_link\": false}\n# Quiet\n");

    assert_eq!(section_ids(&doc), vec!["quiet"]);
    assert_eq!(url(&doc, "Quiet"), None);
}

#[test]
fn paragraph_links_to_heading() {
    let md = "# Getting Started\n\nSee [Getting Started] or [the guide][getting started].\n";
    let doc = parse(md);

    let section = only_root(&doc);
    let paragraph = doc.tree.children(section)[1];
    let labels: Vec<_> = doc
        .inline(paragraph)
        .unwrap()
        .into_iter()
        .filter_map(|node| match node {
            InlineNode::ReferenceLink { label, .. } => Some(slice_to_string(doc.rope(), label)),
            _ => None,
        })
        .collect();

    assert_eq!(labels, vec!["Getting Started", "getting started"]);
    assert_eq!(url(&doc, &labels[1]).as_deref(), Some("#getting-started"));
}

// Host blocks

#[test]
fn alert_lines_drop_their_prefix() {
    let doc = parse("! one\n!\n! three\nafter\n");

    let roots = doc.tree.roots();
    assert_eq!(roots.len(), 2);
    assert_eq!(doc.content(roots[0]).unwrap(), "one\n\nthree");
    assert_eq!(doc.tree[roots[1]].kind, BlockKind::Paragraph);
}

#[test]
fn link_definitions_do_not_interrupt_paragraphs() {
    let doc = parse("text\n[a]: /b\n");

    let paragraph = only_root(&doc);
    assert_eq!(doc.content(paragraph).unwrap(), "text\n[a]: /b");
    assert!(doc.resolve_reference("a").is_none());
}

#[test]
fn disabled_extensions_fall_back_to_plain_blocks() {
    let mut config = Config::default();
    config.enabled.options_blocks = false;
    config.enabled.alerts = false;
    config.enabled.sections = false;
    config.enabled.code_blocks = false;

    let doc = parse_str("@{\"type\": \"x\"}\n! note\n\n# A\n## B\n```rust\n```\n", &config).unwrap();

    let kinds: Vec<_> = doc.tree.roots().iter().map(|&r| doc.tree[r].kind.name()).collect();
    assert_eq!(
        kinds,
        vec![
            BlockName::Paragraph,
            BlockName::Heading,
            BlockName::Heading,
            BlockName::CodeBlock,
        ]
    );
    let BlockKind::FencedCode(code) = &doc.tree[doc.tree.roots()[3]].kind else {
        panic!("expected a code block");
    };
    assert!(code.options.is_none());
    assert_eq!(code.class_name, None);
    assert!(doc.references.is_empty());
}

#[test]
fn unknown_block_is_rejected() {
    let doc = parse("# A\n");
    let bigger = parse("a\n\nb\n\nc\n");
    let (missing, _) = bigger.tree.iter().nth(2).unwrap();

    assert!(doc.content(missing).is_err());
    assert!(doc.inline(missing).is_err());
    assert_eq!(doc.resolve_reference("nothing"), None);
}
