use notefill::config::Catalog;
use notefill::parser::{parse_content, split_blocks, Block};

#[test]
fn test_split_email_template() {
    let catalog = Catalog::builtin();
    let document = split_blocks(&catalog.get("email-template").unwrap().source);

    let labels: Vec<_> = document.iter().map(Block::label).collect();
    assert_eq!(labels, vec![None, Some("b"), Some("c"), Some("a"), None]);

    assert_eq!(document.blocks[0].content().variables, vec!["from", "to"]);
    assert_eq!(document.blocks[1].content().variables, vec!["cc"]);
    assert_eq!(document.blocks[4].content().variables, vec!["body"]);
    assert!(document.iter().all(|block| block.content().sections.is_empty()));
}

#[test]
fn test_split_status_update_template() {
    let catalog = Catalog::builtin();
    let document = split_blocks(&catalog.get("status-update").unwrap().source);

    assert_eq!(document.len(), 4);
    assert_eq!(document.blocks[0].content().variables, vec!["Date"]);

    let sections: Vec<_> = document
        .iter()
        .skip(1)
        .map(|block| {
            let section = &block.content().sections[0];
            (section.label.as_str(), section.variables[0].as_str())
        })
        .collect();
    assert_eq!(
        sections,
        vec![
            ("This week's activities", "This Week's Activity"),
            ("Next week's activities", "Next Week's Activity"),
            ("Issues/Risks", "Issue"),
        ]
    );
}

#[test]
fn test_qa_response_keeps_single_braces_literal() {
    let catalog = Catalog::builtin();
    let document = split_blocks(&catalog.get("qa-response").unwrap().source);

    let content = document.blocks[0].content();
    assert_eq!(content.literal, "{{section:Note}}");
    assert_eq!(content.sections[0].variables, vec!["QA Note"]);
    assert!(content.sections[0].raw_content.contains("{Response}"));
}

#[test]
fn test_every_builtin_template_parses_cleanly() {
    for (key, entry) in Catalog::builtin().iter() {
        let document = split_blocks(&entry.source);
        assert!(!document.is_empty(), "{key} produced no blocks");
        for block in &document {
            let literal = &block.content().literal;
            assert!(!literal.contains("{{repeat:"), "{key} left a repeat opener");
            assert!(!literal.contains("{{/optional}}"), "{key} left an optional closer");
        }
    }
}

#[test]
fn test_label_may_contain_spaces_and_punctuation() {
    let content = parse_content("{{repeat:Follow ups needed!}}[Follow up]{{/repeat}}");
    assert_eq!(content.sections[0].label, "Follow ups needed!");
    assert_eq!(content.literal, "{{section:Follow ups needed!}}");
}

#[test]
fn test_directives_across_lines() {
    let document = split_blocks("Intro [a]\n{{optional:x}}\nline [b]\n{{/optional}}\n");

    assert_eq!(document.len(), 2);
    assert_eq!(document.blocks[0].content().literal, "Intro [a]\n");
    assert_eq!(document.blocks[1].content().literal, "\nline [b]\n");
}

#[test]
fn test_nested_optional_pairs_leftmost_with_nearest_closer() {
    let document = split_blocks("{{optional:a}}x{{optional:b}}y{{/optional}}z{{/optional}}");

    assert_eq!(
        document.blocks,
        vec![
            Block::Optional { label: "a".to_string(), content: parse_content("x{{optional:b}}y") },
            Block::Default(parse_content("z{{/optional}}")),
        ]
    );
    assert_eq!(document.blocks[1].content().literal, "z{{/optional}}");
}
