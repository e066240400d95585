//! Integration tests for name and series name extraction
//!
//! Covers tag order, relator handling and the CSL role views, comparing the
//! serialized buckets with JSON fixtures.

mod common;

use common::{extractor, field, field_with_indicators, to_json};
use marc_csl::{CslNameRole, Name};
use serde_json::json;

#[test]
fn test_names_follow_tag_order() {
    let extractor = extractor(vec![
        field("720", &[('a', "Person 8")]),
        field("100", &[('a', "Person 1")]),
        field("710", &[('a', "Person 7")]),
        field("100", &[('a', "Person 2")]),
        field("110", &[('a', "Person 3")]),
        field("600", &[('a', "Person 4")]),
        field("610", &[('a', "Person 5")]),
        field("700", &[('a', "Person 6")]),
    ]);

    assert_eq!(
        to_json(extractor.all_names()),
        json!({
            "aut": [
                {"family": "Person 1"},
                {"family": "Person 2"},
                {"family": "Person 3"},
                {"family": "Person 4"},
                {"family": "Person 5"},
                {"family": "Person 6"},
                {"family": "Person 7"},
                {"family": "Person 8"},
            ]
        })
    );
}

#[test]
fn test_skip_fields_without_name() {
    let extractor = extractor(vec![
        field("100", &[('a', "Name"), ('c', "Mr")]),
        field("100", &[('c', "Professor")]),
    ]);

    assert_eq!(
        to_json(extractor.all_names()),
        json!({"aut": [{"family": "Name", "suffix": "Mr"}]})
    );
}

#[test]
fn test_relator_code() {
    let extractor = extractor(vec![field(
        "100",
        &[('a', "Name"), ('c', "Mr"), ('4', "edt")],
    )]);

    assert_eq!(
        to_json(extractor.all_names()),
        json!({"edt": [{"family": "Name", "suffix": "Mr"}]})
    );
}

#[test]
fn test_relator_term_with_punctuation() {
    let extractor = extractor(vec![field_with_indicators(
        "100",
        '1',
        ' ',
        &[
            ('a', "Moule, C. F. D."),
            ('q', "(Charles Francis Digby),"),
            ('d', "1908-2007,"),
            ('e', "editor."),
        ],
    )]);

    assert_eq!(
        to_json(extractor.all_names()),
        json!({"edt": [{"family": "Moule, C. F. D."}]})
    );
}

#[test]
fn test_relator_term_and_code_are_merged() {
    let extractor = extractor(vec![field(
        "700",
        &[('a', "Smith, J."), ('e', "translator,"), ('e', "editor."), ('4', "trl")],
    )]);

    let names = extractor.all_names();
    assert_eq!(names.roles().collect::<Vec<_>>(), vec!["trl", "edt"]);
    assert_eq!(names.get("trl"), &[Name::family("Smith, J.")]);
}

#[test]
fn test_names_are_not_split() {
    let extractor = extractor(vec![
        field_with_indicators("100", '1', ' ', &[('a', "Fowler, Thaddeus Mortimer")]),
        field_with_indicators("100", '3', ' ', &[('a', "Bach, Johann Sebastian.")]),
    ]);

    assert_eq!(
        to_json(extractor.all_names()),
        json!({
            "aut": [
                {"family": "Fowler, Thaddeus Mortimer"},
                {"family": "Bach, Johann Sebastian."},
            ]
        })
    );
}

#[test]
fn test_dubious_author() {
    let extractor = extractor(vec![
        field("100", &[('a', "An author")]),
        field("100", &[('a', "Another author")]),
        field("100", &[('a', "Not really the author"), ('4', "dub")]),
    ]);

    assert_eq!(
        to_json(extractor.all_names()),
        json!({
            "aut": [{"family": "An author"}, {"family": "Another author"}],
            "dub": [{"family": "Not really the author"}],
        })
    );

    let authors: Vec<&str> = extractor
        .names_for(CslNameRole::Author)
        .iter()
        .map(|n| n.family.as_str())
        .collect();
    assert_eq!(authors, vec!["An author", "Another author"]);
}

#[test]
fn test_dubious_author_alone_is_the_author() {
    let extractor = extractor(vec![field("100", &[('a', "Attributed"), ('4', "dub")])]);
    assert_eq!(
        extractor.names_for(CslNameRole::Author),
        vec![&Name::family("Attributed")]
    );
}

#[test]
fn test_series_names() {
    let extractor = extractor(vec![
        field("800", &[('a', "Series author 1")]),
        field("800", &[('a', "Series author 2")]),
        field("810", &[('a', "Another series author")]),
        field("100", &[('a', "Not a series author")]),
    ]);

    assert_eq!(
        to_json(extractor.all_series_names()),
        json!({
            "aut": [
                {"family": "Series author 1"},
                {"family": "Series author 2"},
                {"family": "Another series author"},
            ]
        })
    );
    assert_eq!(extractor.names_for(CslNameRole::CollectionEditor).len(), 3);
}

#[test]
fn test_role_views() {
    let extractor = extractor(vec![
        field("100", &[('a', "Composer"), ('4', "cmp")]),
        field("700", &[('a', "Illustrator"), ('e', "illustrator.")]),
        field("700", &[('a', "Interviewer"), ('4', "ivr")]),
        field("700", &[('a', "Recipient"), ('e', "addressee")]),
        field("700", &[('a', "Publishing director"), ('4', "pbd")]),
        field("710", &[('a', "Studio"), ('4', "fmd")]),
    ]);

    let family = |role| {
        extractor
            .names_for(role)
            .iter()
            .map(|n| n.family.clone())
            .collect::<Vec<_>>()
    };

    assert_eq!(family(CslNameRole::Composer), vec!["Composer"]);
    assert_eq!(family(CslNameRole::Illustrator), vec!["Illustrator"]);
    assert_eq!(family(CslNameRole::Interviewer), vec!["Interviewer"]);
    assert_eq!(family(CslNameRole::Recipient), vec!["Recipient"]);
    assert_eq!(family(CslNameRole::EditorialDirector), vec!["Publishing director"]);
    assert_eq!(family(CslNameRole::Director), vec!["Studio"]);
    assert!(family(CslNameRole::Author).is_empty());
}
