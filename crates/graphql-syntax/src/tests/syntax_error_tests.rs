//! Tests for the rendered diagnostic format: header line, context
//! snippet, caret placement, and location offsets.

use crate::parse;
use crate::tests::utils::expect_syntax_error;
use crate::GraphQLSource;
use crate::SourceLocation;

#[test]
fn empty_input_renders_without_a_snippet() {
    let error = expect_syntax_error("");
    assert_eq!(
        error.description(),
        "Syntax Error GraphQL (1:1) Unexpected EOF\n\n"
    );
    assert_eq!(error.message(), "Unexpected EOF");
    assert_eq!(error.positions(), &[0]);
    assert_eq!(error.locations(), &[SourceLocation::new(1, 1)]);
}

#[test]
fn single_line_snippet_places_caret_under_column() {
    let error = expect_syntax_error("{");
    assert_eq!(
        error.description(),
        "Syntax Error GraphQL (1:2) Expected Name, found EOF\n\n1: {\n    ^\n"
    );
    assert_eq!(error.positions(), &[1]);
    assert_eq!(error.locations(), &[SourceLocation::new(1, 2)]);
}

#[test]
fn snippet_includes_surrounding_lines() {
    //               0 1  2345678 9  01112 13  14
    let error = expect_syntax_error("{\n  field\n  ?\n}");
    assert_eq!(
        error.description(),
        concat!(
            "Syntax Error GraphQL (3:3) Unexpected character \"?\"\n",
            "\n",
            "2:   field\n",
            "3:   ?\n",
            "     ^\n",
            "4: }\n",
        )
    );
    assert_eq!(error.locations(), &[SourceLocation::new(3, 3)]);
}

#[test]
fn snippet_on_first_line_has_no_preceding_line() {
    let error = expect_syntax_error("?\nfield");
    assert_eq!(
        error.description(),
        concat!(
            "Syntax Error GraphQL (1:1) Unexpected character \"?\"\n",
            "\n",
            "1: ?\n",
            "   ^\n",
            "2: field\n",
        )
    );
}

#[test]
fn error_past_a_final_newline_shows_the_previous_line() {
    // EOF sits on line 2, which has no content; only line 1 renders.
    let error = expect_syntax_error("{ f }\nquery Q\n");
    assert!(
        error.description().contains("(3:1) Expected {, found EOF"),
        "unexpected description:\n{}",
        error.description()
    );
}

#[test]
fn named_source_appears_in_the_header() {
    let source = GraphQLSource::new("query").with_name("MyQuery.graphql");
    let error = parse(&source).unwrap_err();
    assert!(
        error
            .description()
            .contains("MyQuery.graphql (1:6) Expected {, found EOF"),
        "unexpected description:\n{}",
        error.description()
    );
}

#[test]
fn location_offset_shifts_reported_locations() {
    let source = GraphQLSource::new("query").with_location_offset(5, 10);
    let error = parse(&source).unwrap_err();
    // Raw location is (1:6); the embedded offset shifts it.
    assert_eq!(error.locations(), &[SourceLocation::new(5, 15)]);
    assert!(error.description().starts_with("Syntax Error GraphQL (5:15)"));
}

#[test]
fn display_is_the_description() {
    let error = expect_syntax_error("{");
    assert_eq!(format!("{error}"), error.description());
}

#[test]
fn error_retains_the_source_handle() {
    let source = GraphQLSource::new("query").with_name("lifted.graphql");
    let error = parse(&source).unwrap_err();
    assert_eq!(error.source().name(), "lifted.graphql");
    assert_eq!(error.source().body(), "query");
}
