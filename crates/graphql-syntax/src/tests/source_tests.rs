//! Tests for the source handle and `Loc`.

use crate::GraphQLSource;
use crate::Loc;
use crate::SourceLocation;

// =============================================================================
// GraphQLSource
// =============================================================================

#[test]
fn source_defaults() {
    let source = GraphQLSource::new("{ a }");
    assert_eq!(source.body(), "{ a }");
    assert_eq!(source.name(), "GraphQL");
    assert_eq!(source.location_offset(), SourceLocation::new(1, 1));
}

#[test]
fn source_builders() {
    let source = GraphQLSource::new("query")
        .with_name("MyQuery.graphql")
        .with_location_offset(7, 3);
    assert_eq!(source.name(), "MyQuery.graphql");
    assert_eq!(source.location_offset(), SourceLocation::new(7, 3));
}

#[test]
fn source_from_str() {
    let source: GraphQLSource = "{ a }".into();
    assert_eq!(source.body(), "{ a }");
}

// =============================================================================
// Loc
// =============================================================================

#[test]
fn loc_display_includes_source_name() {
    let source = GraphQLSource::new("irrelevant").with_name("foo");
    let loc = Loc::with_source(10, 25, &source);
    assert_eq!(format!("{loc}"), "<Loc start=10 end=25 source=foo>");
    // Debug uses the same angle form.
    assert_eq!(format!("{loc:?}"), "<Loc start=10 end=25 source=foo>");
}

#[test]
fn loc_display_without_source() {
    let loc = Loc::new(0, 4);
    assert_eq!(format!("{loc}"), "<Loc start=0 end=4 source=<none>>");
}

#[test]
fn loc_equality_is_source_identity() {
    let source_a = GraphQLSource::new("{ a }");
    let source_b = GraphQLSource::new("{ a }");

    assert_eq!(Loc::new(0, 4), Loc::new(0, 4));
    assert_ne!(Loc::new(0, 4), Loc::new(0, 5));

    assert_eq!(
        Loc::with_source(0, 4, &source_a),
        Loc::with_source(0, 4, &source_a)
    );
    // Identical text, distinct handles: not equal.
    assert_ne!(
        Loc::with_source(0, 4, &source_a),
        Loc::with_source(0, 4, &source_b)
    );
    // Present vs. absent back-reference: not equal.
    assert_ne!(Loc::with_source(0, 4, &source_a), Loc::new(0, 4));
}

#[test]
fn loc_len() {
    let loc = Loc::new(4, 8);
    assert_eq!(loc.len(), 4);
    assert!(!loc.is_empty());
    assert!(Loc::new(3, 3).is_empty());
}
