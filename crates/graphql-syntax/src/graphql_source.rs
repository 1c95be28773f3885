use crate::SourceLocation;

/// An immutable carrier of GraphQL source text plus the metadata used
/// by diagnostics.
///
/// The `name` appears in rendered syntax errors (e.g.
/// `Syntax Error MyQuery.graphql (1:6) ...`) and defaults to
/// `"GraphQL"`. The `location_offset` shifts reported line/column
/// values for documents embedded inside a larger host file (a GraphQL
/// string inside a template, say); it defaults to `(1, 1)`, which is a
/// no-op. The column part of the offset applies only to the first line
/// of the body.
///
/// A `GraphQLSource` outlives the parse that consumes it: AST nodes
/// keep a back-reference to it in their [`Loc`](crate::Loc)s so
/// downstream tooling can re-render context.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphQLSource {
    body: String,
    name: String,
    location_offset: SourceLocation,
}

impl GraphQLSource {
    /// Creates a source named `"GraphQL"` with a `(1, 1)` location
    /// offset.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            name: "GraphQL".to_string(),
            location_offset: SourceLocation::new(1, 1),
        }
    }

    /// Replaces the diagnostic name (e.g. a file name).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replaces the location offset applied to reported positions.
    ///
    /// `line` and `column` are 1-based; `(1, 1)` means "not embedded".
    pub fn with_location_offset(mut self, line: usize, column: usize) -> Self {
        self.location_offset = SourceLocation::new(line, column);
        self
    }

    /// The source text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The diagnostic name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The location offset for embedded sources.
    pub fn location_offset(&self) -> SourceLocation {
        self.location_offset
    }
}

impl From<&str> for GraphQLSource {
    fn from(body: &str) -> Self {
        GraphQLSource::new(body)
    }
}

impl From<String> for GraphQLSource {
    fn from(body: String) -> Self {
        GraphQLSource::new(body)
    }
}
