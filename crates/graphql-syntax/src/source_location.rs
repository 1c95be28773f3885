/// A resolved (line, column) pair within a source text.
///
/// **Both values are 1-based:** the first character of a document is at
/// line 1, column 1. Columns count bytes on the current line, matching
/// the byte offsets carried by [`Loc`](crate::Loc) and by syntax
/// errors.
///
/// If the owning [`GraphQLSource`](crate::GraphQLSource) carries a
/// `location_offset`, that offset has already been applied to any
/// `SourceLocation` handed out by the diagnostic engine.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SourceLocation {
    /// Line number (1-based: first line is 1).
    pub line: usize,
    /// Byte column within the line (1-based: first column is 1).
    pub column: usize,
}

impl SourceLocation {
    /// Creates a new `SourceLocation` from 1-based line and column.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
