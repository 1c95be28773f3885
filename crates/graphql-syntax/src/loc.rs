use crate::GraphQLSource;

/// A byte-range annotation carried by every AST node.
///
/// The range is half-open: `start` is the byte offset of the node's
/// first token and `end` is the offset just past its last token, so
/// `&source.body()[loc.start..loc.end]` is the node's exact source
/// text.
///
/// The optional `source` back-reference lets tooling re-render context
/// for a node without threading the source separately. It is omitted
/// when the parser runs in no-source mode.
///
/// # Equality
///
/// Two `Loc`s are equal when their ranges match and their sources are
/// the *same handle* (pointer identity), or both absent. Value
/// equality of distinct handles with identical text is intentionally
/// not equality here: a `Loc` points into one particular source.
#[derive(Clone, Copy)]
pub struct Loc<'src> {
    /// Byte offset of the first byte of the node (inclusive).
    pub start: usize,
    /// Byte offset one past the last byte of the node (exclusive).
    pub end: usize,
    /// The source this range indexes into, if retained.
    pub source: Option<&'src GraphQLSource>,
}

impl<'src> Loc<'src> {
    /// Creates a `Loc` without a source back-reference.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            source: None,
        }
    }

    /// Creates a `Loc` carrying a source back-reference.
    pub fn with_source(start: usize, end: usize, source: &'src GraphQLSource) -> Self {
        Self {
            start,
            end,
            source: Some(source),
        }
    }

    /// Returns the length of the range in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the range is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl PartialEq for Loc<'_> {
    fn eq(&self, other: &Self) -> bool {
        if self.start != other.start || self.end != other.end {
            return false;
        }
        match (self.source, other.source) {
            (None, None) => true,
            (Some(a), Some(b)) => std::ptr::eq(a, b),
            _ => false,
        }
    }
}

impl std::fmt::Display for Loc<'_> {
    /// The canonical textual form:
    /// `<Loc start=4 end=8 source=GraphQL>`, with `source=<none>` when
    /// the back-reference is absent.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<Loc start={} end={} source={}>",
            self.start,
            self.end,
            self.source.map(GraphQLSource::name).unwrap_or("<none>"),
        )
    }
}

impl std::fmt::Debug for Loc<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Same angle form as Display; deriving Debug would dump the
        // whole source body into every node's debug output.
        std::fmt::Display::fmt(self, f)
    }
}
