/// Options controlling how the parser annotates the AST it produces.
///
/// Both options exist for comparison workflows (snapshotting, golden
/// ASTs, builder-expression round-trips) where full location identity
/// would get in the way.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ParseOptions {
    /// When `true`, nodes carry no [`Loc`](crate::Loc) at all. Two
    /// no-location parses of the same text compare equal purely by
    /// structure.
    pub no_location: bool,

    /// When `true`, nodes carry a `Loc` without the source
    /// back-reference, so ASTs parsed from distinct source handles
    /// with identical text still compare equal.
    pub no_source: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn no_location(mut self) -> Self {
        self.no_location = true;
        self
    }

    pub fn no_source(mut self) -> Self {
        self.no_source = true;
        self
    }
}
