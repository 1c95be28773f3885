use crate::ast::append_loc_source_slice;
use crate::ast::AstNode;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::Loc;
use inherent::inherent;

// =============================================================================
// Document
// =============================================================================

/// Root AST node: an ordered sequence of definitions.
///
/// The document's `Loc` spans from the first definition's first token
/// to the end of input, so it covers trailing insignificant characters
/// after the last definition.
#[derive(Clone, Debug, PartialEq)]
pub struct Document<'src> {
    pub definitions: Vec<Definition<'src>>,
    pub loc: Option<Loc<'src>>,
}

impl<'src> Document<'src> {
    /// Iterate over only the operation definitions.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition<'src>> {
        self.definitions.iter().filter_map(|d| match d {
            Definition::Operation(op) => Some(op),
            Definition::Fragment(_) => None,
        })
    }

    /// Iterate over only the fragment definitions.
    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition<'src>> {
        self.definitions.iter().filter_map(|d| match d {
            Definition::Fragment(frag) => Some(frag),
            Definition::Operation(_) => None,
        })
    }
}

// =============================================================================
// Definition
// =============================================================================

/// A top-level definition: an operation or a fragment.
#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq)]
pub enum Definition<'src> {
    Fragment(FragmentDefinition<'src>),
    Operation(OperationDefinition<'src>),
}

#[inherent]
impl AstNode for Document<'_> {
    pub fn append_source(&self, sink: &mut String, body: &str) {
        append_loc_source_slice(self.loc, sink, body);
    }
}

#[inherent]
impl AstNode for Definition<'_> {
    pub fn append_source(&self, sink: &mut String, body: &str) {
        match self {
            Definition::Fragment(d) => d.append_source(sink, body),
            Definition::Operation(d) => d.append_source(sink, body),
        }
    }
}
