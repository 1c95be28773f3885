use crate::ast::append_loc_source_slice;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::NamedType;
use crate::ast::SelectionSet;
use crate::Loc;
use inherent::inherent;

/// An anonymous selection branch: `... on Type @dirs { ... }`.
///
/// The type condition is optional: `... @dirs { ... }` and
/// `... { ... }` apply to the surrounding type.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment<'src> {
    pub directives: Vec<Directive<'src>>,
    pub loc: Option<Loc<'src>>,
    pub selection_set: SelectionSet<'src>,
    pub type_condition: Option<NamedType<'src>>,
}

#[inherent]
impl AstNode for InlineFragment<'_> {
    pub fn append_source(&self, sink: &mut String, body: &str) {
        append_loc_source_slice(self.loc, sink, body);
    }
}
