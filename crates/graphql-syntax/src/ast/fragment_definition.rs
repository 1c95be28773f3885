use crate::ast::append_loc_source_slice;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::SelectionSet;
use crate::Loc;
use inherent::inherent;

/// A named fragment definition:
/// `fragment Name on Type @dirs { ... }`.
///
/// The name may be any GraphQL name except `on`.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition<'src> {
    pub directives: Vec<Directive<'src>>,
    pub loc: Option<Loc<'src>>,
    pub name: Name<'src>,
    pub selection_set: SelectionSet<'src>,
    pub type_condition: NamedType<'src>,
}

#[inherent]
impl AstNode for FragmentDefinition<'_> {
    pub fn append_source(&self, sink: &mut String, body: &str) {
        append_loc_source_slice(self.loc, sink, body);
    }
}
