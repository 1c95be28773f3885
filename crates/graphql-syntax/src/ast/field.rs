use crate::ast::append_loc_source_slice;
use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::SelectionSet;
use crate::Loc;
use inherent::inherent;

/// A field selection, optionally aliased, with arguments, directives,
/// and a nested selection set.
///
/// An alias is recognized purely by lookahead: a `:` immediately after
/// the first name turns that name into the alias and the following
/// name into the field name.
#[derive(Clone, Debug, PartialEq)]
pub struct Field<'src> {
    pub alias: Option<Name<'src>>,
    pub arguments: Vec<Argument<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub loc: Option<Loc<'src>>,
    pub name: Name<'src>,
    pub selection_set: Option<SelectionSet<'src>>,
}

#[inherent]
impl AstNode for Field<'_> {
    pub fn append_source(&self, sink: &mut String, body: &str) {
        append_loc_source_slice(self.loc, sink, body);
    }
}
