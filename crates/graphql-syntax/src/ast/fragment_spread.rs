use crate::ast::append_loc_source_slice;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::Loc;
use inherent::inherent;

/// A spread of a named fragment: `...FragmentName @dirs`.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread<'src> {
    pub directives: Vec<Directive<'src>>,
    pub loc: Option<Loc<'src>>,
    pub name: Name<'src>,
}

#[inherent]
impl AstNode for FragmentSpread<'_> {
    pub fn append_source(&self, sink: &mut String, body: &str) {
        append_loc_source_slice(self.loc, sink, body);
    }
}
