use crate::ast::append_loc_source_slice;
use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::Loc;
use inherent::inherent;

/// A directive annotation: `@name` or `@name(args)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive<'src> {
    pub arguments: Vec<Argument<'src>>,
    pub loc: Option<Loc<'src>>,
    pub name: Name<'src>,
}

#[inherent]
impl AstNode for Directive<'_> {
    pub fn append_source(&self, sink: &mut String, body: &str) {
        append_loc_source_slice(self.loc, sink, body);
    }
}
