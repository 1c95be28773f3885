use crate::ast::append_loc_source_slice;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::Value;
use crate::Loc;
use inherent::inherent;

/// A named argument (`name: value`) on a field or directive.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument<'src> {
    pub loc: Option<Loc<'src>>,
    pub name: Name<'src>,
    pub value: Value<'src>,
}

#[inherent]
impl AstNode for Argument<'_> {
    pub fn append_source(&self, sink: &mut String, body: &str) {
        append_loc_source_slice(self.loc, sink, body);
    }
}
