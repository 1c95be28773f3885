use crate::ast::append_loc_source_slice;
use crate::ast::AstNode;
use crate::Loc;
use inherent::inherent;

/// A `true` or `false` literal.
#[derive(Clone, Debug, PartialEq)]
pub struct BooleanValue<'src> {
    pub loc: Option<Loc<'src>>,
    pub value: bool,
}

#[inherent]
impl AstNode for BooleanValue<'_> {
    pub fn append_source(&self, sink: &mut String, body: &str) {
        append_loc_source_slice(self.loc, sink, body);
    }
}
