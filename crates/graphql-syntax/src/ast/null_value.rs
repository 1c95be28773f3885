use crate::ast::append_loc_source_slice;
use crate::ast::AstNode;
use crate::Loc;
use inherent::inherent;

/// A `null` literal.
#[derive(Clone, Debug, PartialEq)]
pub struct NullValue<'src> {
    pub loc: Option<Loc<'src>>,
}

#[inherent]
impl AstNode for NullValue<'_> {
    pub fn append_source(&self, sink: &mut String, body: &str) {
        append_loc_source_slice(self.loc, sink, body);
    }
}
