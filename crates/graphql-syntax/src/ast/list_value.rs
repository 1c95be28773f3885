use crate::ast::append_loc_source_slice;
use crate::ast::AstNode;
use crate::ast::Value;
use crate::Loc;
use inherent::inherent;

/// A list literal: `[v1, v2, ...]`. May be empty.
#[derive(Clone, Debug, PartialEq)]
pub struct ListValue<'src> {
    pub loc: Option<Loc<'src>>,
    pub values: Vec<Value<'src>>,
}

#[inherent]
impl AstNode for ListValue<'_> {
    pub fn append_source(&self, sink: &mut String, body: &str) {
        append_loc_source_slice(self.loc, sink, body);
    }
}
