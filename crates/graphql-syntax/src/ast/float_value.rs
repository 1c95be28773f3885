use crate::ast::append_loc_source_slice;
use crate::ast::AstNode;
use crate::Loc;
use inherent::inherent;
use std::borrow::Cow;

/// A float literal. The value is the raw lexeme, preserved verbatim.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatValue<'src> {
    pub loc: Option<Loc<'src>>,
    pub value: Cow<'src, str>,
}

#[inherent]
impl AstNode for FloatValue<'_> {
    pub fn append_source(&self, sink: &mut String, body: &str) {
        append_loc_source_slice(self.loc, sink, body);
    }
}
