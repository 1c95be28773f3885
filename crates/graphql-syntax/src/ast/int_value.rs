use crate::ast::append_loc_source_slice;
use crate::ast::AstNode;
use crate::Loc;
use inherent::inherent;
use std::borrow::Cow;

/// An integer literal.
///
/// The value is the raw lexeme (including any leading `-`), preserved
/// verbatim so the representation stays lossless; numeric
/// interpretation is the caller's concern.
#[derive(Clone, Debug, PartialEq)]
pub struct IntValue<'src> {
    pub loc: Option<Loc<'src>>,
    pub value: Cow<'src, str>,
}

#[inherent]
impl AstNode for IntValue<'_> {
    pub fn append_source(&self, sink: &mut String, body: &str) {
        append_loc_source_slice(self.loc, sink, body);
    }
}
