use crate::ast::append_loc_source_slice;
use crate::ast::AstNode;
use crate::Loc;
use inherent::inherent;
use std::borrow::Cow;

/// An enum value literal: a bare name in value position.
///
/// Never `true`, `false`, `null` (those decode to boolean/null
/// values), and never the reserved `on`.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue<'src> {
    pub loc: Option<Loc<'src>>,
    pub value: Cow<'src, str>,
}

#[inherent]
impl AstNode for EnumValue<'_> {
    pub fn append_source(&self, sink: &mut String, body: &str) {
        append_loc_source_slice(self.loc, sink, body);
    }
}
