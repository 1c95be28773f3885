use crate::ast::append_loc_source_slice;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::Value;
use crate::Loc;
use inherent::inherent;

/// A single `name: value` entry within an object literal.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField<'src> {
    pub loc: Option<Loc<'src>>,
    pub name: Name<'src>,
    pub value: Value<'src>,
}

#[inherent]
impl AstNode for ObjectField<'_> {
    pub fn append_source(&self, sink: &mut String, body: &str) {
        append_loc_source_slice(self.loc, sink, body);
    }
}
