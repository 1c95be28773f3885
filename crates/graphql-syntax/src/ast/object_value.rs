use crate::ast::append_loc_source_slice;
use crate::ast::AstNode;
use crate::ast::ObjectField;
use crate::Loc;
use inherent::inherent;

/// An object literal: `{name: value, ...}`. May be empty. Field
/// order is preserved as written.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue<'src> {
    pub fields: Vec<ObjectField<'src>>,
    pub loc: Option<Loc<'src>>,
}

#[inherent]
impl AstNode for ObjectValue<'_> {
    pub fn append_source(&self, sink: &mut String, body: &str) {
        append_loc_source_slice(self.loc, sink, body);
    }
}
