use crate::ast::append_loc_source_slice;
use crate::ast::AstNode;
use crate::Loc;
use inherent::inherent;

/// A string literal. The value is the decoded content: escape
/// sequences resolved, surrounding quotes stripped.
#[derive(Clone, Debug, PartialEq)]
pub struct StringValue<'src> {
    pub loc: Option<Loc<'src>>,
    pub value: String,
}

#[inherent]
impl AstNode for StringValue<'_> {
    pub fn append_source(&self, sink: &mut String, body: &str) {
        append_loc_source_slice(self.loc, sink, body);
    }
}
