use crate::ast::append_loc_source_slice;
use crate::ast::AstNode;
use crate::ast::Selection;
use crate::Loc;
use inherent::inherent;

/// A brace-delimited, ordered list of selections. Always non-empty.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet<'src> {
    pub loc: Option<Loc<'src>>,
    pub selections: Vec<Selection<'src>>,
}

#[inherent]
impl AstNode for SelectionSet<'_> {
    pub fn append_source(&self, sink: &mut String, body: &str) {
        append_loc_source_slice(self.loc, sink, body);
    }
}
