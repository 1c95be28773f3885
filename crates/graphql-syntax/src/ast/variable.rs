use crate::ast::append_loc_source_slice;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::Loc;
use inherent::inherent;

/// A variable reference: `$name`. The `Loc` covers the `$`.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable<'src> {
    pub loc: Option<Loc<'src>>,
    pub name: Name<'src>,
}

#[inherent]
impl AstNode for Variable<'_> {
    pub fn append_source(&self, sink: &mut String, body: &str) {
        append_loc_source_slice(self.loc, sink, body);
    }
}
