use crate::ast::append_loc_source_slice;
use crate::ast::AstNode;
use crate::ast::TypeAnnotation;
use crate::Loc;
use inherent::inherent;

/// A list type reference, e.g. `[String]`. The `Loc` covers the
/// brackets.
#[derive(Clone, Debug, PartialEq)]
pub struct ListType<'src> {
    pub element_type: Box<TypeAnnotation<'src>>,
    pub loc: Option<Loc<'src>>,
}

#[inherent]
impl AstNode for ListType<'_> {
    pub fn append_source(&self, sink: &mut String, body: &str) {
        append_loc_source_slice(self.loc, sink, body);
    }
}
