use crate::ast::append_loc_source_slice;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::Loc;
use inherent::inherent;

/// A reference to a type by name, e.g. `User`. Also serves as the
/// type condition of fragments.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedType<'src> {
    pub loc: Option<Loc<'src>>,
    pub name: Name<'src>,
}

#[inherent]
impl AstNode for NamedType<'_> {
    pub fn append_source(&self, sink: &mut String, body: &str) {
        append_loc_source_slice(self.loc, sink, body);
    }
}
