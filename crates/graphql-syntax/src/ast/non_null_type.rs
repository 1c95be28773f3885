use crate::ast::append_loc_source_slice;
use crate::ast::AstNode;
use crate::ast::TypeAnnotation;
use crate::Loc;
use inherent::inherent;

/// A non-null wrapper produced by a trailing `!`, e.g. `ID!` or
/// `[Int]!`.
///
/// The wrapped type is always a `Named` or `List` annotation; the
/// grammar applies `!` once per wrapping level.
#[derive(Clone, Debug, PartialEq)]
pub struct NonNullType<'src> {
    pub loc: Option<Loc<'src>>,
    pub wrapped_type: Box<TypeAnnotation<'src>>,
}

#[inherent]
impl AstNode for NonNullType<'_> {
    pub fn append_source(&self, sink: &mut String, body: &str) {
        append_loc_source_slice(self.loc, sink, body);
    }
}
