use crate::ast::AstNode;
use crate::ast::ListType;
use crate::ast::NamedType;
use crate::ast::NonNullType;
use crate::Loc;
use inherent::inherent;

/// A type reference: `Name`, `[Type]`, or either wrapped by a
/// trailing `!`.
///
/// `!` applies at most once per wrapping level, so `[T]!` and `[T!]!`
/// are both expressible but `T!!` is not — the parser never produces a
/// `NonNull` directly inside a `NonNull`.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation<'src> {
    List(ListType<'src>),
    Named(NamedType<'src>),
    NonNull(NonNullType<'src>),
}

impl<'src> TypeAnnotation<'src> {
    /// The location of whichever variant this is.
    pub fn loc(&self) -> Option<Loc<'src>> {
        match self {
            TypeAnnotation::List(t) => t.loc,
            TypeAnnotation::Named(t) => t.loc,
            TypeAnnotation::NonNull(t) => t.loc,
        }
    }
}

#[inherent]
impl AstNode for TypeAnnotation<'_> {
    pub fn append_source(&self, sink: &mut String, body: &str) {
        match self {
            TypeAnnotation::List(t) => t.append_source(sink, body),
            TypeAnnotation::Named(t) => t.append_source(sink, body),
            TypeAnnotation::NonNull(t) => t.append_source(sink, body),
        }
    }
}
