use crate::ast::append_loc_source_slice;
use crate::ast::AstNode;
use crate::Loc;
use inherent::inherent;
use std::borrow::Cow;

/// A GraphQL name (identifier) matching `[_A-Za-z][_A-Za-z0-9]*`.
///
/// Names are used for operation names, field names, aliases, argument
/// names, variable names, directive names, type names, and enum
/// values. The value is a zero-copy slice of the source text.
///
/// Every keyword (`query`, `fragment`, `on`, `true`, ...) is also a
/// valid name; the grammar's few exclusions (a fragment may not be
/// named `on`, `on`/`true`/`false`/`null` are not enum values) are
/// enforced by the parser, not here.
#[derive(Clone, Debug, PartialEq)]
pub struct Name<'src> {
    pub loc: Option<Loc<'src>>,
    pub value: Cow<'src, str>,
}

impl Name<'_> {
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

#[inherent]
impl AstNode for Name<'_> {
    pub fn append_source(&self, sink: &mut String, body: &str) {
        append_loc_source_slice(self.loc, sink, body);
    }
}
