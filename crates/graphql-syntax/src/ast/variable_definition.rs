use crate::ast::append_loc_source_slice;
use crate::ast::AstNode;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::ast::Variable;
use crate::Loc;
use inherent::inherent;

/// A variable definition within an operation's variable list, e.g.
/// `$id: ID! = 4`.
///
/// `default_value` is `None` when no `=` appeared. The default value,
/// when present, is a const value: variable references inside it are a
/// syntax error.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition<'src> {
    pub default_value: Option<Value<'src>>,
    pub loc: Option<Loc<'src>>,
    pub var_type: TypeAnnotation<'src>,
    pub variable: Variable<'src>,
}

#[inherent]
impl AstNode for VariableDefinition<'_> {
    pub fn append_source(&self, sink: &mut String, body: &str) {
        append_loc_source_slice(self.loc, sink, body);
    }
}
