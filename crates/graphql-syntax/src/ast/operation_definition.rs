use crate::ast::append_loc_source_slice;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::OperationKind;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use crate::Loc;
use inherent::inherent;

/// An operation definition (query, mutation, or subscription).
///
/// `variable_definitions` is `None` when no parenthesized variable
/// list appeared at all, distinguishing `query Q { f }` from the
/// (grammatically impossible) empty list. A shorthand `{ ... }`
/// operation has `operation = Query`, no name, no variable
/// definitions, and no directives.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition<'src> {
    pub directives: Vec<Directive<'src>>,
    pub loc: Option<Loc<'src>>,
    pub name: Option<Name<'src>>,
    pub operation: OperationKind,
    pub selection_set: SelectionSet<'src>,
    pub variable_definitions: Option<Vec<VariableDefinition<'src>>>,
}

#[inherent]
impl AstNode for OperationDefinition<'_> {
    pub fn append_source(&self, sink: &mut String, body: &str) {
        append_loc_source_slice(self.loc, sink, body);
    }
}
