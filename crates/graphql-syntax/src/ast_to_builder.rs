//! Serializes a parsed [`Document`](ast::Document) back to a Rust
//! builder expression.
//!
//! The emitted text is a single expression over the AST constructors.
//! Evaluated in a context providing those constructors, the [`loc`]
//! helper, and the
//! [`UndefinedDefaultValue`](crate::UndefinedDefaultValue) sentinel —
//! i.e. `use graphql_syntax::ast::*;` plus
//! `use graphql_syntax::{loc, UndefinedDefaultValue};` — it
//! reconstructs a document structurally equal to the input, modulo
//! location sources: `loc(start, end)` produces source-less `Loc`s, so
//! equality holds against a parse run in no-source mode.
//!
//! This is a snapshotting/testing facility; it is a pure consumer of
//! the AST and nothing in the parser depends on it.

use crate::ast;
use crate::Loc;

/// The `loc(start, end)` helper referenced by emitted expressions.
///
/// Produces a `Loc` without a source back-reference.
pub fn loc<'src>(start: usize, end: usize) -> Option<Loc<'src>> {
    Some(Loc::new(start, end))
}

/// Emits a builder expression reconstructing `document`.
pub fn ast_to_builder_code(document: &ast::Document<'_>) -> String {
    document_expr(document)
}

// =============================================================================
// Per-node emitters
// =============================================================================

fn document_expr(document: &ast::Document<'_>) -> String {
    format!(
        "Document {{ definitions: {}, loc: {} }}",
        vec_expr(document.definitions.iter().map(definition_expr)),
        loc_expr(document.loc),
    )
}

fn definition_expr(definition: &ast::Definition<'_>) -> String {
    match definition {
        ast::Definition::Fragment(f) => {
            format!("Definition::Fragment({})", fragment_definition_expr(f))
        }
        ast::Definition::Operation(o) => {
            format!("Definition::Operation({})", operation_definition_expr(o))
        }
    }
}

fn operation_definition_expr(operation: &ast::OperationDefinition<'_>) -> String {
    let variable_definitions = match &operation.variable_definitions {
        Some(defs) => format!(
            "Some({})",
            vec_expr(defs.iter().map(variable_definition_expr))
        ),
        None => "None".to_string(),
    };
    format!(
        "OperationDefinition {{ directives: {}, loc: {}, name: {}, operation: OperationKind::{:?}, selection_set: {}, variable_definitions: {} }}",
        directives_expr(&operation.directives),
        loc_expr(operation.loc),
        opt_expr(operation.name.as_ref().map(name_expr)),
        operation.operation,
        selection_set_expr(&operation.selection_set),
        variable_definitions,
    )
}

fn fragment_definition_expr(fragment: &ast::FragmentDefinition<'_>) -> String {
    format!(
        "FragmentDefinition {{ directives: {}, loc: {}, name: {}, selection_set: {}, type_condition: {} }}",
        directives_expr(&fragment.directives),
        loc_expr(fragment.loc),
        name_expr(&fragment.name),
        selection_set_expr(&fragment.selection_set),
        named_type_expr(&fragment.type_condition),
    )
}

fn selection_set_expr(selection_set: &ast::SelectionSet<'_>) -> String {
    format!(
        "SelectionSet {{ loc: {}, selections: {} }}",
        loc_expr(selection_set.loc),
        vec_expr(selection_set.selections.iter().map(selection_expr)),
    )
}

fn selection_expr(selection: &ast::Selection<'_>) -> String {
    match selection {
        ast::Selection::Field(f) => format!("Selection::Field({})", field_expr(f)),
        ast::Selection::FragmentSpread(s) => {
            format!("Selection::FragmentSpread({})", fragment_spread_expr(s))
        }
        ast::Selection::InlineFragment(i) => {
            format!("Selection::InlineFragment({})", inline_fragment_expr(i))
        }
    }
}

fn field_expr(field: &ast::Field<'_>) -> String {
    format!(
        "Field {{ alias: {}, arguments: {}, directives: {}, loc: {}, name: {}, selection_set: {} }}",
        opt_expr(field.alias.as_ref().map(name_expr)),
        vec_expr(field.arguments.iter().map(argument_expr)),
        directives_expr(&field.directives),
        loc_expr(field.loc),
        name_expr(&field.name),
        opt_expr(field.selection_set.as_ref().map(selection_set_expr)),
    )
}

fn fragment_spread_expr(spread: &ast::FragmentSpread<'_>) -> String {
    format!(
        "FragmentSpread {{ directives: {}, loc: {}, name: {} }}",
        directives_expr(&spread.directives),
        loc_expr(spread.loc),
        name_expr(&spread.name),
    )
}

fn inline_fragment_expr(inline: &ast::InlineFragment<'_>) -> String {
    format!(
        "InlineFragment {{ directives: {}, loc: {}, selection_set: {}, type_condition: {} }}",
        directives_expr(&inline.directives),
        loc_expr(inline.loc),
        selection_set_expr(&inline.selection_set),
        opt_expr(inline.type_condition.as_ref().map(named_type_expr)),
    )
}

fn argument_expr(argument: &ast::Argument<'_>) -> String {
    format!(
        "Argument {{ loc: {}, name: {}, value: {} }}",
        loc_expr(argument.loc),
        name_expr(&argument.name),
        value_expr(&argument.value),
    )
}

fn directives_expr(directives: &[ast::Directive<'_>]) -> String {
    vec_expr(directives.iter().map(directive_expr))
}

fn directive_expr(directive: &ast::Directive<'_>) -> String {
    format!(
        "Directive {{ arguments: {}, loc: {}, name: {} }}",
        vec_expr(directive.arguments.iter().map(argument_expr)),
        loc_expr(directive.loc),
        name_expr(&directive.name),
    )
}

fn variable_definition_expr(definition: &ast::VariableDefinition<'_>) -> String {
    let default_value = match &definition.default_value {
        Some(value) => format!("Some({})", value_expr(value)),
        // Keep "no default was written" distinguishable from a
        // written `null` default in emitted expressions.
        None => "UndefinedDefaultValue.as_option()".to_string(),
    };
    format!(
        "VariableDefinition {{ default_value: {}, loc: {}, var_type: {}, variable: {} }}",
        default_value,
        loc_expr(definition.loc),
        type_expr(&definition.var_type),
        variable_expr(&definition.variable),
    )
}

fn variable_expr(variable: &ast::Variable<'_>) -> String {
    format!(
        "Variable {{ loc: {}, name: {} }}",
        loc_expr(variable.loc),
        name_expr(&variable.name),
    )
}

fn type_expr(annotation: &ast::TypeAnnotation<'_>) -> String {
    match annotation {
        ast::TypeAnnotation::List(list) => format!(
            "TypeAnnotation::List(ListType {{ element_type: Box::new({}), loc: {} }})",
            type_expr(&list.element_type),
            loc_expr(list.loc),
        ),
        ast::TypeAnnotation::Named(named) => {
            format!("TypeAnnotation::Named({})", named_type_expr(named))
        }
        ast::TypeAnnotation::NonNull(non_null) => format!(
            "TypeAnnotation::NonNull(NonNullType {{ loc: {}, wrapped_type: Box::new({}) }})",
            loc_expr(non_null.loc),
            type_expr(&non_null.wrapped_type),
        ),
    }
}

fn named_type_expr(named: &ast::NamedType<'_>) -> String {
    format!(
        "NamedType {{ loc: {}, name: {} }}",
        loc_expr(named.loc),
        name_expr(&named.name),
    )
}

fn value_expr(value: &ast::Value<'_>) -> String {
    match value {
        ast::Value::Boolean(v) => format!(
            "Value::Boolean(BooleanValue {{ loc: {}, value: {} }})",
            loc_expr(v.loc),
            v.value,
        ),
        ast::Value::Enum(v) => format!(
            "Value::Enum(EnumValue {{ loc: {}, value: {} }})",
            loc_expr(v.loc),
            str_expr(&v.value),
        ),
        ast::Value::Float(v) => format!(
            "Value::Float(FloatValue {{ loc: {}, value: {} }})",
            loc_expr(v.loc),
            str_expr(&v.value),
        ),
        ast::Value::Int(v) => format!(
            "Value::Int(IntValue {{ loc: {}, value: {} }})",
            loc_expr(v.loc),
            str_expr(&v.value),
        ),
        ast::Value::List(v) => format!(
            "Value::List(ListValue {{ loc: {}, values: {} }})",
            loc_expr(v.loc),
            vec_expr(v.values.iter().map(value_expr)),
        ),
        ast::Value::Null(v) => {
            format!("Value::Null(NullValue {{ loc: {} }})", loc_expr(v.loc))
        }
        ast::Value::Object(v) => format!(
            "Value::Object(ObjectValue {{ fields: {}, loc: {} }})",
            vec_expr(v.fields.iter().map(object_field_expr)),
            loc_expr(v.loc),
        ),
        ast::Value::String(v) => format!(
            "Value::String(StringValue {{ loc: {}, value: {} }})",
            loc_expr(v.loc),
            str_expr(&v.value),
        ),
        ast::Value::Variable(v) => format!("Value::Variable({})", variable_expr(v)),
    }
}

fn object_field_expr(field: &ast::ObjectField<'_>) -> String {
    format!(
        "ObjectField {{ loc: {}, name: {}, value: {} }}",
        loc_expr(field.loc),
        name_expr(&field.name),
        value_expr(&field.value),
    )
}

fn name_expr(name: &ast::Name<'_>) -> String {
    format!(
        "Name {{ loc: {}, value: {} }}",
        loc_expr(name.loc),
        str_expr(&name.value),
    )
}

// =============================================================================
// Expression fragments
// =============================================================================

fn loc_expr(loc: Option<Loc<'_>>) -> String {
    match loc {
        Some(loc) => format!("loc({}, {})", loc.start, loc.end),
        None => "None".to_string(),
    }
}

fn opt_expr(value: Option<String>) -> String {
    match value {
        Some(inner) => format!("Some({inner})"),
        None => "None".to_string(),
    }
}

fn vec_expr(items: impl Iterator<Item = String>) -> String {
    format!("vec![{}]", items.collect::<Vec<_>>().join(", "))
}

fn str_expr(text: &str) -> String {
    format!("{text:?}.into()")
}
