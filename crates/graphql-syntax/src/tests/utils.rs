//! Shared helpers for the parser test suite.

use crate::ast;
use crate::parse;
use crate::GraphQLSource;
use crate::GraphQLSyntaxError;
use crate::Loc;

/// Parses `body`, panicking with the rendered diagnostic on failure.
pub(super) fn assert_parses(body: &str) {
    let source = GraphQLSource::new(body);
    if let Err(error) = parse(&source) {
        panic!("expected document to parse, got:\n{error}");
    }
}

/// Parses `body` expecting a syntax error, and returns it.
pub(super) fn expect_syntax_error(body: &str) -> GraphQLSyntaxError {
    let source = GraphQLSource::new(body);
    match parse(&source) {
        Ok(_) => panic!("expected a syntax error for {body:?}"),
        Err(error) => error,
    }
}

// =============================================================================
// Location monotonicity
// =============================================================================

/// Asserts that every node's `Loc` contains all of its children's
/// `Loc`s, across the whole document.
pub(super) fn assert_location_monotonicity(document: &ast::Document<'_>) {
    for definition in &document.definitions {
        let loc = match definition {
            ast::Definition::Operation(op) => {
                check_operation(op);
                op.loc
            }
            ast::Definition::Fragment(frag) => {
                check_fragment_definition(frag);
                frag.loc
            }
        };
        assert_contains(document.loc, loc);
    }
}

fn assert_contains(parent: Option<Loc<'_>>, child: Option<Loc<'_>>) {
    let (Some(parent), Some(child)) = (parent, child) else {
        return;
    };
    assert!(
        child.start >= parent.start && child.end <= parent.end,
        "child {child} escapes parent {parent}"
    );
}

fn check_operation(op: &ast::OperationDefinition<'_>) {
    if let Some(name) = &op.name {
        assert_contains(op.loc, name.loc);
    }
    for def in op.variable_definitions.iter().flatten() {
        assert_contains(op.loc, def.loc);
        check_variable_definition(def);
    }
    for directive in &op.directives {
        assert_contains(op.loc, directive.loc);
        check_directive(directive);
    }
    assert_contains(op.loc, op.selection_set.loc);
    check_selection_set(&op.selection_set);
}

fn check_fragment_definition(frag: &ast::FragmentDefinition<'_>) {
    assert_contains(frag.loc, frag.name.loc);
    assert_contains(frag.loc, frag.type_condition.loc);
    for directive in &frag.directives {
        assert_contains(frag.loc, directive.loc);
        check_directive(directive);
    }
    assert_contains(frag.loc, frag.selection_set.loc);
    check_selection_set(&frag.selection_set);
}

fn check_variable_definition(def: &ast::VariableDefinition<'_>) {
    assert_contains(def.loc, def.variable.loc);
    assert_contains(def.variable.loc, def.variable.name.loc);
    assert_contains(def.loc, def.var_type.loc());
    check_type(&def.var_type);
    if let Some(default) = &def.default_value {
        check_value(default, def.loc);
    }
}

fn check_type(annotation: &ast::TypeAnnotation<'_>) {
    match annotation {
        ast::TypeAnnotation::Named(named) => {
            assert_contains(named.loc, named.name.loc);
        }
        ast::TypeAnnotation::List(list) => {
            assert_contains(list.loc, list.element_type.loc());
            check_type(&list.element_type);
        }
        ast::TypeAnnotation::NonNull(non_null) => {
            assert_contains(non_null.loc, non_null.wrapped_type.loc());
            check_type(&non_null.wrapped_type);
        }
    }
}

fn check_selection_set(selection_set: &ast::SelectionSet<'_>) {
    for selection in &selection_set.selections {
        match selection {
            ast::Selection::Field(field) => {
                assert_contains(selection_set.loc, field.loc);
                check_field(field);
            }
            ast::Selection::FragmentSpread(spread) => {
                assert_contains(selection_set.loc, spread.loc);
                assert_contains(spread.loc, spread.name.loc);
                for directive in &spread.directives {
                    assert_contains(spread.loc, directive.loc);
                    check_directive(directive);
                }
            }
            ast::Selection::InlineFragment(inline) => {
                assert_contains(selection_set.loc, inline.loc);
                if let Some(condition) = &inline.type_condition {
                    assert_contains(inline.loc, condition.loc);
                }
                for directive in &inline.directives {
                    assert_contains(inline.loc, directive.loc);
                    check_directive(directive);
                }
                assert_contains(inline.loc, inline.selection_set.loc);
                check_selection_set(&inline.selection_set);
            }
        }
    }
}

fn check_field(field: &ast::Field<'_>) {
    if let Some(alias) = &field.alias {
        assert_contains(field.loc, alias.loc);
    }
    assert_contains(field.loc, field.name.loc);
    for argument in &field.arguments {
        assert_contains(field.loc, argument.loc);
        check_argument(argument);
    }
    for directive in &field.directives {
        assert_contains(field.loc, directive.loc);
        check_directive(directive);
    }
    if let Some(selection_set) = &field.selection_set {
        assert_contains(field.loc, selection_set.loc);
        check_selection_set(selection_set);
    }
}

fn check_argument(argument: &ast::Argument<'_>) {
    assert_contains(argument.loc, argument.name.loc);
    check_value(&argument.value, argument.loc);
}

fn check_directive(directive: &ast::Directive<'_>) {
    assert_contains(directive.loc, directive.name.loc);
    for argument in &directive.arguments {
        assert_contains(directive.loc, argument.loc);
        check_argument(argument);
    }
}

fn check_value(value: &ast::Value<'_>, parent: Option<Loc<'_>>) {
    match value {
        ast::Value::Boolean(v) => assert_contains(parent, v.loc),
        ast::Value::Enum(v) => assert_contains(parent, v.loc),
        ast::Value::Float(v) => assert_contains(parent, v.loc),
        ast::Value::Int(v) => assert_contains(parent, v.loc),
        ast::Value::Null(v) => assert_contains(parent, v.loc),
        ast::Value::String(v) => assert_contains(parent, v.loc),
        ast::Value::Variable(v) => {
            assert_contains(parent, v.loc);
            assert_contains(v.loc, v.name.loc);
        }
        ast::Value::List(v) => {
            assert_contains(parent, v.loc);
            for item in &v.values {
                check_value(item, v.loc);
            }
        }
        ast::Value::Object(v) => {
            assert_contains(parent, v.loc);
            for field in &v.fields {
                assert_contains(v.loc, field.loc);
                assert_contains(field.loc, field.name.loc);
                check_value(&field.value, field.loc);
            }
        }
    }
}
