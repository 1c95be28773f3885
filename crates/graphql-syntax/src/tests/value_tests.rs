//! Tests for value literal parsing: null/boolean/enum decoding,
//! object and list shapes, and lexeme preservation.

use crate::ast;
use crate::parse;
use crate::parse_with_options;
use crate::tests::utils::expect_syntax_error;
use crate::GraphQLSource;
use crate::ParseOptions;

/// Navigates to the first field's arguments in a single-operation
/// document.
fn first_field_arguments<'a, 'src>(
    document: &'a ast::Document<'src>,
) -> &'a [ast::Argument<'src>] {
    let [ast::Definition::Operation(op)] = &document.definitions[..] else {
        panic!("expected a single operation");
    };
    let ast::Selection::Field(field) = &op.selection_set.selections[0] else {
        panic!("expected a field selection");
    };
    &field.arguments
}

#[test]
fn allows_null_as_an_argument_value() {
    let source = GraphQLSource::new("{ fieldWithNullableStringInput(input: null) }");
    let document = parse(&source).unwrap_or_else(|e| panic!("{e}"));
    let arguments = first_field_arguments(&document);
    assert!(matches!(arguments[0].value, ast::Value::Null(_)));
}

#[test]
fn parses_null_values_inside_objects_in_order() {
    let source =
        GraphQLSource::new("{ fieldWithObjectInput(input: {a: null, b: null, c: \"C\", d: null}) }");
    let document = parse(&source).unwrap_or_else(|e| panic!("{e}"));
    let arguments = first_field_arguments(&document);
    let ast::Value::Object(object) = &arguments[0].value else {
        panic!("expected an object value");
    };

    let names: Vec<&str> = object.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c", "d"]);

    assert!(matches!(object.fields[0].value, ast::Value::Null(_)));
    assert!(matches!(object.fields[1].value, ast::Value::Null(_)));
    assert!(matches!(&object.fields[2].value, ast::Value::String(s) if s.value == "C"));
    assert!(matches!(object.fields[3].value, ast::Value::Null(_)));
}

#[test]
fn parses_null_values_inside_lists() {
    let source =
        GraphQLSource::new("{ fieldWithObjectInput(input: {b: [\"A\", null, \"C\"], c: \"C\"}) }");
    let options = ParseOptions::new().no_location();
    let document = parse_with_options(&source, options).unwrap_or_else(|e| panic!("{e}"));

    let expected = ast::Document {
        definitions: vec![ast::Definition::Operation(ast::OperationDefinition {
            directives: vec![],
            loc: None,
            name: None,
            operation: ast::OperationKind::Query,
            selection_set: ast::SelectionSet {
                loc: None,
                selections: vec![ast::Selection::Field(ast::Field {
                    alias: None,
                    arguments: vec![ast::Argument {
                        loc: None,
                        name: ast::Name {
                            loc: None,
                            value: "input".into(),
                        },
                        value: ast::Value::Object(ast::ObjectValue {
                            fields: vec![
                                ast::ObjectField {
                                    loc: None,
                                    name: ast::Name {
                                        loc: None,
                                        value: "b".into(),
                                    },
                                    value: ast::Value::List(ast::ListValue {
                                        loc: None,
                                        values: vec![
                                            ast::Value::String(ast::StringValue {
                                                loc: None,
                                                value: "A".into(),
                                            }),
                                            ast::Value::Null(ast::NullValue { loc: None }),
                                            ast::Value::String(ast::StringValue {
                                                loc: None,
                                                value: "C".into(),
                                            }),
                                        ],
                                    }),
                                },
                                ast::ObjectField {
                                    loc: None,
                                    name: ast::Name {
                                        loc: None,
                                        value: "c".into(),
                                    },
                                    value: ast::Value::String(ast::StringValue {
                                        loc: None,
                                        value: "C".into(),
                                    }),
                                },
                            ],
                            loc: None,
                        }),
                    }],
                    directives: vec![],
                    loc: None,
                    name: ast::Name {
                        loc: None,
                        value: "fieldWithObjectInput".into(),
                    },
                    selection_set: None,
                })],
            },
            variable_definitions: None,
        })],
        loc: None,
    };

    assert_eq!(document, expected);
}

#[test]
fn null_is_a_valid_argument_name() {
    let source = GraphQLSource::new("{ thingy(null: \"stringcheese\") }");
    let document = parse(&source).unwrap_or_else(|e| panic!("{e}"));
    let [ast::Definition::Operation(op)] = &document.definitions[..] else {
        panic!("expected a single operation");
    };
    let ast::Selection::Field(field) = &op.selection_set.selections[0] else {
        panic!("expected a field selection");
    };
    assert_eq!(field.name.as_str(), "thingy");
    assert_eq!(field.arguments[0].name.as_str(), "null");
}

#[test]
fn decodes_boolean_and_null_and_enum_names_exclusively() {
    let source = GraphQLSource::new("{ f(a: true, b: false, c: null, d: MOBILE) }");
    let document = parse(&source).unwrap_or_else(|e| panic!("{e}"));
    let arguments = first_field_arguments(&document);
    assert!(matches!(&arguments[0].value, ast::Value::Boolean(b) if b.value));
    assert!(matches!(&arguments[1].value, ast::Value::Boolean(b) if !b.value));
    assert!(matches!(arguments[2].value, ast::Value::Null(_)));
    assert!(matches!(&arguments[3].value, ast::Value::Enum(e) if e.value == "MOBILE"));
}

#[test]
fn preserves_numeric_lexemes() {
    let source = GraphQLSource::new("{ f(x: -42, y: -1.23e4, z: 0) }");
    let document = parse(&source).unwrap_or_else(|e| panic!("{e}"));
    let arguments = first_field_arguments(&document);
    assert!(matches!(&arguments[0].value, ast::Value::Int(v) if v.value == "-42"));
    assert!(matches!(&arguments[1].value, ast::Value::Float(v) if v.value == "-1.23e4"));
    assert!(matches!(&arguments[2].value, ast::Value::Int(v) if v.value == "0"));
}

#[test]
fn decodes_string_escapes_in_values() {
    let source = GraphQLSource::new("{ f(x: \"a\\nb\\u0041\") }");
    let document = parse(&source).unwrap_or_else(|e| panic!("{e}"));
    let arguments = first_field_arguments(&document);
    assert!(matches!(&arguments[0].value, ast::Value::String(s) if s.value == "a\nbA"));
}

#[test]
fn parses_empty_list_and_object_values() {
    let source = GraphQLSource::new("{ f(x: [], y: {}) }");
    let document = parse(&source).unwrap_or_else(|e| panic!("{e}"));
    let arguments = first_field_arguments(&document);
    assert!(matches!(&arguments[0].value, ast::Value::List(l) if l.values.is_empty()));
    assert!(matches!(&arguments[1].value, ast::Value::Object(o) if o.fields.is_empty()));
}

#[test]
fn parses_nested_const_default_values() {
    let source = GraphQLSource::new("query Q($x: C = { a: [1, \"s\", E, true, null] }) { f }");
    let document = parse(&source).unwrap_or_else(|e| panic!("{e}"));
    let [ast::Definition::Operation(op)] = &document.definitions[..] else {
        panic!("expected a single operation");
    };
    let defs = op.variable_definitions.as_ref().expect("variable definitions");
    let Some(ast::Value::Object(object)) = &defs[0].default_value else {
        panic!("expected an object default");
    };
    let ast::Value::List(list) = &object.fields[0].value else {
        panic!("expected a list");
    };
    assert_eq!(list.values.len(), 5);
}

#[test]
fn true_false_and_null_are_not_enum_values() {
    // They decode to boolean/null, never to EnumValue; `on` is
    // rejected outright.
    let source = GraphQLSource::new("{ f(x: true) }");
    let document = parse(&source).unwrap_or_else(|e| panic!("{e}"));
    assert!(!matches!(
        first_field_arguments(&document)[0].value,
        ast::Value::Enum(_)
    ));

    let error = expect_syntax_error("{ f(x: on) }");
    assert_eq!(error.message(), "Unexpected Name \"on\"");
}

#[test]
fn parses_variable_values_in_arguments() {
    let source = GraphQLSource::new("{ f(x: $var) }");
    let document = parse(&source).unwrap_or_else(|e| panic!("{e}"));
    let arguments = first_field_arguments(&document);
    let ast::Value::Variable(variable) = &arguments[0].value else {
        panic!("expected a variable value");
    };
    assert_eq!(variable.name.as_str(), "var");
}
