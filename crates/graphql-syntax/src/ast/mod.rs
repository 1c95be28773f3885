//! AST types for parsed GraphQL documents.
//!
//! The AST is a closed family of node types: enums at the choice
//! points ([`Definition`], [`Selection`], [`TypeAnnotation`],
//! [`Value`]) and one struct per node kind, each carrying an
//! `Option<Loc<'src>>` byte-range annotation. Node payloads borrow
//! from the source text via [`Cow<'src, str>`] wherever the text
//! survives lexing verbatim; decoded string literals are owned.
//!
//! Nodes are produced exclusively by the parser and are immutable
//! thereafter. The [`Document`] owns its whole tree; no sharing, no
//! cycles. Equality is structural, including locations when present —
//! parse with [`ParseOptions`](crate::ParseOptions) `no_location` /
//! `no_source` to compare ASTs across distinct source handles.
//!
//! [`Cow<'src, str>`]: std::borrow::Cow

mod argument;
mod ast_node;
mod boolean_value;
mod directive;
mod document;
mod enum_value;
mod field;
mod float_value;
mod fragment_definition;
mod fragment_spread;
mod inline_fragment;
mod int_value;
mod list_type;
mod list_value;
mod name;
mod named_type;
mod non_null_type;
mod null_value;
mod object_field;
mod object_value;
mod operation_definition;
mod operation_kind;
mod selection;
mod selection_set;
mod string_value;
mod type_annotation;
mod value;
mod variable;
mod variable_definition;

pub(crate) use ast_node::append_loc_source_slice;

pub use argument::Argument;
pub use ast_node::AstNode;
pub use boolean_value::BooleanValue;
pub use directive::Directive;
pub use document::Definition;
pub use document::Document;
pub use enum_value::EnumValue;
pub use field::Field;
pub use float_value::FloatValue;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use int_value::IntValue;
pub use list_type::ListType;
pub use list_value::ListValue;
pub use name::Name;
pub use named_type::NamedType;
pub use non_null_type::NonNullType;
pub use null_value::NullValue;
pub use object_field::ObjectField;
pub use object_value::ObjectValue;
pub use operation_definition::OperationDefinition;
pub use operation_kind::OperationKind;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use string_value::StringValue;
pub use type_annotation::TypeAnnotation;
pub use value::Value;
pub use variable::Variable;
pub use variable_definition::VariableDefinition;
