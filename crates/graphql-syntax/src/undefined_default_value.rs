use crate::ast::Value;

/// Sentinel denoting the absence of an explicit default value on a
/// variable definition.
///
/// The AST itself models an absent default as `Option::None`; this
/// unit value gives that absence a printable identity for the
/// builder-expression serializer
/// ([`ast_to_builder_code`](crate::ast_to_builder_code)), whose output
/// references it as `UndefinedDefaultValue.as_option()` so the emitted
/// expression distinguishes "no default was written" from a default
/// that happens to be `null`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct UndefinedDefaultValue;

impl UndefinedDefaultValue {
    /// The `Option` form carried by
    /// [`VariableDefinition`](crate::ast::VariableDefinition).
    pub fn as_option<'src>(self) -> Option<Value<'src>> {
        None
    }
}

impl std::fmt::Display for UndefinedDefaultValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("UndefinedDefaultValue")
    }
}
