use crate::ast::AstNode;
use crate::ast::BooleanValue;
use crate::ast::EnumValue;
use crate::ast::FloatValue;
use crate::ast::IntValue;
use crate::ast::ListValue;
use crate::ast::NullValue;
use crate::ast::ObjectValue;
use crate::ast::StringValue;
use crate::ast::Variable;
use inherent::inherent;

/// A GraphQL input value.
///
/// A `Name` token in value position decodes to exactly one of
/// `Boolean` (`true`/`false`), `Null` (`null`), or `Enum` (any other
/// name except the reserved `on`) — the decodings are mutually
/// exclusive. `Variable` appears only in non-const contexts; const
/// contexts (variable default values) reject it at parse time.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'src> {
    Boolean(BooleanValue<'src>),
    Enum(EnumValue<'src>),
    Float(FloatValue<'src>),
    Int(IntValue<'src>),
    List(ListValue<'src>),
    Null(NullValue<'src>),
    Object(ObjectValue<'src>),
    String(StringValue<'src>),
    Variable(Variable<'src>),
}

#[inherent]
impl AstNode for Value<'_> {
    pub fn append_source(&self, sink: &mut String, body: &str) {
        match self {
            Value::Boolean(v) => v.append_source(sink, body),
            Value::Enum(v) => v.append_source(sink, body),
            Value::Float(v) => v.append_source(sink, body),
            Value::Int(v) => v.append_source(sink, body),
            Value::List(v) => v.append_source(sink, body),
            Value::Null(v) => v.append_source(sink, body),
            Value::Object(v) => v.append_source(sink, body),
            Value::String(v) => v.append_source(sink, body),
            Value::Variable(v) => v.append_source(sink, body),
        }
    }
}
