//! Recursive descent parser for GraphQL documents.
//!
//! [`GraphQLParser`] drives a [`GraphQLTokenStream`] with one token of
//! lookahead. Every grammar rule has a `parse_*` method returning
//! `Result<Node, GraphQLSyntaxError>`; the first error aborts the
//! parse and propagates with `?` — there is no recovery and never a
//! second diagnostic.
//!
//! Two helpers dominate the grammar plumbing:
//! [`expect`](GraphQLParser::expect) ("Expected `<kind>`, found
//! `<actual>`") and [`expect_keyword`](GraphQLParser::expect_keyword)
//! (`Expected "<word>", found <actual>`). Delimited lists go through
//! [`many`](GraphQLParser::many) (one-or-more) and
//! [`any`](GraphQLParser::any) (zero-or-more).
//!
//! Each node is stamped with a [`Loc`] whose `start` is the byte
//! offset of the node's first token and whose `end` is the offset just
//! past the last token consumed for it.

use crate::ast;
use crate::token::GraphQLTokenKind;
use crate::GraphQLSource;
use crate::GraphQLSyntaxError;
use crate::GraphQLTokenStream;
use crate::Loc;
use crate::ParseOptions;

/// Parses `source` into a [`Document`](ast::Document) with default
/// options.
pub fn parse(source: &GraphQLSource) -> Result<ast::Document<'_>, GraphQLSyntaxError> {
    parse_with_options(source, ParseOptions::default())
}

/// Parses `source` into a [`Document`](ast::Document), controlling
/// location annotation via `options`.
pub fn parse_with_options(
    source: &GraphQLSource,
    options: ParseOptions,
) -> Result<ast::Document<'_>, GraphQLSyntaxError> {
    GraphQLParser::with_options(source, options).parse_document()
}

/// A fail-fast recursive descent parser over a single source.
pub struct GraphQLParser<'src> {
    source: &'src GraphQLSource,
    stream: GraphQLTokenStream<'src>,
    options: ParseOptions,
}

impl<'src> GraphQLParser<'src> {
    pub fn new(source: &'src GraphQLSource) -> Self {
        Self::with_options(source, ParseOptions::default())
    }

    pub fn with_options(source: &'src GraphQLSource, options: ParseOptions) -> Self {
        Self {
            source,
            stream: GraphQLTokenStream::new(source),
            options,
        }
    }

    // =========================================================================
    // Document
    // =========================================================================

    /// Parses the whole document: one or more definitions until EOF.
    pub fn parse_document(mut self) -> Result<ast::Document<'src>, GraphQLSyntaxError> {
        let start = self.stream.current().start;
        // Prime past the start-of-file sentinel onto the first real
        // token.
        self.expect(GraphQLTokenKind::Sof)?;

        let mut definitions = Vec::new();
        let mut shorthand_start = None;
        loop {
            if shorthand_start.is_none() && self.peek(&GraphQLTokenKind::CurlyBraceOpen) {
                shorthand_start = Some(self.stream.current().start);
            }
            definitions.push(self.parse_definition()?);
            if self.skip(&GraphQLTokenKind::Eof)? {
                break;
            }
        }

        // A shorthand operation is permitted only as the document's
        // lone operation.
        if let Some(at) = shorthand_start {
            let operation_count = definitions
                .iter()
                .filter(|d| matches!(d, ast::Definition::Operation(_)))
                .count();
            if operation_count > 1 {
                return Err(GraphQLSyntaxError::new(self.source, at, "Unexpected {"));
            }
        }

        Ok(ast::Document {
            definitions,
            loc: self.loc(start),
        })
    }

    /// Dispatches on the current token to a definition production.
    fn parse_definition(&mut self) -> Result<ast::Definition<'src>, GraphQLSyntaxError> {
        if self.peek(&GraphQLTokenKind::CurlyBraceOpen) {
            let start = self.stream.current().start;
            let selection_set = self.parse_selection_set()?;
            return Ok(ast::Definition::Operation(ast::OperationDefinition {
                directives: Vec::new(),
                loc: self.loc(start),
                name: None,
                operation: ast::OperationKind::Query,
                selection_set,
                variable_definitions: None,
            }));
        }
        if self.peek_keyword("query")
            || self.peek_keyword("mutation")
            || self.peek_keyword("subscription")
        {
            return self
                .parse_operation_definition()
                .map(ast::Definition::Operation);
        }
        if self.peek_keyword("fragment") {
            return self
                .parse_fragment_definition()
                .map(ast::Definition::Fragment);
        }
        Err(self.unexpected())
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// `query|mutation|subscription Name? VariableDefinitions?
    /// Directives SelectionSet`
    fn parse_operation_definition(
        &mut self,
    ) -> Result<ast::OperationDefinition<'src>, GraphQLSyntaxError> {
        let start = self.stream.current().start;
        let keyword = self.stream.advance()?;
        let Some(operation) = keyword.kind.value().and_then(ast::OperationKind::from_keyword)
        else {
            unreachable!("dispatched on an operation keyword");
        };

        let name = if matches!(self.stream.current().kind, GraphQLTokenKind::Name(_)) {
            Some(self.parse_name()?)
        } else {
            None
        };

        let variable_definitions = if self.peek(&GraphQLTokenKind::ParenOpen) {
            Some(self.many(
                GraphQLTokenKind::ParenOpen,
                Self::parse_variable_definition,
                GraphQLTokenKind::ParenClose,
            )?)
        } else {
            None
        };

        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::OperationDefinition {
            directives,
            loc: self.loc(start),
            name,
            operation,
            selection_set,
            variable_definitions,
        })
    }

    /// `$name: Type (= ConstValue)?`
    fn parse_variable_definition(
        &mut self,
    ) -> Result<ast::VariableDefinition<'src>, GraphQLSyntaxError> {
        let start = self.stream.current().start;
        let variable = self.parse_variable()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let var_type = self.parse_type()?;
        let default_value = if self.skip(&GraphQLTokenKind::Equals)? {
            Some(self.parse_value(true)?)
        } else {
            None
        };
        Ok(ast::VariableDefinition {
            default_value,
            loc: self.loc(start),
            var_type,
            variable,
        })
    }

    /// `$name`
    fn parse_variable(&mut self) -> Result<ast::Variable<'src>, GraphQLSyntaxError> {
        let start = self.stream.current().start;
        self.expect(GraphQLTokenKind::Dollar)?;
        let name = self.parse_name()?;
        Ok(ast::Variable {
            loc: self.loc(start),
            name,
        })
    }

    // =========================================================================
    // Selections
    // =========================================================================

    /// `{ Selection+ }`
    fn parse_selection_set(&mut self) -> Result<ast::SelectionSet<'src>, GraphQLSyntaxError> {
        let start = self.stream.current().start;
        let selections = self.many(
            GraphQLTokenKind::CurlyBraceOpen,
            Self::parse_selection,
            GraphQLTokenKind::CurlyBraceClose,
        )?;
        Ok(ast::SelectionSet {
            loc: self.loc(start),
            selections,
        })
    }

    fn parse_selection(&mut self) -> Result<ast::Selection<'src>, GraphQLSyntaxError> {
        if self.peek(&GraphQLTokenKind::Ellipsis) {
            self.parse_fragment_selection()
        } else {
            self.parse_field().map(ast::Selection::Field)
        }
    }

    /// `alias? name Arguments? Directives SelectionSet?`
    fn parse_field(&mut self) -> Result<ast::Field<'src>, GraphQLSyntaxError> {
        let start = self.stream.current().start;
        let name_or_alias = self.parse_name()?;
        let (alias, name) = if self.skip(&GraphQLTokenKind::Colon)? {
            (Some(name_or_alias), self.parse_name()?)
        } else {
            (None, name_or_alias)
        };

        let arguments = if self.peek(&GraphQLTokenKind::ParenOpen) {
            self.parse_arguments()?
        } else {
            Vec::new()
        };
        let directives = self.parse_directives()?;
        let selection_set = if self.peek(&GraphQLTokenKind::CurlyBraceOpen) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };

        Ok(ast::Field {
            alias,
            arguments,
            directives,
            loc: self.loc(start),
            name,
            selection_set,
        })
    }

    /// `( Argument+ )`
    fn parse_arguments(&mut self) -> Result<Vec<ast::Argument<'src>>, GraphQLSyntaxError> {
        self.many(
            GraphQLTokenKind::ParenOpen,
            Self::parse_argument,
            GraphQLTokenKind::ParenClose,
        )
    }

    /// `name: Value`
    fn parse_argument(&mut self) -> Result<ast::Argument<'src>, GraphQLSyntaxError> {
        let start = self.stream.current().start;
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let value = self.parse_value(false)?;
        Ok(ast::Argument {
            loc: self.loc(start),
            name,
            value,
        })
    }

    /// Disambiguates the constructs after `...`:
    ///
    /// - a Name other than `on` → fragment spread,
    /// - the keyword `on` → inline fragment with a type condition,
    /// - `{` or `@` → inline fragment without a type condition,
    /// - anything else → the spread path's Name expectation fails.
    fn parse_fragment_selection(&mut self) -> Result<ast::Selection<'src>, GraphQLSyntaxError> {
        let start = self.stream.current().start;
        self.expect(GraphQLTokenKind::Ellipsis)?;

        if self.peek_keyword("on") {
            self.stream.advance()?;
            let type_condition = Some(self.parse_named_type()?);
            let directives = self.parse_directives()?;
            let selection_set = self.parse_selection_set()?;
            return Ok(ast::Selection::InlineFragment(ast::InlineFragment {
                directives,
                loc: self.loc(start),
                selection_set,
                type_condition,
            }));
        }

        if self.peek(&GraphQLTokenKind::CurlyBraceOpen) || self.peek(&GraphQLTokenKind::At) {
            let directives = self.parse_directives()?;
            let selection_set = self.parse_selection_set()?;
            return Ok(ast::Selection::InlineFragment(ast::InlineFragment {
                directives,
                loc: self.loc(start),
                selection_set,
                type_condition: None,
            }));
        }

        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        Ok(ast::Selection::FragmentSpread(ast::FragmentSpread {
            directives,
            loc: self.loc(start),
            name,
        }))
    }

    /// `fragment Name on NamedType Directives SelectionSet`, where
    /// `Name` must not be the reserved word `on`.
    fn parse_fragment_definition(
        &mut self,
    ) -> Result<ast::FragmentDefinition<'src>, GraphQLSyntaxError> {
        let start = self.stream.current().start;
        self.expect_keyword("fragment")?;
        if self.peek_keyword("on") {
            return Err(self.unexpected());
        }
        let name = self.parse_name()?;
        self.expect_keyword("on")?;
        let type_condition = self.parse_named_type()?;
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::FragmentDefinition {
            directives,
            loc: self.loc(start),
            name,
            selection_set,
            type_condition,
        })
    }

    // =========================================================================
    // Directives
    // =========================================================================

    /// Zero or more directives.
    fn parse_directives(&mut self) -> Result<Vec<ast::Directive<'src>>, GraphQLSyntaxError> {
        let mut directives = Vec::new();
        while self.peek(&GraphQLTokenKind::At) {
            directives.push(self.parse_directive()?);
        }
        Ok(directives)
    }

    /// `@name Arguments?`
    fn parse_directive(&mut self) -> Result<ast::Directive<'src>, GraphQLSyntaxError> {
        let start = self.stream.current().start;
        self.expect(GraphQLTokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = if self.peek(&GraphQLTokenKind::ParenOpen) {
            self.parse_arguments()?
        } else {
            Vec::new()
        };
        Ok(ast::Directive {
            arguments,
            loc: self.loc(start),
            name,
        })
    }

    // =========================================================================
    // Types
    // =========================================================================

    /// `NamedType | [Type]`, either optionally wrapped by a trailing
    /// `!`.
    fn parse_type(&mut self) -> Result<ast::TypeAnnotation<'src>, GraphQLSyntaxError> {
        let start = self.stream.current().start;
        let inner = if self.skip(&GraphQLTokenKind::SquareBracketOpen)? {
            let element_type = Box::new(self.parse_type()?);
            self.expect(GraphQLTokenKind::SquareBracketClose)?;
            ast::TypeAnnotation::List(ast::ListType {
                element_type,
                loc: self.loc(start),
            })
        } else {
            ast::TypeAnnotation::Named(self.parse_named_type()?)
        };

        if self.skip(&GraphQLTokenKind::Bang)? {
            Ok(ast::TypeAnnotation::NonNull(ast::NonNullType {
                loc: self.loc(start),
                wrapped_type: Box::new(inner),
            }))
        } else {
            Ok(inner)
        }
    }

    fn parse_named_type(&mut self) -> Result<ast::NamedType<'src>, GraphQLSyntaxError> {
        let start = self.stream.current().start;
        let name = self.parse_name()?;
        Ok(ast::NamedType {
            loc: self.loc(start),
            name,
        })
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// Parses a value literal. With `is_const`, variable references
    /// are a syntax error (`Unexpected $`).
    fn parse_value(&mut self, is_const: bool) -> Result<ast::Value<'src>, GraphQLSyntaxError> {
        let start = self.stream.current().start;

        if self.peek(&GraphQLTokenKind::SquareBracketOpen) {
            let values = self.any(
                GraphQLTokenKind::SquareBracketOpen,
                |p| p.parse_value(is_const),
                GraphQLTokenKind::SquareBracketClose,
            )?;
            return Ok(ast::Value::List(ast::ListValue {
                loc: self.loc(start),
                values,
            }));
        }

        if self.peek(&GraphQLTokenKind::CurlyBraceOpen) {
            let fields = self.any(
                GraphQLTokenKind::CurlyBraceOpen,
                |p| p.parse_object_field(is_const),
                GraphQLTokenKind::CurlyBraceClose,
            )?;
            return Ok(ast::Value::Object(ast::ObjectValue {
                fields,
                loc: self.loc(start),
            }));
        }

        if self.peek(&GraphQLTokenKind::Dollar) {
            if is_const {
                return Err(self.unexpected());
            }
            return self.parse_variable().map(ast::Value::Variable);
        }

        if matches!(self.stream.current().kind, GraphQLTokenKind::IntValue(_)) {
            let token = self.stream.advance()?;
            let GraphQLTokenKind::IntValue(value) = token.kind else {
                unreachable!("peeked IntValue");
            };
            return Ok(ast::Value::Int(ast::IntValue {
                loc: self.loc(start),
                value,
            }));
        }

        if matches!(self.stream.current().kind, GraphQLTokenKind::FloatValue(_)) {
            let token = self.stream.advance()?;
            let GraphQLTokenKind::FloatValue(value) = token.kind else {
                unreachable!("peeked FloatValue");
            };
            return Ok(ast::Value::Float(ast::FloatValue {
                loc: self.loc(start),
                value,
            }));
        }

        if matches!(self.stream.current().kind, GraphQLTokenKind::StringValue(_)) {
            let token = self.stream.advance()?;
            let GraphQLTokenKind::StringValue(value) = token.kind else {
                unreachable!("peeked StringValue");
            };
            return Ok(ast::Value::String(ast::StringValue {
                loc: self.loc(start),
                value,
            }));
        }

        if self.peek_keyword("true") || self.peek_keyword("false") {
            let token = self.stream.advance()?;
            return Ok(ast::Value::Boolean(ast::BooleanValue {
                loc: self.loc(start),
                value: token.kind.value() == Some("true"),
            }));
        }
        if self.peek_keyword("null") {
            self.stream.advance()?;
            return Ok(ast::Value::Null(ast::NullValue {
                loc: self.loc(start),
            }));
        }
        // `on` is reserved and never an enum value.
        if self.peek_keyword("on") {
            return Err(self.unexpected());
        }
        if matches!(self.stream.current().kind, GraphQLTokenKind::Name(_)) {
            let token = self.stream.advance()?;
            let GraphQLTokenKind::Name(value) = token.kind else {
                unreachable!("peeked Name");
            };
            return Ok(ast::Value::Enum(ast::EnumValue {
                loc: self.loc(start),
                value,
            }));
        }

        Err(self.unexpected())
    }

    /// `name: Value` inside an object literal.
    fn parse_object_field(
        &mut self,
        is_const: bool,
    ) -> Result<ast::ObjectField<'src>, GraphQLSyntaxError> {
        let start = self.stream.current().start;
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let value = self.parse_value(is_const)?;
        Ok(ast::ObjectField {
            loc: self.loc(start),
            name,
            value,
        })
    }

    // =========================================================================
    // Names
    // =========================================================================

    /// Consumes a Name token into a [`Name`](ast::Name) node.
    ///
    /// Any name is accepted here, keywords included; productions with
    /// reserved slots (fragment names, enum values) check before
    /// calling.
    fn parse_name(&mut self) -> Result<ast::Name<'src>, GraphQLSyntaxError> {
        if !matches!(self.stream.current().kind, GraphQLTokenKind::Name(_)) {
            return Err(self.expected("Name"));
        }
        let token = self.stream.advance()?;
        let start = token.start;
        let GraphQLTokenKind::Name(value) = token.kind else {
            unreachable!("peeked Name");
        };
        Ok(ast::Name {
            loc: self.loc(start),
            value,
        })
    }

    // =========================================================================
    // Token plumbing
    // =========================================================================

    /// Variant-level check of the current token without consuming.
    fn peek(&self, kind: &GraphQLTokenKind<'_>) -> bool {
        self.stream.current().kind.same_kind(kind)
    }

    /// Checks whether the current token is a Name with the given text.
    fn peek_keyword(&self, word: &str) -> bool {
        match &self.stream.current().kind {
            GraphQLTokenKind::Name(value) => value == word,
            _ => false,
        }
    }

    /// Consumes the current token if it matches `kind`.
    fn skip(&mut self, kind: &GraphQLTokenKind<'_>) -> Result<bool, GraphQLSyntaxError> {
        if self.peek(kind) {
            self.stream.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes a token of the given kind or fails with
    /// `Expected <kind>, found <actual>`.
    fn expect(
        &mut self,
        kind: GraphQLTokenKind<'src>,
    ) -> Result<crate::token::GraphQLToken<'src>, GraphQLSyntaxError> {
        if self.peek(&kind) {
            self.stream.advance()
        } else {
            Err(self.expected(kind.kind_name()))
        }
    }

    /// Consumes a Name token with the given text or fails with
    /// `Expected "<word>", found <actual>`.
    fn expect_keyword(
        &mut self,
        word: &str,
    ) -> Result<crate::token::GraphQLToken<'src>, GraphQLSyntaxError> {
        if self.peek_keyword(word) {
            self.stream.advance()
        } else {
            let current = self.stream.current();
            Err(GraphQLSyntaxError::new(
                self.source,
                current.start,
                format!("Expected \"{word}\", found {}", current.description()),
            ))
        }
    }

    /// One-or-more `item`s between `open` and `close`.
    fn many<T>(
        &mut self,
        open: GraphQLTokenKind<'src>,
        mut item: impl FnMut(&mut Self) -> Result<T, GraphQLSyntaxError>,
        close: GraphQLTokenKind<'src>,
    ) -> Result<Vec<T>, GraphQLSyntaxError> {
        self.expect(open)?;
        let mut items = vec![item(self)?];
        while !self.skip(&close)? {
            items.push(item(self)?);
        }
        Ok(items)
    }

    /// Zero-or-more `item`s between `open` and `close`.
    fn any<T>(
        &mut self,
        open: GraphQLTokenKind<'src>,
        mut item: impl FnMut(&mut Self) -> Result<T, GraphQLSyntaxError>,
        close: GraphQLTokenKind<'src>,
    ) -> Result<Vec<T>, GraphQLSyntaxError> {
        self.expect(open)?;
        let mut items = Vec::new();
        while !self.skip(&close)? {
            items.push(item(self)?);
        }
        Ok(items)
    }

    // =========================================================================
    // Locations and errors
    // =========================================================================

    /// Stamps a `Loc` from `start` to the end of the most recently
    /// consumed token, honoring the no-location / no-source options.
    fn loc(&self, start: usize) -> Option<Loc<'src>> {
        if self.options.no_location {
            return None;
        }
        Some(Loc {
            start,
            end: self.stream.prev_end(),
            source: (!self.options.no_source).then_some(self.source),
        })
    }

    /// `Expected <what>, found <actual>` at the current token.
    fn expected(&self, what: &str) -> GraphQLSyntaxError {
        let current = self.stream.current();
        GraphQLSyntaxError::new(
            self.source,
            current.start,
            format!("Expected {what}, found {}", current.description()),
        )
    }

    /// `Unexpected <token>` at the current token.
    fn unexpected(&self) -> GraphQLSyntaxError {
        let current = self.stream.current();
        GraphQLSyntaxError::new(
            self.source,
            current.start,
            format!("Unexpected {}", current.description()),
        )
    }
}
