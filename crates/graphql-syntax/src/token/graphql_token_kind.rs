use std::borrow::Cow;

/// The kind of a GraphQL token.
///
/// Value-carrying variants (`Name`, `IntValue`, `FloatValue`) store
/// zero-copy slices of the source text via `Cow<'src, str>`.
/// `StringValue` stores the *decoded* content (escape sequences
/// resolved), which is necessarily an owned `String`.
///
/// Note that `true`, `false`, and `null` are **not** distinct token
/// kinds: they lex as ordinary `Name` tokens and are decoded into
/// boolean/null values only when they appear in value position. This
/// keeps every keyword usable as a plain name (field name, alias,
/// argument name, variable name, directive name).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GraphQLTokenKind<'src> {
    // =========================================================================
    // Sentinels
    // =========================================================================
    /// Start-of-file sentinel. Never produced by the lexer; it seeds
    /// the parser's token stream before the first real token.
    Sof,
    /// End of input.
    Eof,

    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `!`
    Bang,
    /// `$`
    Dollar,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `...`
    Ellipsis,
    /// `:`
    Colon,
    /// `=`
    Equals,
    /// `@`
    At,
    /// `[`
    SquareBracketOpen,
    /// `]`
    SquareBracketClose,
    /// `{`
    CurlyBraceOpen,
    /// `}`
    CurlyBraceClose,
    /// `|`
    Pipe,

    // =========================================================================
    // Value-carrying tokens
    // =========================================================================
    /// A name/identifier matching `[_A-Za-z][_A-Za-z0-9]*`.
    Name(Cow<'src, str>),
    /// Raw source text of an integer literal, including any leading
    /// `-` (e.g. `"-123"`, `"0"`). The lexeme is preserved verbatim;
    /// numeric interpretation is the caller's concern.
    IntValue(Cow<'src, str>),
    /// Raw source text of a float literal (e.g. `"-1.23e-4"`). The
    /// lexeme is preserved verbatim.
    FloatValue(Cow<'src, str>),
    /// Decoded content of a string literal, with escape sequences
    /// resolved.
    StringValue(String),
}

impl GraphQLTokenKind<'_> {
    /// The kind's display name, as used in `Expected <kind>, found
    /// <actual>` messages. Punctuators display as themselves.
    pub fn kind_name(&self) -> &'static str {
        match self {
            GraphQLTokenKind::Sof => "<SOF>",
            GraphQLTokenKind::Eof => "EOF",
            GraphQLTokenKind::Bang => "!",
            GraphQLTokenKind::Dollar => "$",
            GraphQLTokenKind::ParenOpen => "(",
            GraphQLTokenKind::ParenClose => ")",
            GraphQLTokenKind::Ellipsis => "...",
            GraphQLTokenKind::Colon => ":",
            GraphQLTokenKind::Equals => "=",
            GraphQLTokenKind::At => "@",
            GraphQLTokenKind::SquareBracketOpen => "[",
            GraphQLTokenKind::SquareBracketClose => "]",
            GraphQLTokenKind::CurlyBraceOpen => "{",
            GraphQLTokenKind::CurlyBraceClose => "}",
            GraphQLTokenKind::Pipe => "|",
            GraphQLTokenKind::Name(_) => "Name",
            GraphQLTokenKind::IntValue(_) => "Int",
            GraphQLTokenKind::FloatValue(_) => "Float",
            GraphQLTokenKind::StringValue(_) => "String",
        }
    }

    /// The token's value, for value-carrying kinds.
    pub fn value(&self) -> Option<&str> {
        match self {
            GraphQLTokenKind::Name(v)
            | GraphQLTokenKind::IntValue(v)
            | GraphQLTokenKind::FloatValue(v) => Some(v),
            GraphQLTokenKind::StringValue(v) => Some(v),
            _ => None,
        }
    }

    /// Variant-level match, ignoring any payload: `Name("a")` matches
    /// `Name("b")`.
    ///
    /// The match on `self` is intentionally exhaustive rather than
    /// wildcarded so that adding a variant forces this function to be
    /// revisited.
    pub fn same_kind(&self, other: &GraphQLTokenKind<'_>) -> bool {
        match self {
            GraphQLTokenKind::Name(_) => matches!(other, GraphQLTokenKind::Name(_)),
            GraphQLTokenKind::IntValue(_) => matches!(other, GraphQLTokenKind::IntValue(_)),
            GraphQLTokenKind::FloatValue(_) => {
                matches!(other, GraphQLTokenKind::FloatValue(_))
            }
            GraphQLTokenKind::StringValue(_) => {
                matches!(other, GraphQLTokenKind::StringValue(_))
            }
            GraphQLTokenKind::Sof => matches!(other, GraphQLTokenKind::Sof),
            GraphQLTokenKind::Eof => matches!(other, GraphQLTokenKind::Eof),
            GraphQLTokenKind::Bang => matches!(other, GraphQLTokenKind::Bang),
            GraphQLTokenKind::Dollar => matches!(other, GraphQLTokenKind::Dollar),
            GraphQLTokenKind::ParenOpen => matches!(other, GraphQLTokenKind::ParenOpen),
            GraphQLTokenKind::ParenClose => matches!(other, GraphQLTokenKind::ParenClose),
            GraphQLTokenKind::Ellipsis => matches!(other, GraphQLTokenKind::Ellipsis),
            GraphQLTokenKind::Colon => matches!(other, GraphQLTokenKind::Colon),
            GraphQLTokenKind::Equals => matches!(other, GraphQLTokenKind::Equals),
            GraphQLTokenKind::At => matches!(other, GraphQLTokenKind::At),
            GraphQLTokenKind::SquareBracketOpen => {
                matches!(other, GraphQLTokenKind::SquareBracketOpen)
            }
            GraphQLTokenKind::SquareBracketClose => {
                matches!(other, GraphQLTokenKind::SquareBracketClose)
            }
            GraphQLTokenKind::CurlyBraceOpen => {
                matches!(other, GraphQLTokenKind::CurlyBraceOpen)
            }
            GraphQLTokenKind::CurlyBraceClose => {
                matches!(other, GraphQLTokenKind::CurlyBraceClose)
            }
            GraphQLTokenKind::Pipe => matches!(other, GraphQLTokenKind::Pipe),
        }
    }

    /// Returns `true` if this is a punctuator kind.
    pub fn is_punctuator(&self) -> bool {
        matches!(
            self,
            GraphQLTokenKind::Bang
                | GraphQLTokenKind::Dollar
                | GraphQLTokenKind::ParenOpen
                | GraphQLTokenKind::ParenClose
                | GraphQLTokenKind::Ellipsis
                | GraphQLTokenKind::Colon
                | GraphQLTokenKind::Equals
                | GraphQLTokenKind::At
                | GraphQLTokenKind::SquareBracketOpen
                | GraphQLTokenKind::SquareBracketClose
                | GraphQLTokenKind::CurlyBraceOpen
                | GraphQLTokenKind::CurlyBraceClose
                | GraphQLTokenKind::Pipe
        )
    }
}
