//! The tokenizer for GraphQL source text.
//!
//! [`GraphQLLexer`] is stateless with respect to its client: the
//! parser drives position by asking for the token at-or-after a given
//! byte offset via [`read_token`](GraphQLLexer::read_token). There is
//! no backtracking buffer — rewinding is just asking for an earlier
//! offset again.
//!
//! Insignificant characters (whitespace, line terminators, commas,
//! comments, and the BOM) are skipped before each token.
//! Classification operates on Unicode code points: multi-byte
//! characters are valid inside string contents and comments, but not
//! in names or punctuators.

use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::GraphQLSource;
use crate::GraphQLSyntaxError;
use memchr::memchr2;
use std::borrow::Cow;

/// A stateless tokenizer over a [`GraphQLSource`].
pub struct GraphQLLexer<'src> {
    source: &'src GraphQLSource,
}

impl<'src> GraphQLLexer<'src> {
    pub fn new(source: &'src GraphQLSource) -> Self {
        Self { source }
    }

    /// Returns the next token at or after byte offset `from`.
    ///
    /// Once the end of input is reached, every subsequent call returns
    /// an `Eof` token whose empty range sits at the end of the body.
    pub fn read_token(&self, from: usize) -> Result<GraphQLToken<'src>, GraphQLSyntaxError> {
        let body = self.source.body();
        let start = self.skip_insignificant(from);

        let Some(ch) = body[start..].chars().next() else {
            return Ok(GraphQLToken::new(GraphQLTokenKind::Eof, start, start));
        };

        match ch {
            '!' => Ok(self.punctuator(GraphQLTokenKind::Bang, start)),
            '$' => Ok(self.punctuator(GraphQLTokenKind::Dollar, start)),
            '(' => Ok(self.punctuator(GraphQLTokenKind::ParenOpen, start)),
            ')' => Ok(self.punctuator(GraphQLTokenKind::ParenClose, start)),
            ':' => Ok(self.punctuator(GraphQLTokenKind::Colon, start)),
            '=' => Ok(self.punctuator(GraphQLTokenKind::Equals, start)),
            '@' => Ok(self.punctuator(GraphQLTokenKind::At, start)),
            '[' => Ok(self.punctuator(GraphQLTokenKind::SquareBracketOpen, start)),
            ']' => Ok(self.punctuator(GraphQLTokenKind::SquareBracketClose, start)),
            '{' => Ok(self.punctuator(GraphQLTokenKind::CurlyBraceOpen, start)),
            '}' => Ok(self.punctuator(GraphQLTokenKind::CurlyBraceClose, start)),
            '|' => Ok(self.punctuator(GraphQLTokenKind::Pipe, start)),
            '.' => {
                if body[start..].starts_with("...") {
                    Ok(GraphQLToken::new(
                        GraphQLTokenKind::Ellipsis,
                        start,
                        start + 3,
                    ))
                } else {
                    Err(self.error(start, "Unexpected character \".\""))
                }
            }
            '"' => self.read_string(start),
            '-' | '0'..='9' => self.read_number(start),
            '_' | 'A'..='Z' | 'a'..='z' => Ok(self.read_name(start)),
            other => Err(self.error(start, format!("Unexpected character \"{other}\""))),
        }
    }

    // =========================================================================
    // Insignificant characters
    // =========================================================================

    /// Advances past whitespace, line terminators, commas, comments,
    /// and the BOM, returning the offset of the next significant
    /// character (or the body length).
    fn skip_insignificant(&self, from: usize) -> usize {
        let body = self.source.body();
        let bytes = body.as_bytes();
        let mut pos = from;
        while pos < bytes.len() {
            match bytes[pos] {
                b' ' | b'\t' | b',' | b'\n' | b'\r' => pos += 1,
                // Comment: runs to the next line terminator, which the
                // outer loop then consumes.
                b'#' => {
                    pos = match memchr2(b'\n', b'\r', &bytes[pos..]) {
                        Some(i) => pos + i,
                        None => bytes.len(),
                    };
                }
                _ => {
                    if body[pos..].starts_with('\u{FEFF}') {
                        pos += '\u{FEFF}'.len_utf8();
                    } else {
                        break;
                    }
                }
            }
        }
        pos
    }

    // =========================================================================
    // Names
    // =========================================================================

    /// Lexes a name: `[_A-Za-z][_A-Za-z0-9]*`.
    fn read_name(&self, start: usize) -> GraphQLToken<'src> {
        let body = self.source.body();
        let bytes = body.as_bytes();
        let mut end = start + 1;
        while end < bytes.len() && matches!(bytes[end], b'_' | b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z')
        {
            end += 1;
        }
        GraphQLToken::new(
            GraphQLTokenKind::Name(Cow::Borrowed(&body[start..end])),
            start,
            end,
        )
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// Lexes an integer or float literal.
    ///
    /// Grammar: optional `-`; integer part `0` alone or a nonzero
    /// digit followed by digits; optional `.` + digits; optional
    /// `[eE][+-]?` + digits. A fractional or exponent part makes the
    /// token a `Float`; otherwise it is an `Int`. The raw lexeme is
    /// preserved verbatim in the token value.
    fn read_number(&self, start: usize) -> Result<GraphQLToken<'src>, GraphQLSyntaxError> {
        let body = self.source.body();
        let bytes = body.as_bytes();
        let mut pos = start;
        let mut is_float = false;

        if bytes[pos] == b'-' {
            pos += 1;
        }

        match bytes.get(pos).copied() {
            Some(b'0') => {
                pos += 1;
                if let Some(digit) = bytes.get(pos).copied()
                    && digit.is_ascii_digit()
                {
                    return Err(self.error(
                        pos,
                        format!(
                            "Invalid number, unexpected digit after 0: \"{}\"",
                            digit as char
                        ),
                    ));
                }
            }
            Some(b'1'..=b'9') => {
                pos += 1;
                while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
                    pos += 1;
                }
            }
            _ => {
                return Err(self.invalid_number_at(pos));
            }
        }

        if bytes.get(pos) == Some(&b'.') {
            is_float = true;
            pos += 1;
            if !bytes.get(pos).is_some_and(u8::is_ascii_digit) {
                return Err(self.invalid_number_at(pos));
            }
            while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
                pos += 1;
            }
        }

        if matches!(bytes.get(pos).copied(), Some(b'e' | b'E')) {
            is_float = true;
            pos += 1;
            if matches!(bytes.get(pos).copied(), Some(b'+' | b'-')) {
                pos += 1;
            }
            if !bytes.get(pos).is_some_and(u8::is_ascii_digit) {
                return Err(self.invalid_number_at(pos));
            }
            while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
                pos += 1;
            }
        }

        let raw = Cow::Borrowed(&body[start..pos]);
        let kind = if is_float {
            GraphQLTokenKind::FloatValue(raw)
        } else {
            GraphQLTokenKind::IntValue(raw)
        };
        Ok(GraphQLToken::new(kind, start, pos))
    }

    fn invalid_number_at(&self, pos: usize) -> GraphQLSyntaxError {
        self.error(
            pos,
            format!(
                "Invalid number, expected digit but got: {}",
                self.describe_char_at(pos)
            ),
        )
    }

    // =========================================================================
    // Strings
    // =========================================================================

    /// Lexes a string literal, decoding escape sequences into an owned
    /// value.
    ///
    /// Content is any code point at or above U+0020 (plus tab),
    /// excluding `"`, `\`, and line terminators. Escapes: `\"` `\\`
    /// `\/` `\b` `\f` `\n` `\r` `\t` and `\uXXXX` (four hex digits,
    /// case-insensitive). A `\uXXXX` naming a surrogate code unit is
    /// rejected, since decoded values hold Unicode scalar values.
    fn read_string(&self, start: usize) -> Result<GraphQLToken<'src>, GraphQLSyntaxError> {
        let body = self.source.body();
        let rest = &body[start + 1..];
        let mut value = String::new();
        let mut iter = rest.char_indices();

        while let Some((i, c)) = iter.next() {
            let abs = start + 1 + i;
            match c {
                '"' => {
                    return Ok(GraphQLToken::new(
                        GraphQLTokenKind::StringValue(value),
                        start,
                        abs + 1,
                    ));
                }
                '\n' | '\r' => return Err(self.error(abs, "Unterminated string")),
                '\\' => match iter.next() {
                    Some((_, 'u')) => value.push(self.read_unicode_escape(&mut iter, abs)?),
                    Some((_, '"')) => value.push('"'),
                    Some((_, '\\')) => value.push('\\'),
                    Some((_, '/')) => value.push('/'),
                    Some((_, 'b')) => value.push('\u{0008}'),
                    Some((_, 'f')) => value.push('\u{000C}'),
                    Some((_, 'n')) => value.push('\n'),
                    Some((_, 'r')) => value.push('\r'),
                    Some((_, 't')) => value.push('\t'),
                    Some((_, other)) => {
                        return Err(self.error(
                            abs,
                            format!("Invalid character escape sequence: \\{other}"),
                        ));
                    }
                    None => {
                        return Err(
                            self.error(abs, "Invalid character escape sequence: \\".to_string())
                        );
                    }
                },
                c if (c as u32) < 0x0020 && c != '\t' => {
                    return Err(self.error(
                        abs,
                        format!("Invalid character within String: \"{}\"", c.escape_default()),
                    ));
                }
                c => value.push(c),
            }
        }

        Err(self.error(body.len(), "Unterminated string"))
    }

    /// Decodes the `XXXX` of a `\uXXXX` escape. `escape_start` is the
    /// offset of the backslash, used for error positions.
    fn read_unicode_escape(
        &self,
        iter: &mut std::str::CharIndices<'_>,
        escape_start: usize,
    ) -> Result<char, GraphQLSyntaxError> {
        let mut text = String::from("\\u");
        let mut code: u32 = 0;
        for _ in 0..4 {
            match iter.next() {
                Some((_, h)) if h.is_ascii_hexdigit() => {
                    text.push(h);
                    code = code * 16 + h.to_digit(16).unwrap_or(0);
                }
                Some((_, h)) => {
                    text.push(h);
                    return Err(self.error(
                        escape_start,
                        format!("Invalid character escape sequence: {text}"),
                    ));
                }
                None => {
                    return Err(self.error(
                        escape_start,
                        format!("Invalid character escape sequence: {text}"),
                    ));
                }
            }
        }
        char::from_u32(code).ok_or_else(|| {
            self.error(
                escape_start,
                format!("Invalid character escape sequence: {text}"),
            )
        })
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn punctuator(&self, kind: GraphQLTokenKind<'src>, start: usize) -> GraphQLToken<'src> {
        GraphQLToken::new(kind, start, start + 1)
    }

    /// `"c"` for the character at `pos`, or `EOF` past the end.
    fn describe_char_at(&self, pos: usize) -> String {
        match self.source.body()[pos..].chars().next() {
            Some(c) => format!("\"{c}\""),
            None => "EOF".to_string(),
        }
    }

    fn error(&self, position: usize, message: impl Into<String>) -> GraphQLSyntaxError {
        GraphQLSyntaxError::new(self.source, position, message)
    }
}
