use crate::token::GraphQLToken;
use crate::GraphQLLexer;
use crate::GraphQLSource;
use crate::GraphQLSyntaxError;

/// One-token lookahead over a [`GraphQLLexer`].
///
/// The stream holds exactly the current token; advancing asks the
/// lexer for the token starting at the current token's end offset.
/// There is no buffer beyond that — the lexer is stateless, so the
/// stream is the only cursor.
///
/// A new stream's current token is the start-of-file sentinel; the
/// parser's first `advance()` reads the first real token.
pub struct GraphQLTokenStream<'src> {
    lexer: GraphQLLexer<'src>,
    current: GraphQLToken<'src>,
    /// End offset of the most recently consumed token. Nodes stamp
    /// their `Loc.end` from this.
    prev_end: usize,
}

impl<'src> GraphQLTokenStream<'src> {
    pub fn new(source: &'src GraphQLSource) -> Self {
        Self {
            lexer: GraphQLLexer::new(source),
            current: GraphQLToken::start_of_file(),
            prev_end: 0,
        }
    }

    /// The current (not yet consumed) token.
    pub fn current(&self) -> &GraphQLToken<'src> {
        &self.current
    }

    /// Consumes the current token, reads the next one from the lexer,
    /// and returns the consumed token by value.
    pub fn advance(&mut self) -> Result<GraphQLToken<'src>, GraphQLSyntaxError> {
        let next = self.lexer.read_token(self.current.end)?;
        let consumed = std::mem::replace(&mut self.current, next);
        self.prev_end = consumed.end;
        Ok(consumed)
    }

    /// End offset of the most recently consumed token.
    pub fn prev_end(&self) -> usize {
        self.prev_end
    }
}
