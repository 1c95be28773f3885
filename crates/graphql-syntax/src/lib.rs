//! A fail-fast parser for the GraphQL query document language.
//!
//! Feed it a source text, get back a structured, location-annotated
//! AST — or a single structured syntax error with byte positions,
//! resolved line/column locations, and a caret-annotated snippet.
//! There is no recovery past the first error, no I/O, no caching:
//! parsing is a synchronous computation over an in-memory buffer,
//! bounded by source length.
//!
//! ```
//! use graphql_syntax::parse;
//! use graphql_syntax::GraphQLSource;
//!
//! let source = GraphQLSource::new("{ node(id: 4) { id, name } }");
//! let document = parse(&source)?;
//! assert_eq!(document.definitions.len(), 1);
//! # Ok::<(), graphql_syntax::GraphQLSyntaxError>(())
//! ```
//!
//! Every AST node carries an optional [`Loc`] (a byte range plus a
//! back-reference to the [`GraphQLSource`]), so any node can
//! reconstruct its exact source text via
//! [`ast::AstNode::to_source`], and a whole document can be
//! serialized to a builder expression via [`ast_to_builder_code`] for
//! snapshotting. [`ParseOptions`] turns the annotations off for
//! structural comparisons.

pub mod ast;
mod ast_to_builder;
mod graphql_lexer;
mod graphql_parser;
mod graphql_source;
mod graphql_syntax_error;
mod graphql_token_stream;
mod line_index;
mod loc;
mod parse_options;
mod source_location;
pub mod token;
mod undefined_default_value;

pub use ast_to_builder::ast_to_builder_code;
pub use ast_to_builder::loc;
pub use graphql_lexer::GraphQLLexer;
pub use graphql_parser::parse;
pub use graphql_parser::parse_with_options;
pub use graphql_parser::GraphQLParser;
pub use graphql_source::GraphQLSource;
pub use graphql_syntax_error::GraphQLSyntaxError;
pub use graphql_token_stream::GraphQLTokenStream;
pub use line_index::get_location;
pub use line_index::LineIndex;
pub use loc::Loc;
pub use parse_options::ParseOptions;
pub use source_location::SourceLocation;
pub use undefined_default_value::UndefinedDefaultValue;

#[cfg(test)]
mod tests;
