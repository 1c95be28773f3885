use crate::line_index::shift_by_offset;
use crate::GraphQLSource;
use crate::LineIndex;
use crate::SourceLocation;
use smallvec::smallvec;
use smallvec::SmallVec;

/// A syntax error raised by the lexer or parser.
///
/// Carries everything cursor-accurate tooling needs: the short
/// `message`, the originating source handle, the byte `positions` the
/// error refers to, the resolved `locations`, and a fully rendered
/// multi-line `description` with a caret-annotated source snippet.
///
/// The description is computed eagerly at construction so that
/// formatting never depends on the error's ownership state later. It
/// looks like:
///
/// ```text
/// Syntax Error GraphQL (1:2) Expected Name, found EOF
///
/// 1: {
///     ^
/// ```
///
/// The first error aborts the parse; an error never carries more than
/// one diagnostic, so `positions`/`locations` almost always hold
/// exactly one entry (hence the `SmallVec`).
#[derive(Clone, Debug, thiserror::Error)]
#[error("{description}")]
pub struct GraphQLSyntaxError {
    message: String,
    // Not named `source` so thiserror does not treat the handle as an
    // error cause.
    source_handle: GraphQLSource,
    positions: SmallVec<[usize; 1]>,
    locations: SmallVec<[SourceLocation; 1]>,
    description: String,
}

impl GraphQLSyntaxError {
    /// Builds a syntax error at `position` (a byte offset into the
    /// source body), resolving the location and rendering the
    /// description immediately.
    pub fn new(source: &GraphQLSource, position: usize, message: impl Into<String>) -> Self {
        let message = message.into();
        let index = LineIndex::new(source.body());
        let raw = index.location_of(position);
        let location = shift_by_offset(raw, source.location_offset());
        let description = format!(
            "Syntax Error {} ({}) {}\n\n{}",
            source.name(),
            location,
            message,
            highlight_source_at_location(source.body(), raw, location),
        );
        Self {
            message,
            source_handle: source.clone(),
            positions: smallvec![position],
            locations: smallvec![location],
            description,
        }
    }

    /// The short, single-line message (e.g. `Expected Name, found {`).
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The source the error was raised against.
    pub fn source(&self) -> &GraphQLSource {
        &self.source_handle
    }

    /// Byte offsets into the source body.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Resolved (line, column) pairs, with the source's
    /// `location_offset` applied.
    pub fn locations(&self) -> &[SourceLocation] {
        &self.locations
    }

    /// The rendered multi-line description (also the `Display` form).
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Renders up to three context lines around `raw` with 1-based line
/// numbers and a caret under the column of interest.
///
/// `display` carries the line numbers to print (they differ from `raw`
/// when the source has a `location_offset`); the caret is aligned with
/// `raw.column` since the printed content is the raw body line.
fn highlight_source_at_location(
    body: &str,
    raw: SourceLocation,
    display: SourceLocation,
) -> String {
    let lines = split_lines(body);
    let line = raw.line;
    // Width of the largest line number that can be printed.
    let pad_len = (display.line + 1).to_string().len();

    let mut result = String::new();
    if line >= 2 {
        result.push_str(&format!(
            "{:>pad_len$}: {}\n",
            display.line - 1,
            lines[line - 2]
        ));
    }
    if line <= lines.len() {
        result.push_str(&format!("{:>pad_len$}: {}\n", display.line, lines[line - 1]));
        result.push_str(&format!("{}^\n", " ".repeat(pad_len + raw.column + 1)));
    }
    if line < lines.len() {
        result.push_str(&format!(
            "{:>pad_len$}: {}\n",
            display.line + 1,
            lines[line]
        ));
    }
    result
}

/// Splits a body on LF, CR, or CRLF without producing a trailing empty
/// line for a terminator-final body (so an empty body yields no lines
/// at all).
fn split_lines(body: &str) -> Vec<&str> {
    let bytes = body.as_bytes();
    let mut lines = Vec::new();
    let mut line_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&body[line_start..i]);
                i += 1;
                line_start = i;
            }
            b'\r' => {
                lines.push(&body[line_start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                line_start = i;
            }
            _ => i += 1,
        }
    }
    if line_start < bytes.len() {
        lines.push(&body[line_start..]);
    }
    lines
}
