use crate::GraphQLSource;
use crate::SourceLocation;
use memchr::memchr2_iter;

/// Byte-offset → (line, column) resolution for a source body.
///
/// Built once per resolution site by scanning the body for line
/// terminators with `memchr`, then answering lookups with a binary
/// search over the recorded line-start offsets. Line terminators are
/// LF alone, CR alone, or CRLF (counted as a single line break).
///
/// Lookups return **1-based** line and column values; columns count
/// bytes from the start of the current line. The index itself knows
/// nothing about a source's `location_offset` — see [`get_location`]
/// for the offset-aware entry point.
pub struct LineIndex {
    /// Byte offset of the first byte of each line. `line_starts[0]`
    /// is always 0.
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Scans `body` and records where each line begins.
    pub fn new(body: &str) -> Self {
        let bytes = body.as_bytes();
        let mut line_starts = vec![0];
        // Position of a `\n` that was already consumed as the second
        // half of a `\r\n` pair.
        let mut consumed_lf = None;
        for pos in memchr2_iter(b'\n', b'\r', bytes) {
            if consumed_lf == Some(pos) {
                continue;
            }
            if bytes[pos] == b'\r' && bytes.get(pos + 1) == Some(&b'\n') {
                line_starts.push(pos + 2);
                consumed_lf = Some(pos + 1);
            } else {
                line_starts.push(pos + 1);
            }
        }
        Self { line_starts }
    }

    /// Resolves a byte offset to a 1-based (line, column) pair.
    ///
    /// `offset` may equal the body length (the EOF position). Offsets
    /// beyond the last line start resolve within the final line.
    pub fn location_of(&self, offset: usize) -> SourceLocation {
        // Index of the last line starting at or before `offset`.
        let line_idx = self.line_starts.partition_point(|&start| start <= offset) - 1;
        SourceLocation {
            line: line_idx + 1,
            column: offset - self.line_starts[line_idx] + 1,
        }
    }

    /// Number of lines recorded (a body with no terminators has one).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

/// Resolves a byte offset within `source` to a (line, column) pair,
/// applying the source's `location_offset`.
///
/// The line offset shifts every reported line; the column offset
/// applies only while still on the first line of the body.
pub fn get_location(source: &GraphQLSource, position: usize) -> SourceLocation {
    let index = LineIndex::new(source.body());
    let raw = index.location_of(position);
    shift_by_offset(raw, source.location_offset())
}

/// Applies a source's `location_offset` to a raw body-relative
/// location.
pub(crate) fn shift_by_offset(raw: SourceLocation, offset: SourceLocation) -> SourceLocation {
    SourceLocation {
        line: raw.line + offset.line - 1,
        column: if raw.line == 1 {
            raw.column + offset.column - 1
        } else {
            raw.column
        },
    }
}
