use crate::Loc;

/// Trait implemented by all AST node types. Provides lossless source
/// reconstruction.
///
/// All AST node types implement this trait via
/// `#[inherent] impl AstNode`, giving each node both inherent methods
/// (no trait import needed) and a trait bound for generic utilities.
///
/// Reconstruction slices the original body by the node's byte range,
/// so the output is exactly the text the node was parsed from —
/// whitespace, commas, and comments inside the range included. Nodes
/// parsed in no-location mode carry no range and reconstruct to
/// nothing.
pub trait AstNode {
    /// Append this node's exact source text to `sink`.
    fn append_source(&self, sink: &mut String, body: &str);

    /// Return this node's exact source text as a `String`.
    ///
    /// Convenience wrapper around
    /// [`append_source`](AstNode::append_source).
    fn to_source(&self, body: &str) -> String {
        let mut s = String::new();
        self.append_source(&mut s, body);
        s
    }
}

/// Shared slice-appending helper behind every leaf `append_source`.
pub(crate) fn append_loc_source_slice(loc: Option<Loc<'_>>, sink: &mut String, body: &str) {
    if let Some(loc) = loc {
        sink.push_str(&body[loc.start..loc.end]);
    }
}
