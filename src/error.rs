/// Errors raised by graph construction and the annotated-edge view.
///
/// Unresolved identifiers are deliberately NOT an error: looking up an id
/// absent from the collection yields an empty index sequence and zero edges.
/// Ambiguous relationship labels are a stderr warning, not a failure.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// An edge endpoint does not exist in the term collection — the index is
    /// out of range, or a merged base graph was built over a different-sized
    /// vertex set. The operation that raised this has not mutated the graph.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
