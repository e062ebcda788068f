use std::fmt;

use crate::error::GraphError;
use crate::term::{Term, TermCollection};

/// Marker prepended to a relationship label recovered from the TARGET term's
/// declarations — the relationship runs opposite to the structural edge.
pub const REVERSE_MARKER: char = '~';

/// Read-only view pairing a structural `(source, target)` edge with the term
/// collection it was built over, so consumers can recover the semantic
/// relationship label(s) the set-based edge storage discarded.
///
/// Computed on demand by [`OntologyGraph::edges`](crate::graph::OntologyGraph::edges);
/// never stored.
#[derive(Debug, Clone, Copy)]
pub struct AnnotatedEdge<'a> {
    terms: &'a TermCollection,
    source: usize,
    target: usize,
}

impl<'a> AnnotatedEdge<'a> {
    /// Create a view over the edge `source -> target`.
    ///
    /// # Errors
    /// `InvalidArgument` when either endpoint is not a position in `terms` —
    /// a half-built edge must not be handed to consumers.
    pub fn new(
        terms: &'a TermCollection,
        source: usize,
        target: usize,
    ) -> Result<Self, GraphError> {
        if source >= terms.len() || target >= terms.len() {
            return Err(GraphError::InvalidArgument(format!(
                "edge endpoint out of range: {} -> {} over {} term(s)",
                source,
                target,
                terms.len()
            )));
        }
        Ok(Self {
            terms,
            source,
            target,
        })
    }

    /// Constructor for edges whose endpoints were already validated by the
    /// owning graph (every stored edge endpoint is a live vertex).
    pub(crate) fn from_resolved(terms: &'a TermCollection, source: usize, target: usize) -> Self {
        debug_assert!(source < terms.len() && target < terms.len());
        Self {
            terms,
            source,
            target,
        }
    }

    /// Collection position of the declaring endpoint.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Collection position of the target endpoint.
    pub fn target(&self) -> usize {
        self.target
    }

    /// The term at the edge's source position.
    pub fn source_term(&self) -> &'a Term {
        self.terms
            .get(self.source)
            .expect("endpoint validated at construction")
    }

    /// The term at the edge's target position.
    pub fn target_term(&self) -> &'a Term {
        self.terms
            .get(self.target)
            .expect("endpoint validated at construction")
    }

    /// Every relationship label that justifies this structural edge.
    ///
    /// Forward matches first: the source term's declarations whose target id
    /// equals the target term's id, in the source's declaration order. Then
    /// reverse matches: the target term's declarations pointing back at the
    /// source's id, prefixed with [`REVERSE_MARKER`], in the target's
    /// declaration order.
    ///
    /// May be empty (edge stitched via
    /// [`add_edges_by_identifiers`](crate::graph::OntologyGraph::add_edges_by_identifiers)
    /// with no backing declaration) or hold several labels (multiple
    /// relationship types connect the same pair).
    pub fn relationships(&self) -> Vec<String> {
        let source = self.source_term();
        let target = self.target_term();
        let mut labels = Vec::new();
        for rel in &source.relationships {
            if rel.target_id == target.id {
                labels.push(rel.rel_type.clone());
            }
        }
        for rel in &target.relationships {
            if rel.target_id == source.id {
                labels.push(format!("{}{}", REVERSE_MARKER, rel.rel_type));
            }
        }
        labels
    }

    /// The first relationship label, or `None` when the edge has no backing
    /// declaration.
    ///
    /// More than one candidate is an ambiguous (but legal) condition: a
    /// warning is written to stderr and the first label per the
    /// [`relationships`](Self::relationships) ordering is returned —
    /// deterministic, never a failure.
    pub fn relationship(&self) -> Option<String> {
        let labels = self.relationships();
        if labels.len() > 1 {
            eprintln!(
                "warning: ambiguous relationship for edge {}: {} candidates, using {:?}",
                self,
                labels.len(),
                labels[0]
            );
        }
        labels.into_iter().next()
    }
}

impl fmt::Display for AnnotatedEdge<'_> {
    /// `(sourceIndex[sourceId]-label,label-targetIndex[targetId])`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}[{}]-{}-{}[{}])",
            self.source,
            self.source_term().id,
            self.relationships().join(","),
            self.target,
            self.target_term().id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Term;

    fn coll() -> TermCollection {
        TermCollection::new(vec![
            Term::new("a").with_relationship("is_a", "b"),
            Term::new("b").with_relationship("part_of", "a"),
            Term::new("c"),
        ])
    }

    #[test]
    fn test_out_of_range_endpoint_is_invalid_argument() {
        let terms = coll();
        assert!(
            AnnotatedEdge::new(&terms, 0, 3).is_err(),
            "target past the collection end must be rejected"
        );
        assert!(AnnotatedEdge::new(&terms, 9, 0).is_err());
        assert!(AnnotatedEdge::new(&terms, 0, 1).is_ok());
    }

    #[test]
    fn test_forward_then_reverse_labels() {
        let terms = coll();
        let edge = AnnotatedEdge::new(&terms, 0, 1).unwrap();
        assert_eq!(
            edge.relationships(),
            vec!["is_a".to_string(), "~part_of".to_string()],
            "forward matches come before reverse-marked matches"
        );
    }

    #[test]
    fn test_reverse_direction_is_marked() {
        let terms = coll();
        // Structural edge b -> a; b declares part_of a (forward), a declares
        // is_a b (reverse from this edge's point of view).
        let edge = AnnotatedEdge::new(&terms, 1, 0).unwrap();
        assert_eq!(
            edge.relationships(),
            vec!["part_of".to_string(), "~is_a".to_string()]
        );
    }

    #[test]
    fn test_unbacked_edge_has_no_labels() {
        let terms = coll();
        let edge = AnnotatedEdge::new(&terms, 2, 0).unwrap();
        assert!(edge.relationships().is_empty());
        assert!(edge.relationship().is_none());
    }

    #[test]
    fn test_ambiguous_relationship_returns_first_deterministically() {
        let terms = TermCollection::new(vec![
            Term::new("a")
                .with_relationship("is_a", "b")
                .with_relationship("regulates", "b"),
            Term::new("b"),
        ]);
        let edge = AnnotatedEdge::new(&terms, 0, 1).unwrap();
        assert_eq!(edge.relationships().len(), 2);
        // Ambiguity warns on stderr but still yields the first label.
        assert_eq!(edge.relationship().as_deref(), Some("is_a"));
    }

    #[test]
    fn test_display_format() {
        let terms = coll();
        let edge = AnnotatedEdge::new(&terms, 0, 1).unwrap();
        assert_eq!(edge.to_string(), "(0[a]-is_a,~part_of-1[b])");
    }
}
