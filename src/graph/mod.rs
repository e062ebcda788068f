pub mod edge;
pub mod index;

use std::fmt;
use std::sync::Arc;

use petgraph::Directed;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};

use crate::error::GraphError;
use crate::term::TermCollection;

use edge::AnnotatedEdge;
use index::IdentifierIndex;

/// Directed graph over one term collection, filtered on a single
/// relationship type and optionally seeded with the edges of other graphs
/// built over the same collection.
///
/// Vertices are collection positions `0..N-1`. Edge storage has set
/// semantics: re-adding an existing edge is a no-op, so one relationship
/// declaration expanding across duplicated ids never produces multi-edges.
///
/// The graph OWNS a petgraph [`StableGraph`] rather than extending one:
/// vertex identity here carries collection meaning a generic graph does not
/// have, so only the operations that preserve it are exposed.
pub struct OntologyGraph {
    graph: StableGraph<usize, (), Directed>,
    /// Maps collection position to its petgraph node index.
    nodes: Vec<NodeIndex>,
    relationship_type: String,
    terms: Arc<TermCollection>,
    /// Computed once at construction, scoped to this instance.
    index: IdentifierIndex,
}

impl OntologyGraph {
    /// Build a graph over `terms` filtered on `relationship_type`, seeded
    /// with the edge content of every graph in `bases`.
    ///
    /// Construction runs in three passes:
    /// 1. one vertex per collection position, in order;
    /// 2. union of all base-graph edges (merging an is_a graph and a part_of
    ///    graph yields one composite graph);
    /// 3. for each term in collection order, each relationship declaration
    ///    matching the filter becomes one edge per position its target id
    ///    resolves to — the cross-product expansion over duplicated ids.
    ///
    /// Edges point from the DECLARING term to the term(s) its relationship
    /// names. Target ids that resolve to nothing contribute zero edges.
    ///
    /// # Errors
    /// `InvalidArgument` when a base graph's vertex set does not match
    /// `terms` — its edges would reference absent endpoints. Nothing is
    /// returned in that case; there is no partially built graph.
    pub fn build(
        terms: Arc<TermCollection>,
        relationship_type: impl Into<String>,
        bases: &[&OntologyGraph],
    ) -> Result<Self, GraphError> {
        let relationship_type = relationship_type.into();
        let index = IdentifierIndex::build(&terms);

        let mut graph = StableGraph::with_capacity(terms.len(), 0);
        let nodes: Vec<NodeIndex> = (0..terms.len()).map(|i| graph.add_node(i)).collect();

        for base in bases {
            if base.vertex_count() != terms.len() {
                return Err(GraphError::InvalidArgument(format!(
                    "cannot merge base graph with {} vertices into a graph over {} term(s)",
                    base.vertex_count(),
                    terms.len()
                )));
            }
            for (source, target) in base.edge_pairs() {
                graph.update_edge(nodes[source], nodes[target], ());
            }
        }

        for (declaring, term) in terms.iter().enumerate() {
            for rel in &term.relationships {
                if rel.rel_type != relationship_type {
                    continue;
                }
                for &target in index.indices(&rel.target_id) {
                    graph.update_edge(nodes[declaring], nodes[target], ());
                }
            }
        }

        Ok(Self {
            graph,
            nodes,
            relationship_type,
            terms,
            index,
        })
    }

    /// The relationship type this graph was filtered on.
    pub fn relationship_type(&self) -> &str {
        &self.relationship_type
    }

    /// The term collection this graph was built over.
    pub fn terms(&self) -> &TermCollection {
        &self.terms
    }

    /// Shared handle to the term collection, for building sibling graphs.
    pub fn terms_arc(&self) -> Arc<TermCollection> {
        Arc::clone(&self.terms)
    }

    /// The identifier index this graph resolved its edges through.
    pub fn index(&self) -> &IdentifierIndex {
        &self.index
    }

    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the edge `source -> target` exists.
    pub fn contains_edge(&self, source: usize, target: usize) -> bool {
        match (self.nodes.get(source), self.nodes.get(target)) {
            (Some(&s), Some(&t)) => self.graph.contains_edge(s, t),
            _ => false,
        }
    }

    /// Add the edge `source -> target`. Re-adding an existing edge is a
    /// no-op.
    ///
    /// # Errors
    /// `InvalidArgument` when either endpoint is not a collection position;
    /// the edge set is untouched in that case.
    pub fn add_edge(&mut self, source: usize, target: usize) -> Result<(), GraphError> {
        let (&s, &t) = match (self.nodes.get(source), self.nodes.get(target)) {
            (Some(s), Some(t)) => (s, t),
            _ => {
                return Err(GraphError::InvalidArgument(format!(
                    "edge endpoint out of range: {} -> {} over {} term(s)",
                    source,
                    target,
                    self.nodes.len()
                )));
            }
        };
        self.graph.update_edge(s, t, ());
        Ok(())
    }

    /// Add edges from every term carrying identifier `u` to every term
    /// carrying identifier `v` — the full cross product
    /// `indices(u) × indices(v)`.
    ///
    /// Used to stitch relationships not expressed as term-native
    /// declarations. Identifiers absent from the collection resolve to
    /// nothing and contribute zero edges, silently.
    pub fn add_edges_by_identifiers(&mut self, u: &str, v: &str) {
        let sources = self.index.indices(u).to_vec();
        let targets = self.index.indices(v).to_vec();
        for &source in &sources {
            for &target in &targets {
                self.graph
                    .update_edge(self.nodes[source], self.nodes[target], ());
            }
        }
    }

    /// Structural edges as `(source, target)` collection-position pairs.
    pub fn edge_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (self.graph[e.source()], self.graph[e.target()]))
    }

    /// Every structural edge wrapped as an [`AnnotatedEdge`] view.
    ///
    /// Restartable: each call yields a fresh iterator over the current edge
    /// set, borrowing the graph's term collection.
    pub fn edges(&self) -> impl Iterator<Item = AnnotatedEdge<'_>> + '_ {
        self.graph.edge_references().map(|e| {
            AnnotatedEdge::from_resolved(&self.terms, self.graph[e.source()], self.graph[e.target()])
        })
    }
}

impl fmt::Debug for OntologyGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OntologyGraph")
            .field("relationship_type", &self.relationship_type)
            .field("vertices", &self.vertex_count())
            .field("edges", &self.edge_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Term;

    fn shared(terms: Vec<Term>) -> Arc<TermCollection> {
        TermCollection::shared(terms)
    }

    #[test]
    fn test_single_matching_relationship_yields_one_edge() {
        let terms = shared(vec![
            Term::new("a").with_relationship("is_a", "b"),
            Term::new("b"),
        ]);
        let graph = OntologyGraph::build(terms, "is_a", &[]).unwrap();

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(
            graph.contains_edge(0, 1),
            "edge should run from the declaring term to its target"
        );

        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].relationships(), vec!["is_a".to_string()]);
    }

    #[test]
    fn test_filter_excludes_other_relationship_types() {
        let terms = shared(vec![
            Term::new("a")
                .with_relationship("is_a", "b")
                .with_relationship("part_of", "b"),
            Term::new("b"),
        ]);
        let graph = OntologyGraph::build(terms, "part_of", &[]).unwrap();
        assert_eq!(graph.edge_count(), 1, "only part_of declarations count");
        assert_eq!(graph.relationship_type(), "part_of");
    }

    #[test]
    fn test_duplicate_target_ids_expand_to_cross_product() {
        // Three stanzas share the id "b"; one part_of declaration from c
        // must fan out to every one of them.
        let terms = shared(vec![
            Term::new("b"),
            Term::new("b"),
            Term::new("b"),
            Term::new("c").with_relationship("part_of", "b"),
        ]);
        let graph = OntologyGraph::build(terms, "part_of", &[]).unwrap();

        assert_eq!(graph.edge_count(), 3);
        for target in 0..3 {
            assert!(
                graph.contains_edge(3, target),
                "c should point at duplicate stanza {}",
                target
            );
        }
    }

    #[test]
    fn test_unresolved_target_contributes_zero_edges() {
        let terms = shared(vec![
            Term::new("a").with_relationship("is_a", "EXTERNAL:0001"),
            Term::new("b"),
        ]);
        let graph = OntologyGraph::build(terms, "is_a", &[]).unwrap();
        assert_eq!(
            graph.edge_count(),
            0,
            "external references resolve to nothing without raising"
        );
    }

    #[test]
    fn test_merge_unions_base_graph_edges() {
        let terms = shared(vec![
            Term::new("a")
                .with_relationship("is_a", "b")
                .with_relationship("regulates", "c"),
            Term::new("b").with_relationship("part_of", "c"),
            Term::new("c"),
        ]);

        let is_a = OntologyGraph::build(Arc::clone(&terms), "is_a", &[]).unwrap();
        let part_of = OntologyGraph::build(Arc::clone(&terms), "part_of", &[]).unwrap();
        let merged =
            OntologyGraph::build(Arc::clone(&terms), "regulates", &[&is_a, &part_of]).unwrap();

        assert_eq!(merged.edge_count(), 3, "union of both bases plus regulates");
        assert!(merged.contains_edge(0, 1), "is_a edge survives the merge");
        assert!(merged.contains_edge(1, 2), "part_of edge survives the merge");
        assert!(merged.contains_edge(0, 2), "regulates edge is added on top");
    }

    #[test]
    fn test_merge_deduplicates_overlapping_edges() {
        let terms = shared(vec![
            Term::new("a").with_relationship("is_a", "b"),
            Term::new("b"),
        ]);
        let base = OntologyGraph::build(Arc::clone(&terms), "is_a", &[]).unwrap();
        // Same filter again: the base's only edge is re-derived on top of itself.
        let merged = OntologyGraph::build(Arc::clone(&terms), "is_a", &[&base]).unwrap();
        assert_eq!(merged.edge_count(), 1, "set semantics — no duplicate edge");
    }

    #[test]
    fn test_merge_rejects_mismatched_vertex_set() {
        let small = shared(vec![Term::new("a")]);
        let large = shared(vec![Term::new("a"), Term::new("b")]);
        let base = OntologyGraph::build(small, "is_a", &[]).unwrap();
        let result = OntologyGraph::build(large, "is_a", &[&base]);
        assert!(
            result.is_err(),
            "base graph over a different-sized collection must be rejected"
        );
    }

    #[test]
    fn test_add_edges_by_identifiers_cross_product() {
        let terms = shared(vec![
            Term::new("x"),
            Term::new("x"),
            Term::new("y"),
            Term::new("y"),
            Term::new("y"),
        ]);
        let mut graph = OntologyGraph::build(terms, "is_a", &[]).unwrap();
        assert_eq!(graph.edge_count(), 0);

        graph.add_edges_by_identifiers("x", "y");
        assert_eq!(graph.edge_count(), 6, "2 sources x 3 targets");

        // Repeating the stitch must not grow the set.
        graph.add_edges_by_identifiers("x", "y");
        assert_eq!(graph.edge_count(), 6);
    }

    #[test]
    fn test_add_edges_by_identifiers_with_unknown_id_is_silent() {
        let terms = shared(vec![Term::new("x")]);
        let mut graph = OntologyGraph::build(terms, "is_a", &[]).unwrap();
        graph.add_edges_by_identifiers("x", "nope");
        graph.add_edges_by_identifiers("nope", "x");
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_add_edge_bounds_checked() {
        let terms = shared(vec![Term::new("a"), Term::new("b")]);
        let mut graph = OntologyGraph::build(terms, "is_a", &[]).unwrap();

        assert!(graph.add_edge(0, 1).is_ok());
        assert!(graph.add_edge(0, 1).is_ok(), "re-add is a no-op, not an error");
        assert_eq!(graph.edge_count(), 1);

        assert!(graph.add_edge(0, 2).is_err());
        assert_eq!(graph.edge_count(), 1, "failed add must not mutate the edge set");
    }

    #[test]
    fn test_edges_iterator_is_restartable() {
        let terms = shared(vec![
            Term::new("a").with_relationship("is_a", "b"),
            Term::new("b"),
        ]);
        let graph = OntologyGraph::build(terms, "is_a", &[]).unwrap();
        assert_eq!(graph.edges().count(), 1);
        assert_eq!(graph.edges().count(), 1, "each call yields a fresh pass");
    }

    #[test]
    fn test_empty_collection_builds_empty_graph() {
        let terms = shared(vec![]);
        let graph = OntologyGraph::build(terms, "is_a", &[]).unwrap();
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.edges().count(), 0);
    }
}
