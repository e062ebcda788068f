//! Ontology graph engine for OBO term collections.
//!
//! Parses OBO flat files into an ordered [`TermCollection`] and builds
//! directed [`OntologyGraph`]s from it, filtered by relationship type and
//! mergeable with one another. Because OBO identifiers may label several
//! stanzas, vertices are collection positions and one relationship
//! declaration can expand into a cross product of edges; the
//! [`AnnotatedEdge`] view recovers the relationship label(s) behind each
//! structural edge.

pub mod error;
pub mod graph;
pub mod output;
pub mod parser;
pub mod term;

pub use error::GraphError;
pub use graph::OntologyGraph;
pub use graph::edge::AnnotatedEdge;
pub use graph::index::IdentifierIndex;
pub use term::{Relationship, Term, TermCollection};
