use std::collections::HashMap;

use crate::term::TermCollection;

/// Multimap from identifier value to the collection positions bearing that id.
///
/// Built in one pass over the collection and owned by a single
/// [`OntologyGraph`](crate::graph::OntologyGraph). There is no process-wide
/// cache, and the index is never rebuilt (the collection is read-only for
/// the graph's lifetime).
///
/// Every position `0..N-1` appears under exactly one key (its own term's
/// id); a key maps to one position in the common case, but duplicated ids
/// produce longer buckets and drive the cross-product edge expansion.
#[derive(Debug, Clone, Default)]
pub struct IdentifierIndex {
    buckets: HashMap<String, Vec<usize>>,
}

impl IdentifierIndex {
    /// Build the index for `terms`: one pass, collection order preserved
    /// within each bucket. Pure function of its input.
    pub fn build(terms: &TermCollection) -> Self {
        let mut buckets: HashMap<String, Vec<usize>> = HashMap::new();
        for (position, term) in terms.iter().enumerate() {
            buckets.entry(term.id.clone()).or_default().push(position);
        }
        Self { buckets }
    }

    /// All positions whose term carries identifier `id`, in collection order.
    ///
    /// An identifier absent from the collection yields an empty slice, never
    /// an error: ontology cross-references into external vocabularies are
    /// expected to stay unresolved.
    pub fn indices(&self, id: &str) -> &[usize] {
        self.buckets.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct identifier values.
    pub fn distinct_ids(&self) -> usize {
        self.buckets.len()
    }

    /// Number of identifier values carried by more than one stanza.
    pub fn duplicated_ids(&self) -> usize {
        self.buckets.values().filter(|b| b.len() > 1).count()
    }
}
