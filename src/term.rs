use std::sync::Arc;

/// One typed relationship declared inside a term stanza.
///
/// `target_id` is a raw identifier value: it may resolve to zero, one, or
/// many stanzas in the owning collection, or to nothing at all (references
/// into external vocabularies are legal and stay unresolved).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Relationship {
    /// Relationship type name as written in the source (e.g. "is_a", "part_of").
    pub rel_type: String,
    /// Identifier value of the relationship's target term.
    pub target_id: String,
}

impl Relationship {
    pub fn new(rel_type: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self {
            rel_type: rel_type.into(),
            target_id: target_id.into(),
        }
    }
}

/// One ontology stanza: an identifier plus its ordered relationship list.
///
/// Identifiers are NOT required to be unique across a collection — the same
/// id appearing in several stanzas is legal and meaningful, which is why
/// graph vertices are collection positions rather than id values.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Term {
    /// The stanza's identifier value.
    pub id: String,
    /// Human-readable name, when the source provides one.
    pub name: Option<String>,
    /// Ordered relationship declarations, in source order.
    pub relationships: Vec<Relationship>,
}

impl Term {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            relationships: Vec::new(),
        }
    }

    /// Builder-style helper: append a relationship declaration.
    pub fn with_relationship(
        mut self,
        rel_type: impl Into<String>,
        target_id: impl Into<String>,
    ) -> Self {
        self.relationships.push(Relationship::new(rel_type, target_id));
        self
    }
}

/// An ordered, positionally indexed sequence of terms.
///
/// Position in this sequence IS the vertex identity used by every graph
/// built from it. The collection is read-only once a graph has been built:
/// graphs and annotated-edge views hold references into it and rely on
/// positions staying stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TermCollection {
    terms: Vec<Term>,
}

impl TermCollection {
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    /// Wrap in an `Arc` for sharing across graphs built from the same collection.
    pub fn shared(terms: Vec<Term>) -> Arc<Self> {
        Arc::new(Self::new(terms))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The term at `position`, or `None` when out of range.
    pub fn get(&self, position: usize) -> Option<&Term> {
        self.terms.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }
}

impl From<Vec<Term>> for TermCollection {
    fn from(terms: Vec<Term>) -> Self {
        Self::new(terms)
    }
}

impl<'a> IntoIterator for &'a TermCollection {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
