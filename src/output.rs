use serde::Serialize;

use crate::graph::OntologyGraph;

/// One rendered (edge, relationship) pair.
///
/// An annotated edge carrying several labels expands into several rows;
/// edges with no recoverable label (manual stitches) produce none.
#[derive(Debug, Serialize)]
pub struct EdgeRow {
    pub source_id: String,
    pub target_id: String,
    pub relationship: String,
}

/// Expand every edge of `graph` into rendered rows, one per label.
pub fn edge_rows(graph: &OntologyGraph) -> Vec<EdgeRow> {
    let mut rows = Vec::new();
    for edge in graph.edges() {
        let source_id = &edge.source_term().id;
        let target_id = &edge.target_term().id;
        for relationship in edge.relationships() {
            rows.push(EdgeRow {
                source_id: source_id.clone(),
                target_id: target_id.clone(),
                relationship,
            });
        }
    }
    rows
}

/// Print one tab-separated `source_id  target_id  relationship` line per row.
pub fn print_edges_tsv(graph: &OntologyGraph) {
    for row in edge_rows(graph) {
        println!("{}\t{}\t{}", row.source_id, row.target_id, row.relationship);
    }
}

/// Print each edge in its annotated display form, one per line:
/// `(0[GO:0001]-is_a-1[GO:0002])`.
pub fn print_edges_display(graph: &OntologyGraph) {
    for edge in graph.edges() {
        println!("{}", edge);
    }
}

/// Print all rows as a pretty-printed JSON array to stdout.
pub fn print_edges_json(graph: &OntologyGraph) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&edge_rows(graph))?);
    Ok(())
}

/// Aggregate statistics for one built graph.
#[derive(Debug, Serialize)]
pub struct GraphStats {
    pub term_count: usize,
    /// Number of distinct identifier values across the collection.
    pub distinct_ids: usize,
    /// Identifier values carried by more than one stanza.
    pub duplicated_ids: usize,
    pub relationship_type: String,
    pub edge_count: usize,
}

pub fn collect_stats(graph: &OntologyGraph) -> GraphStats {
    GraphStats {
        term_count: graph.terms().len(),
        distinct_ids: graph.index().distinct_ids(),
        duplicated_ids: graph.index().duplicated_ids(),
        relationship_type: graph.relationship_type().to_owned(),
        edge_count: graph.edge_count(),
    }
}

/// Print a summary of a built graph.
///
/// - `json = true`: emit a pretty-printed JSON object to stdout.
/// - `json = false`: emit a human-readable summary to stdout.
pub fn print_summary(stats: &GraphStats, json: bool) {
    if json {
        match serde_json::to_string_pretty(stats) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("error serialising stats: {}", e),
        }
        return;
    }

    println!(
        "Loaded {} term(s) ({} distinct ids, {} duplicated)",
        stats.term_count, stats.distinct_ids, stats.duplicated_ids
    );
    println!(
        "  {} edge(s) for relationship type {:?}",
        stats.edge_count, stats.relationship_type
    );
}
