mod cli;
mod config;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use regex::RegexBuilder;

use obo_graph::{OntologyGraph, output, parser};

use cli::{Cli, Commands, OutputFormat};
use config::OboGraphConfig;

/// Relationship type used when neither the CLI nor the config names one.
const DEFAULT_RELATIONSHIP: &str = "is_a";

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Edges {
            path,
            relationship,
            merge,
            format,
        } => {
            let graph = build_graph(&path, relationship, merge)?;
            match format {
                OutputFormat::Tsv => output::print_edges_tsv(&graph),
                OutputFormat::Display => output::print_edges_display(&graph),
                OutputFormat::Json => output::print_edges_json(&graph)?,
            }
        }

        Commands::Stats {
            path,
            relationship,
            json,
        } => {
            let graph = build_graph(&path, relationship, Vec::new())?;
            output::print_summary(&output::collect_stats(&graph), json);
        }

        Commands::Terms {
            path,
            pattern,
            case_insensitive,
        } => {
            let terms = parser::parse_file(&path)?;
            let matcher = match &pattern {
                Some(p) => Some(
                    RegexBuilder::new(p)
                        .case_insensitive(case_insensitive)
                        .build()
                        .with_context(|| format!("invalid pattern {:?}", p))?,
                ),
                None => None,
            };

            let mut matched = 0usize;
            for (position, term) in terms.iter().enumerate() {
                if let Some(re) = &matcher
                    && !re.is_match(&term.id)
                {
                    continue;
                }
                matched += 1;
                println!(
                    "{}\t{}\t{}",
                    position,
                    term.id,
                    term.name.as_deref().unwrap_or("-")
                );
            }

            if matched == 0 && pattern.is_some() {
                bail!("no terms matching {:?}", pattern.unwrap_or_default());
            }
        }
    }

    Ok(())
}

/// Parse the OBO file and build the requested relationship graph, merging in
/// one base graph per `--merge` type. CLI flags win over `obo-graph.toml`
/// defaults.
fn build_graph(
    path: &Path,
    relationship: Option<String>,
    merge: Vec<String>,
) -> Result<OntologyGraph> {
    let config = OboGraphConfig::load_for(path);
    let terms = Arc::new(parser::parse_file(path)?);

    let relationship = relationship
        .or(config.relationship)
        .unwrap_or_else(|| DEFAULT_RELATIONSHIP.to_owned());
    let merge = if merge.is_empty() {
        config.merge.unwrap_or_default()
    } else {
        merge
    };

    let mut bases = Vec::with_capacity(merge.len());
    for rel_type in &merge {
        bases.push(OntologyGraph::build(Arc::clone(&terms), rel_type.as_str(), &[])?);
    }
    let base_refs: Vec<&OntologyGraph> = bases.iter().collect();

    Ok(OntologyGraph::build(terms, relationship, &base_refs)?)
}
