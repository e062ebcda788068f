use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Build and query relationship graphs from OBO ontology files.
///
/// obo-graph parses an OBO flat file into an ordered term collection and
/// derives a directed graph per relationship type, so consumers can work
/// with edges instead of walking stanza lists.
#[derive(Parser, Debug)]
#[command(
    name = "obo-graph",
    version,
    about,
    long_about = None,
    propagate_version = true,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for edge listings.
#[derive(Clone, Debug, ValueEnum, Default)]
pub enum OutputFormat {
    /// Tab-separated `source_id  target_id  relationship` rows (default).
    #[default]
    Tsv,
    /// Annotated display form, e.g. `(0[GO:0001]-is_a-1[GO:0002])`.
    Display,
    /// Structured JSON array suitable for programmatic consumption.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the relationship graph and print one row per (edge, relationship) pair.
    Edges {
        /// Path to the OBO file.
        path: PathBuf,

        /// Relationship type to filter on (default: config file, then "is_a").
        #[arg(short, long)]
        relationship: Option<String>,

        /// Additional relationship types whose graphs are built and merged in
        /// as a base (comma-separated).
        #[arg(long, value_delimiter = ',')]
        merge: Vec<String>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Tsv)]
        format: OutputFormat,
    },

    /// Term and edge statistics for one relationship graph.
    Stats {
        /// Path to the OBO file.
        path: PathBuf,

        /// Relationship type to filter on (default: config file, then "is_a").
        #[arg(short, long)]
        relationship: Option<String>,

        /// Output as JSON instead of human-readable text.
        #[arg(long)]
        json: bool,
    },

    /// List term ids (and names) in collection order, optionally filtered.
    Terms {
        /// Path to the OBO file.
        path: PathBuf,

        /// Regex pattern to match against term ids (e.g. "GO:00012.*").
        pattern: Option<String>,

        /// Case-insensitive pattern matching.
        #[arg(short = 'i', long)]
        case_insensitive: bool,
    },
}
