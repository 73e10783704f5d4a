use crate::types::TypeFilter;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jazznode-search")]
#[command(about = "Fuzzy search over jazz events, artists, venues and cities", long_about = None)]
pub struct Cli {
    /// Config file (default: $JAZZNODE_SEARCH_CONFIG or the user config dir)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
    /// JSON dataset with events, artists, venues and cities
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,
    #[arg(short, long, global = true)]
    pub locale: Option<String>,
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the search over MCP on stdio
    Serve,
    /// Run one query and print the results
    Query {
        query: String,
        #[arg(short, long, default_value = "all")]
        filter: TypeFilter,
        /// Results per type when no filter is set
        #[arg(long)]
        per_group: Option<usize>,
        /// Results when a filter is set
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Print the full ranked list as JSON instead of the grouped view
        #[arg(long)]
        json: bool,
    },
}
