//! CLI parsing and configuration.
//!
//! The defaults mirror the classic fixed filenames, so running the tool
//! with no arguments next to `ParseResult.json` and `ToParse.txt` just
//! works.

use clap::Parser as CliParser;
use std::path::PathBuf;

/// CLI interface using clap
#[derive(CliParser, Debug)]
#[clap(name = "astviz", about = "Interactive HTML visualizer for parse trees")]
pub struct Cli {
    /// Parse tree document (JSON array of tagged nodes)
    #[clap(short, long, value_name = "FILE", default_value = "ParseResult.json")]
    pub tree: PathBuf,

    /// Source text the tree's byte offsets refer to
    #[clap(short, long, value_name = "FILE", default_value = "ToParse.txt")]
    pub source: PathBuf,

    /// Output HTML file
    #[clap(short, long, value_name = "FILE", default_value = "visualization.html")]
    pub output: PathBuf,

    /// Page title
    #[clap(long, default_value = "Parse Tree Visualization")]
    pub title: String,

    /// Enable verbose diagnostic output
    #[clap(short, long)]
    pub verbose: bool,
}

/// Configuration for one visualization run
#[derive(Debug, Clone)]
pub struct Config {
    pub tree_path: PathBuf,
    pub source_path: PathBuf,
    pub output_path: PathBuf,
    pub title: String,
    pub verbose: bool,
}

impl Cli {
    /// Convert CLI arguments into run configuration
    pub fn into_config(self) -> Config {
        Config {
            tree_path: self.tree,
            source_path: self.source,
            output_path: self.output,
            title: self.title,
            verbose: self.verbose,
        }
    }
}
