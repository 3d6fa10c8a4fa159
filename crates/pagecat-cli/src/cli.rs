use std::path::PathBuf;

use clap::Parser;
use pagecat::{ExtractConfig, Granularity};

/// Print transcribed text from PAGE-XML documents.
#[derive(Debug, Parser)]
#[command(name = "pagecat", about, version)]
pub struct Cli {
    /// Input PAGE-XML files ('-' or no arguments reads standard input)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Print text at word granularity
    #[arg(long)]
    pub words: bool,

    /// Print text at region granularity (--words wins if both are set)
    #[arg(long)]
    pub regions: bool,

    /// Prefix each line with the segment id and resolved index
    #[arg(long)]
    pub id: bool,

    /// Include the confidence score when present
    #[arg(long)]
    pub conf: bool,

    /// Ignore any declared reading order; always use document order
    #[arg(long)]
    pub serial: bool,

    /// Prefix each line with the originating file path
    #[arg(long)]
    pub filename: bool,

    /// Replace spaces with underscores in emitted text
    #[arg(long)]
    pub norm: bool,

    /// Comma-separated alternative indices to emit per segment
    /// (negative values count from the end)
    #[arg(
        long,
        value_name = "LIST",
        default_value = "0",
        value_delimiter = ',',
        allow_hyphen_values = true
    )]
    pub index: Vec<i64>,
}

impl Cli {
    /// Build the immutable extraction configuration from the parsed flags.
    pub fn to_config(&self) -> ExtractConfig {
        ExtractConfig {
            granularity: Granularity::from_flags(self.words, self.regions),
            print_id: self.id,
            print_conf: self.conf,
            print_filename: self.filename,
            serial: self.serial,
            normalize: self.norm,
            indices: self.index.clone(),
        }
    }
}
