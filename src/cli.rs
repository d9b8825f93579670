use std::path::PathBuf;

use aws_quiz_prep::DisplayMode;
use clap::{Parser, Subcommand};

/// Build, enhance and practise an AWS certification question bank.
#[derive(Debug, Parser)]
#[command(name = "aws-quiz-prep", about, version)]
pub struct Cli {
    /// Optional TOML config file; environment variables override its values
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show debug logs
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse extracted dump text files into the question corpus
    Ingest {
        /// Text files produced by a PDF text extractor (pages split by form feed)
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Output corpus file. Default: the configured corpus path
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Build the choice translation dictionary from the corpus
    BuildDict {
        /// Output dictionary file. Default: the configured translations path
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Translate choices and expand answer explanations in place
    Enhance,

    /// Print one question in the chosen display mode
    Show {
        /// Question id
        id: String,

        /// Display mode: en, ko or mixed
        #[arg(long)]
        mode: Option<DisplayMode>,

        /// Also print the answer
        #[arg(long)]
        answer: bool,
    },

    /// Run an interactive quiz on stdin
    Quiz {
        /// Display mode: en, ko or mixed
        #[arg(long)]
        mode: Option<DisplayMode>,

        /// Seed for mixed mode language picks
        #[arg(long)]
        seed: Option<u64>,
    },
}
