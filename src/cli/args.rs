//! CLI argument definitions using clap.

use clap::{Parser, ValueEnum};

use crate::core::report;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// First preference source (file path, glob pattern, or directory)
    pub file_a: String,

    /// Second preference source (file path, glob pattern, or directory)
    pub file_b: String,

    /// Report destination; "-" prints the report to stdout
    #[arg(short, long, env = "PREFDIFF_OUTPUT")]
    pub output: Option<String>,

    /// Append to the report file instead of overwriting it
    #[arg(long)]
    pub append: bool,

    /// Treat every declaration in the first source as active (skip comment parsing)
    #[arg(long)]
    pub no_comments_a: bool,

    /// Treat every declaration in the second source as active (skip comment parsing)
    #[arg(long)]
    pub no_comments_b: bool,

    /// Report sections to hide (can be specified multiple times)
    #[arg(long, value_enum)]
    pub hide: Vec<HideSection>,

    /// Print the classified outcomes as JSON on stdout instead of a text report
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Suppressible report sections. The broken-syntax sections of both sides
/// share one flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum HideSection {
    Matching,
    Diffs,
    MissingA,
    MissingB,
    InactiveA,
    InactiveB,
    Mismatched,
    Broken,
}

impl HideSection {
    pub fn mask_bit(self) -> u32 {
        match self {
            HideSection::Matching => report::HIDE_MATCHING,
            HideSection::Diffs => report::HIDE_DIFFS,
            HideSection::MissingA => report::HIDE_MISSING_IN_A,
            HideSection::MissingB => report::HIDE_MISSING_IN_B,
            HideSection::InactiveA => report::HIDE_INACTIVE_IN_A,
            HideSection::InactiveB => report::HIDE_INACTIVE_IN_B,
            HideSection::Mismatched => report::HIDE_MISMATCHED,
            HideSection::Broken => report::HIDE_BROKEN,
        }
    }
}
