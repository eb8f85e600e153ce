//! Command-line interface for guide-scan.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **search**: Find off-target sites for a guide across one or more sequences
//! - **pams**: List, show, or export the PAM motif template catalog
//! - **generate**: Write a random test sequence
//!
//! ## Usage
//!
//! ```text
//! # Search a genome FASTA with the SpCas9 NGG motif, up to 3 mismatches
//! guide-scan search genome.fa --guide ATGCATGCATGCATGCATGC --template spcas9_ngg
//!
//! # Spell the motif out instead of naming a template
//! guide-scan search chr21.fa --guide AUGCAUGCAUGCAUGCAUGC --pam NRG --max-mismatches 2
//!
//! # Legacy headered text files, one chromosome each
//! guide-scan search human_chromosome_21.txt --label 21 --guide ... --template spcas9_ngg
//!
//! # JSON output for scripting
//! guide-scan search genome.fa --guide ... --template spcas9_ngg --format json
//!
//! # See the motif catalog
//! guide-scan pams list
//! ```

use clap::{Parser, Subcommand};

pub mod generate;
pub mod pams;
pub mod search;

#[derive(Parser)]
#[command(name = "guide-scan")]
#[command(version)]
#[command(about = "Predict CRISPR off-target sites in chromosome-scale sequences")]
#[command(
    long_about = "guide-scan predicts the sites a CRISPR/Cas nuclease could edit besides its intended target.\n\nGiven a guide sequence, a PAM motif, and one or more chromosome-scale sequences, it anchors candidate sites on exact seed matches, validates the adjacent PAM, verifies the rest of the guide under a mismatch budget, and reports every surviving site grouped by mismatch count."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search sequences for off-target sites
    Search(search::SearchArgs),

    /// Inspect the PAM motif template catalog
    Pams(pams::PamsArgs),

    /// Generate a random nucleotide sequence
    Generate(generate::GenerateArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
