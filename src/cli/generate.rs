use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Line width for FASTA output
const FASTA_LINE_WIDTH: usize = 60;

#[derive(Args)]
pub struct GenerateArgs {
    /// Number of nucleotides to generate
    #[arg(short, long, required = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub length: u64,

    /// Output file (FASTA); stdout if omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// RNG seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Record name for the generated sequence
    #[arg(long, default_value = "random")]
    pub name: String,
}

/// Execute generate subcommand
///
/// # Errors
///
/// Returns an error if the output file cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: GenerateArgs, verbose: bool) -> anyhow::Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    const BASES: [u8; 4] = [b'A', b'T', b'G', b'C'];
    let sequence: String = (0..args.length)
        .map(|_| BASES[rng.gen_range(0..BASES.len())] as char)
        .collect();

    let mut fasta = format!(">{}\n", args.name);
    let mut start = 0;
    while start < sequence.len() {
        let end = (start + FASTA_LINE_WIDTH).min(sequence.len());
        fasta.push_str(&sequence[start..end]);
        fasta.push('\n');
        start = end;
    }

    match &args.output {
        Some(path) => {
            std::fs::write(path, fasta)?;
            if verbose {
                eprintln!("Wrote {} random bases to {}", args.length, path.display());
            }
        }
        None => {
            std::io::stdout().write_all(fasta.as_bytes())?;
        }
    }

    Ok(())
}
