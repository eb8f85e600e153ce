use std::path::{Path, PathBuf};

use clap::Args;

use crate::catalog::store::PamCatalog;
use crate::cli::OutputFormat;
use crate::core::{ChromosomeId, Guide, SequenceBuffer};
use crate::matching::engine::{SearchConfig, SearchEngine};
use crate::matching::pam::PamPattern;
use crate::matching::results::HitStore;
use crate::parsing;
use crate::utils::validation::{check_sequence_limit, validate_label};

#[derive(Args)]
pub struct SearchArgs {
    /// Input sequence file(s): FASTA (.fa/.fasta/.fna, optionally gzipped)
    /// or headered plain text, one chromosome per file
    #[arg(required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Guide sequence, 5' to 3', 15-25 nucleotides, RNA or DNA
    #[arg(short, long, required = true)]
    pub guide: String,

    /// PAM motif as a wildcard pattern (e.g. NGG, NNGRRT)
    #[arg(long, required_unless_present = "template", conflicts_with = "template")]
    pub pam: Option<String>,

    /// PAM motif named by catalog template ID (see `guide-scan pams list`)
    #[arg(long)]
    pub template: Option<String>,

    /// Maximum mismatches allowed outside the seed (0-9)
    #[arg(short = 'm', long, default_value = "3", value_parser = clap::value_parser!(u32).range(0..=9))]
    pub max_mismatches: u32,

    /// Chromosome label for a single plain-text input
    /// (FASTA records carry their own labels; defaults to the file stem)
    #[arg(long)]
    pub label: Option<String>,

    /// Path to custom PAM catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Execute search subcommand
///
/// # Errors
///
/// Returns an error if the guide or PAM is invalid, an input cannot be
/// loaded, or output serialization fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SearchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let guide = Guide::parse(&args.guide)?;
    let pam = resolve_pam(&args)?;

    if verbose {
        eprintln!(
            "Guide {} ({} nt), seed {}, PAM {}, up to {} mismatches",
            guide,
            guide.len(),
            guide.seed(),
            pam,
            args.max_mismatches
        );
    }

    let buffers = load_inputs(&args)?;

    if verbose {
        let total_bases: usize = buffers.iter().map(SequenceBuffer::len).sum();
        eprintln!("Loaded {} sequence(s), {} bases total", buffers.len(), total_bases);
    }

    let config = SearchConfig {
        max_mismatches: args.max_mismatches,
    };
    let engine = SearchEngine::new(&guide, &pam, config);
    let results = engine.search_genome(&buffers);

    if results.is_empty() {
        eprintln!("No off-target sites found.");
        return Ok(());
    }

    match format {
        OutputFormat::Text => print_text_results(&results),
        OutputFormat::Json => print_json_results(&results)?,
        OutputFormat::Tsv => print_tsv_results(&results),
    }

    Ok(())
}

fn resolve_pam(args: &SearchArgs) -> anyhow::Result<PamPattern> {
    if let Some(pattern) = &args.pam {
        return Ok(PamPattern::new(pattern)?);
    }

    // clap guarantees template is present when --pam is absent
    let id = args
        .template
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("either --pam or --template is required"))?;

    let catalog = if let Some(path) = &args.catalog {
        PamCatalog::load_from_file(path)?
    } else {
        PamCatalog::load_embedded()?
    };

    let template = catalog
        .get(id)
        .ok_or_else(|| anyhow::anyhow!("PAM template '{}' not found in catalog", id))?;

    Ok(template.pattern.clone())
}

fn load_inputs(args: &SearchArgs) -> anyhow::Result<Vec<SequenceBuffer>> {
    let text_input_count = args
        .inputs
        .iter()
        .filter(|p| !parsing::fasta::is_fasta_file(p))
        .count();
    if args.label.is_some() && text_input_count > 1 {
        anyhow::bail!("--label applies to a single plain-text input; got {text_input_count}");
    }

    let mut buffers: Vec<SequenceBuffer> = Vec::new();
    for path in &args.inputs {
        if let Some(msg) = check_sequence_limit(buffers.len()) {
            anyhow::bail!(msg);
        }
        if !path.exists() {
            anyhow::bail!("Input file not found: {}", path.display());
        }

        if parsing::fasta::is_fasta_file(path) {
            buffers.extend(parsing::fasta::load_fasta_file(path)?);
        } else {
            let label = text_label(path, args.label.as_deref())?;
            buffers.push(parsing::text::load_text_file(path, label)?);
        }
    }

    Ok(buffers)
}

fn text_label(path: &Path, explicit: Option<&str>) -> anyhow::Result<ChromosomeId> {
    let label = match explicit {
        Some(label) => label.to_string(),
        None => path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };
    let label = validate_label(&label)?;
    Ok(ChromosomeId::new(label))
}

fn print_text_results(results: &HitStore) {
    for (mismatches, hits) in results.groups() {
        println!("{} mismatches ({})", mismatches, hits.len());
        println!("{}", "-".repeat(56));
        for hit in hits {
            println!(
                "Chromosome {} Position {}: {}",
                hit.chromosome, hit.position, hit.sequence
            );
        }
        println!();
    }
}

fn print_json_results(results: &HitStore) -> anyhow::Result<()> {
    let output: Vec<serde_json::Value> = results
        .groups()
        .map(|(mismatches, hits)| {
            serde_json::json!({
                "mismatches": mismatches,
                "total_hits": hits.len(),
                "hits": hits,
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(results: &HitStore) {
    println!("mismatches\tchromosome\tposition\tsequence");
    for (mismatches, hits) in results.groups() {
        for hit in hits {
            println!(
                "{}\t{}\t{}\t{}",
                mismatches, hit.chromosome, hit.position, hit.sequence
            );
        }
    }
}
