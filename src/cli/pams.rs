use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::catalog::store::PamCatalog;
use crate::cli::OutputFormat;

#[derive(Args)]
pub struct PamsArgs {
    #[command(subcommand)]
    pub command: PamsCommands,
}

#[derive(Subcommand)]
pub enum PamsCommands {
    /// List all PAM templates in the catalog
    List {
        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Filter by nuclease (e.g. "SpCas9")
        #[arg(long)]
        nuclease: Option<String>,
    },

    /// Show details of a specific template
    Show {
        /// Template ID
        #[arg(required = true)]
        id: String,

        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Export the catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Path to custom catalog file to export (defaults to embedded)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

pub fn run(args: PamsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        PamsCommands::List { catalog, nuclease } => {
            run_list(catalog, nuclease.as_deref(), format, verbose)
        }
        PamsCommands::Show { id, catalog } => run_show(&id, catalog, format),
        PamsCommands::Export { output, catalog } => run_export(output, catalog),
    }
}

fn load_catalog(path: Option<PathBuf>) -> anyhow::Result<PamCatalog> {
    let catalog = if let Some(path) = path {
        PamCatalog::load_from_file(&path)?
    } else {
        PamCatalog::load_embedded()?
    };
    Ok(catalog)
}

fn run_list(
    catalog_path: Option<PathBuf>,
    nuclease_filter: Option<&str>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)?;

    if verbose {
        eprintln!("Loaded catalog with {} templates", catalog.len());
    }

    let filtered: Vec<_> = catalog
        .templates
        .iter()
        .filter(|t| {
            if let Some(nuclease) = nuclease_filter {
                if !t.nuclease.to_lowercase().contains(&nuclease.to_lowercase()) {
                    return false;
                }
            }
            true
        })
        .collect();

    match format {
        OutputFormat::Text => {
            // Calculate column widths dynamically
            let id_width = filtered.iter().map(|t| t.id.len()).max().unwrap_or(2).max(2);
            let pattern_width = filtered
                .iter()
                .map(|t| t.pattern.len())
                .max()
                .unwrap_or(7)
                .max(7);
            let nuclease_width = filtered
                .iter()
                .map(|t| t.nuclease.len())
                .max()
                .unwrap_or(8)
                .max(8);

            let total_width = id_width + pattern_width + nuclease_width + 40 + 3;

            println!("PAM Template Catalog ({} templates)\n", filtered.len());
            println!(
                "{:<id_w$} {:<pat_w$} {:<nuc_w$} {:<40}",
                "ID",
                "Pattern",
                "Nuclease",
                "Organism",
                id_w = id_width,
                pat_w = pattern_width,
                nuc_w = nuclease_width
            );
            println!("{}", "-".repeat(total_width));

            for t in &filtered {
                println!(
                    "{:<id_w$} {:<pat_w$} {:<nuc_w$} {:<40}",
                    t.id,
                    t.pattern.as_str(),
                    t.nuclease,
                    t.organism,
                    id_w = id_width,
                    pat_w = pattern_width,
                    nuc_w = nuclease_width
                );
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = filtered
                .iter()
                .map(|t| {
                    serde_json::json!({
                        "id": t.id,
                        "display_name": t.display_name,
                        "nuclease": t.nuclease,
                        "organism": t.organism,
                        "pattern": t.pattern.as_str(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("id\tdisplay_name\tnuclease\torganism\tpattern");
            for t in &filtered {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    t.id,
                    t.display_name,
                    t.nuclease,
                    t.organism,
                    t.pattern.as_str()
                );
            }
        }
    }

    Ok(())
}

fn run_show(id: &str, catalog_path: Option<PathBuf>, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)?;

    let template = catalog
        .get(id)
        .ok_or_else(|| anyhow::anyhow!("PAM template '{}' not found", id))?;

    match format {
        OutputFormat::Text => {
            println!("Template: {}\n", template.display_name);
            println!("ID:       {}", template.id);
            println!("Pattern:  {}", template.pattern);
            println!("Nuclease: {}", template.nuclease);
            println!("Organism: {}", template.organism);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&template)?);
        }
        OutputFormat::Tsv => {
            println!("id\tdisplay_name\tnuclease\torganism\tpattern");
            println!(
                "{}\t{}\t{}\t{}\t{}",
                template.id,
                template.display_name,
                template.nuclease,
                template.organism,
                template.pattern.as_str()
            );
        }
    }

    Ok(())
}

fn run_export(output: PathBuf, catalog_path: Option<PathBuf>) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)?;

    let json = catalog.to_json()?;
    std::fs::write(&output, json)?;

    println!(
        "Exported {} templates to {}",
        catalog.len(),
        output.display()
    );

    Ok(())
}
