//! Command-line interface for the generator.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{DEFAULT_OUTPUT_DIR, GDPR_FILE_STEM, ONTOLOGY_FILE_STEM};
use crate::emitter::{emit_regulation, EmittedGraph};
use crate::error::{GeneratorError, Result};
use crate::loader::load_regulation;
use crate::ontology::build_ontology;
use crate::pairings::{apply_pairings, load_pairings};
use crate::serializer::{save_graph, Format};
use crate::types::Regulation;

/// GDPRtEXT generator - GDPR text as linked data using the ELI vocabulary.
#[derive(Parser)]
#[command(name = "gdprtext")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the RDF graph for the GDPR text from its JSON source.
    Generate {
        /// Path to the GDPR JSON document (e.g., gdpr.json)
        input: PathBuf,

        /// Citation pairings JSON file (list of {source, citation} pairs)
        #[arg(short, long)]
        pairings: Option<PathBuf>,

        /// Output format(s); may be repeated
        #[arg(short, long, value_enum, default_values_t = [Format::Turtle])]
        format: Vec<Format>,

        /// Output directory (default: deliverables/)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate the GDPRtEXT OWL ontology.
    Ontology {
        /// Output format(s); may be repeated
        #[arg(short, long, value_enum, default_values_t = [Format::RdfXml])]
        format: Vec<Format>,

        /// Output directory (default: deliverables/)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            pairings,
            format,
            output,
        } => generate_command(&input, pairings.as_deref(), &format, output.as_deref()),
        Commands::Ontology { format, output } => ontology_command(&format, output.as_deref()),
    }
}

/// Validate that an explicitly requested output directory exists.
fn validate_output_dir(output: Option<&Path>) -> Result<()> {
    if let Some(output_dir) = output {
        if !output_dir.exists() {
            return Err(GeneratorError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Output directory does not exist: {}", output_dir.display()),
            )));
        }
        if !output_dir.is_dir() {
            return Err(GeneratorError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Output path is not a directory: {}", output_dir.display()),
            )));
        }
    }
    Ok(())
}

/// Create the progress spinner used by both commands.
fn create_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Execute the generate command.
fn generate_command(
    input: &Path,
    pairings: Option<&Path>,
    formats: &[Format],
    output: Option<&Path>,
) -> Result<()> {
    validate_output_dir(output)?;
    let output_dir = output.unwrap_or(Path::new(DEFAULT_OUTPUT_DIR));

    println!(
        "{} {}",
        style("Generating RDF for").bold(),
        style(input.display()).cyan()
    );
    println!();

    let pb = create_spinner();
    pb.set_message("Loading document...");

    let regulation = match load_regulation(input) {
        Ok(regulation) => regulation,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Emitting statements...");

    let emitted = match emit_and_pair(&regulation, pairings) {
        Ok(emitted) => emitted,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Serializing...");

    let mut saved = Vec::with_capacity(formats.len());
    for format in formats {
        match save_graph(emitted.graph(), *format, output_dir, GDPR_FILE_STEM) {
            Ok(path) => saved.push(path),
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        }
    }

    pb.finish_and_clear();

    println!("  Title: {}", style(&regulation.title).green());
    println!("  Chapters: {}", regulation.chapters.len());
    println!("  Recitals: {}", regulation.recitals.len());
    println!("  Citations: {}", regulation.citations.len());
    println!("  Statements: {}", style(emitted.len()).bold());
    println!();
    for path in saved {
        println!("{} {}", style("Saved to:").green().bold(), path.display());
    }

    Ok(())
}

/// Emit the regulation graph and apply the citation table if supplied.
fn emit_and_pair(regulation: &Regulation, pairings: Option<&Path>) -> Result<EmittedGraph> {
    let mut emitted = emit_regulation(regulation)?;
    if let Some(pairings_path) = pairings {
        let table = load_pairings(pairings_path)?;
        apply_pairings(&mut emitted, &table)?;
    }
    Ok(emitted)
}

/// Execute the ontology command.
fn ontology_command(formats: &[Format], output: Option<&Path>) -> Result<()> {
    validate_output_dir(output)?;
    let output_dir = output.unwrap_or(Path::new(DEFAULT_OUTPUT_DIR));

    println!("{}", style("Generating GDPRtEXT ontology").bold());
    println!();

    let graph = build_ontology();

    let mut saved = Vec::with_capacity(formats.len());
    for format in formats {
        saved.push(save_graph(&graph, *format, output_dir, ONTOLOGY_FILE_STEM)?);
    }

    println!("  Statements: {}", style(graph.len()).bold());
    println!();
    for path in saved {
        println!("{} {}", style("Saved to:").green().bold(), path.display());
    }

    Ok(())
}
