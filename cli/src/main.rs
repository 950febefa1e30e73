//! docsense CLI - PDF outline extraction and relevance analysis

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use docsense::{
    extract_outline, process_outlines, to_json, write_json_file, DocumentAnalyzer, JsonFormat,
};

#[derive(Parser)]
#[command(name = "docsense")]
#[command(version)]
#[command(about = "Extract PDF heading outlines and rank documents by relevance", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the heading outline of one PDF
    Outline {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Extract outlines for every PDF in a directory
    Batch {
        /// Directory of input PDFs
        #[arg(value_name = "INPUT_DIR")]
        input_dir: PathBuf,

        /// Directory for the *_outline.json files
        #[arg(value_name = "OUTPUT_DIR")]
        output_dir: PathBuf,
    },

    /// Rank document sections by relevance to a persona and job
    Analyze {
        /// Directory of input PDFs
        #[arg(value_name = "INPUT_DIR")]
        input_dir: PathBuf,

        /// Persona description, e.g. "PhD Researcher"
        #[arg(short, long)]
        persona: String,

        /// Job to be done, e.g. "Prepare a literature review"
        #[arg(short, long)]
        job: String,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Outline {
            input,
            output,
            compact,
        } => cmd_outline(&input, output.as_deref(), compact),
        Commands::Batch {
            input_dir,
            output_dir,
        } => cmd_batch(&input_dir, &output_dir),
        Commands::Analyze {
            input_dir,
            persona,
            job,
            output,
            compact,
        } => cmd_analyze(&input_dir, &persona, &job, output.as_deref(), compact),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_outline(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let outline = extract_outline(input)?;
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = to_json(&outline, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    println!(
        "{} {} headings across {} pages",
        "Found".green(),
        outline.heading_count(),
        outline.total_pages
    );
    Ok(())
}

fn cmd_batch(input_dir: &Path, output_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    process_outlines(input_dir, output_dir)?;
    println!(
        "{} outlines written to {}",
        "Done:".green().bold(),
        output_dir.display()
    );
    Ok(())
}

fn cmd_analyze(
    input_dir: &Path,
    persona: &str,
    job: &str,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let analyzer = DocumentAnalyzer::new();
    println!("{} {}", "Scoring method:".dimmed(), analyzer.method());

    let result = analyzer.analyze_documents(input_dir, persona, job)?;

    if let Some(path) = output {
        if compact {
            fs::write(path, to_json(&result, JsonFormat::Compact)?)?;
        } else {
            write_json_file(&result, path)?;
        }
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        let format = if compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        println!("{}", to_json(&result, format)?);
    }

    println!(
        "{} {} sections from {} documents (avg relevance {:.3})",
        "Found".green(),
        result.metadata.total_sections,
        result.metadata.documents.len(),
        result.metadata.avg_relevance
    );
    Ok(())
}
