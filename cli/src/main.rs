//! doclint CLI - reading-order element extraction tool

mod ollama;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use doclint::{
    context_lines, order::order_page, render, AnalysisConfig, DocumentInfo, DocumentParser,
    JsonFormat, LayoutFile, PageSelection, ParseOptions, Primitive, PrimitiveSource,
    DEFAULT_TOLERANCE,
};

use crate::ollama::OllamaDescriber;

#[derive(Parser)]
#[command(name = "doclint")]
#[command(version)]
#[command(about = "Extract document elements in reading order", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the reading order of every page (no image description)
    Order {
        /// Input layout file
        #[arg(value_name = "LAYOUT")]
        input: PathBuf,

        /// Tolerance for near-touching boxes
        #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
        tolerance: f64,
    },

    /// Extract elements, describing images with an Ollama vision model
    Parse {
        /// Input layout file
        #[arg(value_name = "LAYOUT")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Analysis configuration file (JSON)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Tolerance for near-touching boxes
        #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
        tolerance: f64,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,

        /// Order pages one at a time
        #[arg(long)]
        sequential: bool,

        /// Ollama server address
        #[arg(long, env = "DOCLINT_OLLAMA_URL", default_value = ollama::DEFAULT_URL)]
        ollama_url: String,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print the model context sentences of an extracted document
    Context {
        /// Extracted document (JSON written by `parse`)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Order { input, tolerance } => cmd_order(&input, tolerance),
        Commands::Parse {
            input,
            output,
            config,
            tolerance,
            pages,
            sequential,
            ollama_url,
            compact,
        } => cmd_parse(
            &input,
            output.as_deref(),
            config.as_deref(),
            tolerance,
            pages.as_deref(),
            sequential,
            &ollama_url,
            compact,
        ),
        Commands::Context { input } => cmd_context(&input),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_order(input: &Path, tolerance: f64) -> Result<(), Box<dyn std::error::Error>> {
    ParseOptions::new().with_tolerance(tolerance).validate()?;
    let source = LayoutFile::open(input)?;

    for page in source.pages(&PageSelection::All)? {
        let number = page.number;
        println!("{}", format!("Page {}", number).cyan().bold());
        for (position, primitive) in order_page(page, tolerance).iter().enumerate() {
            println!("  {:>3}. {}", position + 1, summarize(primitive));
        }
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_parse(
    input: &Path,
    output: Option<&Path>,
    config: Option<&Path>,
    tolerance: f64,
    pages: Option<&str>,
    sequential: bool,
    ollama_url: &str,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config {
        Some(path) => AnalysisConfig::load(path)?,
        None => AnalysisConfig::default(),
    };

    let mut options = ParseOptions::new()
        .with_tolerance(tolerance)
        .with_parallel(!sequential);
    if let Some(pages) = pages {
        options = options.with_pages(PageSelection::parse(pages)?);
    }

    let describer = OllamaDescriber::new(ollama_url)?;
    let source = LayoutFile::open(input)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(120));
    pb.set_message(format!("Parsing {}...", input.display()));

    let parsed = DocumentParser::new(&describer)
        .with_config(config)
        .with_options(options)
        .parse(&source);
    pb.finish_and_clear();
    let doc = parsed?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    match output {
        Some(path) => {
            let file = fs::File::create(path)?;
            render::write_json(&doc, format, io::BufWriter::new(file))?;
            eprintln!(
                "{} {} elements -> {}",
                "Wrote".green().bold(),
                doc.elements.len(),
                path.display()
            );
        }
        None => render::write_json(&doc, format, io::stdout().lock())?,
    }

    Ok(())
}

fn cmd_context(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = DocumentInfo::load(input)?;
    for line in context_lines(&doc) {
        println!("{}", line);
    }
    Ok(())
}

fn summarize(primitive: &Primitive) -> String {
    match primitive {
        Primitive::Text(text) => {
            let first_line = text.text.lines().next().unwrap_or_default();
            let preview: String = first_line.chars().take(60).collect();
            format!("{} {}", "text ".dimmed(), preview)
        }
        Primitive::Image(image) => format!(
            "{} {} ({} bytes)",
            "image".yellow(),
            image.mime_type,
            image.data.len()
        ),
    }
}
