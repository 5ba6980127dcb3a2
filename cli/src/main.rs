//! pagestitch CLI - page-layout reconstruction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use pagestitch::{
    render, CleanupOptions, DocumentExtractor, Error, ExtractOptions, JsonFormat, LayoutDocument,
    PageGeometry, PageSelection, PageSource, Pagestitch,
};

#[derive(Parser)]
#[command(name = "pagestitch")]
#[command(version)]
#[command(about = "Reconstruct ordered text and table blocks from page layouts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstruct a page range into text and table blocks
    Extract {
        /// Input layout file (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// First page (zero-based)
        #[arg(long, default_value = "0")]
        start: usize,

        /// End page (exclusive)
        #[arg(long, conflicts_with = "until_annex")]
        end: Option<usize>,

        /// Stop before the first annex page
        #[arg(long)]
        until_annex: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Extraction options file (JSON)
        #[arg(long, value_name = "FILE", env = "PAGESTITCH_CONFIG")]
        config: Option<PathBuf>,

        /// Process pages one at a time
        #[arg(long)]
        sequential: bool,

        /// Apply Unicode NFKC normalization
        #[arg(long)]
        normalize: bool,

        /// Reorder right-to-left text into display order
        #[arg(long)]
        visual_order: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Find the first annex page
    Annex {
        /// Input layout file (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// First page to scan (zero-based)
        #[arg(long, default_value = "0")]
        start: usize,

        /// Marker text
        #[arg(long)]
        marker: Option<String>,
    },

    /// Show per-page layout information
    Info {
        /// Input layout file (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Extraction options file (JSON)
        #[arg(long, value_name = "FILE", env = "PAGESTITCH_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// JSON array of tagged elements
    Json,
    /// Plain text
    Text,
    /// Markdown with pipe tables
    Markdown,
}

struct ExtractArgs {
    pages: PageSelection,
    format: OutputFormat,
    json_format: JsonFormat,
    config: Option<PathBuf>,
    sequential: bool,
    cleanup: CleanupOptions,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input,
            start,
            end,
            until_annex,
            format,
            compact,
            config,
            sequential,
            normalize,
            visual_order,
            output,
        } => {
            let args = ExtractArgs {
                pages: page_selection(start, end, until_annex),
                format,
                json_format: if compact {
                    JsonFormat::Compact
                } else {
                    JsonFormat::Pretty
                },
                config,
                sequential,
                cleanup: CleanupOptions::new()
                    .with_normalize_unicode(normalize)
                    .with_visual_order(visual_order),
            };
            cmd_extract(&input, &args, output.as_deref())
        }
        Commands::Annex {
            input,
            start,
            marker,
        } => cmd_annex(&input, start, marker),
        Commands::Info { input, config } => cmd_info(&input, config.as_deref()),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn page_selection(start: usize, end: Option<usize>, until_annex: bool) -> PageSelection {
    match (end, until_annex) {
        (_, true) => PageSelection::UntilAnnex(start),
        (Some(end), false) => PageSelection::Range(start..end),
        (None, false) => PageSelection::From(start),
    }
}

fn load_options(config: Option<&Path>) -> pagestitch::Result<ExtractOptions> {
    let Some(path) = config else {
        return Ok(ExtractOptions::default());
    };

    log::debug!("Loading options from {}", path.display());
    let content = fs::read_to_string(path)?;
    let options: ExtractOptions = serde_json::from_str(&content)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    options.validate()?;
    Ok(options)
}

fn run_extract(input: &Path, args: &ExtractArgs) -> pagestitch::Result<String> {
    let mut options = load_options(args.config.as_deref())?;
    if args.sequential {
        options = options.sequential();
    }

    let result = Pagestitch::new()
        .with_options(options)
        .with_pages(args.pages.clone())
        .with_cleanup(args.cleanup)
        .with_json_format(args.json_format)
        .extract_file(input)?;

    log::info!(
        "Reconstructed {} pages into {} elements",
        result.stats().page_count,
        result.document().len()
    );

    match args.format {
        OutputFormat::Json => result.to_json(),
        OutputFormat::Text => result.to_text(),
        OutputFormat::Markdown => result.to_markdown(),
    }
}

fn cmd_extract(
    input: &Path,
    args: &ExtractArgs,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    match run_extract(input, args) {
        Ok(content) => write_output(output, &content),
        Err(e) if args.format == OutputFormat::Json => {
            let envelope = render::error_envelope(&e, args.json_format)?;
            write_output(output, &envelope)?;
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        eprintln!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_annex(
    input: &Path,
    start: usize,
    marker: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = LayoutDocument::from_path(input)?;

    let mut options = ExtractOptions::default();
    if let Some(marker) = marker {
        options = options.with_annex_marker(marker);
    }
    options.validate()?;

    let extractor = DocumentExtractor::with_options(&source, options);
    match extractor.locate_annex(start) {
        Some(index) => println!("{}", index),
        None => println!("{}", "not found".yellow()),
    }

    Ok(())
}

fn cmd_info(input: &Path, config: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let source = LayoutDocument::from_path(input)?;
    let extractor = DocumentExtractor::with_options(&source, load_options(config)?);

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), source.page_count());

    match extractor.locate_annex(0) {
        Some(index) => println!("{}: page {}", "Annex".bold(), index),
        None => println!("{}: none", "Annex".bold()),
    }

    println!();
    println!("{}", "Page Layout".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for index in 0..source.page_count() {
        let layout = match extractor.page_layout(index) {
            Ok(layout) => layout,
            Err(e) => {
                println!("{} {}: {}", "Page".bold(), index, e.to_string().red());
                continue;
            }
        };
        let page = source.page(index)?;

        println!(
            "{} {}: {:?} {}x{}, {} tables, {} bands",
            "Page".bold(),
            index,
            page.orientation(),
            page.width(),
            page.height(),
            layout.tables.len(),
            layout.bands.len()
        );
        for table in &layout.tables {
            println!(
                "  {} table [{:.1}, {:.1}, {:.1}, {:.1}]",
                "├─".dimmed(),
                table.x1,
                table.y1,
                table.x2,
                table.y2
            );
        }
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pagestitch".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Page-layout reconstruction tool");
    println!();
    println!("License: MIT");
}
