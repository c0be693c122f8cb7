//! gtmkit CLI - go-to-market kit PDF builder

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use gtmkit::{Assembler, BookletOptions, DocumentPlan, JsonFormat};

#[derive(Parser)]
#[command(name = "gtmkit")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Compile the go-to-market documents into a PDF booklet", long_about = None)]
struct Cli {
    /// Repository root containing docs/go-to-market
    #[arg(long, value_name = "DIR", default_value = ".", env = "GTMKIT_ROOT")]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the PDF booklet (default)
    Build,

    /// Print the numbered table of contents
    Toc,

    /// Dump the render sequence as JSON
    Json {
        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Build) | None => cmd_build(&cli.root),
        Some(Commands::Toc) => cmd_toc(&cli.root),
        Some(Commands::Json { output, compact }) => cmd_json(&cli.root, output.as_deref(), compact),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_build(root: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let report = gtmkit::build_gtm_kit(root)?;
    log::debug!("{} pages, {} bytes", report.page_count, report.bytes_written);

    println!("{} {}", "Wrote".green(), report.output.display());
    Ok(())
}

fn cmd_toc(root: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let plan = DocumentPlan::gtm_kit(root);
    let titles = gtmkit::titles(&plan)?;

    println!("{}", "Table of Contents".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for (idx, title) in titles.iter().enumerate() {
        println!("{:>2}. {}", idx + 1, title);
    }

    Ok(())
}

fn cmd_json(
    root: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let assembler = Assembler::new(DocumentPlan::gtm_kit(root), BookletOptions::default());
    let flowables = assembler.assemble()?;
    let json = gtmkit::render::to_json(&flowables, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "gtmkit".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Go-to-market kit PDF builder");
    println!();
    println!("License: MIT");
}
