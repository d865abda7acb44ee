use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use paper_pipeline::{process_document, PandocRenderer};

#[derive(Parser)]
#[command(
    name = "paper-split",
    version,
    about = "Flatten a LaTeX paper source tree and split it into per-section Markdown files"
)]
pub struct Cli {
    /// Directories containing extracted LaTeX source trees
    #[arg(value_name = "SOURCE_DIR", required = true)]
    sources: Vec<PathBuf>,

    /// Root directory for generated output
    #[arg(short, long, default_value = "./output")]
    output: PathBuf,

    /// Converter executable to invoke
    #[arg(long, default_value = "pandoc")]
    pandoc: String,
}

/// Entry point for CLI execution. Returns the desired exit code.
///
/// Every source directory is processed even when an earlier one fails; the
/// exit code only reports whether any document failed.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    let renderer = PandocRenderer::new(cli.pandoc);

    let mut failures = 0usize;
    for source in &cli.sources {
        println!("[paper-split] processing {}", source.display());
        match process_document(source, &cli.output, &renderer) {
            Ok(outcome) => {
                println!(
                    "[paper-split] \"{}\": {} top-level sections, {} figures -> {}",
                    outcome.title,
                    outcome.top_level_sections,
                    outcome.figures_copied,
                    outcome.output_dir.display()
                );
            }
            Err(err) => {
                eprintln!("[paper-split] {} failed: {err}", source.display());
                failures += 1;
            }
        }
    }

    Ok(if failures == 0 { 0 } else { 1 })
}
