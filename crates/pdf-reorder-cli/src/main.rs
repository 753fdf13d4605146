mod args;

use anyhow::{Result, anyhow};
use clap::Parser;
use pdf_reorder::{BackOrder, PaddingMode, ReorderOptions};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "pdfreorder",
    about = "Reorder PDF pages for manual duplex printing",
    version
)]
struct Cli {
    /// Input PDF
    #[arg(long = "in", value_name = "PATH")]
    input: Option<PathBuf>,

    /// Output PDF [default: reordered.pdf]
    #[arg(long = "out", value_name = "PATH")]
    output: Option<PathBuf>,

    /// Working directory (default: temporary directory removed on exit)
    #[arg(long, value_name = "PATH")]
    work: Option<PathBuf>,

    /// Keep the working directory
    #[arg(long)]
    keep: bool,

    /// Pair backs in descending order (N, N-1, ...) instead of ascending (S+1, S+2, ...)
    #[arg(long)]
    backdesc: bool,

    /// Rotate all back-side pages by 180 degrees in the output PDF
    #[arg(long)]
    rotateback: bool,

    /// Pad odd page counts with a blank page instead of duplicating the last page
    #[arg(long)]
    blankpad: bool,

    /// Print the sheet mapping only, don't write any PDF
    #[arg(long)]
    plan: bool,

    /// Load options from a JSON file; flags given on the command line win
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    fn apply(&self, mut options: ReorderOptions) -> ReorderOptions {
        if let Some(input) = &self.input {
            options.input = Some(input.clone());
        }
        if let Some(output) = &self.output {
            options.output = output.clone();
        }
        if let Some(work) = &self.work {
            options.work_dir = Some(work.clone());
        }
        if self.keep {
            options.keep_work_dir = true;
        }
        if self.backdesc {
            options.back_order = BackOrder::Descending;
        }
        if self.rotateback {
            options.rotate_backs = true;
        }
        if self.blankpad {
            options.padding = PaddingMode::Blank;
        }
        options
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse_from(args::normalize_args(std::env::args_os()));

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let base = match &cli.config {
        Some(path) => ReorderOptions::load(path)
            .await
            .map_err(|e| anyhow!("Failed to load config {}: {}", path.display(), e))?,
        None => ReorderOptions::default(),
    };
    let options = cli.apply(base);
    log::debug!("Options: {:?}", options);

    if cli.plan {
        let plan = pdf_reorder::plan(&options).await?;
        println!("Reorder plan:");
        println!("  Source pages: {}", plan.source_pages);
        println!("  Output pages: {}", plan.output_pages);
        println!("  Padding page: {}", if plan.needs_padding { "yes" } else { "no" });
        for sheet in &plan.sheets {
            println!("{}", sheet);
        }
        if !plan.rotated_positions.is_empty() {
            let positions: Vec<String> = plan
                .rotated_positions
                .iter()
                .map(|p| p.to_string())
                .collect();
            println!("Rotate pages: {}", positions.join(", "));
        }
        return Ok(());
    }

    let report = pdf_reorder::reorder(&options).await?;
    for sheet in &report.sheets {
        println!("{}", sheet);
    }
    println!("Done: {}", report.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from(args::normalize_args([
            "pdfreorder",
            "-in",
            "book.pdf",
            "-backdesc",
            "-rotateback",
        ]));
        let base = ReorderOptions {
            output: PathBuf::from("from-config.pdf"),
            keep_work_dir: true,
            ..Default::default()
        };

        let options = cli.apply(base);
        assert_eq!(options.input, Some(PathBuf::from("book.pdf")));
        assert_eq!(options.output, PathBuf::from("from-config.pdf"));
        assert!(options.keep_work_dir);
        assert_eq!(options.back_order, BackOrder::Descending);
        assert!(options.rotate_backs);
        assert_eq!(options.padding, PaddingMode::DuplicateLast);
    }

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::parse_from(["pdfreorder"]);
        let options = cli.apply(ReorderOptions::default());
        assert_eq!(options, ReorderOptions::default());
        assert!(!cli.plan);
    }
}
