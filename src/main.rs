use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use backtest_md::logging::init_logging;
use backtest_md::report::ReportFormatter;

#[derive(Parser)]
#[command(name = "backtest-md")]
#[command(about = "Reformat plain-text backtesting reports into Markdown, in place")]
struct Cli {
    /// Report files to reformat (.txt only, anything else is skipped)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Log the per-file change summary
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let formatter = ReportFormatter::new();

    for path in &cli.files {
        if path.exists() && path.extension().and_then(|e| e.to_str()) == Some("txt") {
            formatter.format_file(path)?;
            println!("Formatted: {}", path.display());
        } else {
            println!("Skipped: {}", path.display());
        }
    }

    Ok(())
}
