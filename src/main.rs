use std::path::PathBuf;

use clap::Parser;
use shamir_recover::config::DEFAULT_INPUT_FILES;
use shamir_recover::driver::{process_files, DriverOptions};

#[derive(Parser)]
#[command(name = "shamir-recover")]
#[command(about = "Recover Shamir secrets from base-encoded share files", long_about = None)]
struct Cli {
    /// Share record files (JSON). Defaults to input1.json and input2.json.
    files: Vec<PathBuf>,

    /// Check shares beyond the threshold against the recovered polynomial
    #[arg(long)]
    verify: bool,

    /// Print one JSON object per recovered secret on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine-readable under --json.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shamir_recover=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let files: Vec<PathBuf> = if cli.files.is_empty() {
        DEFAULT_INPUT_FILES.iter().map(PathBuf::from).collect()
    } else {
        cli.files
    };
    let opts = DriverOptions {
        verify: cli.verify,
        json: cli.json,
    };

    let stdout = std::io::stdout();
    let failed = process_files(&files, opts, &mut stdout.lock());

    if failed > 0 {
        anyhow::bail!("{} of {} share files failed", failed, files.len());
    }
    Ok(())
}
