use anyhow::Result;
use clap::Parser;
use gst_verify::{run_verify, ConsoleReporter, JsonReporter, Reporter, VerifyConfig};
use std::path::PathBuf;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a TOML probe configuration (defaults to the built-in list)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Append a machine-readable JSON report to this file
    #[arg(long)]
    json: Option<PathBuf>,

    /// Skip the GStreamer Editing Services check
    #[arg(long)]
    no_ges: bool,

    /// Exit with status 2 when GES init or any element probe failed
    #[arg(long)]
    strict: bool,
}

fn verify_main(args: &Args) -> Result<bool> {
    let mut config = match &args.config {
        Some(path) => VerifyConfig::from_toml_file(path)?,
        None => VerifyConfig::default(),
    };

    if args.no_ges {
        config.check_ges = false;
    }

    let report = run_verify(&config)?;

    ConsoleReporter.report(&report)?;

    if let Some(path) = &args.json {
        JsonReporter::new(path.clone()).report(&report)?;
    }

    Ok(report.all_ok())
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    let args = Args::parse();

    match verify_main(&args) {
        Ok(all_ok) => {
            if args.strict && !all_ok {
                std::process::exit(2);
            }
        }
        Err(e) => {
            eprintln!("gst-verify error: {}", e);
            std::process::exit(1);
        }
    }
}
