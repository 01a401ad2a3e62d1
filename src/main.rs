// main.rs - CLI entry point

use anyhow::Context;
use std::io::{BufWriter, Write};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};
use userhist::prelude::*;

fn main() {
    let args: Args = argh::from_env();
    init_logging(args.verbose);

    if let Err(e) = run_main(args) {
        eprintln!("ERROR: {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; stdout carries the merged CSV
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_main(args: Args) -> anyhow::Result<()> {
    // Handle generate config first
    if args.generate_config {
        let mut stdout = std::io::stdout().lock();
        write!(stdout, "{}", Config::generate_sample()).context("Write error")?;
        stdout.flush().context("Flush error")?;
        return Ok(());
    }

    let settings = args.settings()?;
    debug!("{}", userhist::get_info());

    let inputs = match select_inputs(&args.files[..], &settings.suffix, &settings.columns) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let aggregate = merge_files(&inputs, &settings.columns);

    let stdout = std::io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let written = write_users(&mut writer, &settings.columns, aggregate.records(), settings.sort)?;

    info!("Wrote {} of {} users", written, aggregate.len());
    Ok(())
}
