pub mod args;
pub mod report;

use anyhow::{Context, Result};
use clap::Parser as _;
use flashcard_core::{supported_formats, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::args::Cli;
use crate::report::{build_reports, render_text};

pub fn run() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if cli.list_formats {
        for name in supported_formats() {
            println!("{}", name);
        }
        return Ok(());
    }

    let delimiter = cli.delimiter()?;
    let files = args::collect_files(&cli.paths)?;
    if files.is_empty() {
        tracing::warn!("no study files found");
    }

    let mut parser = Parser::with_settings(cli.settings());
    let batch = build_reports(&mut parser, &files, delimiter.as_ref(), cli.validate);

    if cli.json {
        let json =
            serde_json::to_string_pretty(&batch.reports).context("failed to encode report")?;
        println!("{}", json);
    } else {
        for report in &batch.reports {
            print!("{}", render_text(report));
        }
    }

    for (path, err) in &batch.failures {
        eprintln!("error: failed to process {}: {:#}", path.display(), err);
    }
    if !batch.failures.is_empty() {
        anyhow::bail!(
            "{} of {} file(s) could not be processed",
            batch.failures.len(),
            files.len()
        );
    }

    Ok(())
}
