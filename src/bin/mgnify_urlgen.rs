use std::fs::File;
use std::io::{BufWriter, Write};
use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

use mgnify_urlgen::app::{App, Mode};
use mgnify_urlgen::config::Filters;
use mgnify_urlgen::error::UrlGenError;
use mgnify_urlgen::mgnify::{DEFAULT_BASE_URL, MgnifyHttpClient};

#[derive(Parser)]
#[command(name = "mgnify-urlgen")]
#[command(about = "Generate page or analysis URL lists from the MGnify API")]
#[command(version, author)]
struct Cli {
    #[arg(long, default_value = "page_urls.txt")]
    output: Utf8PathBuf,

    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        if let Some(err) = report.downcast_ref::<UrlGenError>() {
            return ExitCode::from(map_exit_code(err));
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn map_exit_code(error: &UrlGenError) -> u8 {
    match error {
        UrlGenError::Http(_) | UrlGenError::Status { .. } => 3,
        UrlGenError::Filesystem(_) => 1,
    }
}

fn run() -> miette::Result<()> {
    // Study-mode progress and skip diagnostics are emitted at debug/warn,
    // so the stream stays visible without RUST_LOG set.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let filters = Filters::from_env();
    let client = MgnifyHttpClient::with_base_url(cli.base_url).into_diagnostic()?;
    let app = App::new(client, filters);

    let file = File::create(cli.output.as_std_path())
        .map_err(|err| UrlGenError::Filesystem(format!("create {}: {err}", cli.output)))
        .into_diagnostic()?;
    let mut out = BufWriter::new(file);
    let result = app.generate(&mut out).into_diagnostic()?;
    out.flush()
        .map_err(|err| UrlGenError::Filesystem(err.to_string()))
        .into_diagnostic()?;

    match result.mode {
        Mode::GlobalPages => println!("Generated URLs for {} pages.", result.pages),
        Mode::StudyExpansion => println!(
            "Generated {} analysis URLs from {} pages.",
            result.urls, result.pages
        ),
    }
    Ok(())
}
