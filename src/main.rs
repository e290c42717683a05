//! yt-comments - YouTube comment viewer
//!
//! Fetches the top-level comments of a single video together with its basic
//! engagement statistics, and optionally exports them as CSV, JSON or an Excel workbook.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use yt_comments::app;
use yt_comments::display;
use yt_comments::export::{self, ExportFormat};
use yt_comments::extractor::TextFormat;
use yt_comments::utils::{self, AppError, AppSettings};

#[derive(Parser)]
#[command(name = "yt-comments", version, about = "View and export YouTube comments")]
struct Args {
    /// YouTube video URL (watch, youtu.be or shorts link)
    url: String,

    /// Maximum comments to fetch
    #[arg(short = 'n', long)]
    max_comments: Option<usize>,

    /// YouTube Data API key
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Export comments in this format (settings default when only --output is given)
    #[arg(long, value_enum)]
    export: Option<ExportFormat>,

    /// Export file path (defaults to ~/Downloads/youtube_comments.<ext>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Give up after this many seconds
    #[arg(long, default_value_t = 120)]
    timeout: u64,

    /// Request comment text as HTML instead of plain text
    #[arg(long)]
    html: bool,

    /// Only print the video summary
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = tokio::runtime::Runtime::new()
        .map_err(anyhow::Error::from)
        .and_then(|rt| rt.block_on(run(args)));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("Application error: {:#}", e);
            eprintln!("{}", user_message(&e));
            ExitCode::FAILURE
        }
    }
}

/// The single line shown on stderr for a failed run
fn user_message(e: &anyhow::Error) -> String {
    match e.downcast_ref::<AppError>() {
        Some(AppError::InvalidUrl(_)) => {
            "Invalid YouTube URL. Please check the URL and try again.".to_string()
        }
        _ => format!("Error: {}", e),
    }
}

async fn run(args: Args) -> Result<()> {
    // Reject bad URLs before any configuration or network work
    if yt_comments::resolve(&args.url).is_none() {
        return Err(AppError::InvalidUrl(args.url).into());
    }

    let mut settings = AppSettings::load().await?;
    if let Some(key) = args.api_key {
        settings.api_key = Some(key);
    }
    if args.html {
        settings.text_format = TextFormat::Html;
    }
    let max_comments =
        settings.check_max_comments(args.max_comments.unwrap_or(settings.max_comments))?;

    let fetcher = app::build_fetcher(&settings)?;
    let result = app::with_deadline(
        std::time::Duration::from_secs(args.timeout.max(1)),
        app::fetch_from_url(&fetcher, &args.url, max_comments),
    )
    .await?;

    print!("{}", display::render(&result, !args.quiet));

    let export_format = args
        .export
        .or_else(|| args.output.as_ref().map(|_| settings.export_format));
    if let Some(format) = export_format {
        let path = args
            .output
            .unwrap_or_else(|| utils::get_export_file_path(&format.default_file_name()));
        export::write_export(&path, &result.comments, format).await?;
        println!("Exported {} comments to {}", result.comments.len(), path.display());
    }

    Ok(())
}
