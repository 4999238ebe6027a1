//! Command-line entry point: replay an action script and write the results.

use clap::Parser;
use inkread_app::{App, AppConfig, AppError, HttpRecognitionClient, ResultPanel, Script, write_outputs};
use std::path::PathBuf;
use std::process::ExitCode;

/// Replay a drawing script against the InkRead recognizer.
#[derive(Debug, Parser)]
#[command(name = "inkread", version, about)]
struct Args {
    /// JSON action script to replay.
    script: PathBuf,
    /// TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Recognition service base URL (overrides the config).
    #[arg(long)]
    api_url: Option<String>,
    /// Directory for drawing.png and shapes.png.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// Skip recognize actions.
    #[arg(long)]
    offline: bool,
}

fn run(args: Args) -> Result<(), AppError> {
    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(api_url) = args.api_url {
        config.api_url = api_url;
    }

    let script = Script::load(&args.script)?;
    let client = HttpRecognitionClient::new(config.api_url.clone());
    let mut app = App::new(config, Box::new(client));
    app.init()?;

    let summary = script.replay(&mut app, args.offline)?;
    log::info!(
        "Replayed {} actions ({} recognitions skipped)",
        summary.applied,
        summary.skipped_recognitions
    );

    let ui = app.ui();
    if let Some(notification) = &ui.notification {
        eprintln!("{notification}");
    }
    if ui.panel == ResultPanel::Text && !ui.text.is_empty() {
        println!("Text: {}", ui.text);
        if !ui.latex.is_empty() {
            println!("LaTeX: {}", ui.latex);
        }
    }
    if ui.panel == ResultPanel::Shapes && !ui.shapes_json.is_empty() {
        println!("{}", ui.shapes_json);
    }

    let written = write_outputs(&app, &args.out_dir)?;
    for path in written.drawing.iter().chain(written.shapes.iter()) {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting InkRead");

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
