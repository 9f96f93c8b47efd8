//! CLI entrypoint for NeuralCore
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use neuralcore_application::{
    HubController, LookupProgressNotifier, RunLookupUseCase, SaveOutcome, SubmitOutcome,
};
use neuralcore_domain::{Completion, OutputFormat, Rejection, ToolRegistry, VisualMode};
use neuralcore_infrastructure::{
    ConfigLoader, FileConfig, GeminiConfig, GeminiGateway, LocalImageSource,
    RazorpayBranchRegistry,
};
use neuralcore_presentation::{
    Cli, Command, HubRepl, OutputConfig, OutputFormatter, ReplConfig, formatter_for, progress_for,
};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Held until exit so the file writer flushes
    let _log_guard = logging::init(cli.verbose, cli.log_dir.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("failed to load configuration")?
    };
    config.validate().context("invalid configuration")?;

    let output = OutputConfig {
        format: cli
            .output
            .map(OutputFormat::from)
            .or(config.output.format)
            .unwrap_or_default(),
        color: config.output.color,
    };
    if !output.color {
        colored::control::set_override(false);
    }
    let formatter = formatter_for(output.format);

    info!("Starting NeuralCore");

    if let Some(Command::Catalog) = cli.command {
        println!("{}", formatter.catalog());
        return Ok(ExitCode::SUCCESS);
    }

    // === Dependency Injection ===
    let controller = build_controller(&config);

    match cli.command {
        None => {
            let repl_config = ReplConfig {
                show_progress: config.repl.show_progress && !cli.quiet,
                history_file: config.repl.history_file.as_ref().map(PathBuf::from),
                save_path: config.repl.save_path.as_ref().map(PathBuf::from),
            };
            let mut repl = HubRepl::new(controller, formatter)
                .with_progress(repl_config.show_progress)
                .with_history(repl_config.history_path())
                .with_save_path(repl_config.save_path());
            repl.run().await?;
            Ok(ExitCode::SUCCESS)
        }
        Some(command) => {
            let progress = progress_for(cli.quiet, std::io::stderr().is_terminal());
            run_once(controller, command, formatter.as_ref(), progress.as_ref()).await
        }
    }
}

fn build_controller(config: &FileConfig) -> HubController {
    // The key is read once here and handed to the adapter
    let api_key = config
        .gemini
        .resolve_api_key(|name| std::env::var(name).ok());
    if api_key.is_none() {
        warn!(
            "No API key found in config or {:?}; only the IFSC tool will work",
            config.gemini.api_key_env
        );
    }

    let completion = Arc::new(GeminiGateway::new(GeminiConfig::from_file(
        &config.gemini,
        api_key,
    )));
    let registry = Arc::new(RazorpayBranchRegistry::new(
        config.registry.base_url.clone(),
    ));
    let images = Arc::new(LocalImageSource::new());

    HubController::new(RunLookupUseCase::new(completion, registry), images)
}

/// Run a single submission and print its card.
async fn run_once(
    mut controller: HubController,
    command: Command,
    formatter: &dyn OutputFormatter,
    progress: &dyn LookupProgressNotifier,
) -> Result<ExitCode> {
    let Some(tool) = command.tool() else {
        println!("{}", formatter.catalog());
        return Ok(ExitCode::SUCCESS);
    };
    controller.select(tool);

    let mut save_to = None;
    match command {
        Command::Gst { gstin: query }
        | Command::Ifsc { code: query }
        | Command::Profile { handle: query }
        | Command::Trends { topic: query } => controller.edit(query)?,
        Command::Vision { path, mode, save } => {
            controller.set_visual_mode(VisualMode::from(mode))?;
            if let Err(e) = controller.attach_image(&path) {
                println!("{}", formatter.failure(tool, &e.to_string()));
                return Ok(ExitCode::FAILURE);
            }
            save_to = save;
        }
        Command::Catalog => {}
    }

    let outcome = controller.submit(progress).await;
    let success = outcome.is_success();
    match outcome {
        SubmitOutcome::Completed(Completion::Stored(_)) => {
            if let Some(view) = controller.state().active_result() {
                println!("{}", formatter.record(view));
            }
        }
        SubmitOutcome::Completed(Completion::Failed { tool, message }) => {
            println!("{}", formatter.failure(tool, &message));
        }
        SubmitOutcome::Completed(Completion::Stale(_)) => {}
        SubmitOutcome::Rejected(Rejection::Invalid(e)) => {
            println!("{}", formatter.failure(tool, &e.user_message()));
        }
        SubmitOutcome::Rejected(other) => {
            println!("{}", formatter.failure(tool, &other.to_string()));
        }
    }

    if let (true, Some(path)) = (success, save_to) {
        match controller
            .save_processed_image(&path)
            .with_context(|| format!("failed to save {}", path.display()))?
        {
            SaveOutcome::Saved => eprintln!("Saved processed image to {}", path.display()),
            SaveOutcome::NothingProduced => eprintln!(
                "No processed image to save ({} returned none)",
                ToolRegistry::descriptor(tool).title
            ),
        }
    }

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
