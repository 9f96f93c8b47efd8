//! Progress reporting for lookups

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use neuralcore_application::{LookupProgressNotifier, NoProgress};
use neuralcore_domain::{ToolDescriptor, ToolId};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown on stderr while a lookup is in flight
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupProgressNotifier for ProgressReporter {
    fn on_lookup_start(&self, descriptor: &ToolDescriptor) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(descriptor.title.to_string());
        pb.set_message(format!("resolving grounding signals (~{})", descriptor.latency_hint));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_lookup_complete(&self, _tool: ToolId, _success: bool) {
        if let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no spinner)
pub struct SimpleProgress;

/// Pick a notifier: nothing when quiet, a spinner on a terminal, plain lines otherwise.
pub fn progress_for(quiet: bool, terminal: bool) -> Box<dyn LookupProgressNotifier> {
    match (quiet, terminal) {
        (true, _) => Box::new(NoProgress),
        (false, true) => Box::new(ProgressReporter::new()),
        (false, false) => Box::new(SimpleProgress),
    }
}

impl LookupProgressNotifier for SimpleProgress {
    fn on_lookup_start(&self, descriptor: &ToolDescriptor) {
        eprintln!("{} {} ...", "->".cyan(), descriptor.title.bold());
    }

    fn on_lookup_complete(&self, _tool: ToolId, success: bool) {
        if success {
            eprintln!("  {} done", "v".green());
        } else {
            eprintln!("  {} failed", "x".red());
        }
    }
}
