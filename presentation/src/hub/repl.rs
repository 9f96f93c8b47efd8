//! REPL (Read-Eval-Print Loop) for the interactive hub

use super::command::{DEFAULT_SAVE_PATH, HubCommand};
use crate::output::formatter::OutputFormatter;
use crate::progress::reporter::ProgressReporter;
use colored::Colorize;
use neuralcore_application::{
    AttachError, HubController, LookupProgressNotifier, NoProgress, SaveOutcome, SubmitOutcome,
};
use neuralcore_domain::{Completion, Rejection, ToolId, ToolRegistry};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const HISTORY_CAPACITY: usize = 1000;

/// What the loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Print the text (if any) and read the next line
    Continue(String),
    Quit,
}

/// Interactive hub REPL
pub struct HubRepl {
    controller: HubController,
    formatter: Box<dyn OutputFormatter>,
    progress: Box<dyn LookupProgressNotifier>,
    history_path: Option<PathBuf>,
    save_path: PathBuf,
}

impl HubRepl {
    pub fn new(controller: HubController, formatter: Box<dyn OutputFormatter>) -> Self {
        Self {
            controller,
            formatter,
            progress: Box::new(ProgressReporter::new()),
            history_path: None,
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
        }
    }

    /// Set whether to show a spinner while lookups run
    pub fn with_progress(mut self, show: bool) -> Self {
        self.progress = if show {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(NoProgress)
        };
        self
    }

    pub fn with_history(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    /// Target for a bare `/save`
    pub fn with_save_path(mut self, path: PathBuf) -> Self {
        self.save_path = path;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> io::Result<()> {
        let mut editor = self.editor();
        self.print_welcome();

        loop {
            let prompt = DefaultPrompt::new(
                DefaultPromptSegment::Basic(self.prompt_label()),
                DefaultPromptSegment::Empty,
            );

            match editor.read_line(&prompt) {
                Ok(Signal::Success(line)) => match HubCommand::parse(&line) {
                    Ok(Some(command)) => match self.dispatch(command).await {
                        Flow::Continue(text) => {
                            if !text.is_empty() {
                                println!("{}", text);
                            }
                        }
                        Flow::Quit => break,
                    },
                    Ok(None) => continue,
                    Err(e) => println!("{}", e.to_string().yellow()),
                },
                Ok(Signal::CtrlD) => break,
                Ok(_) => {
                    println!("^C");
                    continue;
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return Err(e);
                }
            }
        }

        println!("Bye!");
        Ok(())
    }

    fn editor(&self) -> Reedline {
        let editor = Reedline::create();
        match self.history_path.as_deref().and_then(Self::history) {
            Some(history) => editor.with_history(Box::new(history)),
            None => editor,
        }
    }

    /// File-backed history at `path`, or `None` (with a warning) if it cannot be opened.
    fn history(path: &Path) -> Option<FileBackedHistory> {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!("History disabled ({}): {}", parent.display(), e);
                return None;
            }
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.to_path_buf()) {
            Ok(history) => Some(history),
            Err(e) => {
                warn!("History disabled ({}): {}", path.display(), e);
                None
            }
        }
    }

    fn prompt_label(&self) -> String {
        match self.controller.state().active() {
            Some(ToolId::Visual) => {
                format!("visual:{}", self.controller.state().visual_mode())
            }
            Some(tool) => tool.to_string(),
            None => "hub".to_string(),
        }
    }

    /// Apply one command to the hub and render the result.
    pub async fn dispatch(&mut self, command: HubCommand) -> Flow {
        debug!(?command, "Dispatching hub command");
        let text = match command {
            HubCommand::Quit => return Flow::Quit,
            HubCommand::Help => Self::help(),
            HubCommand::Catalog => self.formatter.catalog(),
            HubCommand::Use(tool) => {
                self.controller.select(tool);
                self.show()
            }
            HubCommand::Back => {
                self.controller.back_to_catalog();
                self.formatter.catalog()
            }
            HubCommand::Show => self.show(),
            HubCommand::Mode(mode) => match self.controller.set_visual_mode(mode) {
                Ok(()) => format!("Visual mode: {}", mode.label()),
                Err(rejection) => self.rejection(rejection),
            },
            HubCommand::Save(path) => {
                let target = path.unwrap_or_else(|| self.save_path.clone());
                self.save(&target)
            }
            HubCommand::Submit(text) => self.submit(text).await,
        };
        Flow::Continue(text)
    }

    async fn submit(&mut self, text: String) -> String {
        match self.controller.state().active() {
            None => return self.rejection(Rejection::NoActiveTool),
            Some(ToolId::Visual) => {
                match self.controller.attach_image(Path::new(&text)) {
                    Ok(()) => {}
                    Err(AttachError::Rejected(rejection)) => return self.rejection(rejection),
                    Err(e) => return self.formatter.failure(ToolId::Visual, &e.to_string()),
                }
            }
            Some(_) => {
                if let Err(rejection) = self.controller.edit(text) {
                    return self.rejection(rejection);
                }
            }
        }

        match self.controller.submit(self.progress.as_ref()).await {
            SubmitOutcome::Completed(Completion::Stored(_)) => self.show(),
            SubmitOutcome::Completed(Completion::Failed { tool, message }) => {
                self.formatter.failure(tool, &message)
            }
            SubmitOutcome::Completed(Completion::Stale(_)) => String::new(),
            SubmitOutcome::Rejected(rejection) => self.rejection(rejection),
        }
    }

    fn save(&self, path: &Path) -> String {
        match self.controller.save_processed_image(path) {
            Ok(SaveOutcome::Saved) => format!("Saved processed image to {}", path.display()),
            Ok(SaveOutcome::NothingProduced) => {
                "No processed image to save. Run a background removal first.".to_string()
            }
            Err(e) => self.formatter.failure(ToolId::Visual, &e.to_string()),
        }
    }

    /// Active tool's result, its last error, or its idle card.
    fn show(&self) -> String {
        let state = self.controller.state();
        let Some(tool) = state.active() else {
            return self.formatter.catalog();
        };
        if let Some(message) = state.error() {
            return self.formatter.failure(tool, message);
        }
        match state.active_result() {
            Some(view) => self.formatter.record(view),
            None => self.formatter.idle(ToolRegistry::descriptor(tool)),
        }
    }

    fn rejection(&self, rejection: Rejection) -> String {
        match (rejection, self.controller.state().active()) {
            (Rejection::NoActiveTool, _) | (_, None) => {
                "Select a tool first with /use <tool> (see /tools).".to_string()
            }
            (Rejection::Invalid(e), Some(tool)) => self.formatter.failure(tool, &e.user_message()),
            (other, Some(tool)) => self.formatter.failure(tool, &other.to_string()),
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            NeuralCore - Agent Hub           │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("{}", self.formatter.catalog());
        println!("Type /use <tool> to start, /help for commands.");
        println!();
    }

    fn help() -> String {
        [
            "Commands:",
            "  /tools, /catalog     - List the tools",
            "  /use <tool>          - Activate a tool (gst, ifsc, instagram, news, visual)",
            "  /back                - Return to the catalog",
            "  /mode <ocr|bg-remove> - Switch the visual mode",
            "  /show                - Show the active tool's last result",
            "  /save [path]         - Write the background-removed PNG",
            "  /help, /h            - Show this help",
            "  /quit, /exit, /q     - Exit",
            "",
            "Any other line is input for the active tool.",
            "For the visual tool, enter the path of an image file.",
        ]
        .join("\n")
    }
}
