//! Hub Controller
//!
//! Drives [`HubState`] through a submission: begin, run the lookup, commit.
//! Keeps the interaction logic out of the presentation layer, which only
//! renders state and forwards user commands.

use crate::ports::image_source::{ImageSourceError, ImageSourcePort};
use crate::ports::progress::LookupProgressNotifier;
use crate::use_cases::run_lookup::{LookupInput, RunLookupUseCase};
use neuralcore_domain::{
    Completion, DataUrl, HubState, LookupError, Rejection, SubmissionTicket, ToolId, ToolRecord,
    VisualMode,
};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Result of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The submission ran; see [`Completion`] for what was committed.
    Completed(Completion),
    /// The submission never left the hub.
    Rejected(Rejection),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Completed(Completion::Stored(_)))
    }
}

/// Result of saving the processed image
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// No background-removed image is stored.
    NothingProduced,
}

/// Why an image could not become the image tool's input
#[derive(Error, Debug)]
pub enum AttachError {
    #[error(transparent)]
    Image(#[from] ImageSourceError),

    #[error(transparent)]
    Rejected(#[from] Rejection),
}

/// Hub controller owning the session state
pub struct HubController {
    state: HubState,
    lookup: RunLookupUseCase,
    images: Arc<dyn ImageSourcePort>,
}

impl HubController {
    pub fn new(lookup: RunLookupUseCase, images: Arc<dyn ImageSourcePort>) -> Self {
        Self {
            state: HubState::new(),
            lookup,
            images,
        }
    }

    pub fn state(&self) -> &HubState {
        &self.state
    }

    pub fn select(&mut self, tool: ToolId) {
        info!(tool = %tool, "Tool selected");
        self.state.select(tool);
    }

    pub fn back_to_catalog(&mut self) {
        self.state.back_to_catalog();
    }

    pub fn set_visual_mode(&mut self, mode: VisualMode) -> Result<(), Rejection> {
        self.state.set_visual_mode(mode)
    }

    pub fn edit(&mut self, text: impl Into<String>) -> Result<(), Rejection> {
        self.state.edit(text)
    }

    /// Load a local image file as the image tool's input.
    pub fn attach_image(&mut self, path: &Path) -> Result<(), AttachError> {
        let image = self.images.load(path)?;
        self.state.edit(image.to_string())?;
        info!(path = %path.display(), mime = image.mime_type(), "Image attached");
        Ok(())
    }

    /// Submit the current input and wait for the lookup to resolve.
    pub async fn submit(&mut self, progress: &dyn LookupProgressNotifier) -> SubmitOutcome {
        let submission = match self.state.begin_submission() {
            Ok(submission) => submission,
            Err(rejection) => return SubmitOutcome::Rejected(rejection),
        };

        let input = LookupInput::from(&submission);
        let outcome = self.lookup.execute(&input, progress).await;
        SubmitOutcome::Completed(self.commit(submission.ticket, outcome))
    }

    /// Feed a finished lookup back into the state.
    pub fn commit(
        &mut self,
        ticket: SubmissionTicket,
        outcome: Result<ToolRecord, LookupError>,
    ) -> Completion {
        let completion = self.state.complete(ticket, outcome);
        if let Completion::Stale(stale) = &completion {
            warn!(
                tool = %stale.tool(),
                seq = stale.seq(),
                "Dropped stale completion"
            );
        }
        completion
    }

    /// Write the stored background-removed image to `path`.
    pub fn save_processed_image(&self, path: &Path) -> Result<SaveOutcome, ImageSourceError> {
        let Some(produced) = self.state.results().visual().and_then(|v| v.produced_image()) else {
            return Ok(SaveOutcome::NothingProduced);
        };
        let image = DataUrl::parse(produced)?;
        self.images.store(&image, path)?;
        info!(path = %path.display(), "Processed image saved");
        Ok(SaveOutcome::Saved)
    }
}
