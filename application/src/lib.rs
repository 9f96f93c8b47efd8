//! Application layer for neuralcore
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    branch_registry::{BranchRegistryPort, RegistryError},
    completion::{CompletionGateway, GatewayError},
    image_source::{ImageSourceError, ImageSourcePort},
    progress::{LookupProgressNotifier, NoProgress},
};
pub use use_cases::hub_controller::{AttachError, HubController, SaveOutcome, SubmitOutcome};
pub use use_cases::run_lookup::{LookupInput, RunLookupUseCase};
