//! Run Lookup use case.
//!
//! Routes one accepted submission through its fetch adapter and response
//! adapter:
//!
//! ```text
//! validate ──▶ fetch (completion / registry / multimodal) ──▶ adapt ──▶ ToolRecord
//! ```
//!
//! Every failure is folded into a [`LookupError`] so the hub only ever sees
//! the user-facing taxonomy. Internal causes are logged, never displayed.

use crate::ports::branch_registry::{BranchRegistryPort, RegistryError};
use crate::ports::completion::{CompletionGateway, GatewayError};
use crate::ports::progress::LookupProgressNotifier;
use neuralcore_domain::core::string::preview;
use neuralcore_domain::{
    DataUrl, LookupError, LookupPrompt, RawResponse, Submission, ToolId, ToolRecord,
    ToolRegistry, VisualMode, adapt,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Input for the [`RunLookupUseCase`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupInput {
    pub tool: ToolId,
    /// Raw user input (a data URL for the image tool).
    pub query: String,
    /// Only read by the image tool.
    pub mode: VisualMode,
}

impl LookupInput {
    pub fn new(tool: ToolId, query: impl Into<String>) -> Self {
        Self {
            tool,
            query: query.into(),
            mode: VisualMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: VisualMode) -> Self {
        self.mode = mode;
        self
    }
}

impl From<&Submission> for LookupInput {
    fn from(submission: &Submission) -> Self {
        Self {
            tool: submission.ticket.tool(),
            query: submission.query.clone(),
            mode: submission.mode,
        }
    }
}

/// Use case for running a single lookup.
#[derive(Clone)]
pub struct RunLookupUseCase {
    completion: Arc<dyn CompletionGateway>,
    registry: Arc<dyn BranchRegistryPort>,
}

impl RunLookupUseCase {
    pub fn new(completion: Arc<dyn CompletionGateway>, registry: Arc<dyn BranchRegistryPort>) -> Self {
        Self {
            completion,
            registry,
        }
    }

    /// Execute the lookup with progress callbacks.
    pub async fn execute(
        &self,
        input: &LookupInput,
        progress: &dyn LookupProgressNotifier,
    ) -> Result<ToolRecord, LookupError> {
        let descriptor = ToolRegistry::descriptor(input.tool);
        if !descriptor.validate(&input.query) {
            return Err(LookupError::InputFormat {
                tool_title: descriptor.title,
            });
        }

        info!(tool = %input.tool, "Starting lookup");
        progress.on_lookup_start(descriptor);

        let result = self.fetch_and_adapt(input).await;
        progress.on_lookup_complete(input.tool, result.is_ok());

        match &result {
            Ok(record) => info!(
                tool = %input.tool,
                sources = record.sources().len(),
                "Lookup completed"
            ),
            // A miss the user can fix is not a service fault.
            Err(e) if e.is_user_correctable() => info!(tool = %input.tool, "Lookup miss: {}", e),
            Err(e) => warn!(
                tool = %input.tool,
                cause = e.cause().unwrap_or_default(),
                "Lookup failed: {}",
                e
            ),
        }
        result
    }

    async fn fetch_and_adapt(&self, input: &LookupInput) -> Result<ToolRecord, LookupError> {
        let raw = match input.tool {
            ToolId::Gst | ToolId::Instagram | ToolId::News => {
                let prompt = LookupPrompt::for_tool(input.tool, &input.query).ok_or_else(|| {
                    LookupError::transient(format!("no prompt for {}", input.tool))
                })?;
                debug!(
                    tool = %input.tool,
                    instruction = %preview(&prompt.instruction, 80),
                    "Structured completion request"
                );
                let reply = self
                    .completion
                    .structured(&prompt)
                    .await
                    .map_err(gateway_failure)?;
                RawResponse::Structured(reply)
            }
            ToolId::Ifsc => {
                // Validation already matched the uppercased input as-is.
                let code = input.query.to_uppercase();
                debug!(code = %code, "Registry lookup");
                let record = self.registry.lookup(&code).await.map_err(registry_failure)?;
                RawResponse::Branch(record)
            }
            ToolId::Visual => {
                let image = DataUrl::parse(&input.query)
                    .map_err(|e| LookupError::transient(format!("image payload: {}", e)))?;
                debug!(mime = image.mime_type(), mode = %input.mode, "Multimodal request");
                let output = self
                    .completion
                    .multimodal(&image, input.mode)
                    .await
                    .map_err(gateway_failure)?;
                RawResponse::Visual(output)
            }
        };

        Ok(adapt(input.tool, raw, &input.query)?)
    }
}

fn gateway_failure(e: GatewayError) -> LookupError {
    LookupError::transient(e.to_string())
}

fn registry_failure(e: RegistryError) -> LookupError {
    match e {
        RegistryError::NotFound => LookupError::NotFound,
        RegistryError::Unavailable { status } => LookupError::Unavailable { status },
        other => LookupError::transient(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use async_trait::async_trait;
    use neuralcore_domain::{
        BranchRecord, Grounded, GroundingSource, LookupPrompt, RecordView, StructuredReply,
        VisualOutput, SYNC_TIMEOUT_MESSAGE,
    };
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    #[derive(Default)]
    struct MockCompletion {
        reply: Option<StructuredReply>,
        visual: Option<VisualOutput>,
        prompts: Mutex<Vec<String>>,
        modes: Mutex<Vec<VisualMode>>,
    }

    #[async_trait]
    impl CompletionGateway for MockCompletion {
        async fn structured(&self, prompt: &LookupPrompt) -> Result<StructuredReply, GatewayError> {
            self.prompts.lock().unwrap().push(prompt.instruction.clone());
            self.reply
                .clone()
                .ok_or_else(|| GatewayError::ConnectionError("connection refused".into()))
        }

        async fn multimodal(
            &self,
            _image: &DataUrl,
            mode: VisualMode,
        ) -> Result<VisualOutput, GatewayError> {
            self.modes.lock().unwrap().push(mode);
            self.visual
                .clone()
                .ok_or_else(|| GatewayError::InvalidResponse("no candidates".into()))
        }
    }

    enum RegistryBehavior {
        Found,
        NotFound,
        Unavailable(u16),
        Broken,
    }

    struct MockRegistry {
        behavior: RegistryBehavior,
        codes: Mutex<Vec<String>>,
    }

    impl MockRegistry {
        fn new(behavior: RegistryBehavior) -> Self {
            Self {
                behavior,
                codes: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl BranchRegistryPort for MockRegistry {
        async fn lookup(&self, code: &str) -> Result<Grounded<BranchRecord>, RegistryError> {
            self.codes.lock().unwrap().push(code.to_string());
            match self.behavior {
                RegistryBehavior::Found => Ok(Grounded::new(
                    BranchRecord {
                        ifsc: code.to_string(),
                        bank_name: "HDFC Bank".into(),
                        branch: "Sandoz House".into(),
                        address: "Worli".into(),
                        city: "Mumbai".into(),
                        state: "Maharashtra".into(),
                        contact: "N/A".into(),
                        micr: "400240015".into(),
                    },
                    vec![GroundingSource::new("Razorpay Records", "https://razorpay.com")],
                )),
                RegistryBehavior::NotFound => Err(RegistryError::NotFound),
                RegistryBehavior::Unavailable(status) => Err(RegistryError::Unavailable { status }),
                RegistryBehavior::Broken => Err(RegistryError::Transport("dns failure".into())),
            }
        }
    }

    fn use_case(completion: MockCompletion, registry: MockRegistry) -> (RunLookupUseCase, Arc<MockCompletion>, Arc<MockRegistry>) {
        let completion = Arc::new(completion);
        let registry = Arc::new(registry);
        (
            RunLookupUseCase::new(completion.clone(), registry.clone()),
            completion,
            registry,
        )
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_invalid_input_skips_network() {
        let (uc, completion, registry) =
            use_case(MockCompletion::default(), MockRegistry::new(RegistryBehavior::Found));

        let err = uc
            .execute(&LookupInput::new(ToolId::Ifsc, "HDF0001234"), &NoProgress)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            LookupError::InputFormat {
                tool_title: "IFSC Sync"
            }
        );
        assert!(registry.codes.lock().unwrap().is_empty());
        assert!(completion.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_company_lookup_echoes_query() {
        let completion = MockCompletion {
            reply: Some(StructuredReply::new(
                r#"{"legalName": "Acme Industries Pvt Ltd", "gstStatus": "Active"}"#,
                vec![GroundingSource::new("GST Portal", "https://gst.gov.in")],
            )),
            ..Default::default()
        };
        let (uc, completion, _) = use_case(completion, MockRegistry::new(RegistryBehavior::Found));

        let record = uc
            .execute(&LookupInput::new(ToolId::Gst, "29abcde1234f1z5"), &NoProgress)
            .await
            .unwrap();
        match record.as_view() {
            RecordView::Gst(g) => {
                assert_eq!(g.data.gst_number, "29abcde1234f1z5");
                assert_eq!(g.data.legal_name, "Acme Industries Pvt Ltd");
                assert_eq!(g.data.trade_name, "N/A");
                assert_eq!(g.sources.len(), 1);
            }
            other => panic!("unexpected record: {:?}", other),
        }
        assert!(completion.prompts.lock().unwrap()[0].contains("29abcde1234f1z5"));
    }

    #[tokio::test]
    async fn test_ifsc_code_is_normalized() {
        let (uc, _, registry) =
            use_case(MockCompletion::default(), MockRegistry::new(RegistryBehavior::Found));

        let record = uc
            .execute(&LookupInput::new(ToolId::Ifsc, "hdfc0000240"), &NoProgress)
            .await
            .unwrap();
        assert_eq!(registry.codes.lock().unwrap().as_slice(), ["HDFC0000240"]);
        match record.as_view() {
            RecordView::Ifsc(g) => {
                assert_eq!(g.data.ifsc, "HDFC0000240");
                assert_eq!(g.data.contact, "N/A");
            }
            other => panic!("unexpected record: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_padded_ifsc_code_is_rejected_before_registry() {
        let (uc, _, registry) =
            use_case(MockCompletion::default(), MockRegistry::new(RegistryBehavior::Found));

        let err = uc
            .execute(&LookupInput::new(ToolId::Ifsc, " hdfc0000240 "), &NoProgress)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            LookupError::InputFormat {
                tool_title: "IFSC Sync"
            }
        );
        assert!(registry.codes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_registry_errors_are_classified() {
        let cases = [
            (RegistryBehavior::NotFound, "Invalid IFSC node signature."),
            (RegistryBehavior::Unavailable(503), "IFSC network unavailable."),
            (RegistryBehavior::Broken, SYNC_TIMEOUT_MESSAGE),
        ];
        for (behavior, expected) in cases {
            let (uc, _, _) = use_case(MockCompletion::default(), MockRegistry::new(behavior));
            let err = uc
                .execute(&LookupInput::new(ToolId::Ifsc, "HDFC0001234"), &NoProgress)
                .await
                .unwrap_err();
            assert_eq!(err.user_message(), expected);
        }
    }

    #[tokio::test]
    async fn test_gateway_failure_is_generic() {
        let (uc, _, _) =
            use_case(MockCompletion::default(), MockRegistry::new(RegistryBehavior::Found));
        let err = uc
            .execute(&LookupInput::new(ToolId::News, "AI News"), &NoProgress)
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), SYNC_TIMEOUT_MESSAGE);
        assert_eq!(err.cause(), Some("Connection error: connection refused"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_transient() {
        let completion = MockCompletion {
            reply: Some(StructuredReply::new("not json", vec![])),
            ..Default::default()
        };
        let (uc, _, _) = use_case(completion, MockRegistry::new(RegistryBehavior::Found));
        let err = uc
            .execute(&LookupInput::new(ToolId::Instagram, "@natgeo"), &NoProgress)
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::Transient { .. }));
    }

    #[tokio::test]
    async fn test_trends_without_items_is_empty_digest() {
        let completion = MockCompletion {
            reply: Some(StructuredReply::new("{}", vec![])),
            ..Default::default()
        };
        let (uc, _, _) = use_case(completion, MockRegistry::new(RegistryBehavior::Found));
        let record = uc
            .execute(&LookupInput::new(ToolId::News, "cricket"), &NoProgress)
            .await
            .unwrap();
        match record.as_view() {
            RecordView::News(g) => {
                assert_eq!(g.data.topic, "cricket");
                assert!(g.data.items.is_empty());
            }
            other => panic!("unexpected record: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_visual_passes_mode_and_keeps_original() {
        let completion = MockCompletion {
            visual: Some(VisualOutput::ProcessedImage(None)),
            ..Default::default()
        };
        let (uc, completion, _) = use_case(completion, MockRegistry::new(RegistryBehavior::Found));
        let image = "data:image/jpeg;base64,/9j/4AAQ";
        let input =
            LookupInput::new(ToolId::Visual, image).with_mode(VisualMode::BackgroundRemoval);

        let record = uc.execute(&input, &NoProgress).await.unwrap();
        assert_eq!(
            completion.modes.lock().unwrap().as_slice(),
            [VisualMode::BackgroundRemoval]
        );
        match record.as_view() {
            RecordView::Visual(g) => {
                assert_eq!(g.data.original_image, image);
                assert!(g.data.produced_image().is_none());
                assert!(g.sources.is_empty());
            }
            other => panic!("unexpected record: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_visual_rejects_non_data_url() {
        let (uc, completion, _) =
            use_case(MockCompletion::default(), MockRegistry::new(RegistryBehavior::Found));
        let err = uc
            .execute(&LookupInput::new(ToolId::Visual, "/tmp/cat.png"), &NoProgress)
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::Transient { .. }));
        assert!(completion.modes.lock().unwrap().is_empty());
    }
}
