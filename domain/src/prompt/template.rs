//! Prompt templates for the lookup tools

use super::schema::{FieldType, OutputSchema, SchemaField};
use crate::record::adapter::strip_handle;
use crate::record::visual::VisualMode;
use crate::tool::id::ToolId;

/// Instruction plus declared output schema for one structured lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupPrompt {
    pub instruction: String,
    pub schema: OutputSchema,
}

impl LookupPrompt {
    /// Prompt for a structured-completion tool, `None` for the others.
    pub fn for_tool(tool: ToolId, query: &str) -> Option<Self> {
        match tool {
            ToolId::Gst => Some(Self::company(query)),
            ToolId::Instagram => Some(Self::profile(query)),
            ToolId::News => Some(Self::trends(query)),
            ToolId::Ifsc | ToolId::Visual => None,
        }
    }

    /// Company registry lookup by GSTIN
    pub fn company(gst_number: &str) -> Self {
        let instruction = format!(
            r#"Identify and provide the official Legal Company Name and trade details for the Indian GST number: {}.
Return the data in a structured JSON format. Use Google Search grounding to ensure real-time accuracy."#,
            gst_number
        );

        let schema = OutputSchema::new()
            .field(
                SchemaField::string("legalName")
                    .with_description("Official company name as per registry")
                    .required(),
            )
            .field(
                SchemaField::string("tradeName")
                    .with_description("Branding or trade name if applicable"),
            )
            .field(SchemaField::string("constitutionOfBusiness"))
            .field(SchemaField::string("registrationDate"))
            .field(SchemaField::string("taxpayerType"))
            .field(SchemaField::string("gstStatus").required())
            .field(SchemaField::string("centerJurisdiction"))
            .field(SchemaField::string("stateJurisdiction"))
            .field(SchemaField::string("address"));

        Self {
            instruction,
            schema,
        }
    }

    /// Public social profile lookup
    pub fn profile(handle: &str) -> Self {
        let instruction = format!(
            "Verify the public social profile for: @{}. Find official name, bio, and follower statistics. Use Google Search grounding.",
            strip_handle(handle)
        );

        let schema = OutputSchema::new()
            .field(SchemaField::string("fullName").required())
            .field(SchemaField::string("bio"))
            .field(SchemaField::string("followers").required())
            .field(SchemaField::string("following"))
            .field(SchemaField::string("posts"))
            .field(SchemaField::boolean("isPrivate"))
            .field(SchemaField::boolean("isVerified"));

        Self {
            instruction,
            schema,
        }
    }

    /// Trending stories for a topic
    pub fn trends(topic: &str) -> Self {
        let instruction = format!(
            r#"Advanced Pulse News for: "{}".
Provide exactly 5 trending stories.
LANGUAGE: High-energy Hinglish (social media style).
COMPONENTS per item:
- title: Bold headline.
- summary: What happened? (Hinglish).
- creatorTip: Content strategy hook.
- url: Source.
- viralScore: Integer 1-100.
- hook: A one-liner 'hook' for a social video.
Use Google Search grounding."#,
            topic
        );

        let item_fields = vec![
            SchemaField::string("title").required(),
            SchemaField::string("summary").required(),
            SchemaField::string("creatorTip").required(),
            SchemaField::string("url").required(),
            SchemaField::integer("viralScore").required(),
            SchemaField::string("hook").required(),
        ];

        let schema = OutputSchema::new()
            .field(SchemaField::new("newsItems", FieldType::ObjectArray(item_fields)));

        Self {
            instruction,
            schema,
        }
    }

    /// Instruction sent alongside the image for each visual mode
    pub fn visual_instruction(mode: VisualMode) -> &'static str {
        match mode {
            VisualMode::Ocr => {
                "Extract all textual data from this document/image. Maintain structure if possible."
            }
            VisualMode::BackgroundRemoval => "Mask and remove the background. Subject only.",
        }
    }
}
