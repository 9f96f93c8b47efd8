//! Static tool registry
//!
//! One descriptor per [`ToolId`], built at compile time. Lookup is an
//! exhaustive `match`, so adding a tool without a descriptor does not compile.

use super::descriptor::{FetchRoute, ToolDescriptor};
use super::id::{ToolCategory, ToolId};
use super::validator::InputFormat;

static GST: ToolDescriptor = ToolDescriptor {
    id: ToolId::Gst,
    category: ToolCategory::Finance,
    title: "GST Insight",
    subtitle: "Corporate Registry",
    placeholder: "Enter 15-digit GSTIN",
    description: "Fetch legal company names, trade details, and active compliance status via official grounding.",
    latency_hint: "1.4s",
    input_format: InputFormat::GstIdentifier,
    fetch: Some(FetchRoute::StructuredCompletion),
};

static IFSC: ToolDescriptor = ToolDescriptor {
    id: ToolId::Ifsc,
    category: ToolCategory::Finance,
    title: "IFSC Sync",
    subtitle: "Banking Node",
    placeholder: "Enter 11-digit IFSC",
    description: "Instant branch verification and routing signal synchronization for bank nodes.",
    latency_hint: "0.8s",
    input_format: InputFormat::RoutingCode,
    fetch: Some(FetchRoute::RegistryLookup),
};

static INSTAGRAM: ToolDescriptor = ToolDescriptor {
    id: ToolId::Instagram,
    category: ToolCategory::Social,
    title: "Social Audit",
    subtitle: "Profile Intel",
    placeholder: "Enter @username",
    description: "Public profile intelligence, follower signal verification, and audit of social presence.",
    latency_hint: "1.8s",
    input_format: InputFormat::Handle,
    fetch: Some(FetchRoute::StructuredCompletion),
};

static NEWS: ToolDescriptor = ToolDescriptor {
    id: ToolId::News,
    category: ToolCategory::Social,
    title: "Pulse News",
    subtitle: "Creator Trends",
    placeholder: "Topic (e.g. AI News)",
    description: "Viral creator trends in Hinglish with specific social media hooks and strategy.",
    latency_hint: "2.1s",
    input_format: InputFormat::Topic,
    fetch: Some(FetchRoute::StructuredCompletion),
};

static VISUAL: ToolDescriptor = ToolDescriptor {
    id: ToolId::Visual,
    category: ToolCategory::Vision,
    title: "Vision Lab",
    subtitle: "Neural Engine",
    placeholder: "Upload Image",
    description: "Multimodal vision for OCR text extraction and intelligent background masking.",
    latency_hint: "2.5s",
    input_format: InputFormat::ImagePayload,
    fetch: None,
};

/// Read-only access to the tool catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolRegistry;

impl ToolRegistry {
    /// Descriptor for `id`.
    pub fn descriptor(id: ToolId) -> &'static ToolDescriptor {
        match id {
            ToolId::Gst => &GST,
            ToolId::Ifsc => &IFSC,
            ToolId::Instagram => &INSTAGRAM,
            ToolId::News => &NEWS,
            ToolId::Visual => &VISUAL,
        }
    }

    /// All descriptors in catalog order.
    pub fn all() -> impl Iterator<Item = &'static ToolDescriptor> {
        ToolId::ALL.into_iter().map(Self::descriptor)
    }

    /// Descriptors grouped by category, categories in display order.
    ///
    /// Empty categories are omitted.
    pub fn by_category() -> Vec<(ToolCategory, Vec<&'static ToolDescriptor>)> {
        ToolCategory::ALL
            .into_iter()
            .map(|category| {
                let tools: Vec<_> = Self::all().filter(|d| d.category == category).collect();
                (category, tools)
            })
            .filter(|(_, tools)| !tools.is_empty())
            .collect()
    }
}
