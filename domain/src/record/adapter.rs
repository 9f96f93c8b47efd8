//! Response adapters
//!
//! Pure transforms from a fetch adapter's raw output into a [`ToolRecord`].
//! Each adapter echoes the user's query into the record and fills in the
//! defaults the service may leave out. No network access happens here.

use super::branch::BranchRecord;
use super::company::{CompanyRecord, GstStatus};
use super::grounding::{Grounded, GroundingSource};
use super::profile::ProfileRecord;
use super::slots::ToolRecord;
use super::trend::{TrendDigest, TrendItem};
use super::visual::{VisualMode, VisualRecord};
use super::NOT_AVAILABLE;
use crate::core::error::AdaptError;
use crate::tool::id::ToolId;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// JSON body and citations returned by the structured completion path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredReply {
    /// Raw JSON text; `None` when the service sent no text at all.
    pub text: Option<String>,
    pub sources: Vec<GroundingSource>,
}

impl StructuredReply {
    pub fn new(text: impl Into<String>, sources: Vec<GroundingSource>) -> Self {
        Self {
            text: Some(text.into()),
            sources,
        }
    }
}

/// What the multimodal path produced, per mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisualOutput {
    /// Extract mode. `None` or empty means no text was detected.
    ExtractedText(Option<String>),
    /// Background-removal mode. `None` means no image part came back.
    ProcessedImage(Option<String>),
}

impl VisualOutput {
    pub fn mode(&self) -> VisualMode {
        match self {
            VisualOutput::ExtractedText(_) => VisualMode::Ocr,
            VisualOutput::ProcessedImage(_) => VisualMode::BackgroundRemoval,
        }
    }
}

/// Raw output of whichever fetch adapter served the tool
#[derive(Debug, Clone, PartialEq)]
pub enum RawResponse {
    Structured(StructuredReply),
    /// Already renamed into the internal schema by the registry adapter.
    Branch(Grounded<BranchRecord>),
    Visual(VisualOutput),
}

impl RawResponse {
    fn kind(&self) -> &'static str {
        match self {
            RawResponse::Structured(_) => "structured",
            RawResponse::Branch(_) => "registry",
            RawResponse::Visual(_) => "visual",
        }
    }
}

/// Build the record for `tool` from `raw`, echoing `query`.
///
/// For the visual tool `query` is the submitted data URL.
pub fn adapt(tool: ToolId, raw: RawResponse, query: &str) -> Result<ToolRecord, AdaptError> {
    let got = raw.kind();
    match (tool, raw) {
        (ToolId::Gst, RawResponse::Structured(reply)) => adapt_company(reply, query).map(ToolRecord::Gst),
        (ToolId::Ifsc, RawResponse::Branch(branch)) => Ok(ToolRecord::Ifsc(adapt_branch(branch, query))),
        (ToolId::Instagram, RawResponse::Structured(reply)) => {
            adapt_profile(reply, query).map(ToolRecord::Instagram)
        }
        (ToolId::News, RawResponse::Structured(reply)) => adapt_trends(reply, query).map(ToolRecord::News),
        (ToolId::Visual, RawResponse::Visual(output)) => {
            Ok(ToolRecord::Visual(Grounded::ungrounded(adapt_visual(output, query))))
        }
        (tool, _) => Err(AdaptError::ShapeMismatch { tool, got }),
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct CompanyReply {
    legal_name: String,
    trade_name: Option<String>,
    constitution_of_business: String,
    registration_date: String,
    taxpayer_type: String,
    gst_status: String,
    center_jurisdiction: String,
    state_jurisdiction: String,
    address: String,
}

fn adapt_company(reply: StructuredReply, query: &str) -> Result<Grounded<CompanyRecord>, AdaptError> {
    let parsed: CompanyReply = parse_body(ToolId::Gst, reply.text.as_deref(), "{}")?;
    let record = CompanyRecord {
        gst_number: query.to_string(),
        legal_name: parsed.legal_name,
        trade_name: parsed
            .trade_name
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        constitution_of_business: parsed.constitution_of_business,
        registration_date: parsed.registration_date,
        taxpayer_type: parsed.taxpayer_type,
        gst_status: GstStatus::from(parsed.gst_status),
        center_jurisdiction: parsed.center_jurisdiction,
        state_jurisdiction: parsed.state_jurisdiction,
        address: parsed.address,
    };
    Ok(Grounded::new(record, reply.sources))
}

fn adapt_branch(branch: Grounded<BranchRecord>, query: &str) -> Grounded<BranchRecord> {
    branch.map(|mut record| {
        record.ifsc = query.to_uppercase();
        record
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ProfileReply {
    full_name: String,
    bio: String,
    followers: String,
    following: String,
    posts: String,
    is_private: bool,
    is_verified: bool,
    profile_pic_url: Option<String>,
}

fn adapt_profile(reply: StructuredReply, query: &str) -> Result<Grounded<ProfileRecord>, AdaptError> {
    let parsed: ProfileReply = parse_body(ToolId::Instagram, reply.text.as_deref(), "{}")?;
    let record = ProfileRecord {
        username: strip_handle(query).to_string(),
        full_name: parsed.full_name,
        bio: parsed.bio,
        followers: parsed.followers,
        following: parsed.following,
        posts: parsed.posts,
        is_private: parsed.is_private,
        is_verified: parsed.is_verified,
        profile_pic_url: parsed.profile_pic_url.filter(|u| !u.is_empty()),
    };
    Ok(Grounded::new(record, reply.sources))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct TrendReply {
    /// `null` and a missing key both mean no stories.
    news_items: Option<Vec<TrendItemReply>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct TrendItemReply {
    title: String,
    summary: String,
    creator_tip: String,
    url: String,
    viral_score: f64,
    hook: String,
}

fn adapt_trends(reply: StructuredReply, query: &str) -> Result<Grounded<TrendDigest>, AdaptError> {
    let parsed: TrendReply = parse_body(ToolId::News, reply.text.as_deref(), r#"{"newsItems": []}"#)?;
    let items = parsed
        .news_items
        .unwrap_or_default()
        .into_iter()
        .map(|item| TrendItem {
            title: item.title,
            summary: item.summary,
            creator_tip: item.creator_tip,
            url: item.url,
            viral_score: item.viral_score.round().clamp(0.0, 100.0) as u8,
            hook: item.hook,
        })
        .collect();
    let digest = TrendDigest {
        topic: query.to_string(),
        items,
    };
    Ok(Grounded::new(digest, reply.sources))
}

fn adapt_visual(output: VisualOutput, original_image: &str) -> VisualRecord {
    let mode = output.mode();
    let (extracted_text, processed_image) = match output {
        VisualOutput::ExtractedText(text) => (text, None),
        VisualOutput::ProcessedImage(image) => (None, image.filter(|i| !i.is_empty())),
    };
    VisualRecord {
        mode,
        original_image: original_image.to_string(),
        extracted_text,
        processed_image,
    }
}

/// Handle as echoed into the profile record.
pub fn strip_handle(query: &str) -> &str {
    query.trim().trim_start_matches('@')
}

fn parse_body<T: DeserializeOwned>(tool: ToolId, text: Option<&str>, empty: &str) -> Result<T, AdaptError> {
    let body = match text.map(str::trim) {
        Some(t) if !t.is_empty() => strip_code_fence(t),
        _ => empty,
    };
    serde_json::from_str(body).map_err(|source| AdaptError::Malformed { tool, source })
}

/// Remove a Markdown code fence around a JSON body, if present.
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::slots::RecordView;

    fn structured(text: &str) -> RawResponse {
        RawResponse::Structured(StructuredReply::new(
            text,
            vec![GroundingSource::new("GST Portal", "https://services.gst.gov.in")],
        ))
    }

    #[test]
    fn test_company_defaults_trade_name_and_echoes_query() {
        let raw = structured(r#"{"legalName": "Acme Pvt Ltd", "gstStatus": "Active"}"#);
        let record = adapt(ToolId::Gst, raw, "29abcde1234f1z5").unwrap();
        let ToolRecord::Gst(g) = record else {
            panic!("expected gst record");
        };
        assert_eq!(g.data.gst_number, "29abcde1234f1z5");
        assert_eq!(g.data.legal_name, "Acme Pvt Ltd");
        assert_eq!(g.data.trade_name, NOT_AVAILABLE);
        assert_eq!(g.data.gst_status, GstStatus::Active);
        assert_eq!(g.sources.len(), 1);
    }

    #[test]
    fn test_company_keeps_trade_name() {
        let raw = structured(r#"{"legalName": "Acme", "tradeName": "ACME", "gstStatus": "Cancelled"}"#);
        let ToolRecord::Gst(g) = adapt(ToolId::Gst, raw, "x").unwrap() else {
            panic!("expected gst record");
        };
        assert_eq!(g.data.trade_name, "ACME");
        assert_eq!(g.data.gst_status, GstStatus::Cancelled);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = adapt(ToolId::Gst, structured("{not json"), "x").unwrap_err();
        assert!(matches!(err, AdaptError::Malformed { tool: ToolId::Gst, .. }));
    }

    #[test]
    fn test_missing_text_is_treated_as_empty_object() {
        let raw = RawResponse::Structured(StructuredReply::default());
        let ToolRecord::Instagram(g) = adapt(ToolId::Instagram, raw, "@natgeo").unwrap() else {
            panic!("expected profile record");
        };
        assert_eq!(g.data.username, "natgeo");
        assert!(g.data.full_name.is_empty());
        assert!(g.sources.is_empty());
    }

    #[test]
    fn test_profile_strips_leading_at() {
        let raw = structured(r#"{"fullName": "NASA", "followers": "96M", "isVerified": true}"#);
        let ToolRecord::Instagram(g) = adapt(ToolId::Instagram, raw, " @nasa").unwrap() else {
            panic!("expected profile record");
        };
        assert_eq!(g.data.username, "nasa");
        assert!(g.data.is_verified);
        assert!(!g.data.is_private);
    }

    #[test]
    fn test_trends_without_items_array_is_empty() {
        let ToolRecord::News(g) = adapt(ToolId::News, structured("{}"), "AI News").unwrap() else {
            panic!("expected news record");
        };
        assert_eq!(g.data.topic, "AI News");
        assert!(g.data.is_empty());
    }

    #[test]
    fn test_trends_with_null_items_array_is_empty() {
        let raw = structured(r#"{"newsItems": null}"#);
        let ToolRecord::News(g) = adapt(ToolId::News, raw, "AI News").unwrap() else {
            panic!("expected news record");
        };
        assert_eq!(g.data.topic, "AI News");
        assert!(g.data.items.is_empty());
    }

    #[test]
    fn test_trends_keep_order_and_clamp_score() {
        let raw = structured(
            r#"{"newsItems": [
                {"title": "A", "summary": "s", "creatorTip": "t", "url": "u", "viralScore": 88, "hook": "h"},
                {"title": "B", "summary": "s", "creatorTip": "t", "url": "u", "viralScore": 140.6, "hook": "h"}
            ]}"#,
        );
        let ToolRecord::News(g) = adapt(ToolId::News, raw, "cricket").unwrap() else {
            panic!("expected news record");
        };
        let titles: Vec<_> = g.data.items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert_eq!(g.data.items[0].viral_score, 88);
        assert_eq!(g.data.items[1].viral_score, 100);
    }

    #[test]
    fn test_code_fenced_body_is_accepted() {
        let raw = structured("```json\n{\"legalName\": \"Fenced\"}\n```");
        let ToolRecord::Gst(g) = adapt(ToolId::Gst, raw, "x").unwrap() else {
            panic!("expected gst record");
        };
        assert_eq!(g.data.legal_name, "Fenced");
    }

    #[test]
    fn test_branch_echoes_normalized_code() {
        let branch = Grounded::new(
            BranchRecord {
                ifsc: "whatever".into(),
                bank_name: "HDFC Bank".into(),
                branch: "Andheri".into(),
                address: "addr".into(),
                city: "Mumbai".into(),
                state: "Maharashtra".into(),
                contact: NOT_AVAILABLE.into(),
                micr: "400240015".into(),
            },
            vec![GroundingSource::new("Razorpay Records", "https://razorpay.com")],
        );
        let record = adapt(ToolId::Ifsc, RawResponse::Branch(branch), "hdfc0001234").unwrap();
        let RecordView::Ifsc(g) = record.as_view() else {
            panic!("expected ifsc record");
        };
        assert_eq!(g.data.ifsc, "HDFC0001234");
        assert_eq!(g.data.contact, NOT_AVAILABLE);
    }

    #[test]
    fn test_visual_modes() {
        let url = "data:image/png;base64,AAAA";
        let ToolRecord::Visual(g) =
            adapt(ToolId::Visual, RawResponse::Visual(VisualOutput::ExtractedText(None)), url).unwrap()
        else {
            panic!("expected visual record");
        };
        assert_eq!(g.data.mode, VisualMode::Ocr);
        assert_eq!(g.data.original_image, url);
        assert_eq!(g.data.extracted_text, None);

        let ToolRecord::Visual(g) = adapt(
            ToolId::Visual,
            RawResponse::Visual(VisualOutput::ProcessedImage(Some(String::new()))),
            url,
        )
        .unwrap() else {
            panic!("expected visual record");
        };
        assert_eq!(g.data.mode, VisualMode::BackgroundRemoval);
        assert_eq!(g.data.processed_image, None);
        assert!(g.sources.is_empty());
    }

    #[test]
    fn test_shape_mismatch() {
        let err = adapt(
            ToolId::Ifsc,
            RawResponse::Visual(VisualOutput::ExtractedText(None)),
            "HDFC0001234",
        )
        .unwrap_err();
        assert!(err.to_string().contains("ifsc cannot be built from a visual response"));
    }

    #[test]
    fn test_same_input_same_record() {
        let body = r#"{"legalName": "Acme", "gstStatus": "Active"}"#;
        let a = adapt(ToolId::Gst, structured(body), "29ABCDE1234F1Z5").unwrap();
        let b = adapt(ToolId::Gst, structured(body), "29ABCDE1234F1Z5").unwrap();
        assert_eq!(a, b);
    }
}
