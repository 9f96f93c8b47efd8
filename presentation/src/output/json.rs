//! JSON output formatter

use crate::output::formatter::OutputFormatter;
use neuralcore_domain::{RecordView, ToolDescriptor, ToolId, ToolRegistry};
use serde_json::{Value, json};

/// Formats hub output as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    fn render(value: &impl serde::Serialize) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn descriptor(descriptor: &ToolDescriptor) -> Value {
        json!({
            "id": descriptor.id,
            "category": descriptor.category,
            "title": descriptor.title,
            "subtitle": descriptor.subtitle,
            "description": descriptor.description,
            "placeholder": descriptor.placeholder,
            "input": descriptor.input_format.describe(),
            "latency": descriptor.latency_hint,
        })
    }
}

impl OutputFormatter for JsonFormatter {
    fn record(&self, view: RecordView<'_>) -> String {
        Self::render(&view)
    }

    fn failure(&self, tool: ToolId, message: &str) -> String {
        Self::render(&json!({ "tool": tool, "error": message }))
    }

    fn idle(&self, descriptor: &ToolDescriptor) -> String {
        Self::render(&json!({ "tool": descriptor.id, "status": "idle" }))
    }

    fn catalog(&self) -> String {
        let tools: Vec<Value> = ToolRegistry::all().map(Self::descriptor).collect();
        Self::render(&json!({ "tools": tools }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neuralcore_domain::{BranchRecord, GroundingSource, Grounded};

    fn parse(s: String) -> Value {
        serde_json::from_str(&s).unwrap()
    }

    #[test]
    fn test_record_is_tagged_with_sources() {
        let record = Grounded::new(
            BranchRecord {
                ifsc: "HDFC0000001".into(),
                bank_name: "HDFC Bank".into(),
                branch: "Fort".into(),
                address: "Mumbai".into(),
                city: "Mumbai".into(),
                state: "Maharashtra".into(),
                contact: "N/A".into(),
                micr: "N/A".into(),
            },
            vec![GroundingSource::new("Razorpay Records", "https://razorpay.com")],
        );
        let value = parse(JsonFormatter.record(RecordView::Ifsc(&record)));
        assert_eq!(value["tool"], "ifsc");
        assert_eq!(value["result"]["data"]["bankName"], "HDFC Bank");
        assert_eq!(value["result"]["sources"][0]["uri"], "https://razorpay.com");
    }

    #[test]
    fn test_failure_and_idle() {
        let value = parse(JsonFormatter.failure(ToolId::Gst, "IFSC network unavailable."));
        assert_eq!(value["tool"], "gst");
        assert_eq!(value["error"], "IFSC network unavailable.");

        let value = parse(JsonFormatter.idle(ToolRegistry::descriptor(ToolId::News)));
        assert_eq!(value["status"], "idle");
    }

    #[test]
    fn test_catalog_has_all_tools_in_order() {
        let value = parse(JsonFormatter.catalog());
        let ids: Vec<&str> = value["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["gst", "ifsc", "instagram", "news", "visual"]);
    }
}
