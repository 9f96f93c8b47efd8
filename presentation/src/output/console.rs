//! Console card formatter
//!
//! One card layout per tool. Labels follow the hub's on-screen wording so a
//! terminal session reads the same as the graphical one.

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use neuralcore_domain::core::string::or_placeholder;
use neuralcore_domain::{
    BranchRecord, CompanyRecord, DataUrl, GroundingSource, GstStatus, NOT_AVAILABLE, ProfileRecord,
    RecordView, ToolDescriptor, ToolId, ToolRegistry, TrendDigest, VisualMode, VisualRecord,
};

/// Formats records as colored cards
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn format_record(view: RecordView<'_>) -> String {
        let mut output = match view {
            RecordView::Gst(g) => Self::company(&g.data),
            RecordView::Ifsc(g) => Self::branch(&g.data),
            RecordView::Instagram(g) => Self::profile(&g.data),
            RecordView::News(g) => Self::trends(&g.data),
            RecordView::Visual(g) => Self::visual(&g.data),
        };
        let (heading, fallback) = Self::provenance(view.tool_id());
        output.push_str(&Self::sources(heading, fallback, view.sources()));
        output
    }

    pub fn format_failure(tool: ToolId, message: &str) -> String {
        let title = ToolRegistry::descriptor(tool).title;
        format!("{} {} {}\n", "x".red().bold(), format!("[{}]", title).dimmed(), message.red())
    }

    pub fn format_idle(descriptor: &ToolDescriptor) -> String {
        let mut output = Self::header(descriptor.title, descriptor.subtitle);
        output.push_str(&format!("\n{}\n", "Grounding System Idle".dimmed().bold()));
        output.push_str(&format!(
            "{} {}\n",
            "Input:".cyan(),
            descriptor.placeholder
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Expected:".cyan(),
            descriptor.input_format.describe()
        ));
        output.push_str(&format!("{} ~{}\n", "Latency:".cyan(), descriptor.latency_hint));
        output
    }

    pub fn format_catalog() -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "=== NeuralCore Tools ===".cyan().bold()));
        for (category, tools) in ToolRegistry::by_category() {
            output.push_str(&Self::section_header(category.as_str()));
            for tool in tools {
                output.push_str(&format!(
                    "  {:<10} {} {}\n",
                    tool.id.as_str().yellow().bold(),
                    tool.title.bold(),
                    format!("({}, ~{})", tool.subtitle, tool.latency_hint).dimmed()
                ));
                output.push_str(&format!("             {}\n", tool.description));
            }
        }
        output
    }

    fn company(record: &CompanyRecord) -> String {
        let mut output = Self::header("GST Insight", "Corporate Registry");
        output.push_str(&format!(
            "\n{}  {}\n",
            or_placeholder(&record.legal_name, NOT_AVAILABLE).bold(),
            Self::status_badge(&record.gst_status)
        ));
        output.push_str(&format!("{}\n\n", record.gst_number.dimmed()));
        output.push_str(&Self::row("Trade Name", &record.trade_name));
        output.push_str(&Self::row("Constitution", &record.constitution_of_business));
        output.push_str(&Self::row("Taxpayer Type", &record.taxpayer_type));
        output.push_str(&Self::row("Registration Date", &record.registration_date));
        output.push_str(&Self::row("State Jurisdiction", &record.state_jurisdiction));
        output.push_str(&Self::row("Center Jurisdiction", &record.center_jurisdiction));
        output.push_str(&Self::block("Principal Address", &record.address));
        output
    }

    fn status_badge(status: &GstStatus) -> String {
        let label = format!("[{}]", status.as_str().to_uppercase());
        match status {
            GstStatus::Active => label.green().bold().to_string(),
            GstStatus::Inactive => label.yellow().bold().to_string(),
            GstStatus::Cancelled => label.red().bold().to_string(),
            GstStatus::Other(_) => label.dimmed().to_string(),
        }
    }

    fn branch(record: &BranchRecord) -> String {
        let mut output = Self::header("IFSC Sync", "Banking Node");
        let bank = or_placeholder(&record.bank_name, NOT_AVAILABLE);
        output.push_str(&format!("\n{}\n", bank.bold()));
        output.push_str(&format!("{}\n\n", record.ifsc.yellow()));
        output.push_str(&Self::row("MICR Signal", &record.micr));
        output.push_str(&Self::row("Branch", &record.branch));
        output.push_str(&Self::row("City", &record.city));
        output.push_str(&Self::row("State", &record.state));
        output.push_str(&Self::row("Contact", &record.contact));
        output.push_str(&Self::block("Verified Branch Address", &record.address));
        output
    }

    fn profile(record: &ProfileRecord) -> String {
        let mut output = Self::header("Social Audit", "Profile Intel");
        let badge = record
            .initial()
            .map(|c| format!("({}) ", c.to_uppercase()))
            .unwrap_or_default();
        let verified = if record.is_verified {
            format!(" {}", "verified".blue().bold())
        } else {
            String::new()
        };
        output.push_str(&format!(
            "\n{}{}{}\n",
            badge.magenta().bold(),
            record.full_name.bold(),
            verified
        ));
        let visibility = if record.is_private {
            "Restricted Profile".yellow()
        } else {
            "Open Entity".green()
        };
        output.push_str(&format!("@{}  {}\n\n", record.username, visibility));
        output.push_str(&Self::row("Post Density", &record.posts));
        output.push_str(&Self::row("Global Reach", &record.followers));
        output.push_str(&Self::row("Social Graph", &record.following));
        if !record.bio.trim().is_empty() {
            output.push_str(&Self::block("Bio", &record.bio));
        }
        output
    }

    fn trends(digest: &TrendDigest) -> String {
        let mut output = Self::header("Pulse News", "Creator Trends");
        output.push_str(&format!(
            "\n{} {}\n",
            "Real-time Trend Analysis:".cyan().bold(),
            digest.topic.bold()
        ));
        if digest.is_empty() {
            output.push_str(&format!("\n{}\n", "No stories surfaced for this topic.".dimmed()));
            return output;
        }
        for (index, item) in digest.items.iter().enumerate() {
            output.push_str(&format!(
                "\n{} {}\n",
                format!("{}.", index + 1).yellow().bold(),
                item.title.bold()
            ));
            output.push_str(&format!(
                "   {} {}\n",
                "Viral Potential:".dimmed(),
                Self::score(item.viral_score)
            ));
            output.push_str(&format!("   {}\n", item.summary));
            output.push_str(&format!(
                "   {} {}\n",
                "Reel Hook (Hinglish):".magenta(),
                item.hook.italic()
            ));
            output.push_str(&format!("   {} {}\n", "Creator Strategy:".cyan(), item.creator_tip));
            if !item.url.trim().is_empty() {
                output.push_str(&format!("   {}\n", item.url.underline().dimmed()));
            }
        }
        output
    }

    fn score(score: u8) -> String {
        let label = format!("{}/100", score);
        match score {
            80.. => label.green().bold().to_string(),
            50..=79 => label.yellow().to_string(),
            _ => label.dimmed().to_string(),
        }
    }

    fn visual(record: &VisualRecord) -> String {
        let mut output = Self::header("Vision Lab", "Visual Studio Output");
        output.push_str(&format!("\n{} {}\n", "Mode:".cyan(), record.mode.label().bold()));
        output.push_str(&Self::row("Original Image", &Self::image_summary(&record.original_image)));
        match record.mode {
            VisualMode::Ocr => {
                output.push_str(&Self::block("Extracted Text", record.display_text()));
            }
            VisualMode::BackgroundRemoval => match record.produced_image() {
                Some(image) => {
                    output.push_str(&Self::row("Processed Result", &Self::image_summary(image)));
                    output.push_str(&format!("{}\n", "Use /save [path] to write the PNG.".dimmed()));
                }
                None => {
                    output.push_str(&Self::row("Processed Result", "no image returned"));
                }
            },
        }
        output
    }

    fn image_summary(data_url: &str) -> String {
        match DataUrl::parse(data_url) {
            Ok(url) => {
                let bytes = url.payload().len() * 3 / 4;
                format!("{}, ~{} KB", url.mime_type(), bytes.div_ceil(1024))
            }
            Err(_) => "unreadable image data".to_string(),
        }
    }

    /// Source-list heading and fallback title for untitled sources.
    fn provenance(tool: ToolId) -> (&'static str, &'static str) {
        match tool {
            ToolId::Gst => ("Verification Provenance", "Official Document"),
            ToolId::Ifsc => ("Direct API Feedback", "Official Registry"),
            ToolId::Instagram => ("Signal Provenance", "Web Intelligence"),
            ToolId::News => ("Signal Verification", "Official Source"),
            ToolId::Visual => ("Sources", "Source"),
        }
    }

    fn sources(heading: &str, fallback: &str, sources: &[GroundingSource]) -> String {
        let linkable: Vec<_> = sources.iter().filter(|s| s.is_linkable()).collect();
        if linkable.is_empty() {
            return String::new();
        }
        let mut output = Self::section_header(heading);
        for source in linkable {
            let title = source
                .title
                .as_deref()
                .map(|t| or_placeholder(t, fallback))
                .unwrap_or(fallback);
            output.push_str(&format!(
                "  * {} {}\n",
                title,
                source.uri.as_deref().unwrap_or_default().underline().dimmed()
            ));
        }
        output
    }

    fn header(title: &str, subtitle: &str) -> String {
        let line = "=".repeat(60);
        format!(
            "{}\n {} {}\n{}\n",
            line.cyan(),
            title.bold(),
            format!("// {}", subtitle).dimmed(),
            line.cyan()
        )
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    /// Blank values render as the shared placeholder.
    fn row(label: &str, value: &str) -> String {
        format!(
            "{:<22} {}\n",
            format!("{}:", label).dimmed(),
            or_placeholder(value, NOT_AVAILABLE)
        )
    }

    fn block(label: &str, text: &str) -> String {
        format!(
            "\n{}\n{}\n",
            format!("{}:", label).cyan(),
            Self::indent(or_placeholder(text, NOT_AVAILABLE), "  ")
        )
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn record(&self, view: RecordView<'_>) -> String {
        Self::format_record(view)
    }

    fn failure(&self, tool: ToolId, message: &str) -> String {
        Self::format_failure(tool, message)
    }

    fn idle(&self, descriptor: &ToolDescriptor) -> String {
        Self::format_idle(descriptor)
    }

    fn catalog(&self) -> String {
        Self::format_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neuralcore_domain::{Grounded, NO_TEXT_DETECTED, TrendItem};

    fn plain(s: String) -> String {
        // Strip ANSI escapes so assertions do not depend on the terminal.
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    fn company() -> Grounded<CompanyRecord> {
        Grounded::new(
            CompanyRecord {
                gst_number: "29ABCDE1234F1Z5".into(),
                legal_name: "Acme Widgets Private Limited".into(),
                trade_name: String::new(),
                constitution_of_business: "Private Limited Company".into(),
                registration_date: "01/07/2017".into(),
                taxpayer_type: "Regular".into(),
                gst_status: GstStatus::Active,
                center_jurisdiction: "Bengaluru".into(),
                state_jurisdiction: "Karnataka".into(),
                address: "12 MG Road\nBengaluru".into(),
            },
            vec![
                GroundingSource {
                    title: None,
                    uri: Some("https://services.gst.gov.in".into()),
                },
                GroundingSource {
                    title: Some("no link".into()),
                    uri: None,
                },
            ],
        )
    }

    #[test]
    fn test_company_card_labels_and_placeholders() {
        let record = company();
        let out = plain(ConsoleFormatter::format_record(RecordView::Gst(&record)));
        assert!(out.contains("Acme Widgets Private Limited"));
        assert!(out.contains("[ACTIVE]"));
        assert!(out.contains("Trade Name:"));
        assert!(out.contains("N/A"));
        assert!(out.contains("  12 MG Road\n  Bengaluru"));
        assert!(out.contains("Verification Provenance"));
        assert!(out.contains("Official Document https://services.gst.gov.in"));
        assert!(!out.contains("no link"));
    }

    #[test]
    fn test_blank_card_fields_render_placeholder() {
        let mut record = company();
        record.data.constitution_of_business = String::new();
        record.data.registration_date = "  ".into();
        record.data.address = String::new();
        let out = plain(ConsoleFormatter::format_record(RecordView::Gst(&record)));
        assert!(out.contains(&format!("{:<22} {}\n", "Constitution:", NOT_AVAILABLE)));
        assert!(out.contains(&format!("{:<22} {}\n", "Registration Date:", NOT_AVAILABLE)));
        assert!(out.contains(&format!("Principal Address:\n  {}\n", NOT_AVAILABLE)));

        let branch = Grounded::ungrounded(BranchRecord {
            ifsc: "SBIN0000001".into(),
            bank_name: String::new(),
            branch: String::new(),
            address: String::new(),
            city: "Kolkata".into(),
            state: String::new(),
            contact: String::new(),
            micr: String::new(),
        });
        let out = plain(ConsoleFormatter::format_record(RecordView::Ifsc(&branch)));
        assert!(out.contains(&format!("{:<22} {}\n", "MICR Signal:", NOT_AVAILABLE)));
        assert!(out.contains(&format!("{:<22} {}\n", "State:", NOT_AVAILABLE)));
        assert!(out.contains(&format!("Verified Branch Address:\n  {}\n", NOT_AVAILABLE)));
    }

    #[test]
    fn test_no_sources_section_without_links() {
        let record = Grounded::ungrounded(ProfileRecord {
            username: "natgeo".into(),
            full_name: "National Geographic".into(),
            bio: String::new(),
            followers: "280M".into(),
            following: "150".into(),
            posts: "30K".into(),
            is_private: false,
            is_verified: true,
            profile_pic_url: None,
        });
        let out = plain(ConsoleFormatter::format_record(RecordView::Instagram(&record)));
        assert!(out.contains("@natgeo  Open Entity"));
        assert!(out.contains("(N) National Geographic verified"));
        assert!(out.contains("Global Reach:"));
        assert!(!out.contains("Signal Provenance"));
        assert!(!out.contains("Bio:"));
    }

    #[test]
    fn test_trend_card_numbers_items() {
        let record = Grounded::ungrounded(TrendDigest {
            topic: "AI News".into(),
            items: vec![TrendItem {
                title: "Chatbots everywhere".into(),
                summary: "Sab log AI use kar rahe hain".into(),
                creator_tip: "Do a reaction reel".into(),
                url: "https://example.com/ai".into(),
                viral_score: 91,
                hook: "Yeh AI sab badal dega!".into(),
            }],
        });
        let out = plain(ConsoleFormatter::format_record(RecordView::News(&record)));
        assert!(out.contains("Real-time Trend Analysis: AI News"));
        assert!(out.contains("1. Chatbots everywhere"));
        assert!(out.contains("Viral Potential: 91/100"));
        assert!(out.contains("Reel Hook (Hinglish): Yeh AI sab badal dega!"));
    }

    #[test]
    fn test_empty_digest_says_so() {
        let record = Grounded::ungrounded(TrendDigest {
            topic: "nothing".into(),
            items: vec![],
        });
        let out = plain(ConsoleFormatter::format_record(RecordView::News(&record)));
        assert!(out.contains("No stories surfaced"));
    }

    #[test]
    fn test_visual_card_ocr_without_text() {
        let record = Grounded::ungrounded(VisualRecord {
            mode: VisualMode::Ocr,
            original_image: "data:image/png;base64,AAAA".into(),
            extracted_text: Some("   ".into()),
            processed_image: None,
        });
        let out = plain(ConsoleFormatter::format_record(RecordView::Visual(&record)));
        assert!(out.contains(NO_TEXT_DETECTED));
        assert!(out.contains("image/png, ~1 KB"));
    }

    #[test]
    fn test_visual_card_background_removal_without_image() {
        let record = Grounded::ungrounded(VisualRecord {
            mode: VisualMode::BackgroundRemoval,
            original_image: "data:image/jpeg;base64,AAAA".into(),
            extracted_text: None,
            processed_image: Some(String::new()),
        });
        let out = plain(ConsoleFormatter::format_record(RecordView::Visual(&record)));
        assert!(out.contains("no image returned"));
        assert!(!out.contains("/save"));
    }

    #[test]
    fn test_branch_card_labels() {
        let record = Grounded::new(
            BranchRecord {
                ifsc: "SBIN0000001".into(),
                bank_name: "State Bank of India".into(),
                branch: "Kolkata Main".into(),
                address: "Samriddhi Bhawan".into(),
                city: "Kolkata".into(),
                state: "West Bengal".into(),
                contact: NOT_AVAILABLE.into(),
                micr: "700002021".into(),
            },
            vec![GroundingSource::new("Razorpay Records", "https://razorpay.com")],
        );
        let out = plain(ConsoleFormatter::format_record(RecordView::Ifsc(&record)));
        assert!(out.contains("MICR Signal:"));
        assert!(out.contains("Verified Branch Address:"));
        assert!(out.contains("Direct API Feedback"));
        assert!(out.contains("Razorpay Records https://razorpay.com"));
    }

    #[test]
    fn test_idle_and_failure() {
        let idle = plain(ConsoleFormatter::format_idle(ToolRegistry::descriptor(ToolId::Ifsc)));
        assert!(idle.contains("Grounding System Idle"));
        assert!(idle.contains("Enter 11-digit IFSC"));

        let failure = plain(ConsoleFormatter::format_failure(
            ToolId::Ifsc,
            "Invalid IFSC node signature.",
        ));
        assert!(failure.contains("[IFSC Sync] Invalid IFSC node signature."));
    }

    #[test]
    fn test_catalog_lists_every_tool() {
        let out = plain(ConsoleFormatter::format_catalog());
        for tool in ToolId::ALL {
            assert!(out.contains(ToolRegistry::descriptor(tool).title));
        }
        assert!(out.find("Finance").unwrap() < out.find("Vision").unwrap());
    }
}
