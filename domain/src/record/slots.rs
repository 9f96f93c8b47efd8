//! Per-tool result storage
//!
//! [`ResultSlots`] has exactly one optional field per tool, so a slot can
//! only ever hold its own tool's record.

use super::branch::BranchRecord;
use super::company::CompanyRecord;
use super::grounding::{Grounded, GroundingSource};
use super::profile::ProfileRecord;
use super::trend::TrendDigest;
use super::visual::VisualRecord;
use crate::tool::id::ToolId;
use serde::Serialize;

/// A finished record for any tool
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tool", content = "result", rename_all = "lowercase")]
pub enum ToolRecord {
    Gst(Grounded<CompanyRecord>),
    Ifsc(Grounded<BranchRecord>),
    Instagram(Grounded<ProfileRecord>),
    News(Grounded<TrendDigest>),
    Visual(Grounded<VisualRecord>),
}

impl ToolRecord {
    pub fn tool_id(&self) -> ToolId {
        match self {
            ToolRecord::Gst(_) => ToolId::Gst,
            ToolRecord::Ifsc(_) => ToolId::Ifsc,
            ToolRecord::Instagram(_) => ToolId::Instagram,
            ToolRecord::News(_) => ToolId::News,
            ToolRecord::Visual(_) => ToolId::Visual,
        }
    }

    pub fn sources(&self) -> &[GroundingSource] {
        self.as_view().sources()
    }

    /// Borrowed view of this record.
    pub fn as_view(&self) -> RecordView<'_> {
        match self {
            ToolRecord::Gst(r) => RecordView::Gst(r),
            ToolRecord::Ifsc(r) => RecordView::Ifsc(r),
            ToolRecord::Instagram(r) => RecordView::Instagram(r),
            ToolRecord::News(r) => RecordView::News(r),
            ToolRecord::Visual(r) => RecordView::Visual(r),
        }
    }
}

/// Borrowed counterpart of [`ToolRecord`], handed to renderers
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "tool", content = "result", rename_all = "lowercase")]
pub enum RecordView<'a> {
    Gst(&'a Grounded<CompanyRecord>),
    Ifsc(&'a Grounded<BranchRecord>),
    Instagram(&'a Grounded<ProfileRecord>),
    News(&'a Grounded<TrendDigest>),
    Visual(&'a Grounded<VisualRecord>),
}

impl<'a> RecordView<'a> {
    pub fn tool_id(&self) -> ToolId {
        match self {
            RecordView::Gst(_) => ToolId::Gst,
            RecordView::Ifsc(_) => ToolId::Ifsc,
            RecordView::Instagram(_) => ToolId::Instagram,
            RecordView::News(_) => ToolId::News,
            RecordView::Visual(_) => ToolId::Visual,
        }
    }

    pub fn sources(&self) -> &'a [GroundingSource] {
        match self {
            RecordView::Gst(r) => &r.sources,
            RecordView::Ifsc(r) => &r.sources,
            RecordView::Instagram(r) => &r.sources,
            RecordView::News(r) => &r.sources,
            RecordView::Visual(r) => &r.sources,
        }
    }
}

/// Most recent record per tool
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSlots {
    gst: Option<Grounded<CompanyRecord>>,
    ifsc: Option<Grounded<BranchRecord>>,
    instagram: Option<Grounded<ProfileRecord>>,
    news: Option<Grounded<TrendDigest>>,
    visual: Option<Grounded<VisualRecord>>,
}

impl ResultSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `record` in its tool's slot, replacing what was there.
    pub fn store(&mut self, record: ToolRecord) {
        match record {
            ToolRecord::Gst(r) => self.gst = Some(r),
            ToolRecord::Ifsc(r) => self.ifsc = Some(r),
            ToolRecord::Instagram(r) => self.instagram = Some(r),
            ToolRecord::News(r) => self.news = Some(r),
            ToolRecord::Visual(r) => self.visual = Some(r),
        }
    }

    /// Empty the slot for `tool`.
    pub fn clear(&mut self, tool: ToolId) {
        match tool {
            ToolId::Gst => self.gst = None,
            ToolId::Ifsc => self.ifsc = None,
            ToolId::Instagram => self.instagram = None,
            ToolId::News => self.news = None,
            ToolId::Visual => self.visual = None,
        }
    }

    pub fn get(&self, tool: ToolId) -> Option<RecordView<'_>> {
        match tool {
            ToolId::Gst => self.gst.as_ref().map(RecordView::Gst),
            ToolId::Ifsc => self.ifsc.as_ref().map(RecordView::Ifsc),
            ToolId::Instagram => self.instagram.as_ref().map(RecordView::Instagram),
            ToolId::News => self.news.as_ref().map(RecordView::News),
            ToolId::Visual => self.visual.as_ref().map(RecordView::Visual),
        }
    }

    pub fn contains(&self, tool: ToolId) -> bool {
        self.get(tool).is_some()
    }

    /// Stored visual record, if any.
    pub fn visual(&self) -> Option<&VisualRecord> {
        self.visual.as_ref().map(|g| &g.data)
    }
}
