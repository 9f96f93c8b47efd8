//! Grounding sources

use serde::{Deserialize, Serialize};

/// Citation attached by a service to substantiate a result
///
/// Either half may be missing. Order follows the service response and
/// duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl GroundingSource {
    pub fn new(title: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            uri: Some(uri.into()),
        }
    }

    /// Sources without a URI have nothing to link to and are not displayed.
    pub fn is_linkable(&self) -> bool {
        self.uri.as_deref().is_some_and(|u| !u.is_empty())
    }
}

/// A record plus its ordered citations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grounded<T> {
    pub data: T,
    pub sources: Vec<GroundingSource>,
}

impl<T> Grounded<T> {
    pub fn new(data: T, sources: Vec<GroundingSource>) -> Self {
        Self { data, sources }
    }

    /// Wrap a record that carries no citations.
    pub fn ungrounded(data: T) -> Self {
        Self {
            data,
            sources: Vec::new(),
        }
    }

    /// Transform the record, keeping the citations.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Grounded<U> {
        Grounded {
            data: f(self.data),
            sources: self.sources,
        }
    }
}
