// file: src/models/listing.rs
// description: normalized listing view model produced for rendering
// reference: internal data structures

use crate::models::{Platform, Section};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One bullet line split into an optional label and its body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub body: String,
}

impl BulletEntry {
    pub fn new(label: Option<String>, body: impl Into<String>) -> Self {
        Self {
            label,
            body: body.into(),
        }
    }

    /// Renders the entry back into a single bullet line.
    pub fn to_line(&self) -> String {
        match &self.label {
            Some(label) => format!("{} - {}", label, self.body),
            None => self.body.clone(),
        }
    }
}

/// Keyword terms with their short-tail / long-tail partition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet {
    pub all: Vec<String>,
    pub short_tail: Vec<String>,
    pub long_tail: Vec<String>,
}

impl KeywordSet {
    /// Terms with more than two words are long-tail, the rest short-tail.
    pub fn classify(terms: Vec<String>) -> Self {
        let (long_tail, short_tail): (Vec<String>, Vec<String>) = terms
            .iter()
            .cloned()
            .partition(|term| Self::is_long_tail(term));

        Self {
            all: terms,
            short_tail,
            long_tail,
        }
    }

    pub fn is_long_tail(term: &str) -> bool {
        term.split_whitespace().count() > 2
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Good,
    Warning,
    Error,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Good => "good",
            CheckStatus::Warning => "warning",
            CheckStatus::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub check_name: String,
    pub status: CheckStatus,
    pub message: String,
    pub detail: String,
}

impl ValidationResult {
    pub fn new(
        check_name: impl Into<String>,
        status: CheckStatus,
        message: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            check_name: check_name.into(),
            status,
            message: message.into(),
            detail: detail.into(),
        }
    }

    pub fn is_good(&self) -> bool {
        self.status == CheckStatus::Good
    }
}

/// Typed view of one listing record for one platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedListing {
    pub platform: Platform,
    pub title: String,
    pub bullets: Vec<BulletEntry>,
    pub keywords: KeywordSet,
    pub backend_keywords: Vec<String>,
    pub tags: Vec<String>,
    pub description: String,
    pub short_description: String,
    pub text_blocks: BTreeMap<String, String>,
    pub faqs: Vec<FaqEntry>,
    pub video_scripts: Vec<String>,
    pub sections: BTreeMap<String, Section>,
    pub validation: Vec<ValidationResult>,
    pub limit_findings: Vec<ValidationResult>,
    pub score: u8,
}

impl NormalizedListing {
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn text_block(&self, name: &str) -> Option<&str> {
        self.text_blocks.get(name).map(String::as_str)
    }

    /// Count of validation checks and limit findings that are not `good`.
    pub fn issue_count(&self) -> usize {
        self.validation
            .iter()
            .chain(self.limit_findings.iter())
            .filter(|r| !r.is_good())
            .count()
    }
}
