use serde::{Deserialize, Serialize};

/// An anchor element extracted from the loaded page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Visible text of the anchor (whitespace-collapsed)
    pub display_text: String,

    /// Target of the anchor, if the attribute is present at all
    pub href: Option<String>,
}

impl Link {
    /// Create a new link record
    pub fn new(display_text: impl Into<String>, href: Option<String>) -> Self {
        Self {
            display_text: display_text.into(),
            href,
        }
    }
}

/// Outcome of a reachability check against a single URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionResult {
    /// The URL answered with an acceptable status code
    Reachable,
    /// The URL could not be reached, or answered with an unacceptable status
    Unreachable,
    /// The URL could not be parsed; no request was attempted
    Malformed,
}

/// A single finding from one of the page checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Diagnostic {
    /// An anchor with a missing or empty href attribute
    MalformedLink { display_text: String },

    /// A same-origin link that failed its reachability check
    UnreachableLink {
        display_text: String,
        href: String,
        /// Observed HTTP status, if a response came back at all
        status: Option<u16>,
    },

    /// The page title differs from the expected title
    TitleMismatch {
        expected: String,
        actual: String,
        /// First character position at which the titles differ
        position: usize,
    },

    /// A check could not run because an expected element was missing
    PageStructure { check: String, detail: String },
}

/// Report for one audit pass over the loaded page
///
/// Diagnostics are kept in discovery order: link findings first, ordered by
/// the position of the anchor in the document, followed by title and page
/// structure findings in the order the checks ran.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditReport {
    /// Number of anchors discovered before any filtering
    pub total_links: usize,

    /// Findings collected during this pass
    pub diagnostics: Vec<Diagnostic>,
}

impl AuditReport {
    /// Create a new report
    pub fn new(total_links: usize, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            total_links,
            diagnostics,
        }
    }

    /// Whether the pass finished without any findings
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
