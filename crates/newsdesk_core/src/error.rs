//! Failure taxonomy for live collaborator streams.
//!
//! # Responsibility
//! - Name the upstream source that terminated abnormally.
//! - Carry the failure unchanged from collaborator to consumer.
//!
//! # Invariants
//! - Aggregation code never constructs an `UpstreamError` itself; it only
//!   forwards values produced by collaborators.
//! - An `Err` item is the last item of any live stream.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Abnormal termination reported by a live collaborator stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    /// The content index stopped delivering counts or matches.
    ContentIndex(String),
    /// The preference store stopped delivering snapshots.
    Preferences(String),
}

impl UpstreamError {
    /// Stable short name of the failing collaborator, used in log events.
    pub fn source_name(&self) -> &'static str {
        match self {
            Self::ContentIndex(_) => "content_index",
            Self::Preferences(_) => "preferences",
        }
    }
}

impl Display for UpstreamError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ContentIndex(message) => write!(f, "content index stream failed: {message}"),
            Self::Preferences(message) => {
                write!(f, "user preference stream failed: {message}")
            }
        }
    }
}

impl Error for UpstreamError {}
