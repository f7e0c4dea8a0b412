//! Domain model for indexable content and per-user personalization.
//!
//! # Responsibility
//! - Define the content records supplied by the index (`Topic`,
//!   `NewsResource`).
//! - Define the preference snapshot and the derived, user-enriched views.
//!
//! # Invariants
//! - Every content record is identified by a stable, non-nil UUID.
//! - Enrichment wraps content records and never mutates them.
//! - Derived flags are computed from exactly one preference snapshot.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod news;
pub mod topic;
pub mod user_data;
pub mod user_search;

/// Validation failure for content records created outside the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelValidationError {
    /// The nil UUID is reserved and never identifies a record.
    NilId { entity: &'static str },
}

impl Display for ModelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId { entity } => write!(f, "{entity} id must not be the nil uuid"),
        }
    }
}

impl Error for ModelValidationError {}
