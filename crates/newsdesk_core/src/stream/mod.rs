//! Live stream plumbing shared by collaborators and the aggregator.
//!
//! # Responsibility
//! - Define the `LiveStream` shape every collaborator exposes.
//! - Provide the combine-latest and fuse-on-error combinators.
//!
//! # Invariants
//! - An `Err` item is terminal; combinators end right after forwarding it.
//! - Combinators hold no threads and do all work inside `poll_next`.

use crate::error::UpstreamError;
use futures::stream::BoxStream;

mod combine_latest;
mod stop_after_error;

pub use combine_latest::{combine_latest, CombineLatest};
pub use stop_after_error::{stop_after_error, StopAfterError};

/// Push-based live value: current state first, then one item per change.
pub type LiveStream<T> = BoxStream<'static, Result<T, UpstreamError>>;
