//! Core use-case services.
//!
//! # Responsibility
//! - Combine collaborator streams into use-case level live values.
//! - Keep presentation layers decoupled from index and preference storage.

pub mod search_service;
