//! Study Match - study partner matching service
//!
//! Backs the Study Match landing site: accepts a student's academic profile
//! and answers with a short list of generated study partner matches.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{MatchGenerator, Roster, RosterError};
pub use error::ApiError;
pub use models::{Profile, MatchResult, StudyStyle, FindMatchesResponse};
