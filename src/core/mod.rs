// Core algorithm exports
pub mod generator;
pub mod roster;
pub mod scoring;

pub use generator::{MatchGenerator, MAX_MATCHES, MIN_MATCHES, MAX_COMMON_SUBJECTS};
pub use roster::{Roster, RosterError};
pub use scoring::{adjust_similarity, SIMILARITY_CAP};
