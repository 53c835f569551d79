// Model exports
pub mod catalog;
pub mod domain;
pub mod requests;
pub mod responses;

pub use catalog::{Catalog, StudyStyle, UnknownStudyStyle};
pub use domain::MatchResult;
pub use requests::Profile;
pub use responses::{FindMatchesResponse, HealthResponse, ErrorResponse};
