use serde::{Deserialize, Serialize};
use crate::models::catalog::StudyStyle;

/// One fabricated study-partner recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub name: String,
    pub similarity: u8,
    pub common_subjects: Vec<String>,
    pub study_style: StudyStyle,
}
