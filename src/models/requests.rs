use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;
use crate::models::catalog::StudyStyle;

/// Academic profile submitted by the matchmaking form
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[validate(length(min = 1, message = "year is required"))]
    #[serde(default, deserialize_with = "null_as_empty")]
    pub year: String,
    #[validate(length(min = 1, message = "branch is required"))]
    #[serde(default, deserialize_with = "null_as_empty")]
    pub branch: String,
    #[serde(default)]
    pub strong_subjects: Vec<String>,
    #[serde(default)]
    pub help_subjects: Vec<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub study_style: Option<StudyStyle>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub group_size: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub time_slots: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub session_preference: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub branch_preference: String,
}

impl Profile {
    /// Collapse repeated subjects, keeping the first occurrence of each
    pub fn normalized(mut self) -> Self {
        dedup_in_order(&mut self.strong_subjects);
        dedup_in_order(&mut self.help_subjects);
        self
    }

    /// Number of distinct subjects across both lists
    pub fn subject_count(&self) -> usize {
        let mut seen: Vec<&String> = Vec::new();
        for subject in self.strong_subjects.iter().chain(&self.help_subjects) {
            if !seen.contains(&subject) {
                seen.push(subject);
            }
        }
        seen.len()
    }
}

fn dedup_in_order(subjects: &mut Vec<String>) {
    let mut kept: Vec<String> = Vec::with_capacity(subjects.len());
    for subject in subjects.drain(..) {
        if !kept.contains(&subject) {
            kept.push(subject);
        }
    }
    *subjects = kept;
}

/// Treat an explicit `null` like a missing field
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// The form posts "" for an unselected study style
fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<StudyStyle>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.is_empty() => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
