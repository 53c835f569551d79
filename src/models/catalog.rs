use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const YEARS: &[&str] = &["1st Year", "2nd Year", "3rd Year", "4th Year", "Graduate"];

pub const BRANCHES: &[&str] = &[
    "Computer Science",
    "Electronics",
    "Mechanical",
    "Civil",
    "Chemical",
    "Electrical",
    "Information Technology",
    "Biotechnology",
    "Mathematics",
    "Physics",
    "Chemistry",
];

pub const SUBJECTS: &[&str] = &[
    "Mathematics",
    "Physics",
    "Chemistry",
    "Programming",
    "Data Structures",
    "Algorithms",
    "Database Systems",
    "Operating Systems",
    "Computer Networks",
    "Machine Learning",
    "Web Development",
    "Mobile Development",
    "Statistics",
    "Linear Algebra",
    "Calculus",
    "Discrete Mathematics",
    "Software Engineering",
];

pub const GROUP_SIZES: &[&str] = &["1-on-1", "2-3", "4-6"];
pub const SESSION_PREFERENCES: &[&str] = &["Regular weekly", "On-demand"];
pub const LOCATIONS: &[&str] = &["Library", "LRC", "Hostel"];
pub const BRANCH_PREFERENCES: &[&str] = &["Same branch only", "Open to cross-branch"];

/// How a student prefers to run a study session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StudyStyle {
    Quiet,
    Interactive,
    ProblemSolving,
    Mixed,
}

impl StudyStyle {
    pub const ALL: [StudyStyle; 4] = [
        StudyStyle::Quiet,
        StudyStyle::Interactive,
        StudyStyle::ProblemSolving,
        StudyStyle::Mixed,
    ];

    /// Label shown in the form and used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            StudyStyle::Quiet => "Quiet",
            StudyStyle::Interactive => "Interactive",
            StudyStyle::ProblemSolving => "Problem-solving",
            StudyStyle::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for StudyStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown study style: {0:?}")]
pub struct UnknownStudyStyle(pub String);

impl FromStr for StudyStyle {
    type Err = UnknownStudyStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StudyStyle::ALL
            .iter()
            .copied()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| UnknownStudyStyle(s.to_string()))
    }
}

impl Serialize for StudyStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StudyStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Every option list the matchmaking form offers
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub years: &'static [&'static str],
    pub branches: &'static [&'static str],
    pub subjects: &'static [&'static str],
    pub study_styles: [StudyStyle; 4],
    pub group_sizes: &'static [&'static str],
    pub session_preferences: &'static [&'static str],
    pub locations: &'static [&'static str],
    pub branch_preferences: &'static [&'static str],
}

impl Catalog {
    pub fn get() -> Self {
        Self {
            years: YEARS,
            branches: BRANCHES,
            subjects: SUBJECTS,
            study_styles: StudyStyle::ALL,
            group_sizes: GROUP_SIZES,
            session_preferences: SESSION_PREFERENCES,
            locations: LOCATIONS,
            branch_preferences: BRANCH_PREFERENCES,
        }
    }
}
