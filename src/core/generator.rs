use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::roster::Roster;
use crate::core::scoring::{adjust_similarity, BASE_SIMILARITY_MAX, BASE_SIMILARITY_MIN};
use crate::models::{MatchResult, Profile, StudyStyle};

pub const MIN_MATCHES: usize = 3;
pub const MAX_MATCHES: usize = 5;

/// Most subjects shown on a single match
pub const MAX_COMMON_SUBJECTS: usize = 4;

const STRONG_SUBJECT_SLOTS: usize = 3;
const HELP_SUBJECT_SLOTS: usize = 2;
const STRONG_SUBJECT_CHANCE: f64 = 0.7;
const HELP_SUBJECT_CHANCE: f64 = 0.6;
const SAME_STYLE_CHANCE: f64 = 0.6;

/// Produces plausible-looking study partner matches for a profile
///
/// Nothing here measures real compatibility: names come from the roster,
/// scores and shared subjects are drawn from the random source. Passing a
/// seeded RNG makes the output reproducible.
///
/// # Steps per match
/// 1. Distinct roster name
/// 2. Base similarity in [70, 100)
/// 3. Shared subjects sampled from the requester's own lists
/// 4. Study style, biased towards the requester's
/// 5. Bonuses and cap from [`adjust_similarity`]
#[derive(Debug, Clone, Default)]
pub struct MatchGenerator {
    roster: Roster,
}

impl MatchGenerator {
    pub fn new(roster: Roster) -> Self {
        Self { roster }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Generate 3 to 5 matches sorted by similarity, highest first
    pub fn generate<R: Rng + ?Sized>(&self, profile: &Profile, rng: &mut R) -> Vec<MatchResult> {
        let count = rng.gen_range(MIN_MATCHES..=MAX_MATCHES);
        let names = self.roster.pick_distinct(rng, count);

        let mut matches: Vec<MatchResult> = names
            .into_iter()
            .map(|name| generate_one(name, profile, rng))
            .collect();

        // sort_by is stable, equal scores keep generation order
        matches.sort_by(|a, b| b.similarity.cmp(&a.similarity));

        matches
    }
}

fn generate_one<R: Rng + ?Sized>(name: String, profile: &Profile, rng: &mut R) -> MatchResult {
    let base = rng.gen_range(BASE_SIMILARITY_MIN..BASE_SIMILARITY_MAX);
    let mut common_subjects = pick_common_subjects(profile, rng);
    let study_style = pick_study_style(profile.study_style, rng);

    let style_matches = profile.study_style == Some(study_style);
    let similarity = adjust_similarity(base, style_matches, common_subjects.len());

    common_subjects.truncate(MAX_COMMON_SUBJECTS);

    MatchResult {
        name,
        similarity,
        common_subjects,
        study_style,
    }
}

/// Sample shared subjects from the requester's strong and help lists
///
/// Each slot draws a random entry from its list, so the same subject can
/// come up twice and is only kept once. Falls back to the first strong
/// subject when every draw missed.
pub fn pick_common_subjects<R: Rng + ?Sized>(profile: &Profile, rng: &mut R) -> Vec<String> {
    let mut common: Vec<String> = Vec::new();

    sample_slots(
        &profile.strong_subjects,
        STRONG_SUBJECT_SLOTS,
        STRONG_SUBJECT_CHANCE,
        &mut common,
        rng,
    );
    sample_slots(
        &profile.help_subjects,
        HELP_SUBJECT_SLOTS,
        HELP_SUBJECT_CHANCE,
        &mut common,
        rng,
    );

    if common.is_empty() {
        if let Some(first) = profile.strong_subjects.first() {
            common.push(first.clone());
        }
    }

    common
}

fn sample_slots<R: Rng + ?Sized>(
    subjects: &[String],
    max_slots: usize,
    chance: f64,
    common: &mut Vec<String>,
    rng: &mut R,
) {
    for _ in 0..subjects.len().min(max_slots) {
        if !rng.gen_bool(chance) {
            continue;
        }
        if let Some(subject) = subjects.choose(rng) {
            if !common.contains(subject) {
                common.push(subject.clone());
            }
        }
    }
}

/// Keep the requester's style most of the time, otherwise any style
pub fn pick_study_style<R: Rng + ?Sized>(preferred: Option<StudyStyle>, rng: &mut R) -> StudyStyle {
    if rng.gen_bool(SAME_STYLE_CHANCE) {
        if let Some(style) = preferred {
            return style;
        }
    }
    random_style(rng)
}

fn random_style<R: Rng + ?Sized>(rng: &mut R) -> StudyStyle {
    StudyStyle::ALL[rng.gen_range(0..StudyStyle::ALL.len())]
}
