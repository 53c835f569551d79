/// Lowest base similarity a match can draw
pub const BASE_SIMILARITY_MIN: u8 = 70;

/// Exclusive upper bound of the base similarity draw
pub const BASE_SIMILARITY_MAX: u8 = 100;

/// Highest similarity ever reported
pub const SIMILARITY_CAP: u8 = 98;

const STYLE_BONUS: u8 = 5;
const THREE_SUBJECT_BONUS: u8 = 10;
const TWO_SUBJECT_BONUS: u8 = 5;

/// Apply the similarity bonuses to a base score
///
/// Bonuses stack:
/// ```text
/// +5   chosen study style equals the requester's
/// +10  three or more shared subjects
/// +5   two or more shared subjects
/// ```
/// The result is capped at 98.
pub fn adjust_similarity(base: u8, style_matches: bool, shared_subjects: usize) -> u8 {
    let mut similarity = base;

    if style_matches {
        similarity = similarity.saturating_add(STYLE_BONUS);
    }
    if shared_subjects >= 3 {
        similarity = similarity.saturating_add(THREE_SUBJECT_BONUS);
    }
    if shared_subjects >= 2 {
        similarity = similarity.saturating_add(TWO_SUBJECT_BONUS);
    }

    similarity.min(SIMILARITY_CAP)
}
