use rand::Rng;
use std::sync::Arc;
use thiserror::Error;

use crate::core::generator::MAX_MATCHES;

const DEFAULT_NAMES: [&str; 16] = [
    "Alex Chen",
    "Sarah Johnson",
    "Michael Rodriguez",
    "Emily Wang",
    "David Kim",
    "Jessica Brown",
    "Ryan Patel",
    "Amanda Davis",
    "Kevin Liu",
    "Rachel Green",
    "Jason Martinez",
    "Lisa Thompson",
    "Daniel Lee",
    "Maria Garcia",
    "Chris Wilson",
    "Anna Singh",
];

/// Errors raised when building a roster from configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("roster needs at least {required} names, got {actual}")]
    TooSmall { required: usize, actual: usize },

    #[error("roster contains an empty name")]
    EmptyName,

    #[error("roster contains duplicate name: {0}")]
    Duplicate(String),
}

/// Fixed list of display names handed out to fabricated matches
#[derive(Debug, Clone)]
pub struct Roster {
    names: Arc<[String]>,
}

impl Roster {
    pub fn new(names: Vec<String>) -> Result<Self, RosterError> {
        let mut seen: Vec<&str> = Vec::with_capacity(names.len());
        for name in &names {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                return Err(RosterError::EmptyName);
            }
            if seen.contains(&trimmed) {
                return Err(RosterError::Duplicate(trimmed.to_string()));
            }
            seen.push(trimmed);
        }

        if seen.len() < MAX_MATCHES {
            return Err(RosterError::TooSmall {
                required: MAX_MATCHES,
                actual: seen.len(),
            });
        }

        let names: Vec<String> = seen.into_iter().map(str::to_string).collect();
        Ok(Self { names: names.into() })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Draw `count` distinct names, redrawing whenever a name repeats
    pub fn pick_distinct<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<String> {
        let count = count.min(self.names.len());
        let mut picked: Vec<String> = Vec::with_capacity(count);

        while picked.len() < count {
            let name = &self.names[rng.gen_range(0..self.names.len())];
            if !picked.contains(name) {
                picked.push(name.clone());
            }
        }

        picked
    }
}

impl Default for Roster {
    fn default() -> Self {
        let names: Vec<String> = DEFAULT_NAMES.iter().map(|n| n.to_string()).collect();
        Self { names: names.into() }
    }
}
