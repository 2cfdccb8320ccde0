//! Character entity - the single sheet under construction
//!
//! A character is an immutable value: the form controller owns one copy and
//! replaces it wholesale on each edit. The core never holds live state.

use serde::{Deserialize, Serialize};

use crate::point_buy;
use crate::value_objects::{Ability, AbilityScore, AbilityScores};

/// Default name for a freshly created character.
const DEFAULT_NAME: &str = "Hero";

/// A character being built on the sheet
///
/// The name is deliberately unconstrained (an empty string is a valid sheet
/// title); the scores are valid by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    name: String,
    scores: AbilityScores,
}

impl Character {
    /// Create a character with the given name and every score at the baseline.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scores: AbilityScores::new(),
        }
    }

    /// Returns the character's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the character's ability scores.
    pub fn scores(&self) -> &AbilityScores {
        &self.scores
    }

    /// Create a copy with a different name.
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    /// Create a copy with one ability's score replaced.
    pub fn with_score(self, ability: Ability, score: AbilityScore) -> Self {
        Self {
            scores: self.scores.with(ability, score),
            ..self
        }
    }

    /// Points left in the 27-point allowance for this character's scores.
    pub fn points_remaining(&self) -> i32 {
        point_buy::points_remaining(&self.scores)
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}
