//! Ability value objects
//!
//! These types ensure scores are valid by construction: a score outside the
//! point-buy range [8, 15] cannot be represented, so downstream rules
//! (cost lookup, budget math) are total over their inputs.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// The five abilities tracked on a character sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ability {
    Strength,
    Dexterity,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    /// All abilities in canonical sheet order.
    pub const ALL: [Ability; 5] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    /// Display label as printed on the exported sheet.
    pub fn label(&self) -> &'static str {
        match self {
            Ability::Strength => "Strength",
            Ability::Dexterity => "Dexterity",
            Ability::Intelligence => "Intelligence",
            Ability::Wisdom => "Wisdom",
            Ability::Charisma => "Charisma",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A validated ability score, guaranteed within the point-buy range [8, 15].
///
/// Out-of-range input is rejected at construction with
/// [`DomainError::ScoreOutOfRange`] rather than silently costed as zero.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i32", into = "i32")]
pub struct AbilityScore(i32);

impl AbilityScore {
    /// Lowest purchasable score (the free baseline).
    pub const MIN: i32 = 8;

    /// Highest purchasable score.
    pub const MAX: i32 = 15;

    /// Create a new validated ability score.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ScoreOutOfRange` if the value is outside [8, 15].
    pub fn new(value: i32) -> Result<Self, DomainError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DomainError::score_out_of_range(value));
        }
        Ok(Self(value))
    }

    /// Returns the raw score value.
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl Default for AbilityScore {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for AbilityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for AbilityScore {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AbilityScore> for i32 {
    fn from(score: AbilityScore) -> i32 {
        score.0
    }
}

/// The five ability scores of a character as one immutable value.
///
/// Edits produce modified copies via [`AbilityScores::with`]; callers replace
/// the whole value rather than mutating in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityScores {
    strength: AbilityScore,
    dexterity: AbilityScore,
    intelligence: AbilityScore,
    wisdom: AbilityScore,
    charisma: AbilityScore,
}

impl AbilityScores {
    /// Create a score block with every ability at the baseline of 8.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the score for one ability.
    pub fn get(&self, ability: Ability) -> AbilityScore {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    /// Create a copy with one ability's score replaced.
    pub fn with(self, ability: Ability, score: AbilityScore) -> Self {
        let mut scores = self;
        match ability {
            Ability::Strength => scores.strength = score,
            Ability::Dexterity => scores.dexterity = score,
            Ability::Intelligence => scores.intelligence = score,
            Ability::Wisdom => scores.wisdom = score,
            Ability::Charisma => scores.charisma = score,
        }
        scores
    }

    /// Iterate over the scores in canonical sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Ability, AbilityScore)> + '_ {
        Ability::ALL.into_iter().map(move |a| (a, self.get(a)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod ability {
        use super::*;

        #[test]
        fn canonical_order_matches_sheet() {
            let labels: Vec<&str> = Ability::ALL.iter().map(|a| a.label()).collect();
            assert_eq!(
                labels,
                vec![
                    "Strength",
                    "Dexterity",
                    "Intelligence",
                    "Wisdom",
                    "Charisma"
                ]
            );
        }

        #[test]
        fn display_uses_label() {
            assert_eq!(Ability::Wisdom.to_string(), "Wisdom");
        }
    }

    mod ability_score {
        use super::*;

        #[test]
        fn valid_scores_accepted() {
            for value in 8..=15 {
                let score = AbilityScore::new(value).unwrap();
                assert_eq!(score.value(), value);
            }
        }

        #[test]
        fn below_minimum_rejected() {
            let result = AbilityScore::new(7);
            assert!(result.is_err());
            let err = result.unwrap_err();
            assert!(matches!(err, DomainError::ScoreOutOfRange { score: 7 }));
        }

        #[test]
        fn above_maximum_rejected() {
            let result = AbilityScore::new(16);
            assert!(matches!(
                result.unwrap_err(),
                DomainError::ScoreOutOfRange { score: 16 }
            ));
        }

        #[test]
        fn default_is_baseline() {
            assert_eq!(AbilityScore::default().value(), 8);
        }

        #[test]
        fn try_from_i32() {
            let score: AbilityScore = 12.try_into().unwrap();
            assert_eq!(score.value(), 12);
        }

        #[test]
        fn into_i32() {
            let score = AbilityScore::new(15).unwrap();
            let raw: i32 = score.into();
            assert_eq!(raw, 15);
        }

        #[test]
        fn serde_rejects_out_of_range() {
            let result: Result<AbilityScore, _> = serde_json::from_str("42");
            assert!(result.is_err());
        }

        #[test]
        fn serde_round_trip() {
            let score = AbilityScore::new(13).unwrap();
            let json = serde_json::to_string(&score).unwrap();
            assert_eq!(json, "13");
            let back: AbilityScore = serde_json::from_str(&json).unwrap();
            assert_eq!(back, score);
        }
    }

    mod ability_scores {
        use super::*;

        #[test]
        fn default_is_all_baseline() {
            let scores = AbilityScores::new();
            for ability in Ability::ALL {
                assert_eq!(scores.get(ability).value(), 8);
            }
        }

        #[test]
        fn with_replaces_single_score() {
            let scores =
                AbilityScores::new().with(Ability::Dexterity, AbilityScore::new(14).unwrap());
            assert_eq!(scores.get(Ability::Dexterity).value(), 14);
            assert_eq!(scores.get(Ability::Strength).value(), 8);
        }

        #[test]
        fn iter_follows_canonical_order() {
            let scores = AbilityScores::new().with(Ability::Wisdom, AbilityScore::new(10).unwrap());
            let collected: Vec<(Ability, i32)> =
                scores.iter().map(|(a, s)| (a, s.value())).collect();
            assert_eq!(
                collected,
                vec![
                    (Ability::Strength, 8),
                    (Ability::Dexterity, 8),
                    (Ability::Intelligence, 8),
                    (Ability::Wisdom, 10),
                    (Ability::Charisma, 8),
                ]
            );
        }
    }
}
