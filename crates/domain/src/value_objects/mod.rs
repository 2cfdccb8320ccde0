pub mod ability;

pub use ability::{Ability, AbilityScore, AbilityScores};
