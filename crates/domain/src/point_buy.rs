//! Point-buy budget calculator.
//!
//! Implements the fixed-budget spending rule: every character starts with 27
//! points, scores start at the free baseline of 8, and raising a score costs
//! points according to a non-linear table. The budget is re-derived from
//! scratch on every call; nothing here holds state.

use crate::value_objects::{AbilityScore, AbilityScores};

/// Total points available to spend across the five abilities.
pub const POINT_ALLOWANCE: i32 = 27;

/// Cumulative cost of raising a score from the baseline of 8.
/// Index is score - 8 (so score 8 = index 0).
const SCORE_COSTS: [i32; 8] = [
    0, // 8
    1, // 9
    2, // 10
    3, // 11
    4, // 12
    5, // 13
    7, // 14
    9, // 15
];

/// Total cost of a single score.
///
/// Total over its input: `AbilityScore` cannot hold an out-of-range value,
/// so the table lookup cannot miss.
pub fn score_cost(score: AbilityScore) -> i32 {
    SCORE_COSTS[(score.value() - AbilityScore::MIN) as usize]
}

/// Points left after buying all five scores.
///
/// Negative values mean the allocation overspends the allowance; they are
/// valid results (shown to the player) but block export.
pub fn points_remaining(scores: &AbilityScores) -> i32 {
    let spent: i32 = scores.iter().map(|(_, score)| score_cost(score)).sum();
    POINT_ALLOWANCE - spent
}

/// True when the allowance is spent exactly.
///
/// Both underspend and overspend leave the budget unbalanced; only an exact
/// zero makes the sheet exportable.
pub fn is_budget_spent(scores: &AbilityScores) -> bool {
    points_remaining(scores) == 0
}
