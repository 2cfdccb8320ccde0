pub mod entities;
pub mod error;
pub mod point_buy;
pub mod value_objects;

pub use entities::Character;
pub use error::DomainError;
pub use point_buy::{is_budget_spent, points_remaining, score_cost, POINT_ALLOWANCE};
pub use value_objects::{Ability, AbilityScore, AbilityScores};
