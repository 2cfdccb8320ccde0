//! Sheet Session Service
//!
//! Encapsulates the form controller's business rules:
//! - Score edits are validated before they touch the character
//! - The budget is recomputed explicitly after every change
//! - Export is allowed only when the 27-point allowance is spent exactly
//!
//! The session owns the single mutable character for the lifetime of the
//! form; every edit replaces the value wholesale. The core functions it
//! calls into hold no state of their own.

use std::path::PathBuf;

use thiserror::Error;

use herosheet_domain::{Ability, AbilityScore, Character, DomainError};
use herosheet_export::{ExportError, SheetExportPort};

/// Errors surfaced by session operations
#[derive(Debug, Error)]
pub enum SessionError {
    /// The point allowance is not spent exactly; export stays disabled
    /// for underspend and overspend alike.
    #[error("Point budget must be spent exactly, {remaining} points remaining")]
    BudgetNotSpent { remaining: i32 },

    /// A score edit was rejected by the domain rules.
    #[error(transparent)]
    Score(#[from] DomainError),

    /// The exporter failed to produce or publish the document.
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Form session holding the character under construction.
#[derive(Debug, Clone, Default)]
pub struct SheetSession {
    character: Character,
}

impl SheetSession {
    /// Start a session with the default character (name "Hero", every score
    /// at the baseline, the full 27-point allowance unspent).
    pub fn new() -> Self {
        Self::default()
    }

    /// The character as currently edited.
    pub fn character(&self) -> &Character {
        &self.character
    }

    /// Replace the character's name. Names are unconstrained; empty is valid.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.character = self.character.clone().with_name(name);
    }

    /// Replace one ability's score, returning the recomputed remaining
    /// points.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ScoreOutOfRange` for values outside [8, 15];
    /// the character is left unchanged.
    pub fn set_score(&mut self, ability: Ability, value: i32) -> Result<i32, DomainError> {
        let score = AbilityScore::new(value)?;
        self.character = self.character.clone().with_score(ability, score);
        Ok(self.points_remaining())
    }

    /// Points left in the allowance; recomputed from scratch on every call.
    pub fn points_remaining(&self) -> i32 {
        self.character.points_remaining()
    }

    /// Whether the sheet may be exported (exactly zero points remaining).
    pub fn can_export(&self) -> bool {
        self.points_remaining() == 0
    }

    /// Export the sheet through the given port.
    ///
    /// The gate lives here, not in the exporter: the port is never invoked
    /// unless the budget is spent exactly.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::BudgetNotSpent` when points remain (or the
    /// allowance is overspent), or the exporter's error unchanged.
    pub fn export(&self, exporter: &dyn SheetExportPort) -> Result<PathBuf, SessionError> {
        let remaining = self.points_remaining();
        if remaining != 0 {
            return Err(SessionError::BudgetNotSpent { remaining });
        }
        Ok(exporter.export(&self.character)?)
    }
}
