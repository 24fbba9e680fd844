//! Fehlertypen der Engine.
//!
//! Aufbau- und Index-Fehler werden sofort und synchron gemeldet,
//! Gesten-Verarbeitung schlägt dagegen nie fehl.

use thiserror::Error;

/// Fehler beim Aufbau der Geometrie oder beim Setzen eines Index
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptionsError {
    /// Ungültige Eingabe beim Aufbau (leere Optionsliste, keine Breite, …)
    #[error("Ungültiges Argument: {0}")]
    InvalidArgument(String),

    /// Index außerhalb von `[0, count - 1]`
    #[error("Index {index} außerhalb des gültigen Bereichs (Anzahl Optionen: {count})")]
    OutOfRange { index: usize, count: usize },
}

impl OptionsError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Result-Alias für Engine-Operationen
pub type OptionsResult<T> = Result<T, OptionsError>;
