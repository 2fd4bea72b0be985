//! # Calculator Forms
//!
//! Text-field state for each calculator and the session that decides when a
//! result is (re)derived.
//!
//! A form holds raw field text exactly as typed. [`CalculatorForm::derive`]
//! runs parse → validate → calculate and either returns a fresh result or the
//! first error; nothing partial ever comes back.
//!
//! ## Recompute modes
//!
//! - [`RecomputeMode::Live`] - the result is re-derived on every read, so it
//!   always matches the current fields (length, circle area, circumference).
//! - [`RecomputeMode::OnDemand`] - the result is computed only by
//!   [`FormSession::calculate`] and is cleared by any later edit (bend and
//!   flat-pattern calculators).
//!
//! ```text
//! OnDemand:  Idle ──edit──▶ Idle
//!            Idle ──calculate(valid)──▶ Result ──edit──▶ Idle
//!            Idle ──calculate(invalid)──▶ Idle (+ message)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use calc_core::forms::{BendForm, FormSession, SessionState};
//!
//! let mut session = FormSession::new(BendForm::default());
//! session.edit(|f| {
//!     f.angle_deg = "90".into();
//!     f.inside_radius = "1".into();
//!     f.thickness = "1".into();
//! });
//! assert_eq!(session.state(), SessionState::Idle);
//!
//! let result = session.calculate().unwrap();
//! assert_eq!(result.headline().value, "2.199");
//!
//! session.edit(|f| f.thickness = "2".into());
//! assert_eq!(session.state(), SessionState::Idle);
//! ```

mod live;
mod sheet_metal;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::numeric::parse_numeric_input;
use crate::units::{convert_dimension, UnitSystem};

pub use live::{CircleAreaForm, CircumferenceForm, LengthConverterForm};
pub use sheet_metal::{BendForm, FlatPatternForm, SegmentField, SegmentFields};

/// When a form's result is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecomputeMode {
    /// Re-derived from the current fields on every read
    Live,
    /// Derived only on an explicit calculate; cleared by edits
    OnDemand,
}

/// Observable state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No current result
    Idle,
    /// A result matching the current fields is available
    Result,
}

/// A calculator's editable fields.
pub trait CalculatorForm {
    /// Result produced by a successful derivation
    type Output: Clone + std::fmt::Debug;

    /// Mode used by [`FormSession::new`]
    const DEFAULT_MODE: RecomputeMode;

    /// Parse, validate and calculate from the current fields
    fn derive(&self) -> CalcResult<Self::Output>;

    /// True once any field holds text
    fn has_any_input(&self) -> bool;

    /// Static help text shown while the fields are invalid
    fn validation_message(&self) -> &'static str;
}

/// One calculator instance: its form plus result state.
#[derive(Debug, Clone)]
pub struct FormSession<F: CalculatorForm> {
    form: F,
    mode: RecomputeMode,
    result: Option<F::Output>,
    last_error: Option<CalcError>,
}

impl<F: CalculatorForm> FormSession<F> {
    /// Session using the form's default mode
    pub fn new(form: F) -> Self {
        Self::with_mode(form, F::DEFAULT_MODE)
    }

    /// Session with an explicit recompute mode
    pub fn with_mode(form: F, mode: RecomputeMode) -> Self {
        FormSession {
            form,
            mode,
            result: None,
            last_error: None,
        }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn mode(&self) -> RecomputeMode {
        self.mode
    }

    /// Apply a field change. In on-demand mode this discards any result.
    pub fn edit(&mut self, change: impl FnOnce(&mut F)) {
        change(&mut self.form);
        if self.mode == RecomputeMode::OnDemand {
            self.result = None;
            self.last_error = None;
        }
    }

    /// Explicit calculate trigger.
    ///
    /// On success the result is stored and returned. On failure any previous
    /// result is dropped and the error is kept for [`last_error`](Self::last_error).
    pub fn calculate(&mut self) -> CalcResult<F::Output> {
        match self.form.derive() {
            Ok(output) => {
                self.result = Some(output.clone());
                self.last_error = None;
                Ok(output)
            }
            Err(err) => {
                debug!(%err, "calculate rejected");
                self.result = None;
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Current result, if any
    pub fn result(&self) -> Option<F::Output> {
        match self.mode {
            RecomputeMode::Live => self.form.derive().ok(),
            RecomputeMode::OnDemand => self.result.clone(),
        }
    }

    pub fn state(&self) -> SessionState {
        if self.result().is_some() {
            SessionState::Result
        } else {
            SessionState::Idle
        }
    }

    /// Error from the last failed [`calculate`](Self::calculate)
    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    /// Help text to show, only once something has been typed and the fields
    /// do not validate
    pub fn message(&self) -> Option<&'static str> {
        if self.form.has_any_input() && self.form.derive().is_err() {
            Some(self.form.validation_message())
        } else {
            None
        }
    }
}

/// Text for a number, shortest form that reads back to the same value
pub(crate) fn number_text(value: f64) -> String {
    value.to_string()
}

/// Convert a dimensional field's text between unit systems.
///
/// Blank or unparsable text is returned unchanged.
pub fn convert_field_text(text: &str, from: UnitSystem, to: UnitSystem) -> String {
    let value = parse_numeric_input(text);
    if !value.is_finite() {
        return text.to_string();
    }
    let converted = convert_dimension(value, from, to);
    if converted.is_finite() {
        number_text(converted)
    } else {
        text.to_string()
    }
}
