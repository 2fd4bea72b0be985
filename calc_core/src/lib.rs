//! # calc_core - Shop Calculator Engine
//!
//! `calc_core` is the computational core of Shopcalc: unit conversion,
//! circle measurements and sheet-metal bend calculations. All inputs and
//! outputs are JSON-serializable so the same calculators can sit behind a
//! CLI, a GUI or an API.
//!
//! ## Design Philosophy
//!
//! - **Stateless calculators**: Pure functions that take input and return results
//! - **Gated**: Every calculation validates first and never returns a partial result
//! - **JSON-First**: All inputs, results and errors implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::bend::{calculate, BendInput};
//! use calc_core::equations::BendParameters;
//! use calc_core::units::UnitSystem;
//!
//! let input = BendInput {
//!     params: BendParameters {
//!         angle_deg: 90.0,
//!         inside_radius: 1.0,
//!         thickness: 1.0,
//!         k_factor: 0.4,
//!     },
//!     unit_system: UnitSystem::Millimeters,
//! };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.headline().to_string(), "2.199 mm");
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Calculator inputs, results and `calculate` functions
//! - [`catalog`] - Calculator and category tables
//! - [`equations`] - Raw geometry and sheet-metal formulas
//! - [`forms`] - Field text, unit toggles and recompute sessions
//! - [`numeric`] - Lenient parsing and fixed-decimal formatting
//! - [`units`] - Length and area units, unit systems
//! - [`settings`] - Form defaults loaded from JSON
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod catalog;
pub mod equations;
pub mod errors;
pub mod forms;
pub mod math;
pub mod numeric;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, CalculationOutput, FormattedValue};
pub use errors::{CalcError, CalcResult};
pub use forms::{CalculatorForm, FormSession, RecomputeMode, SessionState};
pub use settings::{load_settings, CalculatorSettings};
pub use units::{AreaUnit, LengthUnit, UnitSystem};
