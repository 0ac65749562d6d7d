//! # rebar_core - Reinforcement Design and Optimization Engine
//!
//! `rebar_core` designs the reinforcement of concrete slabs, beams and
//! columns to IS 456 limit-state rules, checks the result for compliance,
//! and searches for a cheaper, more constructible slab layout. All inputs
//! and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Pipeline**: Each slab stage returns a new record; nothing is filled in later
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Reproducible**: The optimizer draws from a caller-supplied random source
//!
//! ## Quick Start
//!
//! ```rust
//! use rebar_core::calculations::slab::{calculate, SlabInput};
//!
//! let input = SlabInput::new("S-1", 10000.0, 15000.0, 150.0, 3.0);
//! let result = calculate(&input).unwrap();
//!
//! assert!(result.passes());
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("main_bars"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Slab, beam and column analyzers
//! - [`rebar`] - Bar selection and anchorage lengths
//! - [`validation`] - Compliance checks on a finished slab design
//! - [`pattern`] - Boundary shape classification and opening trimmers
//! - [`optimization`] - Genetic layout search, cost model and alternatives
//! - [`code_tables`] - Coefficient and strength tables
//! - [`materials`] - Concrete and steel grades
//! - [`design`] - Support conditions, bar roles and preferences
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod code_tables;
pub mod design;
pub mod errors;
pub mod materials;
pub mod optimization;
pub mod pattern;
pub mod rebar;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use calculations::slab::design as design_slab;
pub use calculations::CalculationItem;
pub use design::{BarRole, DesignPreferences, SupportCondition};
pub use errors::{CalcError, CalcResult};
pub use materials::{ConcreteGrade, MaterialPair, SteelGrade};
pub use validation::{validate_slab, ValidationResult};
