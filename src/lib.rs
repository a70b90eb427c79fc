#![warn(missing_docs)]

//! A multi-criteria decision engine.
//!
//! Alternatives are reduced to a short list by two successive filters:
//! standard Pareto dominance over normalized criterion values, followed by
//! *t-ordering*, a stricter filter that exploits a user-supplied partial
//! importance order over criteria (a [`Preference`] graph). An alternative
//! survives t-ordering only if no admissible weighting consistent with the
//! stated preferences could discard it.
//!
//! The entry point is [`DecisionModel`]: build it once from a set of
//! [`Criterion`] declarations, a list of alternative rows, and a list of
//! [`Preference`]s, then query [`DecisionModel::pareto_front`] or
//! [`DecisionModel::t_ordering`].

pub mod criterion;
pub mod error;
pub mod matrix;
pub mod model;
pub mod normalization;
pub mod preference;

pub(crate) mod dominance;
pub(crate) mod grouping;
pub(crate) mod importance;
pub(crate) mod pareto;
pub(crate) mod validation;

pub use criterion::{Criterion, CriterionKind};
pub use error::ModelError;
pub use matrix::{AlternativeMatrix, Cell};
pub use model::DecisionModel;
pub use preference::Preference;
