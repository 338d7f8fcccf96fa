//! Class-name sets and the defined-vs-used reconciliation report.
//!
//! The analysis pipeline produces two sets: class selectors defined by
//! stylesheets and class names referenced by markup. This crate holds the
//! shared set model and the pure reconciliation step that turns the pair
//! into an [`AnalysisReport`].

mod report;

pub use report::{reconcile, AnalysisReport};

use indexmap::IndexSet;
use smol_str::SmolStr;

/// A single class-name token.
pub type ClassName = SmolStr;

/// A set of class names, iterated in first-insertion order.
pub type ClassSet = IndexSet<ClassName>;
