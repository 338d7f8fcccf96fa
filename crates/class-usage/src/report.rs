//! The analysis report and its construction.

use crate::{ClassName, ClassSet};
use serde::{Deserialize, Serialize};

/// The result of reconciling defined classes against used classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Distinct class selectors defined across all stylesheet files.
    pub total_scss_classes: usize,
    /// Distinct class names referenced across all markup files.
    pub total_used_classes: usize,
    /// Classes defined but never referenced, in definition order.
    pub unused_classes: Vec<ClassName>,
    /// Length of `unused_classes`.
    pub unused_classes_count: usize,
    /// Number of stylesheet files scanned.
    pub scss_files: usize,
    /// Number of markup files scanned.
    pub react_files: usize,
}

/// Computes the defined-but-unused classes and aggregates the counts.
///
/// Pure set arithmetic: unused is `defined` minus `used`, preserving the
/// iteration order of `defined`. A used class that no stylesheet defines
/// still counts toward `total_used_classes` but is otherwise ignored.
pub fn reconcile(
    defined: &ClassSet,
    used: &ClassSet,
    scss_files: usize,
    react_files: usize,
) -> AnalysisReport {
    let unused_classes: Vec<ClassName> = defined
        .iter()
        .filter(|class| !used.contains(*class))
        .cloned()
        .collect();

    AnalysisReport {
        total_scss_classes: defined.len(),
        total_used_classes: used.len(),
        unused_classes_count: unused_classes.len(),
        unused_classes,
        scss_files,
        react_files,
    }
}
