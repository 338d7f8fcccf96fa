//! Report formatting.

use crate::cli::OutputFormat;
use class_usage::AnalysisReport;

/// Renders an [`AnalysisReport`] in the selected output format.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a report. The returned string carries no trailing newline.
    pub fn format(&self, report: &AnalysisReport) -> String {
        match self.format {
            OutputFormat::Human => self.format_human(report),
            OutputFormat::Json => self.format_json(report),
        }
    }

    /// Formats as the fixed human-readable report.
    fn format_human(&self, report: &AnalysisReport) -> String {
        let mut output = String::new();

        output.push_str("SCSS Usage Analysis Report\n");
        output.push_str("------------------------\n");
        output.push_str(&format!(
            "Total SCSS classes found: {}\n",
            report.total_scss_classes
        ));
        output.push_str(&format!(
            "Total classes used in React: {}\n",
            report.total_used_classes
        ));
        output.push_str(&format!(
            "Number of unused classes: {}\n",
            report.unused_classes_count
        ));
        output.push_str("\nFiles analyzed:\n");
        output.push_str(&format!("- React files: {}\n", report.react_files));
        output.push_str(&format!("- SCSS files: {}", report.scss_files));

        if !report.unused_classes.is_empty() {
            output.push_str("\n\nUnused classes:");
            for class in &report.unused_classes {
                output.push_str(&format!("\n- {}", class));
            }
        }

        output
    }

    /// Formats as pretty-printed JSON.
    fn format_json(&self, report: &AnalysisReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use class_usage::{reconcile, ClassSet};

    fn set(names: &[&str]) -> ClassSet {
        names.iter().map(|name| (*name).into()).collect()
    }

    #[test]
    fn test_human_format_with_unused_classes() {
        let defined = set(&["card", "card__title", "unused-box"]);
        let used = set(&["card", "card__title"]);
        let report = reconcile(&defined, &used, 1, 2);

        let rendered = Formatter::new(OutputFormat::Human).format(&report);

        let expected = [
            "SCSS Usage Analysis Report",
            "------------------------",
            "Total SCSS classes found: 3",
            "Total classes used in React: 2",
            "Number of unused classes: 1",
            "",
            "Files analyzed:",
            "- React files: 2",
            "- SCSS files: 1",
            "",
            "Unused classes:",
            "- unused-box",
        ]
        .join("\n");
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_human_format_without_unused_classes() {
        let defined = set(&["card"]);
        let used = set(&["card"]);
        let report = reconcile(&defined, &used, 1, 1);

        let rendered = Formatter::new(OutputFormat::Human).format(&report);

        assert!(rendered.ends_with("- SCSS files: 1"));
        assert!(!rendered.contains("Unused classes:"));
    }

    #[test]
    fn test_json_format_round_trips() {
        let defined = set(&["card", "stale"]);
        let used = set(&["card"]);
        let report = reconcile(&defined, &used, 1, 1);

        let rendered = Formatter::new(OutputFormat::Json).format(&report);
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["totalScssClasses"], 2);
        assert_eq!(value["totalUsedClasses"], 1);
        assert_eq!(value["unusedClasses"][0], "stale");
        assert_eq!(value["unusedClassesCount"], 1);
        assert_eq!(value["scssFiles"], 1);
        assert_eq!(value["reactFiles"], 1);
    }
}
