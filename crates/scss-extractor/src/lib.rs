//! Class-selector extraction from SCSS.
//!
//! Extraction runs in two steps: compile the stylesheet to flat CSS, which
//! resolves nesting, parent selectors, variables, and mixins, then lexically
//! scan the compiled output for `.class-name` tokens.
//!
//! The scan is lexical rather than a selector parse: a dot followed by
//! class-token characters is captured wherever it appears in the compiled
//! CSS, so dots inside string values or numeric literals are captured too.
//! Known limitation, kept for predictable output.

mod error;

pub use error::CompileError;

use class_usage::{ClassName, ClassSet};
use regex::Regex;
use std::sync::OnceLock;

/// Matches a class-selector token: a dot followed by the class alphabet.
fn class_token_regex() -> &'static Regex {
    static CLASS_TOKEN: OnceLock<Regex> = OnceLock::new();
    CLASS_TOKEN
        .get_or_init(|| Regex::new(r"\.([A-Za-z0-9_-]+)").expect("class token pattern is valid"))
}

/// Extracts the set of class names a stylesheet defines.
///
/// Rules with empty declaration blocks are omitted by the compiler and
/// therefore contribute nothing.
pub fn extract_classes(source: &str) -> Result<ClassSet, CompileError> {
    let css = grass::from_string(source.to_owned(), &grass::Options::default())?;
    Ok(scan_compiled_css(&css))
}

/// Collects every `.token` capture from compiled CSS, deduplicated in
/// first-occurrence order.
fn scan_compiled_css(css: &str) -> ClassSet {
    let mut classes = ClassSet::default();
    for capture in class_token_regex().captures_iter(css) {
        classes.insert(ClassName::new(&capture[1]));
    }
    classes
}
