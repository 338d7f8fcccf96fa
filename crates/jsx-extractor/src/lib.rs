//! className usage extraction from JSX/TSX sources.
//!
//! Sources parse as ES modules with JSX and TypeScript syntax enabled
//! regardless of extension, so type annotations in `.jsx` files parse the
//! same as in `.tsx`. An AST visitor then collects class-name tokens from
//! every `className` attribute. Only literal values contribute: plain
//! strings and the static segments of template literals. Class names built
//! purely at runtime are invisible to extraction and will surface as
//! unused on the stylesheet side.

mod error;
mod visitor;

pub use error::ParseError;
pub use visitor::ClassNameCollector;

use class_usage::ClassSet;
use swc_common::{sync::Lrc, FileName, SourceMap};
use swc_ecma_parser::{lexer::Lexer, Parser, StringInput, Syntax, TsSyntax};
use swc_ecma_visit::VisitWith;

/// The attribute that applies styling classes to an element.
pub const CLASS_ATTRIBUTE: &str = "className";

/// The markup dialect of a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupKind {
    /// Plain JSX (`.jsx`).
    Jsx,
    /// Typed JSX (`.tsx`).
    Tsx,
}

impl MarkupKind {
    /// Selects the dialect for a file extension, if it is a markup one.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "jsx" => Some(Self::Jsx),
            "tsx" => Some(Self::Tsx),
            _ => None,
        }
    }

    fn syntax(self) -> Syntax {
        // Both dialects accept type annotations.
        Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        })
    }
}

/// Extracts the set of class names a source file references through
/// `className` attributes.
///
/// Fails on the first syntax error, including errors the parser recovered
/// from. A malformed file aborts extraction rather than producing a
/// partial set.
pub fn extract_class_names(source: &str, kind: MarkupKind) -> Result<ClassSet, ParseError> {
    let cm: Lrc<SourceMap> = Default::default();
    let fm = cm.new_source_file(Lrc::new(FileName::Anon), source.to_string());

    let lexer = Lexer::new(
        kind.syntax(),
        Default::default(),
        StringInput::from(&*fm),
        None,
    );
    let mut parser = Parser::new_from(lexer);

    let module = parser.parse_module().map_err(ParseError::from)?;
    if let Some(recovered) = parser.take_errors().into_iter().next() {
        return Err(recovered.into());
    }

    let mut collector = ClassNameCollector::default();
    module.visit_with(&mut collector);

    Ok(collector.into_classes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract_jsx(source: &str) -> ClassSet {
        extract_class_names(source, MarkupKind::Jsx).unwrap()
    }

    fn names(classes: &ClassSet) -> Vec<&str> {
        classes.iter().map(|class| class.as_str()).collect()
    }

    #[test]
    fn test_plain_string_splits_into_classes() {
        let source = r#"export const Card = () => <div className="card card--active" />;"#;

        assert_eq!(names(&extract_jsx(source)), vec!["card", "card--active"]);
    }

    #[test]
    fn test_template_literal_keeps_static_segments() {
        let source =
            r#"export const Button = ({ variant }) => <button className={`btn ${variant} btn-lg`} />;"#;

        assert_eq!(names(&extract_jsx(source)), vec!["btn", "btn-lg"]);
    }

    #[test]
    fn test_dynamic_expressions_contribute_nothing() {
        let source =
            r#"export const Toggle = ({ on }) => <div className={on ? "active" : "inactive"} />;"#;

        assert!(extract_jsx(source).is_empty());
    }

    #[test]
    fn test_string_literals_in_expression_containers_are_ignored() {
        let source = r#"const C = () => <div className={"card card--active"} />;"#;

        assert!(extract_jsx(source).is_empty());
    }

    #[test]
    fn test_plain_strings_keep_empty_tokens() {
        let source = r#"const C = () => <div className="card " />;"#;

        assert_eq!(names(&extract_jsx(source)), vec!["card", ""]);
    }

    #[test]
    fn test_template_segments_drop_empty_tokens() {
        let source = r#"const C = ({ v }) => <div className={` ${v} `} />;"#;

        assert!(extract_jsx(source).is_empty());
    }

    #[test]
    fn test_other_attributes_are_ignored() {
        let source = r#"const C = () => <div id="card" data-role="card--active" />;"#;

        assert!(extract_jsx(source).is_empty());
    }

    #[test]
    fn test_jsx_nested_in_attribute_values_is_visited() {
        let source =
            r#"const C = () => <Tooltip label={<span className="hint" />} className="tool" />;"#;

        assert_eq!(names(&extract_jsx(source)), vec!["hint", "tool"]);
    }

    #[test]
    fn test_classes_accumulate_across_elements() {
        let source = r#"
            const App = () => (
                <main className="layout">
                    <aside className="sidebar layout" />
                </main>
            );
        "#;

        assert_eq!(names(&extract_jsx(source)), vec!["layout", "sidebar"]);
    }

    #[test]
    fn test_tsx_parses_type_annotations() {
        let source = r#"
            interface Props { title: string }

            export function Card({ title }: Props) {
                return <section className="card">{title}</section>;
            }
        "#;
        let classes = extract_class_names(source, MarkupKind::Tsx).unwrap();

        assert_eq!(names(&classes), vec!["card"]);
    }

    #[test]
    fn test_jsx_parses_type_annotations() {
        let source =
            r#"export const Card = ({ title }: Props) => <div className="card">{title}</div>;"#;

        assert_eq!(names(&extract_jsx(source)), vec!["card"]);
    }

    #[test]
    fn test_malformed_source_is_a_parse_error() {
        let err = extract_class_names("const = <div>", MarkupKind::Jsx).unwrap_err();

        assert!(err.to_string().contains("failed to parse component"));
    }

    #[test]
    fn test_markup_kind_from_extension() {
        assert_eq!(MarkupKind::from_extension("jsx"), Some(MarkupKind::Jsx));
        assert_eq!(MarkupKind::from_extension("tsx"), Some(MarkupKind::Tsx));
        assert_eq!(MarkupKind::from_extension("scss"), None);
        assert_eq!(MarkupKind::from_extension("js"), None);
    }
}
