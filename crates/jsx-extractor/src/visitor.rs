//! AST visitor collecting class-name tokens from `className` attributes.

use crate::CLASS_ATTRIBUTE;
use class_usage::{ClassName, ClassSet};
use swc_ecma_ast::{Expr, JSXAttr, JSXAttrName, JSXAttrValue, JSXExpr, Str, Tpl};
use swc_ecma_visit::{Visit, VisitWith};

/// The value shapes extraction understands.
enum ClassValue<'a> {
    /// A plain string literal: `className="card card--active"`.
    Plain(&'a Str),
    /// A template literal in an expression container:
    /// `` className={`btn ${variant}`} ``.
    Template(&'a Tpl),
    /// Anything else. Conditionals, calls, identifiers, strings wrapped in
    /// expression containers, and missing values contribute nothing.
    Other,
}

fn classify(value: Option<&JSXAttrValue>) -> ClassValue<'_> {
    match value {
        Some(JSXAttrValue::Str(literal)) => ClassValue::Plain(literal),
        Some(JSXAttrValue::JSXExprContainer(container)) => match &container.expr {
            JSXExpr::Expr(expr) => match expr.as_ref() {
                Expr::Tpl(template) => ClassValue::Template(template),
                _ => ClassValue::Other,
            },
            JSXExpr::JSXEmptyExpr(_) => ClassValue::Other,
        },
        _ => ClassValue::Other,
    }
}

/// Collects class-name tokens from every `className` attribute in a module.
#[derive(Debug, Default)]
pub struct ClassNameCollector {
    classes: ClassSet,
}

impl ClassNameCollector {
    /// Consumes the collector and returns the gathered set.
    pub fn into_classes(self) -> ClassSet {
        self.classes
    }

    fn collect_value(&mut self, value: Option<&JSXAttrValue>) {
        match classify(value) {
            ClassValue::Plain(literal) => {
                // Split on single spaces; empty tokens from leading,
                // trailing, or doubled spaces are kept.
                let text = literal.value.to_string_lossy();
                for token in text.split(' ') {
                    self.classes.insert(ClassName::new(token));
                }
            }
            ClassValue::Template(template) => {
                // Static segments only. Empty tokens are dropped here,
                // unlike the plain-string path.
                for quasi in &template.quasis {
                    for token in quasi.raw.as_str().split(' ') {
                        if !token.is_empty() {
                            self.classes.insert(ClassName::new(token));
                        }
                    }
                }
            }
            ClassValue::Other => {}
        }
    }
}

impl Visit for ClassNameCollector {
    fn visit_jsx_attr(&mut self, attr: &JSXAttr) {
        if let JSXAttrName::Ident(name) = &attr.name {
            if name.sym.as_str() == CLASS_ATTRIBUTE {
                self.collect_value(attr.value.as_ref());
            }
        }
        // Attribute values can nest further JSX (elements passed as props),
        // so keep walking below the attribute.
        attr.visit_children_with(self);
    }
}
