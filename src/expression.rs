use std::io::sink;

use swc_common::{
    errors::{EmitterWriter, Handler, HANDLER},
    sync::Lrc,
    FileName, SourceMap, GLOBALS,
};
use swc_ecma_ast::{self as ast, EsVersion, Expr};
use swc_ecma_parser::{lexer::Lexer, Parser, StringInput, Syntax, TsConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    Value,
    Callable,
}

/// A named entry declared by an `x-data` expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub name: String,
    pub kind: BindingKind,
}

impl Binding {
    /// Display label: callables carry an invocation marker so they read as
    /// invocable in the completion list. The underlying name stays bare.
    pub fn label(&self) -> String {
        match self.kind {
            BindingKind::Value => self.name.clone(),
            BindingKind::Callable => format!("{}()", self.name),
        }
    }
}

pub fn parse_expression_ast(expr: &str) -> Result<Box<Expr>, String> {
    let trimmed = expr.trim();
    if trimmed.is_empty() {
        return Err("Empty expression".into());
    }

    let cm: Lrc<SourceMap> = Default::default();
    let handler = Handler::with_emitter(
        false,
        false,
        Box::new(EmitterWriter::new(Box::new(sink()), None, false, false)),
    );

    GLOBALS.set(&Default::default(), || {
        HANDLER.set(&handler, || {
            let fm = cm.new_source_file(FileName::Anon, trimmed.to_string());
            let lexer = Lexer::new(
                Syntax::Typescript(TsConfig {
                    tsx: false,
                    dts: false,
                    ..Default::default()
                }),
                EsVersion::Es2022,
                StringInput::from(&*fm),
                None,
            );
            let mut parser = Parser::new_from(lexer);
            match parser.parse_expr() {
                Ok(ast) => {
                    for err in parser.take_errors() {
                        err.into_diagnostic(&handler).emit();
                        return Err("Failed to parse expression".into());
                    }
                    Ok(ast)
                }
                Err(err) => {
                    err.into_diagnostic(&handler).emit();
                    Err("Failed to parse expression".into())
                }
            }
        })
    })
}

/// Flattens one `x-data` expression into its declared bindings.
///
/// Only the direct properties of the top-level object literal count; objects
/// nested inside property values keep their keys to themselves. Computed,
/// string, and numeric keys are skipped. A malformed expression yields an
/// empty list rather than an error so one broken ancestor cannot take down
/// completion for its descendants.
pub fn extract_bindings(expr: &str) -> Vec<Binding> {
    let Ok(ast) = parse_expression_ast(expr) else {
        return Vec::new();
    };

    let mut node: &Expr = &ast;
    while let Expr::Paren(paren) = node {
        node = &paren.expr;
    }
    let Expr::Object(object) = node else {
        return Vec::new();
    };

    let mut bindings = Vec::new();
    for prop in &object.props {
        let ast::PropOrSpread::Prop(prop) = prop else {
            continue;
        };
        match &**prop {
            ast::Prop::KeyValue(kv) => {
                if let ast::PropName::Ident(key) = &kv.key {
                    bindings.push(Binding {
                        name: key.sym.to_string(),
                        kind: BindingKind::Value,
                    });
                }
            }
            ast::Prop::Shorthand(key) => {
                bindings.push(Binding {
                    name: key.sym.to_string(),
                    kind: BindingKind::Value,
                });
            }
            ast::Prop::Method(method) => {
                if let ast::PropName::Ident(key) = &method.key {
                    bindings.push(Binding {
                        name: key.sym.to_string(),
                        kind: BindingKind::Callable,
                    });
                }
            }
            ast::Prop::Getter(getter) => {
                if let ast::PropName::Ident(key) = &getter.key {
                    bindings.push(Binding {
                        name: key.sym.to_string(),
                        kind: BindingKind::Callable,
                    });
                }
            }
            ast::Prop::Setter(setter) => {
                if let ast::PropName::Ident(key) = &setter.key {
                    bindings.push(Binding {
                        name: key.sym.to_string(),
                        kind: BindingKind::Callable,
                    });
                }
            }
            ast::Prop::Assign(_) => {}
        }
    }
    bindings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(bindings: &[Binding]) -> Vec<String> {
        bindings.iter().map(|b| b.label()).collect()
    }

    #[test]
    fn extracts_values_and_callables() {
        let bindings = extract_bindings("{ open: false, toggle() {} }");
        assert_eq!(names(&bindings), vec!["open", "toggle()"]);
        assert_eq!(bindings[0].kind, BindingKind::Value);
        assert_eq!(bindings[1].kind, BindingKind::Callable);
    }

    #[test]
    fn ignores_nested_object_keys() {
        let bindings = extract_bindings("{ user: { name: 'x', save() {} }, open: true }");
        assert_eq!(names(&bindings), vec!["user", "open"]);
    }

    #[test]
    fn skips_non_identifier_keys() {
        let bindings = extract_bindings("{ 'a-b': 1, [computed]: 2, 3: 4, plain: 5 }");
        assert_eq!(names(&bindings), vec!["plain"]);
    }

    #[test]
    fn shorthand_properties_are_values() {
        let bindings = extract_bindings("{ count, step: 2 }");
        assert_eq!(names(&bindings), vec!["count", "step"]);
    }

    #[test]
    fn malformed_expression_degrades_to_empty() {
        assert!(extract_bindings("{ open: ").is_empty());
        assert!(extract_bindings("").is_empty());
        assert!(extract_bindings("notAnObject").is_empty());
    }

    #[test]
    fn extraction_is_idempotent() {
        let first = extract_bindings("{ a: 1, b() {} }");
        let second = extract_bindings("{ a: 1, b() {} }");
        assert_eq!(first, second);
    }
}
