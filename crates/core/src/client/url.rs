//! URL template substitution.
//!
//! A route path such as `/orgs/[org]/posts/[[page]]` is split into static
//! text and parameter interpolations. Only parameters in scope (declared by an
//! enclosing `[name]` or `[[name]]` tree level) are substituted; placeholders
//! for any other name stay in the URL as literal text.

use super::context::EmitContext;
use crate::ts::{TemplatePart, TsExpr};

/// Piece of a substituted URL template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlPart {
    /// Literal text.
    Static(String),
    /// `${ident}`, or `${ident ? ident : ''}` when `optional`.
    Param {
        /// Identifier of the parameter in the generated code.
        ident: String,
        /// Whether the placeholder used the `[[name]]` form.
        optional: bool,
    },
}

/// Substitute every in-scope placeholder of `path`.
///
/// `[[name]]` becomes a conditional interpolation that yields an empty string
/// when the argument is absent; `[name]` becomes a direct interpolation.
pub fn substitute(path: &str, context: &EmitContext) -> Vec<UrlPart> {
    let mut parts = Vec::new();
    let mut text = String::new();
    let mut rest = path;

    while let Some(start) = rest.find('[') {
        text.push_str(&rest[..start]);
        let candidate = &rest[start..];

        match placeholder(candidate) {
            Some((name, optional, len)) => {
                if let Some(param) = context.lookup(name) {
                    if !text.is_empty() {
                        parts.push(UrlPart::Static(std::mem::take(&mut text)));
                    }
                    parts.push(UrlPart::Param {
                        ident: param.ident().to_string(),
                        optional,
                    });
                } else {
                    text.push_str(&candidate[..len]);
                }
                rest = &candidate[len..];
            }
            None => {
                text.push('[');
                rest = &candidate[1..];
            }
        }
    }

    text.push_str(rest);
    if !text.is_empty() {
        parts.push(UrlPart::Static(text));
    }
    parts
}

/// Parse a placeholder at the start of `s`, returning its name, whether it is
/// the optional form, and its length in bytes.
fn placeholder(s: &str) -> Option<(&str, bool, usize)> {
    if let Some(inner) = s.strip_prefix("[[") {
        if let Some(end) = inner.find("]]") {
            let name = &inner[..end];
            if !name.is_empty() && !name.contains(['[', ']']) {
                return Some((name, true, end + 4));
            }
        }
    }

    let inner = s.strip_prefix('[')?;
    let end = inner.find(']')?;
    let name = &inner[..end];
    if name.is_empty() || name.contains('[') {
        return None;
    }
    Some((name, false, end + 2))
}

/// Template literal expression for the substituted URL.
pub fn url_expr(parts: &[UrlPart]) -> TsExpr {
    let template = parts
        .iter()
        .map(|part| match part {
            UrlPart::Static(text) => TemplatePart::Static(text.clone()),
            UrlPart::Param {
                ident,
                optional: false,
            } => TemplatePart::Dynamic(TsExpr::ident(ident.as_str())),
            UrlPart::Param {
                ident,
                optional: true,
            } => TemplatePart::Dynamic(TsExpr::Ternary {
                cond: Box::new(TsExpr::ident(ident.as_str())),
                then_expr: Box::new(TsExpr::ident(ident.as_str())),
                else_expr: Box::new(TsExpr::string("")),
            }),
        })
        .collect();
    TsExpr::Template(template)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::tree::Param;

    fn scope(names: &[&str]) -> EmitContext {
        names
            .iter()
            .fold(EmitContext::default(), |ctx, name| ctx.with_param(&Param::new(*name)))
    }

    fn direct(ident: &str) -> UrlPart {
        UrlPart::Param {
            ident: ident.into(),
            optional: false,
        }
    }

    fn conditional(ident: &str) -> UrlPart {
        UrlPart::Param {
            ident: ident.into(),
            optional: true,
        }
    }

    #[test]
    fn test_required_placeholder_is_interpolated() {
        let parts = substitute("/users/[id]", &scope(&["id"]));
        assert_eq!(parts, [UrlPart::Static("/users/".into()), direct("id")]);
    }

    #[test]
    fn test_optional_placeholder_is_conditional() {
        let parts = substitute("/posts/[[page]]", &scope(&["page"]));
        assert_eq!(parts, [UrlPart::Static("/posts/".into()), conditional("page")]);
    }

    #[test]
    fn test_every_ancestor_parameter_is_substituted() {
        let parts = substitute("/orgs/[org]/repos/[repo]/[[tab]]", &scope(&["org", "repo", "tab"]));
        assert_eq!(
            parts,
            [
                UrlPart::Static("/orgs/".into()),
                direct("org"),
                UrlPart::Static("/repos/".into()),
                direct("repo"),
                UrlPart::Static("/".into()),
                conditional("tab"),
            ]
        );
    }

    #[test]
    fn test_every_occurrence_is_substituted() {
        let parts = substitute("/[id]/copy/[id]", &scope(&["id"]));
        assert_eq!(
            parts,
            [
                UrlPart::Static("/".into()),
                direct("id"),
                UrlPart::Static("/copy/".into()),
                direct("id"),
            ]
        );
    }

    #[test]
    fn test_out_of_scope_placeholder_passes_through() {
        let parts = substitute("/users/[userId]/[[page]]", &scope(&["id"]));
        assert_eq!(parts, [UrlPart::Static("/users/[userId]/[[page]]".into())]);
    }

    #[test]
    fn test_sanitized_identifier_is_used() {
        let parts = substitute("/files/[...path]", &scope(&["...path"]));
        assert_eq!(parts, [UrlPart::Static("/files/".into()), direct("path")]);
    }

    #[test]
    fn test_unterminated_bracket_is_literal() {
        let parts = substitute("/a[b/[id]", &scope(&["id"]));
        assert_eq!(parts, [UrlPart::Static("/a[b/".into()), direct("id")]);
    }

    #[test]
    fn test_url_expr_builds_template() {
        let expr = url_expr(&[UrlPart::Static("/posts/".into()), conditional("page")]);
        let TsExpr::Template(parts) = expr else {
            panic!("expected a template literal");
        };
        assert_eq!(parts.len(), 2);
        assert!(matches!(&parts[1], TemplatePart::Dynamic(TsExpr::Ternary { .. })));
    }
}
