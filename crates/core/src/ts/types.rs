//! TypeScript AST for the generated client.
//!
//! The client is a single default-exported object literal, so the AST only
//! covers what such a module needs: object members, methods, a handful of
//! statements and the expressions used to build request calls.

/// TypeScript type annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
    /// `string`
    String,
    /// Named type reference emitted verbatim: `User`, `RequestInit`
    Ref(String),
    /// Generic application: `Promise<User>`
    Generic {
        /// Generic type name.
        name: String,
        /// Type arguments in order.
        args: Vec<TsType>,
    },
    /// Type query: `typeof fetch`
    TypeOf(String),
}

/// Literal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsLiteral {
    /// String literal, quoted by the printer.
    String(String),
}

/// Expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsExpr {
    /// Identifier: foo
    Ident(String),
    /// Literal value: 'GET'
    Literal(TsLiteral),
    /// Function call: foo(a, b)
    Call {
        /// Called expression.
        callee: Box<TsExpr>,
        /// Arguments in order.
        args: Vec<TsExpr>,
    },
    /// Member access: foo.bar
    Member {
        /// Accessed object.
        object: Box<TsExpr>,
        /// Property name.
        prop: String,
    },
    /// Arrow function with an expression body: (res) => res.json()
    Arrow {
        /// Parameters, printed in parentheses.
        params: Vec<TsParam>,
        /// Expression returned by the arrow.
        body: Box<TsExpr>,
    },
    /// Object literal
    Object(TsObject),
    /// Template literal: `/users/${id}`
    Template(Vec<TemplatePart>),
    /// Conditional: cond ? a : b
    Ternary {
        /// Condition.
        cond: Box<TsExpr>,
        /// Value when `cond` is truthy.
        then_expr: Box<TsExpr>,
        /// Value otherwise.
        else_expr: Box<TsExpr>,
    },
}

impl TsExpr {
    /// Identifier expression.
    pub fn ident(name: impl Into<String>) -> Self {
        TsExpr::Ident(name.into())
    }

    /// String literal expression.
    pub fn string(value: impl Into<String>) -> Self {
        TsExpr::Literal(TsLiteral::String(value.into()))
    }

    /// `self.prop`
    pub fn member(self, prop: impl Into<String>) -> Self {
        TsExpr::Member {
            object: Box::new(self),
            prop: prop.into(),
        }
    }

    /// `self(args)`
    pub fn call(self, args: Vec<TsExpr>) -> Self {
        TsExpr::Call {
            callee: Box::new(self),
            args,
        }
    }
}

/// Template literal part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart {
    /// Static text, escaped by the printer
    Static(String),
    /// Interpolation: ${expr}
    Dynamic(TsExpr),
}

/// Object literal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TsObject {
    /// Members in emission order.
    pub members: Vec<TsMember>,
    /// One member per line when set, `{ a: 1, ...b }` otherwise.
    pub multiline: bool,
}

/// Object literal member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsMember {
    /// key: value
    Property {
        /// Property key, quoted by the printer when it is not an identifier.
        key: String,
        /// Property value.
        value: TsExpr,
    },
    /// ...expr
    Spread(TsExpr),
    /// Method shorthand: name(params) { body }
    Method(TsMethod),
}

/// Method shorthand inside an object literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsMethod {
    /// Comment printed above the method.
    pub doc: Option<DocComment>,
    /// Prefix the method with `async`.
    pub is_async: bool,
    /// Method name.
    pub name: String,
    /// Parameters in order.
    pub params: Vec<TsParam>,
    /// Return annotation, dropped for JavaScript output.
    pub return_type: Option<TsType>,
    /// Body statements.
    pub body: Vec<TsStmt>,
}

/// Function parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsParam {
    /// Parameter name.
    pub name: String,
    /// Type annotation, dropped for JavaScript output.
    pub ty: Option<TsType>,
    /// Print as `name?`.
    pub optional: bool,
}

impl TsParam {
    /// Untyped parameter, as used by arrow callbacks.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            optional: false,
        }
    }
}

/// Statement in a method body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsStmt {
    /// Return statement
    Return(Option<TsExpr>),
    /// If statement
    If {
        /// Condition.
        cond: TsExpr,
        /// Statements run when `cond` is truthy.
        then_body: Vec<TsStmt>,
        /// Optional `else` block.
        else_body: Option<Vec<TsStmt>>,
    },
}

/// `/** ... */` block, stored as its text lines without comment markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocComment {
    /// Text lines; empty strings print as a bare ` *`.
    pub lines: Vec<String>,
}

impl DocComment {
    /// Build a doc comment from free text or an existing `/** */` block.
    ///
    /// Existing blocks are unwrapped (markers and leading `*` removed) so the
    /// printer can re-indent them at any depth.
    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        let body = trimmed
            .strip_prefix("/**")
            .and_then(|rest| rest.strip_suffix("*/"))
            .unwrap_or(trimmed);

        let mut lines: Vec<String> = body
            .lines()
            .map(|line| {
                let line = line.trim();
                let line = line.strip_prefix('*').unwrap_or(line);
                line.strip_prefix(' ').unwrap_or(line).trim_end().to_string()
            })
            .collect();

        while lines.first().is_some_and(String::is_empty) {
            lines.remove(0);
        }
        while lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }

        Self { lines }
    }
}

/// Complete client module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsModule {
    /// Comment placed above the export.
    pub banner: Option<DocComment>,
    /// The default-exported client object.
    pub default_export: TsObject,
}
