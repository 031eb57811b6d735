//! TypeScript code emission via the Emit trait.
//!
//! Each AST type implements `Emit` and writes itself into a [`Printer`].
//! Block-level nodes (members, statements) write whole lines including their
//! indentation; expressions and types write inline.

use super::printer::{FormatOptions, Printer};
use super::types::{
    DocComment, TemplatePart, TsExpr, TsLiteral, TsMember, TsMethod, TsModule, TsObject, TsParam,
    TsStmt, TsType,
};
use super::utils::{escape_doc_comment, escape_js_string, escape_template_text, quote_if_needed};

/// Trait for emitting TypeScript code from AST nodes.
pub trait Emit {
    /// Write the node into the printer.
    fn emit(&self, printer: &mut Printer<'_>);
}

/// Render a node to a string with the given options.
pub fn to_source<T: Emit + ?Sized>(node: &T, options: &FormatOptions) -> String {
    let mut printer = Printer::new(options);
    node.emit(&mut printer);
    printer.finish()
}

// =============================================================================
// Types
// =============================================================================

impl Emit for TsType {
    fn emit(&self, printer: &mut Printer<'_>) {
        match self {
            TsType::String => printer.write("string"),
            TsType::Ref(name) => printer.write(name),
            TsType::Generic { name, args } => {
                printer.write(name);
                printer.write("<");
                emit_comma_separated(args, printer);
                printer.write(">");
            }
            TsType::TypeOf(name) => {
                printer.write("typeof ");
                printer.write(name);
            }
        }
    }
}

// =============================================================================
// Expressions
// =============================================================================

impl Emit for TsLiteral {
    fn emit(&self, printer: &mut Printer<'_>) {
        match self {
            TsLiteral::String(value) => {
                let quote = printer.options().quote_style;
                let delimiter = quote.as_char().to_string();
                printer.write(&delimiter);
                printer.write(&escape_js_string(value, quote));
                printer.write(&delimiter);
            }
        }
    }
}

impl Emit for TsExpr {
    fn emit(&self, printer: &mut Printer<'_>) {
        match self {
            TsExpr::Ident(name) => printer.write(name),
            TsExpr::Literal(lit) => lit.emit(printer),
            TsExpr::Call { callee, args } => {
                callee.emit(printer);
                printer.write("(");
                emit_comma_separated(args, printer);
                printer.write(")");
            }
            TsExpr::Member { object, prop } => {
                object.emit(printer);
                printer.write(".");
                printer.write(prop);
            }
            TsExpr::Arrow { params, body } => {
                printer.write("(");
                emit_comma_separated(params, printer);
                printer.write(") => ");
                body.emit(printer);
            }
            TsExpr::Object(object) => object.emit(printer),
            TsExpr::Template(parts) => {
                printer.write("`");
                for part in parts {
                    match part {
                        TemplatePart::Static(text) => printer.write(&escape_template_text(text)),
                        TemplatePart::Dynamic(expr) => {
                            printer.write("${");
                            expr.emit(printer);
                            printer.write("}");
                        }
                    }
                }
                printer.write("`");
            }
            TsExpr::Ternary {
                cond,
                then_expr,
                else_expr,
            } => {
                cond.emit(printer);
                printer.write(" ? ");
                then_expr.emit(printer);
                printer.write(" : ");
                else_expr.emit(printer);
            }
        }
    }
}

impl Emit for TsParam {
    fn emit(&self, printer: &mut Printer<'_>) {
        printer.write(&self.name);
        if !printer.emits_types() {
            return;
        }
        if self.optional {
            printer.write("?");
        }
        if let Some(ty) = &self.ty {
            printer.write(": ");
            ty.emit(printer);
        }
    }
}

fn emit_comma_separated<T: Emit>(items: &[T], printer: &mut Printer<'_>) {
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            printer.write(", ");
        }
        item.emit(printer);
    }
}

// =============================================================================
// Objects
// =============================================================================

impl Emit for TsObject {
    fn emit(&self, printer: &mut Printer<'_>) {
        if self.members.is_empty() {
            printer.write("{}");
            return;
        }

        if !self.multiline {
            printer.write("{ ");
            for (idx, member) in self.members.iter().enumerate() {
                if idx > 0 {
                    printer.write(", ");
                }
                member.emit_inline(printer);
            }
            printer.write(" }");
            return;
        }

        printer.write("{");
        printer.newline();
        printer.indent();
        for member in &self.members {
            member.emit(printer);
        }
        printer.dedent();
        printer.line_start();
        printer.write("}");
    }
}

impl TsMember {
    /// Write the member without line breaks (used by single-line objects).
    fn emit_inline(&self, printer: &mut Printer<'_>) {
        match self {
            TsMember::Property { key, value } => {
                let quote = printer.options().quote_style;
                printer.write(&quote_if_needed(key, quote));
                printer.write(": ");
                value.emit(printer);
            }
            TsMember::Spread(expr) => {
                printer.write("...");
                expr.emit(printer);
            }
            TsMember::Method(method) => {
                method.emit_signature(printer);
                printer.write(" { ... }");
            }
        }
    }
}

impl Emit for TsMember {
    fn emit(&self, printer: &mut Printer<'_>) {
        match self {
            TsMember::Property { .. } | TsMember::Spread(_) => {
                printer.line_start();
                self.emit_inline(printer);
                printer.write(",");
                printer.newline();
            }
            TsMember::Method(method) => method.emit(printer),
        }
    }
}

impl TsMethod {
    fn emit_signature(&self, printer: &mut Printer<'_>) {
        if self.is_async {
            printer.write("async ");
        }
        printer.write(&self.name);
        printer.write("(");
        emit_comma_separated(&self.params, printer);
        printer.write(")");
        if printer.emits_types() {
            if let Some(ty) = &self.return_type {
                printer.write(": ");
                ty.emit(printer);
            }
        }
    }
}

impl Emit for TsMethod {
    fn emit(&self, printer: &mut Printer<'_>) {
        if let Some(doc) = &self.doc {
            doc.emit(printer);
        }
        printer.line_start();
        self.emit_signature(printer);
        printer.write(" {");
        printer.newline();
        printer.indent();
        for stmt in &self.body {
            stmt.emit(printer);
        }
        printer.dedent();
        printer.line("},");
    }
}

// =============================================================================
// Statements
// =============================================================================

impl Emit for TsStmt {
    fn emit(&self, printer: &mut Printer<'_>) {
        match self {
            TsStmt::Return(expr) => {
                printer.line_start();
                match expr {
                    Some(e) => {
                        printer.write("return ");
                        e.emit(printer);
                        printer.write(";");
                    }
                    None => printer.write("return;"),
                }
                printer.newline();
            }
            TsStmt::If {
                cond,
                then_body,
                else_body,
            } => {
                printer.line_start();
                printer.write("if (");
                cond.emit(printer);
                printer.write(") {");
                printer.newline();
                emit_block(then_body, printer);
                if let Some(else_stmts) = else_body {
                    printer.line("} else {");
                    emit_block(else_stmts, printer);
                }
                printer.line("}");
            }
        }
    }
}

fn emit_block(stmts: &[TsStmt], printer: &mut Printer<'_>) {
    printer.indent();
    for stmt in stmts {
        stmt.emit(printer);
    }
    printer.dedent();
}

// =============================================================================
// Comments and module
// =============================================================================

impl Emit for DocComment {
    fn emit(&self, printer: &mut Printer<'_>) {
        printer.line("/**");
        for line in &self.lines {
            if line.is_empty() {
                printer.line(" *");
            } else {
                printer.line(&format!(" * {}", escape_doc_comment(line)));
            }
        }
        printer.line(" */");
    }
}

impl Emit for TsModule {
    fn emit(&self, printer: &mut Printer<'_>) {
        if let Some(banner) = &self.banner {
            banner.emit(printer);
            printer.newline();
        }

        printer.line_start();
        printer.write("export default ");
        self.default_export.emit(printer);
        printer.write(";");
        printer.newline();
    }
}

// =============================================================================
// Tests
// =============================================================================
