//! Identifier and literal helpers shared by codegen and the printer.

use std::collections::HashSet;
use std::sync::LazyLock;

use super::printer::QuoteStyle;

/// TypeScript reserved words that cannot be used as identifiers.
pub static TS_RESERVED_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
        "let",
        "static",
        "implements",
        "interface",
        "package",
        "private",
        "protected",
        "public",
        "await",
        "async",
    ]
    .into_iter()
    .collect()
});

/// Check if a name is a plain identifier that can be used as an unquoted
/// property key.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Escape a string for a JavaScript string literal delimited by `quote`.
pub fn escape_js_string(s: &str, quote: QuoteStyle) -> String {
    let delimiter = quote.as_char();
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            c if c == delimiter => {
                escaped.push('\\');
                escaped.push(c);
            }
            c => escaped.push(c),
        }
    }
    escaped
}

/// Escape static text placed inside a template literal.
pub fn escape_template_text(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

/// Escape one line of a `/** ... */` block so it cannot close the comment.
pub fn escape_doc_comment(line: &str) -> String {
    line.replace("*/", "*\\/")
}

/// Quote a property key if it is not a plain identifier.
pub fn quote_if_needed(name: &str, quote: QuoteStyle) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        let delimiter = quote.as_char();
        format!("{delimiter}{}{delimiter}", escape_js_string(name, quote))
    }
}

/// Sanitize a route parameter name into a valid TypeScript identifier.
/// - Drops a `=matcher` suffix and leading rest dots (`...path`)
/// - Converts `-`, `.` and space separated parts to camelCase
/// - Replaces any other invalid character with `_`
/// - Prepends `_` if the result starts with a digit or is a reserved word
pub fn sanitize_ts_identifier(name: &str) -> String {
    let name = name.split('=').next().unwrap_or(name);

    let mut result = String::new();
    for part in name.split(['-', '.', ' ']) {
        if part.is_empty() {
            continue;
        }
        if result.is_empty() {
            result.push_str(part);
        } else {
            let mut chars = part.chars();
            if let Some(first) = chars.next() {
                result.extend(first.to_uppercase());
                result.extend(chars);
            }
        }
    }

    let mut result: String = result
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if result.is_empty() {
        return "_empty".to_string();
    }

    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result = format!("_{result}");
    }

    if TS_RESERVED_WORDS.contains(result.as_str()) {
        result = format!("_{result}");
    }

    result
}
