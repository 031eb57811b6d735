//! Output buffer and formatting options used by [`Emit`](super::Emit).

use serde::Deserialize;

/// Default indentation width, in spaces.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// String literal delimiter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    /// `'value'`
    #[default]
    Single,
    /// `"value"`
    Double,
}

impl QuoteStyle {
    /// The delimiter character.
    pub fn as_char(self) -> char {
        match self {
            QuoteStyle::Single => '\'',
            QuoteStyle::Double => '"',
        }
    }
}

/// Target language of the emitted source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// TypeScript with parameter and return type annotations.
    #[default]
    #[serde(alias = "ts")]
    TypeScript,
    /// Plain JavaScript; annotations are dropped.
    #[serde(alias = "js")]
    JavaScript,
}

/// Formatting options applied around the emitted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct FormatOptions {
    /// Spaces per indentation level.
    pub indent_width: usize,
    /// String literal delimiter.
    pub quote_style: QuoteStyle,
    /// Target dialect.
    pub dialect: Dialect,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            quote_style: QuoteStyle::default(),
            dialect: Dialect::default(),
        }
    }
}

/// Accumulates emitted source text and tracks indentation depth.
#[derive(Debug)]
pub struct Printer<'a> {
    options: &'a FormatOptions,
    out: String,
    depth: usize,
}

impl<'a> Printer<'a> {
    /// Create an empty printer.
    pub fn new(options: &'a FormatOptions) -> Self {
        Self {
            options,
            out: String::new(),
            depth: 0,
        }
    }

    /// Formatting options in effect.
    pub fn options(&self) -> &FormatOptions {
        self.options
    }

    /// Whether type annotations should be written.
    pub fn emits_types(&self) -> bool {
        self.options.dialect == Dialect::TypeScript
    }

    /// Append text on the current line.
    pub fn write(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// Start a new line at the current depth.
    pub fn line_start(&mut self) {
        let width = self.depth * self.options.indent_width;
        self.out.extend(std::iter::repeat_n(' ', width));
    }

    /// Terminate the current line.
    pub fn newline(&mut self) {
        self.out.push('\n');
    }

    /// Write one complete line at the current depth.
    pub fn line(&mut self, text: &str) {
        self.line_start();
        self.write(text);
        self.newline();
    }

    /// Increase indentation by one level.
    pub fn indent(&mut self) {
        self.depth += 1;
    }

    /// Decrease indentation by one level.
    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Consume the printer and return the text.
    pub fn finish(self) -> String {
        self.out
    }
}
