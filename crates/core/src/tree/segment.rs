//! Classification of declaration-key segments.

use std::fmt;

use crate::ts::utils::sanitize_ts_identifier;

/// A dynamic path parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    raw: String,
    ident: String,
}

impl Param {
    /// Create a parameter from the name written between the brackets.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let ident = sanitize_ts_identifier(&raw);
        Self { raw, ident }
    }

    /// Name as written in the declaration key and URL templates (`user-id`).
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// TypeScript identifier used for the accessor and its argument (`userId`).
    pub fn ident(&self) -> &str {
        &self.ident
    }
}

/// One classified segment of a declaration key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal path component: `users`
    Static(String),
    /// Required dynamic segment: `[id]`
    Required(Param),
    /// Optional dynamic segment: `[[page]]`
    Optional(Param),
}

impl Segment {
    /// Classify a raw segment string.
    pub fn parse(raw: &str) -> Self {
        if let Some(inner) = raw.strip_prefix("[[").and_then(|s| s.strip_suffix("]]")) {
            if !inner.is_empty() {
                return Segment::Optional(Param::new(inner));
            }
        }
        if let Some(inner) = raw.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            let inner = inner.trim_matches(['[', ']']);
            if !inner.is_empty() {
                return Segment::Required(Param::new(inner));
            }
        }
        Segment::Static(raw.to_string())
    }

    /// The parameter of a dynamic segment.
    pub fn param(&self) -> Option<&Param> {
        match self {
            Segment::Static(_) => None,
            Segment::Required(param) | Segment::Optional(param) => Some(param),
        }
    }

    /// Whether this is a `[[name]]` segment.
    pub fn is_optional(&self) -> bool {
        matches!(self, Segment::Optional(_))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Static(name) => f.write_str(name),
            Segment::Required(param) => write!(f, "[{}]", param.raw),
            Segment::Optional(param) => write!(f, "[[{}]]", param.raw),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static() {
        assert_eq!(Segment::parse("users"), Segment::Static("users".into()));
        assert_eq!(Segment::parse("(app)"), Segment::Static("(app)".into()));
        assert_eq!(Segment::parse("[]"), Segment::Static("[]".into()));
    }

    #[test]
    fn test_parse_required() {
        let segment = Segment::parse("[id]");
        assert_eq!(segment, Segment::Required(Param::new("id")));
        assert!(!segment.is_optional());
        assert_eq!(segment.param().unwrap().ident(), "id");
    }

    #[test]
    fn test_parse_optional() {
        let segment = Segment::parse("[[page]]");
        assert_eq!(segment, Segment::Optional(Param::new("page")));
        assert!(segment.is_optional());
    }

    #[test]
    fn test_param_identifier_is_sanitized() {
        let segment = Segment::parse("[user-id]");
        let param = segment.param().unwrap();
        assert_eq!(param.raw(), "user-id");
        assert_eq!(param.ident(), "userId");

        let rest = Segment::parse("[...path]");
        assert_eq!(rest.param().unwrap().ident(), "path");
    }

    #[test]
    fn test_display_round_trips_raw_text() {
        for raw in ["users", "[id]", "[[page]]", "[user-id]"] {
            assert_eq!(Segment::parse(raw).to_string(), raw);
        }
    }
}
