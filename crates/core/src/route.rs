//! Route definitions as supplied by the caller.
//!
//! A [`RouteCollection`] maps declaration keys (file-system style paths such
//! as `users/[id]/+server.ts`) to the set of HTTP methods declared there.
//! Iteration order is insertion order, which for manifests loaded from JSON
//! is document order. That order is carried through to the generated client.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{LoadError, UnsupportedMethod};

/// HTTP method of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl HttpMethod {
    /// Every supported method, in declaration order.
    pub const ALL: [HttpMethod; 4] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
    ];

    /// Upper-case wire name (`GET`).
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Lower-case name used for generated call methods (`get`).
    pub fn as_lower_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = UnsupportedMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpMethod::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnsupportedMethod(s.to_string()))
    }
}

impl TryFrom<String> for HttpMethod {
    type Error = UnsupportedMethod;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One REST endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDescriptor {
    /// HTTP method. This, not the key it is stored under, decides where the
    /// route attaches in the tree.
    pub method: HttpMethod,
    /// URL template, e.g. `/users/[id]` or `/posts/[[page]]`.
    pub path: String,
    /// TypeScript type of the parsed response body, emitted verbatim.
    pub return_type: String,
    /// Documentation block for the generated method.
    #[serde(default, alias = "jsDoc")]
    pub doc_comment: Option<String>,
}

impl RouteDescriptor {
    /// Create a descriptor without documentation.
    pub fn new(method: HttpMethod, path: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            return_type: return_type.into(),
            doc_comment: None,
        }
    }

    /// Attach a documentation block.
    pub fn with_doc_comment(mut self, doc_comment: impl Into<String>) -> Self {
        self.doc_comment = Some(doc_comment.into());
        self
    }
}

/// Routes declared under one declaration key, keyed by method name.
pub type RouteSet = IndexMap<String, RouteDescriptor>;

/// Flat mapping from declaration key to the routes declared there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RouteCollection {
    routes: IndexMap<String, RouteSet>,
}

impl RouteCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON manifest of the form
    /// `{ "<key>": { "GET": { "method": "GET", "path": "...", "returnType": "..." } } }`.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add a route under `key`, keeping the position of an existing key.
    /// A route with the same method under the same key replaces the old one.
    pub fn insert(&mut self, key: impl Into<String>, route: RouteDescriptor) {
        self.routes
            .entry(key.into())
            .or_default()
            .insert(route.method.as_str().to_string(), route);
    }

    /// Replace the whole route set of `key`.
    pub fn insert_set(&mut self, key: impl Into<String>, routes: RouteSet) {
        self.routes.insert(key.into(), routes);
    }

    /// Iterate declaration keys and their route sets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteSet)> {
        self.routes.iter().map(|(key, set)| (key.as_str(), set))
    }

    /// Number of declaration keys.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether there are no declaration keys.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Total number of route descriptors across all keys.
    pub fn route_count(&self) -> usize {
        self.routes.values().map(|set| set.len()).sum()
    }
}

impl<K: Into<String>> FromIterator<(K, RouteDescriptor)> for RouteCollection {
    fn from_iter<I: IntoIterator<Item = (K, RouteDescriptor)>>(iter: I) -> Self {
        let mut collection = Self::new();
        for (key, route) in iter {
            collection.insert(key, route);
        }
        collection
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parsing_is_case_insensitive() {
        assert_eq!("get".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("Delete".parse::<HttpMethod>().unwrap(), HttpMethod::Delete);
        assert_eq!(
            "PATCH".parse::<HttpMethod>().unwrap_err(),
            UnsupportedMethod("PATCH".into())
        );
    }

    #[test]
    fn test_from_json_preserves_document_order() {
        let json = r#"{
            "b/+server.ts": { "GET": { "method": "GET", "path": "/b", "returnType": "B" } },
            "a/+server.ts": {
                "POST": { "method": "POST", "path": "/a", "returnType": "A" },
                "GET": { "method": "GET", "path": "/a", "returnType": "A[]", "jsDoc": "/** List a */" }
            }
        }"#;
        let routes = RouteCollection::from_json(json).unwrap();

        let keys: Vec<_> = routes.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["b/+server.ts", "a/+server.ts"]);

        let (_, a) = routes.iter().nth(1).unwrap();
        let methods: Vec<_> = a.values().map(|route| route.method).collect();
        assert_eq!(methods, [HttpMethod::Post, HttpMethod::Get]);
        assert_eq!(a["GET"].doc_comment.as_deref(), Some("/** List a */"));
        assert_eq!(routes.route_count(), 3);
    }

    #[test]
    fn test_from_json_rejects_unknown_method() {
        let json = r#"{ "a/+server.ts": { "PATCH": { "method": "PATCH", "path": "/a", "returnType": "A" } } }"#;
        let err = RouteCollection::from_json(json).unwrap_err();
        assert!(err.to_string().contains("unsupported HTTP method 'PATCH'"), "{err}");
    }

    #[test]
    fn test_insert_groups_methods_under_key() {
        let routes: RouteCollection = [
            ("items/+server.ts", RouteDescriptor::new(HttpMethod::Get, "/items", "Item[]")),
            ("items/+server.ts", RouteDescriptor::new(HttpMethod::Post, "/items", "Item")),
        ]
        .into_iter()
        .collect();

        assert_eq!(routes.len(), 1);
        assert_eq!(routes.route_count(), 2);
    }
}
