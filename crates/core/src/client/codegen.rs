//! Code generation: RouteTree -> TsModule.
//!
//! Walks the immutable tree depth first. Static segments become nested
//! properties, dynamic segments become accessor methods taking the parameter,
//! and attached routes become async methods performing the request.

use std::collections::HashSet;

use serde::Deserialize;
use tracing::debug;

use super::context::EmitContext;
use super::url::{substitute, url_expr};
use crate::error::GenerateError;
use crate::route::{HttpMethod, RouteDescriptor};
use crate::tree::{Entry, Param, RouteNode, RouteTree, Segment};
use crate::ts::{
    DocComment, TsExpr, TsMember, TsMethod, TsModule, TsObject, TsParam, TsStmt, TsType,
};

/// Banner placed above the export unless configured otherwise.
pub const DEFAULT_BANNER: &str =
    "This file is generated by routegen. Do not edit this file directly, it will be overwritten.";

/// Spelling of the generated verb methods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodNaming {
    /// `get`, `post`, ...
    #[default]
    Lower,
    /// `GET`, `POST`, ...
    Upper,
}

impl MethodNaming {
    fn apply(self, method: HttpMethod) -> &'static str {
        match self {
            MethodNaming::Lower => method.as_lower_str(),
            MethodNaming::Upper => method.as_str(),
        }
    }
}

/// Options for the generated client's shape.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct CodegenOptions {
    /// Spelling of the verb methods.
    pub method_naming: MethodNaming,
    /// Comment above the export. Empty disables it.
    pub banner: String,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            method_naming: MethodNaming::default(),
            banner: DEFAULT_BANNER.to_string(),
        }
    }
}

/// Generate the client module for a built tree.
pub fn codegen_module(tree: &RouteTree, options: &CodegenOptions) -> Result<TsModule, GenerateError> {
    let members = codegen_members(tree.root(), &EmitContext::default(), options)?;
    debug!(members = members.len(), "Generated client object.");

    let banner = (!options.banner.trim().is_empty()).then(|| DocComment::from_text(&options.banner));
    Ok(TsModule {
        banner,
        default_export: TsObject {
            members,
            multiline: true,
        },
    })
}

/// Members of the object literal generated for `node`.
///
/// Fails when two entries of one node would produce the same member name,
/// e.g. a static `get` segment next to an attached GET.
pub fn codegen_members(
    node: &RouteNode,
    context: &EmitContext,
    options: &CodegenOptions,
) -> Result<Vec<TsMember>, GenerateError> {
    node_members(node, "/", context, options)
}

fn node_members(
    node: &RouteNode,
    path: &str,
    context: &EmitContext,
    options: &CodegenOptions,
) -> Result<Vec<TsMember>, GenerateError> {
    let mut names = HashSet::new();
    let mut members = Vec::with_capacity(node.len());

    for entry in node.entries() {
        let name = member_name(entry, options);
        if !names.insert(name) {
            return Err(GenerateError::MemberCollision {
                key: path.to_string(),
                name: name.to_string(),
            });
        }

        let member = match entry {
            Entry::Leaf(route) => TsMember::Method(request_method(route, context, options)),
            Entry::Branch { segment, node } => {
                let path = child_path(path, segment);
                match segment {
                    Segment::Static(name) => TsMember::Property {
                        key: name.clone(),
                        value: TsExpr::Object(TsObject {
                            members: node_members(node, &path, context, options)?,
                            multiline: true,
                        }),
                    },
                    Segment::Required(param) => TsMember::Method(accessor_method(
                        param, false, node, &path, context, options,
                    )?),
                    Segment::Optional(param) => TsMember::Method(accessor_method(
                        param, true, node, &path, context, options,
                    )?),
                }
            }
        };
        members.push(member);
    }

    Ok(members)
}

/// Key under which `entry` appears in the generated object.
fn member_name<'a>(entry: Entry<'a>, options: &CodegenOptions) -> &'a str {
    match entry {
        Entry::Leaf(route) => options.method_naming.apply(route.method),
        Entry::Branch { segment, .. } => match segment {
            Segment::Static(name) => name.as_str(),
            Segment::Required(param) | Segment::Optional(param) => param.ident(),
        },
    }
}

fn child_path(parent: &str, segment: &Segment) -> String {
    if parent == "/" {
        format!("/{segment}")
    } else {
        format!("{parent}/{segment}")
    }
}

/// `id(id: string) { return { ... }; }`
fn accessor_method(
    param: &Param,
    optional: bool,
    node: &RouteNode,
    path: &str,
    context: &EmitContext,
    options: &CodegenOptions,
) -> Result<TsMethod, GenerateError> {
    let child_context = context.with_param(param);
    let members = node_members(node, path, &child_context, options)?;

    Ok(TsMethod {
        doc: None,
        is_async: false,
        name: param.ident().to_string(),
        params: vec![TsParam {
            name: param.ident().to_string(),
            ty: Some(TsType::String),
            optional,
        }],
        return_type: None,
        body: vec![TsStmt::Return(Some(TsExpr::Object(TsObject {
            members,
            multiline: true,
        })))],
    })
}

/// `async get(init?, fetchFn?) { ... }` for one attached route.
fn request_method(
    route: &RouteDescriptor,
    context: &EmitContext,
    options: &CodegenOptions,
) -> TsMethod {
    let url = url_expr(&substitute(&route.path, context));
    let doc = match &route.doc_comment {
        Some(text) if !text.trim().is_empty() => DocComment::from_text(text),
        _ => DocComment::from_text(&format!("{} {}", route.method, route.path)),
    };

    // Request parameters must not shadow path parameters of enclosing accessors.
    let init = unshadowed("init", context);
    let fetch_fn = unshadowed("fetchFn", context);
    let fetch_shadowed = context.params().iter().any(|p| p.ident() == "fetch");
    let (global_fetch, fetch_type) = if fetch_shadowed {
        (TsExpr::ident("globalThis").member("fetch"), "globalThis.fetch")
    } else {
        (TsExpr::ident("fetch"), "fetch")
    };

    TsMethod {
        doc: Some(doc),
        is_async: true,
        name: options.method_naming.apply(route.method).to_string(),
        params: vec![
            TsParam {
                name: init.clone(),
                ty: Some(TsType::Ref("RequestInit".into())),
                optional: true,
            },
            TsParam {
                name: fetch_fn.clone(),
                ty: Some(TsType::TypeOf(fetch_type.into())),
                optional: true,
            },
        ],
        return_type: Some(TsType::Generic {
            name: "Promise".into(),
            args: vec![TsType::Ref(route.return_type.clone())],
        }),
        body: vec![TsStmt::If {
            cond: TsExpr::ident(fetch_fn.as_str()),
            then_body: vec![TsStmt::Return(Some(request_call(
                TsExpr::ident(fetch_fn.as_str()),
                &url,
                &init,
                route.method,
            )))],
            else_body: Some(vec![TsStmt::Return(Some(request_call(
                global_fetch,
                &url,
                &init,
                route.method,
            )))]),
        }],
    }
}

/// `name`, prefixed with `_` until no parameter in scope uses it.
fn unshadowed(name: &str, context: &EmitContext) -> String {
    let mut candidate = name.to_string();
    while context.params().iter().any(|p| p.ident() == candidate) {
        candidate.insert(0, '_');
    }
    candidate
}

/// `callee(url, { method: 'GET', ...init }).then((res) => res.json())`
fn request_call(callee: TsExpr, url: &TsExpr, init: &str, method: HttpMethod) -> TsExpr {
    let request_init = TsObject {
        members: vec![
            TsMember::Property {
                key: "method".into(),
                value: TsExpr::string(method.as_str()),
            },
            TsMember::Spread(TsExpr::ident(init)),
        ],
        multiline: false,
    };

    callee
        .call(vec![url.clone(), TsExpr::Object(request_init)])
        .member("then")
        .call(vec![TsExpr::Arrow {
            params: vec![TsParam::untyped("res")],
            body: Box::new(TsExpr::ident("res").member("json").call(vec![])),
        }])
}
