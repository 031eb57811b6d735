use crate::tree::Param;

/// Dynamic parameters in scope at one point of the recursion, outermost first.
///
/// Contexts are never mutated; [`EmitContext::with_param`] returns the
/// context for a child level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitContext {
    params: Vec<Param>,
}

impl EmitContext {
    /// Context of a child level that declares `param`.
    pub fn with_param(&self, param: &Param) -> Self {
        let mut params = self.params.clone();
        params.push(param.clone());
        Self { params }
    }

    /// Parameters in scope, outermost first.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Innermost parameter whose raw name is `raw`.
    pub fn lookup(&self, raw: &str) -> Option<&Param> {
        self.params.iter().rev().find(|param| param.raw() == raw)
    }
}
