//! Scope tracking and the duplicate-binding validator.
//!
//! Three layers share one parser: the function scope holds `var`-declared
//! names, the block-scope stack layers `let`/`const`/class/function-in-block
//! names above it, and entering a function swaps the whole triple for fresh
//! empty maps. Names are keyed by their canonical (escape-decoded) text, so
//! an escaped and an unescaped spelling collide.

use rustc_hash::FxHashMap;

use crate::context::{CONTEXT_STRICT, FLAG_NON_SIMPLE_PARAMETER};
use crate::errors::{ErrorKind, ParseError};

use super::state::ParserState;

/// How a binding behaves when another declaration tries to reuse the name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BindingKind {
    /// `var` declarations, parameters, and the catch parameter.
    Shadowable,
    /// Lexical declarations.
    NonShadowable,
}

/// What a statement label is attached to; `continue` may only target
/// iteration labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LabelKind {
    Iteration,
    Other,
}

/// Saved scope triple, restored when a function body ends.
pub(crate) struct SavedScopes {
    function: FxHashMap<String, BindingKind>,
    blocks: Vec<FxHashMap<String, BindingKind>>,
    labels: FxHashMap<String, LabelKind>,
}

impl ParserState<'_> {
    // =========================================================================
    // Scope lifecycle
    // =========================================================================

    /// Entering a function pushes fresh empty scopes (and an empty label
    /// set); the previous triple is returned for restoration on exit.
    pub(crate) fn enter_function_scope(&mut self) -> SavedScopes {
        SavedScopes {
            function: std::mem::take(&mut self.function_scope),
            blocks: std::mem::replace(&mut self.block_scopes, vec![FxHashMap::default()]),
            labels: std::mem::take(&mut self.label_set),
        }
    }

    pub(crate) fn exit_function_scope(&mut self, saved: SavedScopes) {
        self.function_scope = saved.function;
        self.block_scopes = saved.blocks;
        self.label_set = saved.labels;
    }

    pub(crate) fn enter_block_scope(&mut self) {
        self.block_scopes.push(FxHashMap::default());
    }

    pub(crate) fn exit_block_scope(&mut self) {
        self.block_scopes.pop();
    }

    // =========================================================================
    // Binding validation
    // =========================================================================

    /// Record a `var`-declared name in the function scope.
    pub(crate) fn add_var_name(&mut self, name: &str) {
        self.function_scope
            .insert(name.to_string(), BindingKind::Shadowable);
    }

    /// Record a lexical name in the current block scope. Rejects the
    /// restricted names, redeclaration in the same block, and shadowing of a
    /// `var`-declared name in the same function.
    pub(crate) fn add_block_name(&mut self, name: &str) -> Result<(), ParseError> {
        if matches!(name, "Infinity" | "NaN" | "undefined") {
            return Err(self.error(ErrorKind::RestrictedBindingName(name.to_string())));
        }
        if let Some(current) = self.block_scopes.last() {
            if current.get(name) == Some(&BindingKind::NonShadowable) {
                return Err(self.error(ErrorKind::DuplicateBinding(name.to_string())));
            }
        }
        if self.function_scope.contains_key(name) {
            return Err(self.error(ErrorKind::DuplicateBinding(name.to_string())));
        }
        if let Some(current) = self.block_scopes.last_mut() {
            current.insert(name.to_string(), BindingKind::NonShadowable);
        }
        Ok(())
    }

    /// Record a formal parameter. Duplicates are fatal in strict mode and in
    /// non-simple parameter lists.
    pub(crate) fn add_function_arg(&mut self, context: u32, name: &str) -> Result<(), ParseError> {
        if self.function_scope.contains_key(name)
            && (context & CONTEXT_STRICT != 0 || self.flags & FLAG_NON_SIMPLE_PARAMETER != 0)
        {
            return Err(self.error(ErrorKind::DuplicateParameter));
        }
        self.function_scope
            .insert(name.to_string(), BindingKind::Shadowable);
        Ok(())
    }

    /// Record the catch parameter: shadowable, in the fresh block scope the
    /// catch clause just pushed.
    pub(crate) fn add_catch_arg(&mut self, name: &str) -> Result<(), ParseError> {
        if let Some(current) = self.block_scopes.last() {
            if current.contains_key(name) {
                return Err(self.error(ErrorKind::DuplicateBinding(name.to_string())));
            }
        }
        if let Some(current) = self.block_scopes.last_mut() {
            current.insert(name.to_string(), BindingKind::Shadowable);
        }
        Ok(())
    }

    // =========================================================================
    // Labels
    // =========================================================================

    pub(crate) fn add_label(&mut self, name: &str, kind: LabelKind) -> Result<(), ParseError> {
        if self.label_set.contains_key(name) {
            return Err(self.error(ErrorKind::LabelRedeclaration(name.to_string())));
        }
        self.label_set.insert(name.to_string(), kind);
        Ok(())
    }

    pub(crate) fn remove_label(&mut self, name: &str) {
        self.label_set.remove(name);
    }

    pub(crate) fn label_kind(&self, name: &str) -> Option<LabelKind> {
        self.label_set.get(name).copied()
    }
}
