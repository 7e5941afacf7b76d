//! Hierarchical namespace for variables, types and functions.
//!
//! An `Environment` is a shared handle to one scope node. Nodes link to their
//! parent; lookups walk towards the root, declarations write into the node
//! the handle points at. Closures keep the handle of their defining node, so
//! they observe later declarations made in it.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use bee_ir::Signature;

use crate::callable::Overload;
use crate::errors::{undefined_function, undefined_type, undefined_variable, EvalResult};
use crate::types::{BasicType, TypeDetail, Value};

/// A single-threaded scope wrapper for reference-counted interior mutability.
///
/// All scope allocations go through `LocalScope::new()`.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Whether two handles point at the same node.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A variable binding.
///
/// The check pass binds names to their static type; the execute pass binds
/// them to values.
#[derive(Clone, Debug)]
pub enum Binding {
    Type(BasicType),
    Value(Value),
}

impl Binding {
    /// Static type of the binding.
    pub fn ty(&self) -> BasicType {
        match self {
            Binding::Type(ty) => ty.clone(),
            Binding::Value(value) => value.basic_type(),
        }
    }
}

/// One node of the scope graph.
#[derive(Default)]
pub struct Scope {
    variables: FxHashMap<String, Binding>,
    types: FxHashMap<String, Rc<TypeDetail>>,
    functions: FxHashMap<Signature, Overload>,
    parent: Option<Environment>,
}

impl Scope {
    fn with_parent(parent: Environment) -> Self {
        Scope {
            parent: Some(parent),
            ..Scope::default()
        }
    }

    fn lookup_variable(&self, name: &str) -> Option<Binding> {
        if let Some(binding) = self.variables.get(name) {
            return Some(binding.clone());
        }
        if let Some(parent) = &self.parent {
            return parent.0.borrow().lookup_variable(name);
        }
        None
    }

    fn lookup_type(&self, name: &str) -> Option<Rc<TypeDetail>> {
        if let Some(detail) = self.types.get(name) {
            return Some(Rc::clone(detail));
        }
        if let Some(parent) = &self.parent {
            return parent.0.borrow().lookup_type(name);
        }
        None
    }

    fn lookup_function(&self, signature: &Signature) -> Option<Overload> {
        if let Some(overload) = self.functions.get(signature) {
            return Some(overload.clone());
        }
        if let Some(parent) = &self.parent {
            return parent.0.borrow().lookup_function(signature);
        }
        None
    }
}

/// Shared handle to a scope node.
#[derive(Clone)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// A fresh root node.
    pub fn new() -> Self {
        Environment(LocalScope::new(Scope::default()))
    }

    /// A new node whose parent is this one.
    #[must_use]
    pub fn child(&self) -> Self {
        Environment(LocalScope::new(Scope::with_parent(self.clone())))
    }

    /// Whether both handles point at the same node.
    pub fn same_scope(&self, other: &Environment) -> bool {
        self.0.ptr_eq(&other.0)
    }

    pub fn lookup_variable(&self, name: &str) -> Option<Binding> {
        self.0.borrow().lookup_variable(name)
    }

    pub fn lookup_type(&self, name: &str) -> Option<Rc<TypeDetail>> {
        self.0.borrow().lookup_type(name)
    }

    pub fn lookup_function(&self, signature: &Signature) -> Option<Overload> {
        self.0.borrow().lookup_function(signature)
    }

    pub fn find_variable(&self, name: &str) -> EvalResult<Binding> {
        self.lookup_variable(name).ok_or_else(|| undefined_variable(name))
    }

    pub fn find_type(&self, name: &str) -> EvalResult<Rc<TypeDetail>> {
        self.lookup_type(name).ok_or_else(|| undefined_type(name))
    }

    pub fn find_function(&self, signature: &Signature) -> EvalResult<Overload> {
        self.lookup_function(signature).ok_or_else(|| undefined_function(signature))
    }

    /// Bind `name` in this node, replacing an existing binding of the node.
    pub fn declare_variable(&self, name: impl Into<String>, binding: Binding) {
        self.0.borrow_mut().variables.insert(name.into(), binding);
    }

    pub fn declare_type(&self, name: impl Into<String>, detail: Rc<TypeDetail>) {
        self.0.borrow_mut().types.insert(name.into(), detail);
    }

    pub fn declare_function(&self, signature: Signature, overload: Overload) {
        self.0.borrow_mut().functions.insert(signature, overload);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.0.borrow();
        f.debug_struct("Environment")
            .field("variables", &scope.variables.len())
            .field("types", &scope.types.len())
            .field("functions", &scope.functions.len())
            .field("has_parent", &scope.parent.is_some())
            .finish()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
