use super::value::Value;
use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// Shared handle to a scope.
/// Held by every function value that closed over the scope and by every
/// scope nested inside it.
pub type EnvRef = Rc<RefCell<Env>>;

/// Name bindings of a single scope, chained to the enclosing scope.
#[derive(Debug, Default)]
pub struct Env {
    store: HashMap<String, Value>,
    outer: Option<EnvRef>,
}

impl Env {
    /// Create a new top level scope.
    pub fn new() -> EnvRef {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Create a new scope nested in `outer`.
    pub fn enclose(outer: &EnvRef) -> EnvRef {
        Rc::new(RefCell::new(Self {
            store: HashMap::new(),
            outer: Some(outer.clone()),
        }))
    }

    /// Resolve a name, searching enclosing scopes outward.
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref()?.borrow().get(name),
        }
    }

    /// Bind a name in this scope.
    /// Enclosing scopes are never modified, so an existing outer binding is shadowed.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }

    /// If the name is bound in this scope, ignoring enclosing scopes.
    pub fn contains_local(&self, name: &str) -> bool {
        self.store.contains_key(name)
    }

    pub fn outer(&self) -> Option<&EnvRef> {
        self.outer.as_ref()
    }
}
