//! Persistent environment for variable bindings.
//!
//! Unlike a mutable scope chain, [Env] never mutates in place: `set`
//! always returns a new environment whose head links back to the
//! receiver. This keeps every intermediate environment observable, which
//! the evaluator relies on when threading environments through
//! sub-evaluations.

use crate::types::{Type, Value};
use std::rc::Rc;

#[derive(Debug)]
struct Binding {
    name: String,
    value: Value,
    ty: Type,
    next: Option<Rc<Binding>>,
}

/// A persistent, cons-list environment.
///
/// Cloning an `Env` is O(1): it only clones the `Rc` pointing at the head
/// binding.
#[derive(Clone, Debug)]
pub struct Env {
    head: Option<Rc<Binding>>,
}

impl Env {
    /// An environment with no bindings.
    pub fn empty() -> Self {
        Env { head: None }
    }

    /// Returns a new environment with `name` bound to `(value, ty)`,
    /// shadowing any prior binding of `name`.
    pub fn set(&self, name: impl Into<String>, value: Value, ty: Type) -> Env {
        Env {
            head: Some(Rc::new(Binding {
                name: name.into(),
                value,
                ty,
                next: self.head.clone(),
            })),
        }
    }

    /// Looks up the most recent binding of `name`, if any.
    pub fn get(&self, name: &str) -> Option<(Value, Type)> {
        let mut cur = self.head.as_ref();
        while let Some(binding) = cur {
            if binding.name == name {
                return Some((binding.value.clone(), binding.ty));
            }
            cur = binding.next.as_ref();
        }
        None
    }

    /// All bindings, most recently set first.
    pub fn bindings(&self) -> Vec<(String, Value, Type)> {
        let mut out = Vec::new();
        let mut cur = self.head.as_ref();
        while let Some(binding) = cur {
            out.push((binding.name.clone(), binding.value.clone(), binding.ty));
            cur = binding.next.as_ref();
        }
        out
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_on_empty_is_none() {
        assert_eq!(Env::empty().get("x"), None);
    }

    #[test]
    fn set_then_get_roundtrips() {
        let env = Env::empty().set("x", Value::IntV(3), Type::Integer);
        assert_eq!(env.get("x"), Some((Value::IntV(3), Type::Integer)));
    }

    #[test]
    fn shadowing_returns_most_recent() {
        let env = Env::empty()
            .set("x", Value::IntV(3), Type::Integer)
            .set("x", Value::IntV(4), Type::Integer);
        assert_eq!(env.get("x"), Some((Value::IntV(4), Type::Integer)));
    }

    #[test]
    fn set_does_not_mutate_receiver() {
        let base = Env::empty().set("x", Value::IntV(3), Type::Integer);
        let _shadowed = base.set("x", Value::IntV(4), Type::Integer);
        assert_eq!(base.get("x"), Some((Value::IntV(3), Type::Integer)));
    }

    #[test]
    fn bindings_lists_most_recent_first() {
        let env = Env::empty()
            .set("a", Value::IntV(1), Type::Integer)
            .set("b", Value::IntV(2), Type::Integer);
        let names: Vec<String> = env.bindings().into_iter().map(|(n, _, _)| n).collect();
        assert_eq!(names, vec!["b".to_string(), "a".to_string()]);
    }
}
