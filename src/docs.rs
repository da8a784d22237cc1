//! Static documentation tables keyed by object identity and by type identity.

use std::rc::Rc;

use tracing::warn;

use crate::value::{TypeRef, Value};

#[derive(Clone)]
pub struct DocEntry {
    pub value: Value,
    pub text: &'static str,
}

#[derive(Clone)]
pub struct TypeDocEntry {
    pub ty: TypeRef,
    pub text: &'static str,
}

/// Two ordered, duplicate-free tables. Scan order is registration order.
#[derive(Clone, Default)]
pub struct DocRegistry {
    values: Vec<DocEntry>,
    types: Vec<TypeDocEntry>,
}

impl DocRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the registry from path-keyed content tables.
    ///
    /// `lookup_value` maps a dotted path to the object it names and
    /// `lookup_type` maps a type name to its type object. Entries that do not
    /// resolve are skipped.
    pub fn resolve<V, T>(
        value_docs: &[(&'static str, &'static str)],
        type_docs: &[(&'static str, &'static str)],
        lookup_value: V,
        lookup_type: T,
    ) -> Self
    where
        V: Fn(&str) -> Option<Value>,
        T: Fn(&str) -> Option<TypeRef>,
    {
        let mut registry = Self::new();
        for &(path, text) in value_docs {
            match lookup_value(path) {
                Some(value) => {
                    if !registry.register_value(value, text) {
                        warn!(path, "object documented twice; keeping the first entry");
                    }
                }
                None => warn!(path, "documented object does not exist"),
            }
        }
        for &(name, text) in type_docs {
            match lookup_type(name) {
                Some(ty) => {
                    if !registry.register_type(ty, text) {
                        warn!(name, "type documented twice; keeping the first entry");
                    }
                }
                None => warn!(name, "documented type does not exist"),
            }
        }
        registry
    }

    /// Returns `false` without registering when `value` already has an entry.
    pub fn register_value(&mut self, value: Value, text: &'static str) -> bool {
        if self.find_by_value(&value).is_some() {
            return false;
        }
        self.values.push(DocEntry { value, text });
        true
    }

    /// Returns `false` without registering when `ty` already has an entry.
    pub fn register_type(&mut self, ty: TypeRef, text: &'static str) -> bool {
        if self.find_by_type(&ty).is_some() {
            return false;
        }
        self.types.push(TypeDocEntry { ty, text });
        true
    }

    pub fn find_by_value(&self, value: &Value) -> Option<&'static str> {
        self.values
            .iter()
            .find(|entry| entry.value.is(value))
            .map(|entry| entry.text)
    }

    pub fn find_by_type(&self, ty: &TypeRef) -> Option<&'static str> {
        self.types
            .iter()
            .find(|entry| Rc::ptr_eq(&entry.ty, ty))
            .map(|entry| entry.text)
    }

    /// Value table first. A type entry matches when its key is the value
    /// itself (a type object asked about directly) or the value's type.
    pub fn find_by_value_or_type(&self, value: &Value, ty: &TypeRef) -> Option<&'static str> {
        if let Some(text) = self.find_by_value(value) {
            return Some(text);
        }
        self.types
            .iter()
            .find(|entry| {
                value.as_type().is_some_and(|own| Rc::ptr_eq(own, &entry.ty))
                    || Rc::ptr_eq(&entry.ty, ty)
            })
            .map(|entry| entry.text)
    }

    pub fn values(&self) -> &[DocEntry] {
        &self.values
    }

    pub fn types(&self) -> &[TypeDocEntry] {
        &self.types
    }
}
