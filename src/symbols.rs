use std::rc::Rc;

use indexmap::IndexMap;

use crate::value::Value;

pub type SymbolTableRef = Rc<SymbolTable>;

/// A name to value mapping laid out as a slot array.
///
/// Removing a name vacates its slot instead of compacting the array, so
/// iteration walks storage order and may encounter vacant slots. New names
/// are appended; rebinding an existing name overwrites its slot in place.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    slots: Vec<Option<Binding>>,
    index: IndexMap<String, usize>,
}

#[derive(Debug, Clone)]
pub struct Binding {
    pub name: String,
    pub value: Value,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        if let Some(&slot) = self.index.get(&name) {
            self.slots[slot] = Some(Binding { name, value });
            return;
        }
        self.index.insert(name.clone(), self.slots.len());
        self.slots.push(Some(Binding { name, value }));
    }

    /// Unbinds `name`, leaving a vacant slot behind.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let slot = self.index.shift_remove(name)?;
        self.slots[slot].take().map(|binding| binding.value)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        let slot = *self.index.get(name)?;
        self.slots[slot].as_ref().map(|binding| &binding.value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of live bindings.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Allocated slots, live or vacant.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Raw slots in storage order; `None` marks a vacated slot.
    pub fn slots(&self) -> impl Iterator<Item = Option<&Binding>> {
        self.slots.iter().map(Option::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.slots.iter().flatten()
    }

    pub fn into_ref(self) -> SymbolTableRef {
        Rc::new(self)
    }
}

impl<N: Into<String>> FromIterator<(N, Value)> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = (N, Value)>>(iter: I) -> Self {
        let mut table = SymbolTable::new();
        for (name, value) in iter {
            table.define(name, value);
        }
        table
    }
}
