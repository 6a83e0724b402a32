//! Stack and heap storage.
//!
//! The stack is one flat namespace of bindings. The heap is an arena of
//! slots indexed by handle; deleting an object retires its slot for good, so
//! a handle can never come to mean a different object.

use std::{collections::BTreeMap, fmt::Display};

use super::value::{Handle, Value};

/// An explicitly allocated object with named properties.
#[derive(Debug, Clone, PartialEq)]
pub struct HeapObject {
    pub handle: Handle,
    pub properties: BTreeMap<String, Value>,
}

impl HeapObject {
    pub fn new(handle: Handle) -> Self {
        HeapObject {
            handle,
            properties: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Heap {
    /// Slot `n` holds the object with handle `n + 1`; `None` once deleted.
    slots: Vec<Option<HeapObject>>,
}

impl Heap {
    pub fn new() -> Self {
        Heap { slots: vec![] }
    }

    /// Allocates an empty object under a handle never handed out before.
    pub fn allocate(&mut self) -> Handle {
        let handle = Handle(self.slots.len() as u64 + 1);
        self.slots.push(Some(HeapObject::new(handle)));
        handle
    }

    fn index(handle: Handle) -> Option<usize> {
        handle.0.checked_sub(1).map(|i| i as usize)
    }

    pub fn get(&self, handle: Handle) -> Option<&HeapObject> {
        self.slots.get(Self::index(handle)?)?.as_ref()
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut HeapObject> {
        self.slots.get_mut(Self::index(handle)?)?.as_mut()
    }

    pub fn is_live(&self, handle: Handle) -> bool {
        self.get(handle).is_some()
    }

    /// Removes a live object. Returns `None` for unknown or already freed handles.
    pub fn free(&mut self, handle: Handle) -> Option<HeapObject> {
        self.slots.get_mut(Self::index(handle)?)?.take()
    }

    /// Live objects in handle order.
    pub fn objects(&self) -> impl Iterator<Item = &HeapObject> {
        self.slots.iter().flatten()
    }

    /// Number of live objects.
    pub fn len(&self) -> usize {
        self.objects().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The full interpreter state: stack bindings plus heap objects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Memory {
    pub stack: BTreeMap<String, Value>,
    pub heap: Heap,
}

impl Memory {
    pub fn new() -> Self {
        Memory {
            stack: BTreeMap::new(),
            heap: Heap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.stack.get(name)
    }

    /// Creates the binding or overwrites its value, whatever its type was.
    pub fn set(&mut self, name: &str, value: Value) {
        self.stack.insert(String::from(name), value);
    }
}

/// One `name :: value` line per binding, then one line per live object.
impl Display for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, value) in &self.stack {
            writeln!(f, "{:<10} :: {}", name, value)?;
        }

        for object in self.heap.objects() {
            let properties = object
                .properties
                .iter()
                .map(|(name, value)| format!("{} :: {}", name, value))
                .collect::<Vec<_>>()
                .join(", ");
            let handle = object.handle.to_string();

            if properties.is_empty() {
                writeln!(f, "{:<10} :: {{}}", handle)?;
            } else {
                writeln!(f, "{:<10} :: {{ {} }}", handle, properties)?;
            }
        }

        Ok(())
    }
}
