//! Insertion-ordered registry of named types and constants.

use std::collections::HashMap;

use crate::types::TypeDescriptor;

/// Registry mapping type names to their descriptors.
///
/// Iteration order is insertion order, which the generation engine relies on
/// when asked to generate every registered type.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    /// Registered types in insertion order.
    types: Vec<(String, TypeDescriptor)>,
    /// Name lookup map into `types`.
    index: HashMap<String, usize>,
    /// Constant definitions attached to the registry.
    constants: ConstantTable,
}

impl TypeRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a type descriptor under the given name.
    ///
    /// Re-registering an existing name replaces its descriptor in place,
    /// keeping the original insertion position.
    pub fn add_type(&mut self, name: impl Into<String>, descriptor: TypeDescriptor) {
        let name = name.into();
        if let Some(&position) = self.index.get(&name) {
            self.types[position].1 = descriptor;
            return;
        }
        self.index.insert(name.clone(), self.types.len());
        self.types.push((name, descriptor));
    }

    /// Looks up a descriptor by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.index.get(name).map(|&position| &self.types[position].1)
    }

    /// Returns true if a type with the given name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterates over registered type names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|(name, _)| name.as_str())
    }

    /// Iterates over `(name, descriptor)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeDescriptor)> {
        self.types
            .iter()
            .map(|(name, descriptor)| (name.as_str(), descriptor))
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Appends a constant definition.
    pub fn add_constant(&mut self, name: impl Into<String>, value: i32) {
        self.constants.push(name, value);
    }

    /// Returns the constant table.
    #[must_use]
    pub fn constants(&self) -> &ConstantTable {
        &self.constants
    }
}

/// Ordered table of named integer constants.
///
/// Entries are kept exactly as supplied by upstream: no sorting and no
/// deduplication. A duplicated name is emitted twice downstream.
#[derive(Debug, Clone, Default)]
pub struct ConstantTable {
    entries: Vec<(String, i32)>,
}

impl ConstantTable {
    /// Creates a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn push(&mut self, name: impl Into<String>, value: i32) {
        self.entries.push((name.into(), value));
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TypeKind, TypeRef};

    fn enum_descriptor() -> TypeDescriptor {
        TypeDescriptor::aggregate(TypeKind::Enum, "pub enum E { A }", "", vec![])
    }

    #[test]
    fn test_add_and_get() {
        let mut registry = TypeRegistry::new();
        registry.add_type("Side", enum_descriptor());

        assert!(registry.contains("Side"));
        assert_eq!(registry.get("Side").map(TypeDescriptor::kind), Some(TypeKind::Enum));
        assert!(registry.get("Missing").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_names_preserve_insertion_order() {
        let mut registry = TypeRegistry::new();
        registry.add_type("Zebra", enum_descriptor());
        registry.add_type("Apple", enum_descriptor());
        registry.add_type("Mango", enum_descriptor());

        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["Zebra", "Apple", "Mango"]);
    }

    #[test]
    fn test_reregistration_replaces_in_place() {
        let mut registry = TypeRegistry::new();
        registry.add_type("First", enum_descriptor());
        registry.add_type("Second", enum_descriptor());
        registry.add_type("First", TypeDescriptor::alias(TypeRef::Int));

        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["First", "Second"]);
        assert_eq!(registry.get("First").map(TypeDescriptor::kind), Some(TypeKind::Alias));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_constants_keep_order_and_duplicates() {
        let mut table = ConstantTable::new();
        table.push("FOO", 1);
        table.push("BAR", 2);
        table.push("FOO", 3);

        let entries: Vec<(&str, i32)> = table.iter().collect();
        assert_eq!(entries, vec![("FOO", 1), ("BAR", 2), ("FOO", 3)]);
        assert_eq!(table.len(), 3);
    }
}
