//! Name lookup over a list of class records.

use crate::entities::ClassRecord;
use std::collections::HashMap;

/// Arena of class records keyed by name.
///
/// Built once per pass over a record list. When several records share a
/// name, the one appearing last in the list wins; the others remain in the
/// list but are unreachable by name.
#[derive(Debug, Clone, Default)]
pub struct ClassIndex {
    by_name: HashMap<String, usize>,
}

impl ClassIndex {
    pub fn build(classes: &[ClassRecord]) -> Self {
        let mut by_name = HashMap::with_capacity(classes.len());
        for (idx, class) in classes.iter().enumerate() {
            by_name.insert(class.name.clone(), idx);
        }
        Self { by_name }
    }

    /// Index of the record registered under `name`
    pub fn get(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Number of distinct names
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
