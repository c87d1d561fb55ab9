use serde::{Deserialize, Serialize};

/// A class declaration detected in a source unit
///
/// Records are created when a class header is matched and filled while the
/// class body is scanned. After that only `source_path` is assigned and
/// `base_classes` may be pruned by inheritance resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    /// Class name
    pub name: String,

    /// Declared base classes, in the order of the inheritance clause
    pub base_classes: Vec<String>,

    /// Member variables as `"<type> <name>"`
    pub members: Vec<String>,

    /// Member functions as `"<return type> <name>(...)"`
    pub methods: Vec<String>,

    /// Line of the class header (1-indexed)
    pub line_number: usize,

    /// Path of the unit the class came from; empty until assigned by the caller
    pub source_path: String,
}

impl ClassRecord {
    pub fn new(name: impl Into<String>, line_number: usize) -> Self {
        Self {
            name: name.into(),
            base_classes: Vec::new(),
            members: Vec::new(),
            methods: Vec::new(),
            line_number,
            source_path: String::new(),
        }
    }

    pub fn with_bases(mut self, bases: Vec<String>) -> Self {
        self.base_classes = bases;
        self
    }

    pub fn with_members(mut self, members: Vec<String>) -> Self {
        self.members = members;
        self
    }

    pub fn with_methods(mut self, methods: Vec<String>) -> Self {
        self.methods = methods;
        self
    }

    pub fn with_source_path(mut self, path: impl Into<String>) -> Self {
        self.source_path = path.into();
        self
    }

    /// Record a member variable declaration
    pub fn add_member(&mut self, type_name: &str, name: &str) {
        self.members.push(format!("{type_name} {name}"));
    }

    /// Record a member function declaration
    pub fn add_method(&mut self, return_type: &str, name: &str) {
        self.methods.push(format!("{return_type} {name}(...)"));
    }

    /// True when the class declares no (remaining) base classes
    pub fn is_root(&self) -> bool {
        self.base_classes.is_empty()
    }
}
