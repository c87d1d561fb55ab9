//! ClassGraph API
//!
//! Shared types and passes for scanners that extract a structural model of
//! class declarations (names, base classes, member variables and member
//! functions) from source text.
//!
//! This crate provides:
//!
//! - **ClassScanner trait**: The interface language scanners implement
//! - **ClassRecord**: One detected class declaration
//! - **Resolution**: Cross-unit validation of declared base classes
//! - **Hierarchy**: Inheritance levels, roots, walks and statistics
//! - **Configuration**, **metrics** and **error handling**
//!
//! # Example
//!
//! ```rust
//! use classgraph_api::{compute_levels, resolve_inheritance, ClassRecord};
//!
//! let mut classes = vec![
//!     ClassRecord::new("Animal", 1),
//!     ClassRecord::new("Dog", 8).with_bases(vec!["Animal".to_string()]),
//!     ClassRecord::new("Orphan", 15).with_bases(vec!["Ghost".to_string()]),
//! ];
//!
//! let unresolved = resolve_inheritance(&mut classes);
//! assert_eq!(unresolved.len(), 1);
//! assert!(classes[2].base_classes.is_empty());
//!
//! let levels = compute_levels(&classes);
//! assert_eq!(levels.level_of("Dog"), Some(1));
//! ```

pub mod config;
pub mod diagnostics;
pub mod entities;
pub mod errors;
pub mod hierarchy;
pub mod index;
pub mod metrics;
pub mod relationships;
pub mod resolver;
pub mod traits;

// Re-export commonly used types
pub use config::ScanConfig;
pub use diagnostics::{Diagnostic, UnresolvedBase};
pub use entities::ClassRecord;
pub use errors::{ScanError, ScanResult};
pub use hierarchy::{
    compute_levels, root_classes, walk_hierarchy, HierarchyEntry, HierarchyStats,
    InheritanceGraph, Levels,
};
pub use index::ClassIndex;
pub use metrics::ScanMetrics;
pub use relationships::InheritanceRelation;
pub use resolver::resolve_inheritance;
pub use traits::{assign_source_path, ClassScanner, ProjectScan, SourceUnit};

#[cfg(test)]
mod tests;
