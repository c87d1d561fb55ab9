//! C++ class scanner for ClassGraph
//!
//! This crate provides a lightweight, line-oriented scanner that extracts
//! class declarations from C++ source: class names, declared base classes,
//! member variables and member functions. It does not build a syntax tree;
//! matching is heuristic and aimed at conventionally formatted code.
//!
//! Known limits: class headers must have their opening brace on the same
//! line, nested classes are not reported on their own, and macros,
//! templates, preprocessor conditionals and namespaces are not interpreted.
//!
//! # Example
//!
//! ```rust
//! use classgraph_cpp::CppClassScanner;
//! use classgraph_api::{ClassScanner, SourceUnit};
//!
//! let scanner = CppClassScanner::new();
//! let units = vec![
//!     SourceUnit::new("animal.h", "class Animal {\npublic:\n    virtual void speak() = 0;\n};\n"),
//!     SourceUnit::new("dog.h", "class Dog : public Animal {\npublic:\n    void speak() override;\n};\n"),
//! ];
//!
//! let scan = scanner.scan_units(&units);
//! assert_eq!(scan.classes.len(), 2);
//! assert_eq!(scan.classes[1].base_classes, vec!["Animal"]);
//! ```

pub mod body;
pub mod comments;
pub mod extractor;
pub mod header;
mod parser_impl;

// Re-export API types for convenience
pub use classgraph_api::{
    ClassRecord, ClassScanner, Diagnostic, ProjectScan, ScanConfig, ScanError, ScanMetrics,
    ScanResult, SourceUnit, UnresolvedBase,
};

pub use body::ClassBodyScanner;
pub use comments::CommentStripper;
pub use header::{match_class_header, parse_inheritance, ClassHeader};
pub use parser_impl::CppClassScanner;
