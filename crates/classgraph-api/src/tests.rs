//! Tests for API types and batch joining

use crate::*;
use std::io;

#[test]
fn test_class_record_builder() {
    let class = ClassRecord::new("Circle", 12)
        .with_bases(vec!["Shape".to_string()])
        .with_members(vec!["double radius".to_string()])
        .with_methods(vec!["double area(...)".to_string()])
        .with_source_path("shapes.h");

    assert_eq!(class.name, "Circle");
    assert_eq!(class.line_number, 12);
    assert_eq!(class.base_classes, vec!["Shape"]);
    assert_eq!(class.source_path, "shapes.h");
    assert!(!class.is_root());
}

#[test]
fn test_class_record_formats_declarations() {
    let mut class = ClassRecord::new("Animal", 1);
    class.add_member("std::string", "name");
    class.add_method("void", "speak");

    assert_eq!(class.members, vec!["std::string name"]);
    assert_eq!(class.methods, vec!["void speak(...)"]);
    assert!(class.source_path.is_empty());
}

#[test]
fn test_class_record_serde_round_trip() {
    let class = ClassRecord::new("Dog", 9).with_bases(vec!["Animal".to_string()]);
    let json = serde_json::to_string(&class).unwrap();
    let back: ClassRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(back, class);
    assert!(json.contains("\"base_classes\":[\"Animal\"]"));
}

#[test]
fn test_scan_config_defaults() {
    let config = ScanConfig::default();

    assert_eq!(config.max_unit_size, 10 * 1024 * 1024); // 10MB
    assert!(!config.parallel);
    assert_eq!(config.parallel_workers, None);

    let config = ScanConfig::parallel().with_workers(4).with_max_unit_size(1024);
    assert!(config.parallel);
    assert_eq!(config.parallel_workers, Some(4));
    assert_eq!(config.max_unit_size, 1024);
    assert_eq!(ScanConfig::sequential(), ScanConfig::default());
}

#[test]
fn test_scan_metrics() {
    let mut metrics = ScanMetrics::default();
    assert_eq!(metrics.success_rate(), 0.0);

    metrics.units_attempted = 10;
    metrics.units_succeeded = 8;
    metrics.units_failed = 2;
    metrics.total_classes = 16;
    assert_eq!(metrics.success_rate(), 0.8);
    assert_eq!(metrics.avg_classes_per_unit(), 2.0);

    let mut other = ScanMetrics::default();
    other.units_attempted = 1;
    other.unresolved_bases = 3;
    metrics.merge(&other);
    assert_eq!(metrics.units_attempted, 11);
    assert_eq!(metrics.unresolved_bases, 3);
}

#[test]
fn test_diagnostic_display() {
    let unresolved: Diagnostic = UnresolvedBase::new("Orphan", "Ghost").into();
    assert_eq!(unresolved.to_string(), "base class Ghost of Orphan has no definition");

    let failed = Diagnostic::UnitFailed {
        unit: "a.h".to_string(),
        message: "boom".to_string(),
    };
    assert_eq!(failed.to_string(), "failed to analyze a.h: boom");
}

#[test]
fn test_project_scan_resolves_across_units() {
    let base = vec![ClassRecord::new("BaseClass", 2).with_source_path("base.h")];
    let derived = vec![ClassRecord::new("DerivedClass", 3)
        .with_bases(vec!["BaseClass".to_string()])
        .with_source_path("derived.cpp")];

    let scan = ProjectScan::from_unit_results(vec![Ok(base), Ok(derived)]);

    assert_eq!(scan.units_scanned, 2);
    assert!(scan.diagnostics.is_empty());
    assert_eq!(scan.find("DerivedClass").unwrap().base_classes, vec!["BaseClass"]);
}

#[test]
fn test_project_scan_keeps_going_after_failed_unit() {
    let missing = ScanError::IoError(
        "missing.h".to_string(),
        io::Error::new(io::ErrorKind::NotFound, "not found"),
    );
    let truncated = ScanError::Read {
        unit: "truncated.h".to_string(),
        line: 7,
        partial: vec![ClassRecord::new("Finished", 1)],
        source: io::Error::new(io::ErrorKind::InvalidData, "bad bytes"),
    };
    let ok = vec![ClassRecord::new("Child", 1).with_bases(vec!["Finished".to_string()])];

    let scan = ProjectScan::from_unit_results(vec![Err(missing), Err(truncated), Ok(ok)]);

    assert_eq!(scan.units_scanned, 3);
    assert_eq!(scan.failed_units(), vec!["missing.h", "truncated.h"]);
    assert!(scan.unresolved_bases().is_empty());
    assert_eq!(scan.classes.len(), 2);
    assert_eq!(scan.find("Child").unwrap().base_classes, vec!["Finished"]);
}

#[test]
fn test_project_scan_reports_unresolved_bases() {
    let classes = vec![ClassRecord::new("Orphan", 1).with_bases(vec!["Ghost".to_string()])];
    let scan = ProjectScan::from_unit_results(vec![Ok(classes)]);

    assert!(scan.classes[0].base_classes.is_empty());
    assert_eq!(
        scan.unresolved_bases(),
        vec![&UnresolvedBase::new("Orphan", "Ghost")]
    );
}

#[test]
fn test_read_error_stamps_partial_classes() {
    let err = ScanError::Read {
        unit: "u".to_string(),
        line: 1,
        partial: vec![ClassRecord::new("A", 1)],
        source: io::Error::new(io::ErrorKind::InvalidData, "bad"),
    }
    .with_source_path("src/u.h");

    assert_eq!(err.partial_classes()[0].source_path, "src/u.h");
}

#[test]
fn test_assign_source_path() {
    let mut classes = vec![ClassRecord::new("A", 1), ClassRecord::new("B", 5)];
    assign_source_path(&mut classes, "ab.h");

    assert!(classes.iter().all(|class| class.source_path == "ab.h"));
}
