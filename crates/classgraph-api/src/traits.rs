use crate::{
    config::ScanConfig,
    diagnostics::{Diagnostic, UnresolvedBase},
    entities::ClassRecord,
    errors::{ScanError, ScanResult},
    metrics::ScanMetrics,
    resolver::resolve_inheritance,
};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// One source text blob analyzed as a whole
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceUnit {
    /// Opaque identifier, usually the file path
    pub id: String,

    /// Full text of the unit
    pub text: String,
}

impl SourceUnit {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Result of analyzing a batch of units
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectScan {
    /// Resolved classes from every unit, in unit order then source order
    pub classes: Vec<ClassRecord>,

    /// Unresolved bases and unit failures, in the order they were found
    pub diagnostics: Vec<Diagnostic>,

    /// Number of units attempted
    pub units_scanned: usize,
}

impl ProjectScan {
    /// Join per-unit results (in input order) and resolve inheritance.
    ///
    /// A failed unit contributes an `UnitFailed` diagnostic plus whatever
    /// classes it completed before the failure; the batch continues.
    pub fn from_unit_results<I>(results: I) -> Self
    where
        I: IntoIterator<Item = ScanResult<Vec<ClassRecord>>>,
    {
        let mut scan = ProjectScan::default();

        for result in results {
            scan.units_scanned += 1;
            match result {
                Ok(classes) => scan.classes.extend(classes),
                Err(err) => {
                    warn!("{}", err);
                    scan.diagnostics.push(unit_failed(&err));
                    scan.classes.extend(err.into_partial_classes());
                }
            }
        }

        let unresolved = resolve_inheritance(&mut scan.classes);
        scan.diagnostics
            .extend(unresolved.into_iter().map(Diagnostic::from));

        info!(
            "scanned {} units: {} classes, {} diagnostics",
            scan.units_scanned,
            scan.classes.len(),
            scan.diagnostics.len()
        );
        scan
    }

    /// Base classes pruned during resolution
    pub fn unresolved_bases(&self) -> Vec<&UnresolvedBase> {
        self.diagnostics
            .iter()
            .filter_map(|diagnostic| match diagnostic {
                Diagnostic::UnresolvedBase(unresolved) => Some(unresolved),
                _ => None,
            })
            .collect()
    }

    /// Identifiers of units that failed to read
    pub fn failed_units(&self) -> Vec<&str> {
        self.diagnostics
            .iter()
            .filter_map(|diagnostic| match diagnostic {
                Diagnostic::UnitFailed { unit, .. } => Some(unit.as_str()),
                _ => None,
            })
            .collect()
    }

    /// First class registered under `name`
    pub fn find(&self, name: &str) -> Option<&ClassRecord> {
        self.classes.iter().find(|class| class.name == name)
    }
}

/// Core trait implemented by language-specific class scanners
///
/// # Thread Safety
/// Implementations must be `Send + Sync` so units can be scanned in parallel.
pub trait ClassScanner: Send + Sync {
    /// Returns the language identifier (lowercase, e.g., "cpp")
    fn language(&self) -> &str;

    /// Scan source text and return its classes in source order
    ///
    /// `source_path` is left empty; inheritance is not resolved.
    ///
    /// **Note on Metrics**: This method does NOT update scanner metrics.
    fn scan_source(&self, source: &str, unit: &str) -> ScanResult<Vec<ClassRecord>>;

    /// Scan text from a reader, line by line
    ///
    /// # Errors
    /// Returns `ScanError::Read` carrying the classes completed so far if
    /// the reader fails part way through.
    fn scan_reader(&self, reader: &mut dyn BufRead, unit: &str) -> ScanResult<Vec<ClassRecord>>;

    /// Scan one unit and stamp its id on every class as `source_path`
    ///
    /// Updates scanner metrics.
    fn scan_unit(&self, unit: &SourceUnit) -> ScanResult<Vec<ClassRecord>>;

    /// Read and scan a file, stamping the path on every class
    ///
    /// Updates scanner metrics.
    ///
    /// # Errors
    /// Returns `ScanError` if:
    /// - The file cannot be opened or read
    /// - The file exceeds `ScanConfig::max_unit_size`
    fn scan_file(&self, path: &Path) -> ScanResult<Vec<ClassRecord>>;

    /// Scan several units and resolve inheritance across all of them
    ///
    /// Default implementation scans sequentially. A failing unit is reported
    /// in the diagnostics and does not abort the batch.
    fn scan_units(&self, units: &[SourceUnit]) -> ProjectScan {
        ProjectScan::from_unit_results(units.iter().map(|unit| self.scan_unit(unit)))
    }

    /// Scan several files and resolve inheritance across all of them
    fn scan_files(&self, paths: &[PathBuf]) -> ProjectScan {
        ProjectScan::from_unit_results(paths.iter().map(|path| self.scan_file(path)))
    }

    /// Get scanner configuration
    fn config(&self) -> &ScanConfig;

    /// Get accumulated metrics
    fn metrics(&self) -> ScanMetrics;

    /// Reset metrics
    fn reset_metrics(&mut self);
}

/// Stamp a unit identifier on freshly scanned classes
pub fn assign_source_path(classes: &mut [ClassRecord], path: &str) {
    for class in classes {
        class.source_path = path.to_string();
    }
}

fn unit_failed(err: &ScanError) -> Diagnostic {
    Diagnostic::UnitFailed {
        unit: err.unit().to_string(),
        message: err.to_string(),
    }
}
