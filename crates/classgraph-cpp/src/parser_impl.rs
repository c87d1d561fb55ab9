//! Implementation of the ClassScanner trait for C++

use classgraph_api::{
    assign_source_path, ClassRecord, ClassScanner, ProjectScan, ScanConfig, ScanError,
    ScanMetrics, ScanResult, SourceUnit,
};
use log::warn;
use rayon::prelude::*;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crate::extractor;

/// Heuristic C++ class scanner implementing the ClassScanner trait
pub struct CppClassScanner {
    config: ScanConfig,
    metrics: Mutex<ScanMetrics>,
}

impl CppClassScanner {
    pub fn new() -> Self {
        Self {
            config: ScanConfig::default(),
            metrics: Mutex::new(ScanMetrics::default()),
        }
    }

    pub fn with_config(config: ScanConfig) -> Self {
        Self {
            config,
            metrics: Mutex::new(ScanMetrics::default()),
        }
    }

    fn lock_metrics(&self) -> MutexGuard<'_, ScanMetrics> {
        self.metrics.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn update_metrics(&self, result: &ScanResult<Vec<ClassRecord>>, duration: Duration) {
        let mut metrics = self.lock_metrics();
        metrics.units_attempted += 1;
        metrics.total_scan_time += duration;
        match result {
            Ok(classes) => {
                metrics.units_succeeded += 1;
                metrics.total_classes += classes.len();
                metrics.total_members += classes.iter().map(|c| c.members.len()).sum::<usize>();
                metrics.total_methods += classes.iter().map(|c| c.methods.len()).sum::<usize>();
            }
            Err(_) => metrics.units_failed += 1,
        }
    }

    fn read_file(&self, path: &Path) -> ScanResult<Vec<ClassRecord>> {
        let unit = path.display().to_string();
        let metadata = fs::metadata(path).map_err(|e| ScanError::IoError(unit.clone(), e))?;

        if metadata.len() as usize > self.config.max_unit_size {
            return Err(ScanError::UnitTooLarge(unit, metadata.len() as usize));
        }

        let file = File::open(path).map_err(|e| ScanError::IoError(unit.clone(), e))?;
        let mut reader = BufReader::new(file);
        self.scan_reader(&mut reader, &unit)
    }

    /// Run `scan` over `items`, on rayon when parallel scanning is enabled.
    /// Results come back in input order either way.
    fn run_batch<T, F>(&self, items: &[T], scan: F) -> Vec<ScanResult<Vec<ClassRecord>>>
    where
        T: Sync,
        F: Fn(&T) -> ScanResult<Vec<ClassRecord>> + Sync + Send,
    {
        if !self.config.parallel {
            return items.iter().map(&scan).collect();
        }

        let run = || items.par_iter().map(&scan).collect::<Vec<_>>();
        match self.config.parallel_workers {
            Some(workers) => match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
                Ok(pool) => pool.install(run),
                Err(err) => {
                    warn!("falling back to the global thread pool: {}", err);
                    run()
                }
            },
            None => run(),
        }
    }

    fn finish(&self, scan: ProjectScan) -> ProjectScan {
        self.lock_metrics().unresolved_bases += scan.unresolved_bases().len();
        scan
    }
}

impl Default for CppClassScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassScanner for CppClassScanner {
    fn language(&self) -> &str {
        "cpp"
    }

    fn scan_source(&self, source: &str, unit: &str) -> ScanResult<Vec<ClassRecord>> {
        extractor::extract(source, unit, &self.config)
    }

    fn scan_reader(&self, reader: &mut dyn BufRead, unit: &str) -> ScanResult<Vec<ClassRecord>> {
        extractor::extract_from_reader(reader, unit)
    }

    fn scan_unit(&self, unit: &SourceUnit) -> ScanResult<Vec<ClassRecord>> {
        let start = Instant::now();
        let result = self
            .scan_source(&unit.text, &unit.id)
            .map(|mut classes| {
                assign_source_path(&mut classes, &unit.id);
                classes
            })
            .map_err(|err| err.with_source_path(&unit.id));

        self.update_metrics(&result, start.elapsed());
        result
    }

    fn scan_file(&self, path: &Path) -> ScanResult<Vec<ClassRecord>> {
        let start = Instant::now();
        let source_path = path.display().to_string();
        let result = self
            .read_file(path)
            .map(|mut classes| {
                assign_source_path(&mut classes, &source_path);
                classes
            })
            .map_err(|err| err.with_source_path(&source_path));

        self.update_metrics(&result, start.elapsed());
        result
    }

    fn scan_units(&self, units: &[SourceUnit]) -> ProjectScan {
        let results = self.run_batch(units, |unit| self.scan_unit(unit));
        self.finish(ProjectScan::from_unit_results(results))
    }

    fn scan_files(&self, paths: &[PathBuf]) -> ProjectScan {
        let results = self.run_batch(paths, |path| self.scan_file(path));
        self.finish(ProjectScan::from_unit_results(results))
    }

    fn config(&self) -> &ScanConfig {
        &self.config
    }

    fn metrics(&self) -> ScanMetrics {
        self.lock_metrics().clone()
    }

    fn reset_metrics(&mut self) {
        *self.lock_metrics() = ScanMetrics::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language() {
        let scanner = CppClassScanner::new();
        assert_eq!(scanner.language(), "cpp");
    }

    #[test]
    fn test_scan_source_does_not_touch_metrics() {
        let scanner = CppClassScanner::new();
        let classes = scanner.scan_source("class A {\n};\n", "a.h").unwrap();

        assert_eq!(classes.len(), 1);
        assert_eq!(scanner.metrics().units_attempted, 0);
    }

    #[test]
    fn test_scan_unit_stamps_path_and_counts() {
        let scanner = CppClassScanner::new();
        let unit = SourceUnit::new("shapes/shape.h", "class Shape {\n    double area;\n};\n");
        let classes = scanner.scan_unit(&unit).unwrap();

        assert_eq!(classes[0].source_path, "shapes/shape.h");
        let metrics = scanner.metrics();
        assert_eq!(metrics.units_attempted, 1);
        assert_eq!(metrics.units_succeeded, 1);
        assert_eq!(metrics.total_classes, 1);
        assert_eq!(metrics.total_members, 1);
    }

    #[test]
    fn test_reset_metrics() {
        let mut scanner = CppClassScanner::new();
        let _ = scanner.scan_unit(&SourceUnit::new("a.h", "class A {};"));
        assert_eq!(scanner.metrics().units_attempted, 1);

        scanner.reset_metrics();
        assert_eq!(scanner.metrics(), ScanMetrics::default());
    }

    #[test]
    fn test_oversized_unit_fails() {
        let scanner = CppClassScanner::with_config(ScanConfig::default().with_max_unit_size(8));
        let result = scanner.scan_unit(&SourceUnit::new("big.h", "class Big {};"));

        assert!(matches!(result, Err(ScanError::UnitTooLarge(_, _))));
        assert_eq!(scanner.metrics().units_failed, 1);
    }
}
