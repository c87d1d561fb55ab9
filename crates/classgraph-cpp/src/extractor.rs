//! Class extraction for one C++ source unit

use classgraph_api::{ClassRecord, ScanConfig, ScanError, ScanResult};
use log::debug;
use std::io::{self, BufRead};

use crate::body::ClassBodyScanner;
use crate::comments::CommentStripper;
use crate::header::{match_class_header, parse_inheritance};

/// Line source that keeps a 1-based count of the lines handed out
pub struct SourceLines<R> {
    lines: io::Lines<R>,
    line_number: usize,
}

impl<R: BufRead> SourceLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }

    /// Number of the line most recently returned
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        match self.lines.next() {
            Some(Ok(line)) => {
                self.line_number += 1;
                Ok(Some(line))
            }
            Some(Err(err)) => Err(err),
            None => Ok(None),
        }
    }
}

/// Extract class records from in-memory source text
pub fn extract(source: &str, unit: &str, config: &ScanConfig) -> ScanResult<Vec<ClassRecord>> {
    if source.len() > config.max_unit_size {
        return Err(ScanError::UnitTooLarge(unit.to_string(), source.len()));
    }
    extract_from_reader(source.as_bytes(), unit)
}

/// Extract class records from a reader, one line at a time.
///
/// Only class headers at the top level (between class bodies) are
/// recognized; a class declared inside another class's body is not reported
/// separately. Line numbers and comment state run continuously through
/// class bodies.
pub fn extract_from_reader<R: BufRead>(reader: R, unit: &str) -> ScanResult<Vec<ClassRecord>> {
    let mut lines = SourceLines::new(reader);
    let mut stripper = CommentStripper::new();
    let mut classes = Vec::new();

    loop {
        let raw = match lines.next_line() {
            Ok(Some(raw)) => raw,
            Ok(None) => break,
            Err(source) => return Err(read_error(unit, &lines, classes, source)),
        };

        let line = stripper.strip(&raw);
        if line.trim().is_empty() {
            continue;
        }

        // Bodies closing on their header line hand the rest back for more headers
        let mut rest = line.as_str();
        while let Some(header) = match_class_header(rest) {
            let mut record = ClassRecord::new(header.name, lines.line_number());
            record.base_classes = parse_inheritance(header.inheritance);
            debug!(
                "{}:{}: class {} bases {:?}",
                unit, record.line_number, record.name, record.base_classes
            );

            let tail = &rest[header.body_start..];
            let mut body = ClassBodyScanner::new(&mut record);
            match body.scan_header_tail(tail) {
                Some(end) => {
                    classes.push(record);
                    rest = &tail[end..];
                }
                None => {
                    if let Err(source) = body.scan(&mut lines, &mut stripper) {
                        return Err(read_error(unit, &lines, classes, source));
                    }
                    classes.push(record);
                    break;
                }
            }
        }
    }

    debug!("{}: {} classes", unit, classes.len());
    Ok(classes)
}

fn read_error<R>(
    unit: &str,
    lines: &SourceLines<R>,
    partial: Vec<ClassRecord>,
    source: io::Error,
) -> ScanError {
    ScanError::Read {
        unit: unit.to_string(),
        line: lines.line_number,
        partial,
        source,
    }
}
