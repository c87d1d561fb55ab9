use crate::entities::ClassRecord;
use thiserror::Error;

/// Errors that can occur while scanning a source unit
#[derive(Error, Debug)]
pub enum ScanError {
    /// The unit's content could not be obtained
    #[error("IO error reading {0}: {1}")]
    IoError(String, #[source] std::io::Error),

    /// Reading failed part way through the unit
    ///
    /// `partial` holds the classes that were complete before the failure.
    #[error("Read error in {unit} at line {line}: {source}")]
    Read {
        /// Unit identifier
        unit: String,
        /// Last line read successfully
        line: usize,
        /// Classes finalized before the failure
        partial: Vec<ClassRecord>,
        #[source]
        source: std::io::Error,
    },

    /// Unit too large
    #[error("Unit {0} exceeds maximum size ({1} bytes)")]
    UnitTooLarge(String, usize),
}

impl ScanError {
    /// Identifier of the unit this error belongs to
    pub fn unit(&self) -> &str {
        match self {
            Self::IoError(unit, _) | Self::UnitTooLarge(unit, _) => unit,
            Self::Read { unit, .. } => unit,
        }
    }

    /// Classes completed before the failure (empty unless `Read`)
    pub fn partial_classes(&self) -> &[ClassRecord] {
        match self {
            Self::Read { partial, .. } => partial,
            _ => &[],
        }
    }

    /// Stamp `path` on the partial classes carried by a `Read` error
    pub fn with_source_path(mut self, path: &str) -> Self {
        if let Self::Read { partial, .. } = &mut self {
            for class in partial.iter_mut() {
                class.source_path = path.to_string();
            }
        }
        self
    }

    pub fn into_partial_classes(self) -> Vec<ClassRecord> {
        match self {
            Self::Read { partial, .. } => partial,
            _ => Vec::new(),
        }
    }
}

/// Result type for scanner operations
pub type ScanResult<T> = Result<T, ScanError>;
