//! Non-fatal events reported alongside scan results

use serde::{Deserialize, Serialize};
use std::fmt;

/// A declared base class that matched no analyzed class
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnresolvedBase {
    /// Class whose inheritance clause names the base
    pub class_name: String,

    /// Base name that could not be found
    pub base_name: String,
}

impl UnresolvedBase {
    pub fn new(class_name: impl Into<String>, base_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            base_name: base_name.into(),
        }
    }
}

impl fmt::Display for UnresolvedBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "base class {} of {} has no definition",
            self.base_name, self.class_name
        )
    }
}

/// Advisory events collected during multi-unit analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diagnostic {
    /// A base class name was pruned during resolution
    UnresolvedBase(UnresolvedBase),

    /// A unit could not be (fully) read; other units were still analyzed
    UnitFailed { unit: String, message: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedBase(unresolved) => fmt::Display::fmt(unresolved, f),
            Self::UnitFailed { unit, message } => write!(f, "failed to analyze {unit}: {message}"),
        }
    }
}

impl From<UnresolvedBase> for Diagnostic {
    fn from(unresolved: UnresolvedBase) -> Self {
        Self::UnresolvedBase(unresolved)
    }
}
