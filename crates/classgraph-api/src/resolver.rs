//! Cross-unit inheritance resolution.
//!
//! Base class names declared in inheritance clauses are validated against
//! every class analyzed in the batch. Names that match no class are pruned
//! from the declaring record and reported as [`UnresolvedBase`].

use crate::diagnostics::UnresolvedBase;
use crate::entities::ClassRecord;
use crate::index::ClassIndex;
use log::warn;

/// Prune base classes that are not declared anywhere in `classes`.
///
/// Relative order of the remaining bases is preserved; the lists only ever
/// shrink. Records are not deduplicated: on a name collision every record
/// stays in the list, and lookups see the last one.
pub fn resolve_inheritance(classes: &mut [ClassRecord]) -> Vec<UnresolvedBase> {
    let index = ClassIndex::build(classes);
    let mut unresolved = Vec::new();

    for class in classes.iter_mut() {
        let class_name = class.name.as_str();
        class.base_classes.retain(|base| {
            if index.contains(base) {
                true
            } else {
                warn!("class {} references undefined base class {}", class_name, base);
                unresolved.push(UnresolvedBase::new(class_name, base.as_str()));
                false
            }
        });
    }

    unresolved
}
