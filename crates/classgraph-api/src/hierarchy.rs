//! Inheritance hierarchy queries over resolved class records.
//!
//! Everything here is derived on demand from the `base_classes` lists; no
//! graph is stored. Run [`resolve_inheritance`](crate::resolve_inheritance)
//! first so that every edge refers to a known class.

use crate::entities::ClassRecord;
use crate::index::ClassIndex;
use crate::relationships::InheritanceRelation;
use log::trace;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Base class name → records that list it as a base, in record order.
#[derive(Debug, Clone, Default)]
pub struct InheritanceGraph<'a> {
    children: HashMap<&'a str, Vec<&'a ClassRecord>>,
}

impl<'a> InheritanceGraph<'a> {
    pub fn build(classes: &'a [ClassRecord]) -> Self {
        let mut children: HashMap<&str, Vec<&ClassRecord>> = HashMap::new();
        for class in classes {
            for base in &class.base_classes {
                children.entry(base.as_str()).or_default().push(class);
            }
        }
        Self { children }
    }

    /// Direct subclasses of `name`
    pub fn children_of(&self, name: &str) -> &[&'a ClassRecord] {
        self.children.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct base names with at least one subclass
    pub fn base_count(&self) -> usize {
        self.children.len()
    }

    /// Every child → parent edge, ordered by child then clause position
    pub fn relations(classes: &[ClassRecord]) -> Vec<InheritanceRelation> {
        classes
            .iter()
            .flat_map(|class| {
                class
                    .base_classes
                    .iter()
                    .enumerate()
                    .map(move |(order, base)| {
                        InheritanceRelation::new(class.name.as_str(), base.as_str())
                            .with_order(order)
                    })
            })
            .collect()
    }
}

/// Records without base classes, in input order
pub fn root_classes(classes: &[ClassRecord]) -> Vec<&ClassRecord> {
    classes.iter().filter(|class| class.is_root()).collect()
}

/// Inheritance depth of every record
#[derive(Debug, Clone)]
pub struct Levels {
    levels: Vec<usize>,
    index: ClassIndex,
}

impl Levels {
    /// Level of the record at `idx` in the leveled list
    pub fn get(&self, idx: usize) -> Option<usize> {
        self.levels.get(idx).copied()
    }

    /// Level of the record registered under `name` (last record wins)
    pub fn level_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).and_then(|idx| self.get(idx))
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.levels
    }

    pub fn max_level(&self) -> usize {
        self.levels.iter().copied().max().unwrap_or(0)
    }

    /// Records grouped by level, each group in input order
    pub fn group_by_level<'a>(
        &self,
        classes: &'a [ClassRecord],
    ) -> BTreeMap<usize, Vec<&'a ClassRecord>> {
        let mut groups: BTreeMap<usize, Vec<&ClassRecord>> = BTreeMap::new();
        for (class, level) in classes.iter().zip(&self.levels) {
            groups.entry(*level).or_default().push(class);
        }
        groups
    }
}

/// Compute the inheritance level of every record.
///
/// Records without bases are level 0. A record whose bases all have a level
/// gets one more than the deepest of them; this repeats until a pass changes
/// nothing. Records still without a level at that point sit on a cycle or
/// depend on an unknown name, and are assigned level 0.
pub fn compute_levels(classes: &[ClassRecord]) -> Levels {
    let index = ClassIndex::build(classes);
    let mut levels: Vec<Option<usize>> = classes
        .iter()
        .map(|class| class.is_root().then_some(0))
        .collect();

    let mut changed = true;
    let mut pass = 0;
    while changed {
        changed = false;
        pass += 1;

        for (idx, class) in classes.iter().enumerate() {
            if levels[idx].is_some() {
                continue;
            }

            let mut deepest = 0;
            let mut ready = true;
            for base in &class.base_classes {
                match index.get(base).and_then(|base_idx| levels[base_idx]) {
                    Some(level) => deepest = deepest.max(level),
                    None => {
                        ready = false;
                        break;
                    }
                }
            }

            if ready {
                levels[idx] = Some(deepest + 1);
                changed = true;
            }
        }
        trace!("level pass {} changed={}", pass, changed);
    }

    let levels = classes
        .iter()
        .zip(levels)
        .map(|(class, level)| {
            level.unwrap_or_else(|| {
                trace!("class {} is on an inheritance cycle, using level 0", class.name);
                0
            })
        })
        .collect();

    Levels { levels, index }
}

/// One step of a hierarchy walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HierarchyEntry<'a> {
    /// Distance from the root the walk started at
    pub depth: usize,
    pub class: &'a ClassRecord,
}

/// Preorder walk of the inheritance forest, starting from every root.
///
/// A class reached through several bases is listed once under each of them.
/// A class already on the current path is never entered again, so cyclic
/// graphs terminate.
pub fn walk_hierarchy(classes: &[ClassRecord]) -> Vec<HierarchyEntry<'_>> {
    let graph = InheritanceGraph::build(classes);
    let mut entries = Vec::new();

    for root in root_classes(classes) {
        let mut stack: Vec<(&ClassRecord, usize)> = vec![(root, 0)];
        let mut path: Vec<&str> = Vec::new();

        while let Some((class, depth)) = stack.pop() {
            path.truncate(depth);
            if path.contains(&class.name.as_str()) {
                continue;
            }
            path.push(class.name.as_str());
            entries.push(HierarchyEntry { depth, class });

            for &child in graph.children_of(&class.name).iter().rev() {
                stack.push((child, depth + 1));
            }
        }
    }

    entries
}

/// Summary numbers for a set of classes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HierarchyStats {
    pub total_classes: usize,
    pub root_classes: usize,
    pub derived_classes: usize,
    pub max_depth: usize,
    pub total_members: usize,
    pub total_methods: usize,
}

impl HierarchyStats {
    pub fn collect(classes: &[ClassRecord]) -> Self {
        let root_classes = classes.iter().filter(|class| class.is_root()).count();
        Self {
            total_classes: classes.len(),
            root_classes,
            derived_classes: classes.len() - root_classes,
            max_depth: compute_levels(classes).max_level(),
            total_members: classes.iter().map(|class| class.members.len()).sum(),
            total_methods: classes.iter().map(|class| class.methods.len()).sum(),
        }
    }

    pub fn avg_members_per_class(&self) -> f64 {
        if self.total_classes == 0 {
            0.0
        } else {
            self.total_members as f64 / self.total_classes as f64
        }
    }

    pub fn avg_methods_per_class(&self) -> f64 {
        if self.total_classes == 0 {
            0.0
        } else {
            self.total_methods as f64 / self.total_classes as f64
        }
    }
}
