use bitvec::prelude::{BitVec, bitvec};
use std::fmt;

/// Candidate set over registry module indices
///
/// Backed by a fixed-width bitset so domains stay ordered, duplicate-free,
/// and cheap to narrow. Indices are 0-based registry positions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleSet {
    bits: BitVec,
    module_count: usize,
}

impl ModuleSet {
    /// Create a set with no modules present
    pub fn new(module_count: usize) -> Self {
        Self {
            bits: bitvec![0; module_count],
            module_count,
        }
    }

    /// Create a set containing every registry module
    pub fn all(module_count: usize) -> Self {
        Self {
            bits: bitvec![1; module_count],
            module_count,
        }
    }

    /// Create a set holding exactly one module
    pub fn singleton(module_count: usize, index: usize) -> Self {
        let mut set = Self::new(module_count);
        set.insert(index);
        set
    }

    /// Insert a module index, ignoring indices outside the registry
    pub fn insert(&mut self, index: usize) {
        if index < self.module_count {
            self.bits.set(index, true);
        }
    }

    /// Test module membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Drop every member the predicate rejects
    pub fn retain(&mut self, mut keep: impl FnMut(usize) -> bool) {
        let dropped: Vec<usize> = self
            .bits
            .iter_ones()
            .filter(|&index| !keep(index))
            .collect();
        for index in dropped {
            self.bits.set(index, false);
        }
    }

    /// Test if no modules remain (a contradiction when held by a cell)
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count remaining candidates
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test whether the set has narrowed to exactly one module
    pub fn is_collapsed(&self) -> bool {
        self.len() == 1
    }

    /// The single remaining module, if the set has collapsed
    pub fn sole_member(&self) -> Option<usize> {
        self.is_collapsed().then(|| self.bits.first_one()).flatten()
    }

    /// Iterate member indices in registry order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Extract member indices as a vector in registry order
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for ModuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModuleSet({} modules: {:?})", self.len(), self.to_vec())
    }
}
