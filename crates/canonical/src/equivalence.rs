use fxhash::{FxHashMap, FxHashSet};

/// Symmetric set of key pairs treated as equal during alignment.
///
/// Pairs are indexed by their smaller key so lookups do not depend on
/// argument order and borrow both keys. The set is not closed under
/// transitivity: declaring `(a, b)` and `(b, c)` does not make `a`
/// equivalent to `c`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquivalenceSet {
    by_low: FxHashMap<String, FxHashSet<String>>,
    len: usize,
}

impl EquivalenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair of already-normalized keys. Identical keys are ignored.
    pub fn insert(&mut self, left: String, right: String) {
        if left == right {
            return;
        }
        let (low, high) = if left < right { (left, right) } else { (right, left) };
        if self.by_low.entry(low).or_default().insert(high) {
            self.len += 1;
        }
    }

    /// Runs once per alignment cell, so it must not allocate.
    pub fn contains(&self, a: &str, b: &str) -> bool {
        if self.len == 0 || a == b {
            return false;
        }
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        self.by_low
            .get(low)
            .is_some_and(|partners| partners.contains(high))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
