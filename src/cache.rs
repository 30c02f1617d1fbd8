//! Per-code memoisation of pixel results.

use crate::pattern::LocalPattern;

/// Dense cache of pixel results, indexed directly by raw pattern code.
///
/// The first pixel producing a given code stores its result here, and every
/// later pixel with the same code receives that stored result verbatim,
/// including its contrast and variance.
///
/// Entries are keyed by code only, not by grid. The cache is never cleared
/// implicitly: call [`clear`](PatternCache::clear) between unrelated images
/// if per-image contrast and variance are wanted.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternCache {
    slots: Vec<Option<LocalPattern>>,
    len: usize,
}

impl PatternCache {
    /// Creates an empty cache with one slot per `points`-bit code.
    pub fn new(points: u32) -> PatternCache {
        PatternCache {
            slots: vec![None; 1usize << points],
            len: 0,
        }
    }

    /// Returns the stored result for `code`, if any.
    pub fn get(&self, code: u32) -> Option<&LocalPattern> {
        self.slots.get(code as usize).and_then(Option::as_ref)
    }

    /// Stores `pattern` for `code`, replacing any previous entry.
    ///
    /// # Panics
    /// If `code` is outside the cache's code range.
    pub fn set(&mut self, code: u32, pattern: LocalPattern) {
        let slot = &mut self.slots[code as usize];
        if slot.is_none() {
            self.len += 1;
        }
        *slot = Some(pattern);
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.len = 0;
    }

    /// Number of codes with a stored result.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no code has a stored result.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of codes the cache can hold, i.e. `2^P`.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}
