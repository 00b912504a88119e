//! Scan-then-remove protocol shared by every per-frame collection.
//!
//! Each manager (action schedule, cast effect list, flying objects, session
//! casts) visits its items in order, marks the ones that are done, and only
//! then removes them. Removal runs from the highest marked index down so the
//! indices still to be removed stay valid and survivors keep their relative
//! order. Nothing is removed while the scan is running.

/// Reusable marked-index buffer. Keep one per collection to avoid per-frame allocation.
#[derive(Debug, Default)]
pub struct Reaper {
    marked: Vec<usize>,
}

impl Reaper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visit every item in order, marking those for which `visit` returns true.
    ///
    /// Returns the marked indices in ascending order. Marks from a previous
    /// scan that were never reaped are discarded.
    pub fn scan<T>(&mut self, items: &mut [T], mut visit: impl FnMut(&mut T) -> bool) -> &[usize] {
        self.marked.clear();
        for (index, item) in items.iter_mut().enumerate() {
            if visit(item) {
                self.marked.push(index);
            }
        }
        &self.marked
    }

    /// Indices marked by the last scan, ascending.
    pub fn marked(&self) -> &[usize] {
        &self.marked
    }

    /// Remove every marked item, highest index first. Returns how many were removed.
    ///
    /// `items` must be the collection that was scanned, unchanged in length since.
    pub fn reap<T>(&mut self, items: &mut Vec<T>) -> usize {
        let removed = self.marked.len();
        for index in self.marked.drain(..).rev() {
            debug_assert!(index < items.len(), "reap index {index} out of bounds");
            items.remove(index);
        }
        removed
    }

    /// `scan` followed by `reap`.
    pub fn tick_and_reap<T>(&mut self, items: &mut Vec<T>, visit: impl FnMut(&mut T) -> bool) -> usize {
        self.scan(items, visit);
        self.reap(items)
    }
}
