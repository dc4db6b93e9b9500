use std::iter::Rev;
use std::ops::Deref;
use std::vec::Drain;

use crate::arcwise_assert_simple;

/// A stack of reversible edits partitioned into checkpoints.
///
/// The search opens a checkpoint for every decision and pushes the prunings made by the propagator
/// after that decision. Backtracking to an earlier checkpoint hands back the edits made since, most
/// recent first, so that they can be undone.
#[derive(Clone, Debug)]
pub(crate) struct Trail<T> {
    current_checkpoint: usize,
    /// At index i is the position where the i-th checkpoint ends (exclusive) on the trail
    trail_delimiter: Vec<usize>,
    trail: Vec<T>,
}

// Implemented by hand so that `T` does not need to implement `Default`.
impl<T> Default for Trail<T> {
    fn default() -> Self {
        Trail {
            current_checkpoint: Default::default(),
            trail_delimiter: Default::default(),
            trail: Default::default(),
        }
    }
}

impl<T> Trail<T> {
    pub(crate) fn new_checkpoint(&mut self) {
        self.current_checkpoint += 1;
        self.trail_delimiter.push(self.trail.len());
    }

    pub(crate) fn get_checkpoint(&self) -> usize {
        self.current_checkpoint
    }

    /// Removes every entry pushed after `new_checkpoint` was opened, returning them in reverse
    /// order of insertion.
    pub(crate) fn synchronise(&mut self, new_checkpoint: usize) -> Rev<Drain<'_, T>> {
        arcwise_assert_simple!(new_checkpoint < self.current_checkpoint);

        let new_trail_len = self.trail_delimiter[new_checkpoint];

        self.current_checkpoint = new_checkpoint;
        self.trail_delimiter.truncate(new_checkpoint);
        self.trail.drain(new_trail_len..).rev()
    }

    /// Removes every entry, including those made before the first checkpoint, returning them in
    /// reverse order of insertion.
    pub(crate) fn clear(&mut self) -> Rev<Drain<'_, T>> {
        self.current_checkpoint = 0;
        self.trail_delimiter.clear();
        self.trail.drain(..).rev()
    }
}

impl<T> Extend<T> for Trail<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.trail.extend(iter)
    }
}

impl<T> Deref for Trail<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.trail
    }
}
